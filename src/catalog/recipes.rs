use super::{Difficulty, Recipe};

pub(super) fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Margherita Pizza",
            ["tomato", "mozzarella", "basil", "flour", "olive oil"],
            Difficulty::Medium,
        )
        .with_tags(["italian", "vegetarian", "classic"]),
        Recipe::new(
            "Caesar Salad",
            ["lettuce", "parmesan", "croutons", "lemon", "garlic"],
            Difficulty::Easy,
        )
        .with_tags(["salad", "vegetarian", "healthy"]),
        Recipe::new(
            "Pasta Carbonara",
            ["pasta", "eggs", "bacon", "parmesan", "black pepper"],
            Difficulty::Medium,
        )
        .with_tags(["italian", "comfort food"]),
        Recipe::new(
            "Chocolate Cake",
            ["flour", "sugar", "cocoa", "eggs", "butter", "vanilla"],
            Difficulty::Hard,
        )
        .with_tags(["dessert", "baking", "sweet"]),
        Recipe::new(
            "Guacamole",
            ["avocado", "lime", "cilantro", "onion", "tomato"],
            Difficulty::Easy,
        )
        .with_tags(["mexican", "dip", "vegan", "healthy"]),
        Recipe::new(
            "Chicken Stir Fry",
            ["chicken", "soy sauce", "ginger", "garlic", "vegetables", "rice"],
            Difficulty::Medium,
        )
        .with_tags(["asian", "quick", "protein"]),
        Recipe::new(
            "Caprese Salad",
            ["tomato", "mozzarella", "basil", "olive oil", "balsamic vinegar"],
            Difficulty::Easy,
        )
        .with_tags(["italian", "vegetarian", "fresh"]),
        Recipe::new(
            "French Toast",
            ["bread", "eggs", "milk", "cinnamon", "vanilla", "butter"],
            Difficulty::Easy,
        )
        .with_tags(["breakfast", "sweet", "comfort food"]),
    ]
}
