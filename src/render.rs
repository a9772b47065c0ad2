use std::fmt;

use crate::catalog::{Catalog, Recipe};
use crate::engine::{MatchBuckets, MatchRecord};
use crate::session::CookOutcome;

fn write_match(f: &mut fmt::Formatter<'_>, record: &MatchRecord<'_>) -> fmt::Result {
    let recipe = record.recipe;
    writeln!(
        f,
        "  - {} [{} {}] {}% match",
        recipe.name,
        recipe.difficulty.stars(),
        recipe.difficulty,
        record.match_percent()
    )?;
    if !record.have.is_empty() {
        writeln!(f, "      have:    {}", record.have.join(", "))?;
    }
    if !record.missing.is_empty() {
        writeln!(f, "      missing: {}", record.missing.join(", "))?;
    }
    Ok(())
}

fn write_bucket(f: &mut fmt::Formatter<'_>, title: &str, records: &[&MatchRecord<'_>]) -> fmt::Result {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}", title)?;
    for record in records {
        write_match(f, record)?;
    }
    Ok(())
}

/// Plain-text report of one cook: grouped matches, chef feedback and score.
pub struct OutcomeReport<'o, 'a> {
    selection: &'o [String],
    outcome: &'o CookOutcome<'a>,
}

impl<'o, 'a> OutcomeReport<'o, 'a> {
    pub fn new(selection: &'o [String], outcome: &'o CookOutcome<'a>) -> Self {
        Self { selection, outcome }
    }
}

impl fmt::Display for OutcomeReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "On the board: {}", self.selection.join(", "))?;
        writeln!(f)?;

        let buckets = MatchBuckets::from_ranked(&self.outcome.matches);
        if buckets.is_empty() {
            writeln!(f, "No recipe shares an ingredient with this board.")?;
        } else {
            write_bucket(f, "Perfect matches - you can cook now!", &buckets.perfect)?;
            write_bucket(f, "Almost there - just one more!", &buckets.near)?;
            write_bucket(f, "Other possibilities", &buckets.other)?;
        }
        writeln!(f)?;

        let feedback = &self.outcome.feedback;
        writeln!(f, "Chef says: {}", feedback.description)?;
        writeln!(
            f,
            "  best guess: {} (confidence {}), try adding: {}",
            feedback.best_guess, feedback.score, feedback.suggested_ingredient
        )?;
        if let Some(dish) = self.outcome.completed_dish {
            writeln!(f, "Dish completed: {}", dish.name)?;
        }
        writeln!(
            f,
            "Points earned: +{}  Total score: {}",
            self.outcome.points_earned, self.outcome.total_score
        )
    }
}

/// One recipe with its difficulty, ingredients and tags.
pub struct RecipeCard<'r>(pub &'r Recipe);

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;
        writeln!(
            f,
            "{} [{} {}]: {}",
            recipe.name,
            recipe.difficulty.stars(),
            recipe.difficulty,
            recipe.ingredients.join(", ")
        )?;
        if !recipe.tags.is_empty() {
            writeln!(f, "    tags: {}", recipe.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Every recipe in the catalog, in declaration order.
pub struct RecipeList<'c>(pub &'c Catalog);

impl fmt::Display for RecipeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for recipe in self.0.recipes() {
            write!(f, "{}", RecipeCard(recipe))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedDraws;
    use crate::session::KitchenSession;

    #[test]
    fn test_render_near_outcome() {
        let catalog = Catalog::builtin();
        let mut kitchen = KitchenSession::new(&catalog, 0, ScriptedDraws::default());
        for ingredient in ["tomato", "mozzarella", "basil", "flour"] {
            kitchen.add(ingredient);
        }
        let selection = kitchen.selection().to_vec();
        let outcome = kitchen.cook().unwrap();
        let text = OutcomeReport::new(&selection, outcome).to_string();

        assert!(text.contains("On the board: tomato, mozzarella, basil, flour"));
        assert!(text.contains("Almost there"));
        assert!(text.contains("Margherita Pizza [** Medium] 80% match"));
        assert!(text.contains("missing: olive oil"));
        assert!(!text.contains("Perfect matches"));
        assert!(text.contains("Points earned: +20  Total score: 20"));
    }

    #[test]
    fn test_render_recipes_lists_catalog() {
        let catalog = Catalog::builtin();
        let text = RecipeList(&catalog).to_string();
        assert_eq!(text.lines().filter(|l| !l.starts_with("    ")).count(), 8);
        assert!(text.contains("Chocolate Cake [*** Hard]: flour, sugar, cocoa, eggs, butter, vanilla"));
    }

    #[test]
    fn test_recipe_card_from_lookup() {
        let catalog = Catalog::builtin();
        let card = catalog.find("caesar salad").map(|r| RecipeCard(r).to_string());
        assert_eq!(
            card.as_deref(),
            Some("Caesar Salad [* Easy]: lettuce, parmesan, croutons, lemon, garlic\n    tags: salad, vegetarian, healthy\n")
        );
        assert!(catalog.find("Ramen").is_none());
    }
}
