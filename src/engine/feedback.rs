use serde::{Deserialize, Serialize};

use super::draws::DrawSource;
use super::matcher::MatchRecord;
use crate::catalog::Catalog;

pub const NOTHING_GUESS: &str = "Nothing";
pub const MYSTERY_GUESS: &str = "Mystery Dish";
pub const SUGGEST_ANYTHING: &str = "anything";
pub const SUGGEST_NONE: &str = "none";
/// Unreachable in practice: a partial match always has something missing.
pub const SUGGEST_MORE: &str = "more ingredients";

const TEMPLATE_COUNT: usize = 4;

const PERFECT_CONFIDENCE: (u32, u32) = (95, 100);
const NEAR_CONFIDENCE: (u32, u32) = (70, 84);
const PARTIAL_CONFIDENCE: (u32, u32) = (40, 59);
const MYSTERY_CONFIDENCE: (u32, u32) = (15, 34);

/// Which branch produced a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    EmptySelection,
    Perfect,
    Near,
    Partial,
    Mystery,
}

/// The chef's reaction to one cook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChefFeedback {
    pub kind: FeedbackKind,
    pub best_guess: String,
    /// Chef confidence, 0-100. Unrelated to the player's running score.
    pub score: u32,
    pub suggested_ingredient: String,
    pub description: String,
}

/// Writes the chef's feedback for a ranked match list.
///
/// Branches are tried in order: empty selection, any perfect match, any near
/// match, a top match sharing at least one ingredient, and finally a mystery
/// dish with a random catalog suggestion. Randomness comes only from `draws`:
/// the mystery branch draws the suggested recipe first, then every non-empty
/// branch draws the confidence followed by the template.
pub fn chef_feedback<S, D>(
    selection: &[S],
    ranked: &[MatchRecord<'_>],
    catalog: &Catalog,
    draws: &mut D,
) -> ChefFeedback
where
    S: AsRef<str>,
    D: DrawSource + ?Sized,
{
    if selection.is_empty() {
        return ChefFeedback {
            kind: FeedbackKind::EmptySelection,
            best_guess: NOTHING_GUESS.to_string(),
            score: 0,
            suggested_ingredient: SUGGEST_ANYTHING.to_string(),
            description: "\u{1F914} You need to select some ingredients first, chef!".to_string(),
        };
    }

    let perfect: Vec<&MatchRecord<'_>> = ranked.iter().filter(|m| m.is_perfect).collect();
    if let Some(best) = perfect.first() {
        let recipes = perfect
            .iter()
            .map(|m| m.recipe.name.as_str())
            .collect::<Vec<_>>()
            .join(" or ");
        let score = draw_confidence(draws, PERFECT_CONFIDENCE);
        let description = match draws.draw_index(TEMPLATE_COUNT) {
            0 => format!("\u{1F389} Perfection! You've nailed the ingredients for {recipes}! Time to cook!"),
            1 => format!("\u{1F468}\u{200D}\u{1F373} Excellent work! That's a perfect {recipes} you've got there!"),
            2 => format!("\u{2B50} Amazing! You're a natural chef! Those ingredients make a perfect {recipes}!"),
            _ => format!("\u{1F525} Outstanding! {recipes} is exactly what those ingredients create!"),
        };
        return ChefFeedback {
            kind: FeedbackKind::Perfect,
            best_guess: best.recipe.name.clone(),
            score,
            suggested_ingredient: SUGGEST_NONE.to_string(),
            description,
        };
    }

    if let Some(near) = ranked.iter().find(|m| m.is_near) {
        let recipe = near.recipe.name.as_str();
        let missing = near.missing.first().copied().unwrap_or(SUGGEST_MORE);
        let score = draw_confidence(draws, NEAR_CONFIDENCE);
        let description = match draws.draw_index(TEMPLATE_COUNT) {
            0 => format!("\u{1F525} So close! You're just missing {missing} for a perfect {recipe}!"),
            1 => format!("\u{1F4A1} Almost there! Add {missing} and you'll have {recipe}!"),
            2 => format!("\u{1F44D} Great start! {recipe} needs just one more thing: {missing}!"),
            _ => format!("\u{1F3AF} You're one ingredient away from {recipe}! Try adding {missing}!"),
        };
        return ChefFeedback {
            kind: FeedbackKind::Near,
            best_guess: recipe.to_string(),
            score,
            suggested_ingredient: missing.to_string(),
            description,
        };
    }

    if let Some(top) = ranked.first().filter(|m| m.match_score > 0.0) {
        let recipe = top.recipe.name.as_str();
        let percent = top.match_percent();
        let missing = top.missing.first().copied().unwrap_or(SUGGEST_MORE);
        let score = draw_confidence(draws, PARTIAL_CONFIDENCE);
        let description = match draws.draw_index(TEMPLATE_COUNT) {
            0 => format!("\u{1F914} Interesting combo! It's {percent}% like {recipe}. Try adding {missing}!"),
            1 => format!("\u{1F4AD} Creative thinking! Maybe {recipe}? You'd need {missing} though."),
            2 => format!("\u{1F3A8} Experimental! This reminds me of {recipe}, but needs {missing}."),
            _ => format!("\u{1F31F} Bold choice! Close to {recipe}, missing {missing}."),
        };
        return ChefFeedback {
            kind: FeedbackKind::Partial,
            best_guess: recipe.to_string(),
            score,
            suggested_ingredient: missing.to_string(),
            description,
        };
    }

    mystery_feedback(catalog, draws)
}

fn mystery_feedback<D: DrawSource + ?Sized>(catalog: &Catalog, draws: &mut D) -> ChefFeedback {
    let suggestion = if catalog.is_empty() {
        None
    } else {
        catalog.recipes().get(draws.draw_index(catalog.len()))
    };
    let score = draw_confidence(draws, MYSTERY_CONFIDENCE);

    let unnamed = "\u{1F52C} Experimental cuisine! The ingredients don't match known recipes, but that's okay!";
    let (suggested_ingredient, description) = match suggestion {
        Some(recipe) => {
            let name = recipe.name.as_str();
            let description = match draws.draw_index(TEMPLATE_COUNT) {
                0 => format!("\u{1F3A8} Very creative! I haven't seen this combination before. Maybe try a {name}?"),
                1 => format!("\u{1F308} Unique approach! While unconventional, keep experimenting! How about {name}?"),
                2 => unnamed.to_string(),
                _ => format!("\u{1F4A1} Innovative! This is a new flavor profile. Perhaps aim for {name} next?"),
            };
            let ingredient = recipe
                .ingredients
                .first()
                .map(String::as_str)
                .unwrap_or(SUGGEST_ANYTHING);
            (ingredient.to_string(), description)
        }
        None => (SUGGEST_ANYTHING.to_string(), unnamed.to_string()),
    };

    ChefFeedback {
        kind: FeedbackKind::Mystery,
        best_guess: MYSTERY_GUESS.to_string(),
        score,
        suggested_ingredient,
        description,
    }
}

fn draw_confidence<D: DrawSource + ?Sized>(draws: &mut D, (low, high): (u32, u32)) -> u32 {
    draws.draw_inclusive(low, high)
}
