use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{Catalog, Recipe};

/// How a single recipe lines up against the current selection.
///
/// `have` and `missing` partition `recipe.ingredients`, each keeping the
/// recipe's order and casing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord<'a> {
    pub recipe: &'a Recipe,
    pub have: Vec<&'a str>,
    pub missing: Vec<&'a str>,
    /// Fraction of the recipe's ingredients present in the selection, in `[0, 1]`.
    pub match_score: f64,
    pub is_perfect: bool,
    pub is_near: bool,
}

impl<'a> MatchRecord<'a> {
    fn compute(recipe: &'a Recipe, selection: &SelectionKeys) -> Self {
        let (have, missing): (Vec<&str>, Vec<&str>) = recipe
            .ingredients
            .iter()
            .map(String::as_str)
            .partition(|ingredient| selection.contains(ingredient));

        let match_score = if recipe.ingredients.is_empty() {
            0.0
        } else {
            have.len() as f64 / recipe.ingredients.len() as f64
        };

        let is_perfect = missing.is_empty() && !have.is_empty();
        let is_near = missing.len() == 1 && !have.is_empty();

        Self {
            recipe,
            have,
            missing,
            match_score,
            is_perfect,
            is_near,
        }
    }

    /// Match score as a rounded percentage, e.g. `0.8` -> `80`.
    pub fn match_percent(&self) -> u32 {
        (self.match_score * 100.0).round() as u32
    }
}

/// Lowercased comparison keys for a selection, built once per call.
struct SelectionKeys {
    keys: HashSet<String>,
}

impl SelectionKeys {
    fn new<S: AsRef<str>>(selection: &[S]) -> Self {
        Self {
            keys: selection.iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }

    fn contains(&self, ingredient: &str) -> bool {
        self.keys.contains(&ingredient.to_lowercase())
    }
}

/// Computes one [`MatchRecord`] per catalog recipe, in catalog order, with no filtering.
pub fn match_catalog<'a, S: AsRef<str>>(selection: &[S], catalog: &'a Catalog) -> Vec<MatchRecord<'a>> {
    let keys = SelectionKeys::new(selection);
    catalog
        .recipes()
        .iter()
        .map(|recipe| MatchRecord::compute(recipe, &keys))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Difficulty;

    fn pizza_catalog() -> Catalog {
        Catalog::new(vec![Recipe::new(
            "Margherita Pizza",
            ["tomato", "mozzarella", "basil", "flour", "olive oil"],
            Difficulty::Medium,
        )])
    }

    #[test]
    fn test_perfect_match() {
        let catalog = pizza_catalog();
        let selection = ["tomato", "mozzarella", "basil", "flour", "olive oil"];
        let matches = match_catalog(&selection, &catalog);

        assert_eq!(matches.len(), 1);
        let record = &matches[0];
        assert!(record.is_perfect);
        assert!(!record.is_near);
        assert_eq!(record.match_score, 1.0);
        assert!(record.missing.is_empty());
        assert_eq!(record.have.len(), 5);
    }

    #[test]
    fn test_near_match() {
        let catalog = pizza_catalog();
        let selection = ["tomato", "mozzarella", "basil", "flour"];
        let record = &match_catalog(&selection, &catalog)[0];

        assert!(record.is_near);
        assert!(!record.is_perfect);
        assert!((record.match_score - 0.8).abs() < f64::EPSILON);
        assert_eq!(record.missing, vec!["olive oil"]);
        assert_eq!(record.match_percent(), 80);
    }

    #[test]
    fn test_case_insensitive_keeps_recipe_casing() {
        let catalog = Catalog::new(vec![Recipe::new(
            "Toast",
            ["Bread", "BUTTER", "jam"],
            Difficulty::Easy,
        )]);
        let selection = ["bread", "Butter"];
        let record = &match_catalog(&selection, &catalog)[0];

        assert_eq!(record.have, vec!["Bread", "BUTTER"]);
        assert_eq!(record.missing, vec!["jam"]);
        assert!(record.is_near);
    }

    #[test]
    fn test_partition_preserves_recipe_order() {
        let catalog = Catalog::builtin();
        let selection = ["eggs", "vanilla", "flour", "garlic", "rice"];
        for record in match_catalog(&selection, &catalog) {
            let mut rebuilt: Vec<&str> = record
                .recipe
                .ingredients
                .iter()
                .map(String::as_str)
                .filter(|i| record.have.contains(i) || record.missing.contains(i))
                .collect();
            assert_eq!(rebuilt.len(), record.recipe.ingredients.len());
            assert_eq!(record.have.len() + record.missing.len(), record.recipe.ingredients.len());

            // have and missing are each subsequences of the recipe list
            let have_in_order: Vec<&str> = rebuilt
                .iter()
                .copied()
                .filter(|i| record.have.contains(i))
                .collect();
            assert_eq!(have_in_order, record.have);
            rebuilt.retain(|i| record.missing.contains(i));
            assert_eq!(rebuilt, record.missing);

            assert!(!(record.is_perfect && record.is_near));
            assert!((0.0..=1.0).contains(&record.match_score));
            assert_eq!(record.match_score == 1.0, record.is_perfect);
        }
    }

    #[test]
    fn test_empty_selection() {
        let catalog = Catalog::builtin();
        let selection: [&str; 0] = [];
        let matches = match_catalog(&selection, &catalog);

        assert_eq!(matches.len(), catalog.len());
        for record in matches {
            assert!(record.have.is_empty());
            assert_eq!(record.match_score, 0.0);
            assert!(!record.is_perfect && !record.is_near);
        }
    }

    #[test]
    fn test_recipe_without_ingredients_scores_zero() {
        let catalog = Catalog::new(vec![Recipe::new("Air", Vec::<String>::new(), Difficulty::Easy)]);
        let record = &match_catalog(&["water"], &catalog)[0];
        assert_eq!(record.match_score, 0.0);
        assert!(!record.is_perfect);
        assert!(!record.is_near);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let catalog = Catalog::builtin();
        let selection = vec!["tomato".to_string(), "basil".to_string()];
        assert_eq!(match_catalog(&selection, &catalog), match_catalog(&selection, &catalog));
    }
}
