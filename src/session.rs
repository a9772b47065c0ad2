use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Recipe};
use crate::engine::{chef_feedback, recommend_recipes, score_delta, ChefFeedback, DrawSource, MatchRecord};

/// Everything one cook produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CookOutcome<'a> {
    /// All catalog recipes, best match first.
    pub matches: Vec<MatchRecord<'a>>,
    pub points_earned: u32,
    /// Running score after this cook.
    pub total_score: u64,
    pub feedback: ChefFeedback,
    /// The first perfect match, if any.
    pub completed_dish: Option<&'a Recipe>,
}

/// One player's kitchen: the ingredients on the board, the running score and
/// the results of the last cook.
pub struct KitchenSession<'a, D> {
    catalog: &'a Catalog,
    selection: Vec<String>,
    score: u64,
    draws: D,
    last_outcome: Option<CookOutcome<'a>>,
}

impl<'a, D: DrawSource> KitchenSession<'a, D> {
    /// Starts a session with a previously persisted score.
    pub fn new(catalog: &'a Catalog, initial_score: u64, draws: D) -> Self {
        Self {
            catalog,
            selection: Vec::new(),
            score: initial_score,
            draws,
            last_outcome: None,
        }
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn last_outcome(&self) -> Option<&CookOutcome<'a>> {
        self.last_outcome.as_ref()
    }

    fn position(&self, ingredient: &str) -> Option<usize> {
        let key = ingredient.to_lowercase();
        self.selection
            .iter()
            .position(|selected| selected.to_lowercase() == key)
    }

    /// Puts an ingredient on the board. Returns `false` if it was already there
    /// (compared case-insensitively) or is blank.
    pub fn add(&mut self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() || self.position(ingredient).is_some() {
            return false;
        }
        self.selection.push(ingredient.to_string());
        true
    }

    /// Takes an ingredient off the board. Returns `false` if it was not there.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        match self.position(ingredient.trim()) {
            Some(idx) => {
                self.selection.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Adds the ingredient if absent, removes it if present. Returns whether it
    /// is selected afterwards.
    pub fn toggle(&mut self, ingredient: &str) -> bool {
        if self.remove(ingredient) {
            false
        } else {
            self.add(ingredient)
        }
    }

    /// Empties the board and forgets the last cook. The score is kept.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.last_outcome = None;
    }

    /// Runs the whole pipeline on the current board and adds the points to the
    /// running score. Does nothing and returns `None` when the board is empty.
    pub fn cook(&mut self) -> Option<&CookOutcome<'a>> {
        if self.selection.is_empty() {
            return None;
        }

        let matches = recommend_recipes(&self.selection, self.catalog);
        let points_earned = score_delta(&matches, self.selection.len());
        self.score = self.score.saturating_add(u64::from(points_earned));
        let feedback = chef_feedback(&self.selection, &matches, self.catalog, &mut self.draws);
        let completed_dish = matches.iter().find(|m| m.is_perfect).map(|m| m.recipe);

        debug!(
            selected = self.selection.len(),
            perfect = matches.iter().filter(|m| m.is_perfect).count(),
            near = matches.iter().filter(|m| m.is_near).count(),
            points_earned,
            total = self.score,
            "cooked selection"
        );

        self.last_outcome = Some(CookOutcome {
            matches,
            points_earned,
            total_score: self.score,
            feedback,
            completed_dish,
        });
        self.last_outcome.as_ref()
    }
}
