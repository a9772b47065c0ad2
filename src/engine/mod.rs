//! Matching, ranking, scoring and chef feedback.
//!
//! Every function here is pure apart from the [`DrawSource`] handed to
//! [`chef_feedback`]. The catalog is only ever borrowed, so one catalog can
//! serve any number of sessions.

pub mod draws;
pub mod feedback;
pub mod matcher;
pub mod ranker;
pub mod scoring;

pub use draws::{DrawSource, RngDraws, ScriptedDraws};
pub use feedback::{chef_feedback, ChefFeedback, FeedbackKind};
pub use matcher::{match_catalog, MatchRecord};
pub use ranker::{rank_matches, MatchBuckets, OTHER_DISPLAY_LIMIT};
pub use scoring::score_delta;

use crate::catalog::Catalog;

/// Matches the selection against every catalog recipe and ranks the result,
/// best match first.
pub fn recommend_recipes<'a, S: AsRef<str>>(selection: &[S], catalog: &'a Catalog) -> Vec<MatchRecord<'a>> {
    let mut matches = match_catalog(selection, catalog);
    rank_matches(&mut matches);
    matches
}
