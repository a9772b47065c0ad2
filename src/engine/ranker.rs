use std::cmp::Ordering;

use super::matcher::MatchRecord;

/// How many "other" matches a results view shows.
pub const OTHER_DISPLAY_LIMIT: usize = 3;

/// Sorts matches by score, best first. The sort is stable, so equal scores
/// keep their incoming (catalog) order.
pub fn rank_matches(matches: &mut [MatchRecord<'_>]) {
    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// Display grouping of a ranked match list. Every bucket keeps rank order.
#[derive(Debug, Default)]
pub struct MatchBuckets<'m, 'a> {
    pub perfect: Vec<&'m MatchRecord<'a>>,
    pub near: Vec<&'m MatchRecord<'a>>,
    /// Neither perfect nor near, but sharing at least one ingredient.
    /// Capped at [`OTHER_DISPLAY_LIMIT`].
    pub other: Vec<&'m MatchRecord<'a>>,
}

impl<'m, 'a> MatchBuckets<'m, 'a> {
    pub fn from_ranked(ranked: &'m [MatchRecord<'a>]) -> Self {
        let mut buckets = Self {
            perfect: Vec::new(),
            near: Vec::new(),
            other: Vec::new(),
        };
        for record in ranked {
            if record.is_perfect {
                buckets.perfect.push(record);
            } else if record.is_near {
                buckets.near.push(record);
            } else if record.match_score > 0.0 && buckets.other.len() < OTHER_DISPLAY_LIMIT {
                buckets.other.push(record);
            }
        }
        buckets
    }

    pub fn is_empty(&self) -> bool {
        self.perfect.is_empty() && self.near.is_empty() && self.other.is_empty()
    }
}
