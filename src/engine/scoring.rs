use super::matcher::MatchRecord;

pub const PERFECT_MATCH_POINTS: u32 = 50;
pub const NEAR_MATCH_POINTS: u32 = 20;
pub const CREATIVE_ATTEMPT_POINTS: u32 = 10;
/// Selection size that qualifies for the creative attempt bonus.
pub const CREATIVE_ATTEMPT_MIN_INGREDIENTS: usize = 3;

/// Points earned by one cook. The caller adds this to the running total.
///
/// Each perfect match is worth [`PERFECT_MATCH_POINTS`]. Without a perfect
/// match, any near match earns [`NEAR_MATCH_POINTS`] once. Without either, a
/// selection of at least three ingredients earns [`CREATIVE_ATTEMPT_POINTS`].
pub fn score_delta(matches: &[MatchRecord<'_>], selection_size: usize) -> u32 {
    let perfect_count = matches.iter().filter(|m| m.is_perfect).count() as u32;
    if perfect_count > 0 {
        return perfect_count * PERFECT_MATCH_POINTS;
    }

    if matches.iter().any(|m| m.is_near) {
        NEAR_MATCH_POINTS
    } else if selection_size >= CREATIVE_ATTEMPT_MIN_INGREDIENTS {
        CREATIVE_ATTEMPT_POINTS
    } else {
        0
    }
}
