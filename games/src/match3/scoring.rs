use super::types::Match;

/// Points for one cascade step. Matches are summed exactly as the detector
/// reports them, so a cell shared by a horizontal and a vertical run counts
/// toward both. From the second cascade step on, the sum is boosted by
/// `combo_multiplier` per extra step and truncated down to a whole number.
pub fn calculate_score(
    matches: &[Match],
    combo_level: u32,
    points_per_tile: u32,
    combo_multiplier: f64,
) -> u32 {
    let base: u32 = matches
        .iter()
        .map(|m| m.size() as u32 * points_per_tile)
        .sum();

    if combo_level > 1 {
        (f64::from(base) * combo_multiplier.powi(combo_level as i32 - 1)).floor() as u32
    } else {
        base
    }
}
