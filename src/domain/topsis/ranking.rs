//! Competition ("min") ranking of scores.

/// Assigns competition ranks to scores, highest score first.
///
/// Equal scores share the better rank and the following rank is skipped,
/// so scores `[0.9, 0.9, 0.4]` rank `[1, 1, 3]`. Equality is exact; the
/// caller guarantees no NaN.
pub fn competition_ranks(scores: &[f64]) -> Vec<u32> {
    scores
        .iter()
        .map(|score| 1 + scores.iter().filter(|other| *other > score).count() as u32)
        .collect()
}
