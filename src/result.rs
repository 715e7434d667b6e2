//! Score breakdown types.

/// Points scored by a cribbage hand, by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CribbageScore {
    /// Two points per combination of cards adding up to fifteen.
    pub fifteens: u128,
    /// Two points per pair of cards sharing a rank.
    pub pairs: u128,
    /// One point per card in each run of three or more, for every combination.
    pub runs: u128,
    /// One point per card when the hand is all one suit.
    pub flush: u128,
    /// Two points for the dealer when the turned card is a Jack.
    pub heels: u128,
    /// One point for holding the Jack of the turned card's suit.
    pub nobs: u128,
}

impl CribbageScore {
    /// Returns the sum of all categories, saturating at `u128::MAX`.
    #[must_use]
    pub const fn total(&self) -> u128 {
        self.fifteens
            .saturating_add(self.pairs)
            .saturating_add(self.runs)
            .saturating_add(self.flush)
            .saturating_add(self.heels)
            .saturating_add(self.nobs)
    }
}
