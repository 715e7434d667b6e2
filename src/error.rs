//! Error types for card parsing, lookups and hand operations.

use thiserror::Error;

/// Errors that can occur when parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Card codes are exactly two characters.
    #[error("card code should be two characters, got {0}")]
    WrongLength(usize),
    /// The rank character is not a known rank.
    #[error("bad rank: {0:?}")]
    BadRank(char),
    /// The suit character is not a known suit.
    #[error("bad suit: {0:?}")]
    BadSuit(char),
}

/// Errors that can occur when looking up a rank or suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No rank has this character code.
    #[error("unknown rank {0:?}")]
    UnknownRank(char),
    /// No suit has this character code.
    #[error("unknown suit {0:?}")]
    UnknownSuit(char),
    /// Rank index outside the canonical ranks.
    #[error("rank index {0} out of range")]
    RankIndex(usize),
    /// Suit index outside the canonical suits.
    #[error("suit index {0} out of range")]
    SuitIndex(usize),
}

/// Errors that can occur when dealing from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the hand.
    #[error("not enough cards in hand: requested {requested}, available {available}")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards in the hand.
        available: usize,
    },
}

/// Errors that can occur when splitting a full house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FullHouseError {
    /// A full house has exactly five cards.
    #[error("full house should have 5 cards, got {0}")]
    WrongSize(usize),
    /// The cards are not three of one rank and two of another.
    #[error("hand is not three of one rank and two of another")]
    NotFullHouse,
}
