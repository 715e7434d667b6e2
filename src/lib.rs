//! Playing card, hand and deck types with optional `no_std` support.
//!
//! The crate provides [`Card`] and [`Hand`] types, combinatorial finders for
//! pairs, sets, flushes, straights and full houses, a cribbage scorer and
//! poker hand selection.
//!
//! # Example
//!
//! ```
//! use cardkit::{Hand, ScoreOptions, cribbage};
//!
//! let mut deck = Hand::deck();
//! let hand = deck.deal(4).unwrap();
//! assert_eq!(hand.to_string(), "AKQJs");
//!
//! let mut options = ScoreOptions::default().with_dealer(true);
//! options.turned = deck.pop();
//! let score = cribbage::score_hand(&hand, &options);
//! // A run of four from Ten to King, a five card flush and nobs.
//! assert_eq!((score.runs, score.flush, score.nobs), (4, 5, 1));
//! assert_eq!(score.total(), 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cribbage;
pub mod error;
pub mod finders;
pub mod hand;
pub mod options;
pub mod poker;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use error::{DealError, FullHouseError, LookupError, ParseCardError};
pub use finders::{
    find_flushes, find_full_houses, find_pairs, find_sets, find_straights, find_straights_by,
    split_full_house,
};
pub use hand::Hand;
pub use options::{RankOrder, ScoreOptions};
pub use result::CribbageScore;
