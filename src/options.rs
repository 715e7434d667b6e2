//! Rank ordering and scoring options.

use crate::card::{Card, RANKS, Rank};

/// Precedence of ranks used when looking for consecutive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankOrder {
    /// Two low, Ace high. This is the canonical [`RANKS`] order.
    #[default]
    AceHigh,
    /// Ace low, King high, as counted in cribbage.
    AceLow,
}

const ACE_LOW: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl RankOrder {
    /// Returns all ranks, lowest first.
    #[must_use]
    pub const fn ranks(self) -> [Rank; 13] {
        match self {
            Self::AceHigh => RANKS,
            Self::AceLow => ACE_LOW,
        }
    }

    /// Returns the position of `rank` in this order.
    #[must_use]
    pub const fn position(self, rank: Rank) -> usize {
        match (self, rank) {
            (Self::AceLow, Rank::Ace) => 0,
            (Self::AceLow, _) => rank.index() + 1,
            (Self::AceHigh, _) => rank.index(),
        }
    }
}

/// Options for scoring a cribbage hand.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardkit::{Card, Rank, ScoreOptions, Suit};
///
/// let options = ScoreOptions::default()
///     .with_turned(Card::new(Rank::Five, Suit::Heart))
///     .with_crib(true)
///     .with_dealer(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreOptions {
    /// The turned (starter) card, counted with the hand when present.
    pub turned: Option<Card>,
    /// Whether the hand is the crib. Crib flushes must include the turned card.
    pub crib: bool,
    /// Whether the hand belongs to the dealer. Only the dealer scores heels.
    pub dealer: bool,
    /// Rank precedence used to find runs.
    pub rank_order: RankOrder,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            turned: None,
            crib: false,
            dealer: false,
            rank_order: RankOrder::AceLow,
        }
    }
}

impl ScoreOptions {
    /// Sets the turned card.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::{Card, Rank, ScoreOptions, Suit};
    ///
    /// let jack = Card::new(Rank::Jack, Suit::Club);
    /// let options = ScoreOptions::default().with_turned(jack);
    /// assert_eq!(options.turned, Some(jack));
    /// ```
    #[must_use]
    pub const fn with_turned(mut self, turned: Card) -> Self {
        self.turned = Some(turned);
        self
    }

    /// Sets whether the hand is scored as the crib.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::ScoreOptions;
    ///
    /// let options = ScoreOptions::default().with_crib(true);
    /// assert!(options.crib);
    /// ```
    #[must_use]
    pub const fn with_crib(mut self, crib: bool) -> Self {
        self.crib = crib;
        self
    }

    /// Sets whether the hand is scored as the dealer's.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::ScoreOptions;
    ///
    /// let options = ScoreOptions::default().with_dealer(true);
    /// assert!(options.dealer);
    /// ```
    #[must_use]
    pub const fn with_dealer(mut self, dealer: bool) -> Self {
        self.dealer = dealer;
        self
    }

    /// Sets the rank precedence used for runs.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::{RankOrder, ScoreOptions};
    ///
    /// let options = ScoreOptions::default().with_rank_order(RankOrder::AceHigh);
    /// assert_eq!(options.rank_order, RankOrder::AceHigh);
    /// ```
    #[must_use]
    pub const fn with_rank_order(mut self, order: RankOrder) -> Self {
        self.rank_order = order;
        self
    }
}
