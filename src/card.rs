//! Card types, canonical orderings and card parsing.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::{LookupError, ParseCardError};

/// Card rank.
///
/// Variants are declared in canonical order, so the derived ordering is the
/// position in [`RANKS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// T
    Ten,
    /// J
    Jack,
    /// Q
    Queen,
    /// K
    King,
    /// A
    Ace,
}

/// All ranks in canonical order.
pub const RANKS: [Rank; 13] = [
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
    Rank::Ace,
];

impl Rank {
    /// Returns the index of this rank in [`RANKS`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank at `index` in [`RANKS`].
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::RankIndex`] if `index` is 13 or more.
    pub const fn from_index(index: usize) -> Result<Self, LookupError> {
        if index < RANKS.len() {
            Ok(RANKS[index])
        } else {
            Err(LookupError::RankIndex(index))
        }
    }

    /// Returns the single character code of this rank.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Looks up a rank by its character code. Letters are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownRank`] for any other character.
    pub const fn from_short(c: char) -> Result<Self, LookupError> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            'A' => Ok(Self::Ace),
            _ => Err(LookupError::UnknownRank(c)),
        }
    }

    /// Returns the display name of this rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns the plural display name of this rank.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Two => "Twos",
            Self::Three => "Threes",
            Self::Four => "Fours",
            Self::Five => "Fives",
            Self::Six => "Sixes",
            Self::Seven => "Sevens",
            Self::Eight => "Eights",
            Self::Nine => "Nines",
            Self::Ten => "Tens",
            Self::Jack => "Jacks",
            Self::Queen => "Queens",
            Self::King => "Kings",
            Self::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

/// All suits in canonical order.
pub const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Returns the index of this suit in [`SUITS`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the suit at `index` in [`SUITS`].
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::SuitIndex`] if `index` is 4 or more.
    pub const fn from_index(index: usize) -> Result<Self, LookupError> {
        if index < SUITS.len() {
            Ok(SUITS[index])
        } else {
            Err(LookupError::SuitIndex(index))
        }
    }

    /// Returns the lowercase character code of this suit.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }

    /// Looks up a suit by its character code, in either case.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownSuit`] for any other character.
    pub const fn from_short(c: char) -> Result<Self, LookupError> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Self::Club),
            'd' => Ok(Self::Diamond),
            'h' => Ok(Self::Heart),
            's' => Ok(Self::Spade),
            _ => Err(LookupError::UnknownSuit(c)),
        }
    }

    /// Returns the display name of this suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::Diamond => "Diamond",
            Self::Heart => "Heart",
            Self::Spade => "Spade",
        }
    }

    /// Returns the plural display name of this suit.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Club => "Clubs",
            Self::Diamond => "Diamonds",
            Self::Heart => "Hearts",
            Self::Spade => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards order by rank first, then by suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the two character code of the card, e.g. `"As"`.
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.short())
    }

    /// Returns the full name of the card, e.g. `"Ace of Spades"`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.plural())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.short(), self.suit.short())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a two character card code such as `"Td"` or `"as"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::WrongLength(s.chars().count()));
        };

        let rank = Rank::from_short(rank).map_err(|_| ParseCardError::BadRank(rank))?;
        let suit = Suit::from_short(suit).map_err(|_| ParseCardError::BadSuit(suit))?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();
