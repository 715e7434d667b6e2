//! Ordered card container used for hands and decks.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
use crate::error::{DealError, ParseCardError};

/// An ordered collection of cards.
///
/// Cards keep their insertion order and duplicates are allowed, so a `Hand`
/// can hold several decks at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in insertion order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a full 52 card deck, suit by suit and Two to Ace within a suit.
    #[must_use]
    pub fn deck() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a full deck shuffled with the given seed.
    ///
    /// The same seed always yields the same order.
    #[must_use]
    pub fn shuffled_deck(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::deck();
        deck.shuffle(&mut rng);
        deck
    }

    /// Adds a card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the last card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes the first occurrence of `card`. Returns whether it was present.
    pub fn remove(&mut self, card: &Card) -> bool {
        if let Some(index) = self.cards.iter().position(|c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns all cards of `rank`, without removing them.
    #[must_use]
    pub fn by_rank(&self, rank: Rank) -> Self {
        self.filter(|c| c.rank == rank)
    }

    /// Returns all cards of `suit`, without removing them.
    #[must_use]
    pub fn by_suit(&self, suit: Suit) -> Self {
        self.filter(|c| c.suit == suit)
    }

    fn filter(&self, predicate: impl Fn(&Card) -> bool) -> Self {
        self.cards.iter().copied().filter(predicate).collect()
    }

    /// Shuffles the hand in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the last `count` cards and returns them in their original order.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand holds fewer than `count` cards. The hand
    /// is left untouched in that case.
    pub fn deal(&mut self, count: usize) -> Result<Self, DealError> {
        let available = self.cards.len();
        if count > available {
            return Err(DealError::NotEnoughCards {
                requested: count,
                available,
            });
        }

        let dealt = self.cards.split_off(available - count);
        Ok(Self { cards: dealt })
    }

    /// Returns a copy of this hand with one occurrence of every card in
    /// `other` removed.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut rest = self.clone();
        for card in other {
            rest.remove(card);
        }
        rest
    }

    /// Returns a copy of this hand sorted by rank, then suit.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.sort_unstable();
        Self { cards }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromStr for Hand {
    type Err = ParseCardError;

    /// Parses whitespace separated card codes, e.g. `"As Td 5c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Card>).collect()
    }
}

impl fmt::Display for Hand {
    /// Groups cards by suit, spades first, highest rank first within a suit:
    /// `"AKs Th 5c"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for suit in SUITS.iter().rev() {
            let mut ranks: Vec<Rank> = self
                .cards
                .iter()
                .filter(|c| c.suit == *suit)
                .map(|c| c.rank)
                .collect();
            if ranks.is_empty() {
                continue;
            }
            ranks.sort_unstable_by(|a, b| b.cmp(a));

            if !first {
                f.write_str(" ")?;
            }
            first = false;
            for rank in ranks {
                write!(f, "{}", rank.short())?;
            }
            write!(f, "{}", suit.short())?;
        }
        Ok(())
    }
}
