//! Cribbage hand scoring.

use tracing::debug;

use crate::card::{Card, RANKS, Rank};
use crate::hand::Hand;
use crate::options::{RankOrder, ScoreOptions};
use crate::result::CribbageScore;

const FIFTEEN: usize = 15;

/// Returns the counting value of a card: Ace is 1, face cards are 10.
#[must_use]
pub const fn value(card: &Card) -> u64 {
    match card.rank {
        Rank::Ace => 1,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        rank => rank.index() as u64 + 2,
    }
}

/// Scores two points for every combination of cards adding up to fifteen.
///
/// Combinations of any size count. The count is kept per partial sum and sums
/// over fifteen are dropped, so a whole deck is scored in linear time.
/// Counts are exact for hands of up to 150 decks and saturate beyond.
#[must_use]
pub fn score_fifteens(hand: &Hand) -> u128 {
    // ways[s] is the number of subsets seen so far summing to s.
    let mut ways = [0_u128; FIFTEEN + 1];
    ways[0] = 1;
    for card in hand {
        let v = value(card) as usize;
        for sum in (v..=FIFTEEN).rev() {
            ways[sum] = ways[sum].saturating_add(ways[sum - v]);
        }
    }
    ways[FIFTEEN].saturating_mul(2)
}

/// Scores two points for every pair of cards sharing a rank.
#[must_use]
pub fn score_pairs(hand: &Hand) -> u128 {
    RANKS
        .iter()
        .map(|&rank| {
            let same = hand.by_rank(rank).len() as u128;
            same * same.saturating_sub(1)
        })
        .sum()
}

/// Scores runs of three or more consecutive ranks, Ace low.
///
/// See [`score_runs_by`].
#[must_use]
pub fn score_runs(hand: &Hand) -> u128 {
    score_runs_by(hand, RankOrder::AceLow)
}

/// Scores runs of three or more consecutive ranks in `order`.
///
/// Each maximal run scores its length times the number of ways to pick one
/// card per rank, so `3h 3s 4c 5d` scores two runs of three. Like
/// [`score_fifteens`], the score is exact up to 150 decks.
#[must_use]
pub fn score_runs_by(hand: &Hand, order: RankOrder) -> u128 {
    let counts = order.ranks().map(|rank| hand.by_rank(rank).len() as u128);
    counts
        .split(|&count| count == 0)
        .filter(|run| run.len() >= 3)
        .map(|run| {
            run.iter()
                .fold(run.len() as u128, |ways, &count| ways.saturating_mul(count))
        })
        .fold(0, u128::saturating_add)
}

/// Returns whether every card shares the suit of the first card.
///
/// An empty hand is not a flush.
#[must_use]
pub fn check_flush(hand: &Hand) -> bool {
    hand.cards()
        .first()
        .is_some_and(|first| hand.iter().all(|c| c.suit == first.suit))
}

/// Scores a cribbage hand.
///
/// The turned card, if any, counts towards fifteens, pairs and runs. Flushes
/// are checked on the hand alone: a flush matching the turned card scores one
/// extra point, and a crib only scores a flush that matches the turned card.
/// Heels and nobs need a turned card.
///
/// # Example
///
/// ```
/// use cardkit::{Hand, ScoreOptions, cribbage};
///
/// let hand: Hand = "5c 5d 5h Js".parse().unwrap();
/// let turned = "5s".parse().unwrap();
/// let score = cribbage::score_hand(&hand, &ScoreOptions::default().with_turned(turned));
/// assert_eq!(score.total(), 29);
/// ```
#[must_use]
pub fn score_hand(hand: &Hand, options: &ScoreOptions) -> CribbageScore {
    let mut counted = hand.clone();
    if let Some(turned) = options.turned {
        counted.push(turned);
    }

    let mut score = CribbageScore {
        fifteens: score_fifteens(&counted),
        pairs: score_pairs(&counted),
        runs: score_runs_by(&counted, options.rank_order),
        ..CribbageScore::default()
    };

    if check_flush(hand) {
        let suit_matches = options
            .turned
            .zip(hand.cards().first())
            .is_some_and(|(turned, first)| turned.suit == first.suit);
        if suit_matches {
            score.flush = hand.len() as u128 + 1;
        } else if options.turned.is_none() || !options.crib {
            score.flush = hand.len() as u128;
        }
    }

    if let Some(turned) = options.turned {
        if options.dealer && turned.rank == Rank::Jack {
            score.heels = 2;
        } else if hand.contains(&Card::new(Rank::Jack, turned.suit)) {
            score.nobs = 1;
        }
    }

    debug!(
        cards = hand.len(),
        turned = ?options.turned,
        crib = options.crib,
        dealer = options.dealer,
        total = score.total(),
        "scored cribbage hand"
    );
    score
}
