//! Poker hand comparison and selection of the best candidate hands.

use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::debug;

use crate::card::Rank;
use crate::finders::{find_flushes, find_full_houses, find_sets, find_straights};
use crate::hand::Hand;

/// Compares two hands, longer first, then by highest ranks.
///
/// Hands of equal length are compared by their ranks sorted from highest to
/// lowest, so the hand with the better top card wins, then the better second
/// card, and so on. Suits and card order are ignored: two hands are equal
/// when they hold the same ranks.
#[must_use]
pub fn longer_stronger(a: &Hand, b: &Hand) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| ranks_descending(a).cmp(&ranks_descending(b)))
}

fn ranks_descending(hand: &Hand) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = hand.iter().map(|c| c.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Sort key ordering hands with [`longer_stronger`].
///
/// ```
/// use cardkit::{Hand, poker::LongerStronger};
///
/// let low: Hand = "2s 3s 4s".parse().unwrap();
/// let high: Hand = "Ac Kc".parse().unwrap();
/// let best = [&low, &high]
///     .into_iter()
///     .max_by_key(|&h| LongerStronger(h))
///     .unwrap();
/// assert_eq!(best, &low);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LongerStronger<'a>(pub &'a Hand);

impl PartialEq for LongerStronger<'_> {
    fn eq(&self, other: &Self) -> bool {
        longer_stronger(self.0, other.0) == Ordering::Equal
    }
}

impl Eq for LongerStronger<'_> {}

impl PartialOrd for LongerStronger<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LongerStronger<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        longer_stronger(self.0, other.0)
    }
}

/// Keeps every candidate tied with the maximum under `cmp`, in order.
fn all_best(candidates: Vec<Hand>, cmp: impl Fn(&Hand, &Hand) -> Ordering) -> Vec<Hand> {
    let Some(best) = candidates.iter().max_by(|a, b| cmp(a, b)).cloned() else {
        return Vec::new();
    };
    candidates
        .into_iter()
        .filter(|hand| cmp(hand, &best) == Ordering::Equal)
        .collect()
}

fn first_rank(hand: &Hand) -> Option<Rank> {
    hand.cards().first().map(|c| c.rank)
}

/// Returns the best sets of same-rank cards.
///
/// With `length`, only sets of exactly that many cards are considered;
/// otherwise sets of two to four cards. Larger sets beat smaller ones and
/// higher ranks beat lower ones.
#[must_use]
pub fn best_sets(hand: &Hand, length: Option<usize>) -> Vec<Hand> {
    let sets: Vec<Hand> = find_sets(hand, 2)
        .into_iter()
        .filter(|set| length.map_or((2..=4).contains(&set.len()), |n| set.len() == n))
        .collect();

    let best = all_best(sets, |a, b| {
        a.len()
            .cmp(&b.len())
            .then_with(|| first_rank(a).cmp(&first_rank(b)))
    });
    debug!(cards = hand.len(), ?length, best = best.len(), "selected best sets");
    best
}

/// Returns the best flushes, tied under [`longer_stronger`], in suit order.
#[must_use]
pub fn best_flushes(hand: &Hand) -> Vec<Hand> {
    let best = all_best(find_flushes(hand, 1), longer_stronger);
    debug!(cards = hand.len(), best = best.len(), "selected best flushes");
    best
}

/// Returns the best straights of five or more cards.
#[must_use]
pub fn best_straights(hand: &Hand) -> Vec<Hand> {
    let best = all_best(find_straights(hand, 5), longer_stronger);
    debug!(cards = hand.len(), best = best.len(), "selected best straights");
    best
}

/// Returns every straight of five or more cards that is also all one suit.
#[must_use]
pub fn find_straight_flushes(hand: &Hand) -> Vec<Hand> {
    find_flushes(hand, 5)
        .iter()
        .flat_map(|flush| find_straights(flush, 5))
        .collect()
}

/// Returns the best straight flushes, tied under [`longer_stronger`].
#[must_use]
pub fn best_straight_flushes(hand: &Hand) -> Vec<Hand> {
    all_best(find_straight_flushes(hand), longer_stronger)
}

/// Returns the best full houses: highest triple, then highest pair.
#[must_use]
pub fn best_full_houses(hand: &Hand) -> Vec<Hand> {
    // Full houses are built as triple then pair.
    let key = |house: &Hand| (first_rank(house), house.get(3).map(|c| c.rank));
    let best = all_best(find_full_houses(hand), |a, b| key(a).cmp(&key(b)));
    debug!(cards = hand.len(), best = best.len(), "selected best full houses");
    best
}
