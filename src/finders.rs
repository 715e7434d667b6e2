//! Combinatorial finders over a hand.
//!
//! Every finder is a pure function of its hand argument. Finding nothing is
//! not an error: the result is simply empty.

use alloc::vec::Vec;

use tracing::trace;

use crate::card::{Card, RANKS, Rank, SUITS};
use crate::error::FullHouseError;
use crate::hand::Hand;
use crate::options::RankOrder;

/// Returns every unordered pair of cards sharing a rank.
///
/// Ranks are visited in canonical order. Within a rank the pairs follow the
/// order of the cards in the hand.
#[must_use]
pub fn find_pairs(hand: &Hand) -> Vec<(Card, Card)> {
    let mut pairs = Vec::new();
    for rank in RANKS {
        let same = hand.by_rank(rank);
        let cards = same.cards();
        for (i, first) in cards.iter().enumerate() {
            for second in &cards[i + 1..] {
                pairs.push((*first, *second));
            }
        }
    }
    pairs
}

/// Returns the cards of each rank that has at least `minimum` cards.
#[must_use]
pub fn find_sets(hand: &Hand, minimum: usize) -> Vec<Hand> {
    RANKS
        .iter()
        .map(|&rank| hand.by_rank(rank))
        .filter(|set| !set.is_empty() && set.len() >= minimum)
        .collect()
}

/// Returns the cards of each suit that has at least `minimum` cards.
#[must_use]
pub fn find_flushes(hand: &Hand, minimum: usize) -> Vec<Hand> {
    SUITS
        .iter()
        .map(|&suit| hand.by_suit(suit))
        .filter(|flush| !flush.is_empty() && flush.len() >= minimum)
        .collect()
}

/// Returns the straights of at least `minimum` consecutive ranks, Ace high.
///
/// See [`find_straights_by`].
#[must_use]
pub fn find_straights(hand: &Hand, minimum: usize) -> Vec<Hand> {
    find_straights_by(hand, minimum, RankOrder::AceHigh)
}

/// Returns the straights of at least `minimum` consecutive ranks in `order`.
///
/// A straight is a maximal run of ranks that all have a card in the hand. When
/// a rank of the run holds several cards, one straight is produced per choice
/// of card, so `5h 5s 6c 7d` yields two straights. Straights are ordered by
/// starting rank, then by card choice with the highest rank varying fastest.
/// Cards within a straight run from low to high.
#[must_use]
pub fn find_straights_by(hand: &Hand, minimum: usize, order: RankOrder) -> Vec<Hand> {
    let mut straights = Vec::new();
    for run in rank_runs(hand, order) {
        if run.len() >= minimum {
            straights.extend(expand_run(&run));
        }
    }
    trace!(
        cards = hand.len(),
        minimum,
        straights = straights.len(),
        "found straights"
    );
    straights
}

/// Splits the hand into maximal runs of consecutive, non-empty ranks.
fn rank_runs(hand: &Hand, order: RankOrder) -> Vec<Vec<Hand>> {
    let mut runs = Vec::new();
    let mut current: Vec<Hand> = Vec::new();
    for rank in order.ranks() {
        let cards = hand.by_rank(rank);
        if cards.is_empty() {
            if !current.is_empty() {
                runs.push(core::mem::take(&mut current));
            }
        } else {
            current.push(cards);
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Builds one hand per combination of card choices along a run.
fn expand_run(run: &[Hand]) -> Vec<Hand> {
    let mut combos = alloc::vec![Hand::new()];
    for choices in run {
        let mut next = Vec::with_capacity(combos.len() * choices.len());
        for prefix in &combos {
            for card in choices {
                let mut combo = prefix.clone();
                combo.push(*card);
                next.push(combo);
            }
        }
        combos = next;
    }
    combos
}

/// Returns every full house that can be made from the hand.
///
/// For each rank with at least three cards, the first three in hand order form
/// the triple. The rest of the hand is then searched for ranks with at least
/// two cards, and the first two of each form the pair. Only one triple per
/// rank and one pair per rank are used, so four Twos and four Threes make
/// exactly two full houses. The pair is never of the same rank as the triple.
#[must_use]
pub fn find_full_houses(hand: &Hand) -> Vec<Hand> {
    let mut houses = Vec::new();
    for triple_rank in RANKS {
        let Some(triple) = first_of_rank(hand, triple_rank, 3) else {
            continue;
        };
        let rest = hand.difference(&triple);

        for pair_rank in RANKS {
            if pair_rank == triple_rank {
                continue;
            }
            if let Some(pair) = first_of_rank(&rest, pair_rank, 2) {
                let mut house = triple.clone();
                house.extend(pair);
                houses.push(house);
            }
        }
    }
    trace!(
        cards = hand.len(),
        houses = houses.len(),
        "found full houses"
    );
    houses
}

/// Returns the first `count` cards of `rank` in hand order, if there are enough.
fn first_of_rank(hand: &Hand, rank: Rank, count: usize) -> Option<Hand> {
    let same = hand.by_rank(rank);
    (same.len() >= count).then(|| same.iter().copied().take(count).collect())
}

/// Splits a full house into its triple and its pair.
///
/// # Errors
///
/// Returns [`FullHouseError::WrongSize`] if the hand does not hold five cards,
/// or [`FullHouseError::NotFullHouse`] if it is not three cards of one rank
/// and two of another.
pub fn split_full_house(hand: &Hand) -> Result<(Hand, Hand), FullHouseError> {
    if hand.len() != 5 {
        return Err(FullHouseError::WrongSize(hand.len()));
    }

    let mut triple = None;
    let mut pair = None;
    for set in find_sets(hand, 1) {
        match set.len() {
            3 => triple = Some(set),
            2 => pair = Some(set),
            _ => return Err(FullHouseError::NotFullHouse),
        }
    }

    match (triple, pair) {
        (Some(triple), Some(pair)) => Ok((triple, pair)),
        _ => Err(FullHouseError::NotFullHouse),
    }
}
