//! Poker comparison and selection integration tests.

use core::cmp::Ordering;

use cardkit::poker::{
    LongerStronger, best_flushes, best_full_houses, best_sets, best_straight_flushes,
    best_straights, find_straight_flushes, longer_stronger,
};
use cardkit::{Hand, Rank, Suit, find_flushes};

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

fn hands(list: &[&str]) -> Vec<Hand> {
    list.iter().map(|s| hand(s)).collect()
}

struct Hands {
    deck: Hand,
    spades: Hand,
    mixed: Hand,
    aces: Hand,
    empty: Hand,
}

fn fixtures() -> Hands {
    let deck = Hand::deck();
    let spades = deck.by_suit(Suit::Spade);
    let mut mixed = spades.clone();
    mixed.extend(deck.by_suit(Suit::Club).deal(12).unwrap());
    let aces = deck.by_rank(Rank::Ace);
    Hands {
        deck,
        spades,
        mixed,
        aces,
        empty: Hand::new(),
    }
}

#[test]
fn longer_stronger_ordering() {
    assert_eq!(longer_stronger(&hand("2c 3d 4h"), &hand("As Ks")), Ordering::Greater);
    assert_eq!(longer_stronger(&hand("As Kd"), &hand("Ah Qd")), Ordering::Greater);
    assert_eq!(longer_stronger(&hand("As 2d"), &hand("Kh Qd")), Ordering::Greater);
    assert_eq!(longer_stronger(&hand("As Kd"), &hand("Kh Ac")), Ordering::Equal);
    assert_eq!(longer_stronger(&hand("9s 9d 2c"), &hand("9h 8d 7c")), Ordering::Greater);
    assert_eq!(longer_stronger(&Hand::new(), &Hand::new()), Ordering::Equal);

    assert_eq!(LongerStronger(&hand("Kd As")), LongerStronger(&hand("Ah Kc")));
    assert!(LongerStronger(&hand("Kd Qs")) < LongerStronger(&hand("Ah 2c")));
}

#[test]
fn best_sets_per_fixture() {
    let h = fixtures();
    assert_eq!(best_sets(&h.deck, None), vec![h.aces.clone()]);
    assert!(best_sets(&h.spades, None).is_empty());
    assert_eq!(best_sets(&h.mixed, None), hands(&["As Ac"]));
    assert_eq!(best_sets(&h.aces, None), vec![h.aces.clone()]);
    assert!(best_sets(&h.empty, None).is_empty());
}

#[test]
fn best_sets_of_fixed_length() {
    let h = hand("Kc 7s Kd 7c Kh 2d 2h");
    assert_eq!(best_sets(&h, None), hands(&["Kc Kd Kh"]));
    assert_eq!(best_sets(&h, Some(2)), hands(&["7s 7c"]));
    assert_eq!(best_sets(&h, Some(3)), hands(&["Kc Kd Kh"]));
    assert!(best_sets(&h, Some(4)).is_empty());
    assert!(best_sets(&Hand::deck(), Some(3)).is_empty());
}

#[test_log::test]
fn best_flushes_per_fixture() {
    let h = fixtures();
    assert_eq!(best_flushes(&h.deck), find_flushes(&h.deck, 1));
    assert_eq!(best_flushes(&h.spades), vec![h.spades.clone()]);
    assert_eq!(best_flushes(&h.mixed), vec![h.spades.clone()]);
    assert_eq!(best_flushes(&h.aces), hands(&["Ac", "Ad", "Ah", "As"]));
    assert!(best_flushes(&h.empty).is_empty());
}

#[test]
fn best_flush_by_high_cards() {
    let deck = Hand::deck();
    let low: Hand = deck.by_suit(Suit::Spade).iter().copied().take(5).collect();
    let high: Hand = deck.by_suit(Suit::Club).iter().copied().skip(8).collect();
    let mut both = low.clone();
    both.extend(high.clone());
    assert_eq!(best_flushes(&both), vec![high]);
}

#[test]
fn best_straights_prefer_longer_then_higher() {
    assert_eq!(
        best_straights(&hand("2c 3d 4h 5s 6c 9d")),
        hands(&["2c 3d 4h 5s 6c"])
    );
    assert_eq!(
        best_straights(&hand("2c 3d 4h 5s 6c 7d")),
        hands(&["2c 3d 4h 5s 6c 7d"])
    );
    assert_eq!(
        best_straights(&hand("2c 3d 4h 5s 6c 8d 9d Th Js Qc")),
        hands(&["8d 9d Th Js Qc"])
    );
    assert!(best_straights(&hand("2c 3d 4h 5s 7c")).is_empty());
    assert!(best_straights(&Hand::new()).is_empty());
}

#[test]
fn best_straights_keep_ties() {
    assert_eq!(
        best_straights(&hand("2c 3d 4h 5s 6c 6d")),
        hands(&["2c 3d 4h 5s 6c", "2c 3d 4h 5s 6d"])
    );
}

#[test]
fn straight_flushes() {
    assert_eq!(
        find_straight_flushes(&hand("2h 3h 4h 5h 6h 7c")),
        hands(&["2h 3h 4h 5h 6h"])
    );
    assert!(find_straight_flushes(&hand("2h 3h 4h 5h 7h 6c")).is_empty());
    assert!(find_straight_flushes(&hand("2h 3h 4h 5h 6c")).is_empty());

    let spades = Hand::deck().by_suit(Suit::Spade);
    assert_eq!(find_straight_flushes(&spades), vec![spades]);

    let deck = Hand::deck();
    assert_eq!(best_straight_flushes(&deck), find_flushes(&deck, 1));
    assert_eq!(
        best_straight_flushes(&hand("2h 3h 4h 5h 6h 9s Ts Js Qs Ks")),
        hands(&["9s Ts Js Qs Ks"])
    );
}

#[test_log::test]
fn best_full_house_by_triple_then_pair() {
    let deck = Hand::deck();
    let mut h = deck.by_rank(Rank::Two);
    h.extend(deck.by_rank(Rank::Three));
    assert_eq!(best_full_houses(&h), hands(&["3c 3d 3h 2c 2d"]));

    assert_eq!(
        best_full_houses(&hand("Kc Kd Kh 7s 7c 2d 2h")),
        hands(&["Kc Kd Kh 7s 7c"])
    );
    assert!(best_full_houses(&hand("Kc Kd 7s 7c")).is_empty());
}
