//! Deck and sequence integration tests.

use std::collections::HashSet;
use std::ops::Bound;

use frenchdeck::{Card, DECK_SIZE, FrenchDeck, Rank, Sequence, SequenceError, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn spades_high(card: &Card) -> usize {
    let suit_value = match card.suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    };
    card.rank.position() * 4 + suit_value
}

#[test]
fn deck_has_52_unique_cards() {
    let deck = FrenchDeck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());

    let unique: HashSet<Card> = deck.iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deck_is_suit_major_rank_ascending() {
    let deck = FrenchDeck::new();

    assert_eq!(deck.at(0), card(Rank::Two, Suit::Spades));
    assert_eq!(deck.at(12), card(Rank::Ace, Suit::Spades));
    assert_eq!(deck.at(13), card(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.at(51), card(Rank::Ace, Suit::Hearts));

    // The suit only changes every thirteen cards.
    for (i, c) in deck.iter().enumerate() {
        assert_eq!(c.suit, Suit::ALL[i / 13]);
        assert_eq!(c.rank, Rank::ALL[i % 13]);
    }
}

#[test]
fn negative_indices_count_from_the_end() {
    let deck = FrenchDeck::new();

    assert_eq!(deck.get(-1), Ok(deck.at(51)));
    assert_eq!(deck.get(-52), Ok(deck.at(0)));
    assert_eq!(deck.get(51), Ok(card(Rank::Ace, Suit::Hearts)));
}

#[test]
fn scalar_access_errors_outside_bounds() {
    let deck = FrenchDeck::new();

    assert_eq!(
        deck.get(52),
        Err(SequenceError::IndexOutOfRange {
            index: 52,
            len: DECK_SIZE
        })
    );
    assert_eq!(
        deck.get(-53),
        Err(SequenceError::IndexOutOfRange {
            index: -53,
            len: DECK_SIZE
        })
    );

    let err = deck.get(60).unwrap_err();
    assert_eq!(
        err.to_string(),
        "index 60 out of range for sequence of length 52"
    );
}

#[test]
fn index_access_agrees_with_iteration_order() {
    let deck = FrenchDeck::new();
    for (i, c) in deck.iter().enumerate() {
        assert_eq!(c, deck.at(i));
    }
    assert_eq!(deck.iter().len(), DECK_SIZE);
}

#[test]
fn reverse_iteration_is_exact_reversal() {
    let deck = FrenchDeck::new();

    let forward: Vec<Card> = deck.iter().collect();
    let mut backward: Vec<Card> = deck.iter().rev().collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn iteration_is_restartable() {
    let deck = FrenchDeck::new();

    let first_pass: Vec<Card> = deck.iter().collect();
    let second_pass: Vec<Card> = deck.iter().collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass.len(), DECK_SIZE);

    // `for card in &deck` walks the same restartable cursor.
    let mut via_loop = Vec::new();
    for c in &deck {
        via_loop.push(c);
    }
    assert_eq!(via_loop, first_pass);
}

#[test]
fn slices_clamp_instead_of_failing() {
    let deck = FrenchDeck::new();

    let first_three = deck.slice(..3);
    assert_eq!(
        first_three,
        vec![
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Spades),
        ]
    );

    let last_three = deck.slice(-3..);
    assert_eq!(
        last_three,
        vec![
            card(Rank::Queen, Suit::Hearts),
            card(Rank::King, Suit::Hearts),
            card(Rank::Ace, Suit::Hearts),
        ]
    );

    assert_eq!(deck.slice(40..100).len(), 12);
    assert_eq!(deck.slice(-100..2), deck.slice(..2));
    assert_eq!(deck.slice(..), deck.as_slice().to_vec());
    assert_eq!(deck.slice(0..=-1), deck.slice(..));
    assert!(deck.slice(5..2).is_empty());
    assert!(deck.slice(-1..-40).is_empty());
}

#[test]
fn slice_bounds_resolve_negatives_before_shifting() {
    let deck = FrenchDeck::new();

    // Excluded(-1) means "after the last element", not "from the front".
    let after_last = deck.slice((Bound::Excluded(-1isize), Bound::Unbounded));
    assert!(after_last.is_empty());

    let after_first = deck.slice((Bound::Excluded(0isize), Bound::Unbounded));
    assert_eq!(after_first.len(), 51);
    assert_eq!(after_first[0], card(Rank::Three, Suit::Spades));

    let after_second_to_last = deck.slice((Bound::Excluded(-2isize), Bound::Unbounded));
    assert_eq!(after_second_to_last, vec![card(Rank::Ace, Suit::Hearts)]);

    // An inclusive end far past the front clamps to empty instead of
    // wrapping around to the first element.
    assert!(deck.slice(0..=-60).is_empty());
}

#[test]
fn membership_is_a_sequential_scan() {
    let deck = FrenchDeck::new();
    assert!(deck.contains(&card(Rank::Queen, Suit::Hearts)));

    // Every representable card is in the full deck, so the negative case
    // uses a sub-sequence: the thirteen spades.
    let spades = deck.slice(..13);
    assert!(Sequence::contains(
        &spades[..],
        &card(Rank::Two, Suit::Spades)
    ));
    assert!(!Sequence::contains(
        &spades[..],
        &card(Rank::Queen, Suit::Hearts)
    ));
}

#[test]
fn sorting_by_key_leaves_deck_unchanged() {
    let deck = FrenchDeck::new();
    let sorted = deck.sorted_by_key(spades_high);

    assert_eq!(sorted.len(), DECK_SIZE);
    assert_eq!(sorted[0], card(Rank::Two, Suit::Clubs));
    assert_eq!(sorted[1], card(Rank::Two, Suit::Diamonds));
    assert_eq!(sorted[2], card(Rank::Two, Suit::Hearts));
    assert_eq!(sorted[3], card(Rank::Two, Suit::Spades));
    assert_eq!(sorted[51], card(Rank::Ace, Suit::Spades));

    // The deck itself is untouched.
    assert_eq!(deck.at(0), card(Rank::Two, Suit::Spades));
    assert_eq!(deck.slice(..), FrenchDeck::new().slice(..));
}

#[test]
fn choose_is_deterministic_for_a_seed() {
    let deck = FrenchDeck::new();

    let mut rng_a = ChaCha8Rng::seed_from_u64(7);
    let mut rng_b = ChaCha8Rng::seed_from_u64(7);
    assert_eq!(deck.choose(&mut rng_a), deck.choose(&mut rng_b));

    let empty: [Card; 0] = [];
    assert_eq!(Sequence::choose(&empty[..], &mut rng_a), None);
}

#[test]
fn sequence_utilities_work_on_plain_slices() {
    let values = [30, 10, 20, 40];

    assert_eq!(Sequence::get(&values[..], -1), Ok(40));
    assert_eq!(
        Sequence::get(&values[..], 9),
        Err(SequenceError::IndexOutOfRange { index: 9, len: 4 })
    );
    assert_eq!(values[..].slice(1..-1), vec![10, 20]);
    assert_eq!(values[..].sorted_by_key(|v| *v), vec![10, 20, 30, 40]);

    // The cursor works over the unsized slice impl too, both directions.
    let backward: Vec<i32> = Sequence::iter(&values[..]).rev().collect();
    assert_eq!(backward, vec![40, 20, 10, 30]);
}

#[test]
fn card_ordering_is_by_field_value() {
    assert_eq!(
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts)
    );
    assert!(card(Rank::Two, Suit::Hearts) < card(Rank::Three, Suit::Spades));
    assert_eq!(card(Rank::Ten, Suit::Clubs).to_string(), "10 of clubs");
}
