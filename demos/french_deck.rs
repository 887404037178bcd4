//! French deck walkthrough example.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use frenchdeck::{Card, FrenchDeck, Rank, Sequence, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Ranks two of clubs lowest and ace of spades highest.
fn spades_high(card: &Card) -> usize {
    let suit_value = match card.suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    };
    card.rank.position() * 4 + suit_value
}

fn main() {
    let deck = FrenchDeck::new();

    println!("deck has {} cards", deck.len());
    println!("first: {}", deck.at(0));
    println!("last: {}", deck.get(-1).expect("deck is not empty"));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    if let Some(card) = deck.choose(&mut rng) {
        println!("random pick: {card}");
    }

    println!("\nfirst three:");
    for card in deck.slice(..3) {
        println!("  {card}");
    }

    println!("\nforward:");
    for card in &deck {
        println!("  {card}");
    }

    println!("\nbackward:");
    for card in deck.iter().rev() {
        println!("  {card}");
    }

    let queen_of_hearts = Card::new(Rank::Queen, Suit::Hearts);
    println!("\nQ of hearts in deck: {}", deck.contains(&queen_of_hearts));

    println!("\nsorted by spades-high:");
    for card in deck.sorted_by_key(spades_high) {
        println!("  {card}");
    }
}
