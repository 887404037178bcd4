//! A fixed 52-card French deck behind a minimal sequence contract, with
//! optional `no_std` support.
//!
//! The crate provides a [`FrenchDeck`] type that implements [`Sequence`],
//! a two-method contract (`len` + `at`) from which iteration, reverse
//! iteration, slicing, membership testing, sorting and random picks all
//! follow as provided methods.
//!
//! # Example
//!
//! ```
//! use frenchdeck::{Card, FrenchDeck, Rank, Sequence, Suit};
//!
//! let deck = FrenchDeck::new();
//! assert_eq!(deck.len(), 52);
//! assert!(deck.contains(&Card::new(Rank::Queen, Suit::Hearts)));
//!
//! let by_value = deck.sorted_by_key(|card| card.rank.position());
//! assert_eq!(by_value[0].rank, Rank::Two);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod sequence;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::FrenchDeck;
pub use error::SequenceError;
pub use sequence::{SeqIter, Sequence};
