//! The immutable 52-card French deck.

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::sequence::{SeqIter, Sequence};

/// An immutable, ordered 52-card deck.
///
/// The deck is built once as the cross product of [`Suit::ALL`] and
/// [`Rank::ALL`] in suit-major order: all thirteen ranks of one suit,
/// ascending, before the next suit. It never changes afterwards: there is
/// no method that mutates it, so sharing it read-only across threads needs
/// no locking.
///
/// All sequence behavior comes from the [`Sequence`] impl: the deck
/// provides `len` and `at`, and inherits checked access, iteration,
/// reversal, slicing, membership testing and sorting from the trait.
///
/// # Example
///
/// ```
/// use frenchdeck::{Card, FrenchDeck, Rank, Sequence, Suit};
///
/// let deck = FrenchDeck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.at(0), Card::new(Rank::Two, Suit::Spades));
/// assert_eq!(deck.at(51), Card::new(Rank::Ace, Suit::Hearts));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrenchDeck {
    /// The 52 cards in suit-major, rank-ascending order.
    cards: [Card; DECK_SIZE],
}

impl FrenchDeck {
    /// Creates the deck.
    ///
    /// Construction cannot fail and always yields the same 52 cards in the
    /// same order.
    #[must_use]
    pub const fn new() -> Self {
        let mut cards = [Card::new(Rank::Two, Suit::Spades); DECK_SIZE];
        let mut index = 0;
        let mut suit = 0;
        while suit < Suit::ALL.len() {
            let mut rank = 0;
            while rank < Rank::ALL.len() {
                cards[index] = Card::new(Rank::ALL[rank], Suit::ALL[suit]);
                index += 1;
                rank += 1;
            }
            suit += 1;
        }
        Self { cards }
    }

    /// Returns the cards as a slice, in stored order.
    #[must_use]
    pub const fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for FrenchDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for FrenchDeck {
    type Item = Card;

    fn len(&self) -> usize {
        DECK_SIZE
    }

    fn at(&self, index: usize) -> Card {
        self.cards[index]
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = Card;
    type IntoIter = SeqIter<'a, FrenchDeck>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
