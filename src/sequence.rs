//! A minimal sequence contract and the generic utilities built on it.
//!
//! [`Sequence`] requires only two primitives, [`Sequence::len`] and
//! [`Sequence::at`]. Everything else a sequence can do here (scalar access
//! with negative indices, iteration, reverse iteration, slicing, membership
//! testing, sorting, random picks) is a provided method layered on those
//! two, so a type opts into all of it by implementing the pair.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

use rand::Rng;

use crate::error::SequenceError;

/// Resolves a possibly-negative index against `len`; `-1` becomes
/// `len - 1`. The result may still lie outside `0..len`.
const fn resolve_index(index: isize, len: isize) -> isize {
    if index < 0 { index + len } else { index }
}

/// Clamps an already-resolved index to `0..=len`. Slice bounds use this,
/// so slices never fail.
const fn clamp_to_len(index: isize, len: isize) -> isize {
    if index < 0 {
        0
    } else if index > len {
        len
    } else {
        index
    }
}

/// A finite, read-only sequence of values.
///
/// Implementors provide [`len`](Self::len) and [`at`](Self::at); the
/// provided methods supply iteration, slicing, membership and sorting on
/// top of that contract and are not meant to be overridden.
///
/// # Example
///
/// ```
/// use frenchdeck::{Card, FrenchDeck, Rank, Sequence, Suit};
///
/// let deck = FrenchDeck::new();
/// assert_eq!(deck.len(), 52);
/// assert!(deck.contains(&Card::new(Rank::Queen, Suit::Hearts)));
/// assert_eq!(deck.slice(..2).len(), 2);
/// ```
pub trait Sequence {
    /// The element type produced by the sequence.
    type Item;

    /// Returns the number of elements.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// The contract requires `index < self.len()`; implementations may
    /// panic otherwise. Callers wanting checked or negative indexing use
    /// [`get`](Self::get).
    #[must_use]
    fn at(&self, index: usize) -> Self::Item;

    /// Returns whether the sequence has no elements.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, counting from the end when negative.
    ///
    /// Valid indices are `-len..=len - 1`; `-1` is the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] when `index` falls outside
    /// the valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::{Card, FrenchDeck, Rank, Sequence, Suit};
    ///
    /// let deck = FrenchDeck::new();
    /// assert_eq!(deck.get(0), Ok(Card::new(Rank::Two, Suit::Spades)));
    /// assert_eq!(deck.get(-1), Ok(Card::new(Rank::Ace, Suit::Hearts)));
    /// assert!(deck.get(52).is_err());
    /// ```
    fn get(&self, index: isize) -> Result<Self::Item, SequenceError> {
        #[expect(clippy::cast_possible_wrap, reason = "sequence lengths fit in isize")]
        let len = self.len() as isize;
        let resolved = resolve_index(index, len);
        if resolved < 0 || resolved >= len {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.at(resolved as usize))
    }

    /// Returns a lazy iterator over the elements in stored order.
    ///
    /// Each call starts fresh at position 0. The iterator is double-ended,
    /// so `.rev()` walks the sequence in reverse stored order.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::{Card, FrenchDeck, Sequence};
    ///
    /// let deck = FrenchDeck::new();
    /// let forward: Vec<Card> = deck.iter().collect();
    /// let backward: Vec<Card> = deck.iter().rev().collect();
    /// assert_eq!(forward.len(), 52);
    /// assert_eq!(backward.first(), forward.last());
    /// ```
    #[must_use]
    fn iter(&self) -> SeqIter<'_, Self> {
        SeqIter {
            seq: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Returns whether some element equals `item`, by sequential scan.
    ///
    /// O(n); no index or hash lookup is built.
    #[must_use]
    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|candidate| candidate == *item)
    }

    /// Returns the sub-sequence selected by `range`, preserving order.
    ///
    /// Bounds may be negative to count from the end. Out-of-range bounds
    /// clamp to the sequence ends rather than failing, and an inverted
    /// range yields an empty result.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::Sequence;
    ///
    /// let letters = ['a', 'b', 'c', 'd'];
    /// assert_eq!(letters[..].slice(..2), vec!['a', 'b']);
    /// assert_eq!(letters[..].slice(-2..), vec!['c', 'd']);
    /// assert_eq!(letters[..].slice(1..100), vec!['b', 'c', 'd']);
    /// assert!(letters[..].slice(3..1).is_empty());
    /// ```
    #[must_use]
    fn slice<R: RangeBounds<isize>>(&self, range: R) -> Vec<Self::Item> {
        #[expect(clippy::cast_possible_wrap, reason = "sequence lengths fit in isize")]
        let len = self.len() as isize;
        // Negative bounds resolve against the end before any exclusive or
        // inclusive shift, so `Excluded(-1)` means "after the last element".
        let start = match range.start_bound() {
            Bound::Included(&i) => clamp_to_len(resolve_index(i, len), len),
            Bound::Excluded(&i) => clamp_to_len(resolve_index(i, len).saturating_add(1), len),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => clamp_to_len(resolve_index(i, len).saturating_add(1), len),
            Bound::Excluded(&i) => clamp_to_len(resolve_index(i, len), len),
            Bound::Unbounded => len,
        };
        if start >= end {
            return Vec::new();
        }
        (start as usize..end as usize).map(|i| self.at(i)).collect()
    }

    /// Returns all elements sorted by a caller-supplied key function.
    ///
    /// The sort is stable and the sequence itself is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::Sequence;
    ///
    /// let values = [3, 1, 2];
    /// assert_eq!(values[..].sorted_by_key(|v| *v), vec![1, 2, 3]);
    /// assert_eq!(values[0], 3);
    /// ```
    #[must_use]
    fn sorted_by_key<K, F>(&self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<Self::Item> = self.iter().collect();
        items.sort_by_key(key);
        items
    }

    /// Returns a uniformly random element, or `None` if the sequence is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::Sequence;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let letters = ['a', 'b', 'c'];
    /// assert!(letters[..].choose(&mut rng).is_some());
    /// ```
    fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        Some(self.at(rng.random_range(0..self.len())))
    }
}

/// A restartable cursor over a [`Sequence`].
///
/// Created by [`Sequence::iter`]. Walks positions `0..len` and reads each
/// element through [`Sequence::at`] on demand.
#[derive(Debug)]
pub struct SeqIter<'a, S: Sequence + ?Sized> {
    /// The sequence being walked.
    seq: &'a S,
    /// Next position for the front of the iterator.
    front: usize,
    /// One past the next position for the back of the iterator.
    back: usize,
}

impl<S: Sequence + ?Sized> Clone for SeqIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: Sequence + ?Sized> Iterator for SeqIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.seq.at(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for SeqIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.at(self.back))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for SeqIter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for SeqIter<'_, S> {}

/// Slices are sequences of cloned elements, so every utility here works on
/// plain `[T]` data as well.
impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}
