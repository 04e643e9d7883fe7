//! The shoe: a shuffled, self-replenishing card source.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A stack of cards dealt from the top.
///
/// A freshly built shoe holds one of each of the 52 (rank, suit)
/// combinations in random order. Dealing from an empty shoe swaps in a new
/// shuffle first, so [`Shoe::deal`] never fails; mid-round replenishment is
/// an accepted simplification of this table.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds a full 52-card shoe in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a shoe with a fixed card stack.
    ///
    /// The last element of `cards` is dealt first. Intended for deterministic
    /// replays and tests; a depleted stacked shoe replenishes with a random
    /// shuffle just like any other.
    #[must_use]
    pub const fn stacked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card, replenishing an empty shoe first.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly shuffled shoe always holds a full deck"
    )]
    pub fn deal(&mut self, rng: &mut ChaCha8Rng) -> Card {
        if let Some(card) = self.cards.pop() {
            return card;
        }
        *self = Self::shuffled(rng);
        self.cards
            .pop()
            .expect("freshly shuffled shoe holds a full deck")
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
