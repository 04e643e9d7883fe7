//! Player and dealer hand representation and scoring.

use serde::{Deserialize, Serialize};

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    // Soften aces from 11 to 1 until the hand no longer busts.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// A hand of cards, used for both the player and the dealer.
///
/// Card order matters only for display. `finished` and `visible` are round
/// bookkeeping: a finished hand accepts no further actions, and `visible` is
/// a hint for the view layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    finished: bool,
    visible: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            finished: false,
            visible: true,
        }
    }

    /// Creates a one-card hand from a split pair.
    #[must_use]
    pub fn from_split(card: Card) -> Self {
        Self {
            cards: vec![card],
            finished: false,
            visible: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand. An empty hand is worth 0.
    ///
    /// Aces are counted as 11 where possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: exactly two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is exactly two cards of equal rank.
    ///
    /// Suit plays no part; 10/J/Q/K are distinct ranks and do not pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns whether no further actions are permitted on this hand.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Marks the hand as finished.
    pub const fn finish(&mut self) {
        self.finished = true;
    }

    /// Returns whether the view should show this hand.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the view-visibility hint.
    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Turns every card in the hand face-up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.revealed = true;
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card of a pair (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
