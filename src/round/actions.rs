use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Action, Round};

impl Round {
    /// Player action: hit (draw a card into the active hand).
    ///
    /// A hit that lands exactly on 21 stands the hand; one that goes over
    /// finishes it as a bust. Either way play moves on without further input.
    ///
    /// # Errors
    ///
    /// Returns an error outside the playing phase.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if !self.phase.permits(Action::Hit) {
            return Err(ActionError::WrongPhase);
        }

        let card = self.draw_card(true);
        self.player_hands[self.active_hand].add_card(card);
        self.refresh_allowances();

        let value = self.player_hands[self.active_hand].value();
        if value == 21 {
            self.stand_active();
        } else if value > 21 {
            self.player_hands[self.active_hand].finish();
            self.advance_hand();
        }

        Ok(card)
    }

    /// Player action: stand (finish the active hand).
    ///
    /// # Errors
    ///
    /// Returns an error outside the playing phase.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if !self.phase.permits(Action::Stand) {
            return Err(ActionError::WrongPhase);
        }
        self.stand_active();
        Ok(())
    }

    /// Player action: double down (double the wager, take one card, stand).
    ///
    /// The extra deduction equals the hand's wager before doubling. The hand ends
    /// after the one card, standing or bust.
    ///
    /// # Errors
    ///
    /// Returns an error outside the playing phase, when doubling is not
    /// offered on the active hand, or when the balance cannot cover the
    /// additional wager; state is unchanged on rejection.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        if !self.phase.permits(Action::Double) {
            return Err(ActionError::WrongPhase);
        }
        if !self.double_allowed {
            return Err(ActionError::DoubleNotAllowed);
        }

        let bet = self.hand_bets[self.active_hand];
        if self.balance < bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.balance -= bet;
        self.hand_bets[self.active_hand] *= 2;

        let card = self.draw_card(true);
        self.player_hands[self.active_hand].add_card(card);
        self.refresh_allowances();

        if self.player_hands[self.active_hand].is_bust() {
            self.player_hands[self.active_hand].finish();
            self.advance_hand();
        } else {
            self.stand_active();
        }

        Ok(card)
    }

    /// Player action: split the opening pair into two hands.
    ///
    /// One extra main-bet-sized wager is deducted. The second hand keeps its
    /// card face-down until its turn; the first hand immediately receives a
    /// replacement card. Splitting is offered once per round, only before any
    /// other action on the hand.
    ///
    /// # Errors
    ///
    /// Returns an error outside the playing phase, after a prior split, on a
    /// non-pair hand, or when the balance cannot cover the second wager;
    /// state is unchanged on rejection.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the pair check guarantees the split card exists"
    )]
    pub fn split(&mut self) -> Result<(), ActionError> {
        if !self.phase.permits(Action::Split) {
            return Err(ActionError::WrongPhase);
        }
        if self.player_hands.len() != 1 || self.active_hand != 0 {
            return Err(ActionError::SplitNotAllowed);
        }
        if !self.player_hands[0].is_pair() {
            return Err(ActionError::NotAPair);
        }

        let bet = self.main_bet;
        if self.balance < bet {
            return Err(ActionError::InsufficientFunds);
        }
        self.balance -= bet;

        let mut moved = self.player_hands[0]
            .take_split_card()
            .expect("pair was verified above");
        moved.revealed = false;
        self.player_hands.push(Hand::from_split(moved));
        self.hand_bets = vec![bet, bet];

        let card = self.draw_card(true);
        self.player_hands[0].add_card(card);
        self.refresh_allowances();

        Ok(())
    }

    /// Finishes the active hand and hands play to whatever comes next.
    pub(super) fn stand_active(&mut self) {
        self.player_hands[self.active_hand].finish();
        self.advance_hand();
    }

    /// Moves play past the just-finished hand.
    ///
    /// The finished hand is hidden from display. A remaining hand is revealed
    /// and dealt its second card (a freshly split hand holds only one); once
    /// no hands remain the dealer plays out.
    fn advance_hand(&mut self) {
        self.player_hands[self.active_hand].set_visible(false);
        self.active_hand += 1;

        if self.active_hand < self.player_hands.len() {
            self.player_hands[self.active_hand].reveal_all();
            let card = self.draw_card(true);
            self.player_hands[self.active_hand].add_card(card);
            self.refresh_allowances();
        } else {
            self.finish_dealer();
        }
    }
}
