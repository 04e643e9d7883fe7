use crate::error::{BetError, StartError};
use crate::hand::Hand;
use crate::payout::SideOutcome;

use super::{Action, BetKind, Phase, Round};

impl Round {
    /// Adds `amount` to the main or side wager, deducting it from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase, for a zero amount, or when
    /// the amount exceeds the balance; the wager and balance are unchanged.
    pub fn place_bet(&mut self, kind: BetKind, amount: usize) -> Result<(), BetError> {
        if !self.phase.permits(Action::PlaceBet) {
            return Err(BetError::WrongPhase);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        match kind {
            BetKind::Main => self.main_bet += amount,
            BetKind::Side => self.side_bet += amount,
        }
        Ok(())
    }

    /// Deals the opening hands and moves to the playing phase.
    ///
    /// The player receives two face-up cards, the dealer an up card and a
    /// hole card. The side bet settles immediately against the opening pair,
    /// and a natural 21 stands on its own.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase or when no main bet has
    /// been placed.
    pub fn start_round(&mut self) -> Result<(), StartError> {
        if !self.phase.permits(Action::StartRound) {
            return Err(StartError::WrongPhase);
        }
        if self.main_bet == 0 {
            return Err(StartError::NoActiveBet);
        }

        self.phase = Phase::Playing;
        self.player_hands = vec![Hand::new()];
        self.hand_bets = vec![self.main_bet];
        self.active_hand = 0;
        self.dealer = Hand::new();
        self.outcomes.clear();
        self.side_outcome = None;
        self.flash = None;
        self.last_net = 0;
        self.result_at = None;

        for _ in 0..2 {
            let card = self.draw_card(true);
            self.player_hands[0].add_card(card);
        }
        let up = self.draw_card(true);
        self.dealer.add_card(up);
        let hole = self.draw_card(false);
        self.dealer.add_card(hole);

        self.resolve_side_bet();
        self.refresh_allowances();

        // A natural 21 takes no actions; straight to the dealer.
        if self.player_hands[0].value() == 21 {
            self.stand_active();
        }

        Ok(())
    }

    /// Settles the pair side bet against the opening two player cards.
    ///
    /// Runs once per round, at the deal, independently of the main hand: a
    /// rank pair pays ten times the stake, anything else forfeits it.
    fn resolve_side_bet(&mut self) {
        if self.side_bet == 0 {
            return;
        }

        let stake = self.side_bet;
        self.side_bet = 0;

        if self.player_hands[0].is_pair() {
            let paid = stake * 10;
            self.balance += paid;
            self.last_net = paid as isize;
            self.side_outcome = Some(SideOutcome::Won(paid));
        } else {
            self.last_net = -(stake as isize);
            self.side_outcome = Some(SideOutcome::Lost(stake));
        }
    }
}
