use core::cmp::Ordering;

use crate::payout::resolve_hand;

use super::{Flash, Phase, Round};

impl Round {
    /// Plays out the dealer and settles the round.
    ///
    /// The hole card is revealed and the dealer draws to 17, standing on all
    /// 17s including soft ones.
    pub(super) fn finish_dealer(&mut self) {
        self.dealer.reveal_all();

        while self.dealer.value() < 17 {
            let card = self.draw_card(true);
            self.dealer.add_card(card);
        }

        self.resolve_round();
    }

    /// Applies payouts for every player hand and enters the result phase.
    ///
    /// # Panics
    ///
    /// Panics if the per-hand wagers have diverged from the hands; that is a
    /// bookkeeping bug in this module, not a caller error.
    fn resolve_round(&mut self) {
        assert_eq!(
            self.player_hands.len(),
            self.hand_bets.len(),
            "per-hand wagers out of step with hands"
        );

        let mut net: isize = 0;
        for (hand, &bet) in self.player_hands.iter().zip(&self.hand_bets) {
            let settled = resolve_hand(hand, &self.dealer, bet);
            self.balance += settled.payout;
            net += settled.net;
            self.outcomes.push(settled.outcome);
        }

        self.flash = match net.cmp(&0) {
            Ordering::Greater => Some(Flash::Win),
            Ordering::Less => Some(Flash::Lose),
            Ordering::Equal => None,
        };
        self.last_net += net;
        self.main_bet = 0;
        self.phase = Phase::Result;
        self.result_at = Some(self.now_ms);
        self.refresh_allowances();
    }
}
