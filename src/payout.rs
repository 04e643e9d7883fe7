//! Payout resolution for finished hands.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Outcome of a single player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Natural 21 against a non-natural dealer; pays 3:2.
    Blackjack,
    /// Player went over 21.
    Bust,
    /// Player beats the dealer (dealer bust or lower value).
    Win,
    /// Tie; the wager is returned.
    Push,
    /// Dealer beats the player.
    Lose,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "Blackjack!",
            Self::Bust => "Bust",
            Self::Win => "Win",
            Self::Push => "Push",
            Self::Lose => "Lose",
        })
    }
}

/// Outcome of the pair side bet, resolved at the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideOutcome {
    /// The first two player cards shared a rank; the amount paid out.
    Won(usize),
    /// No pair; the forfeited stake.
    Lost(usize),
}

impl fmt::Display for SideOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won(_) => "Side Bet WIN!",
            Self::Lost(_) => "Side Bet LOST.",
        })
    }
}

/// Settlement of one hand: what goes back to the balance and the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResolution {
    /// Amount paid back into the balance (stake plus winnings, where due).
    pub payout: usize,
    /// Net result of the hand relative to the wager.
    pub net: isize,
    /// Outcome label for display.
    pub outcome: HandOutcome,
}

/// Resolves a single player hand against the dealer hand for `bet` chips.
///
/// Rule order matters and is fixed:
///
/// 1. Player blackjack against a non-blackjack dealer pays 3:2, rounded down.
/// 2. A busted player loses, even against a busted dealer.
/// 3. Dealer bust, or a higher player value, wins even money.
/// 4. Equal values push. Two simultaneous naturals land here: both are worth
///    21, so the round is a push rather than a dealer win.
/// 5. Anything else loses.
#[must_use]
pub fn resolve_hand(player: &Hand, dealer: &Hand, bet: usize) -> HandResolution {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player.is_blackjack() && !dealer.is_blackjack() {
        let winnings = bet * 3 / 2;
        HandResolution {
            payout: bet + winnings,
            net: winnings as isize,
            outcome: HandOutcome::Blackjack,
        }
    } else if player.is_bust() {
        HandResolution {
            payout: 0,
            net: -(bet as isize),
            outcome: HandOutcome::Bust,
        }
    } else if dealer.is_bust() || player_value > dealer_value {
        HandResolution {
            payout: bet * 2,
            net: bet as isize,
            outcome: HandOutcome::Win,
        }
    } else if player_value == dealer_value {
        HandResolution {
            payout: bet,
            net: 0,
            outcome: HandOutcome::Push,
        }
    } else {
        HandResolution {
            payout: 0,
            net: -(bet as isize),
            outcome: HandOutcome::Lose,
        }
    }
}
