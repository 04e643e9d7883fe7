//! Round phases and the action-legality table.

use serde::{Deserialize, Serialize};

/// Phase of the round.
///
/// `Betting` accepts wagers, `Playing` accepts hand actions, and `Result`
/// holds the settled round until a reset (explicit, or timed via
/// [`tick`](crate::Round::tick)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting wagers for the next round.
    Betting,
    /// Player hands are in play.
    Playing,
    /// The round is settled; awaiting reset.
    Result,
}

/// An entry point on [`Round`](crate::Round), for legality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// [`Round::place_bet`](crate::Round::place_bet).
    PlaceBet,
    /// [`Round::start_round`](crate::Round::start_round).
    StartRound,
    /// [`Round::hit`](crate::Round::hit).
    Hit,
    /// [`Round::stand`](crate::Round::stand).
    Stand,
    /// [`Round::double_down`](crate::Round::double_down).
    Double,
    /// [`Round::split`](crate::Round::split).
    Split,
    /// [`Round::reset`](crate::Round::reset).
    Reset,
    /// [`Round::tick`](crate::Round::tick).
    Tick,
}

impl Phase {
    /// Returns whether `action` is legal in this phase.
    ///
    /// This is the single transition table every entry point consults; an
    /// action outside its phase is rejected before it touches any state.
    #[must_use]
    pub const fn permits(self, action: Action) -> bool {
        matches!(
            (self, action),
            (Self::Betting, Action::PlaceBet | Action::StartRound)
                | (
                    Self::Playing,
                    Action::Hit | Action::Stand | Action::Double | Action::Split
                )
                | (_, Action::Reset | Action::Tick)
        )
    }
}

/// Which wager a [`place_bet`](crate::Round::place_bet) call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetKind {
    /// The main hand wager.
    Main,
    /// The pair side bet, resolved at the deal.
    Side,
}

/// One-shot win/lose indicator for the view, set when a round settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flash {
    /// The round netted a gain on the main hands.
    Win,
    /// The round netted a loss on the main hands.
    Lose,
}
