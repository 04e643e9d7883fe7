//! The round state machine.
//!
//! A [`Round`] owns the balance, the wagers, the shoe, and the hands, and
//! moves through `Betting -> Playing -> Result -> Betting`. All mutation goes
//! through the action methods; the view layer reads state through the
//! accessors or a [`TableSnapshot`] and never mutates.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::payout::{HandOutcome, SideOutcome};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, BetKind, Flash, Phase};

/// A single-player blackjack table cycling through betting, play, and result.
pub struct Round {
    options: TableOptions,
    rng: ChaCha8Rng,
    /// The shoe cards are dealt from.
    ///
    /// Public so a known card order can be loaded with [`Shoe::stacked`] for
    /// deterministic replays; [`reset`](Round::reset) swaps in a fresh
    /// shuffle.
    pub shoe: Shoe,
    phase: Phase,
    balance: usize,
    main_bet: usize,
    side_bet: usize,
    player_hands: Vec<Hand>,
    hand_bets: Vec<usize>,
    active_hand: usize,
    dealer: Hand,
    double_allowed: bool,
    split_allowed: bool,
    outcomes: Vec<HandOutcome>,
    side_outcome: Option<SideOutcome>,
    last_net: isize,
    flash: Option<Flash>,
    now_ms: u64,
    result_at: Option<u64>,
}

/// Read-only view of a [`Round`] for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Current chip balance.
    pub balance: usize,
    /// Main wager for the round in progress (or being assembled).
    pub main_bet: usize,
    /// Pair side bet being assembled.
    pub side_bet: usize,
    /// Current phase.
    pub phase: Phase,
    /// Player hands, one or two entries.
    pub player_hands: Vec<Hand>,
    /// Per-hand wagers, parallel to `player_hands`.
    pub hand_bets: Vec<usize>,
    /// Index of the hand currently receiving actions.
    pub active_hand: usize,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Whether doubling down is currently offered.
    pub double_allowed: bool,
    /// Whether splitting is currently offered.
    pub split_allowed: bool,
    /// Outcome labels from the most recent settlement.
    pub outcomes: Vec<HandOutcome>,
    /// Side-bet outcome from the most recent deal.
    pub side_outcome: Option<SideOutcome>,
    /// Net winnings of the last settled round, side bet included.
    pub last_net: isize,
    /// Win/lose indicator from the last settlement.
    pub flash: Option<Flash>,
}

impl Round {
    /// Creates a table in the betting phase with a freshly shuffled shoe.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(&mut rng);

        Self {
            balance: options.starting_balance,
            options,
            rng,
            shoe,
            phase: Phase::Betting,
            main_bet: 0,
            side_bet: 0,
            player_hands: Vec::new(),
            hand_bets: Vec::new(),
            active_hand: 0,
            dealer: Hand::new(),
            double_allowed: false,
            split_allowed: false,
            outcomes: Vec::new(),
            side_outcome: None,
            last_net: 0,
            flash: None,
            now_ms: 0,
            result_at: None,
        }
    }

    /// Draws one card from the shoe with the requested facing.
    fn draw_card(&mut self, revealed: bool) -> Card {
        let mut card = self.shoe.deal(&mut self.rng);
        card.revealed = revealed;
        card
    }

    /// Recomputes the derived legality flags from the current state.
    ///
    /// Called after every transition so the flags cannot drift: doubling is
    /// offered on any active two-card hand, splitting only on a lone unacted
    /// pair the balance can cover.
    fn refresh_allowances(&mut self) {
        let active = if self.phase == Phase::Playing {
            self.player_hands.get(self.active_hand)
        } else {
            None
        };

        self.double_allowed = active.is_some_and(|hand| hand.len() == 2 && !hand.is_finished());
        self.split_allowed = self.player_hands.len() == 1
            && self.active_hand == 0
            && active.is_some_and(Hand::is_pair)
            && self.balance >= self.main_bet;
    }

    /// Hard reset: refunds outstanding wagers, clears the table, reshuffles,
    /// and returns to the betting phase.
    ///
    /// Callable from any phase. After a normal settlement there is nothing
    /// left to refund; resetting mid-play returns the per-hand wagers.
    pub fn reset(&mut self) {
        let outstanding = match self.phase {
            Phase::Betting | Phase::Result => self.main_bet + self.side_bet,
            Phase::Playing => self.hand_bets.iter().sum::<usize>() + self.side_bet,
        };
        self.balance += outstanding;

        self.main_bet = 0;
        self.side_bet = 0;
        self.player_hands.clear();
        self.hand_bets.clear();
        self.active_hand = 0;
        self.dealer = Hand::new();
        self.shoe = Shoe::shuffled(&mut self.rng);
        self.outcomes.clear();
        self.side_outcome = None;
        self.flash = None;
        self.result_at = None;
        self.phase = Phase::Betting;
        self.refresh_allowances();
    }

    /// Advances the table clock and fires the timed result auto-reset.
    ///
    /// The caller's scheduler decides the polling cadence; the core holds no
    /// timers. Returns `true` if this tick reset the table, which happens on
    /// the first tick more than the configured dwell after the round settled.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = now_ms;

        let dwell_expired = self.result_at.is_some_and(|settled_at| {
            now_ms.saturating_sub(settled_at) > self.options.result_dwell_ms
        });
        if self.phase == Phase::Result && dwell_expired {
            self.reset();
            return true;
        }
        false
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the main wager.
    #[must_use]
    pub const fn main_bet(&self) -> usize {
        self.main_bet
    }

    /// Returns the side wager.
    #[must_use]
    pub const fn side_bet(&self) -> usize {
        self.side_bet
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player hands.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the per-hand wagers, parallel to [`player_hands`](Round::player_hands).
    #[must_use]
    pub fn hand_bets(&self) -> &[usize] {
        &self.hand_bets
    }

    /// Returns the index of the hand currently receiving actions.
    #[must_use]
    pub const fn active_hand(&self) -> usize {
        self.active_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether doubling down is currently offered.
    #[must_use]
    pub const fn double_allowed(&self) -> bool {
        self.double_allowed
    }

    /// Returns whether splitting is currently offered.
    #[must_use]
    pub const fn split_allowed(&self) -> bool {
        self.split_allowed
    }

    /// Returns the outcome labels from the most recent settlement.
    #[must_use]
    pub fn outcomes(&self) -> &[HandOutcome] {
        &self.outcomes
    }

    /// Returns the side-bet outcome from the most recent deal.
    #[must_use]
    pub const fn side_outcome(&self) -> Option<SideOutcome> {
        self.side_outcome
    }

    /// Returns the net winnings of the last settled round, side bet included.
    #[must_use]
    pub const fn last_net(&self) -> isize {
        self.last_net
    }

    /// Returns the win/lose indicator from the last settlement.
    #[must_use]
    pub const fn flash(&self) -> Option<Flash> {
        self.flash
    }

    /// Concatenates the side-bet and per-hand outcome labels for display.
    #[must_use]
    pub fn outcome_line(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(side) = self.side_outcome {
            parts.push(side.to_string());
        }
        parts.extend(self.outcomes.iter().map(ToString::to_string));
        parts.join(" | ")
    }

    /// Captures a read-only snapshot of the table for the view layer.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            balance: self.balance,
            main_bet: self.main_bet,
            side_bet: self.side_bet,
            phase: self.phase,
            player_hands: self.player_hands.clone(),
            hand_bets: self.hand_bets.clone(),
            active_hand: self.active_hand,
            dealer: self.dealer.clone(),
            double_allowed: self.double_allowed,
            split_allowed: self.split_allowed,
            outcomes: self.outcomes.clone(),
            side_outcome: self.side_outcome,
            last_net: self.last_net,
            flash: self.flash,
        }
    }
}
