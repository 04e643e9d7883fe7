//! A single-table blackjack round engine.
//!
//! The crate provides a [`Round`] type that carries one player's session
//! through betting, the deal, hand actions (hit, stand, double, one split),
//! dealer play, and settlement, including a 10:1 pair side bet. Rules are
//! fixed: blackjack pays 3:2 and the dealer stands on all 17s.
//!
//! A presentation layer drives the engine through the action methods and
//! reads it back through the accessors or a serializable [`TableSnapshot`];
//! the timed return from the result screen is driven by [`Round::tick`], so
//! the engine itself holds no clocks or timers.
//!
//! # Example
//!
//! ```
//! use table21::{BetKind, Phase, Round, TableOptions};
//!
//! let mut round = Round::new(TableOptions::default(), 42);
//! round.place_bet(BetKind::Main, 100)?;
//! round.start_round()?;
//!
//! while round.phase() == Phase::Playing {
//!     round.stand()?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod payout;
pub mod round;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, StartError};
pub use hand::Hand;
pub use options::TableOptions;
pub use payout::{HandOutcome, HandResolution, SideOutcome, resolve_hand};
pub use round::{Action, BetKind, Flash, Phase, Round, TableSnapshot};
pub use shoe::Shoe;
