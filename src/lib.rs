//! A single-player blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round between a player
//! and a dealer who stands on 17, and a [`Session`] that drives round after
//! round through a [`Console`].
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, GameOptions, GameState, HandHolder};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.seat_player("Ada").unwrap();
//! game.stay().unwrap();
//! game.dealer_play().unwrap();
//! assert!(game.state().is_over());
//! assert_eq!(game.dealer().peek_score(), game.dealer().score());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HIDDEN_CARD, Rank, Suit};
#[cfg(feature = "std")]
pub use console::IoConsole;
pub use deck::{Deck, SharedDeck};
pub use error::{ActionError, ChoiceError, DeckError};
pub use game::{Board, DealerMove, Game, GameState, SeatView};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use player::{DEALER_NAME, Dealer, HandHolder, Player};
pub use result::{Outcome, RoundResult};
pub use session::{Action, Console, Continue, Event, Prompt, Session};
