//! Round controller and state management.

use alloc::vec::Vec;

use crate::deck::{Deck, SharedDeck};
use crate::error::DeckError;
use crate::options::GameOptions;
use crate::player::{Dealer, Player};

mod actions;
pub mod board;
mod dealer;
pub mod state;

pub use board::{Board, SeatView};
pub use dealer::DealerMove;
pub use state::GameState;

/// A single round of blackjack between one player and the dealer.
///
/// The game owns the deck and lends it to both seats. A round runs from
/// seating the player to one of the terminal states; a new round needs a new
/// `Game`.
#[derive(Debug)]
pub struct Game {
    /// Deck shared with both seats.
    deck: SharedDeck,
    /// Table options.
    options: GameOptions,
    /// Current round state.
    state: GameState,
    /// The dealer, seated when the game is created.
    dealer: Dealer,
    /// The player, once named.
    player: Option<Player>,
}

impl Game {
    /// Creates a round with a freshly shuffled deck and a seated dealer.
    ///
    /// # Errors
    ///
    /// Never fails with a full deck; returns a [`DeckError`] only if the
    /// dealer cannot be dealt in.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::AwaitingPlayerName);
    /// assert_eq!(game.cards_remaining(), 50);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DeckError> {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a round that deals from `deck` as given.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if the deck holds fewer than the
    /// dealer's two cards.
    pub fn with_deck(options: GameOptions, deck: Deck) -> Result<Self, DeckError> {
        let deck = deck.shared();
        let dealer = Dealer::new(&deck)?;
        log::info!(
            "new round, dealer stands on {}",
            options.dealer_stands_on
        );

        Ok(Self {
            deck,
            options,
            state: GameState::AwaitingPlayerName,
            dealer,
            player: None,
        })
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player, if seated.
    #[must_use]
    pub const fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.with(|deck| deck.len())
    }

    /// Snapshot of what is visible on the table, dealer first.
    #[must_use]
    pub fn board(&self) -> Board {
        let mut seats = Vec::with_capacity(2);
        seats.push(SeatView::of(&self.dealer));
        if let Some(player) = &self.player {
            seats.push(SeatView::of(player));
        }
        Board { seats }
    }
}
