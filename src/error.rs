//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
    /// Fewer cards remain than were requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors produced when parsing a choice typed at a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// Nothing was entered.
    #[error("no choice entered")]
    Empty,
    /// The input is not one of the accepted choices.
    #[error("unrecognized choice")]
    Unrecognized,
}
