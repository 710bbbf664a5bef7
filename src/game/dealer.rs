use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::player::HandHolder;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// One decision made by the dealer during its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerMove {
    /// Drew a card and keeps playing.
    Hit(Card),
    /// Drew a card and went over 21.
    Bust(Card),
    /// Reached the stand threshold and revealed the hole card.
    Stay {
        /// The hole card, if it was still face down.
        hole: Option<Card>,
    },
}

impl Game {
    /// Plays one dealer decision.
    ///
    /// The dealer draws while its visible score is below
    /// [`GameOptions::dealer_stands_on`](crate::GameOptions::dealer_stands_on);
    /// the hole card does not count toward that check. A bust is judged on
    /// the full score and reveals the hole card. Once the visible score
    /// reaches the threshold the dealer stays, reveals, and the round moves to
    /// [`GameState::Showdown`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty.
    pub fn dealer_step(&mut self) -> Result<DealerMove, ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let visible = self.dealer.peek_score();
        if visible >= self.options.dealer_stands_on {
            log::debug!("dealer stays on visible {visible}");
            let hole = self.dealer.flip();
            self.state = GameState::Showdown;
            return Ok(DealerMove::Stay { hole });
        }

        let card = self.dealer.draw()?;
        if self.dealer.is_bust() {
            self.dealer.flip();
            log::info!("dealer busts with {}", self.dealer.score());
            self.state = GameState::DealerBust;
            return Ok(DealerMove::Bust(card));
        }

        Ok(DealerMove::Hit(card))
    }

    /// Plays the dealer's whole turn.
    ///
    /// Returns every move made, ending with a bust or a stay.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out.
    pub fn dealer_play(&mut self) -> Result<Vec<DealerMove>, ActionError> {
        let mut moves = Vec::new();
        loop {
            let step = self.dealer_step()?;
            moves.push(step);
            if self.state != GameState::DealerTurn {
                return Ok(moves);
            }
        }
    }

    /// Settles a finished round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached a terminal state.
    pub fn showdown(&self) -> Result<RoundResult, ActionError> {
        let player = self.player.as_ref().ok_or(ActionError::InvalidState)?;
        let player_score = player.score();
        let dealer_score = self.dealer.score();

        let outcome = match self.state {
            GameState::PlayerBust => Outcome::PlayerBust,
            GameState::DealerBust => Outcome::DealerBust,
            GameState::Showdown => Outcome::compare(player_score, dealer_score),
            GameState::AwaitingPlayerName | GameState::PlayerTurn | GameState::DealerTurn => {
                return Err(ActionError::InvalidState);
            }
        };

        Ok(RoundResult {
            outcome,
            player_score,
            dealer_score,
        })
    }
}
