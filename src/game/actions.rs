use crate::card::Card;
use crate::error::ActionError;
use crate::player::{HandHolder, Player};

use super::{Game, GameState};

impl Game {
    fn ensure_state(&self, expected: GameState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Seats the player under `name` and deals their two opening cards.
    ///
    /// # Errors
    ///
    /// Returns an error if a player is already seated, or if the deck cannot
    /// supply two cards.
    pub fn seat_player(&mut self, name: &str) -> Result<(), ActionError> {
        self.ensure_state(GameState::AwaitingPlayerName)?;

        let player = Player::new(name, &self.deck)?;
        log::info!("{name} sits down with {}", player.score());
        self.player = Some(player);
        self.state = GameState::PlayerTurn;

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round at once in [`GameState::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(GameState::PlayerTurn)?;
        let player = self.player.as_mut().ok_or(ActionError::InvalidState)?;

        let card = player.draw()?;
        if player.is_bust() {
            log::info!("{} busts with {}", player.name(), player.score());
            self.state = GameState::PlayerBust;
        }

        Ok(card)
    }

    /// Player action: Stay (stop drawing and hand over to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_state(GameState::PlayerTurn)?;

        if let Some(player) = &self.player {
            log::debug!("{} stays on {}", player.name(), player.score());
        }
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
