//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealer is seated; waiting for the player to give a name.
    AwaitingPlayerName,
    /// Player chooses to hit or stay.
    PlayerTurn,
    /// Player went over 21. Terminal.
    PlayerBust,
    /// Dealer draws while the visible score is under the stand threshold.
    DealerTurn,
    /// Dealer went over 21. Terminal.
    DealerBust,
    /// Both hands stood and are compared. Terminal.
    Showdown,
}

impl GameState {
    /// Whether the round has finished and can be settled.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerBust | Self::Showdown)
    }
}
