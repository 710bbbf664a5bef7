//! Round result types for showdown.

/// How the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the dealer never plays.
    PlayerBust,
    /// Dealer went over 21 while drawing.
    DealerBust,
    /// Player's score beat the dealer's.
    PlayerWins,
    /// Dealer's score beat the player's.
    DealerWins,
    /// Equal scores.
    Tie,
}

impl Outcome {
    /// Compares final scores of two hands that both stood.
    #[must_use]
    pub const fn compare(player_score: u8, dealer_score: u8) -> Self {
        if player_score > dealer_score {
            Self::PlayerWins
        } else if player_score < dealer_score {
            Self::DealerWins
        } else {
            Self::Tie
        }
    }

    /// Whether the player took the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's full score.
    pub player_score: u8,
    /// The dealer's full score.
    pub dealer_score: u8,
}
