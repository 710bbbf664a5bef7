//! What the table shows between decisions.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, HIDDEN_CARD};
use crate::player::HandHolder;

/// Width of the rule printed between seats.
const RULE_WIDTH: usize = 20;

/// One seat as seen from across the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    /// Seat name.
    pub name: String,
    /// Score of the face-up cards.
    pub visible_score: u8,
    /// Cards in hand order; `None` for a face-down card.
    pub cards: Vec<Option<Card>>,
}

impl SeatView {
    /// Captures the visible state of `holder`.
    #[must_use]
    pub fn of(holder: &impl HandHolder) -> Self {
        Self {
            name: String::from(holder.name()),
            visible_score: holder.peek_score(),
            cards: holder
                .hand()
                .cards()
                .iter()
                .map(|card| (!card.is_hidden()).then_some(*card))
                .collect(),
        }
    }
}

/// Every seat at the table, dealer first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Seats in display order.
    pub seats: Vec<SeatView>,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        f.write_str(&rule)?;
        for seat in &self.seats {
            write!(f, "\n{}: {}", seat.name, seat.visible_score)?;
            for card in &seat.cards {
                match card {
                    Some(card) => write!(f, "\n{card}")?,
                    None => write!(f, "\n{HIDDEN_CARD}")?,
                }
            }
            write!(f, "\n{rule}")?;
        }
        Ok(())
    }
}
