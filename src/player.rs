//! Seats at the table: the human player and the dealer.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::deck::SharedDeck;
use crate::error::DeckError;
use crate::hand::Hand;

/// Name the dealer plays under.
pub const DEALER_NAME: &str = "Dealer";

/// Cards dealt to each seat when it joins a round.
const OPENING_CARDS: usize = 2;

/// Capabilities shared by everyone holding a hand at the table.
pub trait HandHolder {
    /// Display name.
    fn name(&self) -> &str;

    /// The cards held, with their score.
    fn hand(&self) -> &Hand;

    /// Draws one card from the shared deck into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    fn draw(&mut self) -> Result<Card, DeckError>;

    /// Score including hidden cards.
    fn score(&self) -> u8 {
        self.hand().score()
    }

    /// Score of the face-up cards only.
    fn peek_score(&self) -> u8 {
        self.hand().peek_score()
    }

    /// Whether the full score is over 21.
    fn is_bust(&self) -> bool {
        self.hand().is_bust()
    }
}

/// A human seat.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    deck: SharedDeck,
    hand: Hand,
}

impl Player {
    /// Seats a player and deals the two opening cards from `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than two cards remain.
    pub fn new(name: impl Into<String>, deck: &SharedDeck) -> Result<Self, DeckError> {
        let name = name.into();
        let cards = deck.with(|deck| deck.draw_many(OPENING_CARDS))?;
        let hand = Hand::from_cards(cards);
        log::debug!("{name} dealt {} card(s), score {}", hand.len(), hand.score());
        Ok(Self {
            name,
            deck: SharedDeck::clone(deck),
            hand,
        })
    }
}

impl HandHolder for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.deck.with(crate::deck::Deck::draw)?;
        self.hand.push(card);
        log::debug!("{} drew {card}, score {}", self.name, self.hand.score());
        Ok(card)
    }
}

/// The dealer's seat: a player whose first card is dealt face down.
#[derive(Debug, Clone)]
pub struct Dealer {
    seat: Player,
}

impl Dealer {
    /// Seats the dealer, deals two cards and turns the first face down.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than two cards remain.
    pub fn new(deck: &SharedDeck) -> Result<Self, DeckError> {
        let mut seat = Player::new(DEALER_NAME, deck)?;
        seat.hand.flip(0);
        Ok(Self { seat })
    }

    /// Whether the hole card is still face down.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        self.seat
            .hand
            .cards()
            .first()
            .is_some_and(Card::is_hidden)
    }

    /// Turns the hole card face up and returns it.
    ///
    /// Returns `None` once the hole card is already showing; it is never
    /// turned back down.
    pub fn flip(&mut self) -> Option<Card> {
        if !self.is_hole_hidden() {
            return None;
        }
        let card = self.seat.hand.flip(0)?;
        log::debug!("dealer reveals {card}, score {}", self.seat.hand.score());
        Some(card)
    }
}

impl HandHolder for Dealer {
    fn name(&self) -> &str {
        self.seat.name()
    }

    fn hand(&self) -> &Hand {
        self.seat.hand()
    }

    fn draw(&mut self) -> Result<Card, DeckError> {
        self.seat.draw()
    }
}
