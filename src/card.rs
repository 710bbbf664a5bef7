//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in deck generation order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        })
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace, worth 11 or 1 depending on the score it is added to.
    Ace,
}

impl Rank {
    /// Every rank, in deck generation order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Face value of a numeric rank, `None` for jack through ace.
    #[must_use]
    pub const fn pips(self) -> Option<u8> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            Self::Ten => Some(10),
            Self::Jack | Self::Queen | Self::King | Self::Ace => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pips() {
            Some(pips) => write!(f, "{pips}"),
            None => f.write_str(match self {
                Self::Jack => "jack",
                Self::Queen => "queen",
                Self::King => "king",
                _ => "ace",
            }),
        }
    }
}

/// A playing card.
///
/// Rank and suit are fixed at construction; only the hidden flag changes,
/// and only through [`Card::flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    hidden: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            hidden: false,
        }
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Whether the card is face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Turns the card over, toggling its hidden flag.
    pub const fn flip(&mut self) -> &mut Self {
        self.hidden = !self.hidden;
        self
    }

    /// Point value of the card when added to a running `score`.
    ///
    /// Numeric ranks are worth their face value and jack, queen and king are
    /// worth 10. An ace is worth 11 unless that would push `score` past 21,
    /// in which case it is worth 1.
    #[must_use]
    pub const fn value(&self, score: u8) -> u8 {
        match self.rank {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => {
                if score.saturating_add(11) > 21 {
                    1
                } else {
                    11
                }
            }
            rank => match rank.pips() {
                Some(pips) => pips,
                None => 0,
            },
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hidden {
            f.write_str(HIDDEN_CARD)
        } else {
            write!(f, "{} of {}", self.rank, self.suit)
        }
    }
}

/// How a face-down card is rendered.
pub const HIDDEN_CARD: &str = "**HIDDEN**";

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
