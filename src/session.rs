//! The interactive loop that runs round after round against a console.
//!
//! [`Session`] owns the flow between rounds and drives each [`Game`] through
//! its states. It never touches stdin or stdout directly; everything goes
//! through a [`Console`], so the same loop runs against a terminal or a
//! scripted transcript.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{ActionError, ChoiceError};
use crate::game::{Board, DealerMove, Game, GameState};
use crate::options::GameOptions;
use crate::player::{DEALER_NAME, HandHolder};
use crate::result::{Outcome, RoundResult};

/// A question put to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Ask for the player's name.
    Name,
    /// Ask whether to hit or stay.
    Action,
    /// Ask whether to play another round.
    PlayAgain,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "Enter your name: ",
            Self::Action => "Hit or Stay: ",
            Self::PlayAgain => "Continue playing? [y/n]: ",
        })
    }
}

/// Something that happened at the table, for the console to narrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new round opens.
    Welcome {
        /// Visible score the dealer stands on.
        dealer_stands_on: u8,
    },
    /// The current table.
    Board(Board),
    /// The named seat asks for a card.
    Hits(String),
    /// The named seat stops drawing.
    Stays(String),
    /// The named seat received a card.
    Drew {
        /// Seat name.
        name: String,
        /// The card drawn.
        card: Card,
    },
    /// The dealer reached its threshold.
    DealerStays,
    /// The round is settled.
    Result {
        /// Player name.
        player: String,
        /// Final scores and outcome.
        result: RoundResult,
    },
    /// The answer to the hit/stay prompt was not understood.
    InvalidAction,
    /// The answer to the play-again prompt was not understood.
    InvalidContinue,
    /// The user declined another round.
    Farewell,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome { dealer_stands_on } => {
                write!(f, "Welcome to blackjack!\nDealer stays on {dealer_stands_on}.")
            }
            Self::Board(board) => write!(f, "{board}"),
            Self::Hits(name) => write!(f, "{name} hits..."),
            Self::Stays(name) => write!(f, "{name} stays..."),
            Self::Drew { name, card } => write!(f, "{name} drew: {card}"),
            Self::DealerStays => write!(f, "{DEALER_NAME} stays."),
            Self::Result { player, result } => match result.outcome {
                Outcome::PlayerBust => write!(
                    f,
                    "{player} busts with {}! {DEALER_NAME} wins!",
                    result.player_score
                ),
                Outcome::DealerBust => write!(
                    f,
                    "{DEALER_NAME} busts with {}! A good attempt, but {DEALER_NAME} loses.",
                    result.dealer_score
                ),
                Outcome::PlayerWins => f.write_str("You win! Congratulations."),
                Outcome::DealerWins => f.write_str("You lose! Better luck next time."),
                Outcome::Tie => f.write_str("It's a tie... Shucks."),
            },
            Self::InvalidAction => f.write_str("Invalid input. Choose one of Hit or Stay."),
            Self::InvalidContinue => f.write_str("Invalid input [y/n] only."),
            Self::Farewell => f.write_str("Thanks for playing Blackjack! Have a good one."),
        }
    }
}

/// Input and output collaborator for a [`Session`].
pub trait Console {
    /// Shows `prompt` and returns the line typed, without its line ending.
    ///
    /// Returns `None` once input is closed.
    fn prompt(&mut self, prompt: Prompt) -> Option<String>;

    /// Narrates an event.
    fn show(&mut self, event: &Event);
}

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Stop drawing.
    Stay,
}

impl FromStr for Action {
    type Err = ChoiceError;

    /// Parses `hit` or `stay`, ignoring case. Leading and trailing blanks
    /// are skipped before matching.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            Err(ChoiceError::Empty)
        } else if input.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if input.eq_ignore_ascii_case("stay") {
            Ok(Self::Stay)
        } else {
            Err(ChoiceError::Unrecognized)
        }
    }
}

/// Answer to the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continue {
    /// Deal another round.
    Yes,
    /// Leave the table.
    No,
}

impl FromStr for Continue {
    type Err = ChoiceError;

    /// Only the first character counts: `y...` or `n...`, any case. Leading
    /// blanks are skipped, so `"  no"` reads as `n`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().chars().next() {
            None => Err(ChoiceError::Empty),
            Some('y' | 'Y') => Ok(Self::Yes),
            Some('n' | 'N') => Ok(Self::No),
            Some(_) => Err(ChoiceError::Unrecognized),
        }
    }
}

/// How a round hands control back to the session.
enum Flow {
    Continue,
    Quit,
}

/// Runs rounds until the user leaves or input closes.
pub struct Session<C: Console> {
    console: C,
    options: GameOptions,
    rng: ChaCha8Rng,
}

impl<C: Console> Session<C> {
    /// Creates a session; `seed` determines every deck it deals.
    #[must_use]
    pub fn new(console: C, options: GameOptions, seed: u64) -> Self {
        Self {
            console,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the console, consuming the session.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until the user declines another or input runs out.
    ///
    /// Each round is dealt from a brand-new [`Game`]; nothing carries over.
    ///
    /// # Errors
    ///
    /// Returns an error only if a deck runs out mid-round.
    pub fn run(&mut self) -> Result<(), ActionError> {
        loop {
            let game = Game::new(self.options, self.rng.next_u64())?;
            if let Flow::Quit = self.play_round(game)? {
                return Ok(());
            }
            match self.ask_play_again() {
                Some(Continue::Yes) => {}
                Some(Continue::No) => {
                    self.console.show(&Event::Farewell);
                    return Ok(());
                }
                None => return Ok(()),
            }
        }
    }

    /// Drives one round from the name prompt to its result.
    fn play_round(&mut self, mut game: Game) -> Result<Flow, ActionError> {
        self.console.show(&Event::Welcome {
            dealer_stands_on: game.options().dealer_stands_on,
        });

        let Some(name) = self.console.prompt(Prompt::Name) else {
            return Ok(Flow::Quit);
        };
        let name = String::from(name.trim());
        game.seat_player(&name)?;

        while game.state() == GameState::PlayerTurn {
            self.console.show(&Event::Board(game.board()));
            let Some(action) = self.ask_action() else {
                return Ok(Flow::Quit);
            };
            match action {
                Action::Hit => {
                    self.console.show(&Event::Hits(name.clone()));
                    let card = game.hit()?;
                    self.console.show(&Event::Drew {
                        name: name.clone(),
                        card,
                    });
                }
                Action::Stay => {
                    self.console.show(&Event::Stays(name.clone()));
                    game.stay()?;
                }
            }
        }

        while game.state() == GameState::DealerTurn {
            match game.dealer_step()? {
                DealerMove::Hit(card) | DealerMove::Bust(card) => {
                    self.console.show(&Event::Drew {
                        name: String::from(game.dealer().name()),
                        card,
                    });
                }
                DealerMove::Stay { .. } => self.console.show(&Event::DealerStays),
            }
            self.console.show(&Event::Board(game.board()));
        }

        let result = game.showdown()?;
        log::info!("round over: {:?}", result.outcome);
        self.console.show(&Event::Result {
            player: name,
            result,
        });
        self.console.show(&Event::Board(game.board()));

        Ok(Flow::Continue)
    }

    /// Asks for hit or stay until a valid answer arrives.
    fn ask_action(&mut self) -> Option<Action> {
        loop {
            let line = self.console.prompt(Prompt::Action)?;
            match line.parse() {
                Ok(action) => return Some(action),
                Err(err) => {
                    log::debug!("rejected action {line:?}: {err}");
                    self.console.show(&Event::InvalidAction);
                }
            }
        }
    }

    /// Asks whether to continue until a valid answer arrives.
    fn ask_play_again(&mut self) -> Option<Continue> {
        loop {
            let line = self.console.prompt(Prompt::PlayAgain)?;
            match line.parse() {
                Ok(answer) => return Some(answer),
                Err(err) => {
                    log::debug!("rejected play-again answer {line:?}: {err}");
                    self.console.show(&Event::InvalidContinue);
                }
            }
        }
    }
}
