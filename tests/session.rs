//! Session loop tests against scripted consoles.

use std::io::Cursor;

use blackjack_table::{
    Action, ChoiceError, Console, Continue, Event, GameOptions, IoConsole, Outcome, Prompt,
    Session,
};

fn transcript(seed: u64, input: &str) -> String {
    transcript_bytes(seed, input.as_bytes())
}

fn transcript_bytes(seed: u64, input: &[u8]) -> String {
    let console = IoConsole::new(Cursor::new(input.to_vec()), Vec::new());
    let mut session = Session::new(console, GameOptions::default(), seed);
    session.run().unwrap();
    String::from_utf8(session.into_console().into_output()).unwrap()
}

/// Answers "hit" to every turn and "n" when asked to continue.
#[derive(Default)]
struct AlwaysHit {
    prompts: Vec<Prompt>,
    events: Vec<Event>,
}

impl Console for AlwaysHit {
    fn prompt(&mut self, prompt: Prompt) -> Option<String> {
        self.prompts.push(prompt);
        Some(
            match prompt {
                Prompt::Name => "Ada",
                Prompt::Action => "hit",
                Prompt::PlayAgain => "n",
            }
            .to_owned(),
        )
    }

    fn show(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

#[test]
fn parses_actions_case_insensitively() {
    assert_eq!("hit".parse::<Action>(), Ok(Action::Hit));
    assert_eq!("  STAY ".parse::<Action>(), Ok(Action::Stay));
    assert_eq!("Hit".parse::<Action>(), Ok(Action::Hit));
    assert_eq!("".parse::<Action>(), Err(ChoiceError::Empty));
    assert_eq!("split".parse::<Action>(), Err(ChoiceError::Unrecognized));
    assert_eq!("hits".parse::<Action>(), Err(ChoiceError::Unrecognized));
}

#[test]
fn play_again_reads_first_character() {
    assert_eq!("y".parse::<Continue>(), Ok(Continue::Yes));
    assert_eq!("Yes please".parse::<Continue>(), Ok(Continue::Yes));
    assert_eq!("NO".parse::<Continue>(), Ok(Continue::No));
    assert_eq!("nah".parse::<Continue>(), Ok(Continue::No));
    assert_eq!("  no".parse::<Continue>(), Ok(Continue::No));
    assert_eq!("\tY".parse::<Continue>(), Ok(Continue::Yes));
    assert_eq!("".parse::<Continue>(), Err(ChoiceError::Empty));
    assert_eq!("   ".parse::<Continue>(), Err(ChoiceError::Empty));
    assert_eq!("maybe".parse::<Continue>(), Err(ChoiceError::Unrecognized));
}

#[test]
fn staying_plays_one_round_and_says_goodbye() {
    let out = transcript(7, "Ada\nstay\nn\n");

    assert!(out.starts_with("Welcome to blackjack!\nDealer stays on 17.\nEnter your name: "));
    assert!(out.contains("Ada stays..."));
    assert!(out.contains("Continue playing? [y/n]: "));
    assert_eq!(out.matches("Thanks for playing Blackjack! Have a good one.").count(), 1);
    assert!(out.ends_with("Thanks for playing Blackjack! Have a good one.\n"));
}

#[test]
fn invalid_answers_reprompt() {
    let out = transcript(7, "Ada\nsplit\n\nSTAY\n\nmaybe\nN\n");

    assert_eq!(out.matches("Invalid input. Choose one of Hit or Stay.").count(), 2);
    assert_eq!(out.matches("Hit or Stay: ").count(), 3);
    assert_eq!(out.matches("Invalid input [y/n] only.").count(), 2);
    assert_eq!(out.matches("Continue playing? [y/n]: ").count(), 3);
    assert!(out.contains("Thanks for playing"));
}

#[test]
fn undecodable_answers_reprompt() {
    let out = transcript_bytes(7, b"Ada\n\xff\xfe\nstay\n\xff\nn\n");

    assert_eq!(out.matches("Invalid input. Choose one of Hit or Stay.").count(), 1);
    assert_eq!(out.matches("Hit or Stay: ").count(), 2);
    assert!(out.contains("Hit or Stay: Ada stays..."));
    assert_eq!(out.matches("Invalid input [y/n] only.").count(), 1);
    assert!(out.ends_with("Thanks for playing Blackjack! Have a good one.\n"));
}

#[test]
fn yes_starts_a_fresh_round() {
    let out = transcript(11, "Ada\nstay\ny\nBob\nstay\nno\n");

    assert_eq!(out.matches("Welcome to blackjack!").count(), 2);
    assert!(out.contains("Ada stays..."));
    assert!(out.contains("Bob stays..."));
    assert_eq!(out.matches("Thanks for playing").count(), 1);
}

#[test]
fn closed_input_ends_quietly() {
    let out = transcript(7, "");
    assert!(out.contains("Enter your name: "));
    assert!(!out.contains("Thanks for playing"));

    let out = transcript(7, "Ada\nstay\n");
    assert!(out.contains("Continue playing? [y/n]: "));
    assert!(!out.contains("Thanks for playing"));
}

#[test]
fn same_seed_same_transcript() {
    let input = "Ada\nstay\ny\nAda\nstay\nn\n";
    assert_eq!(transcript(99, input), transcript(99, input));
}

#[test]
fn board_shows_hidden_hole_card_during_player_turn() {
    let out = transcript(5, "Ada\nstay\nn\n");
    let first_board = out
        .split("Hit or Stay: ")
        .next()
        .unwrap();

    assert!(first_board.contains("--------------------\nDealer: "));
    assert!(first_board.contains("**HIDDEN**"));
    assert!(first_board.contains("\nAda: "));
}

#[test]
fn busting_player_skips_dealer_turn() {
    let mut session = Session::new(AlwaysHit::default(), GameOptions::default(), 3);
    session.run().unwrap();
    let console = session.into_console();

    let result = console
        .events
        .iter()
        .find_map(|event| match event {
            Event::Result { player, result } => Some((player.clone(), *result)),
            _ => None,
        })
        .unwrap();
    assert_eq!(result.0, "Ada");
    assert_eq!(result.1.outcome, Outcome::PlayerBust);
    assert!(result.1.player_score > 21);

    assert!(!console.events.contains(&Event::DealerStays));
    assert!(
        !console
            .events
            .iter()
            .any(|event| matches!(event, Event::Drew { name, .. } if name == "Dealer"))
    );
    assert_eq!(console.prompts.first(), Some(&Prompt::Name));
    assert_eq!(console.prompts.last(), Some(&Prompt::PlayAgain));
    assert_eq!(console.events.last(), Some(&Event::Farewell));
}

#[test]
fn name_is_trimmed() {
    let out = transcript(1, "  Ada  \nstay\nn\n");
    assert!(out.contains("Hit or Stay: Ada stays..."));
    assert!(out.contains("\nAda: "));
}

#[test]
fn event_messages() {
    assert_eq!(
        Event::Welcome {
            dealer_stands_on: 17
        }
        .to_string(),
        "Welcome to blackjack!\nDealer stays on 17."
    );
    assert_eq!(Event::Hits("Ada".into()).to_string(), "Ada hits...");
    assert_eq!(Event::DealerStays.to_string(), "Dealer stays.");
    assert_eq!(Prompt::Action.to_string(), "Hit or Stay: ");
}
