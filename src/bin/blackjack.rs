//! Console blackjack against the dealer.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack::{
    Card, DecisionProvider, GameResult, Hand, PayoutType, Presenter, Session, SessionOptions,
    Winner,
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "================================";
const THIN_SEPARATOR: &str = "--------------------------------";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player name; prompted for when absent.
    #[arg(short, long)]
    name: Option<String>,

    /// Chips to start with.
    #[arg(short, long, default_value_t = 100)]
    chips: usize,

    /// Deck seed; defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Replace the deck before a deal when fewer cards remain.
    #[arg(long, default_value_t = 10)]
    min_deck: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = SessionOptions::default()
        .with_starting_chips(args.chips)
        .with_minimum_deck_size(args.min_deck)
        .with_seed(seed);

    let name = args.name.unwrap_or_else(prompt_name);
    let table = Table::new(name.clone(), options.dealer_name.clone());
    let mut session = Session::new(name, Prompter, table, options);

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prints `prompt` and reads one trimmed line from `input`.
///
/// Returns `None` once input is closed.
fn read_trimmed(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_owned()),
    }
}

/// Reads a command from stdin, trimmed and lowercased.
fn prompt_line(prompt: &str) -> Option<String> {
    read_trimmed(&mut io::stdin().lock(), prompt).map(|line| line.to_lowercase())
}

fn prompt_name() -> String {
    read_name(&mut io::stdin().lock())
}

/// Asks until a non-empty name is entered. The name keeps its case.
fn read_name(input: &mut impl BufRead) -> String {
    let mut prompt = "Enter your name: ";
    loop {
        let Some(name) = read_trimmed(input, prompt) else {
            return String::from("Player");
        };
        if !name.is_empty() {
            return name;
        }
        prompt = "Name cannot be empty. Enter your name: ";
    }
}

/// Asks until the answer matches one of `choices` (full word or first
/// letter). Returns the matched choice, or `None` once input is closed.
fn prompt_choice(prompt: &str, choices: &[&'static str]) -> Option<&'static str> {
    loop {
        let input = prompt_line(&format!("{prompt} "))?;
        let matched = choices
            .iter()
            .find(|choice| input == **choice || choice.get(..1) == Some(input.as_str()));
        if let Some(choice) = matched {
            return Some(*choice);
        }
        println!("Invalid choice. Please enter: {}", choices.join(", "));
    }
}

/// Reads decisions from stdin. Closed input means quit, stand and stop.
struct Prompter;

impl DecisionProvider for Prompter {
    fn bet_amount(&mut self, max_chips: usize) -> usize {
        if max_chips == 0 {
            return 0;
        }

        loop {
            let Some(input) = prompt_line(&format!("Enter your bet (1-{max_chips}, 0 to quit): "))
            else {
                return 0;
            };
            match input.parse::<usize>() {
                Ok(bet) if bet <= max_chips => return bet,
                Ok(_) => println!("Please enter a number between 1 and {max_chips}"),
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }

    fn wants_to_hit(&mut self) -> bool {
        prompt_choice("Hit (h) or Stand (s)?", &["hit", "stand"]) == Some("hit")
    }

    fn wants_to_play_again(&mut self) -> bool {
        prompt_choice("Play another round? (y/n)", &["yes", "no"]) == Some("yes")
    }
}

/// Prints game events to stdout.
struct Table {
    player: String,
    dealer: String,
}

impl Table {
    const fn new(player: String, dealer: String) -> Self {
        Self { player, dealer }
    }

    fn print_hand(name: &str, hand: &Hand) {
        println!("{name}: {hand} (Value: {})", hand.value());
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn round_verdict(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Congratulations! You won this round.",
        Winner::Dealer => "Dealer wins this round. Better luck next time!",
        Winner::Tie => "It's a tie! Your bet has been returned.",
    }
}

fn format_visible(cards: &[Card]) -> String {
    match cards.first() {
        Some(card) => format!("{card}, [ Hidden card ]"),
        None => String::from("No cards"),
    }
}

impl Presenter for Table {
    fn welcome(&mut self, player_name: &str) {
        println!("{SEPARATOR}");
        println!("Welcome to Blackjack, {player_name}.");
        println!("{SEPARATOR}");
        println!();
    }

    fn player_status(&mut self, player_name: &str, chips: usize) {
        println!("{player_name} has {chips} chips.");
        println!();
    }

    fn initial_deal(
        &mut self,
        player_hand: &Hand,
        dealer_visible: &[Card],
        dealer_visible_value: u8,
    ) {
        println!("{THIN_SEPARATOR}");
        println!("INITIAL DEAL");
        println!("{THIN_SEPARATOR}");
        Self::print_hand(&self.player, player_hand);
        println!(
            "{}: {} (Visible Value: {})",
            self.dealer,
            format_visible(dealer_visible),
            dealer_visible_value
        );
        println!();
    }

    fn card_dealt(&mut self, participant: &str, card: Card, hand: &Hand) {
        println!("{participant} draws: {card}");
        Self::print_hand(participant, hand);
    }

    fn bust(&mut self, participant: &str) {
        println!("{}", colorize(&format!("{participant} busted! (Over 21)"), "31"));
    }

    fn stand(&mut self, participant: &str) {
        println!("{participant} stands.");
    }

    fn dealer_turn_started(&mut self, dealer_hand: &Hand) {
        println!();
        println!("{THIN_SEPARATOR}");
        println!("DEALER'S TURN");
        println!("{THIN_SEPARATOR}");
        Self::print_hand(&self.dealer, dealer_hand);
    }

    fn round_result(
        &mut self,
        player_hand: &Hand,
        dealer_hand: &Hand,
        result: GameResult,
        bet: usize,
    ) {
        println!();
        println!("{SEPARATOR}");
        println!("ROUND RESULTS");
        println!("{SEPARATOR}");
        Self::print_hand(&self.player, player_hand);
        Self::print_hand(&self.dealer, dealer_hand);
        println!();

        match result.winner {
            Winner::Player => {
                let headline = if result.payout_type == PayoutType::Blackjack {
                    "BLACKJACK! You win!"
                } else {
                    "You win!"
                };
                println!("{}", colorize(headline, "32"));
                println!("You won {} chips!", result.chips_returned(bet));
            }
            Winner::Dealer => {
                println!("{}", colorize("Dealer wins!", "31"));
                println!("You lost {bet} chips.");
            }
            Winner::Tie => {}
        }
        println!("{}", round_verdict(result.winner));
        println!();
    }

    fn game_over(&mut self, final_chips: usize) {
        println!("{SEPARATOR}");
        println!("GAME OVER");
        println!("{SEPARATOR}");
        println!("Final chips: {final_chips}");
        println!("Thanks for playing!");
        println!("{SEPARATOR}");
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}
