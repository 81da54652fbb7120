//! Console front-end for the blackjack engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Decision, DecisionSource, EventSink, Game, Outcome, RoundEvent};

/// Reads hit/stand decisions from stdin. Any non-affirmative answer is
/// treated as a stand.
struct ConsoleDecisions;

impl DecisionSource for ConsoleDecisions {
    fn hit_or_stand(&mut self) -> Decision {
        match prompt_line("Hit or stand? (h/s): ").to_lowercase().as_str() {
            "h" | "hit" | "y" | "yes" => Decision::Hit,
            _ => Decision::Stand,
        }
    }
}

/// Prints round events to stdout.
struct ConsolePresenter;

impl EventSink for ConsolePresenter {
    fn on_event(&mut self, event: RoundEvent) {
        match event {
            RoundEvent::PlayerTurn { hand, value } => {
                println!("\nYour hand: {hand}  (value {value})");
            }
            RoundEvent::PlayerDrew { card, hand, value } => {
                println!("You draw {card}. Your hand: {hand}  (value {value})");
            }
            RoundEvent::DeckExhausted => {
                println!("The deck is out of cards; no more can be dealt.");
            }
            RoundEvent::NaturalTwentyOne => {
                println!("Twenty-one on the deal. You win automatically!");
            }
            RoundEvent::HouseShowdown { hand, value } => {
                println!("House hand: {hand}  (value {value})");
            }
            RoundEvent::Settled {
                outcome,
                player_value,
                house_value,
            } => match outcome {
                Outcome::PlayerWin => {
                    println!(
                        "Your hand is worth {player_value} against the house's {house_value}: you win the round."
                    );
                }
                Outcome::HouseWin => {
                    println!(
                        "Your hand is worth {player_value} against the house's {house_value}: the house wins the round."
                    );
                }
                Outcome::Push => {
                    println!(
                        "Your hand is worth {player_value} against the house's {house_value}: the round is a push."
                    );
                }
            },
        }
    }
}

fn main() {
    println!("Welcome to the blackjack table.");

    let name = prompt_line("Enter your name: ");
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(name, seed);

    while game.player.has_chips() {
        let chips = game.player.chips();
        let bet = prompt_usize(&format!("\nChips: {chips}. Enter your bet (0 to quit): "));

        if bet == 0 {
            break;
        }

        if let Err(err) = game.start_round(bet) {
            println!("Invalid bet: {err}. Try again.");
            continue;
        }

        if let Err(err) = game.play_round(&mut ConsoleDecisions, &mut ConsolePresenter) {
            println!("Round error: {err}");
        }
    }

    if !game.player.has_chips() {
        println!("\nYou are out of chips.");
    }
    println!("Thanks for playing, {}. See you next time!", game.player.name());
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_usize(prompt: &str) -> usize {
    loop {
        match prompt_line(prompt).parse::<usize>() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a number."),
        }
    }
}
