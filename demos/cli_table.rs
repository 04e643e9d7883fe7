//! Interactive single-table blackjack in the terminal.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use table21::{BetKind, Card, Hand, Phase, Round, TableOptions};

fn main() {
    println!("Blackjack table (empty bet to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(TableOptions::default(), seed);

    loop {
        if round.balance() == 0 && round.main_bet() == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        println!("\nBalance: {} chips", round.balance());
        let Some(bet) = prompt_amount("Main bet: ") else {
            println!("Goodbye.");
            break;
        };
        if let Err(err) = round.place_bet(BetKind::Main, bet) {
            println!("Bet rejected: {err}");
            continue;
        }

        if let Some(side) = prompt_amount("Side bet (0 to skip): ") {
            if side > 0 {
                if let Err(err) = round.place_bet(BetKind::Side, side) {
                    println!("Side bet rejected: {err}");
                }
            }
        }

        if let Err(err) = round.start_round() {
            println!("Deal rejected: {err}");
            round.reset();
            continue;
        }

        while round.phase() == Phase::Playing {
            render(&round);

            let mut choices = String::from("(h)it, (s)tand");
            if round.double_allowed() {
                choices.push_str(", (d)ouble");
            }
            if round.split_allowed() {
                choices.push_str(", s(p)lit");
            }

            let result = match prompt_line(&format!("{choices}: ")).as_str() {
                "h" => round.hit().map(|_| ()),
                "s" => round.stand(),
                "d" => round.double_down().map(|_| ()),
                "p" => round.split(),
                other => {
                    println!("Unknown action: {other}");
                    continue;
                }
            };
            if let Err(err) = result {
                println!("Rejected: {err}");
            }
        }

        render(&round);
        println!("{}  (net {:+})", round.outcome_line(), round.last_net());

        // Let the engine's own timer bring the table back to betting.
        while round.phase() == Phase::Result {
            round.tick(now_ms());
            thread::sleep(Duration::from_millis(100));
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn render(round: &Round) {
    println!("Dealer: {}", hand_line(round.dealer_hand()));
    for (index, hand) in round.player_hands().iter().enumerate() {
        let marker = if index == round.active_hand() && round.phase() == Phase::Playing {
            ">"
        } else {
            " "
        };
        println!("{marker} Hand {}: {}", index + 1, hand_line(hand));
    }
}

fn hand_line(hand: &Hand) -> String {
    let cards = hand
        .cards()
        .iter()
        .map(card_label)
        .collect::<Vec<_>>()
        .join(" ");
    let value = if hand.cards().iter().all(|card| card.revealed) {
        format!(" ({})", hand.value())
    } else {
        String::new()
    };
    format!("{cards}{value}")
}

fn card_label(card: &Card) -> String {
    if card.revealed {
        card.to_string()
    } else {
        "[?]".to_string()
    }
}

fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_lowercase()
}

fn prompt_amount(message: &str) -> Option<usize> {
    let line = prompt_line(message);
    if line.is_empty() {
        return None;
    }
    line.parse().ok()
}
