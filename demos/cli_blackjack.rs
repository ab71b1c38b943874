//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, Event, EventSink, Game, GameOptions, MemoryWallet, PacedSink, RoundState, Seat, Wallet,
};
use tracing_subscriber::EnvFilter;

/// Prints table events as they happen.
struct Terminal;

impl EventSink for Terminal {
    fn emit(&mut self, event: Event) {
        match event {
            Event::CardDealt { seat, card } => {
                let who = seat_name(seat);
                if card.concealed {
                    println!("{who} receives a face-down card");
                } else {
                    println!("{who} receives {}", format_card(&card));
                }
            }
            Event::CardRevealed { card } => {
                println!("Dealer turns over {}", format_card(&card));
            }
            Event::DealerPeek { up_card } => {
                println!("Dealer shows {} and peeks...", format_card(&up_card));
            }
            Event::FundsRejected { amount } => {
                println!("{}", colorize(&format!("Not enough chips for {amount}"), "31"));
            }
            Event::SplitUnavailable => println!("Split is coming soon!"),
            Event::RoundFinished { outcome, profit } => {
                let code = if profit > 0 { "32" } else if profit < 0 { "31" } else { "33" };
                println!("{}", colorize(&format!("{outcome} ({profit:+})"), code));
            }
            Event::RoundAborted { refund } => {
                println!("Round aborted, {refund} refunded");
            }
            Event::BetPlaced { .. } | Event::ScoreChanged { .. } | Event::StateChanged(_) => {}
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::paced();
    let min_bet = options.min_bet;
    let wallet = MemoryWallet::new(options.starting_balance);
    let mut game = Game::new(options, wallet, PacedSink::new(Terminal), seed);

    loop {
        let balance = game.wallet().balance();
        if balance < min_bet {
            println!("You are out of chips. Game over.");
            break;
        }

        let Some(bet) = prompt_u64(&format!(
            "\nBalance {balance}. Bet amount ({min_bet}-{balance}, 0 to quit): "
        )) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if bet < min_bet {
            println!("Minimum bet is {min_bet}.");
            continue;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        while game.state() == RoundState::Dealt {
            print_table(&game);
            println!("{}", format_actions(&game));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand().map(|_| ()),
                "d" | "double" => game.double_down().map(|_| ()),
                "p" | "split" => game.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&game);
        let stats = game.wallet().stats();
        println!(
            "Games {} | win rate {:.1}% | net {:+}",
            stats.total_games,
            stats.win_rate(),
            stats.total_profit
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u64(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table<W: Wallet, S: EventSink>(game: &Game<W, S>) {
    let dealer_value = game
        .dealer_score()
        .map_or_else(|| "?".to_string(), |v| v.to_string());
    println!(
        "\nDealer: {} (value {dealer_value})",
        format_cards(game.dealer_hand().cards())
    );
    println!(
        "You:    {} (value {}) | bet {}",
        format_cards(game.player_hand().cards()),
        game.player_score(),
        game.bet()
    );
}

fn format_actions<W: Wallet, S: EventSink>(game: &Game<W, S>) -> String {
    let parts = [
        format_action("hit", "h", game.can_hit()),
        format_action("stand", "s", game.can_stand()),
        format_action("double", "d", game.can_double()),
        format_action("split", "p", game.can_split()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

const fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "You",
        Seat::Dealer => "Dealer",
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    if card.concealed {
        return "??".to_string();
    }
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
