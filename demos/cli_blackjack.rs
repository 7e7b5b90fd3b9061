//! CLI blackjack example.
//!
//! Run with `RUST_LOG=tealeaf=debug` to see the engine's transitions.

use std::env;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tealeaf::session::PLAY_AGAIN_PROMPT;
use tealeaf::{Card, Input, Output, RoundEngine, RoundState, Session, Snapshot, TableOptions};

const WIDTH: usize = 75;
const PACE: Duration = Duration::from_millis(600);

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let engine = RoundEngine::new(TableOptions::default(), seed);

    let terminal = Terminal {
        unicode: unicode_supported(),
        last_state: None,
    };
    let mut session = Session::new(engine, Stdin::new(), terminal);

    match session.run() {
        Ok(rounds) => println!("Thanks for playing! Rounds played: {rounds}"),
        Err(err) => eprintln!("Game error: {err}"),
    }
}

struct Stdin {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl Stdin {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt} ");
        let _ = io::stdout().flush();
        self.lines.next()?.ok()
    }
}

impl Input for Stdin {
    fn player_name(&mut self) -> Option<String> {
        clear_screen();
        draw_title();
        self.prompt_line("Please tell me your name:")
    }

    fn decision(&mut self) -> Option<String> {
        self.prompt_line(">")
    }

    fn play_again(&mut self) -> Option<String> {
        self.prompt_line(PLAY_AGAIN_PROMPT)
    }
}

struct Terminal {
    unicode: bool,
    last_state: Option<RoundState>,
}

impl Output for Terminal {
    fn render(&mut self, snapshot: &Snapshot) {
        // Let each dealt card and dealer draw sink in before the next one.
        if matches!(
            self.last_state,
            Some(RoundState::Dealing | RoundState::DealerTurn)
        ) {
            thread::sleep(PACE);
        }
        self.last_state = Some(snapshot.state);

        clear_screen();
        draw_title();

        let half = WIDTH / 2;
        println!(
            "{:<half$}{}",
            snapshot.player_name, snapshot.dealer_name
        );
        println!("{}", "-".repeat(WIDTH));
        println!(
            "{}{}",
            pad(&self.format_cards(&snapshot.player_cards), half),
            self.format_cards(&snapshot.dealer_cards)
        );
        println!(
            "{:<half$}{}",
            snapshot.messages.player_tally, snapshot.messages.dealer_tally
        );
        println!(
            "{:<half$}{}",
            snapshot.messages.player_status, snapshot.messages.dealer_status
        );
        println!("{}", "-".repeat(WIDTH));
        println!("{}", snapshot.messages.game_status);
    }
}

impl Terminal {
    fn format_cards(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .map(|card| self.format_card(card))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_card(&self, card: &Card) -> String {
        if !card.face_up {
            return colorize("##", "1;34;47");
        }

        let suit = if self.unicode {
            card.suit.symbol()
        } else {
            card.suit.ascii()
        };
        let code = if card.suit.is_red() {
            "1;31;47"
        } else {
            "1;30;47"
        };
        colorize(&format!("{}{suit}", card.face), code)
    }
}

/// Pads to `width` visible columns, ignoring escape sequences.
fn pad(text: &str, width: usize) -> String {
    let mut visible = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        match ch {
            '\u{1b}' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => visible += 1,
            _ => {}
        }
    }
    format!("{text}{}", " ".repeat(width.saturating_sub(visible)))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
    let _ = io::stdout().flush();
}

fn draw_title() {
    let marquee = "*".repeat(30);
    println!();
    println!("{marquee:^WIDTH$}");
    println!("{:^WIDTH$}", "Tealeaf Casino Blackjack");
    println!("{marquee:^WIDTH$}");
    println!();
}

fn unicode_supported() -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| env::var(key).ok())
        .is_some_and(|value| value.contains("UTF-8"))
}
