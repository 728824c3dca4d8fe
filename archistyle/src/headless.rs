//! Headless mode for the guessing game.
//!
//! This module provides a simple text-based interface for running the game
//! without a graphical front end. It's designed for terminals, scripts and
//! automated testing.

use anyhow::{Context, Result};
use archistyle_core::{
    sample_catalog, Catalog, GameSession, GuessOutcome, HintResult, HintStatus, IgnoreReason,
    JsonFileStore, MemoryStore, RoundStatus, SessionConfig, SettleTicket, Theme,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Configuration for a headless session.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Catalog file; the sample catalog when `None`.
    pub catalog: Option<PathBuf>,
    /// State file; in-memory progress when `None`.
    pub state: Option<PathBuf>,
    pub seed: Option<u64>,
    pub settle_delay_per_hint: Duration,
}

type SharedSession = Arc<Mutex<GameSession>>;

fn open_session(config: &HeadlessConfig) -> Result<GameSession> {
    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => sample_catalog(),
    };

    let mut session_config =
        SessionConfig::new().with_settle_delay_per_hint(config.settle_delay_per_hint);
    if let Some(seed) = config.seed {
        session_config = session_config.with_seed(seed);
    }

    let session = match &config.state {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .with_context(|| format!("opening state file {}", path.display()))?;
            GameSession::new(catalog, store, session_config)?
        }
        None => GameSession::new(catalog, MemoryStore::new(), session_config)?,
    };
    Ok(session)
}

/// Run the game in headless mode.
///
/// This provides a simple line-oriented protocol:
/// - Lines starting with `#` are commands (reveal, new, reset, stats, ...)
/// - All other lines are guesses
pub async fn run_headless(config: HeadlessConfig) -> Result<()> {
    let session: SharedSession = Arc::new(Mutex::new(open_session(&config)?));

    println!("=== Угадай архитектурный стиль ===");
    print_help();
    {
        let session = lock(&session);
        print_round(&session);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('#') {
            if !handle_command(&session, command)? {
                println!("Goodbye!");
                break;
            }
        } else {
            handle_guess(&session, line)?;
        }
        stdout.flush().ok();
    }

    Ok(())
}

fn lock(session: &SharedSession) -> std::sync::MutexGuard<'_, GameSession> {
    // A panic while holding the lock cannot leave the session half-updated
    // in a way later commands care about.
    session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Returns false when the player asked to quit.
fn handle_command(shared: &SharedSession, command: &str) -> Result<bool> {
    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    let mut session = lock(shared);
    match name {
        "quit" | "exit" => return Ok(false),
        "reveal" => match session.reveal()? {
            Some(hints) => {
                let target = session.target().map(|t| t.style.name.clone()).unwrap_or_default();
                println!("[REVEALED] {target}");
                print_hints(&hints);
            }
            None => println!("[ERROR] Nothing to reveal right now."),
        },
        "new" | "next" => {
            if session.status() == RoundStatus::Playing {
                println!("[ERROR] Finish the round first (guess or #reveal).");
            } else {
                session.start_round()?;
                print_round(&session);
            }
        }
        "reset" => {
            session.reset_progress()?;
            println!("[RESET] Progress cleared.");
            print_round(&session);
        }
        "stats" => {
            let stats = *session.stats();
            println!("[STATS]");
            println!("  Streak: {} (best {})", stats.current_streak, stats.max_streak);
            println!(
                "  Won: {}/{} ({:.0}%)",
                stats.total_games_won,
                stats.total_games_played,
                stats.win_rate() * 100.0
            );
            println!("  Photos left: {}", session.remaining_photos());
        }
        "styles" => {
            println!("[STYLES]");
            for style in session.catalog().iter() {
                let mark = if session.is_style_enabled(&style.name) { "x" } else { " " };
                println!("  [{mark}] {} ({} photos)", style.name, style.photo_urls.len());
            }
        }
        "toggle" => {
            if arg.is_empty() {
                println!("[ERROR] Usage: #toggle <style name or alias>");
            } else {
                match session.toggle_style(arg)? {
                    Some(true) => println!("[STYLES] Enabled: {arg}"),
                    Some(false) => println!("[STYLES] Disabled: {arg}"),
                    None => println!("[ERROR] Unknown style: {arg}"),
                }
            }
        }
        "theme" => {
            let theme = if arg.is_empty() {
                Ok(session.theme().toggled())
            } else {
                arg.parse::<Theme>()
            };
            match theme {
                Ok(theme) => {
                    session.set_theme(theme)?;
                    println!("[THEME] {theme}");
                }
                Err(e) => println!("[ERROR] {e}"),
            }
        }
        "help" => print_help(),
        _ => println!("[ERROR] Unknown command. Type #help for help."),
    }
    Ok(true)
}

fn handle_guess(shared: &SharedSession, text: &str) -> Result<()> {
    let mut session = lock(shared);
    let delay = session.settle_delay();

    let outcome = session.submit_guess(text)?;
    match outcome {
        GuessOutcome::Ignored(reason) => match reason {
            IgnoreReason::Animating => println!("[WAIT] Hints are still being revealed."),
            IgnoreReason::NotPlaying | IgnoreReason::NoTarget => {
                println!("[ERROR] No round in progress. Type #new to continue.")
            }
            IgnoreReason::BlankGuess => {}
        },
        GuessOutcome::Unrecognized { message } => println!("[ERROR] {message}"),
        GuessOutcome::Miss { hints, settle } => {
            println!("[MISS] Attempt {}", session.attempts().len());
            print_hints(&hints);
            drop(session);
            schedule_settle(shared, settle, delay);
        }
        GuessOutcome::Won { hints, settle } => {
            let attempts = session.attempts().len();
            let streak = session.stats().current_streak;
            println!("[WIN] Correct in {attempts} attempt(s)! Streak: {streak}");
            print_hints(&hints);
            drop(session);
            schedule_settle(shared, settle, delay);
        }
    }
    Ok(())
}

/// Clear the attempt's animation once the reveal delay has passed.
fn schedule_settle(shared: &SharedSession, ticket: SettleTicket, delay: Duration) {
    if delay.is_zero() {
        lock(shared).settle(ticket);
        return;
    }

    let shared = Arc::clone(shared);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        lock(&shared).settle(ticket);
    });
}

fn print_round(session: &GameSession) {
    match (session.status(), session.target()) {
        (RoundStatus::Playing, Some(target)) => {
            println!();
            println!("[ROUND {}] {}", session.round(), target.photo_url);
            println!("Which style is this building?");
        }
        _ => {
            println!();
            println!("[FINISHED] Every photo has been shown. Type #reset to start over.");
        }
    }
}

fn print_hints(hints: &[HintResult]) {
    for hint in hints {
        let status = match hint.status {
            HintStatus::Correct => "+",
            HintStatus::Partial => "~",
            HintStatus::Wrong => "-",
        };
        let value = hint.value.as_deref().unwrap_or("?");
        println!("  [{status}] {}: {value}", hint.label);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  #reveal          - Give up and show the answer");
    println!("  #new             - Start the next round");
    println!("  #reset           - Clear all progress and statistics");
    println!("  #stats           - Show streaks and totals");
    println!("  #styles          - List styles and whether they are enabled");
    println!("  #toggle <style>  - Enable or disable a style");
    println!("  #theme [dark|light]");
    println!("  #help            - Show this help");
    println!("  #quit            - Exit");
    println!("  (anything else is a guess)");
}
