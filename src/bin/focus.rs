//! Play Focus in the terminal.
//!
//! Usage:
//!   cargo run --bin focus -- --first PlayerA:R --second PlayerB:G
//!
//! Commands (one per line; the player whose turn it is acts):
//!   move <row> <col> <row> <col> <count>
//!   place <row> <col>
//!   click <x> <y>        feed a window click to the gesture
//!   count <n>            pieces the next clicked move carries
//!   reserve              next click places from reserve
//!   show <row> <col>     list a cell's pieces, bottom first
//!   legal                list the acting player's legal actions
//!   board                redraw
//!   quit

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_focus::display::render_snapshot;
use rust_focus::{Action, Coord, FocusConfig, FocusGame, PieceColor, PlayerSetup, Session};

/// Focus/Domination on a 6x6 board
#[derive(Parser, Debug)]
#[command(name = "focus")]
#[command(about = "Play Focus/Domination in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// First player as NAME:COLOR
    #[arg(long, default_value = "PlayerA:R", value_parser = parse_setup)]
    first: PlayerSetup,

    /// Second player as NAME:COLOR
    #[arg(long, default_value = "PlayerB:G", value_parser = parse_setup)]
    second: PlayerSetup,

    /// Stacks taller than this shed their bottom pieces
    #[arg(long, default_value_t = rust_focus::core::DEFAULT_MAX_STACK_HEIGHT)]
    max_height: usize,

    /// Captured pieces needed to win
    #[arg(long, default_value_t = rust_focus::core::DEFAULT_CAPTURES_TO_WIN)]
    captures_to_win: usize,
}

fn parse_setup(s: &str) -> Result<PlayerSetup, String> {
    let (name, color) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:COLOR, got '{}'", s))?;
    let color: PieceColor = color.parse().map_err(|e| format!("{}", e))?;
    Ok(PlayerSetup::new(name, color))
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Act(Action),
    Click(i32, i32),
    Count(usize),
    Reserve,
    Show(Coord),
    Legal,
    Board,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;
    let args: Vec<i32> = words
        .map(|w| w.parse::<i32>().with_context(|| format!("'{}' is not a number", w)))
        .collect::<Result<_>>()?;

    let want = |n: usize| -> Result<()> {
        if args.len() == n {
            Ok(())
        } else {
            bail!("'{}' takes {} numbers, got {}", verb, n, args.len())
        }
    };

    let command = match verb {
        "move" | "m" => {
            want(5)?;
            let count = usize::try_from(args[4]).context("count must not be negative")?;
            Command::Act(Action::move_stack((args[0], args[1]), (args[2], args[3]), count))
        }
        "place" | "p" => {
            want(2)?;
            Command::Act(Action::place((args[0], args[1])))
        }
        "click" => {
            want(2)?;
            Command::Click(args[0], args[1])
        }
        "count" => {
            want(1)?;
            Command::Count(usize::try_from(args[0]).context("count must not be negative")?)
        }
        "reserve" => Command::Reserve,
        "show" => {
            want(2)?;
            Command::Show(Coord::new(args[0], args[1]))
        }
        "legal" => Command::Legal,
        "board" => Command::Board,
        "quit" | "q" => Command::Quit,
        other => bail!("unknown command '{}'", other),
    };
    Ok(command)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FocusConfig::new(cli.first, cli.second)
        .with_max_stack_height(cli.max_height)
        .with_captures_to_win(cli.captures_to_win);
    let mut game = FocusGame::new(config).context("invalid game configuration")?;
    info!("game started");

    let mut session = Session::new(&mut game);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_snapshot(&session.frame()))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{:#}", e)?;
                continue;
            }
        };

        let changed = match command {
            Command::Quit => break,
            Command::Act(action) => {
                report(&mut out, session.submit(action))?;
                true
            }
            Command::Click(x, y) => match session.click(x, y) {
                Some(result) => {
                    report(&mut out, result)?;
                    true
                }
                None => {
                    writeln!(out, "selection: {:?}", session.gesture().selection())?;
                    false
                }
            },
            Command::Count(n) => {
                if !session.gesture_mut().set_count(n) {
                    writeln!(out, "count must be at least 1")?;
                }
                false
            }
            Command::Reserve => {
                session.gesture_mut().arm_reserve();
                false
            }
            Command::Show(at) => {
                match session.game().pieces_at(at) {
                    Ok(Some(pieces)) => {
                        let letters: Vec<String> = pieces.iter().map(|p| p.to_string()).collect();
                        writeln!(out, "{}", letters.join(" "))?;
                    }
                    Ok(None) => writeln!(out, "No pieces")?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
                false
            }
            Command::Legal => {
                let actor = session.acting_player();
                for action in session.game().legal_actions(&actor)? {
                    writeln!(out, "{}", action)?;
                }
                false
            }
            Command::Board => true,
        };

        if changed {
            write!(out, "{}", render_snapshot(&session.frame()))?;
        }
        if session.game().is_over() {
            break;
        }
    }
    Ok(())
}

fn report(
    out: &mut impl Write,
    result: Result<rust_focus::Outcome, rust_focus::RuleError>,
) -> io::Result<()> {
    match result {
        Ok(outcome) => writeln!(out, "{}", outcome),
        Err(e) => writeln!(out, "{}", e),
    }
}
