// UI layer: the console driver. One mandatory lookup, then a loop asking
// for origin/destination pairs until the user types `q` (or input ends).
//
// Input goes through the `Prompt` trait: `TerminalPrompt` uses `dialoguer`
// when attached to a terminal, `LinePrompt` reads plain lines from any
// `BufRead` (piped stdin, or a buffer in tests).

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::DirectionsProvider;
use crate::config::Config;
use crate::fallback::{FallbackChain, MANDATORY_DESTINATION, MANDATORY_ORIGIN};
use crate::format::render_route;
use crate::route::RouteSource;

/// Typed at either prompt to leave the loop. Case-insensitive.
pub const QUIT: &str = "q";

/// Source of user input, one line per call.
pub trait Prompt {
    /// Ask for one line. Returns it trimmed, or `None` once input is exhausted.
    fn ask(&mut self, label: &str) -> Result<Option<String>>;
}

/// Interactive prompt backed by `dialoguer`.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        // `allow_empty` so a blank answer reaches our own validation
        // instead of dialoguer silently re-asking.
        match Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Line-oriented prompt: echoes the label to `echo` and reads from `reader`.
pub struct LinePrompt<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        LinePrompt { reader, echo }
    }

    pub fn into_echo(self) -> W {
        self.echo
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.echo, "{}: ", label)?;
        self.echo.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

enum State {
    MandatoryLookup,
    Interactive,
    Terminated,
}

enum PairInput {
    Quit,
    Blank,
    Pair(String, String),
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case(QUIT)
}

/// Ask for origin then destination. Both are read before validation, so a
/// blank in either field restarts the whole pair.
fn read_pair<P: Prompt>(prompt: &mut P) -> Result<PairInput> {
    let origin = match prompt.ask("Origin city")? {
        Some(s) if !is_quit(&s) => s,
        _ => return Ok(PairInput::Quit),
    };
    let destination = match prompt.ask("Destination city")? {
        Some(s) if !is_quit(&s) => s,
        _ => return Ok(PairInput::Quit),
    };
    if origin.is_empty() || destination.is_empty() {
        return Ok(PairInput::Blank);
    }
    Ok(PairInput::Pair(origin, destination))
}

/// Run `f` while a spinner shows `msg`.
fn with_spinner<T>(msg: &str, f: impl FnOnce() -> T) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let value = f();
    spinner.finish_and_clear();
    Ok(value)
}

fn print_key_warning<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "WARNING: MapQuest API key not configured")?;
    writeln!(out, "Fallback data will be used for the demonstration")?;
    writeln!(out, "Get a key at https://developer.mapquest.com")?;
    writeln!(out, "{}", "-".repeat(55))
}

/// Drive a whole session: startup warning, mandatory route, then the
/// interactive loop until quit.
pub fn run<D, P, W>(
    config: &Config,
    chain: &FallbackChain<D>,
    prompt: &mut P,
    out: &mut W,
) -> Result<()>
where
    D: DirectionsProvider,
    P: Prompt,
    W: Write,
{
    if config.uses_placeholder_key() {
        print_key_warning(out)?;
    }
    writeln!(out, "ROUTE CALCULATOR")?;
    writeln!(out, "{}", "=".repeat(55))?;

    let mut state = State::MandatoryLookup;
    loop {
        state = match state {
            State::MandatoryLookup => {
                writeln!(
                    out,
                    "\nMANDATORY ROUTE: {} -> {}",
                    MANDATORY_ORIGIN, MANDATORY_DESTINATION
                )?;
                writeln!(out, "{}", "-".repeat(40))?;
                let route = with_spinner("Looking up route...", || {
                    chain.mandatory(MANDATORY_ORIGIN, MANDATORY_DESTINATION)
                })?;
                render_route(out, route.as_ref(), MANDATORY_ORIGIN, MANDATORY_DESTINATION)?;

                writeln!(out, "\nCUSTOM ROUTES")?;
                writeln!(out, "Type '{}' to quit", QUIT)?;
                writeln!(out, "{}", "-".repeat(40))?;
                State::Interactive
            }
            State::Interactive => {
                writeln!(out, "\n{}", "=".repeat(25))?;
                out.flush()?;
                match read_pair(prompt)? {
                    PairInput::Quit => State::Terminated,
                    PairInput::Blank => {
                        writeln!(out, "Please enter both cities")?;
                        State::Interactive
                    }
                    PairInput::Pair(origin, destination) => {
                        writeln!(out, "Searching route: {} -> {}", origin, destination)?;
                        let route = with_spinner("Looking up route...", || {
                            chain.user(&origin, &destination)
                        })?;
                        if route.source == RouteSource::Estimated {
                            writeln!(out, "Live lookup unavailable, using a distance estimate")?;
                        }
                        render_route(out, Some(&route), &origin, &destination)?;
                        State::Interactive
                    }
                }
            }
            State::Terminated => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
        };
    }
}
