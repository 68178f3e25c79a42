//! Interactive session
//!
//! Reads one command per line and re-renders the map as each one finishes.
//! Notices are printed by the notice presenter as soon as they are raised.

use std::io::{self, Write};

use application::{LocationState, MapRendererPort, Outcome};
use domain::{Coordinate, Endpoint};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  start <address>    set the start and look it up
  dest <address>     set the destination and look it up
  here               use the current location as start
  swap               exchange start and destination
  search             compute the route
  click <lat> <lon>  record a map click
  show               show the map
  help               show this help
  quit               leave the session";

/// A parsed session line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Start(String),
    Dest(String),
    Here,
    Swap,
    Search,
    Click { latitude: f64, longitude: f64 },
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line; blank lines yield `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match word.to_lowercase().as_str() {
            "start" | "from" => Self::Start(rest.to_string()),
            "dest" | "to" => Self::Dest(rest.to_string()),
            "here" => Self::Here,
            "swap" => Self::Swap,
            "search" => Self::Search,
            "click" => Self::parse_click(rest)?,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help' for a list.")),
        };

        Ok(Some(command))
    }

    fn parse_click(args: &str) -> Result<Self, String> {
        const USAGE: &str = "Usage: click <lat> <lon>";

        let mut parts = args.split([' ', ',']).filter(|p| !p.is_empty());
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(USAGE.to_string());
        };

        match (lat.parse(), lon.parse()) {
            (Ok(latitude), Ok(longitude)) => Ok(Self::Click {
                latitude,
                longitude,
            }),
            _ => Err(USAGE.to_string()),
        }
    }
}

/// Run a command against the coordinator
///
/// Returns `None` for commands that do not touch the plan.
pub async fn execute(
    state: &LocationState,
    command: &SessionCommand,
) -> Result<Option<Outcome>, String> {
    let outcome = match command {
        SessionCommand::Start(address) => {
            state.set_location_text(Endpoint::Start, address);
            state.commit_geocode(Endpoint::Start).await
        },
        SessionCommand::Dest(address) => {
            state.set_location_text(Endpoint::Destination, address);
            state.commit_geocode(Endpoint::Destination).await
        },
        SessionCommand::Here => state.use_current_location().await,
        SessionCommand::Swap => state.swap(),
        SessionCommand::Search => state.search().await,
        SessionCommand::Click {
            latitude,
            longitude,
        } => {
            let raw = Coordinate::new(*latitude, *longitude).map_err(|e| e.to_string())?;
            state.record_map_click(raw);
            Outcome::Applied
        },
        SessionCommand::Show | SessionCommand::Help | SessionCommand::Quit => return Ok(None),
    };

    Ok(Some(outcome))
}

/// Drive the session until `quit` or end of input
///
/// Lookups run concurrently with input handling, so new commands are
/// accepted while earlier ones are still waiting on a service. Commands that
/// complete without waiting are reported before the next line is read. At
/// end of input the outstanding commands are allowed to finish; `quit`
/// abandons them.
pub async fn run_session<R, W>(
    state: &LocationState,
    renderer: &dyn MapRendererPort,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "Route planner session. Type 'help' for commands.")?;
    renderer.render(&state.snapshot());
    prompt(&mut output)?;

    let mut lines = input.lines();
    let mut input_open = true;
    let mut in_flight = FuturesUnordered::new();

    loop {
        tokio::select! {
            biased;

            Some((command, result)) = in_flight.next(), if !in_flight.is_empty() => {
                match result {
                    Ok(Some(Outcome::Ignored)) => writeln!(output, "Still locating, please wait.")?,
                    Ok(outcome) => debug!(?command, ?outcome, "Command finished"),
                    Err(message) => {
                        writeln!(output, "{message}")?;
                        continue;
                    },
                }
                renderer.render(&state.snapshot());
            }

            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };

                let command = match SessionCommand::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => {
                        prompt(&mut output)?;
                        continue;
                    },
                    Err(message) => {
                        writeln!(output, "{message}")?;
                        prompt(&mut output)?;
                        continue;
                    },
                };

                match command {
                    SessionCommand::Quit => break,
                    SessionCommand::Help => writeln!(output, "{HELP}")?,
                    command => in_flight.push(async move {
                        let result = execute(state, &command).await;
                        (command, result)
                    }),
                }
                prompt(&mut output)?;
            }

            else => break,
        }
    }

    if !in_flight.is_empty() {
        debug!(abandoned = in_flight.len(), "Leaving with commands still running");
    }
    writeln!(output, "Bye.")?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
