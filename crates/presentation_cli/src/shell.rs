//! Interactive shell commands
//!
//! One line of input maps to one screen interaction. Typing into a field is
//! modelled as replacing its whole text, so `pickup Lond` behaves like the
//! field changing to "Lond".

use std::str::FromStr;

use domain::value_objects::EndpointKind;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  pickup <text>            type into the pickup field (p)
  dropoff <text>           type into the drop-off field (d)
  select <n> <pickup|dropoff>
                           take suggestion n for an endpoint (s)
  menu                     open/close the menu (m)
  close                    close the menu (x)
  rides                    show/hide available rides (r)
  ride <id>                open a ride's details
  confirm                  confirm the open ride
  back                     back to the ride list
  show                     redraw the screen
  help                     this help (?)
  quit                     leave (q)";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Type { kind: EndpointKind, text: String },
    /// Zero-based suggestion index
    Select { index: usize, kind: EndpointKind },
    ToggleMenu,
    CloseMenu,
    ToggleRides,
    SelectRide(String),
    Confirm,
    Back,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Suggestion numbers start at 1, got '{0}'")]
    BadIndex(String),
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_lowercase().as_str() {
            "" | "show" => Ok(Self::Show),
            "pickup" | "p" => Ok(Self::Type {
                kind: EndpointKind::Pickup,
                text: rest.to_string(),
            }),
            "dropoff" | "drop-off" | "d" => Ok(Self::Type {
                kind: EndpointKind::Dropoff,
                text: rest.to_string(),
            }),
            "select" | "s" => parse_select(rest),
            "menu" | "m" => Ok(Self::ToggleMenu),
            "close" | "x" => Ok(Self::CloseMenu),
            "rides" | "r" => Ok(Self::ToggleRides),
            "ride" => {
                if rest.is_empty() {
                    Err(ShellError::Usage("ride <id>"))
                } else {
                    Ok(Self::SelectRide(rest.to_string()))
                }
            },
            "confirm" => Ok(Self::Confirm),
            "back" | "b" => Ok(Self::Back),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::Unknown(other.to_string())),
        }
    }
}

fn parse_select(rest: &str) -> Result<ShellCommand, ShellError> {
    const USAGE: &str = "select <n> <pickup|dropoff>";

    let mut parts = rest.split_whitespace();
    let (Some(number), Some(kind), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ShellError::Usage(USAGE));
    };

    let index = number
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| ShellError::BadIndex(number.to_string()))?;
    let kind = kind
        .parse::<EndpointKind>()
        .map_err(|_| ShellError::Usage(USAGE))?;

    Ok(ShellCommand::Select { index, kind })
}
