use std::str::FromStr;

pub const HELP_TEXT: &str = "Commands: [r]efresh, [t]ry again, [h]elp, [q]uit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Refresh,
    TryAgain,
    Help,
    Quit,
    /// Blank line; nothing to do.
    Noop,
    Unknown(String),
}

impl ConsoleCommand {
    /// Both "Refresh" and "Try Again" re-run the same fetch.
    pub fn triggers_fetch(&self) -> bool {
        matches!(self, ConsoleCommand::Refresh | ConsoleCommand::TryAgain)
    }
}

impl FromStr for ConsoleCommand {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ok(match normalized.as_str() {
            "" => ConsoleCommand::Noop,
            "r" | "refresh" => ConsoleCommand::Refresh,
            "t" | "retry" | "try again" => ConsoleCommand::TryAgain,
            "h" | "help" | "?" => ConsoleCommand::Help,
            "q" | "quit" | "exit" => ConsoleCommand::Quit,
            _ => ConsoleCommand::Unknown(s.trim().to_string()),
        })
    }
}
