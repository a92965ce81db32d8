//! Parsing of REPL input lines into commands

/// A line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Analysis,
    Toggle,
    Export(Option<String>),
    History,
    Clear,
    Help,
    Quit,
    /// A `/`-prefixed word that is not a command
    Unknown(String),
    /// Anything else is a chat message
    Message(String),
}

/// Interpret a trimmed, non-empty input line.
///
/// Commands work with or without a leading `/` and ignore case. Without the
/// slash, only an exact command word (or `export` plus something that looks
/// like a file path) counts as a command, so ordinary sentences starting
/// with those words stay messages.
pub fn parse_command(line: &str) -> ReplCommand {
    let (slashed, body) = match line.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let mut parts = body.split_whitespace();
    let word = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();

    let command = match (word.as_str(), args.as_slice()) {
        ("analysis" | "analyze", []) => Some(ReplCommand::Analysis),
        ("toggle", []) => Some(ReplCommand::Toggle),
        ("export", []) => Some(ReplCommand::Export(None)),
        ("export", [path]) if slashed || looks_like_path(path) => {
            Some(ReplCommand::Export(Some(path.to_string())))
        }
        ("history", []) => Some(ReplCommand::History),
        ("clear", []) => Some(ReplCommand::Clear),
        ("help" | "h" | "?", []) if slashed || word == "help" => Some(ReplCommand::Help),
        ("quit" | "exit" | "q", []) if slashed || word != "q" => Some(ReplCommand::Quit),
        _ => None,
    };

    match command {
        Some(command) => command,
        None if slashed => ReplCommand::Unknown(line.to_string()),
        None => ReplCommand::Message(line.to_string()),
    }
}

fn looks_like_path(arg: &str) -> bool {
    arg.contains(['.', '/', '\\'])
}
