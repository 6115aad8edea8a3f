//! Command-line grammar for the viewer
//!
//! `:name [arg]` adjusts the view (`:law cubic`, `:scale 4.5`, `:spacing 2`,
//! `:grid`, `:breaks`, `:stats`, `:reset`, `:help`, `:quit`). `@path` loads a
//! file and a bare `@` or `@@` pulls text from the clipboard.

use crate::app::AppEvent;
use crate::engine::ScaleLaw;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Law(ScaleLaw),
    Scale(f64),
    Spacing(f64),
    Grid,
    Breaks,
    Stats,
    Reset,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if let Some(body) = input.strip_prefix(':') {
        parse_directive(body).unwrap_or_else(|| Command::Unknown(input.to_string()))
    } else if let Some(target) = input.strip_prefix('@') {
        match target.trim() {
            "" | "@" => Command::LoadClipboard,
            path => Command::LoadFile(path.to_string()),
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// `None` for unknown names, wrong arity or an unparsable argument.
fn parse_directive(body: &str) -> Option<Command> {
    let mut words = body.split_whitespace();
    let name = words.next()?;
    let arg = words.next();
    if words.next().is_some() {
        return None;
    }

    let command = match name {
        "q" | "quit" => flag(arg, Command::Quit)?,
        "h" | "help" => flag(arg, Command::Help)?,
        "grid" => flag(arg, Command::Grid)?,
        "breaks" => flag(arg, Command::Breaks)?,
        "stats" => flag(arg, Command::Stats)?,
        "reset" => flag(arg, Command::Reset)?,
        "law" => Command::Law(value(arg)?),
        "scale" => Command::Scale(value(arg)?),
        "spacing" => Command::Spacing(value(arg)?),
        _ => return None,
    };
    Some(command)
}

fn flag(arg: Option<&str>, command: Command) -> Option<Command> {
    arg.is_none().then_some(command)
}

fn value<T: FromStr>(arg: Option<&str>) -> Option<T> {
    arg?.parse().ok()
}

pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Law(law) => AppEvent::SetLaw(law),
        Command::Scale(scale) => AppEvent::SetScale(scale),
        Command::Spacing(spacing) => AppEvent::SetSpacing(spacing),
        Command::Grid => AppEvent::ToggleGrid,
        Command::Breaks => AppEvent::ToggleBreaks,
        Command::Stats => AppEvent::ToggleStats,
        Command::Reset => AppEvent::Reset,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_commands_and_aliases() {
        let cases = [
            (":q", Command::Quit),
            (":quit", Command::Quit),
            (":h", Command::Help),
            (":help", Command::Help),
            (":grid", Command::Grid),
            (":breaks", Command::Breaks),
            (":stats", Command::Stats),
            ("  :reset  ", Command::Reset),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_command(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_flag_commands_reject_arguments() {
        assert!(matches!(parse_command(":q now"), Command::Unknown(_)));
        assert!(matches!(parse_command(":grid on"), Command::Unknown(_)));
    }

    #[test]
    fn test_law_accepts_any_case() {
        assert_eq!(parse_command(":law cubic"), Command::Law(ScaleLaw::Cubic));
        assert_eq!(parse_command(":law  Quadratic"), Command::Law(ScaleLaw::Quadratic));
    }

    #[test]
    fn test_law_needs_a_known_name() {
        assert!(matches!(parse_command(":law quartic"), Command::Unknown(_)));
        assert!(matches!(parse_command(":law"), Command::Unknown(_)));
        assert!(matches!(parse_command(":law cubic extra"), Command::Unknown(_)));
    }

    #[test]
    fn test_numeric_arguments() {
        assert_eq!(parse_command(":scale 4.5"), Command::Scale(4.5));
        assert_eq!(parse_command(":spacing 2"), Command::Spacing(2.0));
        assert!(matches!(parse_command(":scale big"), Command::Unknown(_)));
        // range checks belong to the size config
        assert_eq!(parse_command(":scale -1"), Command::Scale(-1.0));
    }

    #[test]
    fn test_at_prefix_loads() {
        assert_eq!(parse_command("@notes.txt"), Command::LoadFile("notes.txt".into()));
        assert_eq!(parse_command("@  book.epub "), Command::LoadFile("book.epub".into()));
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_unknown_keeps_trimmed_input() {
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
        assert_eq!(parse_command(" :frobnicate "), Command::Unknown(":frobnicate".into()));
        assert_eq!(parse_command("plain"), Command::Unknown("plain".into()));
    }

    #[test]
    fn test_commands_map_to_events() {
        assert_eq!(
            command_to_app_event(Command::Law(ScaleLaw::Cubic)),
            AppEvent::SetLaw(ScaleLaw::Cubic)
        );
        assert_eq!(command_to_app_event(Command::Breaks), AppEvent::ToggleBreaks);
        assert_eq!(
            command_to_app_event(parse_command("@a.pdf")),
            AppEvent::LoadFile("a.pdf".into())
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".into())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
