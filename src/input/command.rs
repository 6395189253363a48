//! Typed command parsing for the terminal front-end
//!
//! Each line of input becomes one [`TextCommand`]. Square coordinates are
//! checked against a [`BoardLookup`] so out-of-range input fails here instead
//! of turning into a pick nobody can match.

use crate::core::{CoreError, CoreResult};
use crate::game::events::{GameCommand, PickEvent};
use crate::game::rules::BoardLookup;
use crate::game::types::{Board, PieceId, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    /// Forward a pick to the turn engine as-is
    Pick(PickEvent),
    /// A click on a square that may hold a piece; resolved against the state
    Click(Square),
    /// Reset / mode / difficulty
    Game(GameCommand),
    Show,
    Moves,
    History,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  select <piece-id>             select a piece, e.g. select red_2_3
  square <row> <col> <board>    move the selected piece there (alias: to)
  click <row> <col> <board>     pick whatever is on that square (alias: at)
  empty                         clear the selection (alias: deselect)
  reset                         start over
  mode <pvp|pvc>                store the game mode
  difficulty <easy|medium|hard> store the difficulty
  show | moves | history | json | help | quit";

/// Parse one input line
pub fn parse_command(line: &str, lookup: &BoardLookup) -> CoreResult<TextCommand> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(parse_error(line, "empty command"));
    };
    let args: Vec<&str> = words.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "select" | "piece" | "pick" => {
            let [id] = args.as_slice() else {
                return Err(parse_error(line, "expected a piece id"));
            };
            TextCommand::Pick(PickEvent::Piece {
                id: PieceId::from(*id),
            })
        }
        "square" | "to" => TextCommand::Pick(PickEvent::Square {
            square: parse_square(line, &args, lookup)?,
        }),
        "click" | "at" => TextCommand::Click(parse_square(line, &args, lookup)?),
        "empty" | "deselect" => TextCommand::Pick(PickEvent::Empty),
        "reset" => TextCommand::Game(GameCommand::Reset),
        "mode" => {
            let [mode] = args.as_slice() else {
                return Err(parse_error(line, "expected pvp or pvc"));
            };
            TextCommand::Game(GameCommand::SetMode(mode.parse()?))
        }
        "difficulty" => {
            let [level] = args.as_slice() else {
                return Err(parse_error(line, "expected easy, medium or hard"));
            };
            TextCommand::Game(GameCommand::SetDifficulty(level.parse()?))
        }
        "show" | "board" => TextCommand::Show,
        "moves" => TextCommand::Moves,
        "history" => TextCommand::History,
        "json" => TextCommand::Json,
        "help" | "?" => TextCommand::Help,
        "quit" | "exit" => TextCommand::Quit,
        other => return Err(parse_error(line, &format!("unknown command '{other}'"))),
    };

    Ok(command)
}

fn parse_square(line: &str, args: &[&str], lookup: &BoardLookup) -> CoreResult<Square> {
    let [row, col, board] = args else {
        return Err(parse_error(line, "expected <row> <col> <board>"));
    };
    let row: u8 = row
        .parse()
        .map_err(|_| parse_error(line, "row must be a number"))?;
    let col: u8 = col
        .parse()
        .map_err(|_| parse_error(line, "col must be a number"))?;
    let board: Board = board.parse()?;

    Ok(lookup.resolve(row, col, board)?)
}

fn parse_error(input: &str, message: &str) -> CoreError {
    CoreError::CommandParse {
        input: input.trim().to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, GameMode};

    fn parse(line: &str) -> CoreResult<TextCommand> {
        parse_command(line, &BoardLookup::new(8))
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(
            parse("select red_2_3").unwrap(),
            TextCommand::Pick(PickEvent::piece("red_2_3"))
        );
        assert!(parse("select").is_err());
    }

    #[test]
    fn test_parse_square() {
        assert_eq!(
            parse("to 3 4 lower").unwrap(),
            TextCommand::Pick(PickEvent::square(3, 4, Board::Lower))
        );
        assert_eq!(
            parse("at 0 1 u").unwrap(),
            TextCommand::Click(Square::new(0, 1, Board::Upper))
        );
    }

    #[test]
    fn test_parse_square_errors() {
        assert!(matches!(parse("square 3 4"), Err(CoreError::CommandParse { .. })));
        assert!(matches!(parse("square x 4 lower"), Err(CoreError::CommandParse { .. })));
        assert!(matches!(parse("square 3 4 middle"), Err(CoreError::Game(_))));
        assert!(matches!(parse("square 8 0 lower"), Err(CoreError::Game(_))));
    }

    #[test]
    fn test_parse_game_commands() {
        assert_eq!(parse("reset").unwrap(), TextCommand::Game(GameCommand::Reset));
        assert_eq!(
            parse("mode pvc").unwrap(),
            TextCommand::Game(GameCommand::SetMode(GameMode::PlayerVsComputer))
        );
        assert_eq!(
            parse("difficulty HARD").unwrap(),
            TextCommand::Game(GameCommand::SetDifficulty(Difficulty::Hard))
        );
        assert!(matches!(parse("mode solo"), Err(CoreError::InvalidSetting { .. })));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse("  deselect ").unwrap(), TextCommand::Pick(PickEvent::Empty));
        assert_eq!(parse("quit").unwrap(), TextCommand::Quit);
        assert!(parse("").is_err());
        assert!(parse("fly 1 2").is_err());
    }
}
