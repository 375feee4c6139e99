use std::{
    fmt::{self, Display, Formatter, Write as _},
    io::{self, BufRead, Write},
    str::FromStr,
};

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    board::{Board, BoardView},
    board_display::BoardDisplay,
    color::Color,
    coord::{Coord, ParseCoordError},
    fen::{ParseFenError, Placement},
    game::{Game, Played},
    piece::{ColoredPieceKind, InvalidFenPiece},
};

fn strip_prefix_token<'a>(src: &'a str, search: &str) -> Option<&'a str> {
    src.strip_prefix(search)
        .filter(|src| src.chars().next().is_none_or(<char>::is_whitespace))
        .map(<str>::trim_start)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("provided string contains invalid character")]
    InvalidChar,
    #[error(transparent)]
    ParseCoordError(#[from] ParseCoordError),
    #[error("unexpected `{0}`")]
    Unexpected(char),
}

/// A move typed as origin and destination squares, e.g. `e2e4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lan {
    pub origin: Coord,
    pub destination: Coord,
}
impl Display for Lan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        Ok(())
    }
}
impl FromStr for Lan {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let origin = s.get(0..2).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let destination = s.get(2..4).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        if let Some(c) = s.get(4..).ok_or(ParseMoveError::InvalidChar)?.chars().next() {
            return Err(ParseMoveError::Unexpected(c));
        }
        Ok(Lan {
            origin,
            destination,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseInputError {
    #[error(transparent)]
    Fen(#[from] ParseFenError),
    #[error(transparent)]
    Coord(#[from] ParseCoordError),
    #[error(transparent)]
    Piece(#[from] InvalidFenPiece),
    #[error(transparent)]
    Move(#[from] ParseMoveError),
    #[error("expected a single piece letter, found `{0}`")]
    ExpectedPiece(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    Flip,
    Reset,
    Clear,
    Exit,
    ExportFen,
    Import(Placement),
    Put(ColoredPieceKind, Coord),
    Remove(Coord),
    Coord(Coord),
    Move(Lan),
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Input::Help => write!(f, "help")?,
            Input::Flip => write!(f, "flip")?,
            Input::Reset => write!(f, "reset")?,
            Input::Clear => write!(f, "clear")?,
            Input::Exit => write!(f, "exit")?,
            Input::ExportFen => write!(f, "fen")?,
            Input::Import(placement) => write!(f, "import {placement}")?,
            Input::Put(piece, position) => write!(f, "put {} {position}", piece.fen())?,
            Input::Remove(position) => write!(f, "remove {position}")?,
            Input::Coord(position) => write!(f, "{position}")?,
            Input::Move(movement) => write!(f, "{movement}")?,
        }
        Ok(())
    }
}
fn parse_piece(s: &str) -> Result<ColoredPieceKind, ParseInputError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(ColoredPieceKind::from_fen(c)?),
        _ => Err(ParseInputError::ExpectedPiece(s.to_owned())),
    }
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "flip" => Ok(Input::Flip),
            "reset" => Ok(Input::Reset),
            "clear" => Ok(Input::Clear),
            "exit" | "quit" => Ok(Input::Exit),
            "fen" => Ok(Input::ExportFen),
            "import" => Err(ParseInputError::MissingArgument("import")),
            "put" => Err(ParseInputError::MissingArgument("put")),
            "remove" => Err(ParseInputError::MissingArgument("remove")),
            s => {
                if let Some(s) = strip_prefix_token(s, "import") {
                    Ok(Input::Import(s.parse()?))
                } else if let Some(s) = strip_prefix_token(s, "put") {
                    let (piece, position) = s
                        .split_once(char::is_whitespace)
                        .ok_or(ParseInputError::MissingArgument("put"))?;
                    Ok(Input::Put(parse_piece(piece)?, position.trim().parse()?))
                } else if let Some(s) = strip_prefix_token(s, "remove") {
                    Ok(Input::Remove(s.parse()?))
                } else if let Ok(position) = s.parse() {
                    Ok(Input::Coord(position))
                } else {
                    Ok(Input::Move(s.parse()?))
                }
            }
        }
    }
}

const HELP: &[&str] = &[
    "flip           - flip the board",
    "reset          - reset to starting position",
    "clear          - remove every piece",
    "fen            - export the placement as fen",
    "import <fen>   - import a placement",
    "put Q d4       - place a piece, uppercase for white",
    "remove d4      - remove a piece",
    "e2             - view valid moves",
    "e2e4           - play the move",
    "exit           - exit",
];

/// Reads commands from `input` until it is exhausted or `exit` is typed.
pub fn run(
    mut game: Game,
    mut view: Color,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut lines = input.lines();
    let mut info = String::new();
    let mut highlighted: Vec<Coord> = Vec::new();
    let mut first_time = true;
    loop {
        info.clear();
        if let Some(last_move) = game.board.last_move() {
            let _ = writeln!(&mut info, "last move: {last_move}");
        }
        if first_time {
            let _ = writeln!(&mut info, "type `help` for instructions");
            first_time = false;
        }
        writeln!(
            output,
            "{}",
            BoardDisplay {
                board: &game.board,
                view,
                highlighted: &highlighted,
                info: &info,
            },
        )?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(text) = lines.next().transpose()? else {
                return Ok(());
            };
            let input: Input = match text.trim().parse() {
                Ok(input) => input,
                Err(err) => {
                    warn!(%err, "invalid input");
                    writeln!(output, "Error: {err}")?;
                    continue;
                }
            };
            debug!(%input, "command");
            match input {
                Input::Help => {
                    for line in HELP {
                        writeln!(output, "{line}")?;
                    }
                    writeln!(output, "rules: {}", game.registry().config())?;
                    continue;
                }
                Input::ExportFen => {
                    writeln!(output, "{}", Placement(game.board))?;
                    continue;
                }
                Input::Exit => return Ok(()),
                Input::Flip => view = !view,
                Input::Reset => {
                    game.board = Board::starting_position();
                    highlighted.clear();
                }
                Input::Clear => {
                    game.board = Board::empty();
                    highlighted.clear();
                }
                Input::Import(placement) => {
                    game.board = placement.0;
                    highlighted.clear();
                }
                Input::Put(piece, position) => {
                    game.board.place(position, piece);
                    highlighted.clear();
                    highlighted.push(position);
                }
                Input::Remove(position) => {
                    game.board.remove(position);
                    highlighted.clear();
                }
                Input::Coord(position) => {
                    let destinations: FxHashSet<_> = game.destinations(position).collect();
                    highlighted.clear();
                    highlighted.extend(
                        Coord::all().filter(|position| destinations.contains(position)),
                    );
                }
                Input::Move(movement) => match game.play(movement.origin, movement.destination) {
                    Ok(Played::Moved { captured }) => {
                        if let Some(captured) = captured {
                            writeln!(output, "captured {captured}")?;
                        }
                        highlighted.clear();
                        highlighted.push(movement.origin);
                        highlighted.push(movement.destination);
                    }
                    Ok(Played::Rejected) => {
                        writeln!(output, "Error: {movement} is an invalid move")?;
                        continue;
                    }
                    Err(err) => {
                        warn!(%err, "move request failed");
                        writeln!(output, "Error: {err}")?;
                        continue;
                    }
                },
            }
            break;
        }
    }
}
