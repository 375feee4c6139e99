use std::{
    fmt::{self, Display, Formatter},
    iter::{once, repeat},
    str::FromStr,
};

use thiserror::Error;

use crate::{board::Board, coord::Coord, piece::ColoredPieceKind};

/// The piece placement field of a FEN record, e.g.
/// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
///
/// Side to move, castling and the rest of the record are not read. Anything
/// after the first whitespace is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement(pub Board);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFenError {
    #[error("a row has fewer than 8 squares")]
    NotEnoughSquaresOnRow,
    #[error("a row has more than 8 squares")]
    ExceedingSquaresOnRow,
    #[error("found more than 8 rows")]
    TooManyRows,
    #[error("unexpected `{0}`")]
    UnexpectedChar(char),
    #[error("unexpected end of placement")]
    UnexpectedEol,
}
impl FromStr for Placement {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placement = s.split_whitespace().next().unwrap_or_default();
        let mut board = Board::empty();

        let mut x: u8 = 0;
        let mut y: u8 = 0;
        for c in placement.chars() {
            match c {
                '/' => {
                    if x < 8 {
                        return Err(ParseFenError::NotEnoughSquaresOnRow);
                    }
                    if y == 7 {
                        return Err(ParseFenError::TooManyRows);
                    }
                    x = 0;
                    y += 1;
                }
                '1'..='8' => {
                    x += c as u8 - b'0';
                    if x > 8 {
                        return Err(ParseFenError::ExceedingSquaresOnRow);
                    }
                }
                c => {
                    let piece =
                        ColoredPieceKind::from_fen(c).map_err(|_| ParseFenError::UnexpectedChar(c))?;
                    if x >= 8 {
                        return Err(ParseFenError::ExceedingSquaresOnRow);
                    }
                    board.place(Coord::new(x, y), piece);
                    x += 1;
                }
            }
        }
        if y < 7 {
            return Err(ParseFenError::UnexpectedEol);
        }
        if x < 8 {
            return Err(ParseFenError::NotEnoughSquaresOnRow);
        }
        Ok(Placement(board))
    }
}
impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, first) in self.0.rows().iter().zip(once(true).chain(repeat(false))) {
            if !first {
                write!(f, "/")?;
            }
            let mut pieces = row.iter().peekable();
            while let Some(piece) = pieces.next() {
                if let Some(piece) = piece {
                    write!(f, "{}", piece.fen())?;
                } else {
                    let mut count = 1;
                    while pieces.next_if(|piece| piece.is_none()).is_some() {
                        count += 1;
                    }
                    write!(f, "{count}")?;
                }
            }
        }
        Ok(())
    }
}
