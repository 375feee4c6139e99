use std::{
    fmt::{self, Display, Formatter},
    num::NonZero,
    str::FromStr,
};

use thiserror::Error;

use crate::{color::Color, error::ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    // other types relies on `PieceKind` being non-zero
    Pawn = 1,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const ALL: [Self; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    /// Position of the kind inside [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        self as usize - 1
    }
    pub fn uppercase(self) -> char {
        self.lowercase().to_ascii_uppercase()
    }
    pub fn lowercase(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
    pub fn from_fen(c: char) -> Result<Self, InvalidFenPiece> {
        let piece = match c {
            'p' | 'P' => PieceKind::Pawn,
            'n' | 'N' => PieceKind::Knight,
            'b' | 'B' => PieceKind::Bishop,
            'r' | 'R' => PieceKind::Rook,
            'q' | 'Q' => PieceKind::Queen,
            'k' | 'K' => PieceKind::King,
            c => return Err(InvalidFenPiece(c)),
        };
        Ok(piece)
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
/// Accepts the lowercase piece names and single FEN letters of either case.
impl FromStr for PieceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let piece = match s {
            "pawn" => PieceKind::Pawn,
            "knight" => PieceKind::Knight,
            "bishop" => PieceKind::Bishop,
            "rook" => PieceKind::Rook,
            "queen" => PieceKind::Queen,
            "king" => PieceKind::King,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => PieceKind::from_fen(c)
                        .map_err(|_| ValidationError::UnknownPieceType(s.to_owned()))?,
                    _ => return Err(ValidationError::UnknownPieceType(s.to_owned())),
                }
            }
        };
        Ok(piece)
    }
}

// Bit structure: 0000CPPP
// C - Color
// P - Piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPieceKind(NonZero<u8>);
impl ColoredPieceKind {
    pub fn new(color: Color, piece: PieceKind) -> Self {
        let color: u8 = color.into();
        let kind = NonZero::new(piece as u8).unwrap_or(NonZero::<u8>::MIN);
        ColoredPieceKind(kind | (color << 3))
    }
    pub fn color(self) -> Color {
        if (self.0.get() >> 3) & 0b_1 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }
    pub fn piece(self) -> PieceKind {
        match self.0.get() & 0b_111 {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }
    /// Row increment of a forward step, only meaningful for pawns.
    pub fn direction(self) -> i8 {
        self.color().pawn_direction()
    }
    pub fn fen(self) -> char {
        match self.color() {
            Color::White => self.piece().uppercase(),
            Color::Black => self.piece().lowercase(),
        }
    }
    pub fn from_fen(c: char) -> Result<Self, InvalidFenPiece> {
        let piece = PieceKind::from_fen(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(ColoredPieceKind::new(color, piece))
    }
    pub fn figurine(self) -> char {
        match (self.color(), self.piece()) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
impl Display for ColoredPieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color(), self.piece())?;
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error(
    "found `{0}`, expected one of `p`, `n`, `b`, `r`, `k`, `q`, or uppercase forms of these letters"
)]
pub struct InvalidFenPiece(pub char);
