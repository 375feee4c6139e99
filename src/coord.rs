use std::{
    fmt::{self, Display, Formatter},
    num::NonZero,
    ops::{Mul, Sub},
    str::FromStr,
};

use thiserror::Error;

use crate::{color::Color, error::ValidationError};

/// Builds a [`Coord`] from an algebraic literal such as `coord!("e4")`.
#[macro_export]
macro_rules! coord {
    ($square:literal) => {
        match $crate::coord::Coord::from_algebraic($square) {
            Some(position) => position,
            None => panic!(concat!("`", $square, "` is not a square")),
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseCoordError {
    #[error("found `{0}`, characters from `a` to `h` were expected instead")]
    InvalidX(char),
    #[error("found `{0}`, characters from `1` to `8` were expected instead")]
    InvalidY(char),
    #[error("provided string have length of {0} characters, 2 were expected")]
    NotEnoughCharacter(u8),
    #[error("unexpected `{0}`")]
    Unexpected(char),
}

// Bit structure: 10XXXYYY
// first two bits is always `10` for `NonZero` size optimizations
/// A square of the board. `x` is the file counted from `a`, `y` is the row
/// counted from the eighth rank, so `(0, 0)` is a8 and `(7, 7)` is h1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(NonZero<u8>);

impl Coord {
    /// Callers must pass values below 8. Outside of this crate a `Coord` is
    /// only built through the checked constructors.
    pub(crate) const fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < 8);
        debug_assert!(y < 8);
        match NonZero::new(0b1000_0000 | ((x & 0b111) << 3) | (y & 0b111)) {
            Some(byte) => Coord(byte),
            None => unreachable!(),
        }
    }
    pub const fn new_checked(x: u8, y: u8) -> Option<Self> {
        if x >= 8 || y >= 8 {
            None
        } else {
            Some(Self::new(x, y))
        }
    }
    pub const fn from_algebraic(src: &str) -> Option<Self> {
        let bytes = src.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (x, y) = (bytes[0], bytes[1]);
        if x < b'a' || x > b'h' || y < b'1' || y > b'8' {
            return None;
        }
        Some(Self::new(x - b'a', 7 - (y - b'1')))
    }
    pub fn from_chars(x: char, y: char) -> Result<Self, ParseCoordError> {
        let x = match x {
            'a'..='h' => x as u8 - b'a',
            _ => return Err(ParseCoordError::InvalidX(x)),
        };
        let y = match y {
            '1'..='8' => 7 - (y as u8 - b'1'),
            _ => return Err(ParseCoordError::InvalidY(y)),
        };
        Ok(Coord::new(x, y))
    }
    pub const fn x(self) -> u8 {
        (self.0.get() >> 3) & 0b_111
    }
    pub const fn y(self) -> u8 {
        self.0.get() & 0b_111
    }
    /// All 64 squares, row by row starting from a8.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|y| (0..8).map(move |x| Coord::new(x, y)))
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new_checked(
            self.x().checked_add_signed(movement.x)?,
            self.y().checked_add_signed(movement.y)?,
        )
    }
    /// Finds the direction among `directions` that leads from `self` to
    /// `other` and returns the squares strictly between them, in path order.
    pub fn is_aligned(
        self,
        other: Self,
        directions: &[Vector],
    ) -> Option<impl Iterator<Item = Self>> {
        directions.iter().copied().find_map(|direction| {
            if direction.is_aligned(other - self) {
                Some(self.line_exclusive_exclusive(other, direction))
            } else {
                None
            }
        })
    }
    pub fn is_aligned_with_bishop(self, other: Self) -> Option<impl Iterator<Item = Self>> {
        self.is_aligned(other, &Vector::BISHOP_DIRECTIONS)
    }
    pub fn is_aligned_with_rook(self, other: Self) -> Option<impl Iterator<Item = Self>> {
        self.is_aligned(other, &Vector::ROOK_DIRECTIONS)
    }
    pub fn line(self, direction: Vector, start: i8) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        debug_assert_eq!(direction, direction.as_unit());
        (start..).map_while(move |difference| self.move_by(direction * difference))
    }
    pub fn line_inclusive(self, direction: Vector) -> impl Iterator<Item = Self> {
        self.line(direction, 0)
    }
    pub fn line_inclusive_exclusive(
        self,
        end: Coord,
        direction: Vector,
    ) -> impl Iterator<Item = Self> {
        self.line_inclusive(direction)
            .take_while(move |position| *position != end)
    }
    pub fn line_exclusive_exclusive(
        self,
        end: Coord,
        direction: Vector,
    ) -> impl Iterator<Item = Self> {
        self.line_inclusive_exclusive(end, direction).skip(1)
    }
    /// Color of the square itself, used for rendering.
    pub fn color(self) -> Color {
        if (self.x() + self.y()) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = (self.x() + b'a') as char;
        let y = 8 - self.y();
        write!(f, "{x}{y}")?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(x) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(0));
        };
        let Some(y) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        Coord::from_chars(x, y)
    }
}
impl TryFrom<(i8, i8)> for Coord {
    type Error = ValidationError;

    fn try_from((x, y): (i8, i8)) -> Result<Self, Self::Error> {
        u8::try_from(x)
            .ok()
            .zip(u8::try_from(y).ok())
            .and_then(|(x, y)| Coord::new_checked(x, y))
            .ok_or(ValidationError::OutOfBounds {
                x: x.into(),
                y: y.into(),
            })
    }
}
impl TryFrom<(usize, usize)> for Coord {
    type Error = ValidationError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        u8::try_from(x)
            .ok()
            .zip(u8::try_from(y).ok())
            .and_then(|(x, y)| Coord::new_checked(x, y))
            .ok_or_else(|| ValidationError::OutOfBounds {
                x: i64::try_from(x).unwrap_or(i64::MAX),
                y: i64::try_from(y).unwrap_or(i64::MAX),
            })
    }
}
#[allow(
    clippy::cast_possible_wrap,
    reason = "coordinate values never exceed 7"
)]
fn signed(value: u8) -> i8 {
    value as i8
}
impl Sub<Self> for Coord {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            x: signed(self.x()) - signed(rhs.x()),
            y: signed(self.y()) - signed(rhs.y()),
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { x: 0, y: 0 };

    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { x: -1, y: 0 },
        Vector { x: 1, y: 0 },
        Vector { x: 0, y: -1 },
        Vector { x: 0, y: 1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { x: -1, y: -1 },
        Vector { x: 1, y: -1 },
        Vector { x: -1, y: 1 },
        Vector { x: 1, y: 1 },
    ];

    pub fn is_aligned(self, other: Self) -> bool {
        self.as_unit() == other.as_unit() && self.x * other.y == other.x * self.y
    }
    pub fn is_king_move(self) -> bool {
        (-1..=1).contains(&self.x) && (-1..=1).contains(&self.y) && self != Vector::ZERO
    }
    pub fn is_knight_move(self) -> bool {
        let x = self.x.unsigned_abs();
        let y = self.y.unsigned_abs();
        (x == 1 && y == 2) || (x == 2 && y == 1)
    }
    pub fn as_unit(self) -> Self {
        Vector {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
