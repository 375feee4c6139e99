use std::fmt::{self, Display, Formatter};

use clap::ValueEnum;

/// How strictly the pawn double push is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum DoublePush {
    /// Both the passed square and the destination must be empty.
    #[default]
    Strict,
    /// Only the destination is checked, the passed square may be occupied.
    Permissive,
}

impl Display for DoublePush {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DoublePush::Strict => write!(f, "strict")?,
            DoublePush::Permissive => write!(f, "permissive")?,
        }
        Ok(())
    }
}

/// What en passant requires besides board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum EnPassant {
    /// The passed piece must be an opposing pawn that double pushed on the
    /// previous move.
    #[default]
    LastMove,
    /// Any piece beside the pawn can be taken.
    Positional,
}

impl Display for EnPassant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EnPassant::LastMove => write!(f, "last-move")?,
            EnPassant::Positional => write!(f, "positional")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleConfig {
    pub double_push: DoublePush,
    pub en_passant: EnPassant,
}
impl RuleConfig {
    /// Geometry-only pawn rules, as older front ends validated them.
    pub fn legacy() -> Self {
        RuleConfig {
            double_push: DoublePush::Permissive,
            en_passant: EnPassant::Positional,
        }
    }
}
impl Display for RuleConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "double push: {}, en passant: {}",
            self.double_push, self.en_passant
        )?;
        Ok(())
    }
}
