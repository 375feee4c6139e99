use std::{
    fmt::{self, Debug, Formatter},
    sync::LazyLock,
};

use tracing::{debug, trace};

use crate::{
    board::BoardView,
    color::Color,
    config::RuleConfig,
    coord::Coord,
    error::ValidationError,
    piece::{ColoredPieceKind, PieceKind},
    rules::{BishopRule, KingRule, KnightRule, MoveRequest, MoveRule, PawnRule, QueenRule, RookRule},
};

type Rule = Box<dyn MoveRule + Send + Sync>;

/// One rule per piece kind, built once and only read afterwards.
pub struct Registry {
    config: RuleConfig,
    // indexed by `PieceKind::index`
    rules: [Rule; 6],
}
impl Registry {
    pub fn new(config: RuleConfig) -> Self {
        let rules: [Rule; 6] = [
            Box::new(PawnRule::new(config)),
            Box::new(KnightRule),
            Box::new(BishopRule),
            Box::new(RookRule),
            Box::new(QueenRule::default()),
            Box::new(KingRule),
        ];
        Registry { config, rules }
    }
    /// Shared registry with the default configuration.
    pub fn standard() -> &'static Self {
        static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::default);
        &STANDARD
    }
    pub fn config(&self) -> RuleConfig {
        self.config
    }
    pub fn rule(&self, kind: PieceKind) -> &(dyn MoveRule + Send + Sync) {
        self.rules[kind.index()].as_ref()
    }
    /// Resolves a rule from an external piece name such as `"knight"` or
    /// `"N"`.
    pub fn lookup(&self, name: &str) -> Result<&(dyn MoveRule + Send + Sync), ValidationError> {
        let kind: PieceKind = name.parse()?;
        Ok(self.rule(kind))
    }
    pub fn validate_move(
        &self,
        kind: PieceKind,
        color: Color,
        origin: Coord,
        destination: Coord,
        board: &dyn BoardView,
    ) -> Result<bool, ValidationError> {
        let request = MoveRequest {
            piece: ColoredPieceKind::new(color, kind),
            origin,
            destination,
        };
        if request.is_degenerate() {
            debug!(%request, "rejected degenerate move");
            return Err(ValidationError::DegenerateMove(origin));
        }
        let legal = self.rule(kind).validate(request, board);
        trace!(%request, legal, "validated move");
        Ok(legal)
    }
    /// Same as [`Registry::validate_move`] but for unchecked input: the piece
    /// is named and coordinates are raw `(x, y)` pairs.
    pub fn validate_named(
        &self,
        name: &str,
        color: Color,
        origin: (i8, i8),
        destination: (i8, i8),
        board: &dyn BoardView,
    ) -> Result<bool, ValidationError> {
        let kind = name.parse()?;
        let origin: Coord = origin.try_into()?;
        let destination: Coord = destination.try_into()?;
        self.validate_move(kind, color, origin, destination, board)
    }
    /// Every square the piece on `origin` may move to, as far as its rule is
    /// concerned. Empty when `origin` is empty.
    pub fn destinations<'a>(
        &'a self,
        origin: Coord,
        board: &'a dyn BoardView,
    ) -> impl Iterator<Item = Coord> + 'a {
        board.occupant_at(origin).into_iter().flat_map(move |piece| {
            let rule = self.rule(piece.piece());
            Coord::all().filter(move |destination| {
                *destination != origin
                    && rule.validate(
                        MoveRequest {
                            piece,
                            origin,
                            destination: *destination,
                        },
                        board,
                    )
            })
        })
    }
}
impl Default for Registry {
    fn default() -> Self {
        Registry::new(RuleConfig::default())
    }
}
impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
/// Validates against [`Registry::standard`].
pub fn validate_move(
    kind: PieceKind,
    color: Color,
    origin: Coord,
    destination: Coord,
    board: &dyn BoardView,
) -> Result<bool, ValidationError> {
    Registry::standard().validate_move(kind, color, origin, destination, board)
}
