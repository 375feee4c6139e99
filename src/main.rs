#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::io::{self, stdin, stdout};

use chess_validator::{
    Board, Registry, RuleConfig,
    color::Color,
    config::{DoublePush, EnPassant},
    fen::Placement,
    game::Game,
    repl,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive board for trying out move validation.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Side shown at the bottom of the board.
    #[arg(long, value_enum, default_value_t = Color::White)]
    view: Color,
    #[arg(long, value_enum, default_value_t)]
    double_push: DoublePush,
    #[arg(long, value_enum, default_value_t)]
    en_passant: EnPassant,
    /// Starting placement in FEN, the standard setup when omitted.
    #[arg(long)]
    position: Option<Placement>,
    /// Log filter, e.g. `debug` or `chess_validator=trace`. Falls back to
    /// `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

/// `--log` directives, then `RUST_LOG`, then `warn`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"))
}
fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log.as_deref()))
        .with_writer(io::stderr)
        .init();

    let config = RuleConfig {
        double_push: args.double_push,
        en_passant: args.en_passant,
    };
    info!(?config, "starting");
    let board = args
        .position
        .map_or_else(Board::starting_position, |placement| placement.0);
    repl::run(
        Game::new(board, Registry::new(config)),
        args.view,
        stdin().lock(),
        stdout().lock(),
    )
}
