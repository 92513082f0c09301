//! Full games between two players.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{Board, Move, Side};
use crate::rules::GameResult;

use super::player::Player;
use super::session::{Game, GameStatus, PlayResult};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum plies before the game is scored a draw.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

impl MatchConfig {
    /// Set the ply cap.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }
}

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Moves in play order, white first.
    pub moves: Vec<Move>,

    /// How the game ended.
    pub result: GameResult,

    /// Position when play stopped.
    pub final_board: Board,
}

impl MatchRecord {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Play a game from the standard start.
///
/// Fails only if a player returns a move that is not legal.
pub fn play_match(
    white: &mut dyn Player,
    red: &mut dyn Player,
    config: &MatchConfig,
) -> PlayResult<MatchRecord> {
    play_from(Game::new(), white, red, config)
}

/// Play a game to completion from an arbitrary session.
pub fn play_from(
    mut game: Game,
    white: &mut dyn Player,
    red: &mut dyn Player,
    config: &MatchConfig,
) -> PlayResult<MatchRecord> {
    let result = loop {
        if let GameStatus::Finished(result) = game.status() {
            break result;
        }
        if game.ply_count() >= config.max_plies {
            warn!(plies = game.ply_count(), "ply cap reached, scoring a draw");
            break GameResult::Draw;
        }

        let player: &mut dyn Player = match game.to_move() {
            Side::White => &mut *white,
            Side::Red => &mut *red,
        };
        match player.choose(&game) {
            Some(mv) => game.play(&mv)?,
            // Unreachable with an ongoing game, but a player is free to resign.
            None => break GameResult::Winner(game.to_move().opponent()),
        }
    };

    info!(
        white = white.name(),
        red = red.name(),
        ?result,
        plies = game.ply_count(),
        "match finished"
    );

    Ok(MatchRecord {
        moves: game.history().iter().map(|ply| ply.mv.clone()).collect(),
        result,
        final_board: *game.board(),
    })
}
