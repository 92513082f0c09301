//! Move-choosing agents.
//!
//! - `SearchPlayer`: alpha-beta search
//! - `RandomPlayer`: uniform over legal moves, seeded

use crate::core::{GameRng, Move};
use crate::rules::BrazilianRules;
use crate::search::{AlphaBetaSearch, Evaluator, SearchConfig, SearchStats};

use super::session::Game;

/// Something that picks moves.
pub trait Player {
    /// Choose a move for the side to move, or `None` if it has none.
    fn choose(&mut self, game: &Game) -> Option<Move>;

    /// Display name for logs.
    fn name(&self) -> &str;
}

/// Player backed by alpha-beta search.
pub struct SearchPlayer {
    search: AlphaBetaSearch<BrazilianRules>,
}

impl SearchPlayer {
    /// Create a search player.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: AlphaBetaSearch::new(BrazilianRules, config),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<V: Evaluator + 'static>(mut self, evaluator: V) -> Self {
        self.search = self.search.with_evaluator(evaluator);
        self
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Player for SearchPlayer {
    fn choose(&mut self, game: &Game) -> Option<Move> {
        self.search.search(game.board(), game.to_move())
    }

    fn name(&self) -> &str {
        "alpha-beta"
    }
}

/// Player choosing uniformly among legal moves.
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose(&mut self, game: &Game) -> Option<Move> {
        self.rng.choose(game.legal_moves()).cloned()
    }

    fn name(&self) -> &str {
        "random"
    }
}
