//! Game sessions and matches.
//!
//! - `session`: a single game in progress (turns, history, result)
//! - `player`: agents that choose moves (search, random)
//! - `play`: drive two players through a full game

pub mod play;
pub mod player;
pub mod session;

pub use play::{play_from, play_match, MatchConfig, MatchRecord};
pub use player::{Player, RandomPlayer, SearchPlayer};
pub use session::{Game, GameError, GameStatus, PlayResult, PlyRecord};
