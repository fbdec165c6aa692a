//! # scoreboard_core - In-memory football scoreboard
//!
//! Register matches between two eleven-player teams, score goals, rank
//! players and query match state. Everything lives in process memory behind a
//! single [`MatchManager`].
//!
//! ```rust
//! use scoreboard_core::{Match, MatchManager, Player, Team};
//!
//! fn squad(name: &str, prefix: &str) -> Team {
//!     let mut team = Team::new(name);
//!     for i in 1..=11 {
//!         team.add_player(Player::new(format!("{prefix}{i}"), i).unwrap());
//!     }
//!     team
//! }
//!
//! let football_match = Match::builder()
//!     .team_one(squad("A", "P"))
//!     .team_two(squad("B", "Q"))
//!     .match_title("Derby")
//!     .referee(Player::new("Ref", 0).unwrap())
//!     .build()
//!     .unwrap();
//! let home = football_match.team_one().id();
//!
//! let mut manager = MatchManager::new();
//! manager.add_match("derby", football_match).unwrap();
//! manager.score_goal("derby", "P9", home).unwrap();
//! assert_eq!(manager.get_match_details("derby").unwrap().scoreline(), (1, 0));
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod providers;
pub mod validation;

#[cfg(test)]
mod tests;

pub use config::ScoreboardConfig;
pub use error::{Result, ScoreboardError};
pub use manager::{MatchManager, GOAL_POINTS};
pub use models::{
    Match, MatchBuilder, MatchStatus, Player, Team, CAPTAIN_MARKER, GOALKEEPER_MARKER, MAX_PLAYERS,
};
pub use providers::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use validation::MatchValidator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
