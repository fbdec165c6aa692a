pub mod football_match;
pub mod player;
pub mod team;

pub use football_match::{Match, MatchBuilder, MatchStatus};
pub use player::Player;
pub use team::{Team, CAPTAIN_MARKER, GOALKEEPER_MARKER, MAX_PLAYERS};
