use crate::error::{Result, ScoreboardError};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named, numbered participant. Referees are players too.
///
/// Identity is the (name, number) pair: two players compare equal and hash
/// alike regardless of how many goals each has scored.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    name: String,
    number: u32,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, number: i32) -> Result<Self> {
        let number = u32::try_from(number).map_err(|_| {
            ScoreboardError::invalid_argument("Player number cannot be negative")
        })?;
        Ok(Self { name: name.into(), number, score: 0 })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increase_score(&mut self, points: i32) -> Result<()> {
        let points = u32::try_from(points)
            .map_err(|_| ScoreboardError::invalid_argument("Points cannot be negative"))?;
        self.score = self.score.saturating_add(points);
        Ok(())
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.name == other.name
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.number.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} ({})", self.name, self.number, self.score)
    }
}
