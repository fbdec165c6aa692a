use super::Player;
use crate::error::{Result, ScoreboardError};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

pub const MAX_PLAYERS: usize = 11;

/// Adding a player with exactly this name fills an empty goalkeeper slot.
pub const GOALKEEPER_MARKER: &str = "Goli";
/// Adding a player with exactly this name fills an empty captain slot.
pub const CAPTAIN_MARKER: &str = "Skipper";

/// Ordered roster of up to eleven players with goalkeeper and captain slots.
///
/// Each team carries an id minted at construction; clones share it, so two
/// teams with the same name stay distinguishable. A role slot is filled at
/// most once and keeps the holder even after they leave the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    id: Uuid,
    name: String,
    players: Vec<Player>,
    score: u32,
    goalkeeper: Option<Player>,
    captain: Option<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
            score: 0,
            goalkeeper: None,
            captain: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access to roster entries. The roster itself (membership and
    /// order) can only change through `add_player` / `remove_player`.
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.players.contains(player)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Returns `false` without touching the roster when the team is full, the
    /// player is already on it, or the shirt number is taken.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.is_full() || self.contains(&player) || !self.is_number_free(player.number()) {
            return false;
        }

        if player.name() == GOALKEEPER_MARKER && self.goalkeeper.is_none() {
            self.goalkeeper = Some(player.clone());
        } else if player.name() == CAPTAIN_MARKER && self.captain.is_none() {
            self.captain = Some(player.clone());
        }

        self.players.push(player);
        self.sync_role_names();
        true
    }

    /// Removes by (name, number) identity. Role slots are left as they are.
    pub fn remove_player(&mut self, player: &Player) -> bool {
        let Some(index) = self.players.iter().position(|p| p == player) else {
            return false;
        };

        self.players.remove(index);
        true
    }

    /// The roster entry wearing the goalkeeper's number, or the recorded
    /// holder once they have left the roster.
    pub fn goalkeeper(&self) -> Option<&Player> {
        self.role_holder(self.goalkeeper.as_ref())
    }

    pub fn captain(&self) -> Option<&Player> {
        self.role_holder(self.captain.as_ref())
    }

    pub fn must_have_goalkeeper_and_skipper(&self) -> bool {
        self.goalkeeper.is_some() && self.captain.is_some()
    }

    /// Credits `points` to the team total and to the first roster player
    /// named `player_name`. The team total moves even when no player matches;
    /// the return value tells whether a player was credited.
    pub fn increase_score(&mut self, points: i32, player_name: &str) -> Result<bool> {
        let points = u32::try_from(points)
            .map_err(|_| ScoreboardError::invalid_argument("Points cannot be negative"))?;

        self.score = self.score.saturating_add(points);

        match self.players.iter_mut().find(|p| p.name() == player_name) {
            Some(player) => {
                player.increase_score(points as i32)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn role_holder<'a>(&'a self, recorded: Option<&'a Player>) -> Option<&'a Player> {
        let recorded = recorded?;
        self.player_by_number(recorded.number()).or(Some(recorded))
    }

    fn player_by_number(&self, number: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.number() == number)
    }

    fn is_number_free(&self, number: u32) -> bool {
        self.players.iter().all(|p| p.number() != number)
    }

    fn sync_role_names(&mut self) {
        let (Some(keeper), Some(captain)) = (self.goalkeeper.as_mut(), self.captain.as_mut())
        else {
            return;
        };
        keeper.set_name(GOALKEEPER_MARKER);
        captain.set_name(CAPTAIN_MARKER);

        let (keeper, captain) = (keeper.number(), captain.number());
        for player in self.players.iter_mut() {
            if player.number() == keeper {
                player.set_name(GOALKEEPER_MARKER);
            } else if player.number() == captain {
                player.set_name(CAPTAIN_MARKER);
            }
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} players, {} pts)", self.name, self.players.len(), self.score)
    }
}
