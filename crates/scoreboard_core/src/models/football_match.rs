use super::{Player, Team};
use crate::error::{Result, ScoreboardError};
use crate::providers::{Clock, IdGenerator, SystemClock, UuidGenerator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Match lifecycle. Transitions are not enforced; only `InProgress` locks the
/// title and team slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::InProgress => "IN_PROGRESS",
            MatchStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contest between two teams. Only obtainable through [`MatchBuilder`].
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    id: String,
    title: String,
    team_one: Team,
    team_two: Team,
    referee: Option<Player>,
    start_time: DateTime<Utc>,
    status: MatchStatus,
}

/// Collects the required parts of a [`Match`]; every field must be set
/// before `build`.
#[derive(Debug, Clone, Default)]
pub struct MatchBuilder {
    team_one: Option<Team>,
    team_two: Option<Team>,
    match_title: Option<String>,
    referee: Option<Player>,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_one(mut self, team: Team) -> Self {
        self.team_one = Some(team);
        self
    }

    pub fn team_two(mut self, team: Team) -> Self {
        self.team_two = Some(team);
        self
    }

    pub fn match_title(mut self, title: impl Into<String>) -> Self {
        self.match_title = Some(title.into());
        self
    }

    pub fn referee(mut self, referee: Player) -> Self {
        self.referee = Some(referee);
        self
    }

    /// Builds with a random UUID and the current wall-clock time.
    pub fn build(self) -> Result<Match> {
        self.build_with(&SystemClock, &UuidGenerator)
    }

    pub fn build_with(self, clock: &dyn Clock, ids: &dyn IdGenerator) -> Result<Match> {
        let (Some(team_one), Some(team_two), Some(title), Some(referee)) =
            (self.team_one, self.team_two, self.match_title, self.referee)
        else {
            return Err(ScoreboardError::invalid_argument("Parameters cannot be null"));
        };

        Ok(Match {
            id: ids.next_id(),
            title,
            team_one,
            team_two,
            referee: Some(referee),
            start_time: clock.now(),
            status: MatchStatus::Scheduled,
        })
    }
}

impl Match {
    pub fn builder() -> MatchBuilder {
        MatchBuilder::new()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_match_title(&mut self, title: impl Into<String>) -> Result<()> {
        if self.status == MatchStatus::InProgress {
            return Err(ScoreboardError::invalid_state(
                "Cannot update match title during the match",
            ));
        }
        self.title = title.into();
        Ok(())
    }

    pub fn team_one(&self) -> &Team {
        &self.team_one
    }

    pub fn team_one_mut(&mut self) -> &mut Team {
        &mut self.team_one
    }

    pub fn team_two(&self) -> &Team {
        &self.team_two
    }

    pub fn team_two_mut(&mut self) -> &mut Team {
        &mut self.team_two
    }

    /// Returns `false` and leaves the slot untouched while the match is live.
    pub fn set_team_one(&mut self, team: Team) -> bool {
        if self.status == MatchStatus::InProgress {
            return false;
        }
        self.team_one = team;
        true
    }

    pub fn set_team_two(&mut self, team: Team) -> bool {
        if self.status == MatchStatus::InProgress {
            return false;
        }
        self.team_two = team;
        true
    }

    /// Looks a team up by its id, so same-named teams stay distinct.
    pub fn team(&self, team_id: Uuid) -> Option<&Team> {
        [&self.team_one, &self.team_two].into_iter().find(|t| t.id() == team_id)
    }

    pub fn team_mut(&mut self, team_id: Uuid) -> Option<&mut Team> {
        if self.team_one.id() == team_id {
            Some(&mut self.team_one)
        } else if self.team_two.id() == team_id {
            Some(&mut self.team_two)
        } else {
            None
        }
    }

    pub fn referee(&self) -> Option<&Player> {
        self.referee.as_ref()
    }

    /// Only fills an empty referee slot.
    pub fn assign_referee(&mut self, referee: Player) -> bool {
        if self.referee.is_some() {
            return false;
        }
        self.referee = Some(referee);
        true
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn set_match_status(&mut self, status: MatchStatus) {
        self.status = status;
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }

    /// Team one's roster followed by team two's.
    pub fn all_players(&self) -> impl Iterator<Item = &Player> {
        self.team_one.players().iter().chain(self.team_two.players())
    }

    pub fn all_player_names(&self) -> Vec<&str> {
        self.all_players().map(Player::name).collect()
    }

    /// (team one score, team two score)
    pub fn scoreline(&self) -> (u32, u32) {
        (self.team_one.score(), self.team_two.score())
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (home, away) = self.scoreline();
        write!(
            f,
            "{}: {} {} - {} {} [{}]",
            self.title,
            self.team_one.name(),
            home,
            away,
            self.team_two.name(),
            self.status
        )
    }
}
