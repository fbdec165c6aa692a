use crate::config::ScoreboardConfig;
use crate::error::{Result, ScoreboardError};
use crate::models::{Match, Player};
use crate::validation::MatchValidator;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Every goal is worth exactly one point.
pub const GOAL_POINTS: i32 = 1;

/// In-memory registry of matches keyed by caller-chosen id.
///
/// Every operation validates completely before mutating, so a rejected call
/// leaves the registry as it was.
#[derive(Debug, Clone, Default)]
pub struct MatchManager {
    matches: HashMap<String, Match>,
    config: ScoreboardConfig,
}

impl MatchManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoreboardConfig) -> Self {
        Self { matches: HashMap::new(), config }
    }

    /// Manager configured from `SCOREBOARD_CONFIG_PATH`, or defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(ScoreboardConfig::from_env()?))
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Registers a match whose teams both have exactly eleven players.
    pub fn add_match(&mut self, match_id: impl Into<String>, football_match: Match) -> Result<()> {
        let match_id = match_id.into();
        MatchValidator::validate_match_id(&match_id, &self.matches)?;
        MatchValidator::validate_team_size(football_match.team_one())?;
        MatchValidator::validate_team_size(football_match.team_two())?;

        log::debug!("Match {} added: {}", match_id, football_match);
        self.matches.insert(match_id, football_match);
        Ok(())
    }

    /// Replaces an existing entry wholesale. Roster sizes are not rechecked.
    pub fn update_match(&mut self, match_id: &str, football_match: Match) -> Result<()> {
        let slot = MatchValidator::require_match_mut(match_id, &mut self.matches)?;
        *slot = football_match;

        log::debug!("Match {} updated", match_id);
        Ok(())
    }

    pub fn remove_match(&mut self, match_id: &str) -> Result<()> {
        MatchValidator::validate_match_exists(match_id, &self.matches)?;
        MatchValidator::validate_match_not_in_progress(match_id, &self.matches)?;

        self.matches.remove(match_id);
        log::debug!("Match {} removed ({} remaining)", match_id, self.matches.len());
        Ok(())
    }

    /// Read-only view of the live registry.
    pub fn get_all_matches(&self) -> Result<&HashMap<String, Match>> {
        MatchValidator::validate_matches_not_empty(&self.matches)?;
        Ok(&self.matches)
    }

    pub fn get_match_details(&self, match_id: &str) -> Result<&Match> {
        MatchValidator::require_match(match_id, &self.matches)
    }

    /// Mutable access for status, title and roster changes on a registered
    /// match.
    pub fn get_match_details_mut(&mut self, match_id: &str) -> Result<&mut Match> {
        MatchValidator::require_match_mut(match_id, &mut self.matches)
    }

    /// Credits one goal to the team with id `team_id` and, if they are on
    /// that roster, to `player_name`.
    pub fn score_goal(&mut self, match_id: &str, player_name: &str, team_id: Uuid) -> Result<()> {
        let require_scorer = self.config.require_rostered_scorer;
        let football_match = MatchValidator::require_match_mut(match_id, &mut self.matches)?;
        let team = MatchValidator::require_team_mut(football_match, team_id)?;
        if require_scorer {
            MatchValidator::validate_scorer_on_roster(team, player_name)?;
        }

        if team.increase_score(GOAL_POINTS, player_name)? {
            log::debug!("Goal for {} by {} in match {}", team.name(), player_name, match_id);
        } else {
            log::warn!(
                "Goal for {} in match {} credited to team only: no player named {}",
                team.name(),
                match_id,
                player_name
            );
        }
        Ok(())
    }

    /// Both rosters (team one first) ordered by descending score. Equal
    /// scores keep roster order.
    pub fn get_players_ranking(&self, match_id: &str) -> Result<Vec<&Player>> {
        let football_match = MatchValidator::require_match(match_id, &self.matches)?;

        let mut ranking: Vec<&Player> = football_match.all_players().collect();
        ranking.sort_by(|a, b| b.score().cmp(&a.score()));
        Ok(ranking)
    }

    /// First player named `player_name` across all matches. Which match wins
    /// a name clash follows registry iteration order and is unspecified.
    pub fn get_player_details(&self, player_name: &str) -> Result<&Player> {
        MatchValidator::validate_matches_not_empty(&self.matches)?;

        self.matches
            .values()
            .flat_map(|m| m.all_players())
            .find(|p| p.name() == player_name)
            .ok_or_else(|| {
                ScoreboardError::invalid_argument(format!("Player not found: {}", player_name))
            })
    }

    pub fn get_all_players(&self) -> Result<Vec<&str>> {
        MatchValidator::validate_matches_not_empty(&self.matches)?;
        Ok(self.matches.values().flat_map(|m| m.all_player_names()).collect())
    }

    pub fn get_match_start_time(&self, match_id: &str) -> Result<DateTime<Utc>> {
        MatchValidator::require_match(match_id, &self.matches).map(Match::start_time)
    }
}
