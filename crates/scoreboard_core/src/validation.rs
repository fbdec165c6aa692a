//! Registry and roster checks run by [`MatchManager`](crate::manager::MatchManager)
//! before it touches any state.

use crate::error::{Result, ScoreboardError};
use crate::models::{Match, Team, MAX_PLAYERS};
use std::collections::HashMap;
use uuid::Uuid;

/// Stateless rule checks. Every failure is `InvalidArgument`.
pub struct MatchValidator;

impl MatchValidator {
    pub fn validate_match_id(match_id: &str, matches: &HashMap<String, Match>) -> Result<()> {
        if matches.contains_key(match_id) {
            return Err(ScoreboardError::invalid_argument(format!(
                "Match id duplicate: {}",
                match_id
            )));
        }
        Ok(())
    }

    /// A registered match needs a full eleven on both sides.
    pub fn validate_team_size(team: &Team) -> Result<()> {
        if team.len() != MAX_PLAYERS {
            return Err(ScoreboardError::invalid_argument(
                "Match can not be added as player count in a team is not valid",
            ));
        }
        Ok(())
    }

    pub fn validate_match_exists(match_id: &str, matches: &HashMap<String, Match>) -> Result<()> {
        Self::require_match(match_id, matches).map(|_| ())
    }

    /// Like `validate_match_exists`, handing back the match on success.
    pub fn require_match<'a>(
        match_id: &str,
        matches: &'a HashMap<String, Match>,
    ) -> Result<&'a Match> {
        matches.get(match_id).ok_or_else(|| Self::match_not_found(match_id))
    }

    pub fn require_match_mut<'a>(
        match_id: &str,
        matches: &'a mut HashMap<String, Match>,
    ) -> Result<&'a mut Match> {
        matches.get_mut(match_id).ok_or_else(|| Self::match_not_found(match_id))
    }

    pub fn validate_match_not_in_progress(
        match_id: &str,
        matches: &HashMap<String, Match>,
    ) -> Result<()> {
        if matches.get(match_id).is_some_and(Match::is_in_progress) {
            return Err(ScoreboardError::invalid_argument(format!(
                "Match can not be removed as it's live: {}",
                match_id
            )));
        }
        Ok(())
    }

    pub fn validate_team_exists_in_match(football_match: &Match, team_id: Uuid) -> Result<()> {
        football_match.team(team_id).map(|_| ()).ok_or_else(|| Self::team_not_in_match(team_id))
    }

    pub fn require_team_mut(football_match: &mut Match, team_id: Uuid) -> Result<&mut Team> {
        football_match.team_mut(team_id).ok_or_else(|| Self::team_not_in_match(team_id))
    }

    pub fn validate_scorer_on_roster(team: &Team, player_name: &str) -> Result<()> {
        if team.player_by_name(player_name).is_none() {
            return Err(ScoreboardError::invalid_argument(format!(
                "Player {} is not on team {}",
                player_name,
                team.name()
            )));
        }
        Ok(())
    }

    pub fn validate_matches_not_empty(matches: &HashMap<String, Match>) -> Result<()> {
        if matches.is_empty() {
            return Err(ScoreboardError::invalid_argument("No matches found"));
        }
        Ok(())
    }

    fn match_not_found(match_id: &str) -> ScoreboardError {
        ScoreboardError::invalid_argument(format!("Match not found: {}", match_id))
    }

    fn team_not_in_match(team_id: Uuid) -> ScoreboardError {
        ScoreboardError::invalid_argument(format!(
            "Team does not exist in the match for scoring: {}",
            team_id
        ))
    }
}
