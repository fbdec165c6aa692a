//! Property tests across manager, match and team

use crate::models::{Match, Player, Team, MAX_PLAYERS};
use crate::MatchManager;
use proptest::prelude::*;
use uuid::Uuid;

fn squad(name: &str, prefix: &str) -> Team {
    let mut team = Team::new(name);
    for i in 1..=MAX_PLAYERS as i32 {
        team.add_player(Player::new(format!("{}{}", prefix, i), i).unwrap());
    }
    team
}

fn registered_match() -> (MatchManager, String, Uuid, Uuid) {
    let football_match = Match::builder()
        .team_one(squad("Home", "H"))
        .team_two(squad("Away", "A"))
        .match_title("Property Cup")
        .referee(Player::new("Ref", 0).unwrap())
        .build()
        .unwrap();
    let (home, away) = (football_match.team_one().id(), football_match.team_two().id());

    let mut manager = MatchManager::new();
    manager.add_match("m", football_match).unwrap();
    (manager, "m".to_string(), home, away)
}

proptest! {
    /// Ranking is a permutation of both rosters, sorted by descending score,
    /// and equal scores keep roster order.
    #[test]
    fn prop_ranking_sorted_and_stable(goals in prop::collection::vec((any::<bool>(), 1usize..=11), 0..40)) {
        let (mut manager, id, home_id, away_id) = registered_match();
        for (home, shirt) in &goals {
            let (team, prefix) = if *home { (home_id, "H") } else { (away_id, "A") };
            manager.score_goal(&id, &format!("{}{}", prefix, shirt), team).unwrap();
        }

        let roster_order: Vec<&str> =
            manager.get_match_details(&id).unwrap().all_player_names();
        let ranking = manager.get_players_ranking(&id).unwrap();
        prop_assert_eq!(ranking.len(), 22);

        for pair in ranking.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
            if pair[0].score() == pair[1].score() {
                let pos = |name: &str| roster_order.iter().position(|n| *n == name);
                prop_assert!(pos(pair[0].name()) < pos(pair[1].name()));
            }
        }
    }

    /// Team totals equal goals scored when every scorer is on the roster.
    #[test]
    fn prop_team_total_matches_player_sum(shirts in prop::collection::vec(1usize..=11, 0..30)) {
        let (mut manager, id, home_id, _) = registered_match();
        for shirt in &shirts {
            manager.score_goal(&id, &format!("H{}", shirt), home_id).unwrap();
        }

        let home = manager.get_match_details(&id).unwrap().team_one();
        let player_sum: u32 = home.players().iter().map(Player::score).sum();
        prop_assert_eq!(home.score() as usize, shirts.len());
        prop_assert_eq!(player_sum, home.score());
    }

    /// Whatever is thrown at a team, the roster never exceeds eleven and never
    /// repeats a shirt number.
    #[test]
    fn prop_roster_invariants(entries in prop::collection::vec(("[A-C]", 0i32..20), 0..40)) {
        let mut team = Team::new("Fuzz");
        for (name, number) in entries {
            let before = team.len();
            let added = team.add_player(Player::new(name, number).unwrap());
            prop_assert_eq!(team.len(), before + added as usize);
        }

        prop_assert!(team.len() <= MAX_PLAYERS);
        let mut numbers: Vec<u32> = team.players().iter().map(Player::number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        prop_assert_eq!(numbers.len(), team.len());
    }
}
