use chrono::{TimeZone, Utc};
use uuid::Uuid;

use team_manager_be::models::matches::{Match, MatchResult, MatchStatus};
use team_manager_be::models::statistics::PlayerStatistics;
use team_manager_be::models::training::AttendanceStats;
use team_manager_be::views::statistics::season_summary;

fn test_match(status: MatchStatus, team_score: Option<i32>, opponent_score: Option<i32>) -> Match {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 15, 0, 0).unwrap();
    Match {
        id: Uuid::new_v4(),
        team_id: Uuid::new_v4(),
        opponent: "Rovers".to_string(),
        match_date: now,
        venue: None,
        competition: None,
        status,
        team_score,
        opponent_score,
        created_at: now,
        updated_at: now,
    }
}

fn player_stats(goals: i32, assists: i32) -> PlayerStatistics {
    PlayerStatistics {
        id: Uuid::new_v4(),
        player_id: Uuid::new_v4(),
        team_id: Uuid::new_v4(),
        season: "2025-26".to_string(),
        appearances: 10,
        goals,
        assists,
        yellow_cards: 0,
        red_cards: 0,
        updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 15, 0, 0).unwrap(),
    }
}

#[test]
fn test_result_from_scores() {
    assert_eq!(MatchResult::from_scores(3, 1), MatchResult::Win);
    assert_eq!(MatchResult::from_scores(2, 2), MatchResult::Draw);
    assert_eq!(MatchResult::from_scores(0, 2), MatchResult::Loss);
}

#[test]
fn test_result_needs_both_scores() {
    let m = test_match(MatchStatus::Completed, Some(2), None);
    assert_eq!(m.result(), None);

    let m = test_match(MatchStatus::Completed, Some(2), Some(1));
    assert_eq!(m.result(), Some(MatchResult::Win));
}

#[test]
fn test_season_summary_counts_only_completed_matches() {
    let matches = vec![
        test_match(MatchStatus::Completed, Some(3), Some(1)),
        test_match(MatchStatus::Completed, Some(1), Some(1)),
        test_match(MatchStatus::Completed, Some(0), Some(2)),
        test_match(MatchStatus::Scheduled, None, None),
        test_match(MatchStatus::Live, Some(1), Some(0)),
        test_match(MatchStatus::Cancelled, None, None),
    ];

    let summary = season_summary(&matches, &[]);

    assert_eq!(summary.matches_played, 3);
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.draws, 1);
    assert_eq!(summary.losses, 1);
    assert_eq!(summary.goals_for, 4);
    assert_eq!(summary.goals_against, 4);
    assert_eq!(summary.goal_difference, 0);
    // Three points for a win, one for a draw.
    assert_eq!(summary.points, 4);
    // 1 of 3 rounds to 33.
    assert_eq!(summary.win_percentage, 33);
}

#[test]
fn test_season_summary_treats_missing_score_as_zero() {
    let matches = vec![test_match(MatchStatus::Completed, Some(2), None)];

    let summary = season_summary(&matches, &[]);

    assert_eq!(summary.matches_played, 1);
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.goals_against, 0);
}

#[test]
fn test_season_summary_sums_player_totals() {
    let stats = vec![player_stats(7, 2), player_stats(3, 9)];

    let summary = season_summary(&[], &stats);

    assert_eq!(summary.matches_played, 0);
    assert_eq!(summary.win_percentage, 0);
    assert_eq!(summary.total_goals, 10);
    assert_eq!(summary.total_assists, 11);
}

#[test]
fn test_attendance_stats_rounds_percentage() {
    let stats = AttendanceStats::from_records(&[true, true, false]);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.attended, 2);
    assert_eq!(stats.missed, 1);
    // 2 of 3 rounds to 67.
    assert_eq!(stats.percentage, 67);
}

#[test]
fn test_attendance_stats_empty_record() {
    let stats = AttendanceStats::from_records(&[]);

    assert_eq!(stats.total, 0);
    assert_eq!(stats.percentage, 0);
}
