use crate::models::matches::{Match, MatchResult, MatchStatus};
use crate::models::statistics::{PlayerStatistics, SeasonSummary};

/// Fold completed matches and the season's per-player rows into the
/// season table line. Matches with a missing score count it as zero,
/// matching how the record screen treats unfilled fields.
pub fn season_summary(matches: &[Match], player_stats: &[PlayerStatistics]) -> SeasonSummary {
    let mut summary = SeasonSummary::default();

    for m in matches {
        if m.status != MatchStatus::Completed {
            continue;
        }

        let ours = m.team_score.unwrap_or(0);
        let theirs = m.opponent_score.unwrap_or(0);

        summary.matches_played += 1;
        summary.goals_for += ours as i64;
        summary.goals_against += theirs as i64;

        match MatchResult::from_scores(ours, theirs) {
            MatchResult::Win => summary.wins += 1,
            MatchResult::Draw => summary.draws += 1,
            MatchResult::Loss => summary.losses += 1,
        }
    }

    summary.goal_difference = summary.goals_for - summary.goals_against;
    summary.points = summary.wins * 3 + summary.draws;
    summary.win_percentage = if summary.matches_played > 0 {
        ((summary.wins as f64 / summary.matches_played as f64) * 100.0).round() as i64
    } else {
        0
    };

    summary.total_goals = player_stats.iter().map(|s| s.goals as i64).sum();
    summary.total_assists = player_stats.iter().map(|s| s.assists as i64).sum();

    summary
}
