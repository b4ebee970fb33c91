use crate::models::team::{MembershipStatus, Position, RosterPlayer};
use crate::views::filter::CategoryFilter;
use crate::views::sort::{SortDirection, sorted_by_text};

/// Roster query as the player-profiles screen poses it: a free-text
/// search over name and jersey number, plus position and membership
/// filters.
pub fn filter_roster<'a>(
    players: &'a [RosterPlayer],
    search: &str,
    position: &CategoryFilter<Position>,
    status: &CategoryFilter<MembershipStatus>,
) -> Vec<&'a RosterPlayer> {
    let needle = search.to_lowercase();

    players
        .iter()
        .filter(|player| {
            let matches_search = needle.is_empty()
                || player.full_name.to_lowercase().contains(&needle)
                || player
                    .jersey_number
                    .is_some_and(|n| n.to_string().contains(&needle));

            let matches_position = match player.position {
                Some(p) => position.matches(&p),
                // A player without a position only shows up when the
                // filter is wide open.
                None => *position == CategoryFilter::All,
            };

            matches_search && matches_position && status.matches(&player.membership_status)
        })
        .collect()
}

/// Name order with direction toggle, ties kept in input order.
pub fn sort_roster(players: Vec<&RosterPlayer>, direction: SortDirection) -> Vec<&RosterPlayer> {
    sorted_by_text(&players, |player| Some(player.full_name.clone()), direction)
}
