use uuid::Uuid;

use team_manager_be::models::team::{MembershipStatus, Position, RosterPlayer};
use team_manager_be::views::filter::CategoryFilter;
use team_manager_be::views::roster::{filter_roster, sort_roster};
use team_manager_be::views::sort::SortDirection;

fn player(
    name: &str,
    position: Option<Position>,
    jersey: Option<i32>,
    status: MembershipStatus,
) -> RosterPlayer {
    RosterPlayer {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role: "player".to_string(),
        avatar_url: None,
        phone: None,
        position,
        jersey_number: jersey,
        membership_status: status,
        joined_date: None,
    }
}

fn squad() -> Vec<RosterPlayer> {
    vec![
        player(
            "Marta Silva",
            Some(Position::Forward),
            Some(9),
            MembershipStatus::Active,
        ),
        player(
            "Jo Keller",
            Some(Position::Goalkeeper),
            Some(1),
            MembershipStatus::Active,
        ),
        player(
            "Sam Osei",
            Some(Position::Defender),
            Some(4),
            MembershipStatus::Expired,
        ),
        player("Alex Brand", None, None, MembershipStatus::Inactive),
    ]
}

#[test]
fn test_search_matches_name_case_insensitively() {
    let squad = squad();
    let found = filter_roster(&squad, "marta", &CategoryFilter::All, &CategoryFilter::All);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_name, "Marta Silva");
}

#[test]
fn test_search_matches_jersey_number() {
    let squad = squad();
    let found = filter_roster(&squad, "9", &CategoryFilter::All, &CategoryFilter::All);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_name, "Marta Silva");
}

#[test]
fn test_position_filter_hides_unpositioned_players() {
    let squad = squad();

    let keepers = filter_roster(
        &squad,
        "",
        &CategoryFilter::Selected(vec![Position::Goalkeeper]),
        &CategoryFilter::All,
    );
    assert_eq!(keepers.len(), 1);
    assert_eq!(keepers[0].full_name, "Jo Keller");

    // A player with no position only appears under the wide-open filter.
    let everyone = filter_roster(&squad, "", &CategoryFilter::All, &CategoryFilter::All);
    assert!(everyone.iter().any(|p| p.full_name == "Alex Brand"));
}

#[test]
fn test_status_and_position_filters_combine() {
    let squad = squad();

    let found = filter_roster(
        &squad,
        "",
        &CategoryFilter::Selected(vec![Position::Defender, Position::Forward]),
        &CategoryFilter::Selected(vec![MembershipStatus::Active]),
    );

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_name, "Marta Silva");
}

#[test]
fn test_empty_selection_shows_nobody() {
    let squad = squad();
    let found = filter_roster(&squad, "", &CategoryFilter::None, &CategoryFilter::All);

    assert!(found.is_empty());
}

#[test]
fn test_sort_roster_by_name() {
    let squad = squad();
    let everyone = filter_roster(&squad, "", &CategoryFilter::All, &CategoryFilter::All);

    let asc = sort_roster(everyone.clone(), SortDirection::Asc);
    let names: Vec<&str> = asc.iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(names, vec!["Alex Brand", "Jo Keller", "Marta Silva", "Sam Osei"]);

    let desc = sort_roster(everyone, SortDirection::Desc);
    assert_eq!(desc[0].full_name, "Sam Osei");
}
