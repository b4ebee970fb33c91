use team_manager_be::models::event::{RsvpStatus, RsvpTally};
use team_manager_be::views::rsvp::apply_rsvp;

#[test]
fn test_first_vote_increments_chosen_bucket() {
    let mut tally = RsvpTally::default();

    let vote = apply_rsvp(&mut tally, None, RsvpStatus::Going);

    assert_eq!(vote, Some(RsvpStatus::Going));
    assert_eq!(tally.going, 1);
    assert_eq!(tally.maybe, 0);
    assert_eq!(tally.not_going, 0);
}

#[test]
fn test_switching_vote_moves_one_between_buckets() {
    let mut tally = RsvpTally {
        going: 3,
        maybe: 1,
        not_going: 0,
    };

    let vote = apply_rsvp(&mut tally, Some(RsvpStatus::Going), RsvpStatus::Maybe);

    assert_eq!(vote, Some(RsvpStatus::Maybe));
    assert_eq!(tally.bucket(RsvpStatus::Going), 2);
    assert_eq!(tally.bucket(RsvpStatus::Maybe), 2);
    // Net response count is unchanged when a vote moves.
    assert_eq!(tally.total_responses(), 4);
}

#[test]
fn test_repeating_vote_clears_it() {
    let mut tally = RsvpTally {
        going: 2,
        maybe: 0,
        not_going: 1,
    };

    let vote = apply_rsvp(&mut tally, Some(RsvpStatus::Going), RsvpStatus::Going);

    assert_eq!(vote, None);
    assert_eq!(tally.going, 1);
    assert_eq!(tally.total_responses(), 2);
}

#[test]
fn test_vote_then_clear_is_self_inverse() {
    let mut tally = RsvpTally::default();

    let vote = apply_rsvp(&mut tally, None, RsvpStatus::Maybe);
    let vote = apply_rsvp(&mut tally, vote, RsvpStatus::Maybe);

    assert_eq!(vote, None);
    assert_eq!(tally, RsvpTally::default());
}

#[test]
fn test_zero_bucket_never_goes_negative() {
    // A stale previous vote whose bucket is already empty must not
    // drive the count below zero.
    let mut tally = RsvpTally::default();

    let vote = apply_rsvp(&mut tally, Some(RsvpStatus::NotGoing), RsvpStatus::Going);

    assert_eq!(vote, Some(RsvpStatus::Going));
    assert_eq!(tally.not_going, 0);
    assert_eq!(tally.going, 1);
}
