use crate::models::event::{RsvpStatus, RsvpTally};

/// Apply one RSVP click to an event's tally.
///
/// The previous vote's bucket is decremented if it exists and is
/// positive; the chosen bucket is incremented only when the choice
/// differs from the previous vote. Clicking the current vote again
/// clears it, so the returned value is the vote now on record.
///
/// The tally is patched incrementally rather than recomputed from the
/// vote rows; the vote rows stay the authoritative record.
pub fn apply_rsvp(
    tally: &mut RsvpTally,
    previous: Option<RsvpStatus>,
    chosen: RsvpStatus,
) -> Option<RsvpStatus> {
    if let Some(prev) = previous {
        let bucket = tally.bucket_mut(prev);
        if *bucket > 0 {
            *bucket -= 1;
        }
    }

    if previous == Some(chosen) {
        None
    } else {
        *tally.bucket_mut(chosen) += 1;
        Some(chosen)
    }
}
