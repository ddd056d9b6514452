//! The pairing engine: matches discharges to prior admissions per patient.

use std::collections::BTreeMap;

use crate::category::EventCategory;
use crate::event::Event;
use crate::pair::Pair;

/// Pairs every event into a minimal set of admission/discharge pairs.
///
/// Events are sorted by timestamp, grouped by identifier, and each group is
/// resolved independently:
/// - a discharge is matched to the most recent admission strictly earlier
///   than it (an admission sharing the discharge's timestamp is not
///   eligible and stays open); any older unmatched admissions before that
///   discharge are treated as superseded duplicates and discarded (logged,
///   never reported);
/// - a discharge with no prior admission becomes a half-open pair;
/// - every admission left without a discharge becomes its own half-open
///   pair.
///
/// The result covers every non-superseded event exactly once and is sorted
/// by [`Pair::sort_key`]. Output depends only on the event multiset, so the
/// operation is idempotent under re-ordering of the input.
pub fn pair_events(
    mut events: Vec<Event>,
    admission: EventCategory,
    discharge: EventCategory,
) -> Vec<Pair> {
    // Stable sort: events with equal timestamps keep their load order.
    events.sort_by_key(|event| event.timestamp);

    let mut groups: BTreeMap<String, Vec<Event>> = BTreeMap::new();
    for event in events {
        groups.entry(event.identifier.clone()).or_default().push(event);
    }

    let mut pairs: Vec<Pair> = groups
        .into_values()
        .flat_map(|group| pair_group(group, admission, discharge))
        .collect();
    pairs.sort_by_key(Pair::sort_key);
    pairs
}

/// Resolves one identifier group, already sorted by ascending timestamp.
///
/// A single front-to-back scan with an open-admissions buffer replaces the
/// source's recursive list surgery; each event is visited exactly once.
fn pair_group(
    group: Vec<Event>,
    admission: EventCategory,
    discharge: EventCategory,
) -> Vec<Pair> {
    let mut pairs = Vec::new();
    let mut open: Vec<Event> = Vec::new();

    for event in group {
        if event.category == discharge {
            // Only admissions strictly earlier than the discharge are
            // eligible; an admission at the same instant stays open, which
            // keeps the result independent of load order for ties.
            match open
                .iter()
                .rposition(|open_admission| open_admission.timestamp < event.timestamp)
            {
                Some(last_earlier) => {
                    let matched = open.remove(last_earlier);
                    for superseded in open.drain(..last_earlier) {
                        tracing::debug!(
                            identifier = %superseded.identifier,
                            line = %superseded.raw_line,
                            "discarding superseded admission"
                        );
                    }
                    pairs.push(Pair::Matched {
                        admission: matched,
                        discharge: event,
                    });
                }
                None => pairs.push(Pair::DischargeOnly(event)),
            }
        } else if event.category == admission {
            open.push(event);
        } else {
            tracing::debug!(
                identifier = %event.identifier,
                category = %event.category,
                "event category takes no part in this pairing"
            );
        }
    }

    // Every admission still open gets its own pair. The source emitted only
    // the first one per group, silently dropping the rest; that data loss is
    // deliberately not reproduced.
    pairs.extend(open.into_iter().map(Pair::AdmissionOnly));
    pairs
}
