//! The profile completeness evaluator.
//!
//! A pure pass over a profile record: walk the checklist in order, collect
//! the labels of unpopulated fields, and derive an integer completion
//! percentage. The evaluator is total — it cannot fail, performs no I/O, and
//! holds no state, so it can be called from any number of request contexts
//! without coordination.

use serde::Serialize;

use crate::checklist::Checklist;
use crate::profile::CompanyProfile;

/// The outcome of evaluating a profile against a checklist.
///
/// Computed fresh on every evaluation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessResult {
    /// Whether every checklist field is populated.
    pub is_complete: bool,
    /// Labels of unpopulated fields, in checklist declaration order.
    pub missing_fields: Vec<String>,
    /// Populated fraction of the checklist, rounded half-up to [0, 100].
    pub completion_percent: u8,
}

impl CompletenessResult {
    /// The result reported when no profile exists yet.
    ///
    /// The caller already knows there is nothing to list, so the missing
    /// list stays empty and the percentage defaults to zero.
    fn no_profile() -> Self {
        Self {
            is_complete: false,
            missing_fields: Vec::new(),
            completion_percent: 0,
        }
    }
}

/// Evaluate a profile against a checklist.
///
/// `None` stands for "no profile created yet" and yields an incomplete
/// result at 0% with nothing listed as missing. Upstream data-source
/// failures must be translated to `None` before reaching this function;
/// the evaluator itself has no error path.
pub fn evaluate(profile: Option<&CompanyProfile>, checklist: &Checklist) -> CompletenessResult {
    let Some(profile) = profile else {
        return CompletenessResult::no_profile();
    };

    let missing_fields: Vec<String> = checklist
        .fields
        .iter()
        .filter(|field| !field.is_present(profile))
        .map(|field| field.label().to_string())
        .collect();

    let is_complete = missing_fields.is_empty();
    let completion_percent = if is_complete {
        100
    } else {
        percent_round_half_up(
            checklist.total() - missing_fields.len(),
            checklist.total(),
        )
    };

    CompletenessResult {
        is_complete,
        missing_fields,
        completion_percent,
    }
}

/// `round((filled / total) * 100)` with half-up rounding, in integer
/// arithmetic. `total` is non-zero here: a zero-length checklist has no
/// missing fields and is handled on the complete branch above.
fn percent_round_half_up(filled: usize, total: usize) -> u8 {
    let percent = (filled * 200 + total) / (total * 2);
    percent as u8
}
