//! Entry-type inference from the clock-in / clock-out method pair.

use crate::models::EntryType;

/// Marker the source uses (and we use) for a missing clock method.
pub const NULL_METHOD: &str = "NULL";

const FINGER: &str = "FINGER";
const REASSIGN: &str = "REASSIGN";
const EMPID: &str = "EMPID";
const NO_FINGERPRINT: &str = "NO SUCCESSFUL FINGERPRINT";
const MANAGER_SUPPLIED_OUT: &str = "MISSING C/O MNGR SUPPLIED";
const SWAP: &str = "SWAP";
const RAW_PAIR_SPLIT: &str = "RAW CLOCK PAIR SPLIT";
const WEEKEND_PAIR_SPLIT: &str = "WKEND RAW PAIR SPLT";

/// Absent or empty → "NULL", anything else → uppercased.
pub fn normalize_method(method: Option<&str>) -> String {
    match method {
        Some(m) if !m.is_empty() => m.to_uppercase(),
        _ => NULL_METHOD.to_string(),
    }
}

/// Classify a clock pair. Rules are checked in order and the first match
/// wins; several predicates overlap, so the order is part of the contract.
pub fn classify(clock_in: Option<&str>, clock_out: Option<&str>) -> EntryType {
    let ci = normalize_method(clock_in);
    let co = normalize_method(clock_out);
    let (ci, co) = (ci.as_str(), co.as_str());
    let either = |m: &str| ci == m || co == m;

    if ci == FINGER && co == FINGER {
        return EntryType::Finger;
    }
    if (ci == FINGER && co == REASSIGN) || (ci == REASSIGN && co == FINGER) {
        return EntryType::Finger;
    }
    if ci == NULL_METHOD && co == NULL_METHOD {
        return EntryType::WriteIn;
    }
    if either(EMPID) {
        return EntryType::ProvisionalEntry;
    }
    if either(NO_FINGERPRINT) {
        return EntryType::NoSuccessfulFingerprint;
    }
    if ci == NULL_METHOD {
        return EntryType::MissingClockIn;
    }
    // `ci == NULL` is unreachable here; the rule is written in full.
    if ci == NULL_METHOD || co == MANAGER_SUPPLIED_OUT || co == NULL_METHOD {
        return EntryType::MissingClockOut;
    }
    if either(SWAP) {
        return EntryType::TimeSwap;
    }
    if either(RAW_PAIR_SPLIT) {
        return EntryType::RawClockPairSplit;
    }
    if either(WEEKEND_PAIR_SPLIT) {
        return EntryType::WeekendPairSplit;
    }
    if either(REASSIGN) {
        return EntryType::ManagerReassignment;
    }

    EntryType::ProgrammingIssue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(ci: Option<&str>, co: Option<&str>) -> &'static str {
        classify(ci, co).as_label()
    }

    #[test]
    fn finger_pairs() {
        assert_eq!(label(Some("Finger"), Some("finger")), "Finger");
        assert_eq!(label(Some("FINGER"), Some("Reassign")), "Finger");
        assert_eq!(label(Some("reassign"), Some("FINGER")), "Finger");
    }

    #[test]
    fn both_absent_is_write_in() {
        assert_eq!(label(None, None), "Write-In");
        // the literal marker counts as absent
        assert_eq!(label(Some("NULL"), None), "Write-In");
    }

    #[test]
    fn empid_on_either_side_is_provisional() {
        assert_eq!(label(Some("EMPID"), Some("FINGER")), "Provisional Entry");
        assert_eq!(label(Some("Finger"), Some("empid")), "Provisional Entry");
        // beats the missing clock-in rule
        assert_eq!(label(None, Some("EMPID")), "Provisional Entry");
    }

    #[test]
    fn failed_fingerprint_label_is_verbatim() {
        assert_eq!(
            label(Some("No Successful Fingerprint"), Some("FINGER")),
            "NO SUCCESSFUL FINGERPRINT"
        );
        assert_eq!(
            label(None, Some("NO SUCCESSFUL FINGERPRINT")),
            "NO SUCCESSFUL FINGERPRINT"
        );
    }

    #[test]
    fn missing_clock_in() {
        assert_eq!(label(None, Some("FINGER")), "Missing c/in");
        assert_eq!(label(None, Some("SWAP")), "Missing c/in");
    }

    #[test]
    fn missing_clock_out() {
        assert_eq!(label(Some("FINGER"), None), "Missing c/o");
        assert_eq!(
            label(Some("FINGER"), Some("Missing C/O Mngr Supplied")),
            "Missing c/o"
        );
        assert_eq!(label(Some("SWAP"), None), "Missing c/o");
    }

    #[test]
    fn swap_and_splits() {
        assert_eq!(label(Some("SWAP"), Some("FINGER")), "Time-Swap");
        assert_eq!(label(Some("FINGER"), Some("swap")), "Time-Swap");
        assert_eq!(
            label(Some("Raw Clock Pair Split"), Some("FINGER")),
            "Raw Clock Pair Split"
        );
        assert_eq!(
            label(Some("FINGER"), Some("WKEND RAW PAIR SPLT")),
            "Programming or Wk End Rw Pair Split"
        );
        // swap wins over a split on the other side
        assert_eq!(
            label(Some("SWAP"), Some("RAW CLOCK PAIR SPLIT")),
            "Time-Swap"
        );
    }

    #[test]
    fn reassign_without_finger() {
        assert_eq!(
            label(Some("REASSIGN"), Some("REASSIGN")),
            "Manager FTW Reassignment"
        );
        assert_eq!(
            label(Some("EMPCARD"), Some("REASSIGN")),
            "Manager FTW Reassignment"
        );
    }

    #[test]
    fn anything_else_is_a_programming_issue() {
        assert_eq!(label(Some("BADGE"), Some("BADGE")), "Programming Issue");
    }

    #[test]
    fn empty_method_counts_as_absent() {
        assert_eq!(label(Some(""), Some("FINGER")), "Missing c/in");
        assert_eq!(label(Some("FINGER"), Some("")), "Missing c/o");
        assert_eq!(label(Some(""), Some("")), "Write-In");
    }

    #[test]
    fn normalize_method_marks_absent_values() {
        assert_eq!(normalize_method(None), "NULL");
        assert_eq!(normalize_method(Some("")), "NULL");
        assert_eq!(normalize_method(Some("finger")), "FINGER");
    }
}
