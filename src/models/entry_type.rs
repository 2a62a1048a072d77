use serde::{Serialize, Serializer};

/// Compliance classification derived from a clock-in/clock-out method pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Finger,
    WriteIn,
    ProvisionalEntry,
    NoSuccessfulFingerprint,
    MissingClockIn,
    MissingClockOut,
    TimeSwap,
    RawClockPairSplit,
    WeekendPairSplit,
    ManagerReassignment,
    ProgrammingIssue,
}

impl EntryType {
    pub const ALL: [EntryType; 11] = [
        EntryType::Finger,
        EntryType::WriteIn,
        EntryType::ProvisionalEntry,
        EntryType::NoSuccessfulFingerprint,
        EntryType::MissingClockIn,
        EntryType::MissingClockOut,
        EntryType::TimeSwap,
        EntryType::RawClockPairSplit,
        EntryType::WeekendPairSplit,
        EntryType::ManagerReassignment,
        EntryType::ProgrammingIssue,
    ];

    /// Convert enum → stored label
    pub fn as_label(&self) -> &'static str {
        match self {
            EntryType::Finger => "Finger",
            EntryType::WriteIn => "Write-In",
            EntryType::ProvisionalEntry => "Provisional Entry",
            EntryType::NoSuccessfulFingerprint => "NO SUCCESSFUL FINGERPRINT",
            EntryType::MissingClockIn => "Missing c/in",
            EntryType::MissingClockOut => "Missing c/o",
            EntryType::TimeSwap => "Time-Swap",
            EntryType::RawClockPairSplit => "Raw Clock Pair Split",
            EntryType::WeekendPairSplit => "Programming or Wk End Rw Pair Split",
            EntryType::ManagerReassignment => "Manager FTW Reassignment",
            EntryType::ProgrammingIssue => "Programming Issue",
        }
    }

    /// Convert stored label → enum
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_label() == s)
    }

    /// Entry types kept by the transformer; everything else is a
    /// data-quality case that never reaches the store.
    pub fn is_compliance_relevant(&self) -> bool {
        matches!(
            self,
            EntryType::Finger
                | EntryType::MissingClockOut
                | EntryType::ProvisionalEntry
                | EntryType::WriteIn
        )
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

impl Serialize for EntryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}
