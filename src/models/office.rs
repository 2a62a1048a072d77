use serde::{Serialize, Serializer};

const CINCINNATI_LABEL: &str = "P&G Cincinnati";
const CINCINNATI_ALIASES: [&str; 3] = ["Blue Ash", "Cincinnati", "St. Bernard"];

/// Reporting operation an office rolls up to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum XlcOperation {
    /// The three Cincinnati-area sites report as one operation.
    PgCincinnati,
    Other(String),
}

impl XlcOperation {
    /// Collapse office aliases. Matching is exact: no trimming, no case folding.
    pub fn from_office(ofc_name: &str) -> Self {
        if ofc_name == CINCINNATI_LABEL || CINCINNATI_ALIASES.contains(&ofc_name) {
            XlcOperation::PgCincinnati
        } else {
            XlcOperation::Other(ofc_name.to_string())
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            XlcOperation::PgCincinnati => CINCINNATI_LABEL,
            XlcOperation::Other(name) => name,
        }
    }
}

/// String form of [`XlcOperation::from_office`].
pub fn normalize_office(ofc_name: &str) -> String {
    XlcOperation::from_office(ofc_name).as_label().to_string()
}

impl std::fmt::Display for XlcOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

impl Serialize for XlcOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}
