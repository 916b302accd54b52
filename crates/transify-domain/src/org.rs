//! Organization (tenant) vocabulary.

use serde::{Deserialize, Serialize};

/// Kind of tenant. Wire format: lowercase (`"school"` / `"corporate"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgCategory {
    School,
    Corporate,
}

impl OrgCategory {
    pub fn from_str_wire(s: &str) -> Option<Self> {
        match s {
            "school" => Some(Self::School),
            "corporate" => Some(Self::Corporate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::School => "school",
            Self::Corporate => "corporate",
        }
    }
}
