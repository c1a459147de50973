use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Target regulatory authority for a dossier.
///
/// The authority selects the default rule set and the submission guideline
/// text. The set is fixed: these are the reliance-pathway authorities the
/// review workflow supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    /// South African Health Products Regulatory Authority.
    #[serde(rename = "SAHPRA")]
    Sahpra,
    /// Tanzania Medicines and Medical Devices Authority.
    #[serde(rename = "TMDA")]
    Tmda,
    /// Botswana Medicines Regulatory Authority.
    #[serde(rename = "BoMRA")]
    Bomra,
}

impl Authority {
    /// All supported authorities, in display order.
    pub const ALL: [Authority; 3] = [Authority::Sahpra, Authority::Tmda, Authority::Bomra];

    /// Canonical short name (e.g. `"SAHPRA"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Sahpra => "SAHPRA",
            Authority::Tmda => "TMDA",
            Authority::Bomra => "BoMRA",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Authority {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SAHPRA" => Ok(Authority::Sahpra),
            "TMDA" => Ok(Authority::Tmda),
            "BOMRA" => Ok(Authority::Bomra),
            other => Err(TypeError::UnknownAuthority(other.to_string())),
        }
    }
}

/// Reliance pathway declared for a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pathway {
    /// Abridged review relying on a reference authority's assessment.
    Abridged,
    /// Verified review of a reference authority's assessment.
    Verified,
    /// Full standalone review (no reliance).
    Full,
}

impl Pathway {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pathway::Abridged => "Abridged",
            Pathway::Verified => "Verified",
            Pathway::Full => "Full",
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pathway {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abridged" => Ok(Pathway::Abridged),
            "verified" => Ok(Pathway::Verified),
            "full" => Ok(Pathway::Full),
            other => Err(TypeError::UnknownPathway(other.to_string())),
        }
    }
}

/// Severity classification for rules and findings.
///
/// Ordering: `Critical > Major > Minor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "major" => Ok(Severity::Major),
            "minor" => Ok(Severity::Minor),
            other => Err(TypeError::UnknownSeverity(other.to_string())),
        }
    }
}

/// Reviewer decision on a finding.
///
/// Every finding starts `Unset`; a reviewer may accept it (the issue is
/// real and acknowledged) or dispute it (a false positive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    #[default]
    Unset,
    Accepted,
    Disputed,
}

impl FindingStatus {
    /// Returns `true` if a reviewer has made a decision on this finding.
    pub fn is_reviewed(&self) -> bool {
        !matches!(self, FindingStatus::Unset)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Unset => "unset",
            FindingStatus::Accepted => "accepted",
            FindingStatus::Disputed => "disputed",
        }
    }
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
