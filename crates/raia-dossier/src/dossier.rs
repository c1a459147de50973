use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use raia_audit::AuditLog;
use raia_rules::{active_rules, RuleSet};
use raia_types::{Authority, Chunk, Pathway, TaxonomyNodeId};

use crate::error::DossierError;
use crate::file::FileRecord;
use crate::finding::FindingRecord;

/// One regulatory submission under review.
///
/// Invariant: `chunks` is always derivable from `files`: every chunk's
/// source file is present, and every file's extracted text is chunked.
/// The invariant holds because files can only enter through `ingest`
/// (which chunks atomically) and duplicates are rejected rather than
/// re-ingested.
///
/// A dossier has no enforced state machine: any operation is permitted at
/// any time. Completeness is a derived view, computed by
/// [`progress`](crate::progress::progress).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dossier {
    pub(crate) name: String,
    pub(crate) authority: Authority,
    pub(crate) pathway: Pathway,
    pub(crate) files: Vec<FileRecord>,
    pub(crate) chunks: Vec<Chunk>,
    /// File name → CTD taxonomy node. BTreeMap for stable export order.
    pub(crate) ctd_mapping: BTreeMap<String, TaxonomyNodeId>,
    pub(crate) findings: Vec<FindingRecord>,
    pub(crate) audit_log: AuditLog,
    /// Override rule set; `None` means the authority's defaults apply.
    pub(crate) rules: Option<RuleSet>,
    pub(crate) created_at: DateTime<Utc>,
}

impl Dossier {
    /// Create an empty dossier. The name must be non-empty after
    /// trimming.
    pub fn new(
        name: impl Into<String>,
        authority: Authority,
        pathway: Pathway,
    ) -> Result<Self, DossierError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DossierError::EmptyName);
        }
        Ok(Self {
            name,
            authority,
            pathway,
            files: Vec::new(),
            chunks: Vec::new(),
            ctd_mapping: BTreeMap::new(),
            findings: Vec::new(),
            audit_log: AuditLog::new(),
            rules: None,
            created_at: Utc::now(),
        })
    }

    /// Create an empty dossier and audit its creation as the first chain
    /// entry.
    pub fn create(
        name: impl Into<String>,
        authority: Authority,
        pathway: Pathway,
        actor: &str,
    ) -> Result<crate::ops::Audited<Self>, DossierError> {
        let mut dossier = Self::new(name, authority, pathway)?;
        let audit = dossier
            .audit_log
            .record(&format!("Created dossier: {}", dossier.name), actor);
        Ok(crate::ops::Audited {
            value: dossier,
            audit,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    pub fn pathway(&self) -> Pathway {
        self.pathway
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn file(&self, name: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn ctd_mapping(&self) -> &BTreeMap<String, TaxonomyNodeId> {
        &self.ctd_mapping
    }

    pub fn findings(&self) -> &[FindingRecord] {
        &self.findings
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }

    /// The override rule set, if any.
    pub fn rule_override(&self) -> Option<&RuleSet> {
        self.rules.as_ref()
    }

    /// The rule set an analysis run would use right now: the override if
    /// present and non-empty, else the authority's defaults.
    pub fn active_rules(&self) -> &RuleSet {
        active_rules(self.rules.as_ref(), self.authority)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_names() {
        assert_eq!(
            Dossier::new("   ", Authority::Sahpra, Pathway::Abridged).unwrap_err(),
            DossierError::EmptyName
        );
    }

    #[test]
    fn new_dossier_is_empty() {
        let dossier = Dossier::new("Amoxicillin 500mg", Authority::Tmda, Pathway::Verified)
            .unwrap();
        assert_eq!(dossier.name(), "Amoxicillin 500mg");
        assert!(dossier.files().is_empty());
        assert!(dossier.chunks().is_empty());
        assert!(dossier.findings().is_empty());
        assert!(dossier.audit_log().is_empty());
        assert!(dossier.rule_override().is_none());
    }

    #[test]
    fn active_rules_default_to_authority() {
        let dossier = Dossier::new("D", Authority::Tmda, Pathway::Abridged).unwrap();
        assert!(dossier.active_rules().get("TMDA-001").is_some());
    }
}
