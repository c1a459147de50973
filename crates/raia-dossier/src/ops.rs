//! Mutating dossier operations.
//!
//! Every operation here follows the two-outcome contract: the business
//! mutation succeeds or fails on its own terms (validation errors mutate
//! nothing and write no audit entry), and the audit append reports
//! separately through [`Audited`]. A failed audit append never rolls back
//! the mutation it describes.

use chrono::Utc;
use tracing::{debug, warn};

use raia_audit::AuditOutcome;
use raia_crypto::ContentHasher;
use raia_rules::evaluate;
use raia_types::{taxonomy, Chunk, Digest, FindingStatus, TaxonomyNodeId};

use crate::dossier::Dossier;
use crate::error::DossierError;
use crate::file::FileRecord;
use crate::finding::{FindingId, FindingRecord};

/// A business result paired with the outcome of its audit append.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Audited<T> {
    pub value: T,
    pub audit: AuditOutcome,
}

/// One file offered for ingestion.
#[derive(Clone, Debug)]
pub struct IncomingFile {
    pub name: String,
    pub bytes: Vec<u8>,
    /// Already-extracted plain text (empty when extraction failed or the
    /// format is unsupported).
    pub extracted_text: String,
}

/// What a successful ingestion produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestReceipt {
    pub file_name: String,
    pub digest: Digest,
    pub chunk_count: usize,
}

/// Per-file outcomes of a batch ingestion.
///
/// Files are processed sequentially and independently: one file's failure
/// never prevents the others from succeeding.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(String, Result<Audited<IngestReceipt>, DossierError>)>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

impl Dossier {
    /// Ingest one file: digest its bytes, chunk its extracted text, and
    /// record it.
    ///
    /// A file whose name already exists in the dossier is rejected as a
    /// validation error; nothing is mutated and no audit entry is
    /// written for the rejected attempt.
    pub fn ingest(
        &mut self,
        name: &str,
        bytes: &[u8],
        extracted_text: &str,
        actor: &str,
    ) -> Result<Audited<IngestReceipt>, DossierError> {
        if self.file(name).is_some() {
            return Err(DossierError::DuplicateFile(name.to_string()));
        }

        let digest = ContentHasher::FILE.hash(bytes);
        let chunks = Chunk::split_text(name, extracted_text);
        let chunk_count = chunks.len();

        self.chunks.extend(chunks);
        self.files.push(FileRecord {
            name: name.to_string(),
            size: bytes.len() as u64,
            content: extracted_text.to_string(),
            digest,
            uploaded_at: Utc::now(),
        });
        debug!(file = name, chunks = chunk_count, "file ingested");

        let audit = self.audit_log.record(
            &format!("Ingested file {name} ({chunk_count} chunks)"),
            actor,
        );
        Ok(Audited {
            value: IngestReceipt {
                file_name: name.to_string(),
                digest,
                chunk_count,
            },
            audit,
        })
    }

    /// Ingest a batch of files sequentially and independently.
    pub fn ingest_batch(&mut self, files: Vec<IncomingFile>, actor: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for file in files {
            let result = self.ingest(&file.name, &file.bytes, &file.extracted_text, actor);
            report.results.push((file.name, result));
        }
        report
    }

    /// Map a file to a CTD taxonomy node. Mapping an already-mapped file
    /// overwrites silently (last write wins).
    pub fn map_file(
        &mut self,
        file_name: &str,
        node: TaxonomyNodeId,
        actor: &str,
    ) -> Result<Audited<()>, DossierError> {
        if self.file(file_name).is_none() {
            return Err(DossierError::UnknownFile(file_name.to_string()));
        }
        let node_name = taxonomy::node_name(node.as_str())
            .ok_or_else(|| DossierError::UnknownTaxonomyNode(node.to_string()))?;

        self.ctd_mapping.insert(file_name.to_string(), node);
        let audit = self
            .audit_log
            .record(&format!("Mapped {file_name} to {node_name}"), actor);
        Ok(Audited { value: (), audit })
    }

    /// Remove a file's CTD mapping. Returns `false` (without an audit
    /// entry) when the file was not mapped.
    pub fn unmap_file(
        &mut self,
        file_name: &str,
        actor: &str,
    ) -> Result<Audited<bool>, DossierError> {
        if self.file(file_name).is_none() {
            return Err(DossierError::UnknownFile(file_name.to_string()));
        }
        match self.ctd_mapping.remove(file_name) {
            Some(node) => {
                let node_name = taxonomy::node_name(node.as_str()).unwrap_or(node.as_str());
                let audit = self
                    .audit_log
                    .record(&format!("Unmapped {file_name} from {node_name}"), actor);
                Ok(Audited { value: true, audit })
            }
            None => {
                warn!(file = file_name, "unmap requested for unmapped file");
                Ok(Audited {
                    value: false,
                    audit: AuditOutcome::Skipped,
                })
            }
        }
    }

    /// Suggest CTD mappings for unmapped files from filename keywords.
    ///
    /// Deterministic given the file names and the fixed keyword table.
    /// Returns the number of files newly mapped.
    pub fn suggest_mappings(&mut self, actor: &str) -> Audited<usize> {
        let mut suggested = 0;
        for file in &self.files {
            if self.ctd_mapping.contains_key(&file.name) {
                continue;
            }
            if let Some(node) = taxonomy::suggest_node(&file.name) {
                self.ctd_mapping.insert(file.name.clone(), node);
                suggested += 1;
            }
        }
        let audit = self
            .audit_log
            .record(&format!("Auto-suggested {suggested} mappings"), actor);
        Audited {
            value: suggested,
            audit,
        }
    }

    /// Remove every CTD mapping. Returns the number removed.
    pub fn clear_mappings(&mut self, actor: &str) -> Audited<usize> {
        let cleared = self.ctd_mapping.len();
        self.ctd_mapping.clear();
        let audit = self.audit_log.record("Cleared all CTD mappings", actor);
        Audited {
            value: cleared,
            audit,
        }
    }

    /// Run the compliance check: replace the entire findings list with
    /// the engine's output over the active rule set and current chunks.
    ///
    /// Safe to call with a partially mapped dossier. Prior findings,
    /// including reviewer decisions, are discarded: findings are a fresh
    /// snapshot of the corpus at analysis time.
    pub fn run_analysis(&mut self, actor: &str) -> Audited<&[FindingRecord]> {
        let findings = evaluate(self.active_rules(), &self.chunks);
        self.findings = findings.into_iter().map(FindingRecord::new).collect();

        let audit = self.audit_log.record(
            &format!("Ran compliance check: {} findings", self.findings.len()),
            actor,
        );
        Audited {
            value: self.findings.as_slice(),
            audit,
        }
    }

    /// Set the reviewer decision on one finding.
    pub fn set_finding_status(
        &mut self,
        id: FindingId,
        status: FindingStatus,
        actor: &str,
    ) -> Result<Audited<()>, DossierError> {
        let record = self
            .findings
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| {
                warn!(finding = %id, "status change for unknown finding");
                DossierError::UnknownFinding(id.to_string())
            })?;
        record.status = status;
        let rule_id = record.finding.rule_id.clone();

        let audit = self
            .audit_log
            .record(&format!("Finding {rule_id} marked as {status}"), actor);
        Ok(Audited { value: (), audit })
    }

    /// Replace the dossier's override rule set.
    pub fn set_rules(&mut self, rules: raia_rules::RuleSet, actor: &str) -> Audited<()> {
        let count = rules.len();
        self.rules = Some(rules);
        let audit = self
            .audit_log
            .record(&format!("Replaced rule set ({count} rules)"), actor);
        Audited { value: (), audit }
    }

    /// Drop the override rule set, returning to the authority's defaults.
    pub fn reset_rules(&mut self, actor: &str) -> Audited<()> {
        self.rules = None;
        let audit = self.audit_log.record("Reset rules to defaults", actor);
        Audited { value: (), audit }
    }

    /// Record an action that mutated no dossier state but belongs in the
    /// trail (e.g. exporting the dossier).
    pub fn audit_note(&mut self, action: &str, actor: &str) -> AuditOutcome {
        self.audit_log.record(action, actor)
    }
}
