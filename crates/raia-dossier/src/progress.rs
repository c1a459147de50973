//! The derived completion score.
//!
//! Progress is a pure function of dossier state: four independent
//! 25-point checks, recomputed on demand. It is a coarse indicator for
//! views, not an enforced state machine; no operation is gated on it.

use crate::dossier::Dossier;

/// A completion score in {0, 25, 50, 75, 100} with a descriptive label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub score: u8,
    pub label: &'static str,
}

/// Compute the progress of a dossier.
pub fn progress(dossier: &Dossier) -> Progress {
    let mut score = 0u8;
    if !dossier.files().is_empty() {
        score += 25;
    }
    if !dossier.ctd_mapping().is_empty() {
        score += 25;
    }
    if !dossier.findings().is_empty() {
        score += 25;
    }
    if dossier.findings().iter().any(|f| f.status.is_reviewed()) {
        score += 25;
    }

    let label = match score {
        0 => "Upload files to begin",
        25 => "Map files to CTD",
        50 => "Run analysis",
        75 => "Review findings",
        _ => "Ready to finalize",
    };
    Progress { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raia_types::{Authority, FindingStatus, Pathway};

    const ACTOR: &str = "reviewer";

    #[test]
    fn empty_dossier_scores_zero() {
        let d = Dossier::new("D", Authority::Sahpra, Pathway::Abridged).unwrap();
        let p = progress(&d);
        assert_eq!(p.score, 0);
        assert_eq!(p.label, "Upload files to begin");
    }

    #[test]
    fn score_climbs_through_the_workflow() {
        let mut d = Dossier::new("D", Authority::Sahpra, Pathway::Abridged).unwrap();

        d.ingest("cover_letter.txt", b"x", "abridged pathway declared", ACTOR)
            .unwrap();
        assert_eq!(progress(&d).score, 25);
        assert_eq!(progress(&d).label, "Map files to CTD");

        d.suggest_mappings(ACTOR);
        assert_eq!(progress(&d).score, 50);
        assert_eq!(progress(&d).label, "Run analysis");

        d.run_analysis(ACTOR);
        assert_eq!(progress(&d).score, 75);
        assert_eq!(progress(&d).label, "Review findings");

        let id = d.findings()[0].id;
        d.set_finding_status(id, FindingStatus::Accepted, ACTOR)
            .unwrap();
        let p = progress(&d);
        assert_eq!(p.score, 100);
        assert_eq!(p.label, "Ready to finalize");
    }

    #[test]
    fn checks_are_independent() {
        // Findings without mappings: 25 (files) + 25 (findings) = 50.
        let mut d = Dossier::new("D", Authority::Sahpra, Pathway::Abridged).unwrap();
        d.ingest("a.txt", b"x", "stability data", ACTOR).unwrap();
        d.run_analysis(ACTOR);
        assert_eq!(progress(&d).score, 50);
    }
}
