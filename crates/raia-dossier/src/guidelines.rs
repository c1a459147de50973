//! Per-authority submission guideline text, shown alongside the upload
//! workflow. Display data only; the rule engine does not read these.

use raia_types::Authority;

/// Submission guidelines for an authority.
pub fn guidelines(authority: Authority) -> &'static [&'static str] {
    match authority {
        Authority::Sahpra => &[
            "Declare reliance pathway (Abridged/Verified) in Module 1",
            "Submit required forms GLF-PEM-02L and GLF-PEM-02E",
            "Provide unredacted assessment reports from EMA/FDA/TGA",
            "Include Zone IVb stability data and API supplier documentation",
            "Ensure labeling matches final RRA-approved version",
            "Provide change log documenting differences from reference",
        ],
        Authority::Tmda => &[
            "Declare reliance pathway and reference authority in Module 1.2",
            "Include sameness declaration and applicant consent",
            "Provide unredacted RRA assessment reports within 60-90 days",
            "Submit TMDA forms and fees in Module 1.10.3",
            "Include local labeling compliant with TMDA requirements",
        ],
        Authority::Bomra => &[
            "State RRA approval or ZAZIBONA recommendation with supporting proof",
            "Submit BoMRA forms, fees, and local labeling",
            "Provide full assessment reports or letter of authorization",
            "Include Zone IVb stability data and bioequivalence reports",
            "Attach valid GMP certificates for all manufacturing sites",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_authority_has_guidelines() {
        for authority in Authority::ALL {
            assert!(!guidelines(authority).is_empty());
        }
    }
}
