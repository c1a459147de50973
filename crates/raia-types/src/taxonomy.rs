//! The fixed CTD (Common Technical Document) taxonomy.
//!
//! Files in a dossier are mapped to nodes of this tree. The tree is fixed
//! by the CTD standard; it is data, not configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a CTD taxonomy node (e.g. `"m1-1"`, `"m3"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyNodeId(pub String);

impl TaxonomyNodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxonomyNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaxonomyNodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One node of the CTD module tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtdNode {
    pub id: &'static str,
    pub name: &'static str,
    pub children: &'static [CtdNode],
}

/// The CTD module tree: five top-level modules, with subsections where the
/// review workflow maps files at subsection granularity.
pub const CTD_STRUCTURE: &[CtdNode] = &[
    CtdNode {
        id: "m1",
        name: "Module 1: Administrative Information",
        children: &[
            CtdNode { id: "m1-1", name: "1.1 Cover Letter", children: &[] },
            CtdNode { id: "m1-2", name: "1.2 Administrative & Prescribing Info", children: &[] },
            CtdNode { id: "m1-3", name: "1.3 Product Information", children: &[] },
            CtdNode { id: "m1-4", name: "1.4 Labeling", children: &[] },
        ],
    },
    CtdNode {
        id: "m2",
        name: "Module 2: CTD Summaries",
        children: &[
            CtdNode { id: "m2-3", name: "2.3 Quality Overall Summary", children: &[] },
            CtdNode { id: "m2-4", name: "2.4 Nonclinical Overview", children: &[] },
            CtdNode { id: "m2-5", name: "2.5 Clinical Overview", children: &[] },
            CtdNode { id: "m2-7", name: "2.7 Clinical Summary", children: &[] },
        ],
    },
    CtdNode { id: "m3", name: "Module 3: Quality (CMC)", children: &[] },
    CtdNode { id: "m4", name: "Module 4: Nonclinical Study Reports", children: &[] },
    CtdNode { id: "m5", name: "Module 5: Clinical Study Reports", children: &[] },
];

/// Filename keyword heuristics for mapping suggestions.
///
/// Checked in order; the first keyword found as a case-insensitive
/// substring of the file name wins.
pub const KEYWORD_TABLE: &[(&str, &str)] = &[
    ("cover", "m1-1"),
    ("letter", "m1-1"),
    ("admin", "m1-2"),
    ("form", "m1-2"),
    ("label", "m1-4"),
    ("quality", "m3"),
    ("cmc", "m3"),
    ("nonclinical", "m4"),
    ("toxicology", "m4"),
    ("clinical", "m5"),
    ("study", "m5"),
];

/// Look up a node's display name anywhere in the tree.
pub fn node_name(id: &str) -> Option<&'static str> {
    fn walk(nodes: &'static [CtdNode], id: &str) -> Option<&'static str> {
        for node in nodes {
            if node.id == id {
                return Some(node.name);
            }
            if let Some(name) = walk(node.children, id) {
                return Some(name);
            }
        }
        None
    }
    walk(CTD_STRUCTURE, id)
}

/// Returns `true` if `id` names a node in the CTD tree.
pub fn is_valid_node(id: &str) -> bool {
    node_name(id).is_some()
}

/// Suggest a taxonomy node for a file based on its name.
///
/// Deterministic: depends only on the file name and [`KEYWORD_TABLE`].
pub fn suggest_node(file_name: &str) -> Option<TaxonomyNodeId> {
    let lowered = file_name.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, node)| TaxonomyNodeId::from(*node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_name_finds_nested_nodes() {
        assert_eq!(node_name("m1-1"), Some("1.1 Cover Letter"));
        assert_eq!(node_name("m2-7"), Some("2.7 Clinical Summary"));
        assert_eq!(node_name("m5"), Some("Module 5: Clinical Study Reports"));
        assert_eq!(node_name("m9"), None);
    }

    #[test]
    fn cover_letter_maps_to_m1_1() {
        assert_eq!(
            suggest_node("cover_letter.txt"),
            Some(TaxonomyNodeId::from("m1-1"))
        );
        assert_eq!(
            suggest_node("COVER_Letter.PDF"),
            Some(TaxonomyNodeId::from("m1-1"))
        );
    }

    #[test]
    fn keyword_precedence_is_table_order() {
        // "cover" appears before "study" in the table.
        assert_eq!(
            suggest_node("cover_study.txt"),
            Some(TaxonomyNodeId::from("m1-1"))
        );
    }

    #[test]
    fn unmatched_names_get_no_suggestion() {
        assert_eq!(suggest_node("miscellaneous.bin"), None);
    }

    #[test]
    fn all_keyword_targets_are_valid_nodes() {
        for (_, node) in KEYWORD_TABLE {
            assert!(is_valid_node(node), "keyword target {node} not in tree");
        }
    }
}
