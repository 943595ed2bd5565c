//! Fuzzy metric-name matching
//!
//! Result sets imported from different spreadsheets spell the same
//! metric inconsistently ("Noise Suppression", "noise-suppression",
//! "NoiseSuppression"). This module is the single place that decides
//! whether two spellings refer to the same metric; every comparison
//! call site goes through [`metric_names_match`].
//!
//! The relation is reflexive and symmetric but NOT transitive
//! (containment can chain through unrelated names), so callers must
//! only ever compare candidate names against one fixed baseline set,
//! never close over the relation.

/// Minimum normalized length for substring containment to count as a match
const MIN_CONTAINMENT_LEN: usize = 3;

/// Normalize a metric name: strip all whitespace and hyphens, lowercase
pub fn normalize_metric_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

/// Decide whether two metric names refer to the same metric
///
/// Match rules, in order:
/// 1. Equal after normalization
/// 2. Substring containment in either direction, when the contained
///    name has at least 3 normalized characters
/// 3. A synonym rule from the fixed special-case table
pub fn metric_names_match(a: &str, b: &str) -> bool {
    let na = normalize_metric_name(a);
    let nb = normalize_metric_name(b);

    if na.is_empty() || nb.is_empty() {
        return false;
    }
    if na == nb {
        return true;
    }
    if na.len() >= MIN_CONTAINMENT_LEN && nb.contains(&na) {
        return true;
    }
    if nb.len() >= MIN_CONTAINMENT_LEN && na.contains(&nb) {
        return true;
    }

    synonym_rule_applies(&na, &nb)
}

/// Special-case synonym table
///
/// Each rule matches when BOTH normalized names satisfy its predicate.
fn synonym_rule_applies(na: &str, nb: &str) -> bool {
    // Comprehensibility scores appear under many prefixed/suffixed names
    if na.contains("comprehensibility") && nb.contains("comprehensibility") {
        return true;
    }

    // "MOS" vs its spelled-out form; containment never links these
    const MOS_ALIASES: [&str; 2] = ["mos", "meanopinionscore"];
    if MOS_ALIASES.contains(&na) && MOS_ALIASES.contains(&nb) {
        return true;
    }

    false
}
