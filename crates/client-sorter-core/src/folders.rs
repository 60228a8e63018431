use crate::models::ClientIdentity;
use std::collections::{HashMap, HashSet};

/// Assign every client a distinct folder name, index-aligned with the roster.
///
/// The first client with a given base name gets it unchanged; later ones get
/// `base_2`, `base_3`, ... in roster order. A suffixed name that is already
/// taken is skipped, so the result never contains duplicates.
pub fn generate_folder_names(roster: &[ClientIdentity]) -> Vec<String> {
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    let mut assigned: HashSet<String> = HashSet::new();
    let mut folder_names = Vec::with_capacity(roster.len());

    for client in roster {
        let base = client.base_folder_name();
        let count = occurrences.entry(base.clone()).or_insert(0);
        *count += 1;

        let mut candidate = if *count == 1 {
            base.clone()
        } else {
            format!("{}_{}", base, count)
        };
        while assigned.contains(&candidate) {
            *count += 1;
            candidate = format!("{}_{}", base, count);
        }

        assigned.insert(candidate.clone());
        folder_names.push(candidate);
    }

    folder_names
}
