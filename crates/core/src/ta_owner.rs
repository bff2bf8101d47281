//! Talent-acquisition owner list.
//!
//! The list is a plain set of names replaced wholesale on every save.

use serde::Deserialize;

use crate::validation::dedup_trimmed;

/// Owners used when the database is unavailable.
pub const DEFAULT_TA_OWNERS: [&str; 4] = ["Yogiraj", "Shambhavi", "Maaz", "Ishita"];

/// DTO for replacing the whole owner list.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceTaOwners {
    pub owners: Vec<String>,
}

/// Trim names, drop blanks and duplicates, keeping first occurrences.
pub fn normalize_owner_list(owners: &[String]) -> Vec<String> {
    dedup_trimmed(owners)
}

pub fn default_owners() -> Vec<String> {
    DEFAULT_TA_OWNERS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blank_and_duplicate_names() {
        let owners = vec![
            "Maaz".to_string(),
            " Ishita ".to_string(),
            "".to_string(),
            "Maaz".to_string(),
        ];
        assert_eq!(normalize_owner_list(&owners), vec!["Maaz", "Ishita"]);
    }

    #[test]
    fn default_owners_has_four_names() {
        assert_eq!(default_owners().len(), 4);
        assert_eq!(default_owners()[0], "Yogiraj");
    }
}
