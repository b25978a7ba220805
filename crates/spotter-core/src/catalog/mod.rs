//! Feature catalog for purchased plans.
//!
//! Provides the built-in table of every feature a plan can include, for
//! both professional roles (nutritionist, trainer). The catalog is defined
//! in `features.toml`, embedded in the binary at compile time, and parsed
//! exactly once into an immutable table. Feature ids are unique across
//! roles, so a lookup by id never depends on search order.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::models::ProfessionalRole;

/// A single feature entry from the embedded catalog.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Stable feature identifier (e.g. `diet_plan`).
    pub id: String,
    /// Professional role this feature belongs to.
    pub role: ProfessionalRole,
    /// User-facing label, used to compose task titles.
    pub label: String,
    /// User-facing description of what the feature delivers.
    pub description: String,
}

/// Container for deserializing the embedded TOML file.
#[derive(Debug, Deserialize)]
struct FeatureCatalog {
    features: Vec<CatalogEntry>,
}

/// The embedded feature catalog TOML.
static CATALOG_TOML: &str = include_str!("features.toml");

/// The parsed catalog, initialized on first access.
static CATALOG: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    let catalog: FeatureCatalog =
        toml::from_str(CATALOG_TOML).expect("embedded features.toml is invalid");
    catalog.features
});

/// All catalog entries, in the order defined in the TOML.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. This is a compile-time
/// invariant -- if the binary was built, the TOML is valid.
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Look up a catalog entry by feature id.
///
/// Returns `None` for ids the catalog does not know about; callers treat
/// that as "derive nothing for this feature".
pub fn find(feature_id: &str) -> Option<&'static CatalogEntry> {
    entries().iter().find(|entry| entry.id == feature_id)
}

/// Return catalog entries belonging to a given professional role.
pub fn for_role(role: ProfessionalRole) -> Vec<&'static CatalogEntry> {
    entries()
        .iter()
        .filter(|entry| entry.role == role)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_nonempty() {
        assert!(
            !entries().is_empty(),
            "embedded feature catalog should not be empty"
        );
    }

    #[test]
    fn ids_are_unique_across_roles() {
        let mut ids: Vec<&str> = entries().iter().map(|e| e.id.as_str()).collect();
        let original_len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(
            ids.len(),
            original_len,
            "feature ids must be unique across both roles"
        );
    }

    #[test]
    fn find_known_feature() {
        let entry = find("diet_plan").unwrap();
        assert_eq!(entry.role, ProfessionalRole::Nutritionist);
        assert_eq!(entry.label, "Plano alimentar");
    }

    #[test]
    fn find_known_trainer_feature() {
        let entry = find("initial_assessment").unwrap();
        assert_eq!(entry.role, ProfessionalRole::Trainer);
        assert_eq!(entry.label, "Avaliação física");
    }

    #[test]
    fn find_unknown_feature_returns_none() {
        assert!(find("massage_session").is_none());
    }

    #[test]
    fn nutritionist_features() {
        let features = for_role(ProfessionalRole::Nutritionist);
        let ids: Vec<&str> = features.iter().map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&"initial_consultation"));
        assert!(ids.contains(&"diet_plan"));
        assert!(ids.contains(&"follow_up"));
        assert!(ids.contains(&"whatsapp_support"));
    }

    #[test]
    fn trainer_features() {
        let features = for_role(ProfessionalRole::Trainer);
        let ids: Vec<&str> = features.iter().map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&"initial_assessment"));
        assert!(ids.contains(&"training_plan"));
        assert!(ids.contains(&"follow_up_training"));
        assert!(ids.contains(&"workout_review"));
    }

    #[test]
    fn roles_partition_the_catalog() {
        let nutritionist = for_role(ProfessionalRole::Nutritionist).len();
        let trainer = for_role(ProfessionalRole::Trainer).len();
        assert_eq!(nutritionist + trainer, entries().len());
    }
}
