//! Catalog configuration file
//!
//! ```json
//! {
//!   "roles":   [{"role_id": "R1", "name": "Engineer"}],
//!   "courses": [{"course_id": "C1", "title": "Intro"}],
//!   "role_mappings": {"R1": ["C1"]}
//! }
//! ```
//!
//! All three keys are required. There are no defaults: a missing or
//! malformed file is an error the caller treats as fatal.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use training_domain::{Catalog, Course, CourseId, Role, RoleId};

use crate::error::{AdapterError, Result};
use crate::records::{CourseRecord, RoleRecord};

/// The catalog payload exactly as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub roles: Vec<RoleRecord>,
    pub courses: Vec<CourseRecord>,
    pub role_mappings: HashMap<String, Vec<String>>,
}

impl CatalogConfig {
    /// Load the payload from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AdapterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AdapterError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse the payload from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the read-only Catalog. Mapped course ids are not checked.
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(
            self.roles.into_iter().map(Role::from),
            self.courses.into_iter().map(Course::from),
            self.role_mappings.into_iter().map(|(role_id, course_ids)| {
                (
                    RoleId::new(role_id),
                    course_ids.into_iter().map(CourseId::new).collect(),
                )
            }),
        )
    }
}

/// Load the Catalog from a configuration file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    info!("Loading configuration from {}...", path.display());
    let catalog = CatalogConfig::from_file(path)?.into_catalog();
    info!(
        "Loaded {} roles, {} courses, and {} role mappings.",
        catalog.role_count(),
        catalog.course_count(),
        catalog.mapping_count()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "roles": [
            {"role_id": "R1", "name": "Engineer"},
            {"role_id": "R2", "name": "Manager"}
        ],
        "courses": [
            {"course_id": "C1", "title": "Intro"},
            {"course_id": "C2", "title": "Safety"},
            {"course_id": "C3", "title": "Leadership"}
        ],
        "role_mappings": {
            "R1": ["C1", "C2"],
            "R2": ["C2", "C3", "C404"]
        }
    }"#;

    #[test]
    fn test_config_parse() {
        let catalog = CatalogConfig::from_json(SAMPLE).unwrap().into_catalog();

        assert_eq!(catalog.role_count(), 2);
        assert_eq!(catalog.course_count(), 3);
        assert_eq!(catalog.mapping_count(), 2);
        // Dangling ids survive loading
        assert_eq!(catalog.required_courses(&RoleId::new("R2")).len(), 3);
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let json = r#"{"roles": [], "courses": []}"#;
        assert!(CatalogConfig::from_json(json).is_err());
    }

    #[test]
    fn test_incomplete_record_is_rejected() {
        let json = r#"{"roles": [{"role_id": "R1"}], "courses": [], "role_mappings": {}}"#;
        assert!(CatalogConfig::from_json(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(
            catalog.role(&RoleId::new("R1")).map(Role::name),
            Some("Engineer")
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_catalog(&dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, AdapterError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, AdapterError::Parse { .. }));
    }
}
