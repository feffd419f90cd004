//! Field vocabulary and ordered checklist policies.
//!
//! The checklist is the single source of truth for which profile fields count
//! toward completeness and in what order they are reported. The standard
//! policy covers seven fields; deployments with a different profile policy
//! can load their own checklist from a YAML/JSON file.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlumlineError, Result};
use crate::profile::loader::{detect_format, FileFormat};
use crate::profile::CompanyProfile;

/// A profile field that can appear on a completeness checklist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    CompanyName,
    Description,
    Industry,
    CompanySize,
    Location,
    FoundedYear,
    Website,
}

impl FieldKey {
    /// Human-readable label, as shown in the dashboard banner.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::CompanyName => "Company Name",
            FieldKey::Description => "Description",
            FieldKey::Industry => "Industry",
            FieldKey::CompanySize => "Company Size",
            FieldKey::Location => "Location",
            FieldKey::FoundedYear => "Founded Year",
            FieldKey::Website => "Website",
        }
    }

    /// Serialized key, matching the profile file field names.
    pub fn key(&self) -> &'static str {
        match self {
            FieldKey::CompanyName => "company_name",
            FieldKey::Description => "description",
            FieldKey::Industry => "industry",
            FieldKey::CompanySize => "company_size",
            FieldKey::Location => "location",
            FieldKey::FoundedYear => "founded_year",
            FieldKey::Website => "website",
        }
    }

    /// Whether this field is populated on the given profile.
    ///
    /// Text fields count as missing when absent or blank; the founded year
    /// counts as missing only when absent.
    pub fn is_present(&self, profile: &CompanyProfile) -> bool {
        fn filled(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }

        match self {
            FieldKey::CompanyName => filled(&profile.company_name),
            FieldKey::Description => filled(&profile.description),
            FieldKey::Industry => filled(&profile.industry),
            FieldKey::CompanySize => filled(&profile.company_size),
            FieldKey::Location => filled(&profile.location),
            FieldKey::FoundedYear => profile.founded_year.is_some(),
            FieldKey::Website => filled(&profile.website),
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An ordered list of fields that count toward profile completeness.
///
/// Order is policy: missing fields are always reported in checklist
/// declaration order, and the checklist length is the percentage denominator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Checklist {
    /// Checklist fields in evaluation order.
    pub fields: Vec<FieldKey>,
}

impl Checklist {
    /// The standard seven-field completeness policy.
    pub fn standard() -> Self {
        Self {
            fields: vec![
                FieldKey::CompanyName,
                FieldKey::Description,
                FieldKey::Industry,
                FieldKey::CompanySize,
                FieldKey::Location,
                FieldKey::FoundedYear,
                FieldKey::Website,
            ],
        }
    }

    /// Number of fields in the percentage denominator.
    pub fn total(&self) -> usize {
        self.fields.len()
    }

    /// Load a custom checklist from a YAML or JSON file.
    ///
    /// The file lists field keys under `fields:`, e.g.
    ///
    /// ```yaml
    /// fields:
    ///   - company_name
    ///   - location
    ///   - website
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlumlineError::ChecklistNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = detect_format(path)?;
        let contents = fs::read_to_string(path)?;

        let checklist: Checklist = match format {
            FileFormat::Yaml => serde_yaml::from_str(&contents).map_err(|e| {
                PlumlineError::ChecklistParseError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?,
            FileFormat::Json => serde_json::from_str(&contents).map_err(|e| {
                PlumlineError::ChecklistParseError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?,
        };

        checklist.validate()?;
        tracing::debug!(
            "Loaded checklist with {} field(s) from {}",
            checklist.total(),
            path.display()
        );
        Ok(checklist)
    }

    /// Reject checklists that cannot produce a meaningful percentage.
    fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(PlumlineError::ChecklistValidationError {
                message: "checklist lists no fields".into(),
            });
        }
        Ok(())
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn standard_checklist_has_seven_fields_in_policy_order() {
        let checklist = Checklist::standard();
        assert_eq!(checklist.total(), 7);
        assert_eq!(checklist.fields[0], FieldKey::CompanyName);
        assert_eq!(checklist.fields[4], FieldKey::Location);
        assert_eq!(checklist.fields[6], FieldKey::Website);
    }

    #[test]
    fn labels_match_dashboard_wording() {
        let labels: Vec<_> = Checklist::standard()
            .fields
            .iter()
            .map(|f| f.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Company Name",
                "Description",
                "Industry",
                "Company Size",
                "Location",
                "Founded Year",
                "Website"
            ]
        );
    }

    #[test]
    fn field_keys_serialize_as_snake_case() {
        let json = serde_json::to_string(&FieldKey::CompanyName).unwrap();
        assert_eq!(json, r#""company_name""#);
        let key: FieldKey = serde_json::from_str(r#""founded_year""#).unwrap();
        assert_eq!(key, FieldKey::FoundedYear);
    }

    #[test]
    fn presence_treats_whitespace_as_missing() {
        let profile = CompanyProfile {
            company_name: Some("  ".into()),
            location: Some("Kathmandu".into()),
            ..Default::default()
        };
        assert!(!FieldKey::CompanyName.is_present(&profile));
        assert!(FieldKey::Location.is_present(&profile));
    }

    #[test]
    fn founded_year_present_when_set() {
        let profile = CompanyProfile {
            founded_year: Some(1999),
            ..Default::default()
        };
        assert!(FieldKey::FoundedYear.is_present(&profile));
        assert!(!FieldKey::FoundedYear.is_present(&CompanyProfile::default()));
    }

    #[test]
    fn loads_custom_checklist_from_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checklist.yml");
        fs::write(&path, "fields:\n  - company_name\n  - location\n").unwrap();

        let checklist = Checklist::load(&path).unwrap();
        assert_eq!(checklist.total(), 2);
        assert_eq!(
            checklist.fields,
            vec![FieldKey::CompanyName, FieldKey::Location]
        );
    }

    #[test]
    fn unknown_field_key_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checklist.yml");
        fs::write(&path, "fields:\n  - twitter_handle\n").unwrap();

        let err = Checklist::load(&path).unwrap_err();
        assert!(matches!(err, PlumlineError::ChecklistParseError { .. }));
    }

    #[test]
    fn empty_checklist_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checklist.yml");
        fs::write(&path, "fields: []\n").unwrap();

        let err = Checklist::load(&path).unwrap_err();
        assert!(matches!(err, PlumlineError::ChecklistValidationError { .. }));
    }

    #[test]
    fn missing_checklist_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = Checklist::load(&temp.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, PlumlineError::ChecklistNotFound { .. }));
    }
}
