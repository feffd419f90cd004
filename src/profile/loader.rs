//! Profile file loading.
//!
//! Profiles live in YAML or JSON files; the format is chosen by file
//! extension. Loading failures are typed so the caller can decide whether to
//! surface them or degrade to "no profile" (the check command does the
//! latter, matching how the profile page renders when no profile exists yet).

use std::fs;
use std::path::Path;

use crate::error::{PlumlineError, Result};
use crate::profile::schema::CompanyProfile;

/// File format for profile and checklist files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

/// Determine the file format from a path's extension.
pub fn detect_format(path: &Path) -> Result<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => Ok(FileFormat::Yaml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(PlumlineError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a company profile from a YAML or JSON file.
pub fn load_profile(path: &Path) -> Result<CompanyProfile> {
    if !path.exists() {
        return Err(PlumlineError::ProfileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = detect_format(path)?;
    let contents = fs::read_to_string(path)?;

    let profile = match format {
        FileFormat::Yaml => {
            serde_yaml::from_str(&contents).map_err(|e| PlumlineError::ProfileParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        FileFormat::Json => {
            serde_json::from_str(&contents).map_err(|e| PlumlineError::ProfileParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
    };

    tracing::debug!("Loaded profile from {}", path.display());
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_yaml_profile() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.yml");
        fs::write(&path, "company_name: Acme\nfounded_year: 2015\n").unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.company_name.as_deref(), Some("Acme"));
        assert_eq!(profile.founded_year, Some(2015));
    }

    #[test]
    fn loads_json_profile() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.json");
        fs::write(&path, r#"{"company_name": "Acme", "website": "https://acme.test"}"#).unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.website.as_deref(), Some("https://acme.test"));
    }

    #[test]
    fn missing_file_is_profile_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_profile(&temp.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, PlumlineError::ProfileNotFound { .. }));
    }

    #[test]
    fn bad_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.yml");
        fs::write(&path, "company_name: [unclosed\n").unwrap();

        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, PlumlineError::ProfileParseError { .. }));
    }

    #[test]
    fn wrong_field_type_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.yml");
        fs::write(&path, "founded_year: about twenty years ago\n").unwrap();

        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, PlumlineError::ProfileParseError { .. }));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.toml");
        fs::write(&path, "company_name = 'Acme'\n").unwrap();

        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, PlumlineError::UnsupportedFormat { .. }));
    }
}
