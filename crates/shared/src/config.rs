use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{LegalInfo, LicenseClass, LicenseClassCode, Location, SchoolInfo, SubclassInfo};

/// Everything the site renders is derived from this one config object.
/// Every field carries a default so a partial `site.toml` only overrides
/// what it names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub school: SchoolInfo,
    pub legal: LegalInfo,
    pub locations: Vec<Location>,
    pub classes: Vec<LicenseClass>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            school: SchoolInfo {
                name: "Fahrschule DriveAcademy".to_string(),
                street: "Hauptstraße 123".to_string(),
                city: "10115 Berlin".to_string(),
                phone: "+49 (0) 30 12345678".to_string(),
                email: "info@driveacademy.de".to_string(),
                website: "www.driveacademy.de".to_string(),
                managing_director: "Michael Schmidt".to_string(),
                instructor_licence: "FL-2024-12345".to_string(),
            },
            legal: LegalInfo {
                register_court: "Amtsgericht Berlin-Charlottenburg".to_string(),
                register_number: "HRB 123456 B".to_string(),
                vat_id: "DE123456789".to_string(),
                supervisory_authority: "Senatsverwaltung für Bildung, Jugend und Familie"
                    .to_string(),
                supervisory_address: "Bernhard-Weiß-Straße 6, 10178 Berlin".to_string(),
                licence_authority:
                    "Senatsverwaltung für Bildung, Jugend und Familie Berlin".to_string(),
            },
            locations: vec![
                Location {
                    name: "Berlin-Mitte".to_string(),
                    address: "Hauptstraße 123, 10115 Berlin".to_string(),
                    phone: "+49 (0) 30 12345678".to_string(),
                    hours: "Mo–Fr 14:00–18:00\nSa 10:00–13:00".to_string(),
                },
                Location {
                    name: "Berlin-Pankow".to_string(),
                    address: "Breite Straße 45, 13187 Berlin".to_string(),
                    phone: "+49 (0) 30 87654321".to_string(),
                    hours: "Di–Do 15:00–18:00".to_string(),
                },
            ],
            classes: vec![
                LicenseClass {
                    code: LicenseClassCode::B,
                    title: "Auto (Klasse B)".to_string(),
                    description: "Der klassische Pkw-Führerschein bis 3,5 t. \
                                  Theorie- und Praxisausbildung mit modernen Fahrzeugen."
                        .to_string(),
                    subclasses: vec![
                        SubclassInfo {
                            code: "B".to_string(),
                            title: "Klasse B".to_string(),
                            description: "Pkw bis 3,5 t, Anhänger bis 750 kg. \
                                          Mindestalter 18 Jahre (17 mit Begleitung)."
                                .to_string(),
                        },
                        SubclassInfo {
                            code: "BE".to_string(),
                            title: "Klasse BE".to_string(),
                            description: "Pkw mit Anhänger über 750 kg bis 3,5 t."
                                .to_string(),
                        },
                    ],
                },
                LicenseClass {
                    code: LicenseClassCode::A,
                    title: "Motorrad (Klasse A)".to_string(),
                    description: "Vom Leichtkraftrad bis zur unbeschränkten Klasse A."
                        .to_string(),
                    subclasses: vec![
                        SubclassInfo {
                            code: "A1".to_string(),
                            title: "Klasse A1".to_string(),
                            description: "Leichtkrafträder bis 125 cm³, ab 16 Jahren."
                                .to_string(),
                        },
                        SubclassInfo {
                            code: "A2".to_string(),
                            title: "Klasse A2".to_string(),
                            description: "Krafträder bis 35 kW, ab 18 Jahren.".to_string(),
                        },
                        SubclassInfo {
                            code: "A".to_string(),
                            title: "Klasse A".to_string(),
                            description: "Unbeschränkte Krafträder, ab 24 Jahren oder \
                                          nach zwei Jahren A2."
                                .to_string(),
                        },
                    ],
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Classes in configured order; an empty list renders the
    /// "keine Klassen verfügbar" notice instead of tabs.
    pub fn active_classes(&self) -> &[LicenseClass] {
        &self.classes
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn read_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Loads the site config, falling back to built-in defaults. Resolution
/// order: explicit path, then `SITE_CONFIG` env var, then `./site.toml`.
/// A missing or malformed file is logged and never fatal.
pub fn load_site_config(explicit: Option<&Path>) -> SiteConfig {
    let env_path = std::env::var("SITE_CONFIG").ok();
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| env_path.map(Into::into))
        .unwrap_or_else(|| "site.toml".into());

    match read_config_file(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded site config");
            config
        }
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no site config file; using defaults");
            SiteConfig::default()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "unusable site config; using defaults");
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_complete_content() {
        let config = SiteConfig::default();
        assert!(!config.school.name.is_empty());
        assert!(!config.locations.is_empty());
        assert!(!config.active_classes().is_empty());
        assert!(config
            .active_classes()
            .iter()
            .all(|class| !class.subclasses.is_empty()));
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: SiteConfig = toml::from_str(
            r#"
            locations = []

            [school]
            name = "Fahrschule Nord"
            street = "Am Hafen 1"
            city = "20095 Hamburg"
            phone = "+49 40 111111"
            email = "kontakt@fahrschule-nord.de"
            website = "www.fahrschule-nord.de"
            managing_director = "Anna Weber"
            instructor_licence = "FL-2025-00001"
            "#,
        )
        .expect("partial config");

        assert_eq!(config.school.name, "Fahrschule Nord");
        assert!(config.locations.is_empty());
        // Untouched sections keep their defaults.
        assert_eq!(config.legal.vat_id, SiteConfig::default().legal.vat_id);
        assert!(!config.classes.is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = toml::from_str::<SiteConfig>("school = \"not a table\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_site_config(Some(Path::new("/definitely/not/here/site.toml")));
        assert_eq!(config.school.name, SiteConfig::default().school.name);
    }

    #[test]
    fn nav_routes_exclude_legal_pages() {
        use crate::domain::Route;
        assert!(!Route::nav().contains(&Route::Impressum));
        assert!(!Route::nav().contains(&Route::Datenschutz));
    }
}
