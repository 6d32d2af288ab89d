use serde::{Deserialize, Serialize};

/// Top-level routes of the site shell. Ordering matches the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Fuehrerscheine,
    Kontakt,
    Impressum,
    Datenschutz,
}

impl Route {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Startseite",
            Self::Fuehrerscheine => "Führerscheine",
            Self::Kontakt => "Kontakt",
            Self::Impressum => "Impressum",
            Self::Datenschutz => "Datenschutz",
        }
    }

    /// Routes shown in the header navigation; legal pages live in the footer.
    pub fn nav() -> &'static [Self] {
        &[Self::Home, Self::Fuehrerscheine, Self::Kontakt]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseClassCode {
    A,
    B,
    C,
    D,
}

impl LicenseClassCode {
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "Klasse A",
            Self::B => "Klasse B",
            Self::C => "Klasse C",
            Self::D => "Klasse D",
        }
    }
}

/// One sub-class blurb inside a main license class (e.g. A1 inside A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassInfo {
    pub code: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseClass {
    pub code: LicenseClassCode,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub subclasses: Vec<SubclassInfo>,
}

/// A physical branch of the school, rendered as a tab on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolInfo {
    pub name: String,
    pub street: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub managing_director: String,
    pub instructor_licence: String,
}

/// Register and authority data rendered on the Impressum page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalInfo {
    pub register_court: String,
    pub register_number: String,
    pub vat_id: String,
    pub supervisory_authority: String,
    pub supervisory_address: String,
    pub licence_authority: String,
}
