//! UI layer for the site shell: app frame, pages, consent banner and dialog.

pub mod app;
pub mod banner;
pub mod consent_settings;
pub mod map;
pub mod pages;

pub use app::SiteApp;
