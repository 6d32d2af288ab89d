//! UI-free orchestration state for the site shell.

pub mod consent_flow;
