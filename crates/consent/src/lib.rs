//! Consent record, durable store, and the controller that mediates between
//! storage and UI. The persisted decision gates whether third-party embeds
//! (the map widget) may load; everything here fails closed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version of the persisted record. An incompatible future schema
/// bumps this and writes under a new key, leaving old records inert instead
/// of misparsed.
pub const CONSENT_SCHEMA_VERSION: u32 = 1;

/// File name of the durable entry, version suffix included.
pub const CONSENT_STORAGE_KEY: &str = "consent.v1";

/// The single source of truth for the consent decision.
///
/// A record whose `timestamp` is `None` is NOT a user decision — it must be
/// treated like no record at all when deciding whether to prompt again, even
/// if such a record exists in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecord {
    pub external_media: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConsentRecord {
    /// Fail-closed default: deny external media, no decision made.
    pub fn undecided() -> Self {
        Self {
            external_media: false,
            timestamp: None,
        }
    }

    /// Whether the user has made an explicit decision.
    pub fn is_decided(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// Partial update merged into the current record. Only recognized fields
/// exist here, so unknown fields are unrepresentable by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsentUpdate {
    pub external_media: Option<bool>,
}

impl ConsentUpdate {
    pub fn external_media(value: bool) -> Self {
        Self {
            external_media: Some(value),
        }
    }
}

/// Durable storage for exactly one consent record.
///
/// `load` must degrade to `None` on anything it cannot read back — corrupted
/// storage is indistinguishable from absence and leads back to the safe
/// "ask again" path, never to an error the page surfaces.
pub trait ConsentStore {
    fn load(&self) -> Option<ConsentRecord>;
    fn save(&mut self, record: &ConsentRecord) -> Result<()>;
}

/// Store backed by one JSON file (`consent.v1.json`) under the per-user
/// data directory.
pub struct FileConsentStore {
    path: PathBuf,
}

impl FileConsentStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{CONSENT_STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConsentStore for FileConsentStore {
    fn load(&self) -> Option<ConsentRecord> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "consent record unreadable");
                return None;
            }
        };

        match serde_json::from_str::<ConsentRecord>(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "consent record malformed; treating as absent"
                );
                None
            }
        }
    }

    fn save(&mut self, record: &ConsentRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create consent data directory '{}'", parent.display())
            })?;
        }

        let serialized =
            serde_json::to_string_pretty(record).context("failed to serialize consent record")?;
        std::fs::write(&self.path, serialized).with_context(|| {
            format!("failed to write consent record '{}'", self.path.display())
        })?;
        Ok(())
    }
}

/// In-memory store, the swap-in implementation for tests.
#[derive(Debug, Default)]
pub struct MemoryConsentStore {
    record: Option<ConsentRecord>,
}

impl MemoryConsentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ConsentRecord) -> Self {
        Self {
            record: Some(record),
        }
    }
}

impl ConsentStore for MemoryConsentStore {
    fn load(&self) -> Option<ConsentRecord> {
        self.record
    }

    fn save(&mut self, record: &ConsentRecord) -> Result<()> {
        self.record = Some(*record);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&ConsentRecord)>;

/// Mediates between the store and any number of UI components. The
/// controller is the sole writer of the persisted record; every `update`
/// persists, then notifies all subscribers before returning, so the very
/// next read in the same turn observes the committed value.
pub struct ConsentController {
    store: Box<dyn ConsentStore>,
    current: ConsentRecord,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ConsentController {
    pub fn new(store: Box<dyn ConsentStore>) -> Self {
        let current = store.load().unwrap_or_else(ConsentRecord::undecided);
        Self {
            store,
            current,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The effective record. Substitutes the fail-closed default when the
    /// store held nothing usable.
    pub fn current(&self) -> ConsentRecord {
        self.current
    }

    /// Merges the partial into the current record, stamps the decision time
    /// (this call IS the explicit decision), persists, and notifies
    /// subscribers. A failing store write is logged and the in-memory state
    /// still advances, so the running session stays consistent.
    pub fn update(&mut self, update: ConsentUpdate) {
        if let Some(external_media) = update.external_media {
            self.current.external_media = external_media;
        }
        self.current.timestamp = Some(Utc::now());

        if let Err(err) = self.store.save(&self.current) {
            tracing::warn!(%err, "failed to persist consent decision");
        } else {
            tracing::debug!(
                external_media = self.current.external_media,
                "consent decision persisted"
            );
        }

        for (_, subscriber) in &self.subscribers {
            subscriber(&self.current);
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&ConsentRecord) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }
}

impl std::fmt::Debug for ConsentController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentController")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
