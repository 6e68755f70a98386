//! Tactical targets
//!
//! Map markers for hostile and friendly units, kept in a [`TargetStore`]
//! with auto-incrementing ids.

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use serde::{Deserialize, Serialize};

/// Symbol code for a hostile infantry unit.
pub const HOSTILE_SIDC: &str = "SHG-UCI----D";
/// Symbol code for a friendly infantry unit.
pub const FRIENDLY_SIDC: &str = "SFG-UCI----D";

pub const HOSTILE_NOTE: &str = "DETECTED";
pub const FRIENDLY_NOTE: &str = "TEAM_ALPHA";

/// A stored map marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    /// Symbol identification code selecting the map icon.
    pub sidc: String,
    pub note: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// A marker that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTarget {
    pub lat: f64,
    pub lng: f64,
    pub sidc: String,
    pub note: String,
    pub timestamp: u64,
}

/// Storage for target records.
pub trait TargetStore {
    /// Stores the target and returns its new id.
    fn add(&mut self, target: NewTarget) -> u64;

    /// All records in insertion order.
    fn all(&self) -> &[TargetRecord];

    fn get(&self, id: u64) -> Option<&TargetRecord> {
        self.all().iter().find(|record| record.id == id)
    }
}

/// In-memory [`TargetStore`]. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryTargetStore {
    records: Vec<TargetRecord>,
    next_id: u64,
}

impl MemoryTargetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetStore for MemoryTargetStore {
    fn add(&mut self, target: NewTarget) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.records.push(TargetRecord {
            id,
            lat: target.lat,
            lng: target.lng,
            sidc: target.sidc,
            note: target.note,
            timestamp: target.timestamp,
        });
        id
    }

    fn all(&self) -> &[TargetRecord] {
        &self.records
    }
}

/// Adds a hostile infantry marker at the given coordinates.
pub fn add_hostile<S: TargetStore>(store: &mut S, lat: f64, lng: f64) -> u64 {
    add_marker(store, lat, lng, HOSTILE_SIDC, HOSTILE_NOTE)
}

/// Adds a friendly infantry marker at the given coordinates.
pub fn add_friendly<S: TargetStore>(store: &mut S, lat: f64, lng: f64) -> u64 {
    add_marker(store, lat, lng, FRIENDLY_SIDC, FRIENDLY_NOTE)
}

fn add_marker<S: TargetStore>(store: &mut S, lat: f64, lng: f64, sidc: &str, note: &str) -> u64 {
    let id = store.add(NewTarget {
        lat,
        lng,
        sidc: sidc.to_string(),
        note: note.to_string(),
        timestamp: now_millis(),
    });
    debug!("Target {} ({}) added at {}, {}", id, sidc, lat, lng);
    id
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
