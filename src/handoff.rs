//! Session-scoped handoff storage: one key holding the JSON lead record the
//! hero form passes to the assessment wizard.

use chrono::{DateTime, Utc};
use log::warn;
use web_sys::Storage;

use crate::lead::LeadRecord;

pub const HANDOFF_KEY: &str = "hero_lead";

fn session_storage() -> Option<Storage> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
}

/// Parse a stored handoff payload, keeping it only while fresh. Corrupt or
/// stale data is treated as absent, never surfaced to the user.
pub fn parse_fresh(raw: &str, now: DateTime<Utc>) -> Option<LeadRecord> {
    match serde_json::from_str::<LeadRecord>(raw) {
        Ok(record) if record.is_fresh(now) => Some(record),
        Ok(_) => {
            warn!("discarding stale lead handoff record");
            None
        }
        Err(err) => {
            warn!("discarding unparseable lead handoff record: {}", err);
            None
        }
    }
}

/// Read the handoff record. Anything stale or corrupt is deleted from
/// storage on the way out so later mounts start clean.
pub fn take_fresh(now: DateTime<Utc>) -> Option<LeadRecord> {
    let storage = session_storage()?;
    let raw = storage.get_item(HANDOFF_KEY).ok().flatten()?;
    let parsed = parse_fresh(&raw, now);
    if parsed.is_none() {
        let _ = storage.remove_item(HANDOFF_KEY);
    }
    parsed
}

pub fn store(record: &LeadRecord) {
    let Some(storage) = session_storage() else {
        return;
    };
    match serde_json::to_string(record) {
        Ok(json) => {
            let _ = storage.set_item(HANDOFF_KEY, &json);
        }
        Err(err) => warn!("failed to serialize lead handoff record: {}", err),
    }
}

pub fn clear() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(HANDOFF_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::FRESHNESS_WINDOW_MS;
    use chrono::Duration;

    fn raw_record(now: DateTime<Utc>, age_ms: i64) -> String {
        let record = LeadRecord {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: "Doe Plumbing".into(),
            message: "invoicing".into(),
            timestamp: now - Duration::milliseconds(age_ms),
        };
        serde_json::to_string(&record).unwrap()
    }

    #[test]
    fn fresh_payload_parses() {
        let now = Utc::now();
        let record = parse_fresh(&raw_record(now, 30 * 60 * 1000), now).unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.message, "invoicing");
    }

    #[test]
    fn stale_payload_is_discarded() {
        let now = Utc::now();
        assert!(parse_fresh(&raw_record(now, FRESHNESS_WINDOW_MS), now).is_none());
    }

    #[test]
    fn corrupt_payload_is_discarded() {
        let now = Utc::now();
        assert!(parse_fresh("{not json", now).is_none());
        assert!(parse_fresh("{\"name\":\"only\"}", now).is_none());
        assert!(parse_fresh("", now).is_none());
    }

    #[test]
    fn missing_message_field_defaults_to_empty() {
        let now = Utc::now();
        let raw = format!(
            "{{\"name\":\"J\",\"email\":\"a@b.co\",\"company\":\"C\",\"timestamp\":\"{}\"}}",
            now.to_rfc3339()
        );
        let record = parse_fresh(&raw, now).unwrap();
        assert_eq!(record.message, "");
    }
}
