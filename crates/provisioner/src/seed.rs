use appwrite_client::{AppwriteClient, AppwriteClientError, UNIQUE_ID};
use chrono::DateTime;
use common::error::OpsError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Events shipped with the binary for a no-arguments seed run.
const SAMPLE_EVENTS_YAML: &str = include_str!("seed_events.yml");

/// One seedable event, field-for-field the events collection schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventSeed {
    pub title: String,
    pub description: String,
    /// RFC 3339; validated at load time because the backend's datetime
    /// attribute rejects anything else at insert time.
    pub date: String,
    pub location: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub host: String,
    pub price: f64,
    pub max_attendees: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

pub fn sample_events() -> Result<Vec<EventSeed>, OpsError> {
    parse_events(SAMPLE_EVENTS_YAML)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<EventSeed>, OpsError> {
    let text = fs::read_to_string(path).map_err(OpsError::seed)?;
    parse_events(&text)
}

fn parse_events(text: &str) -> Result<Vec<EventSeed>, OpsError> {
    let events: Vec<EventSeed> = serde_yaml::from_str(text).map_err(OpsError::seed)?;
    for event in &events {
        if DateTime::parse_from_rfc3339(&event.date).is_err() {
            return Err(OpsError::seed_msg(format!(
                "event `{}` has a non-RFC 3339 date: `{}`",
                event.title, event.date
            )));
        }
    }
    Ok(events)
}

#[derive(Debug)]
pub struct SeedFailure {
    pub title: String,
    pub error: AppwriteClientError,
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub created: usize,
    pub failures: Vec<SeedFailure>,
}

impl SeedReport {
    pub fn attempted(&self) -> usize {
        self.created + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Insert every event, one awaited call per item. A failed item never stops
/// the rest; failures land in the report so the caller can decide the run's
/// fate. The completion line is only logged once the last call resolved.
pub async fn seed_events(
    client: &AppwriteClient,
    database_id: &str,
    collection_id: &str,
    events: &[EventSeed],
) -> Result<SeedReport, OpsError> {
    let mut report = SeedReport::default();

    for event in events {
        let data = serde_json::to_value(event).map_err(OpsError::seed)?;
        match client
            .create_document(database_id, collection_id, UNIQUE_ID, &data)
            .await
        {
            Ok(_) => {
                info!("Seeded event: {}", event.title);
                report.created += 1;
            }
            Err(error) => {
                warn!("Failed to seed event `{}`: {}", event.title, error);
                report.failures.push(SeedFailure {
                    title: event.title.clone(),
                    error,
                });
            }
        }
    }

    info!(
        "Seeding finished: {} created, {} failed",
        report.created,
        report.failures.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn sample_events_parse_and_validate() {
        let events = sample_events().expect("embedded sample set should load");
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].title, "Indie Makers Meetup");
        assert!(events[0].is_featured);
        assert_eq!(events[1].start_time, None);
    }

    #[test]
    fn serialized_events_use_schema_field_names() {
        let events = sample_events().expect("embedded sample set should load");
        let value = serde_json::to_value(&events[0]).expect("serialize");
        assert!(value.get("maxAttendees").is_some());
        assert!(value.get("isFeatured").is_some());
        assert!(value.get("startTime").is_some());
        assert!(value.get("max_attendees").is_none());
    }

    #[test]
    fn optional_times_are_omitted_not_null() {
        let events = sample_events().expect("embedded sample set should load");
        let value = serde_json::to_value(&events[1]).expect("serialize");
        assert!(value.get("startTime").is_none());
        assert!(value.get("endTime").is_none());
    }

    #[test]
    fn load_seed_file_reads_yaml() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            "- title: Pop-up Cinema\n  description: Open-air screening\n  date: 2026-08-14T20:00:00+00:00\n  location: Castle Green\n  image: https://example.com/cinema.jpg\n  category: Film\n  host: Castle Trust\n  price: 8.0\n  maxAttendees: 150\n"
        )
        .expect("write");

        let events = load_seed_file(file.path()).expect("should parse");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Pop-up Cinema");
        assert!(events[0].tags.is_empty());
    }

    #[test]
    fn rejects_non_rfc3339_date() {
        let err = parse_events(
            "- title: Bad Date\n  description: x\n  date: next tuesday\n  location: x\n  image: x\n  category: x\n  host: x\n  price: 1.0\n  maxAttendees: 10\n",
        )
        .expect_err("should fail");
        assert!(err.to_string().contains("Bad Date"));
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let err = parse_events("- title: No Price\n  description: x\n  date: 2026-08-14T20:00:00+00:00\n  location: x\n  image: x\n  category: x\n  host: x\n  maxAttendees: 10\n")
            .expect_err("should fail");
        assert!(matches!(err, OpsError::Seed { .. }));
    }
}
