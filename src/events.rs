// The salute notification and the statistics derived from it
//
// A greeting item sends exactly one SaluteEvent per activation. The event
// loop delivers it to the greeting list, which stores the payload as the
// selected message, and to the session stats for the status bar.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// One-way notification a greeting item sends up to its container
#[derive(Debug, Clone, Serialize)]
pub struct SaluteEvent {
    /// The salutation word that was activated
    pub salutation: String,
    pub timestamp: DateTime<Utc>,
}

impl SaluteEvent {
    pub fn new(salutation: impl Into<String>) -> Self {
        Self {
            salutation: salutation.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Summary statistics for the status bar, accumulated from the salute
/// stream. Transient - discarded when the session ends.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    pub total_salutes: u64,

    /// Per-word activation counts
    pub salute_counts: HashMap<String, u64>,

    /// Most recently activated word
    pub last_salutation: Option<String>,
}

impl SessionStats {
    pub fn record(&mut self, event: &SaluteEvent) {
        self.total_salutes += 1;
        *self
            .salute_counts
            .entry(event.salutation.clone())
            .or_insert(0) += 1;
        self.last_salutation = Some(event.salutation.clone());
    }

    /// How many distinct words have been activated
    pub fn distinct_words(&self) -> usize {
        self.salute_counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_accumulate_per_word() {
        let mut stats = SessionStats::default();
        stats.record(&SaluteEvent::new("Hola"));
        stats.record(&SaluteEvent::new("Hola"));
        stats.record(&SaluteEvent::new("Bonjour"));

        assert_eq!(stats.total_salutes, 3);
        assert_eq!(stats.distinct_words(), 2);
        assert_eq!(stats.salute_counts["Hola"], 2);
        assert_eq!(stats.last_salutation.as_deref(), Some("Bonjour"));
    }

    #[test]
    fn stats_export_as_json() {
        let mut stats = SessionStats::default();
        stats.record(&SaluteEvent::new("Hello"));

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total_salutes\":1"));
        assert!(json.contains("\"last_salutation\":\"Hello\""));
    }
}
