//! Per-session aggregation of reasoning log entries

use super::entry::ReasoningLogEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate of all attempts that share one session id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub attempts: u32,
    /// Whether any attempt was approved
    pub approved: bool,
    pub total_generation_secs: f64,
    pub total_review_secs: f64,
    pub first_seen: DateTime<Utc>,
}

impl SessionSummary {
    /// Group entries by session, ordered by first appearance
    pub fn from_entries(entries: &[ReasoningLogEntry]) -> Vec<SessionSummary> {
        let mut order: Vec<String> = Vec::new();
        let mut by_session: HashMap<String, SessionSummary> = HashMap::new();

        for entry in entries {
            let summary = by_session
                .entry(entry.session_id.clone())
                .or_insert_with(|| {
                    order.push(entry.session_id.clone());
                    SessionSummary {
                        session_id: entry.session_id.clone(),
                        attempts: 0,
                        approved: false,
                        total_generation_secs: 0.0,
                        total_review_secs: 0.0,
                        first_seen: entry.timestamp,
                    }
                });
            summary.attempts += 1;
            summary.approved |= entry.is_approved;
            summary.total_generation_secs += entry.generation_duration;
            summary.total_review_secs += entry.review_duration;
            summary.first_seen = summary.first_seen.min(entry.timestamp);
        }

        order
            .into_iter()
            .filter_map(|id| by_session.remove(&id))
            .collect()
    }
}

/// Entries of one session ordered by attempt number
pub fn session_attempts(entries: &[ReasoningLogEntry], session_id: &str) -> Vec<ReasoningLogEntry> {
    let mut attempts: Vec<ReasoningLogEntry> = entries
        .iter()
        .filter(|e| e.session_id == session_id)
        .cloned()
        .collect();
    attempts.sort_by_key(|e| e.attempt_number);
    attempts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    fn entry(session: &str, attempt: u32, approved: bool, gen_secs: f64) -> ReasoningLogEntry {
        ReasoningLogEntry::new(
            session,
            attempt,
            Utc.with_ymd_and_hms(2025, 3, attempt, 10, 0, 0).unwrap(),
            format!("PIR {}", attempt),
            Duration::from_secs_f64(gen_secs),
            approved,
            Duration::from_millis(500),
        )
        .unwrap()
    }

    #[test]
    fn test_groups_by_session_in_order() {
        let entries = vec![
            entry("b", 1, false, 1.0),
            entry("a", 1, true, 2.0),
            entry("b", 2, false, 1.5),
            entry("b", 3, false, 0.5),
        ];
        let summaries = SessionSummary::from_entries(&entries);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].session_id, "b");
        assert_eq!(summaries[0].attempts, 3);
        assert!(!summaries[0].approved);
        assert_eq!(summaries[0].total_generation_secs, 3.0);
        assert_eq!(summaries[0].total_review_secs, 1.5);
        assert_eq!(summaries[1].session_id, "a");
        assert!(summaries[1].approved);
    }

    #[test]
    fn test_first_seen_is_earliest_timestamp() {
        let entries = vec![entry("a", 2, true, 1.0), entry("a", 1, false, 1.0)];
        let summaries = SessionSummary::from_entries(&entries);
        assert_eq!(summaries[0].first_seen, entries[1].timestamp);
    }

    #[test]
    fn test_empty_log_has_no_sessions() {
        assert!(SessionSummary::from_entries(&[]).is_empty());
    }

    #[test]
    fn test_session_attempts_sorted() {
        let entries = vec![
            entry("a", 2, true, 1.0),
            entry("b", 1, true, 1.0),
            entry("a", 1, false, 1.0),
        ];
        let attempts = session_attempts(&entries, "a");
        assert_eq!(
            attempts.iter().map(|e| e.attempt_number).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(session_attempts(&entries, "zzz").is_empty());
    }
}
