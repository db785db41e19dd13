use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a goal as reported by the goal service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl GoalStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not_started",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
            GoalStatus::Unknown => "unknown",
        }
    }
}

/// Goal record (mirrors the goal service payload).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: GoalStatus,
    /// Percentage, expected in 0..=100 but not validated.
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Goal {
    /// Description with surrounding whitespace removed, `None` when blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Response body of the goal listing operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GoalListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goals: Vec<Goal>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Goal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Goal>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Timestamps are opaque strings; accept RFC 3339 and the naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` form (interpreted as UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
