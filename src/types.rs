use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl Status {
    /// Tolerant parse: unrecognized text yields `None` rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// How the view orders tasks. Equal keys keep their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending by deadline; undated tasks last.
    Deadline,
    /// Case-insensitive ascending by title.
    Title,
    /// Reverse of current collection order.
    CreatedDesc,
}

impl SortMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "deadline" => Some(Self::Deadline),
            "title" => Some(Self::Title),
            "created_desc" => Some(Self::CreatedDesc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    #[serde(default)]
    pub estimated_duration_minutes: Option<u32>,
    /// RFC 3339 timestamp. Kept as raw text so malformed values survive
    /// round-trips and fall back to their stringified form for display.
    #[serde(default)]
    pub deadline_utc: Option<String>,
    #[serde(default)]
    pub notify_offsets_minutes: Vec<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub estimated_duration_minutes: Option<u32>,
    #[serde(default)]
    pub deadline_utc: Option<String>,
    #[serde(default)]
    pub notify_offsets_minutes: Vec<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub estimated_duration_minutes: Option<u32>,
    #[serde(default)]
    pub deadline_utc: Option<String>,
    #[serde(default)]
    pub notify_offsets_minutes: Option<Vec<u32>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// The filters and sort mode currently applied to the view.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub query: Option<String>,
    pub sort: Option<SortMode>,
}

impl FilterSpec {
    /// Builds a spec from raw text values, e.g. HTTP query parameters.
    /// Unrecognized status/priority/sort text degrades to "no filter".
    pub fn from_strings(
        status: Option<&str>,
        priority: Option<&str>,
        query: Option<&str>,
        sort: Option<&str>,
    ) -> Self {
        Self {
            status: status.and_then(Status::parse),
            priority: priority.and_then(Priority::parse),
            query: query
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            sort: sort.and_then(SortMode::parse),
        }
    }
}

/// Whole-collection status counts; never affected by active filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_tolerant() {
        assert_eq!(Status::parse(" DONE "), Some(Status::Done));
        assert_eq!(Status::parse("in_progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("archived"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for status in [Status::Pending, Status::InProgress, Status::Done] {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        for priority in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ] {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
    }

    #[test]
    fn priority_parse_is_tolerant() {
        assert_eq!(Priority::parse("Urgent"), Some(Priority::Urgent));
        assert_eq!(Priority::parse("asap"), None);
    }

    #[test]
    fn filter_spec_from_strings_drops_invalid_values() {
        let spec = FilterSpec::from_strings(
            Some("pending"),
            Some("not-a-priority"),
            Some("   "),
            Some("deadline"),
        );
        assert_eq!(spec.status, Some(Status::Pending));
        assert_eq!(spec.priority, None);
        assert_eq!(spec.query, None);
        assert_eq!(spec.sort, Some(SortMode::Deadline));
    }
}
