use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Alert priority levels, `P1` being the most urgent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::P1 => write!(f, "P1"),
            Priority::P2 => write!(f, "P2"),
            Priority::P3 => write!(f, "P3"),
            Priority::P4 => write!(f, "P4"),
            Priority::P5 => write!(f, "P5"),
        }
    }
}

/// Payload for creating an alert
///
/// OpsGenie deduplicates open alerts by `alias`; creating an alert with the
/// alias of an open one bumps its count instead of opening a new alert.
///
/// # Example
///
/// ```rust
/// use opsgenie_client::{CreateAlertRequest, Priority};
///
/// let alert = CreateAlertRequest::new("Disk usage above 90% on db-1")
///     .with_alias("db-1-disk")
///     .with_priority(Priority::P2)
///     .with_tag("database")
///     .with_detail("mount", "/var/lib/postgresql")
///     .with_description("Free space fell below the warning threshold");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    /// Alert text, limited to 130 characters by OpsGenie
    pub message: String,

    /// Client-defined identifier used for deduplication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Custom key/value properties
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,

    /// Domain the alert relates to (server, application, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Omitted priorities default to `P3` on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Display name of the request owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateAlertRequest {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_entity(mut self, entity: &str) -> Self {
        self.entity = Some(entity.to_string());
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

/// How an alert is addressed in path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertIdentifier {
    /// Server-assigned alert id
    Id(String),
    /// Client-defined alias
    Alias(String),
    /// Short numeric id shown in the UI
    Tiny(String),
}

impl AlertIdentifier {
    pub fn value(&self) -> &str {
        match self {
            AlertIdentifier::Id(value)
            | AlertIdentifier::Alias(value)
            | AlertIdentifier::Tiny(value) => value,
        }
    }

    /// Value of the `identifierType` query parameter
    pub fn kind(&self) -> &'static str {
        match self {
            AlertIdentifier::Id(_) => "id",
            AlertIdentifier::Alias(_) => "alias",
            AlertIdentifier::Tiny(_) => "tiny",
        }
    }
}

/// Optional context attached when closing an alert
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseAlertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CloseAlertRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

/// Common envelope of OpsGenie responses
///
/// Asynchronous endpoints answer `202` with a `result` text and a request id
/// that can be used to poll the request status.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub result: Option<String>,

    /// Server-side processing time in seconds
    #[serde(default)]
    pub took: Option<f64>,

    #[serde(default)]
    pub request_id: Option<String>,
}
