use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::listing::Searchable;

/// Lifecycle of an enrollment serial key. Redemption happens server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerialKeyStatus {
    Available,
    Redeemed,
    Revoked,
}

impl SerialKeyStatus {
    pub const ALL: [Self; 3] = [Self::Available, Self::Redeemed, Self::Revoked];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Redeemed => "Redeemed",
            Self::Revoked => "Revoked",
        }
    }
}

impl fmt::Display for SerialKeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerialKey {
    pub code: String,
    pub course_title: String,
    pub status: SerialKeyStatus,
    #[serde(default)]
    pub redeemed_by: Option<String>,
}

impl Searchable for SerialKey {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.code.as_str(), self.course_title.as_str()];
        if let Some(user) = self.redeemed_by.as_deref() {
            fields.push(user);
        }
        fields
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLog {
    pub user_email: String,
    pub action: String,
    pub occurred_at: DateTime<Utc>,
}

impl AccessLog {
    /// True if the entry happened within `window` before `now`.
    #[must_use]
    pub fn is_recent(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.occurred_at <= now && now - self.occurred_at <= window
    }
}

impl Searchable for AccessLog {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_email.as_str(), self.action.as_str()]
    }
}
