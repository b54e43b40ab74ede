use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted achievement, granted once per unique `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "earnedAt")]
    pub earned_at: DateTime<Utc>,
}

impl Badge {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        earned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            earned_at,
        }
    }
}
