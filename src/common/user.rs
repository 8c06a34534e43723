use super::newtypes::PersonId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub reputation_points: i32,
    pub created_at: DateTime<Utc>,
    /// Set when the account is suspended.
    #[serde(default)]
    pub banned_at: Option<DateTime<Utc>>,
}

impl Person {
    pub fn title(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.username.clone())
    }

    pub fn is_suspended(&self) -> bool {
        self.banned_at.is_some()
    }
}
