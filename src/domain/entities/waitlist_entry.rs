use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::role::Role;

/// One waitlist signup as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub occupation: String,
    pub role: Role,
    pub created_at: String,
}

impl WaitlistEntry {
    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Parses `created_at` as UTC.
    ///
    /// Accepts RFC 3339 and offset-less ISO-8601 timestamps (the latter are
    /// taken as UTC).
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    /// Signup date for display; unparseable values are shown as-is.
    pub fn signed_up_display(&self) -> String {
        match self.created_at_utc() {
            Some(at) => at.format("%b %-d, %Y %H:%M").to_string(),
            None => self.created_at.clone(),
        }
    }
}
