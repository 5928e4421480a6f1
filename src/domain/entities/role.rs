use serde::{Deserialize, Serialize};

/// Role a signup picked on the waitlist form.
///
/// Unknown wire values are kept verbatim in `Other` instead of failing the
/// whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    EventPlanner,
    Vendor,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::EventPlanner => "event-planner",
            Role::Vendor => "vendor",
            Role::Other(raw) => raw,
        }
    }

    /// Label shown in the signups table.
    ///
    /// Anything that is not an event planner is labelled "Vendor", including
    /// unrecognized roles, even though those are left out of the vendor count.
    pub fn display_label(&self) -> &'static str {
        match self {
            Role::EventPlanner => "Event Planner",
            Role::Vendor | Role::Other(_) => "Vendor",
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "event-planner" => Role::EventPlanner,
            "vendor" => Role::Vendor,
            _ => Role::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
