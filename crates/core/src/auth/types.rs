use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;

/// Request information for authentication
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub headers: HashMap<String, String>,
    pub source_ip: IpAddr,
}

/// Advisory role of a platform user.
///
/// Roles gate what a consumer surface offers (upload, delete-own), never
/// what the service accepts. The role travels as a claim on the
/// authenticated identity, not as a separately stored flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Instructor,
}

impl Role {
    /// May this role publish and manage courses?
    pub fn can_publish(&self) -> bool {
        matches!(self, Role::Instructor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
        }
    }
}

/// Authenticated identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self {
            user_id: "anonymous".to_string(),
            email: None,
            role: Role::Student,
        }
    }
}
