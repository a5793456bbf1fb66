use super::worker::Worker;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Worker,
}

/// Caller identity handed to the view filter. The engine never stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub worker: Option<Worker>,
}

impl Session {
    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: Role::Admin,
            worker: None,
        }
    }

    pub fn worker(username: impl Into<String>, worker: Worker) -> Self {
        Self {
            username: username.into(),
            role: Role::Worker,
            worker: Some(worker),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
