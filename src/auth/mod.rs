//! Login against the configured credential list.

use crate::errors::{AppError, AppResult};
use crate::models::{
    session::{Role, Session},
    worker::Worker,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<Worker>,
}

impl Credential {
    fn new(username: &str, password: &str, role: Role, worker: Option<Worker>) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role,
            worker,
        }
    }
}

/// Accounts written to a fresh config file: one admin, one login per worker.
pub fn default_credentials() -> Vec<Credential> {
    let mut creds = vec![Credential::new("admin", "password123", Role::Admin, None)];
    for worker in Worker::ALL {
        let name = worker.key().to_lowercase();
        creds.push(Credential::new(
            &name,
            &format!("{name}123"),
            Role::Worker,
            Some(worker),
        ));
    }
    creds
}

/// Match `username`/`password` against `creds` and open a session.
pub fn authenticate(creds: &[Credential], username: &str, password: &str) -> AppResult<Session> {
    let cred = creds
        .iter()
        .find(|c| c.username == username && c.password == password)
        .ok_or_else(|| AppError::AuthFailed(username.to_string()))?;

    if cred.role == Role::Worker && cred.worker.is_none() {
        return Err(AppError::Config(format!(
            "user '{}' has role worker but no worker column",
            cred.username
        )));
    }

    info!(user = %cred.username, role = ?cred.role, "authenticated");
    Ok(Session {
        username: cred.username.clone(),
        role: cred.role,
        worker: cred.worker,
    })
}
