use std::path::PathBuf;

use crate::domain::UserRecord;

#[derive(Debug, thiserror::Error)]
pub enum UserSourceError {
    #[error("Failed to read users from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} does not contain a JSON array of users")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("The `file` user source requires `users.path` to be set")]
    MissingPath,
}

/// Supplies the batch of users for one dispatch run.
pub trait UserSource {
    fn get_users(&self) -> Result<Vec<UserRecord>, UserSourceError>;
}

/// A fixed list of users handed over as-is.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserSource {
    users: Vec<UserRecord>,
}

impl InMemoryUserSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

impl UserSource for InMemoryUserSource {
    fn get_users(&self) -> Result<Vec<UserRecord>, UserSourceError> {
        Ok(self.users.clone())
    }
}

/// The sample batch the binary dispatches by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserSource;

impl UserSource for FixtureUserSource {
    fn get_users(&self) -> Result<Vec<UserRecord>, UserSourceError> {
        Ok(vec![
            UserRecord::default()
                .with_name("Ivan")
                .with_email("ivan@test.com")
                .with_device_id("B0-5A-7B-0B-32-BD"),
            UserRecord::default()
                .with_name("Peter")
                .with_email("peter@test.com"),
            UserRecord::default()
                .with_name("Mark")
                .with_device_id("B0-5A-7B-0B-32-BD"),
            UserRecord::default()
                .with_name("Nina")
                .with_email("..."),
            UserRecord::default()
                .with_name("Luke")
                .with_device_id("D0-F2-72-0C-DF"),
            UserRecord::default().with_name("Zerg").with_device_id(""),
            UserRecord::default()
                .with_email("qwe@test.com")
                .with_device_id("D0-F2-72-0C-DF-12"),
        ])
    }
}

/// Reads a JSON array of users from disk.
#[derive(Debug, Clone)]
pub struct JsonFileUserSource {
    path: PathBuf,
}

impl JsonFileUserSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserSource for JsonFileUserSource {
    #[tracing::instrument(name = "Loading users from file", skip(self), fields(path = %self.path.display()))]
    fn get_users(&self) -> Result<Vec<UserRecord>, UserSourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| UserSourceError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        // Entries are not checked here: a non-object entry or a field of the
        // wrong type is still a user, and each channel reports why it cannot
        // be sent.
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&contents).map_err(|e| UserSourceError::Parse {
                path: self.path.clone(),
                source: e,
            })?;
        let users: Vec<UserRecord> = entries.into_iter().map(UserRecord::from).collect();

        let malformed = users.iter().filter(|user| !user.is_mapping()).count();
        if malformed > 0 {
            tracing::warn!(
                malformed,
                "Some user entries are not objects and will fail every channel"
            );
        }

        Ok(users)
    }
}
