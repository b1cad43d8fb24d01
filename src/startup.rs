use std::io::Write;

use crate::configuration::{Settings, UserSourceKind, UsersSettings};
use crate::newsletter::Newsletter;
use crate::notification::Notification;
use crate::user_source::{FixtureUserSource, JsonFileUserSource, UserSource, UserSourceError};

/// Email first, then push. Each call builds fresh uniqueness scopes.
pub fn default_notifications() -> Vec<Notification> {
    vec![Notification::email(), Notification::push()]
}

pub fn get_user_source(settings: &UsersSettings) -> Result<Box<dyn UserSource>, UserSourceError> {
    match settings.source {
        UserSourceKind::Fixture => Ok(Box::new(FixtureUserSource)),
        UserSourceKind::File => {
            let path = settings.path.clone().ok_or(UserSourceError::MissingPath)?;
            Ok(Box::new(JsonFileUserSource::new(path)))
        }
    }
}

pub struct Application<W: Write> {
    newsletter: Newsletter<W>,
}

impl<W: Write> Application<W> {
    pub fn build(configuration: &Settings, console: W) -> Result<Self, UserSourceError> {
        let user_source = get_user_source(&configuration.users)?;
        Self::build_with_source(user_source.as_ref(), console)
    }

    pub fn build_with_source(
        user_source: &dyn UserSource,
        console: W,
    ) -> Result<Self, UserSourceError> {
        let users = user_source.get_users()?;
        tracing::info!("Loaded {} users", users.len());

        let mut newsletter = Newsletter::new(default_notifications(), console);
        newsletter.load_users(users);
        Ok(Self { newsletter })
    }

    /// Runs the batch once and hands back the console.
    pub fn run_until_complete(mut self) -> W {
        self.newsletter.send();
        self.newsletter.into_console()
    }
}
