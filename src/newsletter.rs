use std::io::Write;

use uuid::Uuid;

use crate::domain::{Field, UserRecord};
use crate::notification::{Notification, NotificationError};

/// Batch driver: every loaded user is offered to every notification.
///
/// Uniqueness state lives inside the notifications' validators, so calling
/// [`Newsletter::send`] twice makes every earlier success fail on the second
/// pass. Build a new `Newsletter` for each independent run.
pub struct Newsletter<W: Write> {
    notifications: Vec<Notification>,
    users: Vec<UserRecord>,
    console: W,
}

impl<W: Write> Newsletter<W> {
    pub fn new(notifications: Vec<Notification>, console: W) -> Self {
        Self {
            notifications,
            users: Vec::new(),
            console,
        }
    }

    /// Replaces the working set of users.
    pub fn load_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn into_console(self) -> W {
        self.console
    }

    /// Users in load order, notifications in configuration order. A failure
    /// is reported and the loop moves on to the next pair.
    pub fn send(&mut self) {
        let span = tracing::info_span!(
            "Dispatching newsletter",
            run_id = %Uuid::new_v4(),
            users = self.users.len(),
            notifications = self.notifications.len()
        );
        let _guard = span.enter();

        let Self {
            notifications,
            users,
            console,
        } = self;
        for user in users.iter() {
            for notification in notifications.iter_mut() {
                match notification.send(user, &mut *console) {
                    Ok(()) => tracing::info!(
                        notification = %notification.name(),
                        user = ?user.get_str(Field::Name),
                        "Notification sent"
                    ),
                    Err(error) => {
                        tracing::warn!(
                            notification = %notification.name(),
                            error = %error,
                            "Unable to send notification"
                        );
                        if let Err(e) = report_failure(console, notification.name(), &error, user)
                        {
                            tracing::error!("Failed to write failure report: {:?}", e);
                        }
                    }
                }
            }
        }
    }
}

fn report_failure(
    console: &mut impl Write,
    name: &str,
    error: &NotificationError,
    user: &UserRecord,
) -> std::io::Result<()> {
    writeln!(
        console,
        "Unable to send {} failed with message '{}'",
        name, error
    )?;
    writeln!(console, "{}", user.dump())
}
