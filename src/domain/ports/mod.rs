mod jokes_port;
mod notification_port;

pub use jokes_port::JokesPort;
pub use notification_port::NotificationPort;

#[cfg(test)]
pub mod mocks {
    pub use super::jokes_port::mock::MockJokesPort;
    pub use super::notification_port::mock::MockNotificationPort;
}
