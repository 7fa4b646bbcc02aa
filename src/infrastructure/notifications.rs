//! Desktop notifications with conditional compilation.

use crate::domain::ports::NotificationPort;

#[cfg(feature = "notify")]
mod notify_impl {
    use super::NotificationPort;
    use notify_rust::Notification;

    /// Desktop notification service.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        enabled: bool,
    }

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, title: &str, body: &str) {
            if !self.enabled {
                return;
            }

            let title = title.to_string();
            let body = body.to_string();

            tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&title)
                    .body(&body)
                    .appname("Dad Jokes")
                    .show()
                {
                    tracing::warn!(error = %e, "Failed to show notification");
                }
            });
        }
    }
}

#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::NotificationPort;

    /// Desktop notification service (disabled build).
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService;

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, _title: &str, _body: &str) {}
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopNotificationService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopNotificationService;
