//! One-shot user notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Error,
}

/// A single toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    #[must_use]
    pub fn success(description: &str) -> Self {
        Self { title: "Success!".to_owned(), description: description.to_owned(), variant: NotificationVariant::Success }
    }

    #[must_use]
    pub fn error(description: &str) -> Self {
        Self { title: "Error".to_owned(), description: description.to_owned(), variant: NotificationVariant::Error }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Error
    }
}

/// Visible toasts in push order, each tagged with a unique id.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<(u64, Notification)>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notification and return the id used to dismiss it.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, notification));
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }
}
