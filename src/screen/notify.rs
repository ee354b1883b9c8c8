use std::mem;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// One transient notification for the shell to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

/// Queue of notifications produced by the screen flows.
///
/// Flash-message semantics: flows push, the shell drains and renders.
/// Nothing here blocks and undrained entries simply accumulate.
#[derive(Debug, Default, Clone)]
pub struct Notifications {
    queue: Vec<Notification>,
}

impl Notifications {
    /// Queue a success notification.
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Level::Success, title, message);
    }

    /// Queue an error notification.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Level::Error, title, message);
    }

    fn push(&mut self, level: Level, title: impl Into<String>, message: impl Into<String>) {
        self.queue.push(Notification {
            level,
            title: title.into(),
            message: message.into(),
        });
    }

    /// Drain every queued notification, oldest first.
    pub fn take(&mut self) -> Vec<Notification> {
        mem::take(&mut self.queue)
    }

    /// Queued notifications without draining them.
    pub fn pending(&self) -> &[Notification] {
        &self.queue
    }
}
