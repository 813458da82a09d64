//! User-facing notifications (toasts).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Fire-and-forget message sink
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Writes notifications to the log only
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Success | Severity::Info => log::info!("{}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Reactive list of notifications rendered by the page shell
#[derive(Clone, Copy)]
pub struct NotificationQueue {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn clear(&self) {
        self.items.set(Vec::new());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, message: &str, severity: Severity) {
        LogNotifier.notify(message, severity);
        let Some(id) = self.next_id.try_update_value(|next| {
            let id = *next;
            *next += 1;
            id
        }) else {
            return;
        };
        // a disposed queue (page closed) silently drops the message
        self.items.try_update(|items| {
            items.push(Notification {
                id,
                message: message.to_string(),
                severity,
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn ids(queue: &NotificationQueue) -> Vec<u64> {
        queue.items().get_untracked().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_notify_and_dismiss_order() {
        let owner = Owner::new();
        owner.with(|| {
            let queue = NotificationQueue::new();
            queue.notify("Saved", Severity::Success);
            queue.notify("Failed to load jobs", Severity::Error);
            assert_eq!(ids(&queue), vec![1, 2]);
            assert_eq!(queue.items().get_untracked()[1].message, "Failed to load jobs");

            queue.dismiss(1);
            assert_eq!(ids(&queue), vec![2]);
            queue.notify("3 services activated", Severity::Success);
            assert_eq!(ids(&queue), vec![2, 3]);

            queue.clear();
            assert!(ids(&queue).is_empty());
        });
    }

    #[test]
    fn test_disposed_queue_drops_messages() {
        let owner = Owner::new();
        let queue = owner.with(NotificationQueue::new);
        owner.cleanup();

        queue.notify("late", Severity::Warning);
        assert!(queue.items.try_get_untracked().is_none());
    }
}
