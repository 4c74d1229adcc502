//! Transient toast notifications.
//!
//! Same policy as the site's form: one toast at a time, a newer toast
//! replaces whatever is showing, and a toast disappears on its own after
//! 3.5 seconds unless something replaced it first.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::time::sleep;

pub const TOAST_TTL: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

struct Slot {
    toast: Option<Toast>,
    generation: u64,
}

#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                toast: None,
                generation: 0,
            })),
        }
    }

    pub fn ok(&self, message: impl Into<String>) {
        self.show(ToastKind::Ok, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let generation = {
            let mut slot = self.slot.lock().unwrap();

            slot.generation += 1;
            slot.toast = Some(Toast {
                kind,
                message: message.clone(),
            });

            slot.generation
        };

        match kind {
            ToastKind::Ok => println!("{message}"),
            ToastKind::Error => eprintln!("{message}"),
        }

        // Expire quietly unless a newer toast took the slot first.
        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            sleep(TOAST_TTL).await;

            let mut slot = slot.lock().unwrap();
            if slot.generation == generation {
                slot.toast = None;
            }
        });
    }

    /// The toast currently showing, if any.
    pub fn current(&self) -> Option<Toast> {
        self.slot.lock().unwrap().toast.clone()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Notifier, TOAST_TTL, ToastKind};

    #[tokio::test(start_paused = true)]
    async fn toast_expires_on_its_own() {
        let notifier = Notifier::new();

        notifier.ok("hola");
        assert!(notifier.current().is_some());

        tokio::time::sleep(TOAST_TTL + Duration::from_millis(10)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn replacement_takes_the_slot_immediately() {
        let notifier = Notifier::new();

        notifier.ok("uno");
        notifier.error("dos");

        let toast = notifier.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "dos");
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_timer_cannot_clear_the_new_toast() {
        let notifier = Notifier::new();

        notifier.error("primero");
        tokio::time::sleep(Duration::from_millis(3000)).await;
        notifier.ok("segundo");

        // The first toast's timer fires in this window; "segundo" survives it.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(notifier.current().unwrap().message, "segundo");

        // And the second toast still expires on its own schedule.
        tokio::time::sleep(TOAST_TTL).await;
        assert!(notifier.current().is_none());
    }
}
