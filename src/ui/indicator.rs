//! Scoped ownership of the blocking processing indicator.

use std::sync::Arc;

use crate::ui::Notifier;

/// Keeps the blocking indicator visible for as long as it is alive.
///
/// Dropping the guard dismisses the indicator, so early returns and `?` can never
/// leave it on screen.
pub struct ProcessingIndicator {
    notifier: Arc<dyn Notifier>,
    active: bool,
}

impl ProcessingIndicator {
    /// Show the indicator.
    pub fn show(notifier: Arc<dyn Notifier>, message: &str) -> Self {
        notifier.show_blocking(message);
        tracing::trace!(text = message, "Processing indicator shown");
        Self {
            notifier,
            active: true,
        }
    }

    /// Dismiss now. Idempotent.
    pub fn dismiss(&mut self) {
        if self.active {
            self.active = false;
            self.notifier.dismiss();
            tracing::trace!("Processing indicator dismissed");
        }
    }

    /// Release the guard without dismissing; the page is about to be replaced.
    pub fn hand_off(mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for ProcessingIndicator {
    fn drop(&mut self) {
        self.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NoticeKind;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingNotifier {
        calls: Mutex<Vec<String>>,
    }

    impl Notifier for CountingNotifier {
        fn show_toast(&self, _kind: NoticeKind, _title: &str, _message: &str) {}
        fn show_blocking(&self, message: &str) {
            self.calls.lock().unwrap().push(format!("show:{}", message));
        }
        fn dismiss(&self) {
            self.calls.lock().unwrap().push("dismiss".to_string());
        }
        fn alert(&self, _message: &str) {}
    }

    #[test]
    fn test_drop_dismisses() {
        let notifier = Arc::new(CountingNotifier::default());
        {
            let indicator = ProcessingIndicator::show(notifier.clone(), "Processing...");
            assert!(indicator.is_active());
        }
        assert_eq!(
            *notifier.calls.lock().unwrap(),
            vec!["show:Processing...", "dismiss"]
        );
    }

    #[test]
    fn test_explicit_dismiss_is_idempotent() {
        let notifier = Arc::new(CountingNotifier::default());
        let mut indicator = ProcessingIndicator::show(notifier.clone(), "Processing...");
        indicator.dismiss();
        indicator.dismiss();
        drop(indicator);
        assert_eq!(notifier.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_hand_off_keeps_indicator() {
        let notifier = Arc::new(CountingNotifier::default());
        let indicator = ProcessingIndicator::show(notifier.clone(), "Redirecting...");
        indicator.hand_off();
        assert_eq!(*notifier.calls.lock().unwrap(), vec!["show:Redirecting..."]);
    }
}
