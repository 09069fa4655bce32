//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage, ToastKind};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ShareResolved(outcome) => {
                let kind = if outcome.is_copied() {
                    ToastKind::Success
                } else {
                    ToastKind::Warning
                };
                self.show_toast(outcome.notification(), kind);
            }
            AppMessage::CounterFrame {
                counter,
                generation,
                value,
            } => {
                if !self.counters.apply_frame(counter, generation, value) {
                    debug!(?counter, generation, "Dropped stale counter frame");
                    return;
                }
                // Only dashboard screens show counters
                if self.screen.shows_dashboard() {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Drain every message already queued, without waiting.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut handled = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        self.message_rx = Some(rx);
        if handled > 0 {
            debug!(handled, "Drained queued messages");
        }
        handled
    }
}
