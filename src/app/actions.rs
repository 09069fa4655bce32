//! User actions: feed mutations, sharing, bonus and activity logging.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::activity;
use crate::error::{AppError, ErrorCategory};
use crate::state::ProgressChange;

use super::{App, AppMessage, InputMode, ToastKind};

impl App {
    /// Route an error to the UI reaction its category calls for.
    pub fn report(&mut self, err: AppError) {
        let category = err.category();
        if category.is_silent() {
            debug!(code = err.error_code(), error = %err, "Ignoring action on missing item");
            return;
        }
        match category {
            ErrorCategory::InvalidInput => {
                self.input_hint = Some(err.user_message());
                self.mark_dirty();
            }
            _ => {
                warn!(
                    code = err.error_code(),
                    recoverable = category.is_recoverable(),
                    error = %err,
                    "Action failed"
                );
                self.show_toast(err.user_message(), ToastKind::Warning);
            }
        }
    }

    pub fn toggle_like_selected(&mut self) {
        let Some(id) = self.selected_post_id() else {
            return;
        };
        match self.feed.toggle_like(&id) {
            Ok(_) => self.mark_dirty(),
            Err(e) => self.report(e.into()),
        }
    }

    pub fn toggle_save_selected(&mut self) {
        let Some(id) = self.selected_post_id() else {
            return;
        };
        match self.feed.toggle_save(&id) {
            Ok(true) => self.show_toast("Saved", ToastKind::Success),
            Ok(false) => self.show_toast("Removed", ToastKind::Info),
            Err(e) => self.report(e.into()),
        }
    }

    /// Post the composer text as a comment on the selected post.
    ///
    /// Blank text keeps the composer open with a hint.
    pub fn submit_comment(&mut self) {
        let Some(id) = self.selected_post_id() else {
            return;
        };
        match self.feed.add_comment(&id, &self.composer) {
            Ok(_) => {
                self.input_mode = InputMode::Normal;
                self.composer.clear();
                self.input_hint = None;
                self.show_toast("Comment posted", ToastKind::Success);
            }
            Err(e) => self.report(e.into()),
        }
    }

    /// Copy the selected post's link in a background task.
    ///
    /// The outcome comes back as [`AppMessage::ShareResolved`].
    pub fn share_selected(&mut self) {
        let Some(id) = self.selected_post_id() else {
            return;
        };
        let request = self.feed.share_target(&id);
        let clipboard = Arc::clone(&self.clipboard);
        let timeout = self.config.share_timeout;
        let tx = self.message_sender();

        tokio::spawn(async move {
            let outcome = request.deliver(clipboard.as_ref(), timeout).await;
            if let Err(e) = tx.send(AppMessage::ShareResolved(outcome)) {
                debug!(outcome = ?e.0, "App gone, share outcome dropped");
            }
        });
    }

    pub fn claim_daily_bonus(&mut self) {
        match self.progress.claim_daily_bonus() {
            Some(change) => {
                self.sync_counters();
                let message =
                    self.progress_message(format!("+{} XP daily bonus", change.xp_gained), &change);
                self.show_toast(message, ToastKind::Success);
            }
            None => self.show_toast("Daily bonus already claimed", ToastKind::Info),
        }
    }

    /// Estimate the composer text and credit it to progress.
    pub fn submit_activity(&mut self) {
        let estimate = match activity::estimate(&self.composer) {
            Ok(estimate) => estimate,
            Err(e) => {
                self.report(e.into());
                return;
            }
        };

        let change = self.progress.record_activity(&estimate);
        info!(
            category = estimate.category.as_str(),
            co2_kg = estimate.co2_kg,
            xp = change.xp_gained,
            "Activity logged"
        );
        self.input_mode = InputMode::Normal;
        self.composer.clear();
        self.input_hint = None;
        self.sync_counters();
        let message = self.progress_message(
            format!("{} (+{} XP)", estimate.message, change.xp_gained),
            &change,
        );
        self.show_toast(message, ToastKind::Success);
    }

    /// Toast text for a progress change, with a level-up note when one happened.
    fn progress_message(&self, base: String, change: &ProgressChange) -> String {
        if change.levels_gained > 0 {
            format!("{} · Level {}!", base, self.progress.stats().level)
        } else {
            base
        }
    }
}
