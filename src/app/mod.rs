//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`InputMode`] - Where typed characters go
//! - [`CounterKind`] - Animated dashboard counters
//! - [`AppMessage`] - Messages for async communication

mod actions;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod toast;
mod types;

pub use messages::AppMessage;
pub use toast::{Toast, ToastKind};
pub use types::{CounterKind, InputMode, Screen};

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::animation::{CounterBank, FrameSink};
use crate::carousel::Carousel;
use crate::config::AppConfig;
use crate::models::{Leaderboard, UserProfile};
use crate::state::{seed, FeedStore, ProgressState};
use crate::traits::ClipboardSink;

/// Slides on the About page.
pub const ABOUT_SLIDES: usize = 3;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    pub sidebar_collapsed: bool,
    pub feed: FeedStore,
    pub progress: ProgressState,
    pub leaderboard: Leaderboard,
    pub profile: UserProfile,
    pub carousel: Carousel,
    /// Displayed values for the dashboard counters
    pub counters: CounterBank<CounterKind>,
    /// Index of the highlighted post on the Social screen
    pub selected_post: usize,
    /// Whether the comment thread of the selected post is expanded
    pub comments_open: bool,
    pub input_mode: InputMode,
    /// Text being typed in the comment or activity composer
    pub composer: String,
    /// Inline validation message under the composer
    pub input_hint: Option<String>,
    pub toast: Option<Toast>,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
    /// Terminal dimensions, updated on resize
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub config: AppConfig,
    clipboard: Arc<dyn ClipboardSink>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app with the built-in dataset.
    pub fn new(config: AppConfig, clipboard: Arc<dyn ClipboardSink>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let feed = FeedStore::seeded().with_share_fallback(config.share_fallback_url.clone());
        let progress = ProgressState::seeded();
        let counters = Self::build_counters(&config, &progress, message_tx.clone());

        Self {
            should_quit: false,
            screen: Screen::default(),
            sidebar_collapsed: false,
            feed,
            progress,
            leaderboard: seed::leaderboard(),
            profile: seed::profile(),
            carousel: Carousel::new(ABOUT_SLIDES, 0),
            counters,
            selected_post: 0,
            comments_open: false,
            input_mode: InputMode::Normal,
            composer: String::new(),
            input_hint: None,
            toast: None,
            tick_count: 0,
            needs_redraw: true,
            terminal_width: 0,
            terminal_height: 0,
            config,
            clipboard,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    fn build_counters(
        config: &AppConfig,
        progress: &ProgressState,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> CounterBank<CounterKind> {
        let sink: FrameSink<CounterKind> = Arc::new(move |counter, generation, value| {
            tx.send(AppMessage::CounterFrame {
                counter,
                generation,
                value,
            })
            .is_ok()
        });
        let mut counters = CounterBank::new(config.frame_interval, sink);
        let durations = config.animations;
        for kind in CounterKind::ALL {
            let duration = match kind {
                CounterKind::Points => durations.points,
                CounterKind::Xp => durations.xp,
                CounterKind::Carbon => durations.carbon,
                CounterKind::Streak => durations.streak,
            };
            counters.insert(kind, counter_target(progress, kind), duration);
        }
        counters
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark that the UI needs to be redrawn
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Re-target every dashboard counter at the current progress values.
    /// Counters already at their value are left alone.
    pub fn sync_counters(&mut self) {
        for kind in CounterKind::ALL {
            let target = counter_target(&self.progress, kind);
            if self.counters.target(kind) != Some(target) {
                self.counters.retarget(kind, target);
            }
        }
    }

    /// Displayed counter value, rounded the way it is shown.
    pub fn counter_display(&self, kind: CounterKind) -> i64 {
        self.counters.displayed_rounded(kind)
    }

    /// Carbon saved as displayed, in kg with one decimal.
    pub fn carbon_display(&self) -> f64 {
        self.counter_display(CounterKind::Carbon) as f64 / 10.0
    }

    /// Post highlighted on the Social screen.
    pub fn selected_post_id(&self) -> Option<String> {
        self.feed
            .posts()
            .get(self.selected_post)
            .map(|p| p.id.clone())
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast::new(
            message,
            kind,
            Instant::now(),
            self.config.toast_duration,
        ));
        self.mark_dirty();
    }

    /// Advance the tick counter and expire the toast.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(Instant::now()))
        {
            self.toast = None;
            self.mark_dirty();
        }
        if self.counters.is_animating() {
            self.mark_dirty();
        }
    }

    /// Update app state with new terminal dimensions
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.carousel
            .resize(crate::ui::layout::content_width(width, self.sidebar_collapsed));
        self.mark_dirty();
    }

    /// Stop background work before exit.
    pub fn shutdown(&mut self) {
        self.counters.cancel_all();
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Counter target for the current progress. Carbon is in tenths of a kg.
fn counter_target(progress: &ProgressState, kind: CounterKind) -> f64 {
    let stats = progress.stats();
    match kind {
        CounterKind::Points => stats.points as f64,
        CounterKind::Xp => stats.xp as f64,
        CounterKind::Carbon => (stats.carbon_saved_kg * 10.0).round(),
        CounterKind::Streak => stats.streak_days as f64,
    }
}
