//! Navigation methods for the App.

use super::{App, InputMode, Screen};

impl App {
    /// Switch screens, leaving any composer behind
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        self.cancel_input();
        self.comments_open = false;
        self.mark_dirty();
    }

    pub fn next_screen(&mut self) {
        self.navigate_to(self.screen.next());
    }

    pub fn prev_screen(&mut self) {
        self.navigate_to(self.screen.prev());
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        let (width, height) = (self.terminal_width, self.terminal_height);
        self.update_terminal_dimensions(width, height);
    }

    /// Move selection up in the post list
    pub fn select_prev_post(&mut self) {
        if self.selected_post > 0 {
            self.selected_post -= 1;
            self.comments_open = false;
            self.mark_dirty();
        }
    }

    /// Move selection down in the post list
    pub fn select_next_post(&mut self) {
        let len = self.feed.len();
        if len > 0 && self.selected_post < len - 1 {
            self.selected_post += 1;
            self.comments_open = false;
            self.mark_dirty();
        }
    }

    /// Expand or collapse comments on the selected post
    pub fn toggle_comments(&mut self) {
        self.comments_open = !self.comments_open;
        if !self.comments_open && self.input_mode == InputMode::Comment {
            self.cancel_input();
        }
        self.mark_dirty();
    }

    /// Open the comment composer on the selected post
    pub fn start_comment(&mut self) {
        if self.feed.is_empty() {
            return;
        }
        self.comments_open = true;
        self.begin_input(InputMode::Comment);
    }

    /// Open the activity composer on the dashboard
    pub fn start_activity(&mut self) {
        self.begin_input(InputMode::Activity);
    }

    fn begin_input(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.composer.clear();
        self.input_hint = None;
        self.mark_dirty();
    }

    /// Leave the composer and discard its text
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.composer.clear();
        self.input_hint = None;
        self.mark_dirty();
    }

    pub fn carousel_next(&mut self) {
        if self.carousel.next() {
            self.mark_dirty();
        }
    }

    pub fn carousel_prev(&mut self) {
        if self.carousel.prev() {
            self.mark_dirty();
        }
    }

    pub fn carousel_select(&mut self, index: usize) {
        if self.carousel.select(index) {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockClipboard;
    use crate::config::AppConfig;
    use std::sync::Arc;

    fn app() -> App {
        App::new(AppConfig::default(), Arc::new(MockClipboard::new()))
    }

    #[test]
    fn test_navigate_resets_composer() {
        let mut app = app();
        app.navigate_to(Screen::Social);
        app.start_comment();
        app.composer.push_str("draft");
        app.navigate_to(Screen::Profile);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.composer.is_empty());
        assert!(!app.comments_open);
    }

    #[test]
    fn test_post_selection_is_clamped() {
        let mut app = app();
        app.select_prev_post();
        assert_eq!(app.selected_post, 0);
        for _ in 0..10 {
            app.select_next_post();
        }
        assert_eq!(app.selected_post, app.feed.len() - 1);
    }

    #[test]
    fn test_collapsing_comments_cancels_comment_input() {
        let mut app = app();
        app.start_comment();
        assert!(app.comments_open);
        app.toggle_comments();
        assert!(!app.comments_open);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_sidebar_toggle_widens_carousel() {
        let mut app = app();
        app.update_terminal_dimensions(100, 30);
        let narrow = app.carousel.slide_width();
        app.toggle_sidebar();
        assert!(app.carousel.slide_width() > narrow);
    }
}
