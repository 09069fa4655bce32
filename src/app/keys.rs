//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, InputMode, Screen};

impl App {
    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Comment | InputMode::Activity => self.handle_composer_key(key),
        }
    }

    fn handle_composer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_input(),
            KeyCode::Enter => match self.input_mode {
                InputMode::Comment => self.submit_comment(),
                InputMode::Activity => self.submit_activity(),
                InputMode::Normal => {}
            },
            KeyCode::Backspace => {
                self.composer.pop();
                self.input_hint = None;
                self.mark_dirty();
            }
            KeyCode::Char(c) => {
                self.composer.push(c);
                self.input_hint = None;
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        // Global keybinds
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.next_screen();
                return;
            }
            KeyCode::BackTab => {
                self.prev_screen();
                return;
            }
            KeyCode::Char('[') => {
                self.toggle_sidebar();
                return;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(screen) = c.to_digit(10).and_then(Screen::from_number) {
                    self.navigate_to(screen);
                }
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Dashboard | Screen::Today => match key.code {
                KeyCode::Char('b') => self.claim_daily_bonus(),
                KeyCode::Char('a') | KeyCode::Enter => self.start_activity(),
                _ => {}
            },
            Screen::Social => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.select_prev_post(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next_post(),
                KeyCode::Char('l') => self.toggle_like_selected(),
                KeyCode::Char('s') => self.toggle_save_selected(),
                KeyCode::Char('y') => self.share_selected(),
                KeyCode::Char('c') => self.toggle_comments(),
                KeyCode::Char('i') | KeyCode::Enter => self.start_comment(),
                _ => {}
            },
            Screen::About => match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.carousel_prev(),
                KeyCode::Right | KeyCode::Char('l') => self.carousel_next(),
                KeyCode::Home => self.carousel_select(0),
                KeyCode::End => {
                    let last = self.carousel.slide_count().saturating_sub(1);
                    self.carousel_select(last);
                }
                _ => {}
            },
            Screen::Leaderboard | Screen::Profile => {}
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

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_even_while_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Activity);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_switch_screens() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.screen, Screen::Social);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.screen, Screen::Social);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Profile);
    }

    #[test]
    fn test_comment_flow_via_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('i'));
        // 'q' is text while typing, not quit
        type_text(&mut app, "qNice!x");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        let post = app.feed.get("p2").unwrap();
        assert_eq!(post.comments.last().unwrap().text, "qNice!");
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "draft");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.feed.get("p1").unwrap().comment_count(), 2);
    }

    #[test]
    fn test_social_like_and_save_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('s'));
        let post = app.feed.get("p1").unwrap();
        assert!(post.liked);
        assert!(post.saved);
    }

    #[test]
    fn test_about_carousel_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.carousel.current(), 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.carousel.current(), 2);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.carousel.current(), 2);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.carousel.current(), 0);
    }
}
