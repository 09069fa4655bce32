//! Rendering tests against ratatui's `TestBackend`.
//!
//! These check what a user would see: the right screen, the interaction
//! state reflected in the text, and no panics on small terminals.

use std::sync::Arc;

use carbon_tracker::adapters::MockClipboard;
use carbon_tracker::app::{App, Screen};
use carbon_tracker::config::AppConfig;
use carbon_tracker::ui;
use ratatui::{backend::TestBackend, Terminal};

fn create_app(width: u16, height: u16) -> App {
    let mut app = App::new(AppConfig::default(), Arc::new(MockClipboard::new()));
    app.update_terminal_dimensions(width, height);
    app
}

fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_dashboard_shows_level_and_counters() {
    let app = create_app(140, 45);
    let text = render(&app, 140, 45);
    assert!(text.contains("Your Level"));
    assert!(text.contains("420"));
    assert!(text.contains("740 / 1000"));
    assert!(text.contains("4.6 kg"));
    assert!(text.contains("Active Missions"));
}

#[test]
fn test_social_shows_authors_and_counts() {
    let mut app = create_app(140, 45);
    app.screen = Screen::Social;
    let text = render(&app, 140, 45);
    assert!(text.contains("Aditi"));
    assert!(text.contains("♡ 42"));
}

#[test]
fn test_liked_and_saved_post_render_markers() {
    let mut app = create_app(140, 45);
    app.screen = Screen::Social;
    app.feed.toggle_like("p1").unwrap();
    app.feed.toggle_save("p1").unwrap();
    let text = render(&app, 140, 45);
    assert!(text.contains("♥ 43"));
    assert!(text.contains("Saved"));
}

#[test]
fn test_open_comments_list_thread() {
    let mut app = create_app(140, 45);
    app.screen = Screen::Social;
    app.comments_open = true;
    let text = render(&app, 140, 45);
    assert!(text.contains("Comments on Aditi's post"));
    assert!(text.contains("Rahul:"));
}

#[test]
fn test_leaderboard_lists_players() {
    let mut app = create_app(140, 45);
    app.screen = Screen::Leaderboard;
    let text = render(&app, 140, 45);
    for player in app.leaderboard.players() {
        assert!(text.contains(&player.name), "{} missing", player.name);
    }
}

#[test]
fn test_profile_shows_identity() {
    let mut app = create_app(140, 45);
    app.screen = Screen::Profile;
    let text = render(&app, 140, 45);
    assert!(text.contains(&app.profile.name));
    assert!(text.contains(&format!("Level {}", app.profile.level)));
}

#[test]
fn test_about_shows_current_slide() {
    let mut app = create_app(140, 45);
    app.screen = Screen::About;
    app.carousel_next();
    let text = render(&app, 140, 45);
    assert!(text.contains(ui::SLIDES[1].0));
    assert!(text.contains("Carbon Tracker"));
}

#[test]
fn test_narrow_terminal_renders_every_screen() {
    for screen in Screen::ALL {
        let mut app = create_app(60, 20);
        app.screen = screen;
        let text = render(&app, 60, 20);
        assert!(text.chars().any(|c| !c.is_whitespace()));
    }
}
