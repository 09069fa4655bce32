//! Performance benchmarks for frame rendering
//!
//! Tests the per-frame work: easing samples, ring geometry and a full
//! screen draw at common terminal sizes.
//! Run with: cargo bench

use std::sync::Arc;
use std::time::Duration;

use carbon_tracker::adapters::MockClipboard;
use carbon_tracker::animation::{ease_out_cubic, AnimatedValue};
use carbon_tracker::app::{App, Screen};
use carbon_tracker::config::AppConfig;
use carbon_tracker::ui::{self, ProgressRing, RingGeometry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use tokio::time::Instant;

/// Benchmark the easing curve and a full frame sequence
fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");

    group.bench_function("ease_out_cubic_1000", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..1000 {
                sum += ease_out_cubic(black_box(i as f64 / 1000.0));
            }
            black_box(sum)
        });
    });

    group.bench_function("frames_900ms", |b| {
        let mut value = AnimatedValue::new(740.0, Duration::from_millis(900));
        value.retarget(750.0, Instant::now());
        b.iter(|| black_box(value.frames(Duration::from_millis(16)).count()));
    });

    group.finish();
}

/// Benchmark ring geometry and the braille widget
fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_ring");

    group.bench_function("geometry", |b| {
        b.iter(|| black_box(RingGeometry::for_size(140.0, 10.0, black_box(0.74))));
    });

    for (w, h) in [(22u16, 10u16), (40, 20)] {
        let area = Rect::new(0, 0, w, h);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", w, h)),
            &area,
            |b, area| {
                b.iter(|| {
                    let mut buf = Buffer::empty(*area);
                    ProgressRing::new(0.74).render(*area, &mut buf);
                    black_box(buf)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a full draw of each screen
fn bench_screen_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen_render");

    for (w, h) in [(80u16, 24u16), (160, 48)] {
        for screen in [Screen::Dashboard, Screen::Social, Screen::Leaderboard] {
            let mut app = App::new(AppConfig::default(), Arc::new(MockClipboard::new()));
            app.screen = screen;
            app.update_terminal_dimensions(w, h);
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();

            group.bench_function(format!("{:?}_{}x{}", screen, w, h), |b| {
                b.iter(|| {
                    terminal.draw(|f| ui::render(f, &app)).unwrap();
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_easing, bench_ring, bench_screen_render);
criterion_main!(benches);
