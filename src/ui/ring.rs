//! Circular progress ring.
//!
//! [`RingGeometry`] is the pure arc description (circumference and dash
//! offset for a stroked circle). [`ProgressRing`] draws it on a braille
//! canvas, starting at 12 o'clock and running clockwise, with the percentage
//! in the middle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Paragraph, Widget,
    },
};

use super::theme::{COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS, COLOR_PROGRESS_ALT, COLOR_PROGRESS_BG};

/// Default ring size and stroke, in the units of the dashboard design.
pub const DEFAULT_SIZE: f64 = 140.0;
pub const DEFAULT_STROKE: f64 = 10.0;

const CAPTION: &str = "to next level";

/// Arc geometry for a stroked circle showing `progress`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Clamped to `[0, 1]`; NaN becomes 0
    pub progress: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    /// Length of the unfilled part of the stroke
    pub dash_offset: f64,
}

impl RingGeometry {
    pub fn new(progress: f64, radius: f64, stroke_width: f64) -> Self {
        let progress = clamp_progress(progress);
        let circumference = TAU * radius;
        Self {
            progress,
            radius,
            stroke_width,
            circumference,
            dash_offset: circumference * (1.0 - progress),
        }
    }

    /// Ring that fits a `size` square: the stroke stays inside the box.
    pub fn for_size(size: f64, stroke_width: f64, progress: f64) -> Self {
        Self::new(progress, ((size - stroke_width) / 2.0).max(0.0), stroke_width)
    }

    /// Fraction of the circumference that is drawn.
    pub fn filled_fraction(&self) -> f64 {
        if self.circumference > 0.0 {
            1.0 - self.dash_offset / self.circumference
        } else {
            self.progress
        }
    }

    /// Rounded percentage, e.g. "74%".
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.progress * 100.0).round() as u32)
    }

    /// Point on the unit circle `fraction` of the way round, clockwise from
    /// the top, with y pointing up.
    pub fn point_at(fraction: f64) -> (f64, f64) {
        let angle = FRAC_PI_2 - TAU * fraction;
        (angle.cos(), angle.sin())
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Ring widget for the dashboard.
#[derive(Debug, Clone)]
pub struct ProgressRing {
    geometry: RingGeometry,
    track_color: Color,
    fill_color: Color,
    end_color: Color,
}

impl ProgressRing {
    pub fn new(progress: f64) -> Self {
        Self {
            geometry: RingGeometry::for_size(DEFAULT_SIZE, DEFAULT_STROKE, progress),
            track_color: COLOR_PROGRESS_BG,
            fill_color: COLOR_PROGRESS,
            end_color: COLOR_PROGRESS_ALT,
        }
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// Sample points along the stroke, split into (track, filled-start,
    /// filled-end) so the fill can fade between two colours.
    fn stroke_points(&self, samples: usize) -> (Vec<(f64, f64)>, Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let g = &self.geometry;
        let outer = g.radius + g.stroke_width / 2.0;
        let filled = g.filled_fraction();

        // Normalised radii across the stroke width
        let bands = 3;
        let mut track = Vec::new();
        let mut head = Vec::new();
        let mut tail = Vec::new();
        for band in 0..bands {
            let r = (g.radius - g.stroke_width / 2.0
                + g.stroke_width * band as f64 / (bands - 1) as f64)
                / outer;
            for i in 0..samples {
                let fraction = i as f64 / samples as f64;
                let (x, y) = RingGeometry::point_at(fraction);
                let point = (x * r, y * r);
                if fraction < filled {
                    if fraction < filled / 2.0 {
                        head.push(point);
                    } else {
                        tail.push(point);
                    }
                } else {
                    track.push(point);
                }
            }
        }
        (track, head, tail)
    }
}

impl Widget for ProgressRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        // Terminal cells are about twice as tall as wide
        let half_width = area.width as f64 / (2.0 * area.height as f64);
        let samples = ((area.width.max(area.height) as f64) * PI * 2.0) as usize;
        let (track, head, tail) = self.stroke_points(samples.max(32));

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: self.track_color,
                });
                ctx.draw(&Points {
                    coords: &head,
                    color: self.fill_color,
                });
                ctx.draw(&Points {
                    coords: &tail,
                    color: self.end_color,
                });
            })
            .render(area, buf);

        let mid = area.y + area.height / 2;
        let label_width = area.width.saturating_sub(4).max(1);
        let label_area = Rect::new(area.x + (area.width - label_width) / 2, mid, label_width, 1);
        Paragraph::new(Line::from(Span::styled(
            self.geometry.percent_label(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(label_area, buf);

        if area.height >= 7 && mid + 1 < area.bottom() {
            let caption_area = Rect::new(label_area.x, mid + 1, label_width, 1);
            Paragraph::new(Line::from(Span::styled(
                CAPTION,
                Style::default().fg(COLOR_DIM),
            )))
            .alignment(Alignment::Center)
            .render(caption_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_ring_offset_is_full_circumference() {
        let g = RingGeometry::new(0.0, 65.0, 10.0);
        assert!(approx(g.circumference, TAU * 65.0));
        assert!(approx(g.dash_offset, g.circumference));
        assert_eq!(g.percent_label(), "0%");
    }

    #[test]
    fn test_full_ring_offset_is_zero() {
        let g = RingGeometry::new(1.0, 65.0, 10.0);
        assert!(approx(g.dash_offset, 0.0));
        assert!(approx(g.filled_fraction(), 1.0));
        assert_eq!(g.percent_label(), "100%");
    }

    #[test]
    fn test_over_range_clamps_to_full() {
        assert_eq!(
            RingGeometry::new(1.5, 65.0, 10.0),
            RingGeometry::new(1.0, 65.0, 10.0)
        );
        assert_eq!(
            RingGeometry::new(-0.3, 65.0, 10.0),
            RingGeometry::new(0.0, 65.0, 10.0)
        );
        assert_eq!(RingGeometry::new(f64::NAN, 65.0, 10.0).progress, 0.0);
    }

    #[test]
    fn test_for_size_keeps_stroke_inside() {
        let g = RingGeometry::for_size(140.0, 10.0, 0.74);
        assert!(approx(g.radius, 65.0));
        assert!(approx(g.filled_fraction(), 0.74));
        assert_eq!(g.percent_label(), "74%");
    }

    #[test]
    fn test_zero_radius_ring() {
        let g = RingGeometry::for_size(4.0, 10.0, 0.5);
        assert_eq!(g.radius, 0.0);
        assert_eq!(g.circumference, 0.0);
        assert!(approx(g.filled_fraction(), 0.5));
    }

    #[test]
    fn test_arc_starts_at_top_and_runs_clockwise() {
        let (x, y) = RingGeometry::point_at(0.0);
        assert!(approx(x, 0.0) && approx(y, 1.0));
        // A quarter of the way round is 3 o'clock
        let (x, y) = RingGeometry::point_at(0.25);
        assert!(approx(x, 1.0) && approx(y, 0.0));
    }

    #[test]
    fn test_stroke_points_split_by_progress() {
        let ring = ProgressRing::new(0.25);
        let (track, head, tail) = ring.stroke_points(100);
        assert_eq!(head.len() + tail.len(), 3 * 25);
        assert_eq!(track.len(), 3 * 75);
    }

    #[test]
    fn test_render_shows_percent() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        ProgressRing::new(0.74).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("74%"));
        assert!(text.contains("to next level"));
    }
}
