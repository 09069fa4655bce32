//! Slide carousel for the About page.
//!
//! A position over a fixed number of slides with prev/next arrows, dot
//! selection, and a horizontal offset that follows the viewport width.

/// Carousel position state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    slide_width: u16,
}

impl Carousel {
    pub fn new(slide_count: usize, slide_width: u16) -> Self {
        Self {
            slide_count,
            current: 0,
            slide_width,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn slide_width(&self) -> u16 {
        self.slide_width
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.slide_count > 0 && self.current < self.slide_count - 1
    }

    /// Advance one slide. Returns `false` at the last slide.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one slide. Returns `false` at the first slide.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to a slide by dot index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            return false;
        }
        self.current = index;
        true
    }

    /// Recompute slide width after the viewport changed.
    pub fn resize(&mut self, slide_width: u16) {
        self.slide_width = slide_width;
    }

    /// Horizontal offset of the track, in columns.
    pub fn offset(&self) -> u32 {
        self.slide_width as u32 * self.current as u32
    }

    /// Active flag for each dot indicator.
    pub fn dots(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == self.current).collect()
    }
}
