//! Time-interpolated numeric value.

use std::time::Duration;

use tokio::time::Instant;

use super::easing::ease_out_cubic;

/// Differences smaller than this snap straight to the target.
pub const SNAP_THRESHOLD: f64 = 0.5;

/// A number that eases from its displayed value towards a target.
///
/// Every retarget re-anchors on the value currently displayed, so rapid
/// retargeting never jumps backwards. No history is kept.
///
/// # Example
///
/// ```ignore
/// let mut points = AnimatedValue::new(420.0, Duration::from_millis(700));
/// points.retarget(430.0, Instant::now());
/// // ... each frame
/// let shown = points.advance(Instant::now());
/// ```
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    origin: f64,
    target: f64,
    current: f64,
    /// `None` once settled
    started_at: Option<Instant>,
    duration: Duration,
}

impl AnimatedValue {
    /// A settled value.
    pub fn new(initial: f64, duration: Duration) -> Self {
        Self {
            origin: initial,
            target: initial,
            current: initial,
            started_at: None,
            duration,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_settled(&self) -> bool {
        self.started_at.is_none()
    }

    /// Start easing towards `target` from whatever is displayed at `now`.
    ///
    /// Returns `true` if an animation was started, `false` if the change was
    /// below [`SNAP_THRESHOLD`] and the value snapped.
    pub fn retarget(&mut self, target: f64, now: Instant) -> bool {
        let from = self.advance(now);
        self.origin = from;
        self.target = target;

        if (target - from).abs() < SNAP_THRESHOLD || self.duration.is_zero() {
            self.current = target;
            self.started_at = None;
            return false;
        }

        self.current = from;
        self.started_at = Some(now);
        true
    }

    /// Interpolated value at `now`. Settles exactly on the target once the
    /// duration has elapsed.
    pub fn advance(&mut self, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return self.current;
        };

        let t = progress(now.saturating_duration_since(started_at), self.duration);
        if t >= 1.0 {
            self.current = self.target;
            self.started_at = None;
        } else {
            self.current = self.origin + (self.target - self.origin) * ease_out_cubic(t);
        }
        self.current
    }

    /// The frames of the current animation from its start, one per `interval`.
    ///
    /// Empty for a settled value. The final frame is always the exact target.
    pub fn frames(&self, interval: Duration) -> Frames {
        Frames {
            origin: self.origin,
            target: self.target,
            duration: self.duration,
            interval,
            elapsed: Duration::ZERO,
            done: self.is_settled(),
        }
    }
}

fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Lazy sequence of displayed values, see [`AnimatedValue::frames`].
#[derive(Debug, Clone)]
pub struct Frames {
    origin: f64,
    target: f64,
    duration: Duration,
    interval: Duration,
    elapsed: Duration,
    done: bool,
}

impl Iterator for Frames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }

        // A zero interval would never reach the end
        let step = self.interval.max(Duration::from_millis(1));
        self.elapsed += step;

        let t = progress(self.elapsed, self.duration);
        if t >= 1.0 {
            self.done = true;
            return Some(self.target);
        }
        Some(self.origin + (self.target - self.origin) * ease_out_cubic(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_700: Duration = Duration::from_millis(700);

    #[test]
    fn test_new_is_settled() {
        let v = AnimatedValue::new(5.0, MS_700);
        assert!(v.is_settled());
        assert_eq!(v.current(), 5.0);
        assert_eq!(v.frames(Duration::from_millis(16)).count(), 0);
    }

    #[test]
    fn test_reaches_target_exactly_after_duration() {
        let start = Instant::now();
        let mut v = AnimatedValue::new(420.0, MS_700);
        assert!(v.retarget(430.0, start));

        let mid = v.advance(start + Duration::from_millis(350));
        assert!(mid > 420.0 && mid < 430.0);

        assert_eq!(v.advance(start + MS_700), 430.0);
        assert!(v.is_settled());
        // No overshoot afterwards
        assert_eq!(v.advance(start + Duration::from_secs(5)), 430.0);
    }

    #[test]
    fn test_small_change_snaps() {
        let start = Instant::now();
        let mut v = AnimatedValue::new(10.0, MS_700);
        assert!(!v.retarget(10.4, start));
        assert_eq!(v.current(), 10.4);
        assert!(v.is_settled());
    }

    #[test]
    fn test_retarget_anchors_on_displayed_value() {
        let start = Instant::now();
        let mut v = AnimatedValue::new(0.0, MS_700);
        v.retarget(100.0, start);

        let at = start + Duration::from_millis(200);
        let shown = v.advance(at);
        v.retarget(50.0, at);

        assert_eq!(v.origin(), shown);
        assert_eq!(v.current(), shown);
        // Moving towards the new target from where it was
        let next = v.advance(at + Duration::from_millis(16));
        assert!((next - shown).abs() <= (50.0 - shown).abs());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut v = AnimatedValue::new(0.0, Duration::ZERO);
        assert!(!v.retarget(100.0, Instant::now()));
        assert_eq!(v.current(), 100.0);
    }

    #[test]
    fn test_frames_end_on_target() {
        let mut v = AnimatedValue::new(0.0, Duration::from_millis(100));
        v.retarget(10.0, Instant::now());
        let frames: Vec<f64> = v.frames(Duration::from_millis(16)).collect();

        // ceil(100 / 16)
        assert_eq!(frames.len(), 7);
        assert_eq!(*frames.last().unwrap(), 10.0);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }
}
