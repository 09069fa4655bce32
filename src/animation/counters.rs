//! Keyed bank of animated counters.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use super::task::AnimationTask;
use super::value::AnimatedValue;

/// Receives `(key, generation, displayed value)` for every frame. Returns
/// `false` once the receiver is gone.
pub type FrameSink<K> = Arc<dyn Fn(K, u64, f64) -> bool + Send + Sync>;

#[derive(Debug)]
struct Counter {
    displayed: f64,
    target: f64,
    duration: Duration,
    /// Bumped on every retarget; frames carry the value they were spawned with.
    generation: u64,
    task: Option<AnimationTask>,
}

/// A set of counters, each with at most one running [`AnimationTask`].
///
/// The bank records what is on screen through [`CounterBank::apply_frame`],
/// and every retarget starts from that value. Dropping the bank aborts all
/// running tasks.
pub struct CounterBank<K> {
    counters: HashMap<K, Counter>,
    frame_interval: Duration,
    sink: FrameSink<K>,
}

impl<K> CounterBank<K>
where
    K: Copy + Eq + Hash + Send + 'static,
{
    pub fn new(frame_interval: Duration, sink: FrameSink<K>) -> Self {
        Self {
            counters: HashMap::new(),
            frame_interval,
            sink,
        }
    }

    /// Register a settled counter.
    pub fn insert(&mut self, key: K, initial: f64, duration: Duration) {
        self.counters.insert(
            key,
            Counter {
                displayed: initial,
                target: initial,
                duration,
                generation: 0,
                task: None,
            },
        );
    }

    /// Animate `key` towards `target`, cancelling any animation in flight.
    ///
    /// Unknown keys are ignored. Must be called from within a tokio runtime.
    pub fn retarget(&mut self, key: K, target: f64) {
        let Some(counter) = self.counters.get_mut(&key) else {
            return;
        };

        if let Some(task) = counter.task.take() {
            task.cancel();
        }
        counter.generation = counter.generation.wrapping_add(1);
        counter.target = target;

        let mut value = AnimatedValue::new(counter.displayed, counter.duration);
        if !value.retarget(target, Instant::now()) {
            counter.displayed = target;
            return;
        }

        let sink = self.sink.clone();
        let generation = counter.generation;
        counter.task = Some(AnimationTask::spawn(
            value,
            self.frame_interval,
            move |shown| sink(key, generation, shown),
        ));
    }

    /// Record a frame that reached the screen.
    ///
    /// Frames from a cancelled task can still be queued in the channel after
    /// a retarget. Their generation no longer matches, so they are dropped.
    /// Returns whether the frame was applied.
    pub fn apply_frame(&mut self, key: K, generation: u64, value: f64) -> bool {
        let Some(counter) = self.counters.get_mut(&key) else {
            return false;
        };
        if counter.generation != generation {
            return false;
        }
        counter.displayed = value;
        if value == counter.target {
            counter.task = None;
        }
        true
    }

    /// Currently displayed value (0 for unknown keys).
    pub fn displayed(&self, key: K) -> f64 {
        self.counters.get(&key).map(|c| c.displayed).unwrap_or(0.0)
    }

    /// Displayed value rounded for presentation.
    pub fn displayed_rounded(&self, key: K) -> i64 {
        self.displayed(key).round() as i64
    }

    pub fn target(&self, key: K) -> Option<f64> {
        self.counters.get(&key).map(|c| c.target)
    }

    /// Whether any counter still has a task running.
    pub fn is_animating(&self) -> bool {
        self.counters
            .values()
            .any(|c| c.task.as_ref().is_some_and(|t| !t.is_finished()))
    }

    /// Abort every running animation, leaving displayed values where they are.
    pub fn cancel_all(&mut self) {
        for counter in self.counters.values_mut() {
            if let Some(task) = counter.task.take() {
                task.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Key {
        Points,
        Xp,
    }

    type Frames = mpsc::UnboundedReceiver<(Key, u64, f64)>;

    fn bank() -> (CounterBank<Key>, Frames) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink: FrameSink<Key> = Arc::new(move |k, g, v| tx.send((k, g, v)).is_ok());
        let mut bank = CounterBank::new(Duration::from_millis(16), sink);
        bank.insert(Key::Points, 420.0, Duration::from_millis(700));
        bank.insert(Key::Xp, 740.0, Duration::from_millis(900));
        (bank, rx)
    }

    fn drain(bank: &mut CounterBank<Key>, rx: &mut Frames) {
        while let Ok((k, g, v)) = rx.try_recv() {
            bank.apply_frame(k, g, v);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_retarget_animates_to_target() {
        let (mut bank, mut rx) = bank();
        bank.retarget(Key::Points, 430.0);
        assert!(bank.is_animating());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        drain(&mut bank, &mut rx);

        assert_eq!(bank.displayed(Key::Points), 430.0);
        assert_eq!(bank.displayed_rounded(Key::Points), 430);
        assert!(!bank.is_animating());
        // Untouched counter keeps its value
        assert_eq!(bank.displayed(Key::Xp), 740.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_small_retarget_snaps_without_task() {
        let (mut bank, _rx) = bank();
        bank.retarget(Key::Xp, 740.3);
        assert!(!bank.is_animating());
        assert_eq!(bank.displayed(Key::Xp), 740.3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retarget_mid_flight_starts_from_displayed() {
        let (mut bank, mut rx) = bank();
        bank.retarget(Key::Points, 520.0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        drain(&mut bank, &mut rx);
        let shown = bank.displayed(Key::Points);
        assert!(shown > 420.0 && shown < 520.0);

        bank.retarget(Key::Points, 500.0);
        tokio::time::sleep(Duration::from_millis(50)).await;
        drain(&mut bank, &mut rx);
        // Never jumps back below where it was shown
        assert!(bank.displayed(Key::Points) >= shown);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        drain(&mut bank, &mut rx);
        assert_eq!(bank.displayed(Key::Points), 500.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_frames() {
        let (mut bank, mut rx) = bank();
        bank.retarget(Key::Points, 1000.0);
        tokio::time::sleep(Duration::from_millis(100)).await;
        bank.cancel_all();
        tokio::task::yield_now().await;
        drain(&mut bank, &mut rx);
        let shown = bank.displayed(Key::Points);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(bank.displayed(Key::Points), shown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_frame_dropped_after_snapping_retarget() {
        let (mut bank, mut rx) = bank();
        bank.insert(Key::Points, 0.0, Duration::from_millis(700));
        bank.retarget(Key::Points, 100.0);

        tokio::time::sleep(Duration::from_millis(40)).await;
        let (k, g, v) = rx.try_recv().unwrap();
        assert!(bank.apply_frame(k, g, v));
        let shown = bank.displayed(Key::Points);

        // Within the snap threshold: no new task, value set directly
        bank.retarget(Key::Points, shown + 0.3);
        assert!(!bank.is_animating());

        // Frames the old task queued before it was cancelled
        let mut stale = 0;
        while let Ok((k, g, v)) = rx.try_recv() {
            assert!(!bank.apply_frame(k, g, v));
            stale += 1;
        }
        assert!(stale > 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        drain(&mut bank, &mut rx);
        assert_eq!(bank.displayed(Key::Points), shown + 0.3);
        assert_eq!(bank.target(Key::Points), Some(shown + 0.3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_ignored_mid_animation() {
        let (mut bank, mut rx) = bank();
        bank.retarget(Key::Xp, 900.0);
        tokio::time::sleep(Duration::from_millis(100)).await;
        let (k, old, v) = rx.try_recv().unwrap();

        bank.retarget(Key::Xp, 800.0);
        let before = bank.displayed(Key::Xp);
        assert!(!bank.apply_frame(k, old, v));
        assert_eq!(bank.displayed(Key::Xp), before);
        assert!(bank.is_animating());
    }

    #[tokio::test]
    async fn test_unknown_key_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel::<(Key, u64, f64)>();
        let sink: FrameSink<Key> = Arc::new(move |k, g, v| tx.send((k, g, v)).is_ok());
        let mut bank = CounterBank::new(Duration::from_millis(16), sink);
        bank.retarget(Key::Points, 10.0);
        assert_eq!(bank.displayed(Key::Points), 0.0);
        assert_eq!(bank.target(Key::Points), None);
        assert!(!bank.apply_frame(Key::Points, 0, 5.0));
    }
}
