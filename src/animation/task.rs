//! Cancellable interpolation task.
//!
//! Drives an [`AnimatedValue`] on a frame-paced tokio interval and hands each
//! displayed value to a frame callback. The task ends on its own once the
//! value settles or the callback reports that nobody is listening. Cancelling
//! or dropping the handle aborts it, so a retargeted or unmounted counter
//! never leaves a recurring task behind.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::value::AnimatedValue;

/// Handle to a running interpolation.
#[derive(Debug)]
pub struct AnimationTask {
    handle: JoinHandle<()>,
}

impl AnimationTask {
    /// Spawn a task that emits frames until `value` settles.
    ///
    /// `on_frame` returns `false` to stop early (receiver gone).
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(mut value: AnimatedValue, frame_interval: Duration, mut on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(frame_interval.max(Duration::from_millis(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let shown = value.advance(Instant::now());
                if !on_frame(shown) || value.is_settled() {
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Stop emitting frames.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AnimationTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<f64>>>, impl FnMut(f64) -> bool + Send + 'static) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        (frames, move |v| {
            sink.lock().unwrap().push(v);
            true
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_target_then_finishes() {
        let mut value = AnimatedValue::new(0.0, Duration::from_millis(100));
        value.retarget(50.0, Instant::now());

        let (frames, sink) = recorder();
        let task = AnimationTask::spawn(value, Duration::from_millis(16), sink);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(task.is_finished());

        let frames = frames.lock().unwrap();
        assert!(!frames.is_empty());
        assert_eq!(*frames.last().unwrap(), 50.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_frames() {
        let mut value = AnimatedValue::new(0.0, Duration::from_millis(1000));
        value.retarget(100.0, Instant::now());

        let (frames, sink) = recorder();
        let task = AnimationTask::spawn(value, Duration::from_millis(16), sink);

        tokio::time::sleep(Duration::from_millis(100)).await;
        task.cancel();
        tokio::task::yield_now().await;
        let seen = frames.lock().unwrap().len();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(frames.lock().unwrap().len(), seen);
        assert!(frames.lock().unwrap().iter().all(|v| *v < 100.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_frames() {
        let mut value = AnimatedValue::new(0.0, Duration::from_millis(1000));
        value.retarget(100.0, Instant::now());

        let (frames, sink) = recorder();
        let task = AnimationTask::spawn(value, Duration::from_millis(16), sink);
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(task);
        tokio::task::yield_now().await;
        let seen = frames.lock().unwrap().len();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(frames.lock().unwrap().len(), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_gone() {
        let mut value = AnimatedValue::new(0.0, Duration::from_millis(1000));
        value.retarget(100.0, Instant::now());

        let task = AnimationTask::spawn(value, Duration::from_millis(16), |_| false);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(task.is_finished());
    }
}
