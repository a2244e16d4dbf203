//! Play/pause frame scheduling.

use core::num::NonZeroU32;

/// Host frame-scheduling seam.
///
/// [`FrameScheduler::schedule`] requests exactly one future invocation of
/// the frame routine and returns a cancellation handle;
/// [`FrameScheduler::cancel`] revokes a pending one. The web frontend
/// binds this to `requestAnimationFrame` / `cancelAnimationFrame`.
pub trait FrameScheduler {
    /// Opaque handle to one pending frame callback.
    type Handle;

    /// Request one invocation of the frame routine.
    fn schedule(&mut self) -> Self::Handle;

    /// Revoke a pending invocation.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Two-state (playing/paused) animation scheduler.
///
/// Holds at most one pending frame handle, so overlapping scheduled frames
/// are impossible. Paused is exactly "no handle held". The controller
/// starts paused; the embedding view schedules the first frame right after
/// the initial paint.
pub struct AnimationController<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    steps_per_frame: NonZeroU32,
}

impl<S: FrameScheduler> AnimationController<S> {
    /// Create a paused controller advancing one step per frame.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            steps_per_frame: NonZeroU32::MIN,
        }
    }

    /// True iff no scheduled-frame handle is held.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pending.is_none()
    }

    /// Start the loop: any held handle is cancelled, then one frame is
    /// scheduled immediately.
    pub fn play(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.pending = Some(self.scheduler.schedule());
        #[cfg(feature = "tracing")]
        tracing::debug!("animation playing");
    }

    /// Stop the loop. Safe to call while already paused; a pending frame,
    /// if any, is cancelled exactly once.
    pub fn pause(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
            #[cfg(feature = "tracing")]
            tracing::debug!("animation paused");
        }
    }

    /// Engine generations advanced per frame. The frame routine reads this
    /// fresh on every tick.
    #[must_use]
    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame.get()
    }

    /// Update steps-per-frame. Zero is a UI-boundary value and clamps to 1.
    pub fn set_steps_per_frame(&mut self, steps: u32) {
        self.steps_per_frame = NonZeroU32::new(steps).unwrap_or(NonZeroU32::MIN);
    }

    /// Reschedule after a frame fired. The handle for the tick that just
    /// ran is spent by the host scheduler, so it is overwritten rather
    /// than cancelled.
    pub(crate) fn reschedule(&mut self) {
        self.pending = Some(self.scheduler.schedule());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counting fake: panics on cancelling anything not currently pending,
    /// which catches double-cancellation.
    #[derive(Default)]
    struct FakeScheduler {
        next: u32,
        pending: Vec<u32>,
        cancels: u32,
    }

    impl FrameScheduler for FakeScheduler {
        type Handle = u32;

        fn schedule(&mut self) -> u32 {
            self.next += 1;
            self.pending.push(self.next);
            self.next
        }

        fn cancel(&mut self, handle: u32) {
            let pos = self
                .pending
                .iter()
                .position(|&h| h == handle)
                .expect("cancelled a handle that was not pending");
            self.pending.remove(pos);
            self.cancels += 1;
        }
    }

    #[test]
    fn starts_paused_with_one_step_per_frame() {
        let controller = AnimationController::new(FakeScheduler::default());
        assert!(controller.is_paused());
        assert_eq!(controller.steps_per_frame(), 1);
    }

    #[test]
    fn play_schedules_exactly_one_frame() {
        let mut controller = AnimationController::new(FakeScheduler::default());
        controller.play();
        assert!(!controller.is_paused());
        assert_eq!(controller.scheduler.pending.len(), 1);
    }

    #[test]
    fn pause_cancels_the_pending_frame() {
        let mut controller = AnimationController::new(FakeScheduler::default());
        controller.play();
        controller.pause();
        assert!(controller.is_paused());
        assert!(controller.scheduler.pending.is_empty());
        assert_eq!(controller.scheduler.cancels, 1);
    }

    #[test]
    fn pause_twice_is_a_noop_the_second_time() {
        let mut controller = AnimationController::new(FakeScheduler::default());
        controller.play();
        controller.pause();
        controller.pause();
        assert!(controller.is_paused());
        assert_eq!(controller.scheduler.cancels, 1);
    }

    #[test]
    fn play_pause_play_leaves_one_pending_frame() {
        let mut controller = AnimationController::new(FakeScheduler::default());
        controller.play();
        controller.pause();
        controller.play();
        assert_eq!(controller.scheduler.pending.len(), 1);
    }

    #[test]
    fn play_while_playing_replaces_the_pending_frame() {
        let mut controller = AnimationController::new(FakeScheduler::default());
        controller.play();
        controller.play();
        assert_eq!(controller.scheduler.pending.len(), 1);
        assert_eq!(controller.scheduler.cancels, 1);
    }

    #[test]
    fn zero_steps_clamps_to_one() {
        let mut controller = AnimationController::new(FakeScheduler::default());
        controller.set_steps_per_frame(0);
        assert_eq!(controller.steps_per_frame(), 1);
        controller.set_steps_per_frame(9);
        assert_eq!(controller.steps_per_frame(), 9);
    }
}
