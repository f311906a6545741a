//! Frame scheduling bookkeeping
//!
//! The browser hands out integer handles for `requestAnimationFrame` and
//! `setTimeout`. `FrameLoop` remembers the outstanding ones so the loop never
//! has two frames in flight and a reset can cancel whatever is pending before
//! starting over.

/// Outstanding animation frame and reset timer handles
#[derive(Debug, Default)]
pub struct FrameLoop {
    frame: Option<i32>,
    reset: Option<i32>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_pending(&self) -> bool {
        self.frame.is_some()
    }

    pub fn reset_pending(&self) -> bool {
        self.reset.is_some()
    }

    /// Request a frame through `request` unless one is already outstanding.
    ///
    /// `request` returns the host handle, or `None` if scheduling failed.
    /// Returns true if a new frame was requested.
    pub fn request_frame(&mut self, request: impl FnOnce() -> Option<i32>) -> bool {
        if self.frame.is_some() {
            log::debug!("Frame already pending, not requesting another");
            return false;
        }
        self.frame = request();
        self.frame.is_some()
    }

    /// The outstanding frame callback is running
    pub fn frame_fired(&mut self) {
        self.frame = None;
    }

    /// Arm the delayed reset unless one is already armed
    pub fn arm_reset(&mut self, schedule: impl FnOnce() -> Option<i32>) -> bool {
        if self.reset.is_some() {
            return false;
        }
        self.reset = schedule();
        self.reset.is_some()
    }

    /// The reset timer callback is running
    pub fn reset_fired(&mut self) {
        self.reset = None;
    }

    /// Forget both handles, returning them so the caller can cancel them
    /// with the host (frame handle first, then reset handle).
    pub fn cancel_all(&mut self) -> (Option<i32>, Option<i32>) {
        (self.frame.take(), self.reset.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_frame_in_flight() {
        let mut frames = FrameLoop::new();
        let mut next_id = 0;
        let mut request = || {
            next_id += 1;
            Some(next_id)
        };

        assert!(frames.request_frame(&mut request));
        assert!(!frames.request_frame(&mut request));
        assert!(frames.frame_pending());

        frames.frame_fired();
        assert!(!frames.frame_pending());
        assert!(frames.request_frame(&mut request));
        assert_eq!(next_id, 2);
    }

    #[test]
    fn test_failed_request_leaves_nothing_pending() {
        let mut frames = FrameLoop::new();
        assert!(!frames.request_frame(|| None));
        assert!(!frames.frame_pending());
    }

    #[test]
    fn test_cancel_all_returns_handles() {
        let mut frames = FrameLoop::new();
        frames.request_frame(|| Some(11));
        frames.arm_reset(|| Some(22));
        assert!(!frames.arm_reset(|| Some(33)));

        assert_eq!(frames.cancel_all(), (Some(11), Some(22)));
        assert!(!frames.frame_pending());
        assert!(!frames.reset_pending());
        assert_eq!(frames.cancel_all(), (None, None));
    }

    #[test]
    fn test_reset_fired_allows_rearm() {
        let mut frames = FrameLoop::new();
        assert!(frames.arm_reset(|| Some(1)));
        frames.reset_fired();
        assert!(frames.arm_reset(|| Some(2)));
    }
}
