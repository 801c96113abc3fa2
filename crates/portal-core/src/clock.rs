use instant::Instant;

/// Wall-clock elapsed time since process start, read once per frame and fed
/// into both shading rules.
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Explicit state for the display-synced render loop.
///
/// The frontends only schedule the next display-sync callback while this
/// reports `Running`, which turns the classic unbounded animation-frame
/// recursion into a cancellable subscription.
#[derive(Clone, Debug)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
            frames: 0,
        }
    }

    /// Transition to `Running`. Returns false if the loop was already running,
    /// so callers don't double-schedule the callback.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        true
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Record one completed frame. No-op while stopped.
    pub fn advance(&mut self) -> u64 {
        if self.is_running() {
            self.frames += 1;
        }
        self.frames
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
