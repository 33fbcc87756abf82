//! A cancellable, repeating per-frame task.
//!
//! The host decides when frames happen; this only decides whether another one should.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Default, Clone)]
pub struct CancellationToken(Arc<AtomicBool>);
impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A task that's run once per frame until its token is cancelled or it breaks.
#[derive(Debug)]
pub struct RepeatingTask<F> {
    task: F,
    token: CancellationToken,
    frames: u64,
    finished: bool,
}
impl<F: FnMut() -> ControlFlow<()>> RepeatingTask<F> {
    pub fn new(token: CancellationToken, task: F) -> Self {
        Self {
            task,
            token,
            frames: 0,
            finished: false,
        }
    }
    #[inline]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
    /// Number of frames the task has run.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
    pub fn is_finished(&self) -> bool {
        self.finished || self.token.is_cancelled()
    }
    /// Run a single frame, unless the task has already stopped.
    pub fn tick(&mut self) -> ControlFlow<()> {
        if self.is_finished() {
            return ControlFlow::Break(());
        }
        self.frames += 1;
        let res = (self.task)();
        if res.is_break() {
            self.finished = true;
        }
        res
    }
    /// Run until the token is cancelled or the task breaks.
    pub fn run(&mut self) -> u64 {
        let start = self.frames;
        while self.tick().is_continue() {}
        self.frames - start
    }
    /// Run at most `limit` frames, returning how many ran.
    pub fn run_for(&mut self, limit: u64) -> u64 {
        let start = self.frames;
        for _ in 0..limit {
            if self.tick().is_break() {
                break;
            }
        }
        self.frames - start
    }
}
