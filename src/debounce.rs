// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Cancellable debounce timer for the name search box.
//!
//! Each keystroke arms the debouncer and receives a generation token;
//! arming again invalidates every earlier token. A caller that waits out
//! the quiet period with a stale token learns it was superseded and
//! must not fire its action.

use std::time::Duration;
use tokio::time::sleep;

/// Quiet period for the activities name search.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Token identifying one arming of the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Trailing-edge debouncer with explicit invalidation.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    /// Arm the timer, invalidating any previously issued token.
    pub fn arm(&mut self) -> DebounceToken {
        self.generation += 1;
        DebounceToken(self.generation)
    }

    /// Whether `token` is still the most recently issued one.
    pub fn is_current(&self, token: DebounceToken) -> bool {
        token.0 == self.generation
    }

    /// Sleep out the quiet period, then report whether `token` survived.
    ///
    /// Returns `false` when a newer `arm()` superseded this wait, in
    /// which case the caller must skip its action.
    pub async fn wait(&self, token: DebounceToken) -> bool {
        sleep(self.delay).await;
        self.is_current(token)
    }
}
