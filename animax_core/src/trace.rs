// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for trigger sessions.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that a
//! [`TriggerSession`](crate::trigger::TriggerSession) calls as it moves
//! through its phases. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing (zero overhead) and the
//! sink is dropped at construction. When **on**, each method performs a
//! single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;
use core::time::Duration;

use crate::time::ParseTimeError;
use crate::trigger::Phase;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a session reacts to visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionMode {
    /// Animation applied immediately, no observer.
    Infinite,
    /// Animate on first visibility, then restore and stop observing.
    OneShot,
    /// Toggle between animation and base style on every transition.
    Continuous,
}

/// Which of the two session styles was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// The composed animation style.
    Animation,
    /// The sanitized base style.
    Base,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when a session starts.
#[derive(Clone, Copy, Debug)]
pub struct SessionStartEvent {
    /// Visibility policy of the session.
    pub mode: SessionMode,
    /// Whether the session has an element to write to.
    pub has_target: bool,
    /// Delay before a one-shot animation is reverted.
    pub delay: Duration,
}

/// Emitted on every style attribute write.
#[derive(Clone, Copy, Debug)]
pub struct StyleAppliedEvent {
    /// Which style was written.
    pub kind: StyleKind,
    /// Phase the session entered with this write.
    pub phase: Phase,
}

/// Emitted when the revert timer is scheduled.
#[derive(Clone, Copy, Debug)]
pub struct TimerScheduledEvent {
    /// Delay until the timer fires.
    pub delay: Duration,
}

/// Emitted when the session is disposed.
#[derive(Clone, Copy, Debug)]
pub struct DisposedEvent {
    /// Phase the session was in before disposal.
    pub previous: Phase,
}

/// Emitted when the duration literal could not be parsed and the default
/// delay was used instead.
#[derive(Clone, Copy, Debug)]
pub struct DurationFallbackEvent {
    /// Why the literal was rejected.
    pub error: ParseTimeError,
    /// The delay used instead.
    pub fallback: Duration,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from trigger sessions.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a session starts.
    fn on_session_start(&mut self, e: &SessionStartEvent) {
        _ = e;
    }

    /// Called after a style attribute write.
    fn on_style_applied(&mut self, e: &StyleAppliedEvent) {
        _ = e;
    }

    /// Called when the revert timer is scheduled.
    fn on_timer_scheduled(&mut self, e: &TimerScheduledEvent) {
        _ = e;
    }

    /// Called when the revert timer fires.
    fn on_timer_fired(&mut self) {}

    /// Called when the session stops observing its element.
    fn on_unobserved(&mut self) {}

    /// Called when the session is disposed.
    fn on_disposed(&mut self, e: &DisposedEvent) {
        _ = e;
    }

    /// Called when the duration literal falls back to the default delay.
    fn on_duration_fallback(&mut self, e: &DurationFallbackEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owning wrapper around an optional [`TraceSink`].
///
/// A session outlives any single callback, so unlike a per-call borrow the
/// tracer owns its sink.
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::none()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            drop(sink);
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {}
        }
    }

    /// Emits a [`SessionStartEvent`].
    #[inline]
    pub fn session_start(&mut self, e: &SessionStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_session_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StyleAppliedEvent`].
    #[inline]
    pub fn style_applied(&mut self, e: &StyleAppliedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_style_applied(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TimerScheduledEvent`].
    #[inline]
    pub fn timer_scheduled(&mut self, e: &TimerScheduledEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_timer_scheduled(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a timer-fired event.
    #[inline]
    pub fn timer_fired(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_timer_fired();
        }
    }

    /// Emits an unobserved event.
    #[inline]
    pub fn unobserved(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_unobserved();
        }
    }

    /// Emits a [`DisposedEvent`].
    #[inline]
    pub fn disposed(&mut self, e: &DisposedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_disposed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DurationFallbackEvent`].
    #[inline]
    pub fn duration_fallback(&mut self, e: &DurationFallbackEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_duration_fallback(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
