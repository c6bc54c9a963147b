// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! A session's [`Tracer`](animax_core::trace::Tracer) owns its sink, so
//! [`RecorderSink`] keeps its log behind a shared handle: give one clone to
//! the tracer and read the events back through another.

use std::cell::RefCell;
use std::rc::Rc;

use animax_core::trace::{
    DisposedEvent, DurationFallbackEvent, SessionStartEvent, StyleAppliedEvent,
    TimerScheduledEvent, TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// [`TraceSink::on_session_start`].
    SessionStart(SessionStartEvent),
    /// [`TraceSink::on_style_applied`].
    StyleApplied(StyleAppliedEvent),
    /// [`TraceSink::on_timer_scheduled`].
    TimerScheduled(TimerScheduledEvent),
    /// [`TraceSink::on_timer_fired`].
    TimerFired,
    /// [`TraceSink::on_unobserved`].
    Unobserved,
    /// [`TraceSink::on_disposed`].
    Disposed(DisposedEvent),
    /// [`TraceSink::on_duration_fallback`].
    DurationFallback(DurationFallbackEvent),
}

impl RecordedEvent {
    /// Returns a stable name for the event kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SessionStart(_) => "SessionStart",
            Self::StyleApplied(_) => "StyleApplied",
            Self::TimerScheduled(_) => "TimerScheduled",
            Self::TimerFired => "TimerFired",
            Self::Unobserved => "Unobserved",
            Self::Disposed(_) => "Disposed",
            Self::DurationFallback(_) => "DurationFallback",
        }
    }
}

/// A [`TraceSink`] that appends events to a shared in-memory log.
///
/// Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of events recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Removes and returns every recorded event.
    pub fn drain(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_session_start(&mut self, e: &SessionStartEvent) {
        self.push(RecordedEvent::SessionStart(*e));
    }

    fn on_style_applied(&mut self, e: &StyleAppliedEvent) {
        self.push(RecordedEvent::StyleApplied(*e));
    }

    fn on_timer_scheduled(&mut self, e: &TimerScheduledEvent) {
        self.push(RecordedEvent::TimerScheduled(*e));
    }

    fn on_timer_fired(&mut self) {
        self.push(RecordedEvent::TimerFired);
    }

    fn on_unobserved(&mut self) {
        self.push(RecordedEvent::Unobserved);
    }

    fn on_disposed(&mut self, e: &DisposedEvent) {
        self.push(RecordedEvent::Disposed(*e));
    }

    fn on_duration_fallback(&mut self, e: &DurationFallbackEvent) {
        self.push(RecordedEvent::DurationFallback(*e));
    }
}
