// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use animax_core::trace::{
    DisposedEvent, DurationFallbackEvent, SessionMode, SessionStartEvent, StyleAppliedEvent,
    StyleKind, TimerScheduledEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn mode_name(mode: SessionMode) -> &'static str {
    match mode {
        SessionMode::Infinite => "infinite",
        SessionMode::OneShot => "once",
        SessionMode::Continuous => "continuous",
    }
}

fn style_name(kind: StyleKind) -> &'static str {
    match kind {
        StyleKind::Animation => "animation",
        StyleKind::Base => "base",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_session_start(&mut self, e: &SessionStartEvent) {
        let _ = writeln!(
            self.writer,
            "[start] mode={} target={} delay={}ms",
            mode_name(e.mode),
            if e.has_target { "yes" } else { "none" },
            e.delay.as_millis(),
        );
    }

    fn on_style_applied(&mut self, e: &StyleAppliedEvent) {
        let _ = writeln!(
            self.writer,
            "[style] {} phase={:?}",
            style_name(e.kind),
            e.phase,
        );
    }

    fn on_timer_scheduled(&mut self, e: &TimerScheduledEvent) {
        let _ = writeln!(self.writer, "[timer] in {}ms", e.delay.as_millis());
    }

    fn on_timer_fired(&mut self) {
        let _ = writeln!(self.writer, "[timer] fired");
    }

    fn on_unobserved(&mut self) {
        let _ = writeln!(self.writer, "[observer] unobserved");
    }

    fn on_disposed(&mut self, e: &DisposedEvent) {
        let _ = writeln!(self.writer, "[dispose] from={:?}", e.previous);
    }

    fn on_duration_fallback(&mut self, e: &DurationFallbackEvent) {
        let _ = writeln!(
            self.writer,
            "[duration] {} -> {}ms",
            e.error,
            e.fallback.as_millis(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animax_core::trigger::Phase;
    use std::time::Duration;

    #[test]
    fn pretty_print_start_and_style() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_session_start(&SessionStartEvent {
            mode: SessionMode::OneShot,
            has_target: true,
            delay: Duration::from_millis(750),
        });
        sink.on_style_applied(&StyleAppliedEvent {
            kind: StyleKind::Animation,
            phase: Phase::Animating,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[start] mode=once"), "got: {output}");
        assert!(output.contains("delay=750ms"), "got: {output}");
        assert!(output.contains("[style] animation phase=Animating"), "got: {output}");
    }
}
