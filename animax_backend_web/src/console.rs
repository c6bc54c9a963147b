// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;
use alloc::string::String;

use animax_core::trace::{
    DisposedEvent, DurationFallbackEvent, SessionStartEvent, StyleAppliedEvent, TimerScheduledEvent,
    TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes one `console.debug` line per session event.
///
/// Events only reach the sink when the `trace` feature is enabled.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    label: String,
}

impl ConsoleSink {
    /// Creates a sink that prefixes each line with `[label]`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn log(&self, line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("[{}] {line}", self.label)));
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new("animax")
    }
}

impl TraceSink for ConsoleSink {
    fn on_session_start(&mut self, e: &SessionStartEvent) {
        self.log(&format!(
            "start mode={:?} target={} delay={}ms",
            e.mode,
            e.has_target,
            e.delay.as_millis()
        ));
    }

    fn on_style_applied(&mut self, e: &StyleAppliedEvent) {
        self.log(&format!("style {:?} -> {:?}", e.kind, e.phase));
    }

    fn on_timer_scheduled(&mut self, e: &TimerScheduledEvent) {
        self.log(&format!("timer in {}ms", e.delay.as_millis()));
    }

    fn on_timer_fired(&mut self) {
        self.log("timer fired");
    }

    fn on_unobserved(&mut self) {
        self.log("unobserved");
    }

    fn on_disposed(&mut self, e: &DisposedEvent) {
        self.log(&format!("disposed from {:?}", e.previous));
    }

    fn on_duration_fallback(&mut self, e: &DurationFallbackEvent) {
        self.log(&format!(
            "bad duration ({}), using {}ms",
            e.error,
            e.fallback.as_millis()
        ));
    }
}
