// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded session events.
//!
//! [`export`] writes events from a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array of `{ "seq", "name", "args" }` objects.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| {
            json!({
                "seq": seq,
                "name": event.name(),
                "args": args(event),
            })
        })
        .collect();

    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn args(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::SessionStart(e) => json!({
            "mode": format!("{:?}", e.mode),
            "has_target": e.has_target,
            "delay_ms": duration_ms(e.delay),
        }),
        RecordedEvent::StyleApplied(e) => json!({
            "kind": format!("{:?}", e.kind),
            "phase": format!("{:?}", e.phase),
        }),
        RecordedEvent::TimerScheduled(e) => json!({
            "delay_ms": duration_ms(e.delay),
        }),
        RecordedEvent::TimerFired | RecordedEvent::Unobserved => json!({}),
        RecordedEvent::Disposed(e) => json!({
            "previous": format!("{:?}", e.previous),
        }),
        RecordedEvent::DurationFallback(e) => json!({
            "error": e.error.to_string(),
            "fallback_ms": duration_ms(e.fallback),
        }),
    }
}

fn duration_ms(d: std::time::Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use animax_core::trace::{SessionMode, SessionStartEvent, TimerScheduledEvent};
    use std::time::Duration;

    #[test]
    fn export_produces_valid_json() {
        let events = [
            RecordedEvent::SessionStart(SessionStartEvent {
                mode: SessionMode::OneShot,
                has_target: true,
                delay: Duration::from_millis(1000),
            }),
            RecordedEvent::TimerScheduled(TimerScheduledEvent {
                delay: Duration::from_millis(1000),
            }),
            RecordedEvent::TimerFired,
        ];

        let mut out = Vec::new();
        export(&events, &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["seq"], 0);
        assert_eq!(parsed[0]["name"], "SessionStart");
        assert_eq!(parsed[0]["args"]["mode"], "OneShot");
        assert_eq!(parsed[1]["args"]["delay_ms"], 1000);
        assert_eq!(parsed[2]["name"], "TimerFired");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert!(parsed.is_empty());
    }
}
