// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style composition and visibility-triggered sessions for CSS keyframe
//! animations.
//!
//! `animax_core` holds everything that does not touch a real document. It is
//! `no_std` compatible (with `alloc`) so the same session logic runs inside a
//! wasm module and in native unit tests.
//!
//! # Architecture
//!
//! A trigger invocation flows through three stages:
//!
//! ```text
//!   element.style ──► sanitize() ──► base style
//!                                        │
//!   AnimateOptions ──────────────────► compose() ──► animation style
//!                                                          │
//!                 ┌────────────────────────────────────────┘
//!                 ▼
//!   TriggerSession ◄── visibility batches (VisibilityObserver)
//!        │         ◄── timer firings (Timer)
//!        ▼
//!   StyleTarget::set_style_attribute()
//! ```
//!
//! **[`motion`]** — The catalog of keyframe names a [`Motion`](motion::Motion)
//! can select.
//!
//! **[`style`]** — Composing animation declarations ([`style::compose`]) and
//! stripping them from an existing style attribute ([`style::sanitize`]).
//!
//! **[`time`]** — CSS time literal parsing (`"1s"`, `"250ms"`).
//!
//! **[`backend`]** — The traits platform backends implement: element style
//! access, visibility observation, and one-shot timers.
//!
//! **[`trigger`]** — [`TriggerSession`](trigger::TriggerSession), the per-element
//! state machine that swaps styles as visibility changes.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! session instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod motion;
pub mod style;
pub mod time;
pub mod trace;
pub mod trigger;
