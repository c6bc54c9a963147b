// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! A [`TriggerSession`](crate::trigger::TriggerSession) never talks to a
//! document directly. A backend supplies three pieces:
//!
//! - **Element** — Implements [`StyleTarget`] to read and write the inline
//!   `style` attribute. Implementations are cheap handles; cloning one must
//!   refer to the same element.
//!
//! - **Visibility observer** — Implements [`VisibilityObserver`] around the
//!   platform's intersection facility (e.g. `IntersectionObserver`). The
//!   backend forwards each notification batch to
//!   [`TriggerSession::on_visibility`](crate::trigger::TriggerSession::on_visibility)
//!   as a slice of [`VisibilityEntry`] values, in delivery order.
//!
//! - **Timer** — Implements [`Timer`] as a one-shot scheduled callback (e.g.
//!   `setTimeout`). When it fires, the backend calls
//!   [`TriggerSession::on_timer_fired`](crate::trigger::TriggerSession::on_timer_fired).
//!
//! The callback wiring is backend-specific and not abstracted here: the web
//! backend keeps the session behind `Rc<RefCell<_>>` and hands `Weak`
//! references to its JS closures.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

/// An element whose inline `style` attribute can be read and replaced.
pub trait StyleTarget {
    /// Returns the current `style` attribute, or `None` if it is unset.
    fn style_attribute(&self) -> Option<String>;

    /// Replaces the whole `style` attribute in one write.
    fn set_style_attribute(&self, style: &str);
}

/// A subscription to visibility changes of one or more elements.
pub trait VisibilityObserver<T> {
    /// Starts delivering visibility changes for `target`.
    fn observe(&mut self, target: &T);

    /// Stops delivering visibility changes for `target`.
    ///
    /// Unobserving an element that is not observed is a no-op.
    fn unobserve(&mut self, target: &T);

    /// Stops delivering visibility changes for every element.
    ///
    /// Disconnecting twice is a no-op.
    fn disconnect(&mut self);
}

/// One record of a visibility notification batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityEntry<T> {
    /// The element whose visibility changed.
    pub target: T,
    /// Whether the element now intersects the observer's root.
    pub is_intersecting: bool,
}

impl<T> VisibilityEntry<T> {
    /// Creates an entry reporting `target` as visible or not.
    #[must_use]
    pub const fn new(target: T, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}

/// A one-shot timer owned by a single session.
pub trait Timer {
    /// Schedules the timer callback after `delay`, replacing any pending one.
    fn schedule(&mut self, delay: Duration);

    /// Cancels the pending callback, if any.
    ///
    /// Clearing an idle timer is a no-op.
    fn clear(&mut self);
}

/// Visibility detection settings, passed through to the platform unmodified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObserverOptions {
    /// Intersection ratios at which to notify. Empty means the platform
    /// default (a single threshold of `0`).
    pub threshold: Vec<f64>,
    /// Margin around the root, in CSS margin syntax (e.g. `"0px 0px -10% 0px"`).
    /// `None` means the platform default.
    pub root_margin: Option<String>,
}

impl ObserverOptions {
    /// Sets the notification thresholds.
    #[must_use]
    pub fn with_threshold(mut self, threshold: impl Into<Vec<f64>>) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Sets the root margin.
    #[must_use]
    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = Some(root_margin.into());
        self
    }
}
