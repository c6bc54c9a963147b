// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` revert timer.
//!
//! [`DomTimer`] implements [`Timer`] with a single JS closure registered via
//! `setTimeout`. The closure is created once and reused for every schedule.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::time::Duration;

use animax_core::backend::Timer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so the timer
// also works in workers and never has to unwrap the window.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// A one-shot timer backed by `setTimeout`.
pub struct DomTimer {
    /// The JS closure handed to `setTimeout`.
    closure: Closure<dyn FnMut()>,

    /// The ID of the pending timeout. Shared with the closure so a fired
    /// timeout clears itself before the callback runs.
    pending: Rc<Cell<Option<i32>>>,
}

impl DomTimer {
    /// Creates an idle timer that runs `on_fire` each time a scheduled delay
    /// elapses.
    pub fn new(mut on_fire: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let fired = Rc::clone(&pending);
        let closure = Closure::wrap(Box::new(move || {
            fired.set(None);
            on_fire();
        }) as Box<dyn FnMut()>);
        Self { closure, pending }
    }

    /// Returns `true` if a timeout is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Timer for DomTimer {
    fn schedule(&mut self, delay: Duration) {
        self.clear();
        let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let id = set_timeout(self.closure.as_ref().unchecked_ref(), delay_ms);
        self.pending.set(Some(id));
    }

    fn clear(&mut self) {
        if let Some(id) = self.pending.take() {
            clear_timeout(id);
        }
    }
}

impl Drop for DomTimer {
    fn drop(&mut self) {
        // A pending timeout would call into a freed closure.
        self.clear();
    }
}

impl core::fmt::Debug for DomTimer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomTimer")
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}
