// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` subscription.
//!
//! [`DomObserver`] owns an [`IntersectionObserver`] and the JS closure it
//! calls. Each notification batch is converted into
//! [`VisibilityEntry`] values, in delivery order, and handed to the batch
//! callback.

use alloc::boxed::Box;
use alloc::vec::Vec;

use animax_core::backend::{ObserverOptions, VisibilityEntry, VisibilityObserver};
use js_sys::Array;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::DomElement;

type BatchClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A visibility subscription backed by `IntersectionObserver`.
pub struct DomObserver {
    raw: IntersectionObserver,
    /// Kept alive for as long as the observer may call it.
    _closure: BatchClosure,
}

impl DomObserver {
    /// Creates an observer with `options` that forwards every batch to
    /// `on_batch`.
    ///
    /// Nothing is observed until [`observe`](VisibilityObserver::observe).
    ///
    /// # Errors
    ///
    /// Returns the JS exception if the browser rejects the options (for
    /// example a malformed root margin or a threshold outside `0..=1`).
    pub fn new(
        options: &ObserverOptions,
        mut on_batch: impl FnMut(&[VisibilityEntry<DomElement>]) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let batch: Vec<_> = entries
                .iter()
                .map(|value| {
                    let entry: IntersectionObserverEntry = value.unchecked_into();
                    VisibilityEntry::new(DomElement::from(entry.target()), entry.is_intersecting())
                })
                .collect();
            on_batch(&batch);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }
        if !options.threshold.is_empty() {
            let thresholds: Array = options
                .threshold
                .iter()
                .map(|&t| JsValue::from_f64(t))
                .collect();
            init.set_threshold(&thresholds);
        }

        let raw = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            raw,
            _closure: closure,
        })
    }
}

impl VisibilityObserver<DomElement> for DomObserver {
    fn observe(&mut self, target: &DomElement) {
        self.raw.observe(target.as_element());
    }

    fn unobserve(&mut self, target: &DomElement) {
        self.raw.unobserve(target.as_element());
    }

    fn disconnect(&mut self) {
        self.raw.disconnect();
    }
}

impl Drop for DomObserver {
    fn drop(&mut self) {
        // The closure is about to be freed; make sure the browser stops
        // calling it.
        self.raw.disconnect();
    }
}

impl core::fmt::Debug for DomObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomObserver")
            .field("raw", &"IntersectionObserver")
            .finish_non_exhaustive()
    }
}
