// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for animax.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`animate`]: start a scroll-triggered animation on a DOM element and get
//!   a [`Cleanup`] disposer back
//! - [`DomObserver`]: `IntersectionObserver` visibility subscription
//! - [`DomTimer`]: `setTimeout` revert timer
//! - [`ConsoleSink`]: session tracing to the browser console
//!
//! # Example
//!
//! ```rust,ignore
//! let options = AnimateOptions::default()
//!     .with_motion(Motion::FadeInUp)
//!     .with_duration("600ms");
//! let cleanup = animate(Some(card), &options);
//! // ...later, e.g. when the view is torn down:
//! cleanup.cleanup();
//! ```

#![no_std]

extern crate alloc;

mod console;
mod observer;
mod timer;

pub use animax_core::backend::StyleTarget;
pub use animax_core::trigger::{AnimateOptions, Phase};
pub use console::ConsoleSink;
pub use observer::DomObserver;
pub use timer::DomTimer;

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::RefCell;

use animax_core::trace::Tracer;
use animax_core::trigger::TriggerSession;
use web_sys::Element;

/// A DOM element driven through its `style` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomElement(Element);

impl DomElement {
    /// Returns the wrapped element.
    #[must_use]
    pub fn as_element(&self) -> &Element {
        &self.0
    }
}

impl From<Element> for DomElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl StyleTarget for DomElement {
    fn style_attribute(&self) -> Option<String> {
        self.0.get_attribute("style")
    }

    fn set_style_attribute(&self, style: &str) {
        let _ = self.0.set_attribute("style", style);
    }
}

type DomSession = TriggerSession<DomElement, DomObserver, DomTimer>;

/// Starts a visibility-triggered animation on `element`.
///
/// With `options.infinite` set, the animation style is written right away.
/// Otherwise an `IntersectionObserver` is created with `options.observer`
/// and the element animates when it scrolls into view (once, or on every
/// transition when `options.once` is `false`).
///
/// A `None` element yields an inert session. If the browser rejects the
/// observer options the session never animates; no error is reported.
pub fn animate(element: Option<Element>, options: &AnimateOptions) -> Cleanup {
    animate_with_tracer(element, options, Tracer::none())
}

/// Like [`animate`], routing session events to `tracer`.
pub fn animate_with_tracer(
    element: Option<Element>,
    options: &AnimateOptions,
    tracer: Tracer,
) -> Cleanup {
    let target = element.map(DomElement::from);
    let session = Rc::new_cyclic(|weak: &Weak<RefCell<DomSession>>| {
        let weak = weak.clone();
        let timer = DomTimer::new(move || {
            if let Some(session) = weak.upgrade() {
                session.borrow_mut().on_timer_fired();
            }
        });
        RefCell::new(DomSession::new(target, options, timer).with_tracer(tracer))
    });

    let weak = Rc::downgrade(&session);
    session.borrow_mut().start(|| {
        DomObserver::new(&options.observer, move |batch| {
            if let Some(session) = weak.upgrade() {
                session.borrow_mut().on_visibility(batch);
            }
        })
        .ok()
    });

    Cleanup {
        session: Some(session),
    }
}

/// Disposer returned by [`animate`].
///
/// [`cleanup`](Self::cleanup) stops observing, clears the pending timer and,
/// for infinite animations, restores the base style. It is safe to call any
/// number of times. Dropping a `Cleanup` calls it as well; use
/// [`leak`](Self::leak) to keep the animation running for the lifetime of
/// the page.
#[must_use = "dropping a Cleanup immediately disposes the animation"]
pub struct Cleanup {
    session: Option<Rc<RefCell<DomSession>>>,
}

impl Cleanup {
    /// Tears the animation down. Idempotent.
    ///
    /// Does nothing if the session is already borrowed, which only happens
    /// when this is called from inside one of the session's own callbacks
    /// (for example from a [`TraceSink`](animax_core::trace::TraceSink)).
    /// Call it again once that callback has returned; [`phase`](Self::phase)
    /// reports whether teardown happened.
    pub fn cleanup(&self) {
        if let Some(session) = &self.session
            && let Ok(mut session) = session.try_borrow_mut()
        {
            session.dispose();
        }
    }

    /// Releases the handle without disposing, so the session lives as long
    /// as the page.
    pub fn leak(mut self) {
        if let Some(session) = self.session.take() {
            core::mem::forget(session);
        }
    }

    /// Returns the session phase.
    ///
    /// Returns `None` after [`leak`](Self::leak), and also while the session
    /// is borrowed by one of its own callbacks.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        let session = self.session.as_ref()?;
        Some(session.try_borrow().ok()?.phase())
    }
}

impl Drop for Cleanup {
    fn drop(&mut self) {
        self.cleanup();
    }
}

impl core::fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cleanup")
            .field("phase", &self.phase())
            .finish()
    }
}
