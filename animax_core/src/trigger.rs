// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility-triggered animation sessions.
//!
//! A [`TriggerSession`] owns everything one trigger invocation needs: the
//! captured base style, the composed animation style, the observer
//! registration and the revert timer. Backends feed it visibility batches and
//! timer firings; it decides which style the element carries.
//!
//! # Phases
//!
//! One-shot (`once = true`):
//!
//! ```text
//!   Unobserved ─start─► Subscribed ─visible─► Animating ─timer─► Finished
//! ```
//!
//! Continuous (`once = false`), no timer:
//!
//! ```text
//!   Unobserved ─start─► Subscribed ─visible─► Animating ⇄ Hidden
//! ```
//!
//! Infinite sessions skip observation entirely and go straight to
//! [`Phase::Infinite`]. Every phase moves to [`Phase::Disposed`] on
//! [`dispose`](TriggerSession::dispose), which is idempotent.

use alloc::string::String;
use core::time::Duration;

use crate::backend::{ObserverOptions, StyleTarget, Timer, VisibilityEntry, VisibilityObserver};
use crate::motion::Motion;
use crate::style::{AnimationSpec, compose, sanitize};
use crate::time::{DEFAULT_DELAY, DEFAULT_DURATION, ParseTimeError, parse_css_time};
use crate::trace::{
    DisposedEvent, DurationFallbackEvent, SessionMode, SessionStartEvent, StyleAppliedEvent,
    StyleKind, TimerScheduledEvent, Tracer,
};

/// Options for one trigger invocation.
///
/// There is no `style` field: the base style is always captured from the
/// element itself.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimateOptions {
    /// Keyframe animation to run.
    pub motion: Motion,
    /// CSS time literal; also the one-shot revert delay.
    pub duration: String,
    /// Apply the animation immediately and repeat it forever.
    pub infinite: bool,
    /// Animate only on first visibility, then stop observing.
    pub once: bool,
    /// Settings for the platform visibility observer.
    pub observer: ObserverOptions,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            motion: Motion::default(),
            duration: String::from(DEFAULT_DURATION),
            infinite: false,
            once: true,
            observer: ObserverOptions::default(),
        }
    }
}

impl AnimateOptions {
    /// Sets the motion.
    #[must_use]
    pub fn with_motion(mut self, motion: impl Into<Motion>) -> Self {
        self.motion = motion.into();
        self
    }

    /// Sets the duration literal.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets infinite repetition.
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Sets one-shot (`true`) or continuous (`false`) behavior.
    #[must_use]
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Sets the observer settings.
    #[must_use]
    pub fn with_observer(mut self, observer: ObserverOptions) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the [`SessionMode`] these options select.
    #[must_use]
    pub fn mode(&self) -> SessionMode {
        if self.infinite {
            SessionMode::Infinite
        } else if self.once {
            SessionMode::OneShot
        } else {
            SessionMode::Continuous
        }
    }
}

/// Where a [`TriggerSession`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created, [`start`](TriggerSession::start) not called yet.
    Unobserved,
    /// Observing, no visible transition seen yet.
    Subscribed,
    /// Element carries the animation style.
    Animating,
    /// Continuous mode: element carries the base style after leaving view.
    Hidden,
    /// One-shot mode: base style restored and element unobserved. Terminal
    /// until disposal.
    Finished,
    /// Animation applied unconditionally, nothing observed.
    Infinite,
    /// Torn down.
    Disposed,
}

/// Per-invocation state machine that swaps an element's inline style as its
/// visibility changes.
///
/// `T` is the element handle, `O` the visibility observer and `K` the revert
/// timer. An absent element (`None`) turns every style write into a no-op.
pub struct TriggerSession<T, O, K> {
    target: Option<T>,
    observer: Option<O>,
    timer: K,
    /// Element written when the one-shot animation started.
    animating: Option<T>,
    base_style: String,
    animation_style: String,
    mode: SessionMode,
    delay: Duration,
    duration_error: Option<ParseTimeError>,
    phase: Phase,
    tracer: Tracer,
}

impl<T, O, K> core::fmt::Debug for TriggerSession<T, O, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TriggerSession")
            .field("has_target", &self.target.is_some())
            .field("observing", &self.observer.is_some())
            .field("mode", &self.mode)
            .field("delay", &self.delay)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<T, O, K> TriggerSession<T, O, K>
where
    T: StyleTarget + Clone,
    O: VisibilityObserver<T>,
    K: Timer,
{
    /// Captures the element's base style and composes the animation style.
    ///
    /// Nothing is written or observed until [`start`](Self::start).
    #[must_use]
    pub fn new(target: Option<T>, options: &AnimateOptions, timer: K) -> Self {
        let current = target.as_ref().and_then(StyleTarget::style_attribute);
        let base_style = sanitize(current.as_deref());
        let animation_style = compose(&AnimationSpec {
            motion: options.motion.clone(),
            duration: options.duration.clone(),
            infinite: options.infinite,
            style: Some(base_style.clone()),
        });
        let (delay, duration_error) = match parse_css_time(&options.duration) {
            Ok(delay) => (delay, None),
            Err(error) => (DEFAULT_DELAY, Some(error)),
        };

        Self {
            target,
            observer: None,
            timer,
            animating: None,
            base_style,
            animation_style,
            mode: options.mode(),
            delay,
            duration_error,
            phase: Phase::Unobserved,
            tracer: Tracer::none(),
        }
    }

    /// Routes trace events for this session to `tracer`.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Starts the session.
    ///
    /// Infinite sessions write the animation style immediately and never call
    /// `connect`. Finite sessions call `connect` once to create the observer
    /// and observe the element with it. If `connect` returns `None` the
    /// session stays subscribed but never sees a batch.
    ///
    /// Calling `start` again is a no-op.
    pub fn start(&mut self, connect: impl FnOnce() -> Option<O>) {
        if self.phase != Phase::Unobserved {
            return;
        }

        self.tracer.session_start(&SessionStartEvent {
            mode: self.mode,
            has_target: self.target.is_some(),
            delay: self.delay,
        });

        if self.mode == SessionMode::Infinite {
            self.phase = Phase::Infinite;
            if let Some(target) = &self.target {
                target.set_style_attribute(&self.animation_style);
                self.tracer.style_applied(&StyleAppliedEvent {
                    kind: StyleKind::Animation,
                    phase: self.phase,
                });
            }
            return;
        }

        if let Some(error) = self.duration_error
            && self.mode == SessionMode::OneShot
        {
            self.tracer.duration_fallback(&DurationFallbackEvent {
                error,
                fallback: self.delay,
            });
        }

        let mut observer = connect();
        if let (Some(observer), Some(target)) = (&mut observer, &self.target) {
            observer.observe(target);
        }
        self.observer = observer;
        self.phase = Phase::Subscribed;
    }

    /// Handles one visibility notification batch, entries in delivery order.
    pub fn on_visibility(&mut self, entries: &[VisibilityEntry<T>]) {
        for entry in entries {
            match (self.mode, self.phase) {
                (SessionMode::OneShot, Phase::Subscribed) if entry.is_intersecting => {
                    self.apply(&entry.target, StyleKind::Animation, Phase::Animating);
                    self.animating = Some(entry.target.clone());
                    self.timer.schedule(self.delay);
                    self.tracer
                        .timer_scheduled(&TimerScheduledEvent { delay: self.delay });
                }
                (SessionMode::Continuous, Phase::Subscribed | Phase::Animating | Phase::Hidden) => {
                    if entry.is_intersecting {
                        self.apply(&entry.target, StyleKind::Animation, Phase::Animating);
                    } else {
                        self.apply(&entry.target, StyleKind::Base, Phase::Hidden);
                    }
                }
                _ => {}
            }
        }
    }

    /// Handles the revert timer firing: restores the base style and stops
    /// observing the element.
    ///
    /// Ignored unless a one-shot animation is running.
    pub fn on_timer_fired(&mut self) {
        if self.phase != Phase::Animating || self.mode != SessionMode::OneShot {
            return;
        }
        self.tracer.timer_fired();

        if let Some(target) = self.animating.take() {
            self.apply(&target, StyleKind::Base, Phase::Finished);
            if let Some(observer) = &mut self.observer {
                observer.unobserve(&target);
                self.tracer.unobserved();
            }
        }
        self.phase = Phase::Finished;
    }

    /// Tears the session down.
    ///
    /// Infinite sessions restore the base style. Finite sessions stop
    /// observing every element, disconnect the observer and clear the revert
    /// timer; the current style is left as-is. Calling `dispose` again does
    /// nothing.
    pub fn dispose(&mut self) {
        let previous = self.phase;
        match previous {
            Phase::Disposed => return,
            Phase::Infinite => {
                if let Some(target) = &self.target {
                    target.set_style_attribute(&self.base_style);
                    self.tracer.style_applied(&StyleAppliedEvent {
                        kind: StyleKind::Base,
                        phase: Phase::Disposed,
                    });
                }
            }
            Phase::Unobserved => {}
            Phase::Subscribed | Phase::Animating | Phase::Hidden | Phase::Finished => {
                if let Some(mut observer) = self.observer.take() {
                    if let Some(target) = &self.target {
                        observer.unobserve(target);
                    }
                    observer.disconnect();
                    self.tracer.unobserved();
                }
                self.timer.clear();
                self.animating = None;
            }
        }
        self.phase = Phase::Disposed;
        self.tracer.disposed(&DisposedEvent { previous });
    }

    fn apply(&mut self, target: &T, kind: StyleKind, phase: Phase) {
        let style = match kind {
            StyleKind::Animation => &self.animation_style,
            StyleKind::Base => &self.base_style,
        };
        target.set_style_attribute(style);
        self.phase = phase;
        self.tracer.style_applied(&StyleAppliedEvent { kind, phase });
    }
}

impl<T, O, K> TriggerSession<T, O, K> {
    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the visibility policy.
    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Returns the element's inline style with animation declarations removed.
    #[must_use]
    pub fn base_style(&self) -> &str {
        &self.base_style
    }

    /// Returns the composed animation style.
    #[must_use]
    pub fn animation_style(&self) -> &str {
        &self.animation_style
    }

    /// Returns the one-shot revert delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the target element, if any.
    #[must_use]
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Returns `true` while an observer registration is held.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::ToString as _;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    #[derive(Clone, Debug, Default)]
    struct FakeElement {
        style: Rc<RefCell<Option<String>>>,
        writes: Rc<Cell<u32>>,
    }

    impl FakeElement {
        fn with_style(style: &str) -> Self {
            let el = Self::default();
            *el.style.borrow_mut() = Some(style.to_string());
            el
        }

        fn style(&self) -> Option<String> {
            self.style.borrow().clone()
        }
    }

    impl StyleTarget for FakeElement {
        fn style_attribute(&self) -> Option<String> {
            self.style()
        }

        fn set_style_attribute(&self, style: &str) {
            *self.style.borrow_mut() = Some(style.to_string());
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Call {
        Observe,
        Unobserve,
        Disconnect,
    }

    #[derive(Clone, Debug, Default)]
    struct FakeObserver {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl VisibilityObserver<FakeElement> for FakeObserver {
        fn observe(&mut self, _target: &FakeElement) {
            self.calls.borrow_mut().push(Call::Observe);
        }

        fn unobserve(&mut self, _target: &FakeElement) {
            self.calls.borrow_mut().push(Call::Unobserve);
        }

        fn disconnect(&mut self) {
            self.calls.borrow_mut().push(Call::Disconnect);
        }
    }

    #[derive(Clone, Debug, Default)]
    struct FakeTimer {
        scheduled: Rc<RefCell<Vec<Duration>>>,
        clears: Rc<Cell<u32>>,
    }

    impl Timer for FakeTimer {
        fn schedule(&mut self, delay: Duration) {
            self.scheduled.borrow_mut().push(delay);
        }

        fn clear(&mut self) {
            self.clears.set(self.clears.get() + 1);
        }
    }

    type Session = TriggerSession<FakeElement, FakeObserver, FakeTimer>;

    struct Harness {
        el: FakeElement,
        observer: FakeObserver,
        timer: FakeTimer,
        session: Session,
    }

    fn harness(style: &str, options: &AnimateOptions) -> Harness {
        let el = FakeElement::with_style(style);
        let observer = FakeObserver::default();
        let timer = FakeTimer::default();
        let mut session = Session::new(Some(el.clone()), options, timer.clone());
        let connected = observer.clone();
        session.start(move || Some(connected));
        Harness {
            el,
            observer,
            timer,
            session,
        }
    }

    impl Harness {
        fn deliver(&mut self, visible: bool) {
            let entry = VisibilityEntry::new(self.el.clone(), visible);
            self.session.on_visibility(&[entry]);
        }

        fn calls(&self) -> Vec<Call> {
            self.observer.calls.borrow().clone()
        }
    }

    #[test]
    fn base_style_strips_animation_declarations() {
        let h = harness("color:red;animation-name:bounce;", &AnimateOptions::default());
        assert_eq!(h.session.base_style(), "color:red;");
        assert!(
            h.session.animation_style().ends_with("color:red;"),
            "base appended"
        );
    }

    #[test]
    fn one_shot_animates_then_restores() {
        let options = AnimateOptions::default().with_duration("500ms");
        let mut h = harness("color:red;", &options);
        assert_eq!(h.session.phase(), Phase::Subscribed);
        assert_eq!(h.calls(), vec![Call::Observe]);
        assert_eq!(h.el.style().as_deref(), Some("color:red;"), "untouched");

        h.deliver(false);
        assert_eq!(h.session.phase(), Phase::Subscribed, "hidden is ignored");
        assert_eq!(h.el.writes.get(), 0);

        h.deliver(true);
        assert_eq!(h.session.phase(), Phase::Animating);
        assert_eq!(h.el.style().as_deref(), Some(h.session.animation_style()));
        assert_eq!(*h.timer.scheduled.borrow(), vec![Duration::from_millis(500)]);

        h.session.on_timer_fired();
        assert_eq!(h.session.phase(), Phase::Finished);
        assert_eq!(h.el.style().as_deref(), Some("color:red;"));
        assert_eq!(h.calls(), vec![Call::Observe, Call::Unobserve]);

        // Terminal: later transitions do nothing.
        let writes = h.el.writes.get();
        h.deliver(true);
        h.deliver(false);
        h.session.on_timer_fired();
        assert_eq!(h.el.writes.get(), writes, "no writes after finishing");
        assert_eq!(h.session.phase(), Phase::Finished);
    }

    #[test]
    fn one_shot_ignores_repeat_visibility_while_animating() {
        let mut h = harness("", &AnimateOptions::default());
        h.deliver(true);
        h.deliver(false);
        h.deliver(true);
        assert_eq!(h.session.phase(), Phase::Animating);
        assert_eq!(h.timer.scheduled.borrow().len(), 1, "scheduled once");
        assert_eq!(h.el.writes.get(), 1);
    }

    #[test]
    fn continuous_toggles_without_timer() {
        let options = AnimateOptions::default().with_once(false);
        let mut h = harness("margin: 0;", &options);
        let animation = h.session.animation_style().to_string();

        h.deliver(true);
        assert_eq!(h.el.style().as_deref(), Some(animation.as_str()));
        assert_eq!(h.session.phase(), Phase::Animating);
        h.deliver(false);
        assert_eq!(h.el.style().as_deref(), Some("margin: 0;"));
        assert_eq!(h.session.phase(), Phase::Hidden);
        h.deliver(true);
        assert_eq!(h.el.style().as_deref(), Some(animation.as_str()));

        assert!(h.timer.scheduled.borrow().is_empty(), "no timer");
        h.session.on_timer_fired();
        assert_eq!(h.session.phase(), Phase::Animating, "timer is ignored");
        assert_eq!(h.calls(), vec![Call::Observe]);
    }

    #[test]
    fn continuous_processes_batch_in_order() {
        let options = AnimateOptions::default().with_once(false);
        let mut h = harness("top: 0;", &options);
        let batch = [
            VisibilityEntry::new(h.el.clone(), true),
            VisibilityEntry::new(h.el.clone(), false),
        ];
        h.session.on_visibility(&batch);
        assert_eq!(h.el.writes.get(), 2);
        assert_eq!(h.el.style().as_deref(), Some("top: 0;"), "last entry wins");
    }

    #[test]
    fn infinite_applies_immediately_without_observer() {
        let el = FakeElement::with_style("color:blue;animation-name:spin;");
        let options = AnimateOptions::default().with_infinite(true);
        let mut session = Session::new(Some(el.clone()), &options, FakeTimer::default());
        let mut connected = false;
        session.start(|| {
            connected = true;
            None
        });
        assert!(!connected, "infinite sessions never observe");
        assert_eq!(session.phase(), Phase::Infinite);
        let style = el.style().unwrap_or_default();
        assert!(style.contains("animation-iteration-count: infinite;"), "{style}");
        assert!(style.ends_with("color:blue;"), "{style}");

        session.dispose();
        assert_eq!(el.style().as_deref(), Some("color:blue;"));
        assert_eq!(session.phase(), Phase::Disposed);
    }

    #[test]
    fn dispose_is_idempotent() {
        let mut h = harness("", &AnimateOptions::default());
        h.deliver(true);
        h.session.dispose();
        assert_eq!(
            h.calls(),
            vec![Call::Observe, Call::Unobserve, Call::Disconnect]
        );
        assert_eq!(h.timer.clears.get(), 1);
        assert!(!h.session.is_observing(), "registration released");

        h.session.dispose();
        assert_eq!(h.calls().len(), 3, "no duplicate teardown");
        assert_eq!(h.timer.clears.get(), 1);

        let writes = h.el.writes.get();
        h.session.on_timer_fired();
        h.deliver(true);
        assert_eq!(h.el.writes.get(), writes, "disposed sessions are inert");
    }

    #[test]
    fn dispose_leaves_animation_style_in_place() {
        let mut h = harness("color:red;", &AnimateOptions::default());
        h.deliver(true);
        h.session.dispose();
        assert_eq!(h.el.style().as_deref(), Some(h.session.animation_style()));
    }

    #[test]
    fn infinite_dispose_restores_once() {
        let el = FakeElement::with_style("");
        let options = AnimateOptions::default().with_infinite(true);
        let mut session = Session::new(Some(el.clone()), &options, FakeTimer::default());
        session.start(|| None);
        session.dispose();
        session.dispose();
        assert_eq!(el.writes.get(), 2, "one apply, one restore");
    }

    #[test]
    fn missing_element_is_tolerated() {
        let observer = FakeObserver::default();
        let timer = FakeTimer::default();
        let mut session = Session::new(None, &AnimateOptions::default(), timer.clone());
        let connected = observer.clone();
        session.start(move || Some(connected));
        assert_eq!(session.base_style(), "");
        assert!(observer.calls.borrow().is_empty(), "nothing to observe");

        session.on_timer_fired();
        session.dispose();
        assert_eq!(*observer.calls.borrow(), vec![Call::Disconnect]);
        assert_eq!(session.phase(), Phase::Disposed);
    }

    #[test]
    fn missing_element_infinite_is_noop() {
        let options = AnimateOptions::default().with_infinite(true);
        let mut session = Session::new(None, &options, FakeTimer::default());
        session.start(|| None);
        session.dispose();
        assert_eq!(session.phase(), Phase::Disposed);
    }

    #[test]
    fn malformed_duration_falls_back_to_default_delay() {
        let options = AnimateOptions::default().with_duration("soon");
        let mut h = harness("", &options);
        assert_eq!(h.session.delay(), DEFAULT_DELAY);
        h.deliver(true);
        assert_eq!(*h.timer.scheduled.borrow(), vec![DEFAULT_DELAY]);
        assert!(
            h.session.animation_style().contains("animation-duration: soon;"),
            "literal passed through"
        );
    }

    #[test]
    fn start_twice_is_noop() {
        let mut h = harness("", &AnimateOptions::default());
        h.session.start(|| Some(FakeObserver::default()));
        assert_eq!(h.calls(), vec![Call::Observe]);
    }

    #[test]
    fn dispose_before_start() {
        let mut session = Session::new(None, &AnimateOptions::default(), FakeTimer::default());
        session.dispose();
        session.start(|| Some(FakeObserver::default()));
        assert_eq!(session.phase(), Phase::Disposed, "cannot restart");
    }

    #[test]
    fn options_select_mode() {
        assert_eq!(AnimateOptions::default().mode(), SessionMode::OneShot);
        assert_eq!(
            AnimateOptions::default().with_once(false).mode(),
            SessionMode::Continuous
        );
        assert_eq!(
            AnimateOptions::default()
                .with_once(false)
                .with_infinite(true)
                .mode(),
            SessionMode::Infinite
        );
    }
}
