// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style composition and sanitizing.
//!
//! [`compose`] renders an [`AnimationSpec`] as a run of inline declarations
//! followed by the element's own style. [`sanitize`] removes every
//! animation declaration this module can emit, which recovers the element's
//! base style from whatever is currently in its `style` attribute.
//!
//! Declarations are rendered as `"{property}: {value};"` with nothing in
//! between, so `sanitize(&compose(spec))` leaves exactly the sanitized base
//! style behind.

use alloc::string::String;
use core::fmt::Write as _;

use crate::motion::Motion;
use crate::time::DEFAULT_DURATION;

/// The animation properties owned by this crate, unprefixed and prefixed.
///
/// [`sanitize`] strips exactly these.
pub const ANIMATION_PROPERTIES: [&str; 10] = [
    "animation-name",
    "animation-duration",
    "animation-timing-function",
    "animation-iteration-count",
    "animation-fill-mode",
    "-webkit-animation-name",
    "-webkit-animation-duration",
    "-webkit-animation-timing-function",
    "-webkit-animation-iteration-count",
    "-webkit-animation-fill-mode",
];

/// Timing function applied to every composed animation.
pub const TIMING_FUNCTION: &str = "ease-out";

/// Fill mode applied to every composed animation.
pub const FILL_MODE: &str = "both";

/// Parameters for one composed animation declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Keyframe animation to run.
    pub motion: Motion,
    /// CSS time literal for `animation-duration`. Not validated.
    pub duration: String,
    /// Repeat forever instead of once.
    pub infinite: bool,
    /// Existing inline style to keep after the animation declarations.
    pub style: Option<String>,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            motion: Motion::default(),
            duration: String::from(DEFAULT_DURATION),
            infinite: false,
            style: None,
        }
    }
}

impl AnimationSpec {
    /// Creates a spec for `motion` with the default duration.
    #[must_use]
    pub fn new(motion: impl Into<Motion>) -> Self {
        Self {
            motion: motion.into(),
            ..Self::default()
        }
    }

    /// Sets the duration literal.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets whether the animation repeats forever.
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Sets the base style appended after the animation declarations.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Renders `spec` as an inline style string.
///
/// The result always declares `animation-name`, `animation-timing-function`,
/// `animation-duration` and `animation-fill-mode` (each with a `-webkit-`
/// twin), plus `animation-iteration-count: infinite` when
/// [`AnimationSpec::infinite`] is set. The sanitized base style follows, so
/// its own declarations win under the cascade.
#[must_use]
pub fn compose(spec: &AnimationSpec) -> String {
    let mut out = String::new();
    let motion = spec.motion.as_str();
    declare(&mut out, "animation-name", motion);
    declare(&mut out, "animation-timing-function", TIMING_FUNCTION);
    declare(&mut out, "animation-duration", &spec.duration);
    declare(&mut out, "animation-fill-mode", FILL_MODE);
    if spec.infinite {
        declare(&mut out, "animation-iteration-count", "infinite");
    }
    out.push_str(&sanitize(spec.style.as_deref()));
    out
}

/// Writes the `-webkit-` declaration and then the standard one.
fn declare(out: &mut String, property: &str, value: &str) {
    let _ = write!(out, "-webkit-{property}: {value};{property}: {value};");
}

/// Removes every [`ANIMATION_PROPERTIES`] declaration from `style`.
///
/// A match is a property name, a `:`, one or more characters other than `;`,
/// and an optional trailing `;`. Everything else is copied through
/// unchanged. `None` yields an empty string.
///
/// Matching is textual and case-sensitive. It does not parse CSS, so a
/// property name that appears inside another value (for example
/// `content: "animation-name: x"`) is removed as well.
#[must_use]
pub fn sanitize(style: Option<&str>) -> String {
    let Some(style) = style else {
        return String::new();
    };

    let mut out = String::with_capacity(style.len());
    let mut rest = style;
    while !rest.is_empty() {
        if let Some(len) = declaration_len(rest) {
            rest = &rest[len..];
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// Returns the byte length of the animation declaration at the start of
/// `s`, if there is one.
fn declaration_len(s: &str) -> Option<usize> {
    ANIMATION_PROPERTIES.iter().find_map(|property| {
        let after_name = s.strip_prefix(property)?.strip_prefix(':')?;
        let value_len = after_name.find(';').unwrap_or(after_name.len());
        if value_len == 0 {
            return None;
        }
        let terminator = usize::from(after_name[value_len..].starts_with(';'));
        Some(property.len() + 1 + value_len + terminator)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn sanitize_strips_animation_name() {
        let base = sanitize(Some("color:red;animation-name:bounce;"));
        assert_eq!(base, "color:red;");
    }

    #[test]
    fn sanitize_none_is_empty() {
        assert_eq!(sanitize(None), "");
    }

    #[test]
    fn sanitize_strips_prefixed_declarations_whole() {
        let style = "-webkit-animation-duration: 2s;margin: 0;-webkit-animation-fill-mode:both";
        assert_eq!(sanitize(Some(style)), "margin: 0;");
    }

    #[test]
    fn sanitize_keeps_whitespace_between_declarations() {
        let style = "color: red; animation-duration: 1s; top: 0;";
        assert_eq!(sanitize(Some(style)), "color: red;  top: 0;");
    }

    #[test]
    fn sanitize_requires_a_value() {
        // An empty value is not a declaration match.
        assert_eq!(
            sanitize(Some("animation-name:;color:red;")),
            "animation-name:;color:red;"
        );
    }

    #[test]
    fn sanitize_is_case_sensitive() {
        let style = "Animation-Name: x;";
        assert_eq!(sanitize(Some(style)), style);
    }

    #[test]
    fn sanitize_matches_inside_other_values() {
        // Documented limitation: matching is textual.
        let style = "content: 'animation-name: x';color: red;";
        assert_eq!(sanitize(Some(style)), "content: 'color: red;");
    }

    #[test]
    fn sanitize_leaves_shorthand_alone() {
        let style = "animation: spin 1s linear;";
        assert_eq!(sanitize(Some(style)), style);
    }

    #[test]
    fn sanitize_handles_multibyte_text() {
        let style = "content: \"→\";animation-name: fadeIn;font-family: Ünïcode;";
        assert_eq!(
            sanitize(Some(style)),
            "content: \"→\";font-family: Ünïcode;"
        );
    }

    #[test]
    fn compose_defaults() {
        let out = compose(&AnimationSpec::default());
        assert_eq!(
            out,
            "-webkit-animation-name: lightSpeedIn;animation-name: lightSpeedIn;\
             -webkit-animation-timing-function: ease-out;animation-timing-function: ease-out;\
             -webkit-animation-duration: 1s;animation-duration: 1s;\
             -webkit-animation-fill-mode: both;animation-fill-mode: both;"
        );
    }

    #[test]
    fn compose_infinite_adds_iteration_count() {
        let out = compose(&AnimationSpec::new(Motion::Pulse).with_infinite(true));
        assert_eq!(count(&out, "-webkit-animation-iteration-count: infinite;"), 1);
        assert_eq!(count(&out, "animation-iteration-count: infinite;"), 2);
    }

    #[test]
    fn compose_finite_has_no_iteration_count() {
        let out = compose(&AnimationSpec::new(Motion::Pulse));
        assert_eq!(count(&out, "iteration-count"), 0);
    }

    #[test]
    fn compose_appends_sanitized_base_style() {
        let spec = AnimationSpec::new(Motion::FadeInUp)
            .with_duration("300ms")
            .with_style("color: blue;animation-name: old;");
        let out = compose(&spec);
        assert!(out.ends_with("color: blue;"), "base style last: {out}");
        assert_eq!(count(&out, "-webkit-animation-name: "), 1);
        assert_eq!(count(&out, ";animation-name: fadeInUp;"), 1);
        assert_eq!(count(&out, "old"), 0);
    }

    #[test]
    fn compose_passes_unknown_values_through() {
        let spec = AnimationSpec::new("noSuchKeyframes").with_duration("soon");
        let out = compose(&spec);
        assert!(out.contains("animation-name: noSuchKeyframes;"), "{out}");
        assert!(out.contains("animation-duration: soon;"), "{out}");
    }

    #[test]
    fn sanitize_undoes_compose() {
        let spec = AnimationSpec::new(Motion::ZoomIn)
            .with_infinite(true)
            .with_style("opacity: 0.5;");
        assert_eq!(sanitize(Some(&compose(&spec))), "opacity: 0.5;");
        assert_eq!(
            sanitize(Some(&compose(&AnimationSpec::default()))),
            "".to_string()
        );
    }
}
