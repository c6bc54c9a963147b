// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS time literals.
//!
//! [`parse_css_time`] converts the `<time>` values accepted by
//! `animation-duration` (`"1s"`, `"0.5s"`, `"250ms"`, `"1e3ms"`) into a
//! [`Duration`] rounded to whole milliseconds, which is the resolution of
//! browser timers.

use core::fmt;
use core::time::Duration;

/// The default animation duration literal.
pub const DEFAULT_DURATION: &str = "1s";

/// The default animation duration, matching [`DEFAULT_DURATION`].
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Errors from [`parse_css_time`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseTimeError {
    /// The literal was empty or only whitespace.
    Empty,
    /// The literal did not end in `s` or `ms`.
    MissingUnit,
    /// The numeric part was not a finite, non-negative number.
    InvalidNumber,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty time literal"),
            Self::MissingUnit => f.write_str("time literal must end in `s` or `ms`"),
            Self::InvalidNumber => f.write_str("time literal has an invalid number"),
        }
    }
}

impl core::error::Error for ParseTimeError {}

/// Parses a CSS time literal into a millisecond-resolution [`Duration`].
///
/// The number is a non-negative CSS `<number>`: digits with an optional
/// fraction, an optional leading `+`, and an optional `e`/`E` exponent with
/// its own sign. Surrounding whitespace is ignored. Fractional values round
/// to the nearest millisecond (`"0.0005s"` is 1 ms).
///
/// # Errors
///
/// Returns [`ParseTimeError`] if the literal is empty, lacks an `s`/`ms`
/// unit, or carries a negative or non-numeric value.
pub fn parse_css_time(literal: &str) -> Result<Duration, ParseTimeError> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Err(ParseTimeError::Empty);
    }

    let (number, scale) = if let Some(number) = literal.strip_suffix("ms") {
        (number, 1.0)
    } else if let Some(number) = literal.strip_suffix('s') {
        (number, 1000.0)
    } else {
        return Err(ParseTimeError::MissingUnit);
    };

    // `f64::from_str` accepts "inf" and "NaN", which CSS does not.
    if !is_css_number(number) {
        return Err(ParseTimeError::InvalidNumber);
    }
    let value: f64 = number.parse().map_err(|_| ParseTimeError::InvalidNumber)?;

    let millis = value * scale;
    if !millis.is_finite() || millis > u64::MAX as f64 {
        return Err(ParseTimeError::InvalidNumber);
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is finite, non-negative and bounded above"
    )]
    let rounded = (millis + 0.5) as u64;
    Ok(Duration::from_millis(rounded))
}

fn is_css_number(number: &str) -> bool {
    let (mantissa, exponent) = match number.find(['e', 'E']) {
        Some(at) => (&number[..at], Some(&number[at + 1..])),
        None => (number, None),
    };
    let mantissa = mantissa.strip_prefix('+').unwrap_or(mantissa);
    let mantissa_ok = mantissa.bytes().any(|b| b.is_ascii_digit())
        && mantissa.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    let exponent_ok = exponent.is_none_or(|e| {
        let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });
    mantissa_ok && exponent_ok
}
