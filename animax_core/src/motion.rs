// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyframe animation names.
//!
//! A [`Motion`] selects one of the predefined keyframe animations shipped in
//! the accompanying stylesheet (the animate.css naming scheme). The keyframes
//! themselves live in CSS; this module only knows their names.
//!
//! Any other identifier can be carried with [`Motion::Named`]. Names are never
//! validated: an identifier without matching `@keyframes` simply produces an
//! inert declaration in the browser.

use alloc::string::{String, ToString as _};
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

macro_rules! motions {
    ($($(#[$attr:meta])* $variant:ident => $name:literal,)*) => {
        /// A named keyframe animation.
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub enum Motion {
            $($(#[$attr])* $variant,)*
            /// An identifier outside the catalog, emitted verbatim.
            Named(String),
        }

        impl Motion {
            /// Every catalogued motion, in declaration order.
            pub const CATALOG: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the keyframe identifier used in `animation-name`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $name,)*
                    Self::Named(name) => name,
                }
            }

            /// Looks up a catalogued motion by its keyframe identifier.
            ///
            /// Matching is case-sensitive, like CSS identifiers.
            #[must_use]
            pub fn from_catalog(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

motions! {
    // Attention seekers.
    /// `bounce`
    Bounce => "bounce",
    /// `flash`
    Flash => "flash",
    /// `pulse`
    Pulse => "pulse",
    /// `rubberBand`
    RubberBand => "rubberBand",
    /// `shake`
    Shake => "shake",
    /// `headShake`
    HeadShake => "headShake",
    /// `swing`
    Swing => "swing",
    /// `tada`
    Tada => "tada",
    /// `wobble`
    Wobble => "wobble",
    /// `jello`
    Jello => "jello",
    /// `heartBeat`
    HeartBeat => "heartBeat",

    // Entrances.
    /// `bounceIn`
    BounceIn => "bounceIn",
    /// `bounceInDown`
    BounceInDown => "bounceInDown",
    /// `bounceInLeft`
    BounceInLeft => "bounceInLeft",
    /// `bounceInRight`
    BounceInRight => "bounceInRight",
    /// `bounceInUp`
    BounceInUp => "bounceInUp",
    /// `fadeIn`
    FadeIn => "fadeIn",
    /// `fadeInDown`
    FadeInDown => "fadeInDown",
    /// `fadeInLeft`
    FadeInLeft => "fadeInLeft",
    /// `fadeInRight`
    FadeInRight => "fadeInRight",
    /// `fadeInUp`
    FadeInUp => "fadeInUp",
    /// `flip`
    Flip => "flip",
    /// `flipInX`
    FlipInX => "flipInX",
    /// `flipInY`
    FlipInY => "flipInY",
    /// `lightSpeedIn`, the default motion.
    #[default]
    LightSpeedIn => "lightSpeedIn",
    /// `rotateIn`
    RotateIn => "rotateIn",
    /// `rotateInDownLeft`
    RotateInDownLeft => "rotateInDownLeft",
    /// `rotateInDownRight`
    RotateInDownRight => "rotateInDownRight",
    /// `rotateInUpLeft`
    RotateInUpLeft => "rotateInUpLeft",
    /// `rotateInUpRight`
    RotateInUpRight => "rotateInUpRight",
    /// `jackInTheBox`
    JackInTheBox => "jackInTheBox",
    /// `rollIn`
    RollIn => "rollIn",
    /// `zoomIn`
    ZoomIn => "zoomIn",
    /// `zoomInDown`
    ZoomInDown => "zoomInDown",
    /// `zoomInLeft`
    ZoomInLeft => "zoomInLeft",
    /// `zoomInRight`
    ZoomInRight => "zoomInRight",
    /// `zoomInUp`
    ZoomInUp => "zoomInUp",
    /// `slideInDown`
    SlideInDown => "slideInDown",
    /// `slideInLeft`
    SlideInLeft => "slideInLeft",
    /// `slideInRight`
    SlideInRight => "slideInRight",
    /// `slideInUp`
    SlideInUp => "slideInUp",
}

impl Motion {
    /// Returns `true` if this motion names a keyframe from the catalog.
    ///
    /// A [`Named`](Self::Named) value spelling a catalogued identifier also
    /// counts.
    #[must_use]
    pub fn is_catalogued(&self) -> bool {
        match self {
            Self::Named(name) => Self::from_catalog(name).is_some(),
            _ => true,
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails; unknown identifiers become [`Motion::Named`].
impl FromStr for Motion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_catalog(s).unwrap_or_else(|| Self::Named(s.to_string())))
    }
}

impl From<&str> for Motion {
    fn from(name: &str) -> Self {
        match name.parse() {
            Ok(motion) => motion,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light_speed_in() {
        assert_eq!(Motion::default(), Motion::LightSpeedIn);
        assert_eq!(Motion::default().as_str(), "lightSpeedIn");
    }

    #[test]
    fn catalog_names_round_trip() {
        for motion in Motion::CATALOG {
            let parsed = Motion::from(motion.as_str());
            assert_eq!(&parsed, motion, "catalog entry {motion}");
        }
    }

    #[test]
    fn unknown_names_are_carried_verbatim() {
        let motion = Motion::from("spinAround");
        assert_eq!(motion, Motion::Named("spinAround".to_string()));
        assert_eq!(motion.as_str(), "spinAround");
        assert!(!motion.is_catalogued(), "not in catalog");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Motion::from_catalog("fadeIn"), Some(Motion::FadeIn));
        assert_eq!(Motion::from_catalog("fadein"), None);
    }

    #[test]
    fn named_catalog_spelling_counts_as_catalogued() {
        assert!(
            Motion::Named("zoomIn".to_string()).is_catalogued(),
            "spelled like a catalog entry"
        );
    }
}
