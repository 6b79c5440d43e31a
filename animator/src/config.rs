// overlap/animator/src/config.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Options that control how the overlap effect is driven and how strong it is.
//!
//! The options deserialize from camel-cased JSON. Every field is optional; missing fields take
//! the values of `OverlapConfig::default()`, which is the scroll-driven preset.

use crate::error::ConfigError;
use log::LevelFilter;
use std::time::Duration;

pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 900.0;
pub const DEFAULT_NAV_THRESHOLD: f64 = 0.6;
pub const DEFAULT_PAGING_COOLDOWN_MS: u64 = 850;

/// What drives the animation loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveMode {
    /// Frames are requested on demand, coalesced to one per scroll/resize burst.
    Scroll,
    /// Frames run continuously and the eased pointer position pulls incoming sections.
    Pointer,
}

/// The frame that section offsets and the viewport height are measured against.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementFrame {
    /// The scrolling container's top edge and `clientHeight`.
    Container,
    /// The window's top edge and `innerHeight`.
    Window,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PagingConfig {
    /// Whether wheel and keyboard input page one section at a time.
    pub enabled: bool,
    /// How long new input is dropped after a transition starts.
    pub cooldown_ms: u64,
    /// Minimum absolute wheel `deltaY` that counts as a paging gesture.
    pub wheel_threshold: f64,
}

impl Default for PagingConfig {
    fn default() -> PagingConfig {
        PagingConfig {
            enabled: false,
            cooldown_ms: DEFAULT_PAGING_COOLDOWN_MS,
            wheel_threshold: 10.0,
        }
    }
}

impl PagingConfig {
    #[inline]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlapConfig {
    pub drive: DriveMode,
    pub measurement: MeasurementFrame,
    /// Viewports narrower than this (in logical pixels) get no overlap styling at all.
    pub mobile_breakpoint: f32,
    /// Opacity removed from a fully covered section.
    pub max_dim: f32,
    /// Scale removed from a fully covered section.
    pub max_scale_reduction: f32,
    /// Upward translation of a fully covered section, in percent of its height.
    pub covered_lift: f32,
    /// Fraction of the viewport height that the pointer may pull an incoming section forward by.
    pub pull_strength: f32,
    /// Per-frame easing factor applied to the pointer position, in `(0, 1]`.
    pub pointer_ease: f32,
    /// Incoming offsets at or below this many pixels count as fully arrived.
    pub arrival_threshold_px: f32,
    /// Visible fraction of a section at which it becomes the active navigation target.
    pub nav_threshold: f64,
    /// Toggle the `animate` class on sections as they enter and leave view.
    pub animate_on_view: bool,
    /// Write `will-change` hints on sections that are moving.
    pub will_change_hints: bool,
    pub paging: PagingConfig,
    pub log_level: LevelFilter,
}

impl Default for OverlapConfig {
    #[inline]
    fn default() -> OverlapConfig {
        OverlapConfig::scroll_driven()
    }
}

impl OverlapConfig {
    /// Scroll-linked preset: coalesced frames, mild dim, no pointer pull.
    pub fn scroll_driven() -> OverlapConfig {
        OverlapConfig {
            drive: DriveMode::Scroll,
            measurement: MeasurementFrame::Container,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            max_dim: 0.12,
            max_scale_reduction: 0.005,
            covered_lift: 0.0,
            pull_strength: 0.0,
            pointer_ease: 0.12,
            arrival_threshold_px: 0.5,
            nav_threshold: DEFAULT_NAV_THRESHOLD,
            animate_on_view: true,
            will_change_hints: true,
            paging: PagingConfig::default(),
            log_level: LevelFilter::Info,
        }
    }

    /// Pointer-linked preset: continuous frames, stronger dim and a small parallax lift.
    pub fn pointer_driven() -> OverlapConfig {
        OverlapConfig {
            drive: DriveMode::Pointer,
            max_dim: 0.18,
            max_scale_reduction: 0.0065,
            covered_lift: 1.5,
            pull_strength: 0.12,
            pointer_ease: 0.08,
            ..OverlapConfig::scroll_driven()
        }
    }

    /// Parses a partial JSON override of the default options and validates the result.
    pub fn from_json(json: &str) -> Result<OverlapConfig, ConfigError> {
        let config: OverlapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("mobileBreakpoint", self.mobile_breakpoint as f64, 0.0, f64::MAX,
                    "a non-negative pixel width")?;
        check_range("maxDim", self.max_dim as f64, 0.0, 1.0, "a value in [0, 1]")?;
        check_range("maxScaleReduction", self.max_scale_reduction as f64, 0.0, 0.5,
                    "a value in [0, 0.5]")?;
        check_range("coveredLift", self.covered_lift as f64, 0.0, 100.0,
                    "a percentage in [0, 100]")?;
        check_range("pullStrength", self.pull_strength as f64, 0.0, 1.0, "a value in [0, 1]")?;
        check_range("arrivalThresholdPx", self.arrival_threshold_px as f64, 0.0, f64::MAX,
                    "a non-negative pixel distance")?;
        check_range("navThreshold", self.nav_threshold, 0.0, 1.0, "a value in [0, 1]")?;
        check_range("paging.wheelThreshold", self.paging.wheel_threshold, 0.0, f64::MAX,
                    "a non-negative wheel delta")?;

        // Zero would freeze the pointer forever.
        let ease = self.pointer_ease as f64;
        if !(ease > 0.0 && ease <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "pointerEase",
                value: ease,
                expected: "a value in (0, 1]",
            });
        }

        if self.paging.enabled && self.paging.cooldown_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "paging.cooldownMs",
                value: 0.0,
                expected: "a positive number of milliseconds",
            });
        }

        debug!("overlap config validated: {:?}", self);
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64, expected: &'static str)
               -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, expected })
    }
}

#[cfg(test)]
mod test {
    use super::{DriveMode, MeasurementFrame, OverlapConfig};
    use crate::error::ConfigError;
    use log::LevelFilter;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(OverlapConfig::scroll_driven().validate(), Ok(()));
        assert_eq!(OverlapConfig::pointer_driven().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = OverlapConfig::from_json(
            r#"{ "drive": "pointer", "measurement": "window", "maxDim": 0.18,
                 "paging": { "enabled": true }, "logLevel": "debug" }"#,
        ).unwrap();
        assert_eq!(config.drive, DriveMode::Pointer);
        assert_eq!(config.measurement, MeasurementFrame::Window);
        assert_eq!(config.max_dim, 0.18);
        assert!(config.paging.enabled);
        assert_eq!(config.paging.cooldown_ms, 850);
        assert_eq!(config.mobile_breakpoint, 900.0);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(OverlapConfig::from_json("{}").unwrap(), OverlapConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        match OverlapConfig::from_json("{ maxDim: }") {
            Err(ConfigError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
        match OverlapConfig::from_json(r#"{ "drive": "sideways" }"#) {
            Err(ConfigError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range() {
        match OverlapConfig::from_json(r#"{ "maxDim": 1.5 }"#) {
            Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, "maxDim"),
            other => panic!("expected maxDim to be rejected, got {:?}", other),
        }
        match OverlapConfig::from_json(r#"{ "pointerEase": 0 }"#) {
            Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, "pointerEase"),
            other => panic!("expected pointerEase to be rejected, got {:?}", other),
        }
        match OverlapConfig::from_json(r#"{ "paging": { "enabled": true, "cooldownMs": 0 } }"#) {
            Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, "paging.cooldownMs"),
            other => panic!("expected paging.cooldownMs to be rejected, got {:?}", other),
        }
    }
}
