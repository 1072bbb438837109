// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning for a [`SnapViewfinder`](crate::SnapViewfinder).
///
/// Values are normalized when handed to
/// [`SnapViewfinder::with_config`](crate::SnapViewfinder::with_config), so
/// any combination is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewfinderConfig {
    /// Scale multiplier for one zoom notch. Must be finite and above `1`.
    pub zoom_step: f32,
    /// Smallest allowed scale. Always kept strictly positive.
    pub min_scale: f32,
    /// Largest allowed scale.
    pub max_scale: f32,
    /// Initial grid size in world units; `0` disables snapping.
    pub grid_size: f32,
}

impl ViewfinderConfig {
    /// Default multiplier for one zoom notch.
    pub const DEFAULT_ZOOM_STEP: f32 = 1.1;
    /// Default grid size in world units.
    pub const DEFAULT_GRID_SIZE: f32 = 0.5;

    /// Returns a copy with the invariants enforced:
    /// - `min_scale <= max_scale` (swapped when inverted),
    /// - `min_scale > 0` (raised to [`f32::MIN_POSITIVE`]),
    /// - `zoom_step > 1` so that positive deltas zoom in: a step in `(0, 1)`
    ///   is replaced by its reciprocal, anything else falls back to the
    ///   default step.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (mut min_scale, mut max_scale) = if self.min_scale <= self.max_scale {
            (self.min_scale, self.max_scale)
        } else {
            (self.max_scale, self.min_scale)
        };
        if min_scale.is_nan() || min_scale <= 0.0 {
            min_scale = f32::MIN_POSITIVE;
        }
        if max_scale.is_nan() || max_scale < min_scale {
            max_scale = min_scale;
        }
        let zoom_step = normalize_zoom_step(self.zoom_step);
        Self {
            zoom_step,
            min_scale,
            max_scale,
            grid_size: self.grid_size,
        }
    }
}

fn normalize_zoom_step(step: f32) -> f32 {
    let step = if step > 0.0 && step < 1.0 {
        1.0 / step
    } else {
        step
    };
    if step.is_finite() && step > 1.0 {
        step
    } else {
        ViewfinderConfig::DEFAULT_ZOOM_STEP
    }
}

impl Default for ViewfinderConfig {
    fn default() -> Self {
        Self {
            zoom_step: Self::DEFAULT_ZOOM_STEP,
            min_scale: 1e-3,
            max_scale: 1e3,
            grid_size: Self::DEFAULT_GRID_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewfinderConfig;

    #[test]
    fn default_is_already_normal() {
        let cfg = ViewfinderConfig::default();
        assert_eq!(cfg.normalized(), cfg);
    }

    #[test]
    fn inverted_and_non_positive_limits_are_fixed() {
        let cfg = ViewfinderConfig {
            zoom_step: -2.0,
            min_scale: 5.0,
            max_scale: -1.0,
            grid_size: 1.0,
        }
        .normalized();
        assert_eq!(cfg.min_scale, f32::MIN_POSITIVE);
        assert_eq!(cfg.max_scale, 5.0);
        assert_eq!(cfg.zoom_step, ViewfinderConfig::DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn nan_limits_collapse_to_positive_minimum() {
        let cfg = ViewfinderConfig {
            zoom_step: f32::NAN,
            min_scale: f32::NAN,
            max_scale: f32::NAN,
            grid_size: 0.5,
        }
        .normalized();
        assert!(cfg.min_scale > 0.0);
        assert!(cfg.max_scale >= cfg.min_scale);
        assert!(cfg.zoom_step.is_finite());
    }

    #[test]
    fn zoom_step_always_grows_the_scale() {
        let step = |zoom_step| {
            ViewfinderConfig {
                zoom_step,
                ..ViewfinderConfig::default()
            }
            .normalized()
            .zoom_step
        };
        assert_eq!(step(0.5), 2.0);
        assert_eq!(step(1.25), 1.25);
        assert_eq!(step(1.0), ViewfinderConfig::DEFAULT_ZOOM_STEP);
        assert_eq!(step(0.0), ViewfinderConfig::DEFAULT_ZOOM_STEP);
        assert_eq!(step(f32::INFINITY), ViewfinderConfig::DEFAULT_ZOOM_STEP);
        // The reciprocal of a subnormal step overflows.
        assert_eq!(step(1e-45), ViewfinderConfig::DEFAULT_ZOOM_STEP);
    }
}
