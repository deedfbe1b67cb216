// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Envelope
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Extremal points of the plasma cross-section.
//!
//! Uses the Miller-style parameterisation: the vertical tip sits at
//! `z = κ a` and is shifted inward by `δ a`. Triangularity arrives already
//! signed, so a negative-triangularity plasma has its tip outboard of `R`.

use fusion_types::config::ShapeParameters;
use fusion_types::error::{FusionError, FusionResult};
use fusion_types::state::Point;
use serde::{Deserialize, Serialize};

/// Plasma extremal points [cm]. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasmaEnvelope {
    pub inner_equatorial_radius: f64,
    pub outer_equatorial_radius: f64,
    pub high_point: Point,
    pub low_point: Point,
}

fn require_finite(quantity: &'static str, value: f64) -> FusionResult<()> {
    if !value.is_finite() {
        return Err(FusionError::InvalidShape {
            quantity,
            value,
            reason: "must be finite",
        });
    }
    Ok(())
}

impl PlasmaEnvelope {
    pub fn compute(
        major_radius: f64,
        minor_radius: f64,
        elongation: f64,
        triangularity: f64,
    ) -> FusionResult<Self> {
        require_finite("major_radius", major_radius)?;
        require_finite("minor_radius", minor_radius)?;
        require_finite("elongation", elongation)?;
        require_finite("triangularity", triangularity)?;
        if minor_radius <= 0.0 {
            return Err(FusionError::InvalidShape {
                quantity: "minor_radius",
                value: minor_radius,
                reason: "must be positive",
            });
        }
        if elongation <= 0.0 {
            return Err(FusionError::InvalidShape {
                quantity: "elongation",
                value: elongation,
                reason: "must be positive",
            });
        }
        if major_radius <= minor_radius {
            return Err(FusionError::InvalidShape {
                quantity: "major_radius",
                value: major_radius,
                reason: "must exceed minor_radius",
            });
        }

        let high_point = Point::new(
            major_radius - triangularity * minor_radius,
            minor_radius * elongation,
        );
        Ok(PlasmaEnvelope {
            inner_equatorial_radius: major_radius - minor_radius,
            outer_equatorial_radius: major_radius + minor_radius,
            high_point,
            low_point: high_point.mirrored(),
        })
    }

    pub fn from_shape(params: &ShapeParameters) -> FusionResult<Self> {
        Self::compute(
            params.major_radius,
            params.minor_radius,
            params.elongation,
            params.triangularity,
        )
    }

    /// Envelope supplied by an external shape source, e.g. a traced
    /// equilibrium boundary. Only requires an up-down symmetric section with
    /// its upper tip at or above the midplane.
    pub fn from_extrema(
        inner_equatorial_radius: f64,
        outer_equatorial_radius: f64,
        high_point: Point,
    ) -> FusionResult<Self> {
        require_finite("inner_equatorial_radius", inner_equatorial_radius)?;
        require_finite("outer_equatorial_radius", outer_equatorial_radius)?;
        require_finite("high_point.r", high_point.r)?;
        require_finite("high_point.z", high_point.z)?;
        if inner_equatorial_radius < 0.0 {
            return Err(FusionError::InvalidShape {
                quantity: "inner_equatorial_radius",
                value: inner_equatorial_radius,
                reason: "must not cross the machine axis",
            });
        }
        if outer_equatorial_radius <= inner_equatorial_radius {
            return Err(FusionError::InvalidShape {
                quantity: "outer_equatorial_radius",
                value: outer_equatorial_radius,
                reason: "must exceed inner_equatorial_radius",
            });
        }
        if high_point.z < 0.0 {
            return Err(FusionError::InvalidShape {
                quantity: "high_point.z",
                value: high_point.z,
                reason: "must lie at or above the midplane",
            });
        }
        Ok(PlasmaEnvelope {
            inner_equatorial_radius,
            outer_equatorial_radius,
            high_point,
            low_point: high_point.mirrored(),
        })
    }

    pub fn major_radius(&self) -> f64 {
        0.5 * (self.inner_equatorial_radius + self.outer_equatorial_radius)
    }

    pub fn minor_radius(&self) -> f64 {
        0.5 * (self.outer_equatorial_radius - self.inner_equatorial_radius)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.major_radius() / self.minor_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_triangularity_reference() {
        let env = PlasmaEnvelope::compute(250.0, 150.0, 2.0, -0.55).unwrap();
        assert_eq!(env.outer_equatorial_radius, 400.0);
        assert_eq!(env.inner_equatorial_radius, 100.0);
        assert!((env.high_point.z - 300.0).abs() < 1e-12);
        assert!((env.high_point.r - 332.5).abs() < 1e-12);
        assert_eq!(env.low_point.r, env.high_point.r);
        assert_eq!(env.low_point.z, -env.high_point.z);
    }

    #[test]
    fn test_positive_triangularity_tip_inboard() {
        let env = PlasmaEnvelope::compute(620.0, 200.0, 1.7, 0.33).unwrap();
        assert!(env.high_point.r < 620.0);
        assert!((env.aspect_ratio() - 3.1).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_physical_shapes() {
        let cases = [
            (250.0, 0.0, 2.0, "minor_radius"),
            (250.0, -1.0, 2.0, "minor_radius"),
            (250.0, 150.0, 0.0, "elongation"),
            (150.0, 150.0, 2.0, "major_radius"),
            (100.0, 150.0, 2.0, "major_radius"),
        ];
        for (major, minor, kappa, expected) in cases {
            match PlasmaEnvelope::compute(major, minor, kappa, -0.5) {
                Err(FusionError::InvalidShape { quantity, .. }) => assert_eq!(quantity, expected),
                other => panic!("Expected InvalidShape({expected}), got {other:?}"),
            }
        }
        assert!(PlasmaEnvelope::compute(250.0, f64::NAN, 2.0, 0.0).is_err());
    }

    #[test]
    fn test_from_extrema_accepts_flat_envelope() {
        let env = PlasmaEnvelope::from_extrema(100.0, 400.0, Point::new(330.0, 0.0)).unwrap();
        assert_eq!(env.high_point.z, 0.0);
        assert_eq!(env.major_radius(), 250.0);
        assert_eq!(env.minor_radius(), 150.0);
    }

    #[test]
    fn test_from_extrema_rejects_inverted_envelope() {
        assert!(PlasmaEnvelope::from_extrema(400.0, 100.0, Point::new(250.0, 10.0)).is_err());
        assert!(PlasmaEnvelope::from_extrema(100.0, 400.0, Point::new(250.0, -1.0)).is_err());
    }
}
