// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Resolved boundary records handed to solid-generation collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Poloidal-plane point (R, Z) [cm].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub r: f64,
    pub z: f64,
}

impl Point {
    pub fn new(r: f64, z: f64) -> Self {
        Point { r, z }
    }

    /// Reflection through the midplane.
    pub fn mirrored(&self) -> Self {
        Point {
            r: self.r,
            z: -self.z,
        }
    }
}

/// One resolved (start, end) interval along a single build direction [cm].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: f64,
    pub end: f64,
}

impl Band {
    pub fn new(start: f64, end: f64) -> Self {
        Band { start, end }
    }

    pub fn from_thickness(start: f64, thickness: f64) -> Self {
        Band {
            start,
            end: start + thickness,
        }
    }

    /// Next band in the stack, starting where this one ends.
    pub fn followed_by(&self, thickness: f64) -> Self {
        Band::from_thickness(self.end, thickness)
    }

    /// Band centred on the midplane with the given full height.
    pub fn symmetric(full_height: f64) -> Self {
        Band {
            start: -0.5 * full_height,
            end: 0.5 * full_height,
        }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Reflection through the midplane; the lower band of a top/bottom pair.
    pub fn mirrored(&self) -> Self {
        Band {
            start: -self.end,
            end: -self.start,
        }
    }

    /// Band grown by `margin` on both sides.
    pub fn grown(&self, margin: f64) -> Self {
        Band {
            start: self.start - margin,
            end: self.end + margin,
        }
    }
}

/// Named layer of the reactor cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    TfInnerLeg,
    VacuumVesselInnerWall,
    InnerShield,
    FirstWall,
    BreederBlanket,
    RearWall,
    DivertorUpper,
    DivertorLower,
    VacuumVesselBody,
    TfCoilOuter,
    PfCoil(usize),
    PfCoilCase(usize),
}

impl LayerKind {
    /// Component name used by the solid-generation collaborator.
    pub fn name(&self) -> String {
        match self {
            LayerKind::TfInnerLeg => "tf_inner_leg".to_string(),
            LayerKind::VacuumVesselInnerWall => "vacuum_vessel_inner_wall".to_string(),
            LayerKind::InnerShield => "inner_shield".to_string(),
            LayerKind::FirstWall => "firstwall".to_string(),
            LayerKind::BreederBlanket => "blanket".to_string(),
            LayerKind::RearWall => "blanket_rear_wall".to_string(),
            LayerKind::DivertorUpper => "divertor_upper".to_string(),
            LayerKind::DivertorLower => "divertor_lower".to_string(),
            LayerKind::VacuumVesselBody => "vacuum_vessel_body".to_string(),
            LayerKind::TfCoilOuter => "tf_coil_outer".to_string(),
            LayerKind::PfCoil(i) => format!("pf_coil_{i}"),
            LayerKind::PfCoilCase(i) => format!("pf_coil_case_{i}"),
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Resolved boundary record of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub start_radius: f64,
    pub end_radius: f64,
    pub start_height: f64,
    pub end_height: f64,
}

impl Layer {
    pub fn from_bands(kind: LayerKind, radial: Band, vertical: Band) -> Self {
        Layer {
            kind,
            start_radius: radial.start,
            end_radius: radial.end,
            start_height: vertical.start,
            end_height: vertical.end,
        }
    }

    pub fn radial(&self) -> Band {
        Band::new(self.start_radius, self.end_radius)
    }

    pub fn vertical(&self) -> Band {
        Band::new(self.start_height, self.end_height)
    }
}

/// Dimension that the resolver may raise to its geometric minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampedQuantity {
    DivertorHeight,
    DivertorRadialThickness,
}

impl fmt::Display for ClampedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClampedQuantity::DivertorHeight => f.write_str("divertor_height"),
            ClampedQuantity::DivertorRadialThickness => f.write_str("divertor_radial_thickness"),
        }
    }
}

/// Recoverable diagnostic: an input dimension was below its minimum and was raised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampedDimension {
    pub quantity: ClampedQuantity,
    /// Value supplied by the caller [cm].
    pub requested: f64,
    /// Value the build continued with [cm].
    pub applied: f64,
}

impl ClampedDimension {
    pub fn correction(&self) -> f64 {
        self.applied - self.requested
    }
}

impl fmt::Display for ClampedDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} raised from {:.2} to minimum {:.2} cm",
            self.quantity, self.requested, self.applied
        )
    }
}
