// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Radial Build
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial build from the machine axis outward.
//!
//! Two stacks are specified independently: the centre column (bore, TF leg,
//! vessel wall, shield) grows from the axis, the wall stack (first wall,
//! breeder, rear wall) grows from the plasma. The leg-to-vessel gap makes them
//! meet. The outboard divertor and vessel body hang off the plasma tip radius.

use crate::envelope::PlasmaEnvelope;
use fusion_types::config::LayerThicknesses;
use fusion_types::error::{check_thickness, FusionResult};
use fusion_types::state::{Band, ClampedDimension, ClampedQuantity};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Offset of a conformal wall shell from the plasma boundary [cm].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellOffset {
    /// Offset at the equatorial midplane.
    pub midplane: f64,
    /// Offset above and below the plasma tips.
    pub poles: f64,
    pub thickness: f64,
}

/// Conformal blanket shells, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlanketShells {
    pub first_wall: ShellOffset,
    pub breeder: ShellOffset,
    pub rear_wall: ShellOffset,
}

impl BlanketShells {
    /// Shells keep the plasma gap at the midplane and double it at the poles.
    pub fn from_gap(wall_to_plasma_gap: f64, thicknesses: &LayerThicknesses) -> Self {
        let shell = |midplane: f64, thickness: f64| ShellOffset {
            midplane,
            poles: midplane + wall_to_plasma_gap,
            thickness,
        };
        let first_wall = shell(wall_to_plasma_gap, thicknesses.first_wall);
        let breeder = shell(
            first_wall.midplane + thicknesses.first_wall,
            thicknesses.breeder_blanket,
        );
        let rear_wall = shell(
            breeder.midplane + thicknesses.breeder_blanket,
            thicknesses.rear_wall,
        );
        BlanketShells {
            first_wall,
            breeder,
            rear_wall,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialBuild {
    pub inner_bore: Band,
    pub tf_leg: Band,
    pub leg_to_vessel_gap: f64,
    pub vv_inner: Band,
    pub shield: Band,
    /// Inboard distance from the shield to the plasma.
    pub blanket_offset: f64,
    pub full_outer_blanket_radius: f64,
    /// Divertor radial thickness after the floor correction.
    pub divertor_radial_thickness: f64,
    pub divertor: Band,
    pub vv_body: Band,
    pub shells: BlanketShells,
    pub clamped: Option<ClampedDimension>,
}

#[derive(Debug, Clone, Copy)]
pub struct RadialBuildResolver {
    pub wall_to_plasma_gap: f64,
    pub inner_bore_radius: f64,
    pub low_aspect: bool,
}

impl RadialBuildResolver {
    pub fn new(wall_to_plasma_gap: f64, inner_bore_radius: f64, low_aspect: bool) -> Self {
        RadialBuildResolver {
            wall_to_plasma_gap,
            inner_bore_radius,
            low_aspect,
        }
    }

    /// Wall stack width seen on one side of the plasma. Standard-aspect
    /// machines carry a double-thickness inboard blanket.
    fn effective_blanket_width(&self, thicknesses: &LayerThicknesses) -> f64 {
        if self.low_aspect {
            thicknesses.blanket_width()
        } else {
            2.0 * thicknesses.blanket_width()
        }
    }

    pub fn resolve(
        &self,
        envelope: &PlasmaEnvelope,
        thicknesses: &LayerThicknesses,
    ) -> FusionResult<RadialBuild> {
        thicknesses.validate()?;
        check_thickness("wall_to_plasma_gap", self.wall_to_plasma_gap)?;
        check_thickness("inner_bore_radius", self.inner_bore_radius)?;

        let inner_bore = Band::new(0.0, self.inner_bore_radius);
        let tf_leg = inner_bore.followed_by(thicknesses.inner_tf_leg);
        let leg_to_vessel_gap = thicknesses.leg_to_vessel_gap();
        let vv_inner =
            Band::from_thickness(tf_leg.end + leg_to_vessel_gap, thicknesses.vacuum_vessel);
        let shield = vv_inner.followed_by(thicknesses.central_shield);

        let blanket_offset = if self.low_aspect {
            self.wall_to_plasma_gap
        } else {
            self.wall_to_plasma_gap + thicknesses.blanket_width()
        };

        let full_outer_blanket_radius = envelope.outer_equatorial_radius
            + self.wall_to_plasma_gap
            + self.effective_blanket_width(thicknesses);
        let tip_radius = envelope.high_point.r;
        let required = full_outer_blanket_radius - tip_radius;
        let mut divertor_radial_thickness = thicknesses.divertor_radial;
        let mut clamped = None;
        if divertor_radial_thickness < required {
            warn!(
                requested = divertor_radial_thickness,
                minimum = required,
                "divertor radial thickness too small, raised to minimum"
            );
            clamped = Some(ClampedDimension {
                quantity: ClampedQuantity::DivertorRadialThickness,
                requested: divertor_radial_thickness,
                applied: required,
            });
            divertor_radial_thickness = required;
        }

        let divertor = Band::from_thickness(tip_radius, divertor_radial_thickness);
        let vv_body = divertor.followed_by(thicknesses.vacuum_vessel);

        Ok(RadialBuild {
            inner_bore,
            tf_leg,
            leg_to_vessel_gap,
            vv_inner,
            shield,
            blanket_offset,
            full_outer_blanket_radius,
            divertor_radial_thickness,
            divertor,
            vv_body,
            shells: BlanketShells::from_gap(self.wall_to_plasma_gap, thicknesses),
            clamped,
        })
    }
}
