// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Vertical Build
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Vertical build above the plasma tip; the lower half is its mirror.

use crate::envelope::PlasmaEnvelope;
use fusion_types::config::LayerThicknesses;
use fusion_types::error::{check_thickness, FusionError, FusionResult};
use fusion_types::state::{Band, ClampedDimension, ClampedQuantity};
use tracing::warn;

/// Upper-half vertical bands [cm] plus the full (top + bottom) heights.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalBuild {
    pub inner_wall: Band,
    pub blanket: Band,
    pub rear_wall: Band,
    pub divertor: Band,
    pub vacuum_vessel: Band,
    /// Divertor height after the floor correction.
    pub divertor_height: f64,
    pub inner_tf_leg_height: f64,
    pub vacuum_vessel_height: f64,
    pub inner_shield_height: f64,
    pub outer_blanket_height: f64,
    pub clamped: Option<ClampedDimension>,
}

impl VerticalBuild {
    /// Full height of the vacuum-vessel body including its top and bottom walls.
    pub fn vacuum_vessel_body_height(&self) -> f64 {
        2.0 * self.vacuum_vessel.end
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VerticalBuildResolver {
    pub wall_to_plasma_gap: f64,
}

impl VerticalBuildResolver {
    pub fn new(wall_to_plasma_gap: f64) -> Self {
        VerticalBuildResolver { wall_to_plasma_gap }
    }

    pub fn resolve(
        &self,
        envelope: &PlasmaEnvelope,
        thicknesses: &LayerThicknesses,
    ) -> FusionResult<VerticalBuild> {
        thicknesses.validate()?;
        check_thickness("wall_to_plasma_gap", self.wall_to_plasma_gap)?;

        let tip = envelope.high_point.z;
        let inner_wall =
            Band::from_thickness(tip + self.wall_to_plasma_gap, thicknesses.first_wall);
        let blanket = inner_wall.followed_by(thicknesses.breeder_blanket);
        let rear_wall = blanket.followed_by(thicknesses.rear_wall);

        // The divertor caps the plasma tip on its own offset chain and must
        // reach at least the top of the blanket stack.
        let required = rear_wall.end - tip;
        let mut divertor_height = thicknesses.divertor_height;
        let mut clamped = None;
        if divertor_height < required {
            warn!(
                requested = divertor_height,
                minimum = required,
                "divertor height too low, raised to minimum"
            );
            clamped = Some(ClampedDimension {
                quantity: ClampedQuantity::DivertorHeight,
                requested: divertor_height,
                applied: required,
            });
            divertor_height = required;
        }
        let divertor = Band::from_thickness(tip, divertor_height);

        let vacuum_vessel = divertor.followed_by(thicknesses.vacuum_vessel);
        let inner_tf_leg_height = 2.0 * vacuum_vessel.end;
        let vacuum_vessel_height = 2.0 * vacuum_vessel.start;
        let inner_shield_height = vacuum_vessel_height;

        let outer_blanket_height = vacuum_vessel_height - 2.0 * divertor_height;
        if outer_blanket_height <= 0.0 {
            return Err(FusionError::DivertorOverlap {
                outer_blanket_height,
            });
        }

        Ok(VerticalBuild {
            inner_wall,
            blanket,
            rear_wall,
            divertor,
            vacuum_vessel,
            divertor_height,
            inner_tf_leg_height,
            vacuum_vessel_height,
            inner_shield_height,
            outer_blanket_height,
            clamped,
        })
    }
}
