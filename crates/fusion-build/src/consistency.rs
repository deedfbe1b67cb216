// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Build Consistency
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cross-checks of the combined radial and vertical build.

use crate::envelope::PlasmaEnvelope;
use crate::radial::RadialBuild;
use crate::vertical::VerticalBuild;
use fusion_types::error::{FusionError, FusionResult};
use fusion_types::state::{Band, ClampedDimension};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Relative slack for comparing lengths that were summed along different paths.
const LENGTH_TOLERANCE: f64 = 1e-9;

fn below(value: f64, reference: f64) -> bool {
    value < reference - LENGTH_TOLERANCE * reference.abs().max(1.0)
}

/// Diagnostics returned alongside a successful build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub aspect_ratio: f64,
    /// Inboard space between the blanket offset and the plasma [cm].
    /// Negative when the centre column reaches into the plasma.
    pub inboard_clearance: f64,
    /// Vertical clamps first, then radial.
    pub clamped: Vec<ClampedDimension>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.clamped.is_empty() && self.inboard_clearance >= 0.0
    }
}

fn check_chain(direction: &str, chain: &[(&str, Band)]) -> FusionResult<()> {
    for (name, band) in chain {
        if band.end < band.start {
            return Err(FusionError::PhysicsViolation(format!(
                "{direction} band {name} is inverted: [{}, {}]",
                band.start, band.end
            )));
        }
    }
    for pair in chain.windows(2) {
        let (prev_name, prev) = pair[0];
        let (next_name, next) = pair[1];
        if next.start < prev.end {
            return Err(FusionError::PhysicsViolation(format!(
                "{direction} band {next_name} starts at {} inside {prev_name} ending at {}",
                next.start, prev.end
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyChecker {
    /// `major_radius / minor_radius`, reported as a diagnostic only.
    pub aspect_ratio: f64,
}

impl ConsistencyChecker {
    pub fn new(aspect_ratio: f64) -> Self {
        ConsistencyChecker { aspect_ratio }
    }

    /// Checker for an envelope without nominal radii, e.g. a traced boundary.
    pub fn for_envelope(envelope: &PlasmaEnvelope) -> Self {
        Self::new(envelope.aspect_ratio())
    }

    pub fn check(
        &self,
        envelope: &PlasmaEnvelope,
        vertical: &VerticalBuild,
        radial: &RadialBuild,
    ) -> FusionResult<BuildReport> {
        check_chain(
            "radial",
            &[
                ("inner_bore", radial.inner_bore),
                ("tf_leg", radial.tf_leg),
                ("vv_inner", radial.vv_inner),
                ("shield", radial.shield),
            ],
        )?;
        check_chain(
            "radial",
            &[("divertor", radial.divertor), ("vv_body", radial.vv_body)],
        )?;
        if below(radial.divertor.start, radial.shield.end) {
            return Err(FusionError::PhysicsViolation(format!(
                "radial band divertor starts at {} inside centre column ending at {}",
                radial.divertor.start, radial.shield.end
            )));
        }
        if radial.leg_to_vessel_gap < 0.0 {
            return Err(FusionError::PhysicsViolation(format!(
                "negative leg-to-vessel gap {}",
                radial.leg_to_vessel_gap
            )));
        }
        check_chain(
            "vertical",
            &[
                ("inner_wall", vertical.inner_wall),
                ("blanket", vertical.blanket),
                ("rear_wall", vertical.rear_wall),
            ],
        )?;
        check_chain(
            "vertical",
            &[
                ("divertor", vertical.divertor),
                ("vacuum_vessel", vertical.vacuum_vessel),
            ],
        )?;
        if below(vertical.divertor.end, vertical.rear_wall.end) {
            return Err(FusionError::PhysicsViolation(format!(
                "divertor top {} below rear wall top {}",
                vertical.divertor.end, vertical.rear_wall.end
            )));
        }

        if vertical.vacuum_vessel_height <= 0.0 {
            return Err(FusionError::PhysicsViolation(format!(
                "vacuum vessel height {} is not positive",
                vertical.vacuum_vessel_height
            )));
        }
        if radial.vv_body.start <= 0.0 {
            return Err(FusionError::PhysicsViolation(format!(
                "vacuum vessel body starts at non-positive radius {}",
                radial.vv_body.start
            )));
        }
        if vertical.outer_blanket_height <= 0.0 {
            return Err(FusionError::DivertorOverlap {
                outer_blanket_height: vertical.outer_blanket_height,
            });
        }

        let aspect_ratio = self.aspect_ratio;
        info!(aspect_ratio, "resolved build");
        let inboard_clearance =
            envelope.inner_equatorial_radius - (radial.shield.end + radial.blanket_offset);
        if inboard_clearance < 0.0 {
            warn!(
                inboard_clearance,
                "centre column and inboard blanket reach into the plasma"
            );
        }

        let clamped = vertical
            .clamped
            .iter()
            .chain(radial.clamped.iter())
            .copied()
            .collect();

        Ok(BuildReport {
            aspect_ratio,
            inboard_clearance,
            clamped,
        })
    }
}
