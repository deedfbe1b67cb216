// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Build Graph
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ordered layer boundaries handed to the solid-generation collaborator.

use crate::coils::{pf_coil_layers, PortLayout, TfCoilPlacement};
use crate::envelope::PlasmaEnvelope;
use crate::radial::{BlanketShells, RadialBuild};
use crate::vertical::VerticalBuild;
use fusion_types::config::ShapeParameters;
use fusion_types::error::FusionResult;
use fusion_types::state::{Band, Layer, LayerKind};
use serde::{Deserialize, Serialize};

/// Resolved cross-section. Layers are kept in construction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildGraph {
    pub envelope: PlasmaEnvelope,
    pub rotation_angle: f64,
    pub layers: Vec<Layer>,
    pub blanket_shells: BlanketShells,
    pub tf_coil: TfCoilPlacement,
    pub ports: Option<PortLayout>,
}

impl BuildGraph {
    pub fn assemble(
        params: &ShapeParameters,
        envelope: PlasmaEnvelope,
        vertical: &VerticalBuild,
        radial: &RadialBuild,
    ) -> Self {
        let column = |kind, radial_band, full_height| {
            Layer::from_bands(kind, radial_band, Band::symmetric(full_height))
        };
        // Blanket shells: top band and outboard midplane band.
        let outboard = |offset: f64, thickness: f64| {
            Band::from_thickness(envelope.outer_equatorial_radius + offset, thickness)
        };
        let shells = &radial.shells;

        let tf_coil = TfCoilPlacement::derive(vertical, radial, params.outer_tf_coil_thickness());
        let vessel_body_radial = Band::new(radial.vv_inner.start, radial.vv_body.end);

        let mut layers = vec![
            column(LayerKind::TfInnerLeg, radial.tf_leg, vertical.inner_tf_leg_height),
            column(
                LayerKind::VacuumVesselInnerWall,
                radial.vv_inner,
                vertical.vacuum_vessel_height,
            ),
            column(
                LayerKind::InnerShield,
                radial.shield,
                vertical.inner_shield_height,
            ),
            Layer::from_bands(
                LayerKind::FirstWall,
                outboard(shells.first_wall.midplane, shells.first_wall.thickness),
                vertical.inner_wall,
            ),
            Layer::from_bands(
                LayerKind::BreederBlanket,
                outboard(shells.breeder.midplane, shells.breeder.thickness),
                vertical.blanket,
            ),
            Layer::from_bands(
                LayerKind::RearWall,
                outboard(shells.rear_wall.midplane, shells.rear_wall.thickness),
                vertical.rear_wall,
            ),
            Layer::from_bands(LayerKind::DivertorUpper, radial.divertor, vertical.divertor),
            Layer::from_bands(
                LayerKind::DivertorLower,
                radial.divertor,
                vertical.divertor.mirrored(),
            ),
            column(
                LayerKind::VacuumVesselBody,
                vessel_body_radial,
                vertical.vacuum_vessel_body_height(),
            ),
            tf_coil.outer_leg(),
        ];
        if params.pf_enabled {
            layers.extend(pf_coil_layers(&params.pf_coils));
        }

        let ports = params.ports_enabled.then(|| {
            PortLayout::derive(
                &envelope,
                radial,
                params.outer_tf_coil_thickness(),
                &params.ports,
            )
        });

        BuildGraph {
            envelope,
            rotation_angle: params.rotation_angle,
            layers,
            blanket_shells: radial.shells,
            tf_coil,
            ports,
        }
    }

    pub fn get(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.layers.iter().map(|layer| layer.kind.name()).collect()
    }

    pub fn to_json(&self) -> FusionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
