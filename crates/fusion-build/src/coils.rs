// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Coil and Port Placement
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Outer TF coil, PF coil and port placement derived from the resolved build.
//!
//! Only the radii and heights are produced here. Coil count and azimuthal
//! placement belong to the solid-generation side.

use crate::envelope::PlasmaEnvelope;
use crate::radial::RadialBuild;
use crate::vertical::VerticalBuild;
use fusion_types::config::{PfCoilConfig, PortConfig};
use fusion_types::error::{FusionError, FusionResult};
use fusion_types::state::{Band, Layer, LayerKind, Point};
use serde::{Deserialize, Serialize};

/// Anchors of the rectangular outer TF coil profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TfCoilPlacement {
    /// Lower inner corner, at the bore radius and the bottom of the inner leg.
    pub lower_inner: Point,
    /// Outboard leg midpoint on the midplane.
    pub mid_point: Point,
    pub thickness: f64,
}

impl TfCoilPlacement {
    pub fn derive(vertical: &VerticalBuild, radial: &RadialBuild, thickness: f64) -> Self {
        TfCoilPlacement {
            lower_inner: Point::new(radial.inner_bore.end, -0.5 * vertical.inner_tf_leg_height),
            mid_point: Point::new(radial.vv_body.end, 0.0),
            thickness,
        }
    }

    /// Outboard leg band, spanning the inner leg height.
    pub fn outer_leg(&self) -> Layer {
        Layer::from_bands(
            LayerKind::TfCoilOuter,
            Band::from_thickness(self.mid_point.r, self.thickness),
            Band::new(self.lower_inner.z, -self.lower_inner.z),
        )
    }
}

/// Port cutter centres at the upper tip, the midplane and the lower tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortLayout {
    pub center_heights: [f64; 3],
    /// Radial reach of the cutters, to the outer face of the TF coil.
    pub radial_distance: f64,
    pub side_length: f64,
    pub thickness: f64,
}

impl PortLayout {
    /// The upper cutter must sit above the midplane, otherwise the upper and
    /// lower ports swap places.
    pub fn check_fits(envelope: &PlasmaEnvelope, ports: &PortConfig) -> FusionResult<()> {
        if ports.side_length > envelope.high_point.z {
            return Err(FusionError::ConfigError(format!(
                "port side length {} exceeds plasma tip height {}",
                ports.side_length, envelope.high_point.z
            )));
        }
        Ok(())
    }

    pub fn derive(
        envelope: &PlasmaEnvelope,
        radial: &RadialBuild,
        outer_tf_coil_thickness: f64,
        ports: &PortConfig,
    ) -> Self {
        let upper = envelope.high_point.z - ports.side_length;
        PortLayout {
            center_heights: [upper, 0.0, -upper],
            radial_distance: radial.vv_body.end + outer_tf_coil_thickness,
            side_length: ports.side_length,
            thickness: ports.thickness,
        }
    }
}

/// Winding-pack and casing layers for each PF coil, coil before casing.
pub fn pf_coil_layers(coils: &[PfCoilConfig]) -> Vec<Layer> {
    let mut layers = Vec::with_capacity(2 * coils.len());
    for (i, coil) in coils.iter().enumerate() {
        let radial = Band::new(coil.r - 0.5 * coil.width, coil.r + 0.5 * coil.width);
        let vertical = Band::new(coil.z - 0.5 * coil.height, coil.z + 0.5 * coil.height);
        layers.push(Layer::from_bands(LayerKind::PfCoil(i), radial, vertical));
        layers.push(Layer::from_bands(
            LayerKind::PfCoilCase(i),
            radial.grown(coil.casing_thickness),
            vertical.grown(coil.casing_thickness),
        ));
    }
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radial::RadialBuildResolver;
    use crate::vertical::VerticalBuildResolver;
    use fusion_types::config::LayerThicknesses;

    fn resolved() -> (PlasmaEnvelope, VerticalBuild, RadialBuild) {
        let t = LayerThicknesses {
            inner_tf_leg: 50.0,
            vacuum_vessel: 20.0,
            central_shield: 30.0,
            first_wall: 20.0,
            breeder_blanket: 50.0,
            rear_wall: 20.0,
            divertor_radial: 350.0,
            divertor_height: 100.0,
        };
        let env = PlasmaEnvelope::compute(250.0, 150.0, 2.0, -0.55).unwrap();
        let vertical = VerticalBuildResolver::new(10.0).resolve(&env, &t).unwrap();
        let radial = RadialBuildResolver::new(10.0, 5.0, false)
            .resolve(&env, &t)
            .unwrap();
        (env, vertical, radial)
    }

    #[test]
    fn test_tf_coil_wraps_vessel() {
        let (_, vertical, radial) = resolved();
        let placement = TfCoilPlacement::derive(&vertical, &radial, 50.0);
        assert_eq!(placement.lower_inner, Point::new(5.0, -420.0));
        assert_eq!(placement.mid_point.r, radial.vv_body.end);
        let leg = placement.outer_leg();
        assert_eq!(leg.kind, LayerKind::TfCoilOuter);
        assert_eq!(leg.start_radius, radial.vv_body.end);
        assert!((leg.end_radius - radial.vv_body.end - 50.0).abs() < 1e-12);
        assert_eq!(leg.vertical(), Band::new(-420.0, 420.0));
    }

    #[test]
    fn test_port_centres() {
        let (env, _, radial) = resolved();
        let ports = PortLayout::derive(&env, &radial, 50.0, &PortConfig::default());
        assert_eq!(ports.center_heights, [280.0, 0.0, -280.0]);
        assert!((ports.radial_distance - (radial.vv_body.end + 50.0)).abs() < 1e-12);
        assert_eq!(ports.side_length, 20.0);
    }

    #[test]
    fn test_port_taller_than_plasma_tip_rejected() {
        let (env, _, _) = resolved();
        let tall = PortConfig {
            side_length: 301.0,
            thickness: 20.0,
        };
        assert!(matches!(
            PortLayout::check_fits(&env, &tall),
            Err(FusionError::ConfigError(_))
        ));
        let flush = PortConfig {
            side_length: 300.0,
            thickness: 20.0,
        };
        assert!(PortLayout::check_fits(&env, &flush).is_ok());
    }

    #[test]
    fn test_pf_coil_and_casing_bands() {
        let coils = [PfCoilConfig {
            r: 700.0,
            z: -300.0,
            width: 40.0,
            height: 60.0,
            casing_thickness: 5.0,
        }];
        let layers = pf_coil_layers(&coils);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].kind, LayerKind::PfCoil(0));
        assert_eq!(layers[0].radial(), Band::new(680.0, 720.0));
        assert_eq!(layers[0].vertical(), Band::new(-330.0, -270.0));
        assert_eq!(layers[1].kind, LayerKind::PfCoilCase(0));
        assert_eq!(layers[1].radial(), Band::new(675.0, 725.0));
        assert_eq!(layers[1].vertical(), Band::new(-335.0, -265.0));
    }
}
