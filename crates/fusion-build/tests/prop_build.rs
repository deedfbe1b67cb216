// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Property-Based Tests (proptest) for fusion-build
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the build resolver using proptest.
//!
//! Covers: monotone stacks, idempotence, divertor floor corrections,
//! leg-to-vessel gap correction, centre column against the divertor.

use fusion_build::resolve_build;
use fusion_types::config::{LayerThicknesses, ShapeParameters};
use fusion_types::error::FusionError;
use fusion_types::state::{Band, ClampedQuantity};
use proptest::prelude::*;

fn thicknesses() -> impl Strategy<Value = LayerThicknesses> {
    prop::array::uniform8(0.0f64..150.0).prop_map(|t| LayerThicknesses {
        inner_tf_leg: t[0],
        vacuum_vessel: t[1],
        central_shield: t[2],
        first_wall: t[3],
        breeder_blanket: t[4],
        rear_wall: t[5],
        divertor_radial: t[6],
        divertor_height: t[7],
    })
}

prop_compose! {
    fn shape_parameters()(
        minor in 20.0f64..300.0,
        aspect in 1.2f64..4.0,
        elongation in 0.5f64..3.0,
        triangularity in -0.9f64..0.9,
        gap in 0.0f64..30.0,
        bore in 0.0f64..50.0,
        low_aspect in any::<bool>(),
        t in thicknesses(),
    ) -> ShapeParameters {
        // Shift the plasma clear of the centre column so the tip radius
        // R - δa stays outboard of the shield for any |δ| < aspect.
        let column = bore + t.core_width().max(t.blanket_width());
        let major = column + minor * aspect;
        let mut params = ShapeParameters::new(major, minor, elongation, triangularity, t, gap);
        params.inner_bore_radius = bore;
        params.low_aspect = low_aspect;
        params
    }
}

fn assert_monotone(chain: &[Band]) -> Result<(), TestCaseError> {
    for band in chain {
        prop_assert!(band.end >= band.start, "inverted band {:?}", band);
    }
    for pair in chain.windows(2) {
        prop_assert!(pair[0].end <= pair[1].start, "overlap {:?} -> {:?}", pair[0], pair[1]);
    }
    Ok(())
}

proptest! {
    /// Every stack is non-decreasing along its build direction.
    #[test]
    fn stacks_are_monotone(params in shape_parameters()) {
        let build = resolve_build(&params);
        prop_assert!(build.is_ok(), "valid parameters failed: {:?}", build.as_ref().err());
        let build = build.unwrap();
        let v = &build.vertical;
        let r = &build.radial;
        assert_monotone(&[v.inner_wall, v.blanket, v.rear_wall])?;
        assert_monotone(&[v.divertor, v.vacuum_vessel])?;
        assert_monotone(&[r.inner_bore, r.tf_leg, r.vv_inner, r.shield])?;
        assert_monotone(&[r.divertor, r.vv_body])?;
        prop_assert!(v.divertor.end >= v.rear_wall.end - 1e-9 * v.rear_wall.end.abs().max(1.0));
    }

    /// Same input, same graph and report.
    #[test]
    fn resolution_is_idempotent(params in shape_parameters()) {
        let first = resolve_build(&params).unwrap();
        let second = resolve_build(&params).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A short divertor ends exactly at start + required height.
    #[test]
    fn divertor_height_clamp_is_exact(params in shape_parameters(), fraction in 0.0f64..0.99) {
        let mut params = params;
        params.thicknesses.first_wall += 1.0;
        let stack = params.wall_to_plasma_gap + params.thicknesses.blanket_width();
        params.thicknesses.divertor_height = fraction * stack;

        let build = resolve_build(&params).unwrap();
        let v = &build.vertical;
        let required = v.rear_wall.end - v.divertor.start;
        prop_assert_eq!(v.divertor.end, v.divertor.start + required);
        prop_assert!(build
            .report
            .clamped
            .iter()
            .any(|c| c.quantity == ClampedQuantity::DivertorHeight));
    }

    /// The divertor always reaches the outboard blanket envelope.
    #[test]
    fn divertor_spans_outer_blanket(params in shape_parameters()) {
        let build = resolve_build(&params).unwrap();
        let r = &build.radial;
        prop_assert!(r.divertor.end >= r.full_outer_blanket_radius - 1e-9);
        let radial_clamped = build
            .report
            .clamped
            .iter()
            .any(|c| c.quantity == ClampedQuantity::DivertorRadialThickness);
        prop_assert_eq!(radial_clamped, r.divertor_radial_thickness > params.thicknesses.divertor_radial);
    }

    /// A centre column reaching past the plasma tip radius is rejected.
    #[test]
    fn centre_column_past_tip_rejected(params in shape_parameters(), excess in 1.0f64..100.0) {
        let mut params = params;
        params.triangularity = 0.9;
        let t = &params.thicknesses;
        let column = params.inner_bore_radius + t.core_width().max(t.blanket_width());
        // Tip radius R - 0.9 a lands `excess` inside the shield.
        params.major_radius = column - excess + 0.9 * params.minor_radius;
        prop_assume!(params.major_radius > params.minor_radius);
        let build = resolve_build(&params);
        prop_assert!(
            matches!(build, Err(FusionError::PhysicsViolation(_))),
            "expected rejection, got {:?}",
            build.as_ref().map(|b| b.radial.divertor)
        );
    }

    /// The vessel inner wall sits exactly one gap beyond the TF leg.
    #[test]
    fn gap_correction(params in shape_parameters()) {
        let build = resolve_build(&params).unwrap();
        let r = &build.radial;
        let t = &params.thicknesses;
        let expected = (t.blanket_width() - t.core_width()).max(0.0);
        prop_assert!((r.vv_inner.start - r.tf_leg.end - expected).abs() < 1e-9);
        if t.blanket_width() <= t.core_width() {
            prop_assert_eq!(r.vv_inner.start, r.tf_leg.end);
        }
    }
}
