// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Property-Based Tests (proptest) for fusion-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for fusion-types using proptest.
//!
//! Covers: Band stacking, LayerThicknesses gap correction and validation.

use fusion_types::config::LayerThicknesses;
use fusion_types::state::Band;
use proptest::prelude::*;

fn thicknesses() -> impl Strategy<Value = LayerThicknesses> {
    prop::array::uniform8(0.0f64..200.0).prop_map(|t| LayerThicknesses {
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

// ── Band Invariants ──────────────────────────────────────────────────

proptest! {
    /// A followed band starts exactly where its predecessor ends.
    #[test]
    fn band_stack_is_contiguous(
        start in -500.0f64..500.0,
        first in 0.0f64..100.0,
        second in 0.0f64..100.0,
    ) {
        let a = Band::from_thickness(start, first);
        let b = a.followed_by(second);
        prop_assert_eq!(b.start, a.end);
        prop_assert!(b.end >= b.start);
        prop_assert!(a.width() >= 0.0);
    }

    /// Mirroring twice restores the band.
    #[test]
    fn band_mirror_involution(start in 0.0f64..500.0, width in 0.0f64..100.0) {
        let band = Band::from_thickness(start, width);
        prop_assert_eq!(band.mirrored().mirrored(), band);
        prop_assert!((band.mirrored().width() - band.width()).abs() < 1e-9);
    }
}

// ── LayerThicknesses Invariants ──────────────────────────────────────

proptest! {
    /// The leg-to-vessel gap is never negative and closes the width deficit.
    #[test]
    fn gap_closes_width_deficit(t in thicknesses()) {
        let gap = t.leg_to_vessel_gap();
        prop_assert!(gap >= 0.0);
        prop_assert!(t.core_width() + gap >= t.blanket_width() - 1e-9);
        if t.blanket_width() <= t.core_width() {
            prop_assert_eq!(gap, 0.0);
        }
    }

    /// Non-negative inputs always validate.
    #[test]
    fn non_negative_thicknesses_validate(t in thicknesses()) {
        prop_assert!(t.validate().is_ok());
    }

    /// Any single negative entry is rejected.
    #[test]
    fn negative_entry_rejected(t in thicknesses(), idx in 0usize..8, bad in -100.0f64..-1e-6) {
        let mut t = t;
        match idx {
            0 => t.inner_tf_leg = bad,
            1 => t.vacuum_vessel = bad,
            2 => t.central_shield = bad,
            3 => t.first_wall = bad,
            4 => t.breeder_blanket = bad,
            5 => t.rear_wall = bad,
            6 => t.divertor_radial = bad,
            _ => t.divertor_height = bad,
        }
        prop_assert!(t.validate().is_err());
    }
}
