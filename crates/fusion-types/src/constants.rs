// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Build defaults. All lengths are in centimetres, angles in degrees.

/// Inner bore radius [cm]. Zero puts the inner TF leg on the machine axis.
pub const DEFAULT_INNER_BORE_RADIUS: f64 = 0.0;

/// Full revolution [deg].
pub const FULL_REVOLUTION_DEG: f64 = 360.0;

/// Port cutter side length [cm].
pub const DEFAULT_PORT_SIDE_LENGTH: f64 = 20.0;

/// Port wall thickness [cm].
pub const DEFAULT_PORT_THICKNESS: f64 = 20.0;
