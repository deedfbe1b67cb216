// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Fusion Build
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial and vertical build of a tokamak cross-section.
//!
//! - `envelope`: plasma extremal points
//! - `vertical` / `radial`: layer stacks with divertor floor corrections
//! - `consistency`: combined checks and diagnostics report
//! - `coils`: outer TF, PF coil and port placement
//! - `graph` / `layout`: assembly and the end-to-end pipeline

pub mod coils;
pub mod consistency;
pub mod envelope;
pub mod graph;
pub mod layout;
pub mod radial;
pub mod vertical;

pub use layout::{resolve_build, resolve_build_with_envelope, ResolvedBuild};
