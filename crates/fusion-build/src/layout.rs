// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Reactor Layout
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Build pipeline: parameters → envelope → vertical/radial builds →
//! consistency check → build graph.

use crate::coils::PortLayout;
use crate::consistency::{BuildReport, ConsistencyChecker};
use crate::envelope::PlasmaEnvelope;
use crate::graph::BuildGraph;
use crate::radial::{RadialBuild, RadialBuildResolver};
use crate::vertical::{VerticalBuild, VerticalBuildResolver};
use fusion_types::config::ShapeParameters;
use fusion_types::error::FusionResult;
use tracing::debug;

/// Output of one resolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBuild {
    pub graph: BuildGraph,
    pub report: BuildReport,
    pub vertical: VerticalBuild,
    pub radial: RadialBuild,
}

/// Resolve a full build from the plasma shape in `params`.
pub fn resolve_build(params: &ShapeParameters) -> FusionResult<ResolvedBuild> {
    params.validate()?;
    let envelope = PlasmaEnvelope::from_shape(params)?;
    resolve(params, envelope, ConsistencyChecker::new(params.aspect_ratio()))
}

/// Resolve against an externally supplied envelope. The plasma radii in
/// `params` are not used.
pub fn resolve_build_with_envelope(
    params: &ShapeParameters,
    envelope: PlasmaEnvelope,
) -> FusionResult<ResolvedBuild> {
    params.validate()?;
    resolve(params, envelope, ConsistencyChecker::for_envelope(&envelope))
}

fn resolve(
    params: &ShapeParameters,
    envelope: PlasmaEnvelope,
    checker: ConsistencyChecker,
) -> FusionResult<ResolvedBuild> {
    let vertical = VerticalBuildResolver::new(params.wall_to_plasma_gap)
        .resolve(&envelope, &params.thicknesses)?;
    let radial = RadialBuildResolver::new(
        params.wall_to_plasma_gap,
        params.inner_bore_radius,
        params.low_aspect,
    )
    .resolve(&envelope, &params.thicknesses)?;
    let report = checker.check(&envelope, &vertical, &radial)?;
    if params.ports_enabled {
        PortLayout::check_fits(&envelope, &params.ports)?;
    }

    let graph = BuildGraph::assemble(params, envelope, &vertical, &radial);
    for layer in graph.iter() {
        debug!(
            layer = %layer.kind,
            start_radius = layer.start_radius,
            end_radius = layer.end_radius,
            start_height = layer.start_height,
            end_height = layer.end_height,
            "layer resolved"
        );
    }

    Ok(ResolvedBuild {
        graph,
        report,
        vertical,
        radial,
    })
}
