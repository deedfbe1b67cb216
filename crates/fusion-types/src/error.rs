// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

/// Fatal build failures. A run that returns any of these produces no build graph.
#[derive(Error, Debug)]
pub enum FusionError {
    #[error("Invalid plasma shape: {quantity}={value} ({reason})")]
    InvalidShape {
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid thickness: {layer}={value} (must be finite and non-negative)")]
    InvalidThickness { layer: &'static str, value: f64 },

    #[error("Divertors overlap at the midplane: outer blanket height={outer_blanket_height}")]
    DivertorOverlap { outer_blanket_height: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FusionResult<T> = Result<T, FusionError>;

/// Reject negative or non-finite lengths.
pub fn check_thickness(layer: &'static str, value: f64) -> FusionResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FusionError::InvalidThickness { layer, value });
    }
    Ok(())
}
