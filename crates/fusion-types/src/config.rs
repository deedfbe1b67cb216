// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    DEFAULT_INNER_BORE_RADIUS, DEFAULT_PORT_SIDE_LENGTH, DEFAULT_PORT_THICKNESS,
    FULL_REVOLUTION_DEG,
};
use crate::error::{check_thickness, FusionError, FusionResult};
use serde::{Deserialize, Serialize};

/// Independent layer thicknesses [cm].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerThicknesses {
    pub inner_tf_leg: f64,
    pub vacuum_vessel: f64,
    pub central_shield: f64,
    pub first_wall: f64,
    pub breeder_blanket: f64,
    pub rear_wall: f64,
    pub divertor_radial: f64,
    pub divertor_height: f64,
}

impl LayerThicknesses {
    /// Named thickness entries, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("inner_tf_leg", self.inner_tf_leg),
            ("vacuum_vessel", self.vacuum_vessel),
            ("central_shield", self.central_shield),
            ("first_wall", self.first_wall),
            ("breeder_blanket", self.breeder_blanket),
            ("rear_wall", self.rear_wall),
            ("divertor_radial", self.divertor_radial),
            ("divertor_height", self.divertor_height),
        ]
    }

    /// Fails on the first negative or non-finite entry.
    pub fn validate(&self) -> FusionResult<()> {
        for (layer, value) in self.entries() {
            check_thickness(layer, value)?;
        }
        Ok(())
    }

    /// Centre-column stack built from the axis outward.
    pub fn core_width(&self) -> f64 {
        self.inner_tf_leg + self.vacuum_vessel + self.central_shield
    }

    /// Wall stack built from the plasma outward.
    pub fn blanket_width(&self) -> f64 {
        self.first_wall + self.breeder_blanket + self.rear_wall
    }

    /// Space inserted between the inner TF leg and the vacuum-vessel inner wall
    /// so the two stacks meet without interpenetration.
    pub fn leg_to_vessel_gap(&self) -> f64 {
        (self.blanket_width() - self.core_width()).max(0.0)
    }
}

/// Port cutter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortConfig {
    #[serde(default = "default_port_side_length")]
    pub side_length: f64,
    #[serde(default = "default_port_thickness")]
    pub thickness: f64,
}

fn default_port_side_length() -> f64 {
    DEFAULT_PORT_SIDE_LENGTH
}
fn default_port_thickness() -> f64 {
    DEFAULT_PORT_THICKNESS
}

impl Default for PortConfig {
    fn default() -> Self {
        PortConfig {
            side_length: default_port_side_length(),
            thickness: default_port_thickness(),
        }
    }
}

/// Poloidal field coil cross-section (centre, size, casing) [cm].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfCoilConfig {
    pub r: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub casing_thickness: f64,
}

impl PfCoilConfig {
    fn validate(&self) -> FusionResult<()> {
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err(FusionError::InvalidThickness {
                layer: "pf_coil_width",
                value: self.width,
            });
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            return Err(FusionError::InvalidThickness {
                layer: "pf_coil_height",
                value: self.height,
            });
        }
        check_thickness("pf_coil_casing", self.casing_thickness)?;
        let inner_face = self.r - 0.5 * self.width - self.casing_thickness;
        if !self.r.is_finite() || !self.z.is_finite() || inner_face < 0.0 {
            return Err(FusionError::ConfigError(format!(
                "PF coil at (r={}, z={}) with width {} and casing {} crosses the machine axis",
                self.r, self.z, self.width, self.casing_thickness
            )));
        }
        Ok(())
    }
}

/// Immutable input of one build run.
///
/// `triangularity` is already signed: a negative-triangularity machine passes a
/// negative value. `ReactorConfig` applies the sign convention on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    pub thicknesses: LayerThicknesses,
    pub wall_to_plasma_gap: f64,
    pub inner_bore_radius: f64,
    /// Defaults to the inner TF leg thickness.
    pub outer_tf_coil_thickness: Option<f64>,
    pub rotation_angle: f64,
    pub low_aspect: bool,
    pub ports_enabled: bool,
    pub pf_enabled: bool,
    pub ports: PortConfig,
    pub pf_coils: Vec<PfCoilConfig>,
}

impl ShapeParameters {
    /// Full-revolution build with no bore, ports or PF coils.
    pub fn new(
        major_radius: f64,
        minor_radius: f64,
        elongation: f64,
        triangularity: f64,
        thicknesses: LayerThicknesses,
        wall_to_plasma_gap: f64,
    ) -> Self {
        ShapeParameters {
            major_radius,
            minor_radius,
            elongation,
            triangularity,
            thicknesses,
            wall_to_plasma_gap,
            inner_bore_radius: DEFAULT_INNER_BORE_RADIUS,
            outer_tf_coil_thickness: None,
            rotation_angle: FULL_REVOLUTION_DEG,
            low_aspect: false,
            ports_enabled: false,
            pf_enabled: false,
            ports: PortConfig::default(),
            pf_coils: Vec::new(),
        }
    }

    pub fn outer_tf_coil_thickness(&self) -> f64 {
        self.outer_tf_coil_thickness
            .unwrap_or(self.thicknesses.inner_tf_leg)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.major_radius / self.minor_radius
    }

    /// Validates every length and the rotation angle. Plasma shape checks live
    /// with the envelope computation.
    pub fn validate(&self) -> FusionResult<()> {
        self.thicknesses.validate()?;
        check_thickness("wall_to_plasma_gap", self.wall_to_plasma_gap)?;
        check_thickness("inner_bore_radius", self.inner_bore_radius)?;
        check_thickness("outer_tf_coil", self.outer_tf_coil_thickness())?;
        if !(self.rotation_angle > 0.0 && self.rotation_angle <= FULL_REVOLUTION_DEG) {
            return Err(FusionError::ConfigError(format!(
                "rotation_angle must lie in (0, 360] degrees, got {}",
                self.rotation_angle
            )));
        }
        if self.ports_enabled {
            check_thickness("port_side_length", self.ports.side_length)?;
            check_thickness("port_thickness", self.ports.thickness)?;
        }
        if self.pf_enabled {
            for coil in &self.pf_coils {
                coil.validate()?;
            }
        }
        Ok(())
    }
}

/// How the plasma size is given in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlasmaSizing {
    Explicit {
        major_radius: f64,
        minor_radius: f64,
    },
    /// Plasma placed against the inboard build, spanning this radial width.
    FromRadialBuild { plasma_radial_thickness: f64 },
}

/// Plasma section of a reactor config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasmaConfig {
    #[serde(flatten)]
    pub sizing: PlasmaSizing,
    pub elongation: f64,
    pub triangularity: f64,
    /// Store triangularity as `-|δ|` regardless of the sign in the file.
    #[serde(default)]
    pub negative_triangularity: bool,
}

impl PlasmaConfig {
    pub fn signed_triangularity(&self) -> f64 {
        if self.negative_triangularity {
            -self.triangularity.abs()
        } else {
            self.triangularity
        }
    }
}

/// Top-level reactor configuration as stored in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorConfig {
    pub reactor_name: String,
    pub plasma: PlasmaConfig,
    pub thicknesses: LayerThicknesses,
    pub wall_to_plasma_gap: f64,
    #[serde(default = "default_inner_bore_radius")]
    pub inner_bore_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_tf_coil_thickness: Option<f64>,
    #[serde(default = "default_rotation_angle")]
    pub rotation_angle: f64,
    #[serde(default)]
    pub low_aspect: bool,
    #[serde(default)]
    pub ports_enabled: bool,
    #[serde(default)]
    pub pf_enabled: bool,
    #[serde(default)]
    pub ports: PortConfig,
    #[serde(default)]
    pub pf_coils: Vec<PfCoilConfig>,
}

fn default_inner_bore_radius() -> f64 {
    DEFAULT_INNER_BORE_RADIUS
}
fn default_rotation_angle() -> f64 {
    FULL_REVOLUTION_DEG
}

impl ReactorConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> FusionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> FusionResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        Ok(config)
    }

    /// Major and minor radius, derived from the inboard build when the config
    /// only gives the plasma's radial width.
    pub fn plasma_radii(&self) -> (f64, f64) {
        match self.plasma.sizing {
            PlasmaSizing::Explicit {
                major_radius,
                minor_radius,
            } => (major_radius, minor_radius),
            PlasmaSizing::FromRadialBuild {
                plasma_radial_thickness,
            } => {
                let t = &self.thicknesses;
                let mut inner_equatorial = self.inner_bore_radius
                    + t.core_width()
                    + self.wall_to_plasma_gap
                    + t.leg_to_vessel_gap();
                if !self.low_aspect {
                    inner_equatorial += t.blanket_width();
                }
                let outer_equatorial = inner_equatorial + plasma_radial_thickness;
                let major_radius = 0.5 * (outer_equatorial + inner_equatorial);
                (major_radius, major_radius - inner_equatorial)
            }
        }
    }

    /// Validated build input.
    pub fn to_shape_parameters(&self) -> FusionResult<ShapeParameters> {
        if let PlasmaSizing::FromRadialBuild {
            plasma_radial_thickness,
        } = self.plasma.sizing
        {
            check_thickness("plasma_radial_thickness", plasma_radial_thickness)?;
        }
        let (major_radius, minor_radius) = self.plasma_radii();
        let params = ShapeParameters {
            major_radius,
            minor_radius,
            elongation: self.plasma.elongation,
            triangularity: self.plasma.signed_triangularity(),
            thicknesses: self.thicknesses,
            wall_to_plasma_gap: self.wall_to_plasma_gap,
            inner_bore_radius: self.inner_bore_radius,
            outer_tf_coil_thickness: self.outer_tf_coil_thickness,
            rotation_angle: self.rotation_angle,
            low_aspect: self.low_aspect,
            ports_enabled: self.ports_enabled,
            pf_enabled: self.pf_enabled,
            ports: self.ports,
            pf_coils: self.pf_coils.clone(),
        };
        params.validate()?;
        Ok(params)
    }
}
