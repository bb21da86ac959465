//! Call surface of the analysis engine.
//!
//! The engine's scripting API reports success through a numeric status code and
//! returns data through reference parameters. Implementations of [`SapModel`]
//! wrap each call with [`check_status`] and hand back plain values, so the
//! mapping code only ever sees `Ok(record)` or an [`EngineError`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Convert an engine status code into a result. Zero means success.
///
/// # Errors
///
/// Returns [`EngineError::Status`] for any non-zero `code`.
///
/// # Examples
/// ```
/// use sapx::{check_status, EngineError};
///
/// assert!(check_status("PropLink.GetTypeOAPI", "L1", 0).is_ok());
/// assert!(matches!(
///     check_status("PropLink.GetTypeOAPI", "L1", 1),
///     Err(EngineError::Status { code: 1, .. })
/// ));
/// ```
pub fn check_status(call: &'static str, name: &str, code: i32) -> Result<(), EngineError> {
    if code == 0 {
        Ok(())
    } else {
        Err(EngineError::Status {
            call,
            name: name.to_string(),
            code,
        })
    }
}

/// Behaviour of a link property as classified by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkPropType {
    /// Linear spring and damper.
    Linear,
    /// Exponential viscous damper.
    Damper,
    /// Compression-only gap.
    Gap,
    /// Tension-only hook.
    Hook,
    /// Wen hysteretic plasticity.
    PlasticWen,
    /// Rubber isolator.
    Isolator1,
    /// Friction isolator.
    Isolator2,
    /// Nonlinear elastic with a multilinear force-deformation curve.
    MultilinearElastic,
    /// Hysteretic with a multilinear force-deformation curve.
    MultilinearPlastic,
    /// Tension/compression friction isolator.
    Isolator3,
    /// A code this crate does not recognise.
    Other(i32),
}

impl LinkPropType {
    /// Link types that are read back as empty constraints with a warning.
    pub const UNSUPPORTED: [LinkPropType; 9] = [
        LinkPropType::Damper,
        LinkPropType::Gap,
        LinkPropType::Hook,
        LinkPropType::PlasticWen,
        LinkPropType::Isolator1,
        LinkPropType::Isolator2,
        LinkPropType::MultilinearElastic,
        LinkPropType::MultilinearPlastic,
        LinkPropType::Isolator3,
    ];

    /// Decode the engine's numeric link type.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => LinkPropType::Linear,
            2 => LinkPropType::Damper,
            3 => LinkPropType::Gap,
            4 => LinkPropType::Hook,
            5 => LinkPropType::PlasticWen,
            6 => LinkPropType::Isolator1,
            7 => LinkPropType::Isolator2,
            8 => LinkPropType::MultilinearElastic,
            9 => LinkPropType::MultilinearPlastic,
            10 => LinkPropType::Isolator3,
            other => LinkPropType::Other(other),
        }
    }

    /// Numeric code used by the engine.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            LinkPropType::Linear => 1,
            LinkPropType::Damper => 2,
            LinkPropType::Gap => 3,
            LinkPropType::Hook => 4,
            LinkPropType::PlasticWen => 5,
            LinkPropType::Isolator1 => 6,
            LinkPropType::Isolator2 => 7,
            LinkPropType::MultilinearElastic => 8,
            LinkPropType::MultilinearPlastic => 9,
            LinkPropType::Isolator3 => 10,
            LinkPropType::Other(code) => code,
        }
    }
}

impl fmt::Display for LinkPropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkPropType::Other(code) => write!(f, "Unknown({code})"),
            known => write!(f, "{known:?}"),
        }
    }
}

/// Properties of a linear link, with all arrays in the engine's
/// `[U1, U2, U3, R1, R2, R3]` order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearLinkProps {
    /// Degrees of freedom that are active.
    pub dof: [bool; 6],
    /// Active degrees of freedom that are fixed.
    pub fixed: [bool; 6],
    /// Uncoupled stiffness terms.
    pub stiffness: [f64; 6],
    /// Uncoupled damping terms.
    pub damping: [f64; 6],
    /// Distance from end J to the U2 shear spring.
    pub dj2: f64,
    /// Distance from end J to the U3 shear spring.
    pub dj3: f64,
    /// Whether `stiffness` holds coupled terms.
    pub stiffness_coupled: bool,
    /// Whether `damping` holds coupled terms.
    pub damping_coupled: bool,
    /// Notes stored with the property.
    pub notes: String,
    /// GUID of the property; empty lets the engine assign one.
    pub guid: String,
}

/// Material classification used by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SapMaterialType {
    /// Structural steel.
    Steel,
    /// Concrete.
    Concrete,
    /// Material without design checks.
    NoDesign,
    /// Aluminium.
    Aluminum,
    /// Cold formed steel.
    ColdFormed,
    /// Reinforcing bar.
    Rebar,
    /// Prestressing tendon.
    Tendon,
    /// Masonry.
    Masonry,
}

/// Material definition header as stored by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SapMaterial {
    /// Classification of the material.
    pub material_type: SapMaterialType,
    /// Display colour; `-1` lets the engine choose.
    pub colour: i32,
    /// Notes stored with the material.
    pub notes: String,
    /// GUID of the material.
    pub guid: String,
}

/// Isotropic mechanical properties in engine units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IsotropicProps {
    /// Modulus of elasticity.
    pub e: f64,
    /// Poisson's ratio.
    pub u: f64,
    /// Coefficient of thermal expansion.
    pub a: f64,
}

/// Design strengths for the material families that carry them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MaterialStrengths {
    /// Structural steel strengths.
    Steel {
        /// Minimum yield stress.
        fy: f64,
        /// Minimum tensile stress.
        fu: f64,
    },
    /// Concrete compressive strength.
    Concrete {
        /// Specified compressive strength.
        fc: f64,
    },
    /// Reinforcing bar strengths.
    Rebar {
        /// Minimum yield stress.
        fy: f64,
        /// Minimum tensile stress.
        fu: f64,
    },
    /// Tendon strengths.
    Tendon {
        /// Minimum yield stress.
        fy: f64,
        /// Minimum tensile stress.
        fu: f64,
    },
}

/// Restraints and springs assigned to a point, in `[UX, UY, UZ, RX, RY, RZ]` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointRestraint {
    /// `true` where the degree of freedom is restrained.
    pub restraint: [bool; 6],
    /// Spring stiffness per degree of freedom.
    pub spring: [f64; 6],
}

/// End releases of a frame in engine order `[X, Z, Y, RX, RZ, RY]`.
///
/// A `true` release flag means the degree of freedom is released; the paired spring
/// value gives its partial fixity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReleases {
    /// Releases at end I.
    pub start_release: [bool; 6],
    /// Partial fixity springs at end I.
    pub start_spring: [f64; 6],
    /// Releases at end J.
    pub end_release: [bool; 6],
    /// Partial fixity springs at end J.
    pub end_spring: [f64; 6],
}

/// Blocking request/response access to an open engine model.
///
/// Every method corresponds to one engine call and returns `Err` whenever the
/// engine reports a non-zero status, in which case no output is trusted.
pub trait SapModel {
    /// Names of all link properties, in engine order.
    fn link_names(&self) -> Result<Vec<String>, EngineError>;

    /// Behaviour type of a link property.
    fn link_type(&self, name: &str) -> Result<LinkPropType, EngineError>;

    /// Properties of a linear link property.
    fn linear_link(&self, name: &str) -> Result<LinearLinkProps, EngineError>;

    /// Create or overwrite a linear link property.
    fn set_linear_link(&mut self, name: &str, props: &LinearLinkProps) -> Result<(), EngineError>;

    /// Header of a material definition.
    fn material(&self, name: &str) -> Result<SapMaterial, EngineError>;

    /// Create a material or re-assert its classification, colour and notes.
    fn set_material(
        &mut self,
        name: &str,
        material_type: SapMaterialType,
        colour: i32,
        notes: &str,
    ) -> Result<(), EngineError>;

    /// Isotropic mechanical properties of a material.
    fn set_isotropic(&mut self, name: &str, props: &IsotropicProps) -> Result<(), EngineError>;

    /// Mass per unit volume of a material.
    fn set_mass_density(&mut self, name: &str, density: f64) -> Result<(), EngineError>;

    /// Family-specific design strengths of a material.
    fn set_strengths(&mut self, name: &str, strengths: &MaterialStrengths)
        -> Result<(), EngineError>;

    /// Restraint flags of a point.
    fn set_point_restraint(&mut self, name: &str, restraint: &[bool; 6])
        -> Result<(), EngineError>;

    /// Spring stiffness of a point.
    fn set_point_spring(&mut self, name: &str, spring: &[f64; 6]) -> Result<(), EngineError>;

    /// End releases of a frame.
    fn set_frame_releases(&mut self, name: &str, releases: &FrameReleases)
        -> Result<(), EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_codes_round_trip_for_known_types() {
        for link_type in std::iter::once(LinkPropType::Linear).chain(LinkPropType::UNSUPPORTED) {
            assert_eq!(LinkPropType::from_code(link_type.code()), link_type);
        }
    }

    #[test]
    fn unrecognised_code_is_preserved() {
        let link_type = LinkPropType::from_code(42);
        assert_eq!(link_type, LinkPropType::Other(42));
        assert_eq!(link_type.to_string(), "Unknown(42)");
    }

    #[test]
    fn unsupported_list_excludes_linear() {
        assert!(!LinkPropType::UNSUPPORTED.contains(&LinkPropType::Linear));
        assert_eq!(LinkPropType::Gap.to_string(), "Gap");
    }

    #[test]
    fn status_error_carries_code() {
        let error = check_status("PointObj.SetRestraint", "1", 3).expect_err("non-zero fails");
        assert_eq!(
            error,
            EngineError::Status {
                call: "PointObj.SetRestraint",
                name: "1".to_string(),
                code: 3,
            }
        );
    }
}
