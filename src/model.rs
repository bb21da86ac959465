//! Vendor-neutral structural objects exchanged with the adapter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dof::Constraint6Dof;

/// Identifier of an object inside the analysis engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SapId(pub String);

impl SapId {
    /// Create an identifier from an engine name.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The engine name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Association between a domain object and its engine identifier.
pub trait AdapterTagged {
    /// Identifier previously associated with this object, if any.
    fn adapter_id(&self) -> Option<&SapId>;

    /// Associate this object with `id` for later round-trip lookups.
    fn set_adapter_id(&mut self, id: SapId);
}

/// Implement [`AdapterTagged`] for types with an `adapter_id` field.
macro_rules! impl_adapter_tagged {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AdapterTagged for $ty {
                fn adapter_id(&self) -> Option<&SapId> {
                    self.adapter_id.as_ref()
                }

                fn set_adapter_id(&mut self, id: SapId) {
                    self.adapter_id = Some(id);
                }
            }
        )*
    };
}

impl_adapter_tagged!(Node, Bar, LinkConstraint, Material);

/// A structural node with an optional support.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node name, also used as the engine point name.
    pub name: String,
    /// Support conditions; `None` for an unsupported node.
    pub support: Option<Constraint6Dof>,
    /// Engine identifier once associated.
    pub adapter_id: Option<SapId>,
}

impl Node {
    /// Create a node without a support.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Return a copy carrying `support`.
    #[must_use]
    pub fn with_support(mut self, support: Constraint6Dof) -> Self {
        self.support = Some(support);
        self
    }
}

/// End releases of a linear element.
///
/// Either side may be absent, which means no release has been configured.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarRelease {
    /// Name of the release definition.
    pub name: String,
    /// Release at the start of the bar.
    pub start_release: Option<Constraint6Dof>,
    /// Release at the end of the bar.
    pub end_release: Option<Constraint6Dof>,
}

impl BarRelease {
    /// Create a release with both ends configured.
    #[must_use]
    pub fn new(name: impl Into<String>, start: Constraint6Dof, end: Constraint6Dof) -> Self {
        Self {
            name: name.into(),
            start_release: Some(start),
            end_release: Some(end),
        }
    }

    /// Both ends fully fixed.
    #[must_use]
    pub fn fix_fix() -> Self {
        Self::new(
            "FixFix",
            Constraint6Dof::fixed("StartFixed"),
            Constraint6Dof::fixed("EndFixed"),
        )
    }
}

/// A linear element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar name, also used as the engine frame name.
    pub name: String,
    /// End releases; `None` leaves the engine's releases untouched.
    pub release: Option<BarRelease>,
    /// Engine identifier once associated.
    pub adapter_id: Option<SapId>,
}

impl Bar {
    /// Create a bar without releases.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Return a copy carrying `release`.
    #[must_use]
    pub fn with_release(mut self, release: BarRelease) -> Self {
        self.release = Some(release);
        self
    }
}

/// Rigid coupling between the degrees of freedom of two linked nodes.
///
/// A `true` flag means the pair of degrees of freedom is fixed together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConstraint {
    /// Name of the link property.
    pub name: String,
    /// Couple translation X to translation X.
    pub x_to_x: bool,
    /// Couple translation Y to translation Y.
    pub y_to_y: bool,
    /// Couple translation Z to translation Z.
    pub z_to_z: bool,
    /// Couple rotation X to rotation X.
    pub xx_to_xx: bool,
    /// Couple rotation Y to rotation Y.
    pub yy_to_yy: bool,
    /// Couple rotation Z to rotation Z.
    pub zz_to_zz: bool,
    /// Engine identifier once associated.
    pub adapter_id: Option<SapId>,
}

impl LinkConstraint {
    /// Flags in `[X, Y, Z, XX, YY, ZZ]` order.
    #[must_use]
    pub fn flags(&self) -> [bool; 6] {
        [
            self.x_to_x,
            self.y_to_y,
            self.z_to_z,
            self.xx_to_xx,
            self.yy_to_yy,
            self.zz_to_zz,
        ]
    }

    /// Create a named constraint from flags in `[X, Y, Z, XX, YY, ZZ]` order.
    #[must_use]
    pub fn from_flags(name: impl Into<String>, flags: [bool; 6]) -> Self {
        let [x_to_x, y_to_y, z_to_z, xx_to_xx, yy_to_yy, zz_to_zz] = flags;
        Self {
            name: name.into(),
            x_to_x,
            y_to_y,
            z_to_z,
            xx_to_xx,
            yy_to_yy,
            zz_to_zz,
            adapter_id: None,
        }
    }
}

/// Material family of a domain material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    /// Structural steel.
    Steel,
    /// Concrete.
    Concrete,
    /// Aluminium alloy.
    Aluminium,
    /// Timber.
    Timber,
    /// Reinforcing steel.
    Rebar,
    /// Prestressing steel.
    Tendon,
    /// Glass.
    Glass,
    /// Cable steel.
    Cable,
    /// Family not known.
    Undefined,
}

/// Linear elastic constants of an isotropic material, in SI units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Elasticity {
    /// Young's modulus in pascals.
    pub youngs_modulus: f64,
    /// Poisson's ratio.
    pub poissons_ratio: f64,
    /// Coefficient of thermal expansion per kelvin.
    pub thermal_expansion: f64,
}

/// Family-specific data of a material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialKind {
    /// Structural steel.
    Steel {
        /// Yield strength in pascals.
        yield_strength: f64,
        /// Ultimate strength in pascals.
        ultimate_strength: f64,
    },
    /// Concrete.
    Concrete {
        /// Characteristic cylinder strength in pascals.
        cylinder_strength: f64,
    },
    /// Aluminium alloy.
    Aluminium,
    /// Timber.
    Timber,
    /// Reinforcing steel.
    Rebar {
        /// Yield strength in pascals.
        yield_strength: f64,
        /// Ultimate strength in pascals.
        ultimate_strength: f64,
    },
    /// Prestressing steel.
    Tendon {
        /// Yield strength in pascals.
        yield_strength: f64,
        /// Ultimate strength in pascals.
        ultimate_strength: f64,
    },
    /// Glass.
    Glass,
    /// Cable steel.
    Cable,
    /// Anything without family-specific data.
    Generic,
}

impl MaterialKind {
    /// Family of this material.
    #[must_use]
    pub fn material_type(&self) -> MaterialType {
        match self {
            MaterialKind::Steel { .. } => MaterialType::Steel,
            MaterialKind::Concrete { .. } => MaterialType::Concrete,
            MaterialKind::Aluminium => MaterialType::Aluminium,
            MaterialKind::Timber => MaterialType::Timber,
            MaterialKind::Rebar { .. } => MaterialType::Rebar,
            MaterialKind::Tendon { .. } => MaterialType::Tendon,
            MaterialKind::Glass => MaterialType::Glass,
            MaterialKind::Cable => MaterialType::Cable,
            MaterialKind::Generic => MaterialType::Undefined,
        }
    }
}

/// An isotropic structural material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name; may be empty when only a description is available.
    pub name: String,
    /// Free-form description used when no name is set.
    #[serde(default)]
    pub description: String,
    /// Mass density in kilograms per cubic metre.
    pub density: f64,
    /// Elastic constants.
    pub elasticity: Elasticity,
    /// Family-specific data.
    pub kind: MaterialKind,
    /// Engine identifier once associated.
    #[serde(default)]
    pub adapter_id: Option<SapId>,
}

impl Material {
    /// Structural steel with typical S355 properties.
    #[must_use]
    pub fn steel(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            density: 7_850.0,
            elasticity: Elasticity {
                youngs_modulus: 210.0e9,
                poissons_ratio: 0.3,
                thermal_expansion: 1.2e-5,
            },
            kind: MaterialKind::Steel {
                yield_strength: 355.0e6,
                ultimate_strength: 510.0e6,
            },
            adapter_id: None,
        }
    }

    /// Normal weight concrete with a C30/37 cylinder strength.
    #[must_use]
    pub fn concrete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            density: 2_400.0,
            elasticity: Elasticity {
                youngs_modulus: 33.0e9,
                poissons_ratio: 0.2,
                thermal_expansion: 1.0e-5,
            },
            kind: MaterialKind::Concrete {
                cylinder_strength: 30.0e6,
            },
            adapter_id: None,
        }
    }

    /// Family of this material.
    #[must_use]
    pub fn material_type(&self) -> MaterialType {
        self.kind.material_type()
    }

    /// The name when set, otherwise the description.
    ///
    /// # Examples
    /// ```
    /// use sapx::Material;
    ///
    /// let mut material = Material::steel("");
    /// material.description = "Steel S355".to_string();
    /// assert_eq!(material.description_or_name(), "Steel S355");
    /// ```
    #[must_use]
    pub fn description_or_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.description
        } else {
            &self.name
        }
    }
}
