//! Pure conversions from domain objects into engine records.

use crate::dof::Constraint6Dof;
use crate::engine::{
    IsotropicProps, LinearLinkProps, MaterialStrengths, PointRestraint, SapMaterialType,
};
use crate::model::{LinkConstraint, Material, MaterialKind, MaterialType};

/// Restraint and spring arrays for a point support.
///
/// Both arrays keep domain order `[X, Y, Z, RX, RY, RZ]`; the point API uses the
/// same axes. Only [`DofType::Fixed`](crate::DofType::Fixed) counts as restrained.
///
/// # Examples
/// ```
/// use sapx::{node_constraint_to_sap, Constraint6Dof, Dof, DofType};
///
/// let support = Constraint6Dof::pinned("Pin")
///     .with(Dof::TranslationZ, DofType::Spring)
///     .with_stiffness(Dof::TranslationZ, 2.0e6);
/// let point = node_constraint_to_sap(&support);
/// assert_eq!(point.restraint, [true, true, false, false, false, false]);
/// assert_eq!(point.spring[2], 2.0e6);
/// ```
#[must_use]
pub fn node_constraint_to_sap(support: &Constraint6Dof) -> PointRestraint {
    PointRestraint {
        restraint: support.fixed_flags(),
        spring: support.stiffness,
    }
}

/// Linear link properties for a link constraint.
///
/// All six degrees of freedom are active and fixed where the constraint couples
/// them. Stiffness, damping and the shear spring distances are always zero because
/// [`LinkConstraint`] has no fields for them.
#[must_use]
pub fn link_constraint_to_sap(link: &LinkConstraint, notes: &str) -> LinearLinkProps {
    LinearLinkProps {
        dof: [true; 6],
        fixed: link.flags(),
        stiffness: [0.0; 6],
        damping: [0.0; 6],
        dj2: 0.0,
        dj3: 0.0,
        stiffness_coupled: false,
        damping_coupled: false,
        notes: notes.to_string(),
        guid: String::new(),
    }
}

/// Engine classification for a material family.
#[must_use]
pub fn material_type_to_sap(material_type: MaterialType) -> SapMaterialType {
    match material_type {
        MaterialType::Steel => SapMaterialType::Steel,
        MaterialType::Concrete => SapMaterialType::Concrete,
        MaterialType::Aluminium => SapMaterialType::Aluminum,
        MaterialType::Rebar => SapMaterialType::Rebar,
        MaterialType::Tendon | MaterialType::Cable => SapMaterialType::Tendon,
        MaterialType::Timber | MaterialType::Glass | MaterialType::Undefined => {
            SapMaterialType::NoDesign
        }
    }
}

/// Isotropic mechanical properties of a material.
#[must_use]
pub fn isotropic_props(material: &Material) -> IsotropicProps {
    IsotropicProps {
        e: material.elasticity.youngs_modulus,
        u: material.elasticity.poissons_ratio,
        a: material.elasticity.thermal_expansion,
    }
}

/// Design strengths of a material, for the families that carry any.
#[must_use]
pub fn material_strengths(material: &Material) -> Option<MaterialStrengths> {
    match material.kind {
        MaterialKind::Steel {
            yield_strength,
            ultimate_strength,
        } => Some(MaterialStrengths::Steel {
            fy: yield_strength,
            fu: ultimate_strength,
        }),
        MaterialKind::Concrete { cylinder_strength } => Some(MaterialStrengths::Concrete {
            fc: cylinder_strength,
        }),
        MaterialKind::Rebar {
            yield_strength,
            ultimate_strength,
        } => Some(MaterialStrengths::Rebar {
            fy: yield_strength,
            fu: ultimate_strength,
        }),
        MaterialKind::Tendon {
            yield_strength,
            ultimate_strength,
        } => Some(MaterialStrengths::Tendon {
            fy: yield_strength,
            fu: ultimate_strength,
        }),
        MaterialKind::Aluminium
        | MaterialKind::Timber
        | MaterialKind::Glass
        | MaterialKind::Cable
        | MaterialKind::Generic => None,
    }
}
