//! Degree-of-freedom types shared by supports, releases and link constraints.

use serde::{Deserialize, Serialize};

/// One of the six degrees of freedom of a node or element end, in domain order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dof {
    /// Translation along the X axis.
    TranslationX,
    /// Translation along the Y axis.
    TranslationY,
    /// Translation along the Z axis.
    TranslationZ,
    /// Rotation about the X axis.
    RotationX,
    /// Rotation about the Y axis.
    RotationY,
    /// Rotation about the Z axis.
    RotationZ,
}

impl Dof {
    /// All six degrees of freedom in domain order `[X, Y, Z, RX, RY, RZ]`.
    pub const ALL: [Dof; 6] = [
        Dof::TranslationX,
        Dof::TranslationY,
        Dof::TranslationZ,
        Dof::RotationX,
        Dof::RotationY,
        Dof::RotationZ,
    ];

    /// Position of this degree of freedom in a domain-ordered array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Dof::TranslationX => 0,
            Dof::TranslationY => 1,
            Dof::TranslationZ => 2,
            Dof::RotationX => 3,
            Dof::RotationY => 4,
            Dof::RotationZ => 5,
        }
    }

    /// Position of this degree of freedom in an engine-ordered array.
    #[must_use]
    pub const fn engine_index(self) -> usize {
        ENGINE_ORDER[self.index()]
    }
}

/// Restraint state of a single degree of freedom.
///
/// Only [`DofType::Fixed`] counts as restrained when converting; every other
/// variant is treated as released, with its stiffness deciding whether the
/// degree of freedom is partially or fully released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DofType {
    /// No restraint.
    #[default]
    Free,
    /// Rigidly restrained.
    Fixed,
    /// Restrained in the positive direction only.
    FixedPositive,
    /// Restrained in the negative direction only.
    FixedNegative,
    /// Elastic restraint with the paired stiffness.
    Spring,
    /// Elastic restraint acting in the positive direction only.
    SpringPositive,
    /// Elastic restraint acting in the negative direction only.
    SpringNegative,
    /// Non-linear restraint.
    NonLinear,
}

impl DofType {
    /// Return `true` when the degree of freedom is rigidly restrained.
    #[must_use]
    pub fn is_fixed(self) -> bool {
        self == DofType::Fixed
    }
}

/// Six restraint states with a spring stiffness paired to each, in domain order.
///
/// Stiffness values are in the engine's current force/length units; translational
/// entries are force per length and rotational entries are moment per radian.
///
/// # Examples
/// ```
/// use sapx::{Constraint6Dof, Dof, DofType};
///
/// let pin = Constraint6Dof::pinned("Pin");
/// assert!(pin.dof(Dof::TranslationZ).is_fixed());
/// assert_eq!(pin.dof(Dof::RotationY), DofType::Free);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint6Dof {
    /// Name of the constraint definition.
    pub name: String,
    /// Restraint state per degree of freedom.
    pub types: [DofType; 6],
    /// Spring stiffness per degree of freedom.
    pub stiffness: [f64; 6],
}

impl Constraint6Dof {
    /// Create a constraint with every degree of freedom set to `dof_type` and zero stiffness.
    #[must_use]
    pub fn uniform(name: impl Into<String>, dof_type: DofType) -> Self {
        Self {
            name: name.into(),
            types: [dof_type; 6],
            stiffness: [0.0; 6],
        }
    }

    /// All six degrees of freedom fixed.
    #[must_use]
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::uniform(name, DofType::Fixed)
    }

    /// All six degrees of freedom free.
    #[must_use]
    pub fn free(name: impl Into<String>) -> Self {
        Self::uniform(name, DofType::Free)
    }

    /// Translations fixed, rotations free.
    #[must_use]
    pub fn pinned(name: impl Into<String>) -> Self {
        Self::fixed(name)
            .with(Dof::RotationX, DofType::Free)
            .with(Dof::RotationY, DofType::Free)
            .with(Dof::RotationZ, DofType::Free)
    }

    /// Return a copy with the restraint state of `dof` replaced.
    #[must_use]
    pub fn with(mut self, dof: Dof, dof_type: DofType) -> Self {
        self.types[dof.index()] = dof_type;
        self
    }

    /// Return a copy with the stiffness of `dof` replaced.
    #[must_use]
    pub fn with_stiffness(mut self, dof: Dof, stiffness: f64) -> Self {
        self.stiffness[dof.index()] = stiffness;
        self
    }

    /// Restraint state of `dof`.
    #[must_use]
    pub fn dof(&self, dof: Dof) -> DofType {
        self.types[dof.index()]
    }

    /// Stiffness paired with `dof`.
    #[must_use]
    pub fn stiffness_of(&self, dof: Dof) -> f64 {
        self.stiffness[dof.index()]
    }

    /// Per degree of freedom, `true` when it is fixed.
    #[must_use]
    pub fn fixed_flags(&self) -> [bool; 6] {
        self.types.map(DofType::is_fixed)
    }

    /// Per degree of freedom, `true` when it is not fixed.
    #[must_use]
    pub fn released_flags(&self) -> [bool; 6] {
        self.types.map(|dof_type| !dof_type.is_fixed())
    }
}

/// Engine slot for each domain slot: X, Y, Z, RX, RY, RZ land in 0, 2, 1, 3, 5, 4.
const ENGINE_ORDER: [usize; 6] = [0, 2, 1, 3, 5, 4];

/// Reorder a domain-ordered `[X, Y, Z, RX, RY, RZ]` array into the engine's
/// `[X, Z, Y, RX, RZ, RY]` order.
///
/// The permutation swaps the Y and Z entries of both halves, so applying it to an
/// engine-ordered array yields domain order again.
///
/// # Examples
/// ```
/// use sapx::to_engine_axis_order;
///
/// let engine = to_engine_axis_order(["x", "y", "z", "rx", "ry", "rz"]);
/// assert_eq!(engine, ["x", "z", "y", "rx", "rz", "ry"]);
/// assert_eq!(to_engine_axis_order(engine), ["x", "y", "z", "rx", "ry", "rz"]);
/// ```
#[must_use]
pub fn to_engine_axis_order<T: Copy>(domain: [T; 6]) -> [T; 6] {
    let mut engine = domain;
    for (slot, value) in domain.into_iter().enumerate() {
        engine[ENGINE_ORDER[slot]] = value;
    }
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_markers_land_in_engine_slots() {
        let markers = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        let engine = to_engine_axis_order(markers);
        assert_eq!(engine, [10.0, 30.0, 20.0, 40.0, 60.0, 50.0]);
        for dof in Dof::ALL {
            assert_eq!(engine[dof.engine_index()], markers[dof.index()]);
        }
    }

    #[test]
    fn permutation_is_its_own_inverse() {
        let domain = [1, 2, 3, 4, 5, 6];
        assert_eq!(to_engine_axis_order(to_engine_axis_order(domain)), domain);
    }

    #[test]
    fn pinned_releases_only_rotations() {
        let pin = Constraint6Dof::pinned("Pin");
        assert_eq!(pin.fixed_flags(), [true, true, true, false, false, false]);
        assert_eq!(pin.released_flags(), [false, false, false, true, true, true]);
    }

    #[test]
    fn only_fixed_counts_as_restrained() {
        for dof_type in [
            DofType::Free,
            DofType::FixedPositive,
            DofType::FixedNegative,
            DofType::Spring,
            DofType::SpringPositive,
            DofType::SpringNegative,
            DofType::NonLinear,
        ] {
            assert!(!dof_type.is_fixed(), "{dof_type:?} should count as released");
        }
        assert!(DofType::Fixed.is_fixed());
    }
}
