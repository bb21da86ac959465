#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod adapter;
pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod dof;
pub mod engine;
pub mod errors;
pub mod memory;
pub mod model;
pub mod push;
pub mod read;
pub mod release;
pub mod update;

pub use adapter::{filter_ids, Adapter};
pub use config::AdapterSettings;
pub use convert::{
    isotropic_props, link_constraint_to_sap, material_strengths, material_type_to_sap,
    node_constraint_to_sap,
};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use dof::{to_engine_axis_order, Constraint6Dof, Dof, DofType};
pub use engine::{
    check_status, FrameReleases, IsotropicProps, LinearLinkProps, LinkPropType,
    MaterialStrengths, PointRestraint, SapMaterial, SapMaterialType, SapModel,
};
pub use errors::{BarEnd, ConfigError, EngineError, ReleaseError};
pub use memory::{MaterialEntry, MemoryModel};
pub use model::{
    AdapterTagged, Bar, BarRelease, Elasticity, LinkConstraint, Material, MaterialKind,
    MaterialType, Node, SapId,
};
pub use release::{bar_release_to_sap, fully_released, StabilityRule};
pub use update::UpdateOutcome;
