//! In-process engine model used by tests and the demonstration binary.

use std::collections::{BTreeMap, BTreeSet};

use crate::engine::{
    check_status, FrameReleases, IsotropicProps, LinearLinkProps, LinkPropType,
    MaterialStrengths, PointRestraint, SapMaterial, SapMaterialType, SapModel,
};
use crate::errors::EngineError;

/// Status code reported for calls configured to fail.
const FAILED: i32 = 1;

/// A link property stored by [`MemoryModel`].
#[derive(Clone, Debug, PartialEq)]
struct LinkEntry {
    /// Property name.
    name: String,
    /// Behaviour type.
    link_type: LinkPropType,
    /// Linear properties; only meaningful for [`LinkPropType::Linear`].
    linear: LinearLinkProps,
}

/// A material stored by [`MemoryModel`].
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialEntry {
    /// Classification, colour and notes.
    pub header: SapMaterial,
    /// Isotropic mechanical properties, once set.
    pub isotropic: Option<IsotropicProps>,
    /// Mass density, once set.
    pub density: Option<f64>,
    /// Design strengths, once set.
    pub strengths: Option<MaterialStrengths>,
}

/// Engine model held entirely in memory.
///
/// Link properties keep insertion order, matching the engine's name list. Any call
/// can be made to report a failing status with [`MemoryModel::fail_call`], and every
/// successful mutating call is counted so tests can prove the model was untouched.
///
/// # Examples
/// ```
/// use sapx::{LinkPropType, MemoryModel, SapModel};
///
/// let model = MemoryModel::new().with_link("Gap1", LinkPropType::Gap, Default::default());
/// assert_eq!(model.link_names().expect("names"), vec!["Gap1".to_string()]);
/// assert_eq!(model.link_type("Gap1").expect("type"), LinkPropType::Gap);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryModel {
    /// Link properties in insertion order.
    links: Vec<LinkEntry>,
    /// Materials by name.
    materials: BTreeMap<String, MaterialEntry>,
    /// Point objects by name.
    points: BTreeMap<String, PointRestraint>,
    /// Frame objects by name.
    frames: BTreeMap<String, FrameReleases>,
    /// Engine calls that report a failing status.
    failing: BTreeSet<&'static str>,
    /// Number of successful mutating calls.
    writes: usize,
}

impl MemoryModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy holding an additional link property.
    #[must_use]
    pub fn with_link(
        mut self,
        name: impl Into<String>,
        link_type: LinkPropType,
        linear: LinearLinkProps,
    ) -> Self {
        self.insert_link(name.into(), link_type, linear);
        self
    }

    /// Return a copy holding a material with the given classification.
    #[must_use]
    pub fn with_material(mut self, name: impl Into<String>, material_type: SapMaterialType) -> Self {
        self.materials.insert(
            name.into(),
            MaterialEntry {
                header: SapMaterial {
                    material_type,
                    colour: -1,
                    notes: String::new(),
                    guid: String::new(),
                },
                isotropic: None,
                density: None,
                strengths: None,
            },
        );
        self
    }

    /// Return a copy holding a point object without restraints.
    #[must_use]
    pub fn with_point(mut self, name: impl Into<String>) -> Self {
        self.points.insert(name.into(), PointRestraint::default());
        self
    }

    /// Return a copy holding a frame object without releases.
    #[must_use]
    pub fn with_frame(mut self, name: impl Into<String>) -> Self {
        self.frames.insert(name.into(), FrameReleases::default());
        self
    }

    /// Make every later `call` report a failing status.
    ///
    /// Call names follow the engine API, for example `"PropMaterial.SetMPIsotropic"`.
    pub fn fail_call(&mut self, call: &'static str) {
        self.failing.insert(call);
    }

    /// Stored material, if any.
    #[must_use]
    pub fn material_entry(&self, name: &str) -> Option<&MaterialEntry> {
        self.materials.get(name)
    }

    /// Restraints and springs of a point, if it exists.
    #[must_use]
    pub fn point(&self, name: &str) -> Option<&PointRestraint> {
        self.points.get(name)
    }

    /// Releases of a frame, if it exists.
    #[must_use]
    pub fn frame_releases(&self, name: &str) -> Option<&FrameReleases> {
        self.frames.get(name)
    }

    /// Number of successful mutating calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Report the configured status for `call`.
    fn status(&self, call: &'static str, name: &str) -> Result<(), EngineError> {
        let code = if self.failing.contains(call) { FAILED } else { 0 };
        check_status(call, name, code)
    }

    /// Insert a link property or replace the one with the same name.
    fn insert_link(&mut self, name: String, link_type: LinkPropType, linear: LinearLinkProps) {
        match self.links.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.link_type = link_type;
                entry.linear = linear;
            }
            None => self.links.push(LinkEntry {
                name,
                link_type,
                linear,
            }),
        }
    }

    /// Look up a link property by name.
    fn link(&self, name: &str) -> Result<&LinkEntry, EngineError> {
        self.links
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| EngineError::NotFound {
                kind: "link property",
                name: name.to_string(),
            })
    }

    /// Look up a material by name for modification.
    fn material_mut(&mut self, name: &str) -> Result<&mut MaterialEntry, EngineError> {
        self.materials
            .get_mut(name)
            .ok_or_else(|| EngineError::NotFound {
                kind: "material",
                name: name.to_string(),
            })
    }
}

impl SapModel for MemoryModel {
    fn link_names(&self) -> Result<Vec<String>, EngineError> {
        self.status("PropLink.GetNameList", "")?;
        Ok(self.links.iter().map(|entry| entry.name.clone()).collect())
    }

    fn link_type(&self, name: &str) -> Result<LinkPropType, EngineError> {
        self.status("PropLink.GetTypeOAPI", name)?;
        Ok(self.link(name)?.link_type)
    }

    fn linear_link(&self, name: &str) -> Result<LinearLinkProps, EngineError> {
        self.status("PropLink.GetLinear", name)?;
        let entry = self.link(name)?;
        if entry.link_type != LinkPropType::Linear {
            return Err(EngineError::Status {
                call: "PropLink.GetLinear",
                name: name.to_string(),
                code: FAILED,
            });
        }
        Ok(entry.linear.clone())
    }

    fn set_linear_link(&mut self, name: &str, props: &LinearLinkProps) -> Result<(), EngineError> {
        self.status("PropLink.SetLinear", name)?;
        self.insert_link(name.to_string(), LinkPropType::Linear, props.clone());
        self.writes += 1;
        Ok(())
    }

    fn material(&self, name: &str) -> Result<SapMaterial, EngineError> {
        self.status("PropMaterial.GetMaterial", name)?;
        self.materials
            .get(name)
            .map(|entry| entry.header.clone())
            .ok_or_else(|| EngineError::NotFound {
                kind: "material",
                name: name.to_string(),
            })
    }

    fn set_material(
        &mut self,
        name: &str,
        material_type: SapMaterialType,
        colour: i32,
        notes: &str,
    ) -> Result<(), EngineError> {
        self.status("PropMaterial.SetMaterial", name)?;
        let header = SapMaterial {
            material_type,
            colour,
            notes: notes.to_string(),
            guid: String::new(),
        };
        match self.materials.get_mut(name) {
            Some(entry) => {
                entry.header = SapMaterial {
                    guid: std::mem::take(&mut entry.header.guid),
                    ..header
                };
            }
            None => {
                self.materials.insert(
                    name.to_string(),
                    MaterialEntry {
                        header,
                        isotropic: None,
                        density: None,
                        strengths: None,
                    },
                );
            }
        }
        self.writes += 1;
        Ok(())
    }

    fn set_isotropic(&mut self, name: &str, props: &IsotropicProps) -> Result<(), EngineError> {
        self.status("PropMaterial.SetMPIsotropic", name)?;
        self.material_mut(name)?.isotropic = Some(*props);
        self.writes += 1;
        Ok(())
    }

    fn set_mass_density(&mut self, name: &str, density: f64) -> Result<(), EngineError> {
        self.status("PropMaterial.SetWeightAndMass", name)?;
        self.material_mut(name)?.density = Some(density);
        self.writes += 1;
        Ok(())
    }

    fn set_strengths(
        &mut self,
        name: &str,
        strengths: &MaterialStrengths,
    ) -> Result<(), EngineError> {
        let call = match strengths {
            MaterialStrengths::Steel { .. } => "PropMaterial.SetOSteel_1",
            MaterialStrengths::Concrete { .. } => "PropMaterial.SetOConcrete_1",
            MaterialStrengths::Rebar { .. } => "PropMaterial.SetORebar_1",
            MaterialStrengths::Tendon { .. } => "PropMaterial.SetOTendon_1",
        };
        self.status(call, name)?;
        self.material_mut(name)?.strengths = Some(*strengths);
        self.writes += 1;
        Ok(())
    }

    fn set_point_restraint(
        &mut self,
        name: &str,
        restraint: &[bool; 6],
    ) -> Result<(), EngineError> {
        self.status("PointObj.SetRestraint", name)?;
        let point = self.points.get_mut(name).ok_or_else(|| EngineError::NotFound {
            kind: "point",
            name: name.to_string(),
        })?;
        point.restraint = *restraint;
        self.writes += 1;
        Ok(())
    }

    fn set_point_spring(&mut self, name: &str, spring: &[f64; 6]) -> Result<(), EngineError> {
        self.status("PointObj.SetSpring", name)?;
        let point = self.points.get_mut(name).ok_or_else(|| EngineError::NotFound {
            kind: "point",
            name: name.to_string(),
        })?;
        point.spring = *spring;
        self.writes += 1;
        Ok(())
    }

    fn set_frame_releases(
        &mut self,
        name: &str,
        releases: &FrameReleases,
    ) -> Result<(), EngineError> {
        self.status("FrameObj.SetReleases", name)?;
        let frame = self.frames.get_mut(name).ok_or_else(|| EngineError::NotFound {
            kind: "frame",
            name: name.to_string(),
        })?;
        *frame = *releases;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_call_reports_status() {
        let mut model = MemoryModel::new().with_material("S355", SapMaterialType::Steel);
        model.fail_call("PropMaterial.GetMaterial");
        let error = model.material("S355").expect_err("configured to fail");
        assert!(matches!(error, EngineError::Status { code: FAILED, .. }));
    }

    #[test]
    fn setting_a_link_keeps_its_position() {
        let mut model = MemoryModel::new()
            .with_link("A", LinkPropType::Gap, LinearLinkProps::default())
            .with_link("B", LinkPropType::Linear, LinearLinkProps::default());
        model
            .set_linear_link("A", &LinearLinkProps::default())
            .expect("overwrite succeeds");
        assert_eq!(model.link_names().expect("names"), ["A", "B"]);
        assert_eq!(model.link_type("A").expect("type"), LinkPropType::Linear);
        assert_eq!(model.write_count(), 1);
    }

    #[test]
    fn reasserting_a_material_keeps_its_guid() {
        let mut model = MemoryModel::new().with_material("C30", SapMaterialType::Concrete);
        if let Some(entry) = model.materials.get_mut("C30") {
            entry.header.guid = "guid-1".to_string();
        }
        model
            .set_material("C30", SapMaterialType::Concrete, 3, "updated")
            .expect("set succeeds");
        let header = model.material("C30").expect("material exists");
        assert_eq!(header.guid, "guid-1");
        assert_eq!(header.notes, "updated");
    }

    #[test]
    fn setters_require_existing_objects() {
        let mut model = MemoryModel::new();
        assert!(matches!(
            model.set_point_restraint("1", &[true; 6]),
            Err(EngineError::NotFound { kind: "point", .. })
        ));
        assert!(matches!(
            model.set_mass_density("S355", 7850.0),
            Err(EngineError::NotFound {
                kind: "material",
                ..
            })
        ));
        assert_eq!(model.write_count(), 0);
    }
}
