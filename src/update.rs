//! Updating existing engine definitions from domain objects.

use tracing::{debug, info};

use crate::adapter::Adapter;
use crate::convert::{isotropic_props, material_strengths, material_type_to_sap};
use crate::engine::SapModel;
use crate::errors::EngineError;
use crate::model::{AdapterTagged, Material, SapId};

/// What happened to one material in an update batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Every field was written.
    Updated,
    /// Some fields could not be written.
    Partial,
    /// No material of that name exists; nothing was written.
    NotFound,
    /// The existing material has a different classification; nothing was written.
    TypeMismatch,
}

impl<M: SapModel> Adapter<M> {
    /// Update existing materials in place.
    ///
    /// Materials are matched by [`Material::description_or_name`]. A material that
    /// is missing from the model, or whose engine classification differs from its
    /// family, is skipped with a warning; materials are never created here. Each
    /// material is processed independently and one outcome is returned per input.
    pub fn update_materials(&mut self, materials: &mut [Material]) -> Vec<UpdateOutcome> {
        materials
            .iter_mut()
            .map(|material| self.update_material(material))
            .collect()
    }

    /// Update one material if it exists with the same family.
    fn update_material(&mut self, material: &mut Material) -> UpdateOutcome {
        let name = material.description_or_name().to_string();
        let existing = match self.model.material(&name) {
            Ok(existing) => existing,
            Err(EngineError::NotFound { .. }) => {
                self.diagnostics.warning(format!(
                    "Failed to update material: {name}, as no such material was present in the model."
                ));
                return UpdateOutcome::NotFound;
            }
            Err(error) => {
                self.diagnostics.warning(format!(
                    "Failed to update material: {name}, as it could not be read from the model: {error}"
                ));
                return UpdateOutcome::NotFound;
            }
        };

        let expected = material_type_to_sap(material.material_type());
        if existing.material_type != expected {
            self.diagnostics.warning(format!(
                "Failed to update material: {name}, can't update to another material type ({:?} to {expected:?}).",
                existing.material_type
            ));
            return UpdateOutcome::TypeMismatch;
        }

        let failures = self.push_material_fields(&name, material, &existing.notes);
        material.set_adapter_id(SapId::new(name.as_str()));
        if failures.is_empty() {
            info!(material = %name, "material updated");
            UpdateOutcome::Updated
        } else {
            for failure in &failures {
                debug!(material = %name, %failure, "material field not set");
            }
            self.diagnostics.warning(format!(
                "Failed to update material: {name}, all properties may not have been set."
            ));
            UpdateOutcome::Partial
        }
    }

    /// Write every updatable field of `material` to the engine entry `name`.
    ///
    /// All setters are attempted even after one fails; the failures are returned.
    pub(crate) fn push_material_fields(
        &mut self,
        name: &str,
        material: &Material,
        notes: &str,
    ) -> Vec<EngineError> {
        let material_type = material_type_to_sap(material.material_type());
        let colour = self.settings.material_colour;
        let mut results = vec![
            self.model.set_material(name, material_type, colour, notes),
            self.model.set_isotropic(name, &isotropic_props(material)),
            self.model.set_mass_density(name, material.density),
        ];
        if let Some(strengths) = material_strengths(material) {
            results.push(self.model.set_strengths(name, &strengths));
        }
        results.into_iter().filter_map(Result::err).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::diagnostics::Severity;
    use crate::engine::{MaterialStrengths, SapMaterialType};
    use crate::memory::MemoryModel;

    #[test]
    fn matching_material_receives_all_fields() {
        let model = MemoryModel::new().with_material("S355", SapMaterialType::Steel);
        let mut adapter = Adapter::new(model);
        let mut materials = vec![Material::steel("S355")];

        let outcomes = adapter.update_materials(&mut materials);
        assert_eq!(outcomes, [UpdateOutcome::Updated]);
        assert!(adapter.diagnostics().is_empty());
        assert_eq!(materials[0].adapter_id().map(SapId::as_str), Some("S355"));

        let entry = adapter
            .model()
            .material_entry("S355")
            .expect("material kept");
        let isotropic = entry.isotropic.expect("isotropic set");
        assert_relative_eq!(isotropic.e, 210.0e9);
        assert_relative_eq!(entry.density.expect("density set"), 7_850.0);
        assert!(matches!(
            entry.strengths,
            Some(MaterialStrengths::Steel { .. })
        ));
    }

    #[test]
    fn type_change_is_refused() {
        let model = MemoryModel::new().with_material("C30", SapMaterialType::Concrete);
        let mut adapter = Adapter::new(model);
        let mut materials = vec![Material::steel("C30")];

        let outcomes = adapter.update_materials(&mut materials);
        assert_eq!(outcomes, [UpdateOutcome::TypeMismatch]);
        assert!(adapter
            .diagnostics()
            .contains("can't update to another material type"));
        assert_eq!(adapter.model().write_count(), 0);
        assert!(materials[0].adapter_id().is_none());
    }

    #[test]
    fn failing_setter_gives_one_aggregate_warning() {
        let mut model = MemoryModel::new().with_material("S355", SapMaterialType::Steel);
        model.fail_call("PropMaterial.SetMPIsotropic");
        model.fail_call("PropMaterial.SetOSteel_1");
        let mut adapter = Adapter::new(model);
        let mut materials = vec![Material::steel("S355")];

        let outcomes = adapter.update_materials(&mut materials);
        assert_eq!(outcomes, [UpdateOutcome::Partial]);
        assert_eq!(adapter.diagnostics().count(Severity::Warning), 1);
        assert!(adapter
            .diagnostics()
            .contains("all properties may not have been set"));

        // Setters after the failing one still ran.
        let entry = adapter
            .model()
            .material_entry("S355")
            .expect("material kept");
        assert_eq!(entry.density, Some(7_850.0));
    }

    #[test]
    fn description_is_used_when_name_is_empty() {
        let model = MemoryModel::new().with_material("Concrete C30/37", SapMaterialType::Concrete);
        let mut adapter = Adapter::new(model);
        let mut material = Material::concrete("");
        material.description = "Concrete C30/37".to_string();

        let outcomes = adapter.update_materials(std::slice::from_mut(&mut material));
        assert_eq!(outcomes, [UpdateOutcome::Updated]);
    }
}
