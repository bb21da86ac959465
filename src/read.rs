//! Reading engine properties back into domain objects.

use tracing::debug;

use crate::adapter::{filter_ids, Adapter};
use crate::engine::{LinkPropType, SapModel};
use crate::model::{AdapterTagged, LinkConstraint, SapId};

impl<M: SapModel> Adapter<M> {
    /// Read link properties as link constraints.
    ///
    /// `ids` selects the properties to read; `None` or an empty slice reads all
    /// of them. Exactly one constraint is returned per selected id, in selection
    /// order. Only linear links are mapped; any other type yields a constraint
    /// carrying nothing but its adapter id, and a warning naming the type.
    /// Stiffness and damping of linear links have no domain counterpart, so a
    /// warning is recorded when either is non-zero.
    pub fn read_link_constraints(&mut self, ids: Option<&[String]>) -> Vec<LinkConstraint> {
        let names = match self.model.link_names() {
            Ok(names) => names,
            Err(error) => {
                self.diagnostics
                    .warning(format!("Failed to read link constraint names: {error}"));
                return Vec::new();
            }
        };
        let ids = filter_ids(
            ids,
            &names,
            self.settings.warn_on_unknown_ids,
            &mut self.diagnostics,
        );
        debug!(count = ids.len(), "reading link constraints");

        ids.into_iter()
            .map(|id| self.read_link_constraint(id))
            .collect()
    }

    /// Read one link property, tagged with its engine name.
    fn read_link_constraint(&mut self, id: String) -> LinkConstraint {
        let mut constraint = LinkConstraint::default();
        constraint.set_adapter_id(SapId::new(id.as_str()));

        let link_type = match self.model.link_type(&id) {
            Ok(link_type) => link_type,
            Err(error) => {
                self.diagnostics.warning(format!(
                    "Failed to read the type of link constraint {id}: {error}. {id} will be returned as an empty LinkConstraint"
                ));
                return constraint;
            }
        };

        match link_type {
            LinkPropType::Linear => self.read_linear_link(id).unwrap_or(constraint),
            LinkPropType::Damper
            | LinkPropType::Gap
            | LinkPropType::Hook
            | LinkPropType::PlasticWen
            | LinkPropType::Isolator1
            | LinkPropType::Isolator2
            | LinkPropType::MultilinearElastic
            | LinkPropType::MultilinearPlastic
            | LinkPropType::Isolator3
            | LinkPropType::Other(_) => {
                self.diagnostics.warning(format!(
                    "Reading of LinkConstraint of type {link_type} not implemented. {id} will be returned as an empty LinkConstraint"
                ));
                constraint
            }
        }
    }

    /// Map a linear link; `None` after recording a warning when the engine call fails.
    fn read_linear_link(&mut self, id: String) -> Option<LinkConstraint> {
        let props = match self.model.linear_link(&id) {
            Ok(props) => props,
            Err(error) => {
                self.diagnostics.warning(format!(
                    "Failed to read linear link constraint {id}: {error}. {id} will be returned as an empty LinkConstraint"
                ));
                return None;
            }
        };

        let mut constraint = LinkConstraint::from_flags(id.as_str(), props.fixed);
        constraint.set_adapter_id(SapId::new(id.as_str()));

        if props.stiffness.iter().any(|&k| k != 0.0) {
            self.diagnostics.warning(format!(
                "No stiffness read for link constraint {id}; LinkConstraint has no stiffness properties"
            ));
        }
        if props.damping.iter().any(|&c| c != 0.0) {
            self.diagnostics.warning(format!(
                "No damping read for link constraint {id}; LinkConstraint has no damping properties"
            ));
        }
        Some(constraint)
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::Severity;
    use crate::engine::LinearLinkProps;
    use crate::memory::MemoryModel;

    use super::*;

    fn linear(fixed: [bool; 6]) -> LinearLinkProps {
        LinearLinkProps {
            dof: [true; 6],
            fixed,
            ..LinearLinkProps::default()
        }
    }

    #[test]
    fn linear_flags_are_read_positionally() {
        let model = MemoryModel::new().with_link(
            "Rigid",
            LinkPropType::Linear,
            linear([true, false, true, false, true, false]),
        );
        let mut adapter = Adapter::new(model);

        let constraints = adapter.read_link_constraints(None);
        assert_eq!(constraints.len(), 1);
        let rigid = &constraints[0];
        assert_eq!(rigid.name, "Rigid");
        assert_eq!(rigid.flags(), [true, false, true, false, true, false]);
        assert_eq!(rigid.adapter_id().map(SapId::as_str), Some("Rigid"));
        assert!(adapter.diagnostics().is_empty());
    }

    #[test]
    fn every_unsupported_type_is_returned_empty_with_warning() {
        let model = LinkPropType::UNSUPPORTED
            .into_iter()
            .fold(MemoryModel::new(), |model, link_type| {
                model.with_link(link_type.to_string(), link_type, LinearLinkProps::default())
            });
        let mut adapter = Adapter::new(model);

        let constraints = adapter.read_link_constraints(None);
        assert_eq!(constraints.len(), LinkPropType::UNSUPPORTED.len());
        for (constraint, link_type) in constraints.iter().zip(LinkPropType::UNSUPPORTED) {
            let id = SapId::new(link_type.to_string());
            let expected = LinkConstraint {
                adapter_id: Some(id),
                ..LinkConstraint::default()
            };
            assert_eq!(constraint, &expected);
        }
        assert_eq!(
            adapter.diagnostics().count(Severity::Warning),
            LinkPropType::UNSUPPORTED.len()
        );
    }

    #[test]
    fn lossy_read_warns_about_stiffness_and_damping() {
        let mut props = linear([true; 6]);
        props.stiffness[1] = 1.0e6;
        props.damping[5] = 0.5;
        let model = MemoryModel::new().with_link("Spring", LinkPropType::Linear, props);
        let mut adapter = Adapter::new(model);

        let constraints = adapter.read_link_constraints(None);
        assert_eq!(constraints[0].flags(), [true; 6]);
        let diagnostics = adapter.diagnostics();
        assert_eq!(diagnostics.count(Severity::Warning), 2);
        assert!(diagnostics.contains("No stiffness read"));
        assert!(diagnostics.contains("No damping read"));
    }

    #[test]
    fn failed_type_query_still_yields_tagged_constraint() {
        let mut model = MemoryModel::new().with_link(
            "L1",
            LinkPropType::Linear,
            linear([true; 6]),
        );
        model.fail_call("PropLink.GetTypeOAPI");
        let mut adapter = Adapter::new(model);

        let constraints = adapter.read_link_constraints(None);
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].adapter_id().map(SapId::as_str), Some("L1"));
        assert_eq!(constraints[0].flags(), [false; 6]);
        assert!(adapter.diagnostics().contains("Failed to read the type"));
    }

    #[test]
    fn failed_name_list_reads_nothing() {
        let mut model = MemoryModel::new().with_link("L1", LinkPropType::Linear, linear([true; 6]));
        model.fail_call("PropLink.GetNameList");
        let mut adapter = Adapter::new(model);

        assert!(adapter.read_link_constraints(None).is_empty());
        assert_eq!(adapter.diagnostics().count(Severity::Warning), 1);
    }
}
