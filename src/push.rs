//! Writing domain objects to the engine.

use tracing::debug;

use crate::adapter::Adapter;
use crate::convert::{link_constraint_to_sap, node_constraint_to_sap};
use crate::engine::SapModel;
use crate::model::{AdapterTagged, Bar, LinkConstraint, Node, SapId};
use crate::release::bar_release_to_sap;

impl<M: SapModel> Adapter<M> {
    /// Create or overwrite linear link properties from link constraints.
    ///
    /// Returns the number of constraints written. Each written constraint is tagged
    /// with its engine id; a failure is recorded as a warning and the remaining
    /// constraints are still written.
    pub fn create_link_constraints(&mut self, constraints: &mut [LinkConstraint]) -> usize {
        let mut written = 0;
        for constraint in constraints.iter_mut() {
            let props = link_constraint_to_sap(constraint, &self.settings.link_notes);
            match self.model.set_linear_link(&constraint.name, &props) {
                Ok(()) => {
                    constraint.set_adapter_id(SapId::new(constraint.name.as_str()));
                    written += 1;
                }
                Err(error) => self.diagnostics.warning(format!(
                    "Failed to create link constraint {}: {error}",
                    constraint.name
                )),
            }
        }
        written
    }

    /// Assign node supports to the engine's point objects of the same name.
    ///
    /// Nodes without a support are skipped with a note. Returns the number of nodes
    /// whose restraints and springs were both written.
    pub fn set_node_supports(&mut self, nodes: &mut [Node]) -> usize {
        let mut written = 0;
        for node in nodes.iter_mut() {
            let Some(support) = &node.support else {
                self.diagnostics
                    .note(format!("Node {} has no support, no restraint was set", node.name));
                continue;
            };
            let point = node_constraint_to_sap(support);
            let restraint = self.model.set_point_restraint(&node.name, &point.restraint);
            let spring = self.model.set_point_spring(&node.name, &point.spring);
            match restraint.and(spring) {
                Ok(()) => {
                    debug!(node = %node.name, support = %support.name, "support assigned");
                    node.set_adapter_id(SapId::new(node.name.as_str()));
                    written += 1;
                }
                Err(error) => self.diagnostics.warning(format!(
                    "Failed to set support {} on node {}: {error}",
                    support.name, node.name
                )),
            }
        }
        written
    }

    /// Assign bar end releases to the engine's frame objects of the same name.
    ///
    /// Bars without a release are left untouched. Releases that are incomplete or
    /// unstable are reported by the conversion and not sent to the engine. Returns
    /// the number of bars whose releases were written.
    pub fn set_bar_releases(&mut self, bars: &mut [Bar]) -> usize {
        let mut written = 0;
        for bar in bars.iter_mut() {
            let Some(release) = &bar.release else {
                continue;
            };
            let Ok(arrays) = bar_release_to_sap(release, &mut self.diagnostics) else {
                continue;
            };
            match self.model.set_frame_releases(&bar.name, &arrays) {
                Ok(()) => {
                    bar.set_adapter_id(SapId::new(bar.name.as_str()));
                    written += 1;
                }
                Err(error) => self.diagnostics.warning(format!(
                    "Failed to set release {} on bar {}: {error}",
                    release.name, bar.name
                )),
            }
        }
        written
    }
}
