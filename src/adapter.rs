//! The adapter handle that owns an engine model for one session.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::AdapterSettings;
use crate::diagnostics::Diagnostics;
use crate::engine::SapModel;

/// Maps domain objects onto an open engine model.
///
/// Read, update and push operations live in their own modules and are
/// implemented on this type. None of them fail as a whole: every problem with
/// a single object is recorded in [`Adapter::diagnostics`] and the remaining
/// objects are still processed.
#[derive(Debug)]
pub struct Adapter<M> {
    /// Engine model the adapter talks to.
    pub(crate) model: M,
    /// Settings for this session.
    pub(crate) settings: AdapterSettings,
    /// Events recorded since the last drain.
    pub(crate) diagnostics: Diagnostics,
}

impl<M: SapModel> Adapter<M> {
    /// Create an adapter with default settings.
    ///
    /// # Examples
    /// ```
    /// use sapx::{Adapter, MemoryModel};
    ///
    /// let adapter = Adapter::new(MemoryModel::new());
    /// assert!(adapter.diagnostics().is_empty());
    /// ```
    #[must_use]
    pub fn new(model: M) -> Self {
        Self::with_settings(model, AdapterSettings::default())
    }

    /// Create an adapter with explicit settings.
    #[must_use]
    pub fn with_settings(model: M, settings: AdapterSettings) -> Self {
        Self {
            model,
            settings,
            diagnostics: Diagnostics::new(),
        }
    }

    /// The engine model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the engine model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Release the engine model.
    #[must_use]
    pub fn into_model(self) -> M {
        self.model
    }

    /// Settings for this session.
    #[must_use]
    pub fn settings(&self) -> &AdapterSettings {
        &self.settings
    }

    /// Events recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Mutable access to the recorded events.
    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}

/// Select the ids to process from a request and the engine's name list.
///
/// An absent or empty request selects every available name in engine order.
/// Otherwise the requested ids are kept in request order, duplicates collapse,
/// and ids the engine does not know are dropped with a warning when `warn` is set.
///
/// # Examples
/// ```
/// use sapx::{filter_ids, Diagnostics};
///
/// let available = vec!["A".to_string(), "B".to_string()];
/// let mut diagnostics = Diagnostics::new();
/// assert_eq!(filter_ids(None, &available, true, &mut diagnostics), available);
///
/// let requested = vec!["B".to_string(), "C".to_string()];
/// let selected = filter_ids(Some(requested.as_slice()), &available, true, &mut diagnostics);
/// assert_eq!(selected, vec!["B".to_string()]);
/// assert!(diagnostics.contains("C"));
/// ```
pub fn filter_ids(
    requested: Option<&[String]>,
    available: &[String],
    warn: bool,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let requested = match requested {
        Some(ids) if !ids.is_empty() => ids,
        _ => return available.to_vec(),
    };

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut selected: Vec<String> = Vec::with_capacity(requested.len());
    for id in requested {
        if !seen.insert(id.as_str()) {
            continue;
        }
        if available.contains(id) {
            selected.push(id.clone());
        } else if warn {
            diagnostics.warning(format!(
                "'{id}' was requested but is not present in the model and will be skipped"
            ));
        } else {
            debug!(%id, "requested id not present in model");
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn empty_request_selects_all() {
        let mut diagnostics = Diagnostics::new();
        let available = names(&["L1", "L2"]);
        let selected = filter_ids(Some(&[][..]), &available, true, &mut diagnostics);
        assert_eq!(selected, available);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn request_order_is_kept_and_duplicates_collapse() {
        let mut diagnostics = Diagnostics::new();
        let available = names(&["L1", "L2", "L3"]);
        let requested = names(&["L3", "L1", "L3"]);
        let selected = filter_ids(Some(requested.as_slice()), &available, true, &mut diagnostics);
        assert_eq!(selected, names(&["L3", "L1"]));
    }

    #[test]
    fn unknown_ids_can_be_dropped_silently() {
        let mut diagnostics = Diagnostics::new();
        let available = names(&["L1"]);
        let requested = names(&["X"]);
        let selected = filter_ids(Some(requested.as_slice()), &available, false, &mut diagnostics);
        assert!(selected.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unknown_id_requested_twice_warns_once() {
        let mut diagnostics = Diagnostics::new();
        let available = names(&["L1"]);
        let requested = names(&["X", "L1", "X"]);
        let selected = filter_ids(Some(requested.as_slice()), &available, true, &mut diagnostics);
        assert_eq!(selected, names(&["L1"]));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.contains("'X' was requested"));
    }
}
