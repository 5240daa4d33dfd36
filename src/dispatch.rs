//! Field type to handler dispatch.
//!
//! Resolution order for a field type:
//!
//! 1. Fixed overrides: columns that share a builtin handler under a different
//!    name (latitude/longitude columns, the network-element columns, the
//!    start/end eNodeB columns).
//! 2. The handler registered under the field type.
//! 3. [`Builtin::General`].
//!
//! Overrides always win; registering a handler under an override key has no
//! effect on resolution.

use std::collections::HashMap;

use crate::format::fields;
use crate::handler::{Builtin, Handler};

/// Fixed override for a field type, if it has one.
///
/// # Examples
///
/// ```
/// use netrec_fmt::Builtin;
/// use netrec_fmt::dispatch::override_for;
///
/// assert_eq!(override_for("EndLongitudeData"), Some(Builtin::Coordinate));
/// assert_eq!(override_for("LteNEData"), Some(Builtin::NetworkElement));
/// assert_eq!(override_for("FloatData"), None);
/// ```
pub fn override_for(field_type: &str) -> Option<Builtin> {
    match field_type {
        fields::END_LATITUDE | fields::END_LONGITUDE => Some(Builtin::Coordinate),
        fields::PRIMARY_TERMINATING_NE | fields::PRIMARY_ORIGINATING_NE | fields::LTE_NE => {
            Some(Builtin::NetworkElement)
        }
        fields::LTE_START_ENB_ID | fields::LTE_END_ENB_ID => Some(Builtin::LteEnbId),
        _ => None,
    }
}

/// Read-only mapping from field type to handler.
///
/// Built once (see [`crate::FormatterBuilder`]) and never mutated while in use.
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: HashMap<String, Handler>,
}

impl Registry {
    /// Registry with no entries; every non-override field type resolves to General.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry holding every builtin under its own name.
    ///
    /// [`Builtin::General`] is left out; it is the fallback.
    pub fn builtin() -> Self {
        let handlers = Builtin::ALL
            .into_iter()
            .filter(|b| *b != Builtin::General)
            .map(|b| (b.name().to_string(), Handler::Builtin(b)))
            .collect();
        Self { handlers }
    }

    /// Register `handler` under `field_type`, replacing any previous entry.
    pub fn insert(&mut self, field_type: impl Into<String>, handler: impl Into<Handler>) {
        self.handlers.insert(field_type.into(), handler.into());
    }

    /// Handler registered under exactly `field_type`.
    pub fn get(&self, field_type: &str) -> Option<&Handler> {
        self.handlers.get(field_type)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Resolve a field type: override, registry, then General.
    ///
    /// Total for any input string.
    pub fn resolve(&self, field_type: &str) -> Handler {
        if let Some(b) = override_for(field_type) {
            tracing::trace!(target: "netrec_fmt::dispatch", { field_type, handler = %b }, "resolved by override");
            return Handler::Builtin(b);
        }
        if let Some(h) = self.handlers.get(field_type) {
            tracing::trace!(target: "netrec_fmt::dispatch", { field_type, handler = ?h }, "resolved by registry");
            return h.clone();
        }
        tracing::trace!(target: "netrec_fmt::dispatch", { field_type }, "unregistered field type, using general");
        Handler::Builtin(Builtin::General)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(field_type: &str) -> Option<Builtin> {
        Registry::builtin().resolve(field_type).as_builtin()
    }

    #[test]
    fn test_overrides() {
        assert_eq!(resolve(fields::END_LATITUDE), Some(Builtin::Coordinate));
        assert_eq!(resolve(fields::END_LONGITUDE), Some(Builtin::Coordinate));
        assert_eq!(
            resolve(fields::PRIMARY_TERMINATING_NE),
            Some(Builtin::NetworkElement)
        );
        assert_eq!(
            resolve(fields::PRIMARY_ORIGINATING_NE),
            Some(Builtin::NetworkElement)
        );
        assert_eq!(resolve(fields::LTE_NE), Some(Builtin::NetworkElement));
        assert_eq!(resolve(fields::LTE_START_ENB_ID), Some(Builtin::LteEnbId));
        assert_eq!(resolve(fields::LTE_END_ENB_ID), Some(Builtin::LteEnbId));
    }

    #[test]
    fn test_registry_entries() {
        for b in Builtin::ALL {
            if b == Builtin::General {
                continue;
            }
            assert_eq!(resolve(b.name()), Some(b));
        }
        assert_eq!(Registry::builtin().len(), Builtin::ALL.len() - 1);
    }

    #[test]
    fn test_unknown_falls_back_to_general() {
        assert_eq!(resolve("CellNameData"), Some(Builtin::General));
        assert_eq!(resolve(""), Some(Builtin::General));
        assert_eq!(resolve("General"), Some(Builtin::General));
        // Keys are case sensitive
        assert_eq!(resolve("floatdata"), Some(Builtin::General));
    }

    #[test]
    fn test_overrides_beat_registry_entries() {
        let mut registry = Registry::empty();
        registry.insert(fields::END_LATITUDE, Builtin::Float);
        assert_eq!(
            registry.resolve(fields::END_LATITUDE).as_builtin(),
            Some(Builtin::Coordinate)
        );
    }

    #[test]
    fn test_empty_registry_still_applies_overrides() {
        let registry = Registry::empty();
        assert!(registry.is_empty());
        assert_eq!(
            registry.resolve(fields::LTE_END_ENB_ID).as_builtin(),
            Some(Builtin::LteEnbId)
        );
        assert_eq!(
            registry.resolve(fields::FLOAT).as_builtin(),
            Some(Builtin::General)
        );
    }
}
