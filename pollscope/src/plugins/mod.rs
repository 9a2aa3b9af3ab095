//! Runtime plugins.
//!
//! A plugin supplies what the generic span tracer cannot know: which
//! runtime-internal symbols are worth instrumenting and how to turn a hit
//! on one of them into annotations. The plugin is selected once at
//! startup by name; an unknown name falls back to the no-op default with
//! a warning, leaving poll span tracing unaffected.

pub mod tokio;

pub use tokio::TokioPlugin;

use log::warn;

use crate::debugger::DebuggerHost;
use crate::session::EventArgs;

/// Runtime-specific instrumentation capability.
pub trait RuntimePlugin: Send + Sync {
    /// Registry name of this plugin.
    fn name(&self) -> &'static str;

    /// Runtime-internal symbols to instrument as instant events.
    /// Called once at startup.
    fn extra_symbols(&self) -> Vec<String> {
        Vec::new()
    }

    /// Turn a hit on one of [`RuntimePlugin::extra_symbols`] into
    /// annotations for the emitted instant event.
    ///
    /// Runs on the interrupted target thread: must return promptly and
    /// never wait on target progress.
    fn on_event(&self, symbol: &str, host: &dyn DebuggerHost) -> Option<EventArgs> {
        let _ = (symbol, host);
        None
    }
}

/// Default plugin: no extra symbols, no annotations.
#[derive(Debug, Default)]
pub struct NoopPlugin;

impl RuntimePlugin for NoopPlugin {
    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Known plugins, by registry name.
const REGISTRY: &[(&str, fn() -> Box<dyn RuntimePlugin>)] = &[
    ("tokio", || Box::new(TokioPlugin::new())),
    ("noop", || Box::new(NoopPlugin)),
];

/// Resolve a plugin by name.
///
/// Unknown names are not fatal: span tracing works without runtime
/// events, so the resolver warns and hands back the no-op default.
pub fn resolve(name: &str) -> Box<dyn RuntimePlugin> {
    match REGISTRY.iter().find(|(n, _)| *n == name) {
        Some((_, ctor)) => ctor(),
        None => {
            warn!("unknown runtime plugin \"{name}\", falling back to noop");
            Box::new(NoopPlugin)
        }
    }
}

/// Names accepted by [`resolve`].
pub fn known_plugins() -> Vec<&'static str> {
    REGISTRY.iter().map(|(n, _)| *n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_plugin() {
        assert_eq!(resolve("tokio").name(), "tokio");
        assert_eq!(resolve("noop").name(), "noop");
    }

    #[test]
    fn test_unknown_name_falls_back_to_noop() {
        let plugin = resolve("glommio");
        assert_eq!(plugin.name(), "noop");
        assert!(plugin.extra_symbols().is_empty());
    }

    #[test]
    fn test_noop_plugin_produces_nothing() {
        let plugin = NoopPlugin;
        assert!(plugin.extra_symbols().is_empty());
        assert!(plugin
            .on_event("anything", &crate::debugger::NullDebugger::new())
            .is_none());
    }

    #[test]
    fn test_registry_lists_known_names() {
        let names = known_plugins();
        assert!(names.contains(&"tokio"));
        assert!(names.contains(&"noop"));
    }
}
