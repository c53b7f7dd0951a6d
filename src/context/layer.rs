//! Layered invocation context.
//!
//! Context values arrive from several places (project files, command-line
//! pairs). Each place is one [`ContextLayer`]; a [`ContextLayerStack`]
//! resolves lookups by priority and remembers which layer won.

use std::collections::BTreeMap;

/// One named source of context values.
///
/// # Example
///
/// ```
/// use landing_infra::context::ContextLayer;
///
/// let mut layer = ContextLayer::new("cdk.json");
/// layer.set("environment", "staging");
///
/// assert_eq!(layer.get("environment"), Some("staging"));
/// assert_eq!(layer.source, "cdk.json");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextLayer {
    /// Values in this layer.
    pub values: BTreeMap<String, String>,
    /// Source of this layer (for reporting).
    pub source: String,
}

impl ContextLayer {
    /// Create a new layer with the given source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            values: BTreeMap::new(),
            source: source.into(),
        }
    }

    /// Add a value to this layer, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value in this layer only.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if this layer has a value for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get the number of values in this layer.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if this layer is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered stack of context layers.
///
/// The first layer pushed has lowest priority, the last has highest.
///
/// # Example
///
/// ```
/// use landing_infra::context::{ContextLayer, ContextLayerStack};
///
/// let mut stack = ContextLayerStack::new();
///
/// let mut project = ContextLayer::new("cdk.json");
/// project.set("environment", "staging");
/// project.set("buildPath", "dist");
/// stack.push(project);
///
/// let mut cli = ContextLayer::new("--context");
/// cli.set("environment", "prod");
/// stack.push(cli);
///
/// assert_eq!(stack.get("environment"), Some("prod"));
/// assert_eq!(stack.get("buildPath"), Some("dist"));
/// assert_eq!(stack.source_of("environment"), Some("--context"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextLayerStack {
    /// Layers from lowest to highest priority.
    layers: Vec<ContextLayer>,
}

impl ContextLayerStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { layers: vec![] }
    }

    /// Add a layer above all existing layers.
    pub fn push(&mut self, layer: ContextLayer) {
        self.layers.push(layer);
    }

    /// Get the value from the highest priority layer that has the key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers.iter().rev().find_map(|layer| layer.get(key))
    }

    /// Get the value together with the source of the layer that supplied it.
    pub fn lookup(&self, key: &str) -> Option<(&str, &str)> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(key).map(|v| (v, layer.source.as_str())))
    }

    /// Get all values with higher layers overriding lower ones.
    pub fn resolve(&self) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        for layer in &self.layers {
            result.extend(layer.values.clone());
        }
        result
    }

    /// Get the source of the layer that supplies a key.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.lookup(key).map(|(_, source)| source)
    }

    /// Get all layers for inspection.
    pub fn layers(&self) -> &[ContextLayer] {
        &self.layers
    }

    /// Get the number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
