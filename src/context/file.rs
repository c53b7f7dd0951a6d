//! Context file loading.
//!
//! Two project files may carry context values:
//! - `cdk.json`, under its top-level `"context"` object
//! - `cdk.context.json`, as a flat object
//!
//! Command-line `KEY=VALUE` pairs are parsed here as well.

use std::path::Path;

use serde_json::Value;

use crate::error::{InfraError, Result};

use super::keys;
use super::layer::{ContextLayer, ContextLayerStack};

/// Project file holding context under a `"context"` key.
pub const PROJECT_FILE: &str = "cdk.json";

/// Project file holding a flat context object.
pub const CONTEXT_FILE: &str = "cdk.context.json";

/// Source name used for the command-line layer.
pub const CLI_SOURCE: &str = "--context";

/// Where the context object lives inside a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFileKind {
    /// Context nested under a top-level `"context"` key.
    Nested,
    /// The whole document is the context object.
    Flat,
}

/// Load one context file into a layer.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_context_file(
    path: &Path,
    kind: ContextFileKind,
    source: &str,
) -> Result<Option<ContextLayer>> {
    if !path.exists() {
        tracing::debug!("No context file at {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let document: Value =
        serde_json::from_str(&content).map_err(|e| InfraError::ContextFileParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let object = match kind {
        ContextFileKind::Flat => Some(&document),
        ContextFileKind::Nested => document.get("context"),
    };

    let mut layer = ContextLayer::new(source);
    let Some(object) = object else {
        return Ok(Some(layer));
    };

    let Value::Object(map) = object else {
        return Err(InfraError::ContextFileParse {
            path: path.to_path_buf(),
            message: "context must be a JSON object".to_string(),
        });
    };

    for (key, value) in map {
        if let Some(text) = scalar_to_string(key, value)? {
            layer.set(key.clone(), text);
        }
    }

    tracing::debug!("Loaded {} context values from {}", layer.len(), source);
    Ok(Some(layer))
}

/// Load the project context files that exist under `project_root`.
pub fn load_project_layers(project_root: &Path) -> Result<ContextLayerStack> {
    let mut stack = ContextLayerStack::new();

    let files = [
        (PROJECT_FILE, ContextFileKind::Nested),
        (CONTEXT_FILE, ContextFileKind::Flat),
    ];
    for (name, kind) in files {
        if let Some(layer) = load_context_file(&project_root.join(name), kind, name)? {
            stack.push(layer);
        }
    }

    Ok(stack)
}

/// Build the command-line layer from parsed `KEY=VALUE` pairs.
pub fn cli_layer(pairs: &[(String, String)]) -> ContextLayer {
    let mut layer = ContextLayer::new(CLI_SOURCE);
    for (key, value) in pairs {
        if !keys::is_known(key) {
            tracing::debug!("Ignoring unrecognised context key '{}'", key);
        }
        layer.set(key.clone(), value.clone());
    }
    layer
}

/// Parse a `KEY=VALUE` pair, splitting on the first `=`.
///
/// # Example
///
/// ```
/// use landing_infra::context::parse_context_pair;
///
/// let pair = parse_context_pair("repositoryName=acme/site").unwrap();
/// assert_eq!(pair, ("repositoryName".to_string(), "acme/site".to_string()));
/// ```
pub fn parse_context_pair(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }

    Ok((key.to_string(), value.to_string()))
}

fn scalar_to_string(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => {
            if keys::is_known(key) {
                Err(InfraError::InvalidContext {
                    key: key.to_string(),
                    message: "expected a string value".to_string(),
                })
            } else {
                tracing::debug!("Skipping non-scalar context key '{}'", key);
                Ok(None)
            }
        }
    }
}
