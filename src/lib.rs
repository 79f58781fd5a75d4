//! The CircleCI API v2 contract as a typed OpenAPI 3.0 document.
//!
//! The whole crate is one inert value: [`document`] returns the full document,
//! every operation id, enum member, and required-field list spelled out as a
//! source-level literal. Nothing here dispatches requests or validates
//! payloads; consumers are codegen tools, documentation renderers, and tests
//! that want compile-time certainty about the contract.

use openapiv3::OpenAPI;

mod components;
mod document;
mod nodes;
mod paths;

/// Build the complete CircleCI API v2 document.
pub fn document() -> OpenAPI {
    document::build()
}

/// Render the document as pretty-printed JSON.
pub fn to_json_string() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&document())
}

/// Render the document as YAML.
pub fn to_yaml_string() -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&document())
}
