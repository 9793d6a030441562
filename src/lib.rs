//! # clientgen
//!
//! **clientgen** turns an OpenAPI 3 description into a typed client SDK for a
//! target language. The spec document is the single source of truth: every
//! method signature, parameter, and named type in the generated client is
//! derived from it.
//!
//! ## Architecture
//!
//! The pipeline is a single linear pass with no shared mutable state:
//!
//! ```text
//! spec source → spec::load_document → builder::ModelBuilder → ClientModel
//!                                   ↘ adapter (naming, types, paths) ↗
//!                           render::render_manifest → output files
//! ```
//!
//! - **[`spec`]** — serde model for the consumed OpenAPI subset plus
//!   acquisition from file, URL, or stdin
//! - **[`model`]** — the language-agnostic client model (methods + types)
//! - **[`builder`]** — walks the document and produces the model in sorted,
//!   deterministic order
//! - **[`adapter`]** — per-language capability contract; the TypeScript
//!   adapter ships in-tree, new languages add one implementation
//! - **[`render`]** — askama templates rendered per the adapter's manifest
//! - **[`casing`]** — shared identifier casing helpers
//! - **[`cli`]** — clap-based command-line surface
//!
//! ## Determinism
//!
//! Paths, component schemas, and response codes iterate in sorted key order;
//! verbs follow a fixed priority; schema properties and media types keep
//! their declared order. Two runs over the same document produce
//! byte-identical output.
//!
//! ## Usage
//!
//! ```bash
//! clientgen generate --spec openapi.yaml --name Petstore --output ./petstore-client
//! ```
//!
//! ```rust,no_run
//! use clientgen::{generate_client, GenerateOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! generate_client(&GenerateOptions {
//!     spec_source: "openapi.yaml".into(),
//!     project_name: "Petstore".into(),
//!     output_dir: "./petstore-client".into(),
//!     language: "typescript".into(),
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod builder;
pub mod casing;
pub mod cli;
pub mod error;
pub mod model;
pub mod render;
pub mod spec;

pub use adapter::{adapter_for, LanguageAdapter, TypeScriptAdapter};
pub use builder::{generate_client, generate_client_from_spec, GenerateOptions, ModelBuilder};
pub use error::GenerateError;
pub use model::{ClientModel, MethodModel, ParameterModel, TypeExpr, TypeModel};
pub use spec::{load_document, ApiSpec, FlexibleRequired, ParameterLocation, Schema};
