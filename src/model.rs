//! The language-agnostic client model.
//!
//! Built once per generation run by [`crate::builder::ModelBuilder`], never
//! mutated afterwards, and consumed exactly once by the rendering stage.

use crate::spec::ParameterLocation;
use http::Method;

/// The complete intermediate representation of a generated client: project
/// metadata plus an ordered catalog of callable methods and named types.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientModel {
    pub project_name: String,
    pub description: String,
    pub version: String,
    pub base_url: String,
    pub methods: Vec<MethodModel>,
    pub types: Vec<TypeModel>,
    /// External library identifiers supplied by the chosen adapter.
    pub dependencies: Vec<String>,
}

/// A single callable API method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodModel {
    /// Method name, already formatted per the adapter's convention.
    pub name: String,
    pub http_method: Method,
    /// Path template, already rewritten into the target language's
    /// interpolation syntax.
    pub path: String,
    pub summary: String,
    pub description: String,
    /// Deduplicated by `(name, location)` and sorted required-first, then by
    /// name — this governs generated call-site argument order.
    pub parameters: Vec<ParameterModel>,
    pub request_body: Option<RequestBodyModel>,
    pub response_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterModel {
    pub name: String,
    pub type_expr: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestBodyModel {
    pub type_expr: String,
    pub required: bool,
}

/// A named type extracted from a component schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeModel {
    pub name: String,
    pub expr: TypeExpr,
}

/// Either a structural object with named fields, or an alias for a resolved
/// type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Structural(Vec<PropertyModel>),
    Alias(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyModel {
    pub name: String,
    pub type_expr: String,
    pub required: bool,
}
