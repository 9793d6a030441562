//! Per-language capability contract.
//!
//! The model builder and the renderer depend only on [`LanguageAdapter`];
//! adding a target language means adding one implementation here and nothing
//! else.

mod typescript;

pub use typescript::TypeScriptAdapter;

use crate::error::GenerateError;
use crate::model::ClientModel;
use crate::spec::Schema;
use http::Method;

/// Capability contract implemented once per target language.
pub trait LanguageAdapter {
    /// File extension for generated modules (without the dot).
    fn file_extension(&self) -> &'static str;

    /// External library identifiers the generated client depends on.
    fn dependencies(&self) -> Vec<String>;

    /// Output file keys this language produces. A key containing a literal
    /// extension is used verbatim; otherwise [`Self::file_extension`] is
    /// appended.
    fn manifest(&self) -> &'static [&'static str];

    /// Convert a schema node to a type expression string.
    ///
    /// Total: unknown or unsupported shapes degrade to the language's untyped
    /// marker instead of failing.
    fn convert_type(&self, schema: Option<&Schema>) -> String;

    /// Format a method name. Falls back to the first declared tag plus the
    /// verb when no operation id is present, then to the verb plus a generic
    /// suffix.
    fn format_method_name(&self, operation_id: Option<&str>, verb: &Method, tags: &[String])
        -> String;

    /// Format a structural/alias type name.
    fn format_type_name(&self, name: &str) -> String;

    /// Format a property name (identity for some languages).
    fn format_property_name(&self, name: &str) -> String;

    /// Rewrite path-parameter placeholders into the target language's string
    /// interpolation syntax.
    fn format_path(&self, path: &str, verb: &Method) -> String;

    /// Shape the denormalized view the templates consume (derived client
    /// class name, precomputed signatures, ...).
    fn build_view(&self, model: &ClientModel) -> ClientView;
}

/// Look up the adapter registered for `language`.
///
/// An unsupported language is a fatal configuration error, raised before any
/// model building.
pub fn adapter_for(language: &str) -> Result<Box<dyn LanguageAdapter>, GenerateError> {
    match language.to_ascii_lowercase().as_str() {
        "typescript" | "ts" => Ok(Box::new(TypeScriptAdapter)),
        other => Err(GenerateError::Configuration {
            reason: format!("unsupported target language: {other}"),
        }),
    }
}

/// Denormalized, template-ready view of a [`ClientModel`].
#[derive(Debug, Clone)]
pub struct ClientView {
    pub project_name: String,
    /// Package identifier in the target ecosystem (lowercased project name).
    pub package_name: String,
    /// Derived client class name, e.g. `PetstoreClient`.
    pub client_class_name: String,
    pub description: String,
    pub version: String,
    pub base_url: String,
    pub dependencies: Vec<String>,
    pub methods: Vec<MethodView>,
    pub types: Vec<TypeView>,
}

#[derive(Debug, Clone)]
pub struct MethodView {
    pub name: String,
    pub http_method: String,
    pub path: String,
    pub summary: String,
    pub description: String,
    /// Full argument list for the method signature, body parameter included.
    pub args: String,
    /// Names of query-located parameters, in call-site order.
    pub query_params: Vec<String>,
    pub has_body: bool,
    pub response_type: String,
}

#[derive(Debug, Clone)]
pub struct TypeView {
    pub name: String,
    pub is_alias: bool,
    /// Resolved expression when `is_alias`, empty otherwise.
    pub alias: String,
    pub properties: Vec<PropertyView>,
}

#[derive(Debug, Clone)]
pub struct PropertyView {
    pub name: String,
    pub type_expr: String,
    pub required: bool,
}
