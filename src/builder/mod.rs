//! Model builder: walks the parsed document and produces the client model.

use crate::adapter::{adapter_for, LanguageAdapter};
use crate::model::{
    ClientModel, MethodModel, ParameterModel, PropertyModel, RequestBodyModel, TypeExpr, TypeModel,
};
use crate::render::render_manifest;
use crate::spec::{load_document, ApiSpec, Operation, ParameterLocation, RequestBody, Schema};
use http::Method;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Verb priority for method emission. Paths iterate sorted; verbs iterate in
/// this fixed order so repeated runs reproduce the same output byte for byte.
pub const VERB_PRIORITY: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
];

/// Builds a [`ClientModel`] from a parsed document in one pass.
///
/// Borrows the document and the chosen adapter; the produced model is
/// immutable and consumed once by the renderer.
pub struct ModelBuilder<'a> {
    spec: &'a ApiSpec,
    adapter: &'a dyn LanguageAdapter,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(spec: &'a ApiSpec, adapter: &'a dyn LanguageAdapter) -> Self {
        Self { spec, adapter }
    }

    pub fn build(&self, project_name: &str) -> ClientModel {
        ClientModel {
            project_name: project_name.to_string(),
            description: self.spec.info.description.clone(),
            version: self.spec.info.version.clone(),
            base_url: self
                .spec
                .servers
                .first()
                .map(|s| s.url.clone())
                .unwrap_or_default(),
            methods: self.build_methods(),
            types: self.build_types(),
            dependencies: self.adapter.dependencies(),
        }
    }

    fn build_methods(&self) -> Vec<MethodModel> {
        let mut methods = Vec::new();
        for (path, item) in &self.spec.paths {
            for verb in &VERB_PRIORITY {
                if let Some(operation) = item.operation(verb) {
                    methods.push(self.build_method(path, verb, operation));
                }
            }
        }
        methods
    }

    fn build_method(&self, path: &str, verb: &Method, operation: &Operation) -> MethodModel {
        let mut seen: HashSet<(String, ParameterLocation)> = HashSet::new();
        let mut parameters = Vec::new();
        for param in &operation.parameters {
            // Duplicate (name, location) pairs: first declared wins.
            if !seen.insert((param.name.clone(), param.location)) {
                continue;
            }
            parameters.push(ParameterModel {
                name: self.adapter.format_property_name(&param.name),
                type_expr: self.adapter.convert_type(param.schema.as_ref()),
                location: param.location,
                required: param.required,
                description: param.description.clone(),
            });
        }
        // Required-first, then lexicographic: this is generated call-site
        // argument order and must be stable.
        parameters.sort_by(|a, b| b.required.cmp(&a.required).then_with(|| a.name.cmp(&b.name)));

        let request_body = operation.request_body.as_ref().map(|body| RequestBodyModel {
            type_expr: self.request_body_type(body),
            required: body.required,
        });

        MethodModel {
            name: self
                .adapter
                .format_method_name(operation.operation_id.as_deref(), verb, &operation.tags),
            http_method: verb.clone(),
            path: self.adapter.format_path(path, verb),
            summary: operation.summary.clone(),
            description: operation.description.clone(),
            parameters,
            request_body,
            response_type: self.response_type(operation),
        }
    }

    /// First declared media type that carries a schema.
    fn request_body_type(&self, body: &RequestBody) -> String {
        body.content
            .values()
            .find_map(|media| media.schema.as_ref())
            .map(|schema| self.adapter.convert_type(Some(schema)))
            .unwrap_or_else(|| self.adapter.convert_type(None))
    }

    /// First success response with a schema, scanning status codes in
    /// ascending order; untyped marker when nothing matches.
    fn response_type(&self, operation: &Operation) -> String {
        for (code, response) in &operation.responses {
            if !code.starts_with('2') {
                continue;
            }
            if let Some(schema) = response.content.values().find_map(|m| m.schema.as_ref()) {
                return self.adapter.convert_type(Some(schema));
            }
        }
        self.adapter.convert_type(None)
    }

    fn build_types(&self) -> Vec<TypeModel> {
        self.spec
            .components
            .schemas
            .iter()
            .map(|(name, schema)| self.build_type(name, schema))
            .collect()
    }

    fn build_type(&self, name: &str, schema: &Schema) -> TypeModel {
        let formatted = self.adapter.format_type_name(name);
        if schema.kind.as_deref() == Some("object") && !schema.properties.is_empty() {
            let properties = schema
                .properties
                .iter()
                .map(|(prop_name, prop)| PropertyModel {
                    name: self.adapter.format_property_name(prop_name),
                    type_expr: self.adapter.convert_type(Some(prop)),
                    required: schema
                        .required
                        .as_ref()
                        .is_some_and(|r| r.is_required(prop_name)),
                })
                .collect();
            return TypeModel {
                name: formatted,
                expr: TypeExpr::Structural(properties),
            };
        }
        // Scalars, arrays, property-less objects and anything else become
        // aliases of the converted expression.
        TypeModel {
            name: formatted,
            expr: TypeExpr::Alias(self.adapter.convert_type(Some(schema))),
        }
    }
}

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Spec location: local path, URL, or `-` for stdin.
    pub spec_source: String,
    /// Project name used for the client class and package metadata.
    pub project_name: String,
    pub output_dir: PathBuf,
    /// Target language key, resolved through the adapter registry.
    pub language: String,
}

/// Run the whole pipeline: acquire, build, render.
///
/// Returns the output directory on success. The adapter lookup happens first
/// so an unsupported language fails before any document work.
pub fn generate_client(options: &GenerateOptions) -> anyhow::Result<PathBuf> {
    let adapter = adapter_for(&options.language)?;
    let spec = load_document(&options.spec_source)?;
    let model = ModelBuilder::new(&spec, adapter.as_ref()).build(&options.project_name);
    tracing::debug!(
        methods = model.methods.len(),
        types = model.types.len(),
        "client model built"
    );
    render_manifest(adapter.as_ref(), &model, &options.output_dir)?;
    Ok(options.output_dir.clone())
}

/// Convenience wrapper over [`generate_client`] for callers that already
/// defaulted the output directory and language.
pub fn generate_client_from_spec(
    spec_source: &str,
    project_name: &str,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    generate_client(&GenerateOptions {
        spec_source: spec_source.to_string(),
        project_name: project_name.to_string(),
        output_dir: output_dir.to_path_buf(),
        language: "typescript".to_string(),
    })
}
