use super::{ClientView, LanguageAdapter, MethodView, PropertyView, TypeView};
use crate::casing::{to_camel_case, to_pascal_case};
use crate::model::{ClientModel, TypeExpr};
use crate::spec::{ParameterLocation, Schema};
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const COMPONENT_PREFIX: &str = "#/components/schemas/";
const UNTYPED: &str = "any";

static PATH_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// TypeScript flavour of the language contract: camelCase methods,
/// PascalCase types, axios as the sole runtime dependency, and template
/// literal path interpolation.
pub struct TypeScriptAdapter;

impl TypeScriptAdapter {
    fn ref_name(&self, ref_path: &str) -> String {
        let bare = ref_path.strip_prefix(COMPONENT_PREFIX).unwrap_or(ref_path);
        self.format_type_name(bare)
    }

    fn union(&self, members: &[Schema], combinator: &str) -> String {
        members
            .iter()
            .map(|m| self.convert_type(Some(m)))
            .collect::<Vec<_>>()
            .join(combinator)
    }

    fn enum_literal(value: &Value) -> String {
        match value {
            Value::String(s) => format!("'{s}'"),
            other => format!("'{other}'"),
        }
    }
}

impl LanguageAdapter for TypeScriptAdapter {
    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn dependencies(&self) -> Vec<String> {
        vec!["axios".to_string()]
    }

    fn manifest(&self) -> &'static [&'static str] {
        &[
            "package.json",
            "tsconfig.json",
            "client",
            "types",
            "index",
            "README.md",
        ]
    }

    fn convert_type(&self, schema: Option<&Schema>) -> String {
        let Some(schema) = schema else {
            return UNTYPED.to_string();
        };

        // A reference resolves by name, never by inlining the referent.
        if let Some(ref_path) = &schema.ref_path {
            return self.ref_name(ref_path);
        }

        // Composition tiers; once one matches, primitive dispatch is skipped.
        if !schema.one_of.is_empty() {
            return self.union(&schema.one_of, " | ");
        }
        if !schema.all_of.is_empty() {
            return self.union(&schema.all_of, " & ");
        }
        if !schema.any_of.is_empty() {
            return self.union(&schema.any_of, " | ");
        }

        match schema.kind.as_deref() {
            Some("string") => {
                if schema.enum_values.is_empty() {
                    "string".to_string()
                } else {
                    schema
                        .enum_values
                        .iter()
                        .map(Self::enum_literal)
                        .collect::<Vec<_>>()
                        .join(" | ")
                }
            }
            Some("integer") | Some("number") => "number".to_string(),
            Some("boolean") => "boolean".to_string(),
            Some("array") => match schema.items.as_deref() {
                None => format!("{UNTYPED}[]"),
                // Flat reference name, not a second resolution pass.
                Some(items) if items.ref_path.is_some() => {
                    let ref_path = items.ref_path.as_deref().unwrap_or_default();
                    format!("{}[]", self.ref_name(ref_path))
                }
                Some(items) => format!("{}[]", self.convert_type(Some(items))),
            },
            Some("object") => {
                if schema.properties.is_empty() {
                    format!("Record<string, {UNTYPED}>")
                } else {
                    let fields = schema
                        .properties
                        .iter()
                        .map(|(name, prop)| {
                            format!(
                                "{}: {}",
                                self.format_property_name(name),
                                self.convert_type(Some(prop))
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("; ");
                    format!("{{ {fields} }}")
                }
            }
            _ => UNTYPED.to_string(),
        }
    }

    fn format_method_name(
        &self,
        operation_id: Option<&str>,
        verb: &Method,
        tags: &[String],
    ) -> String {
        if let Some(id) = operation_id.filter(|id| !id.is_empty()) {
            return to_camel_case(id);
        }
        if let Some(tag) = tags.first() {
            return to_camel_case(&format!("{tag} {verb}"));
        }
        to_camel_case(&format!("{verb} Request"))
    }

    fn format_type_name(&self, name: &str) -> String {
        to_pascal_case(name)
    }

    fn format_property_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn format_path(&self, path: &str, _verb: &Method) -> String {
        PATH_PARAM
            .replace_all(path, |caps: &regex::Captures<'_>| {
                format!("${{{}}}", &caps[1])
            })
            .into_owned()
    }

    fn build_view(&self, model: &ClientModel) -> ClientView {
        let methods = model
            .methods
            .iter()
            .map(|m| {
                let mut args: Vec<String> = m
                    .parameters
                    .iter()
                    .map(|p| {
                        let optional = if p.required { "" } else { "?" };
                        format!("{}{optional}: {}", p.name, p.type_expr)
                    })
                    .collect();
                if let Some(body) = &m.request_body {
                    let optional = if body.required { "" } else { "?" };
                    args.push(format!("data{optional}: {}", body.type_expr));
                }
                MethodView {
                    name: m.name.clone(),
                    http_method: m.http_method.to_string(),
                    path: m.path.clone(),
                    summary: m.summary.clone(),
                    description: m.description.clone(),
                    args: args.join(", "),
                    query_params: m
                        .parameters
                        .iter()
                        .filter(|p| p.location == ParameterLocation::Query)
                        .map(|p| p.name.clone())
                        .collect(),
                    has_body: m.request_body.is_some(),
                    response_type: m.response_type.clone(),
                }
            })
            .collect();

        let types = model
            .types
            .iter()
            .map(|t| match &t.expr {
                TypeExpr::Alias(expr) => TypeView {
                    name: t.name.clone(),
                    is_alias: true,
                    alias: expr.clone(),
                    properties: Vec::new(),
                },
                TypeExpr::Structural(props) => TypeView {
                    name: t.name.clone(),
                    is_alias: false,
                    alias: String::new(),
                    properties: props
                        .iter()
                        .map(|p| PropertyView {
                            name: p.name.clone(),
                            type_expr: p.type_expr.clone(),
                            required: p.required,
                        })
                        .collect(),
                },
            })
            .collect();

        ClientView {
            project_name: model.project_name.clone(),
            package_name: model.project_name.to_lowercase(),
            client_class_name: format!("{}Client", model.project_name),
            description: model.description.clone(),
            version: model.version.clone(),
            base_url: model.base_url.clone(),
            dependencies: model.dependencies.clone(),
            methods,
            types,
        }
    }
}
