use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Root of the consumed OpenAPI document.
///
/// Only the subset needed to build a client model is deserialized; unknown
/// keywords are ignored. Paths and component schemas are stored in `BTreeMap`s
/// so every mapping-derived sequence iterates in sorted key order — output
/// must be a pure function of input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiSpec {
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: BTreeMap<String, PathItem>,
    pub components: Components,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Server {
    pub url: String,
    pub description: String,
}

/// Operations available on a single path, one slot per supported verb.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Look up the operation declared for `method`, if any.
    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        match method.as_str() {
            "GET" => self.get.as_ref(),
            "POST" => self.post.as_ref(),
            "PUT" => self.put.as_ref(),
            "DELETE" => self.delete.as_ref(),
            "PATCH" => self.patch.as_ref(),
            _ => None,
        }
    }
}

/// A single API operation on a path.
///
/// Responses are keyed by status code in a `BTreeMap` so 2xx selection scans
/// codes in ascending order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<String, Response>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Cookie => write!(f, "cookie"),
        }
    }
}

/// Request body declaration. Media types keep their declared order — the
/// first one carrying a schema wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    pub content: IndexMap<String, MediaType>,
    pub required: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    pub description: String,
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    pub schemas: BTreeMap<String, Schema>,
}

/// One node of the document's type graph.
///
/// A node with `ref_path` set denotes "look up the named component schema" and
/// ignores every sibling field. Component schemas are stored once under
/// `components.schemas` and are only ever resolved by name, never inlined.
/// Properties keep their declared order (`IndexMap`) because inline object
/// expressions join them in that order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub properties: IndexMap<String, Schema>,
    pub items: Option<Box<Schema>>,
    pub required: Option<FlexibleRequired>,
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    #[serde(rename = "allOf")]
    pub all_of: Vec<Schema>,
    #[serde(rename = "oneOf")]
    pub one_of: Vec<Schema>,
    #[serde(rename = "anyOf")]
    pub any_of: Vec<Schema>,
    pub format: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Vec<serde_json::Value>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<serde_json::Value>,
}

/// The `required` marker as it appears in the wild: either a single flag
/// covering every property, or an explicit list of property names.
///
/// Decoding attempts the boolean shape first, then the name sequence; any
/// other value (object, number) is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlexibleRequired {
    All(bool),
    Names(BTreeSet<String>),
}

impl FlexibleRequired {
    /// Whether property `name` is required under this marker.
    pub fn is_required(&self, name: &str) -> bool {
        match self {
            FlexibleRequired::All(all) => *all,
            FlexibleRequired::Names(names) => names.contains(name),
        }
    }
}
