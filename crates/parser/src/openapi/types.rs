//! OpenAPI 3.x / Swagger 2.0 type definitions
//!
//! Simplified representation focusing on what the Markdown renderer needs.
//! Every mapping is an `IndexMap` so paths, methods, responses and schema
//! properties keep the order they have in the YAML document.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use swagmark_common::HttpMethod;

/// OpenAPI document root
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g., "3.0.0")
    #[serde(default)]
    pub openapi: Option<String>,

    /// Swagger version ("2.0")
    #[serde(default)]
    pub swagger: Option<String>,

    /// API metadata
    #[serde(default, deserialize_with = "nullable")]
    pub info: Info,

    /// Servers (OpenAPI 3)
    #[serde(default, deserialize_with = "nullable")]
    pub servers: Vec<Server>,

    /// Host (Swagger 2.0)
    #[serde(default)]
    pub host: Option<String>,

    /// Base path (Swagger 2.0)
    #[serde(default, rename = "basePath")]
    pub base_path: Option<String>,

    /// Transfer protocols (Swagger 2.0)
    #[serde(default, deserialize_with = "nullable")]
    pub schemes: Vec<String>,

    /// API paths (endpoints)
    #[serde(default, deserialize_with = "nullable")]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components (OpenAPI 3)
    #[serde(default)]
    pub components: Option<Components>,

    /// Schema definitions (Swagger 2.0)
    #[serde(default, deserialize_with = "nullable")]
    pub definitions: IndexMap<String, Schema>,

    /// Shared parameters (Swagger 2.0)
    #[serde(default, deserialize_with = "nullable")]
    pub parameters: IndexMap<String, Parameter>,

    /// Shared responses (Swagger 2.0)
    #[serde(default, deserialize_with = "nullable")]
    pub responses: IndexMap<String, Response>,

    /// Tag metadata
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
}

/// API information
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub variables: IndexMap<String, ServerVariable>,
}

/// Server URL template variable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerVariable {
    #[serde(default)]
    pub default: String,
}

impl Server {
    /// Server URL with every `{variable}` replaced by its default
    pub fn resolved_url(&self) -> String {
        self.variables
            .iter()
            .fold(self.url.clone(), |url, (name, variable)| {
                url.replace(&format!("{{{}}}", name), &variable.default)
            })
    }
}

/// Tag metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Path item: the operations for one path plus shared parameters
///
/// Only keys naming one of the recognized HTTP methods are treated as
/// operations; everything else except `parameters` is skipped. Entries that
/// are not mappings at all (`x-` extensions under `paths`) become empty items.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    /// Operations in document order
    pub operations: Vec<(HttpMethod, Operation)>,

    /// Parameters shared by every operation on this path
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    /// Look up the operation for a method
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, op)| op)
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a path item mapping")
            }

            fn visit_unit<E: de::Error>(self) -> Result<PathItem, E> {
                Ok(PathItem::default())
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<PathItem, E> {
                Ok(PathItem::default())
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<PathItem, E> {
                Ok(PathItem::default())
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<PathItem, E> {
                Ok(PathItem::default())
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<PathItem, E> {
                Ok(PathItem::default())
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<PathItem, E> {
                Ok(PathItem::default())
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<PathItem, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(PathItem::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<PathItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut item = PathItem::default();
                while let Some(key) = map.next_key::<String>()? {
                    if let Ok(method) = key.parse::<HttpMethod>() {
                        let operation = map.next_value::<Option<Operation>>()?;
                        item.operations.push((method, operation.unwrap_or_default()));
                    } else if key == "parameters" {
                        item.parameters = map
                            .next_value::<Option<Vec<Parameter>>>()?
                            .unwrap_or_default();
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(item)
            }
        }

        deserializer.deserialize_any(PathItemVisitor)
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Tags (for grouping)
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "operationId")]
    pub operation_id: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub parameters: Vec<Parameter>,

    #[serde(default, rename = "requestBody")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code (or "default")
    #[serde(default, deserialize_with = "nullable")]
    pub responses: IndexMap<String, Response>,

    #[serde(default)]
    pub deprecated: bool,

    /// Request media types (Swagger 2.0)
    #[serde(default, deserialize_with = "nullable")]
    pub consumes: Vec<String>,

    /// Response media types (Swagger 2.0)
    #[serde(default, deserialize_with = "nullable")]
    pub produces: Vec<String>,
}

/// Parameter definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    /// Reference to a shared parameter
    #[serde(default, rename = "$ref")]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Location: query, header, path, cookie (body, formData in Swagger 2.0)
    #[serde(default, rename = "in")]
    pub location: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub schema: Option<Schema>,

    /// Inline type (Swagger 2.0 non-body parameters)
    #[serde(default, rename = "type")]
    pub param_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,

    #[serde(default, rename = "enum", deserialize_with = "nullable")]
    pub enum_values: Vec<Value>,

    #[serde(default)]
    pub default: Option<Value>,

    #[serde(default)]
    pub example: Option<Value>,
}

impl Parameter {
    /// The parameter's schema, synthesized from inline Swagger 2.0 fields
    /// when there is no `schema` key
    pub fn effective_schema(&self) -> Schema {
        if let Some(schema) = &self.schema {
            return schema.clone();
        }
        Schema {
            schema_type: self.param_type.clone().map(SchemaType::Single),
            format: self.format.clone(),
            items: self.items.clone(),
            enum_values: self.enum_values.clone(),
            default: self.default.clone(),
            example: self.example.clone(),
            ..Schema::default()
        }
    }
}

/// Request body (OpenAPI 3)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default, rename = "$ref")]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,
}

/// Response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default, rename = "$ref")]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "nullable")]
    pub content: IndexMap<String, MediaType>,

    /// Response schema (Swagger 2.0)
    #[serde(default)]
    pub schema: Option<Schema>,

    /// Examples keyed by media type (Swagger 2.0)
    #[serde(default, deserialize_with = "nullable")]
    pub examples: IndexMap<String, Value>,
}

/// Media type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Schema>,

    #[serde(default)]
    pub example: Option<Value>,
}

/// `type` is a single name in OpenAPI 3.0 and may be a list in 3.1
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    /// The first non-null type name
    pub fn primary(&self) -> Option<&str> {
        match self {
            SchemaType::Single(name) => Some(name.as_str()),
            SchemaType::Multiple(names) => names
                .iter()
                .map(String::as_str)
                .find(|name| *name != "null"),
        }
    }
}

/// `additionalProperties` is either a flag or a schema
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

/// Schema definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Reference
    #[serde(default, rename = "$ref")]
    pub ref_path: Option<String>,

    /// Type: string, number, integer, boolean, array, object
    #[serde(default, rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Format (e.g., int32, int64, date-time)
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Properties (for object type)
    #[serde(default, deserialize_with = "nullable")]
    pub properties: IndexMap<String, Schema>,

    /// Required properties
    #[serde(default, deserialize_with = "required_names")]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default)]
    pub items: Option<Box<Schema>>,

    #[serde(default, rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default, rename = "enum", deserialize_with = "nullable")]
    pub enum_values: Vec<Value>,

    #[serde(default)]
    pub example: Option<Value>,

    #[serde(default)]
    pub default: Option<Value>,

    #[serde(default, rename = "allOf", deserialize_with = "nullable")]
    pub all_of: Vec<Schema>,

    #[serde(default, rename = "oneOf", deserialize_with = "nullable")]
    pub one_of: Vec<Schema>,

    #[serde(default, rename = "anyOf", deserialize_with = "nullable")]
    pub any_of: Vec<Schema>,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default, rename = "readOnly")]
    pub read_only: bool,

    #[serde(default, rename = "writeOnly")]
    pub write_only: bool,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub minimum: Option<f64>,

    #[serde(default)]
    pub maximum: Option<f64>,

    #[serde(default, rename = "minLength")]
    pub min_length: Option<u64>,

    #[serde(default, rename = "maxLength")]
    pub max_length: Option<u64>,

    #[serde(default)]
    pub pattern: Option<String>,
}

impl Schema {
    /// Primary type name, if any
    pub fn type_name(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(SchemaType::primary)
    }

    /// Whether this schema describes an object with named properties
    pub fn is_object(&self) -> bool {
        self.type_name() == Some("object") || !self.properties.is_empty()
    }
}

/// Reusable components (OpenAPI 3)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default, deserialize_with = "nullable")]
    pub schemas: IndexMap<String, Schema>,

    #[serde(default, deserialize_with = "nullable")]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(default, rename = "requestBodies", deserialize_with = "nullable")]
    pub request_bodies: IndexMap<String, RequestBody>,

    #[serde(default, deserialize_with = "nullable")]
    pub responses: IndexMap<String, Response>,
}

/// Treat an explicit YAML `null` (e.g. `paths:` with nothing under it) as
/// the empty default
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `required` on a schema: a list of property names, or the Swagger-style
/// flag some documents put on the property itself
#[derive(Deserialize)]
#[serde(untagged)]
enum RequiredField {
    Names(Vec<String>),
    Flag(bool),
}

/// Property names from `required`; a bare flag carries none
fn required_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RequiredField>::deserialize(deserializer)? {
        Some(RequiredField::Names(names)) => names,
        Some(RequiredField::Flag(_)) | None => Vec::new(),
    })
}

impl OpenApiSpec {
    /// Flattened view of every (path, method, operation) triple in document order
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> + '_ {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations
                .iter()
                .map(move |(method, op)| (path.as_str(), *method, op))
        })
    }

    /// Whether this is a Swagger 2.0 document
    pub fn is_swagger2(&self) -> bool {
        self.swagger.is_some() && self.openapi.is_none()
    }

    /// Named schemas (`components.schemas` or Swagger 2.0 `definitions`)
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &Schema)> + '_ {
        self.components
            .iter()
            .flat_map(|c| c.schemas.iter())
            .chain(self.definitions.iter())
            .map(|(name, schema)| (name.as_str(), schema))
    }

    /// Get a schema by reference path
    /// e.g., "#/components/schemas/Pet" or "#/definitions/Pet"
    pub fn resolve_schema_ref(&self, ref_path: &str) -> Option<&Schema> {
        if let Some(name) = ref_path.strip_prefix("#/components/schemas/") {
            return self.components.as_ref()?.schemas.get(&decode_pointer(name));
        }
        let name = ref_path.strip_prefix("#/definitions/")?;
        self.definitions.get(&decode_pointer(name))
    }

    /// Resolve a parameter that may be a `$ref`
    pub fn resolve_parameter<'a>(&'a self, param: &'a Parameter) -> Option<&'a Parameter> {
        let Some(ref_path) = &param.ref_path else {
            return Some(param);
        };
        if let Some(name) = ref_path.strip_prefix("#/components/parameters/") {
            return self.components.as_ref()?.parameters.get(&decode_pointer(name));
        }
        let name = ref_path.strip_prefix("#/parameters/")?;
        self.parameters.get(&decode_pointer(name))
    }

    /// Resolve a request body that may be a `$ref`
    pub fn resolve_request_body<'a>(&'a self, body: &'a RequestBody) -> Option<&'a RequestBody> {
        let Some(ref_path) = &body.ref_path else {
            return Some(body);
        };
        let name = ref_path.strip_prefix("#/components/requestBodies/")?;
        self.components
            .as_ref()?
            .request_bodies
            .get(&decode_pointer(name))
    }

    /// Resolve a response that may be a `$ref`
    pub fn resolve_response<'a>(&'a self, response: &'a Response) -> Option<&'a Response> {
        let Some(ref_path) = &response.ref_path else {
            return Some(response);
        };
        if let Some(name) = ref_path.strip_prefix("#/components/responses/") {
            return self.components.as_ref()?.responses.get(&decode_pointer(name));
        }
        let name = ref_path.strip_prefix("#/responses/")?;
        self.responses.get(&decode_pointer(name))
    }

    /// Description of a top-level tag, if declared
    pub fn tag_description(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.name == name)
            .and_then(|tag| tag.description.as_deref())
    }
}

/// Last segment of a `$ref`, used as the display name of the target
pub fn ref_name(ref_path: &str) -> String {
    decode_pointer(ref_path.rsplit('/').next().unwrap_or(ref_path))
}

/// Undo JSON pointer escaping (`~1` is `/`, `~0` is `~`)
fn decode_pointer(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
