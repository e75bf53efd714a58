//! Template context built from a parsed specification
//!
//! Flattens the document into plain serializable views so templates only
//! iterate and print; every decision (grouping, samples, type labels) is
//! made here.

use crate::renderer::RenderOptions;
use crate::sample::{sample_text, schema_anchor, type_label, SchemaWalker};
use crate::status;
use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use swagmark_common::{Endpoint, HttpMethod};
use swagmark_parser::openapi::{
    MediaType, OpenApiSpec, Operation, Parameter, PathItem, Response, Schema,
};

/// Expand nested schema properties at most this deep
const MAX_PROPERTY_DEPTH: usize = 5;

/// Section name for operations without tags
const DEFAULT_GROUP: &str = "Default";

#[derive(Debug, Serialize)]
pub struct DocumentView {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub anchor: String,
    pub base_urls: Vec<String>,
    pub groups: Vec<GroupView>,
    pub schemas: Vec<SchemaView>,
}

#[derive(Debug, Serialize)]
pub struct GroupView {
    pub name: String,
    pub anchor: String,
    pub description: Option<String>,
    pub operations: Vec<OperationView>,
}

#[derive(Debug, Serialize)]
pub struct OperationView {
    pub method: String,
    pub glyph: String,
    pub color: String,
    pub badge: String,
    pub path: String,
    pub summary: String,
    pub description: Option<String>,
    pub anchor: String,
    pub deprecated: bool,
    pub code_sample: Option<CodeSample>,
    pub body_example: Option<ExampleBlock>,
    pub parameters: Vec<ParameterRow>,
    pub responses: Vec<ResponseRow>,
    pub response_examples: Vec<ExampleBlock>,
}

/// Pieces of a `curl` command line
#[derive(Debug, Serialize)]
pub struct CodeSample {
    pub method: String,
    pub url: String,
    pub headers: Vec<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExampleBlock {
    pub status: Option<String>,
    pub content_type: String,
    pub language: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParameterRow {
    pub name: String,
    pub location: String,
    pub type_label: String,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseRow {
    pub status: String,
    pub meaning: String,
    pub description: String,
    pub schema: String,
}

#[derive(Debug, Serialize)]
pub struct SchemaView {
    pub name: String,
    pub anchor: String,
    pub description: Option<String>,
    pub example: String,
    pub properties: Vec<PropertyRow>,
    pub enums: Vec<EnumRow>,
}

#[derive(Debug, Serialize)]
pub struct PropertyRow {
    pub name: String,
    pub type_label: String,
    pub required: bool,
    pub restrictions: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct EnumRow {
    pub property: String,
    pub value: String,
}

/// Request body resolved from either OpenAPI 3 `requestBody` or Swagger 2.0
/// `body` / `formData` parameters
struct BodyInfo<'a> {
    content_type: String,
    schema: Option<&'a Schema>,
    example: Option<Value>,
    required: bool,
    description: String,
}

/// Builds [`DocumentView`]s for one document
pub struct ContextBuilder<'a> {
    spec: &'a OpenApiSpec,
    options: &'a RenderOptions,
    walker: SchemaWalker<'a>,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(spec: &'a OpenApiSpec, options: &'a RenderOptions) -> Self {
        Self {
            spec,
            options,
            walker: SchemaWalker::new(spec),
        }
    }

    pub fn build(&self) -> DocumentView {
        let info = &self.spec.info;
        DocumentView {
            title: info.title.clone(),
            version: info.version.clone(),
            description: info.description.clone(),
            anchor: slugify(&info.title),
            base_urls: self.base_urls(),
            groups: self.groups(),
            schemas: self.schemas(),
        }
    }

    fn base_urls(&self) -> Vec<String> {
        if self.spec.is_swagger2() {
            let Some(host) = &self.spec.host else {
                return Vec::new();
            };
            let base_path = self.spec.base_path.as_deref().unwrap_or("");
            let schemes = if self.spec.schemes.is_empty() {
                vec!["https".to_string()]
            } else {
                self.spec.schemes.clone()
            };
            return schemes
                .iter()
                .map(|scheme| format!("{}://{}{}", scheme, host, base_path))
                .collect();
        }
        self.spec.servers.iter().map(|s| s.resolved_url()).collect()
    }

    /// Operations grouped by first tag, groups in order of first appearance
    fn groups(&self) -> Vec<GroupView> {
        let mut groups: IndexMap<String, Vec<OperationView>> = IndexMap::new();
        for (path, item) in &self.spec.paths {
            for (method, op) in &item.operations {
                let group = op
                    .tags
                    .first()
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_GROUP.to_string());
                let view = self.operation(path, item, *method, op);
                groups.entry(group).or_default().push(view);
            }
        }

        groups
            .into_iter()
            .map(|(name, operations)| GroupView {
                anchor: format!("{}-{}", slugify(&self.spec.info.title), slugify(&name)),
                description: self.spec.tag_description(&name).map(str::to_string),
                name,
                operations,
            })
            .collect()
    }

    fn operation(
        &self,
        path: &str,
        item: &'a PathItem,
        method: HttpMethod,
        op: &'a Operation,
    ) -> OperationView {
        let endpoint = Endpoint::new(method, path, op.summary.clone().unwrap_or_default());
        let parameters = self.merged_parameters(item, op);
        let body = self.body(op, &parameters);
        let anchor = match &op.operation_id {
            Some(id) => slugify(id),
            None => slugify(&format!("{}-{}", method.as_str(), path)),
        };

        let mut rows: Vec<ParameterRow> = parameters
            .iter()
            .filter(|p| p.location != "body")
            .map(|p| ParameterRow {
                name: p.name.clone(),
                location: p.location.clone(),
                type_label: type_label(&p.effective_schema()),
                required: p.required || p.location == "path",
                description: p.description.clone().unwrap_or_default(),
            })
            .collect();
        if let (Some(body), false) = (&body, body_is_form(&parameters)) {
            rows.push(ParameterRow {
                name: "body".to_string(),
                location: "body".to_string(),
                type_label: body.schema.map(type_label).unwrap_or_else(|| "object".to_string()),
                required: body.required,
                description: body.description.clone(),
            });
            if self.options.expand_body {
                if let Some(schema) = body.schema {
                    rows.extend(
                        self.property_rows(schema, 1, false)
                            .into_iter()
                            .map(|prop| ParameterRow {
                                name: prop.name,
                                location: "body".to_string(),
                                type_label: prop.type_label,
                                required: prop.required,
                                description: prop.description,
                            }),
                    );
                }
            }
        }

        OperationView {
            method: endpoint.method.clone(),
            glyph: endpoint.glyph.to_string(),
            color: endpoint.color.to_string(),
            badge: endpoint.badge_markdown(),
            path: path.to_string(),
            summary: endpoint.summary.clone(),
            description: op.description.clone(),
            anchor,
            deprecated: op.deprecated,
            code_sample: self.code_sample(method, path, op, &parameters, body.as_ref()),
            body_example: body.as_ref().and_then(|b| self.body_example(b)),
            parameters: rows,
            responses: self.response_rows(op),
            response_examples: self.response_examples(op),
        }
    }

    /// Path-level parameters overridden by operation-level ones with the same
    /// name and location, refs resolved
    fn merged_parameters(&self, item: &'a PathItem, op: &'a Operation) -> Vec<&'a Parameter> {
        let mut merged: IndexMap<(String, String), &'a Parameter> = IndexMap::new();
        for param in item.parameters.iter().chain(op.parameters.iter()) {
            match self.spec.resolve_parameter(param) {
                Some(resolved) => {
                    merged.insert((resolved.name.clone(), resolved.location.clone()), resolved);
                }
                None => warn!(
                    "Unresolved parameter reference {}",
                    param.ref_path.as_deref().unwrap_or_default()
                ),
            }
        }
        merged.into_values().collect()
    }

    fn body(&self, op: &'a Operation, parameters: &[&'a Parameter]) -> Option<BodyInfo<'a>> {
        if let Some(request_body) = &op.request_body {
            let request_body = self.spec.resolve_request_body(request_body)?;
            let (content_type, media) = request_body.content.first()?;
            return Some(BodyInfo {
                content_type: content_type.clone(),
                schema: media.schema.as_ref(),
                example: media.example.clone(),
                required: request_body.required,
                description: request_body.description.clone().unwrap_or_default(),
            });
        }

        if let Some(param) = parameters.iter().find(|p| p.location == "body") {
            return Some(BodyInfo {
                content_type: op
                    .consumes
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "application/json".to_string()),
                schema: param.schema.as_ref(),
                example: None,
                required: param.required,
                description: param.description.clone().unwrap_or_default(),
            });
        }

        if body_is_form(parameters) {
            let mut fields = serde_json::Map::new();
            for param in parameters.iter().filter(|p| p.location == "formData") {
                let schema = param.effective_schema();
                fields.insert(param.name.clone(), self.walker.sample(&schema));
            }
            return Some(BodyInfo {
                content_type: op
                    .consumes
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "application/x-www-form-urlencoded".to_string()),
                schema: None,
                example: Some(Value::Object(fields)),
                required: true,
                description: String::new(),
            });
        }

        None
    }

    fn body_value(&self, body: &BodyInfo<'a>) -> Value {
        match (&body.example, body.schema) {
            (Some(example), _) => example.clone(),
            (None, Some(schema)) => self.walker.sample(schema),
            (None, None) => Value::Object(serde_json::Map::new()),
        }
    }

    fn body_example(&self, body: &BodyInfo<'a>) -> Option<ExampleBlock> {
        if body.schema.is_none() && body.example.is_none() {
            return None;
        }
        let value = self.body_value(body);
        let (language, text) = display_value(&body.content_type, &value);
        Some(ExampleBlock {
            status: None,
            content_type: body.content_type.clone(),
            language,
            text,
        })
    }

    fn code_sample(
        &self,
        method: HttpMethod,
        path: &str,
        op: &'a Operation,
        parameters: &[&'a Parameter],
        body: Option<&BodyInfo<'a>>,
    ) -> Option<CodeSample> {
        if !self.options.code_samples || !self.options.has_language("shell") {
            return None;
        }

        let base = self.base_urls().into_iter().next().unwrap_or_default();
        let mut url = format!("{}{}", base.trim_end_matches('/'), path);
        let query: Vec<String> = parameters
            .iter()
            .filter(|p| p.location == "query" && p.required)
            .map(|p| {
                let value = self.walker.sample(&p.effective_schema());
                format!("{}={}", p.name, sample_text(&value))
            })
            .collect();
        if !query.is_empty() {
            url = format!("{}?{}", url, query.join("&"));
        }

        let mut headers = Vec::new();
        let body = body.filter(|_| method.allows_body());
        if let Some(body) = body {
            headers.push(format!("Content-Type: {}", body.content_type));
        }
        if let Some(accept) = self.accept_type(op) {
            headers.push(format!("Accept: {}", accept));
        }
        for param in parameters
            .iter()
            .filter(|p| p.location == "header" && p.required)
        {
            let value = self.walker.sample(&param.effective_schema());
            headers.push(format!("{}: {}", param.name, sample_text(&value)));
        }

        Some(CodeSample {
            method: method.upper().to_string(),
            url,
            headers,
            body: body.map(|b| shell_quote(&body_text(&b.content_type, &self.body_value(b)))),
        })
    }

    /// Media type of the first success response, else of the first response
    fn accept_type(&self, op: &'a Operation) -> Option<String> {
        if let Some(produces) = op.produces.first() {
            return Some(produces.clone());
        }
        let responses: Vec<(&String, &Response)> = op
            .responses
            .iter()
            .filter_map(|(code, r)| self.spec.resolve_response(r).map(|r| (code, r)))
            .collect();
        responses
            .iter()
            .find(|(code, r)| status::is_success(code) && !r.content.is_empty())
            .or_else(|| responses.iter().find(|(_, r)| !r.content.is_empty()))
            .and_then(|(_, r)| r.content.keys().next().cloned())
    }

    fn response_rows(&self, op: &'a Operation) -> Vec<ResponseRow> {
        op.responses
            .iter()
            .map(|(code, response)| {
                let resolved = self.spec.resolve_response(response);
                ResponseRow {
                    status: code.clone(),
                    meaning: status::meaning(code),
                    description: resolved.map(|r| r.description.clone()).unwrap_or_default(),
                    schema: resolved
                        .and_then(response_schema)
                        .map(schema_column)
                        .unwrap_or_else(|| "None".to_string()),
                }
            })
            .collect()
    }

    fn response_examples(&self, op: &'a Operation) -> Vec<ExampleBlock> {
        let mut examples = Vec::new();
        for (code, response) in &op.responses {
            let Some(response) = self.spec.resolve_response(response) else {
                continue;
            };

            let (content_type, media) = match response.content.first() {
                Some((content_type, media)) => (content_type.clone(), Some(media)),
                None => (
                    op.produces
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "application/json".to_string()),
                    None,
                ),
            };

            let value = media
                .and_then(|m: &MediaType| m.example.clone())
                .or_else(|| response.examples.get(&content_type).cloned())
                .or_else(|| response_schema(response).map(|s| self.walker.sample(s)));
            let Some(value) = value else {
                continue;
            };

            let (language, text) = display_value(&content_type, &value);
            examples.push(ExampleBlock {
                status: Some(code.clone()),
                content_type,
                language,
                text,
            });
        }
        examples
    }

    fn schemas(&self) -> Vec<SchemaView> {
        self.spec
            .schemas()
            .map(|(name, schema)| {
                let properties = self.property_rows(schema, 0, self.options.shallow_schemas);
                let mut enums = Vec::new();
                collect_enums(name, schema, &mut enums);
                for (prop_name, prop) in self.object_properties(schema) {
                    collect_enums(&prop_name, self.walker.resolve(prop), &mut enums);
                }
                SchemaView {
                    name: name.to_string(),
                    anchor: schema_anchor(name),
                    description: schema.description.clone(),
                    example: pretty_json(&self.walker.sample(schema)),
                    properties,
                    enums,
                }
            })
            .collect()
    }

    /// Properties of an object schema, including those merged in via `allOf`,
    /// with their required flag
    fn object_properties(&self, schema: &'a Schema) -> Vec<(String, &'a Schema)> {
        self.object_properties_required(schema)
            .into_iter()
            .map(|(name, prop, _)| (name, prop))
            .collect()
    }

    /// Each referenced schema is merged at most once, so `allOf` chains that
    /// loop back on themselves terminate. A property name seen twice keeps its
    /// first occurrence.
    fn object_properties_required(&self, schema: &'a Schema) -> Vec<(String, &'a Schema, bool)> {
        let mut props = Vec::new();
        let mut merged = Vec::new();
        self.collect_object_properties(schema, &mut merged, &mut props);

        let mut seen = HashSet::new();
        props.retain(|(name, _, _)| seen.insert(name.clone()));
        props
    }

    fn collect_object_properties(
        &self,
        schema: &'a Schema,
        merged: &mut Vec<&'a str>,
        props: &mut Vec<(String, &'a Schema, bool)>,
    ) {
        if let Some(ref_path) = schema.ref_path.as_deref() {
            if merged.contains(&ref_path) {
                return;
            }
            merged.push(ref_path);
        }

        let schema = self.walker.resolve(schema);
        for part in &schema.all_of {
            self.collect_object_properties(part, merged, props);
        }
        for (name, prop) in &schema.properties {
            props.push((name.clone(), prop, schema.required.contains(name)));
        }
    }

    /// Property table rows; nested objects and arrays of objects are expanded
    /// with `»` prefixes unless `shallow`
    fn property_rows(&self, schema: &'a Schema, depth: usize, shallow: bool) -> Vec<PropertyRow> {
        let mut rows = Vec::new();
        let mut visiting = Vec::new();
        self.collect_property_rows(schema, depth, shallow, &mut visiting, &mut rows);
        rows
    }

    fn collect_property_rows(
        &self,
        schema: &'a Schema,
        depth: usize,
        shallow: bool,
        visiting: &mut Vec<&'a str>,
        rows: &mut Vec<PropertyRow>,
    ) {
        if depth > MAX_PROPERTY_DEPTH {
            return;
        }
        if let Some(ref_path) = schema.ref_path.as_deref() {
            if visiting.contains(&ref_path) {
                return;
            }
            visiting.push(ref_path);
        }

        for (name, prop, required) in self.object_properties_required(schema) {
            let resolved = self.walker.resolve(prop);
            rows.push(PropertyRow {
                name: nested_name(&name, depth),
                type_label: type_label(prop),
                required,
                restrictions: restrictions(resolved),
                description: resolved.description.clone().unwrap_or_default(),
            });

            if shallow {
                continue;
            }
            let nested = if resolved.type_name() == Some("array") {
                resolved.items.as_deref()
            } else {
                Some(prop)
            };
            if let Some(nested) = nested {
                if self.walker.resolve(nested).is_object() {
                    self.collect_property_rows(nested, depth + 1, shallow, visiting, rows);
                }
            }
        }

        if schema.ref_path.is_some() {
            visiting.pop();
        }
    }
}

fn nested_name(name: &str, depth: usize) -> String {
    if depth == 0 {
        name.to_string()
    } else {
        format!("{} {}", "»".repeat(depth), name)
    }
}

fn restrictions(schema: &Schema) -> String {
    if schema.read_only {
        "read-only".to_string()
    } else if schema.write_only {
        "write-only".to_string()
    } else {
        "none".to_string()
    }
}

fn collect_enums(property: &str, schema: &Schema, rows: &mut Vec<EnumRow>) {
    for value in &schema.enum_values {
        rows.push(EnumRow {
            property: property.to_string(),
            value: sample_text(value),
        });
    }
}

fn body_is_form(parameters: &[&Parameter]) -> bool {
    parameters.iter().any(|p| p.location == "formData")
}

/// The schema a response returns, if it declares one
fn response_schema(response: &Response) -> Option<&Schema> {
    response
        .content
        .values()
        .find_map(|media| media.schema.as_ref())
        .or(response.schema.as_ref())
}

/// Schema column text: a link for named schemas, `Inline` otherwise
fn schema_column(schema: &Schema) -> String {
    let named = schema.ref_path.is_some()
        || (schema.type_name() == Some("array")
            && schema
                .items
                .as_deref()
                .is_some_and(|items| items.ref_path.is_some()));
    if named {
        type_label(schema)
    } else {
        "Inline".to_string()
    }
}

/// Code fence language and text for displaying a value of a media type
fn display_value(content_type: &str, value: &Value) -> (String, String) {
    if content_type.contains("json") {
        ("json".to_string(), pretty_json(value))
    } else if content_type.contains("x-www-form-urlencoded") {
        ("yaml".to_string(), form_encode(value).replace('&', "\n"))
    } else {
        ("text".to_string(), sample_text(value))
    }
}

/// Request body as it appears after `-d` in the curl sample
fn body_text(content_type: &str, value: &Value) -> String {
    if content_type.contains("x-www-form-urlencoded") || content_type.contains("multipart") {
        form_encode(value)
    } else if content_type.contains("json") {
        value.to_string()
    } else {
        sample_text(value)
    }
}

fn form_encode(value: &Value) -> String {
    match value {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, sample_text(value)))
            .collect::<Vec<_>>()
            .join("&"),
        other => sample_text(other),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Escape single quotes for a single-quoted shell word
fn shell_quote(text: &str) -> String {
    text.replace('\'', r"'\''")
}

/// Lowercase ASCII alphanumerics joined by single dashes
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagmark_parser::OpenApiParser;

    const SPEC: &str = r##"
openapi: 3.0.0
info:
  title: Pet Store
  version: 1.0.0
servers:
  - url: https://petstore.example.com/v1/
tags:
  - name: pets
    description: Pet operations
paths:
  /pets:
    parameters:
      - name: X-Trace
        in: header
        required: true
        schema: {type: string}
      - name: limit
        in: query
        schema: {type: integer}
    get:
      tags: [pets]
      summary: List pets
      parameters:
        - name: limit
          in: query
          required: true
          description: Page size
          schema: {type: integer, format: int32}
      responses:
        200:
          description: A list
          content:
            application/json:
              schema:
                type: array
                items: {$ref: "#/components/schemas/Pet"}
    post:
      tags: [pets]
      summary: Create pet
      requestBody:
        required: true
        content:
          application/json:
            schema: {$ref: "#/components/schemas/Pet"}
      responses:
        201:
          description: Created
  /status:
    get:
      responses:
        default:
          description: Whatever
components:
  schemas:
    Pet:
      type: object
      required: [name]
      properties:
        name: {type: string, example: "O'Malley"}
        owner:
          type: object
          properties:
            email: {type: string, readOnly: true}
        kind: {type: string, enum: [cat, dog]}
"##;

    fn build(options: &RenderOptions) -> DocumentView {
        let parser = OpenApiParser::from_yaml(SPEC, "pets.yaml").unwrap();
        ContextBuilder::new(parser.spec(), options).build()
    }

    #[test]
    fn test_groups_by_first_tag() {
        let doc = build(&RenderOptions::pipeline_defaults(None));
        let names: Vec<&str> = doc.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["pets", "Default"]);
        assert_eq!(doc.groups[0].description.as_deref(), Some("Pet operations"));
        assert_eq!(doc.groups[0].operations.len(), 2);
        assert_eq!(doc.groups[0].anchor, "pet-store-pets");
    }

    #[test]
    fn test_operation_parameters_override_path_level() {
        let doc = build(&RenderOptions::pipeline_defaults(None));
        let list = &doc.groups[0].operations[0];
        let limit: Vec<&ParameterRow> =
            list.parameters.iter().filter(|p| p.name == "limit").collect();
        assert_eq!(limit.len(), 1);
        assert!(limit[0].required);
        assert_eq!(limit[0].type_label, "integer(int32)");
        assert_eq!(limit[0].description, "Page size");
    }

    #[test]
    fn test_code_samples() {
        let doc = build(&RenderOptions::pipeline_defaults(None));
        let list = doc.groups[0].operations[0].code_sample.as_ref().unwrap();
        assert_eq!(list.method, "GET");
        assert_eq!(list.url, "https://petstore.example.com/v1/pets?limit=0");
        assert!(list.body.is_none());
        assert!(list.headers.contains(&"Accept: application/json".to_string()));
        assert!(list.headers.contains(&"X-Trace: string".to_string()));

        let create = doc.groups[0].operations[1].code_sample.as_ref().unwrap();
        assert_eq!(create.method, "POST");
        assert!(create.headers.contains(&"Content-Type: application/json".to_string()));
        let body = create.body.as_deref().unwrap();
        assert!(body.starts_with('{'));
        assert!(body.contains(r#""name":"O'\''Malley""#));
    }

    #[test]
    fn test_code_samples_disabled() {
        let mut options = RenderOptions::pipeline_defaults(None);
        options.code_samples = false;
        let doc = build(&options);
        assert!(doc.groups[0].operations[0].code_sample.is_none());
    }

    #[test]
    fn test_expand_body_adds_property_rows() {
        let doc = build(&RenderOptions::pipeline_defaults(None));
        let create = &doc.groups[0].operations[1];
        let names: Vec<&str> = create.parameters.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"body"));
        assert!(names.contains(&"» name"));
        assert!(names.contains(&"»» email"));

        let body = create.parameters.iter().find(|p| p.name == "body").unwrap();
        assert_eq!(body.type_label, "[Pet](#schemapet)");
        assert!(body.required);
    }

    #[test]
    fn test_response_rows() {
        let doc = build(&RenderOptions::pipeline_defaults(None));
        let list = &doc.groups[0].operations[0];
        assert_eq!(list.responses[0].status, "200");
        assert_eq!(list.responses[0].schema, "[[Pet](#schemapet)]");
        assert!(list.responses[0].meaning.contains("tools.ietf.org"));
        assert_eq!(list.response_examples.len(), 1);
        assert_eq!(list.response_examples[0].language, "json");

        let status = &doc.groups[1].operations[0];
        assert_eq!(status.responses[0].meaning, "Default");
        assert_eq!(status.responses[0].schema, "None");
    }

    #[test]
    fn test_schema_views() {
        let doc = build(&RenderOptions::pipeline_defaults(None));
        let pet = &doc.schemas[0];
        assert_eq!(pet.anchor, "schemapet");
        let rows: Vec<(&str, &str)> = pet
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.restrictions.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("name", "none"),
                ("owner", "none"),
                ("» email", "read-only"),
                ("kind", "none")
            ]
        );
        assert!(pet.properties[0].required);
        assert_eq!(pet.enums.len(), 2);
        assert_eq!(pet.enums[0].property, "kind");

        let mut shallow = RenderOptions::pipeline_defaults(None);
        shallow.shallow_schemas = true;
        let doc = build(&shallow);
        assert_eq!(doc.schemas[0].properties.len(), 3);
    }

    #[test]
    fn test_schema_views_with_cyclic_all_of() {
        let yaml = r##"
openapi: 3.0.0
info: {title: Loop, version: "1"}
paths:
  /nodes:
    get:
      responses:
        200:
          description: OK
          content:
            application/json:
              schema: {$ref: "#/components/schemas/Node"}
components:
  schemas:
    Node:
      allOf:
        - $ref: "#/components/schemas/Branch"
      required: [id]
      properties:
        id: {type: string}
    Branch:
      allOf:
        - $ref: "#/components/schemas/Node"
      properties:
        parent: {$ref: "#/components/schemas/Node"}
"##;
        let parser = OpenApiParser::from_yaml(yaml, "loop.yaml").unwrap();
        let options = RenderOptions::pipeline_defaults(None);
        let doc = ContextBuilder::new(parser.spec(), &options).build();

        assert_eq!(doc.schemas.len(), 2);
        let node: Vec<(&str, bool)> = doc.schemas[0]
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.required))
            .collect();
        assert_eq!(
            node,
            vec![("id", true), ("parent", false), ("» parent", false), ("» id", true)]
        );

        let branch: Vec<&str> = doc.schemas[1]
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(branch, vec!["parent", "» parent", "» id", "id"]);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Pet Store API"), "pet-store-api");
        assert_eq!(slugify("get-/pets/{petId}"), "get-pets-petid");
    }
}
