//! Example values and type labels derived from schemas

use log::warn;
use serde_json::{Map, Value};
use swagmark_parser::openapi::{ref_name, AdditionalProperties, OpenApiSpec, Schema};

/// Give up expanding nested schemas past this depth
const MAX_DEPTH: usize = 8;

/// Walks schemas of one document, following `$ref`s and stopping at cycles
pub struct SchemaWalker<'a> {
    spec: &'a OpenApiSpec,
}

impl<'a> SchemaWalker<'a> {
    pub fn new(spec: &'a OpenApiSpec) -> Self {
        Self { spec }
    }

    /// Follow `$ref` chains to the schema that carries the definition
    pub fn resolve<'s>(&self, schema: &'s Schema) -> &'s Schema
    where
        'a: 's,
    {
        let mut current = schema;
        for _ in 0..MAX_DEPTH {
            let Some(ref_path) = &current.ref_path else {
                return current;
            };
            match self.spec.resolve_schema_ref(ref_path) {
                Some(target) => current = target,
                None => {
                    warn!("Unresolved schema reference {}", ref_path);
                    return current;
                }
            }
        }
        current
    }

    /// Example value for a schema
    ///
    /// `example` wins, then `default`, then the first `enum` value, then a
    /// value made up from the type.
    pub fn sample(&self, schema: &Schema) -> Value {
        self.sample_at(schema, &mut Vec::new(), 0)
    }

    fn sample_at(&self, schema: &Schema, visiting: &mut Vec<String>, depth: usize) -> Value {
        if depth > MAX_DEPTH {
            return Value::Object(Map::new());
        }

        if let Some(ref_path) = schema.ref_path.as_deref() {
            if visiting.iter().any(|seen| seen == ref_path) {
                return Value::Object(Map::new());
            }
            let Some(target) = self.spec.resolve_schema_ref(ref_path) else {
                warn!("Unresolved schema reference {}", ref_path);
                return Value::Null;
            };
            visiting.push(ref_path.to_string());
            let value = self.sample_at(target, visiting, depth + 1);
            visiting.pop();
            return value;
        }

        if let Some(example) = &schema.example {
            return example.clone();
        }
        if let Some(default) = &schema.default {
            return default.clone();
        }
        if let Some(first) = schema.enum_values.first() {
            return first.clone();
        }

        if !schema.all_of.is_empty() {
            let mut merged = Map::new();
            for part in &schema.all_of {
                if let Value::Object(fields) = self.sample_at(part, visiting, depth + 1) {
                    merged.extend(fields);
                }
            }
            for (name, property) in &schema.properties {
                merged.insert(name.clone(), self.sample_at(property, visiting, depth + 1));
            }
            return Value::Object(merged);
        }

        if let Some(first) = schema.one_of.first().or_else(|| schema.any_of.first()) {
            return self.sample_at(first, visiting, depth + 1);
        }

        match schema.type_name() {
            Some("string") => Value::String(string_sample(schema.format.as_deref()).to_string()),
            Some("integer") | Some("number") => Value::from(0),
            Some("boolean") => Value::Bool(true),
            Some("null") => Value::Null,
            Some("array") => {
                let items = schema
                    .items
                    .as_deref()
                    .map(|items| vec![self.sample_at(items, visiting, depth + 1)])
                    .unwrap_or_default();
                Value::Array(items)
            }
            _ if schema.is_object() || schema.additional_properties.is_some() => {
                let mut fields = Map::new();
                for (name, property) in &schema.properties {
                    fields.insert(name.clone(), self.sample_at(property, visiting, depth + 1));
                }
                if fields.is_empty() {
                    if let Some(AdditionalProperties::Schema(extra)) = &schema.additional_properties {
                        let value = self.sample_at(extra, visiting, depth + 1);
                        fields.insert("property1".to_string(), value.clone());
                        fields.insert("property2".to_string(), value);
                    }
                }
                Value::Object(fields)
            }
            _ => match schema.items.as_deref() {
                Some(items) => Value::Array(vec![self.sample_at(items, visiting, depth + 1)]),
                None => Value::Null,
            },
        }
    }
}

/// Sample string for a `format`
fn string_sample(format: Option<&str>) -> &'static str {
    match format {
        Some("date-time") => "2019-08-24T14:15:22Z",
        Some("date") => "2019-08-24",
        Some("time") => "14:15:22Z",
        Some("email") => "user@example.com",
        Some("uuid") => "095be615-a8ad-4c33-8e9c-c7612fbf6c9f",
        Some("uri") | Some("url") => "http://example.com",
        Some("hostname") => "example.com",
        Some("ipv4") => "192.168.0.1",
        Some("ipv6") => "2001:db8::1",
        Some("password") => "pa$$word",
        _ => "string",
    }
}

/// Anchor of a named schema in the Schemas section
pub fn schema_anchor(name: &str) -> String {
    format!("schema{}", name.to_lowercase())
}

/// Type column text: `string(date-time)`, `[integer]`, `[Pet](#schemapet)`
pub fn type_label(schema: &Schema) -> String {
    if let Some(ref_path) = &schema.ref_path {
        let name = ref_name(ref_path);
        return format!("[{}](#{})", name, schema_anchor(&name));
    }
    match schema.type_name() {
        Some("array") => match schema.items.as_deref() {
            Some(items) => format!("[{}]", type_label(items)),
            None => "[any]".to_string(),
        },
        Some(name) => match &schema.format {
            Some(format) => format!("{}({})", name, format),
            None => name.to_string(),
        },
        None if !schema.one_of.is_empty() || !schema.any_of.is_empty() => "any".to_string(),
        None if schema.is_object() || !schema.all_of.is_empty() => "object".to_string(),
        None => "any".to_string(),
    }
}

/// Plain text for a sample value, as used in query strings and headers
pub fn sample_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use swagmark_parser::OpenApiParser;

    fn spec(yaml: &str) -> OpenApiSpec {
        OpenApiParser::from_yaml(yaml, "test.yaml")
            .unwrap()
            .spec()
            .clone()
    }

    const PETS: &str = r##"
openapi: 3.0.0
paths: {}
components:
  schemas:
    Pet:
      type: object
      properties:
        id: {type: integer, format: int64}
        name: {type: string, example: Rex}
        born: {type: string, format: date}
        status: {type: string, enum: [available, sold]}
        tags:
          type: array
          items: {type: string}
        owner:
          $ref: "#/components/schemas/Owner"
    Owner:
      type: object
      properties:
        email: {type: string, format: email}
        pets:
          type: array
          items:
            $ref: "#/components/schemas/Pet"
    Named:
      allOf:
        - $ref: "#/components/schemas/Owner"
        - type: object
          properties:
            nickname: {type: string}
"##;

    #[test]
    fn test_sample_object_with_cycle() {
        let spec = spec(PETS);
        let walker = SchemaWalker::new(&spec);
        let pet = spec.resolve_schema_ref("#/components/schemas/Pet").unwrap();

        let value = walker.sample(pet);
        assert_eq!(value["id"], json!(0));
        assert_eq!(value["name"], json!("Rex"));
        assert_eq!(value["born"], json!("2019-08-24"));
        assert_eq!(value["status"], json!("available"));
        assert_eq!(value["tags"], json!(["string"]));
        assert_eq!(value["owner"]["email"], json!("user@example.com"));
        // Pet -> Owner -> Pet -> Owner is cut with an empty object
        assert_eq!(value["owner"]["pets"][0]["name"], json!("Rex"));
        assert_eq!(value["owner"]["pets"][0]["owner"], json!({}));
    }

    #[test]
    fn test_sample_all_of_merges() {
        let spec = spec(PETS);
        let walker = SchemaWalker::new(&spec);
        let named = spec.resolve_schema_ref("#/components/schemas/Named").unwrap();

        let value = walker.sample(named);
        assert_eq!(value["email"], json!("user@example.com"));
        assert_eq!(value["nickname"], json!("string"));
    }

    #[test]
    fn test_type_labels() {
        let spec = spec(PETS);
        let pet = spec.resolve_schema_ref("#/components/schemas/Pet").unwrap();

        assert_eq!(type_label(&pet.properties["id"]), "integer(int64)");
        assert_eq!(type_label(&pet.properties["tags"]), "[string]");
        assert_eq!(type_label(&pet.properties["owner"]), "[Owner](#schemaowner)");

        let owner = spec.resolve_schema_ref("#/components/schemas/Owner").unwrap();
        assert_eq!(type_label(&owner.properties["pets"]), "[[Pet](#schemapet)]");
    }

    #[test]
    fn test_sample_text() {
        assert_eq!(sample_text(&json!("abc")), "abc");
        assert_eq!(sample_text(&json!(0)), "0");
        assert_eq!(sample_text(&json!(true)), "true");
    }
}
