//! Integration test for the OpenAPI parser

use std::io::Write;
use swagmark_common::HttpMethod;
use swagmark_parser::openapi::{ref_name, OpenApiParser};
use tempfile::NamedTempFile;

#[test]
fn test_parse_openapi3_preserves_document_order() {
    let yaml = r##"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
  description: A sample API
servers:
  - url: https://{env}.petstore.dev/v1
    variables:
      env:
        default: api
tags:
  - name: pets
    description: Everything about pets
paths:
  /pets:
    post:
      tags: [pets]
      summary: Create a pet
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/Pet"
      responses:
        201:
          description: Created
    get:
      tags: [pets]
      summary: List pets
      parameters:
        - $ref: "#/components/parameters/Limit"
      responses:
        200:
          description: OK
          content:
            application/json:
              schema:
                type: array
                items:
                  $ref: "#/components/schemas/Pet"
        default:
          $ref: "#/components/responses/Error"
  /pets/{petId}:
    get:
      summary: Show a pet
components:
  parameters:
    Limit:
      name: limit
      in: query
      schema:
        type: integer
        format: int32
  responses:
    Error:
      description: Unexpected error
  schemas:
    Pet:
      type: object
      required: [name]
      properties:
        name:
          type: string
        id:
          type: integer
          format: int64
"##;

    let parser = OpenApiParser::from_yaml(yaml, "petstore.yaml").unwrap();
    let spec = parser.spec();

    let paths: Vec<&str> = spec.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["/pets", "/pets/{petId}"]);

    let methods: Vec<HttpMethod> = spec.paths["/pets"]
        .operations
        .iter()
        .map(|(m, _)| *m)
        .collect();
    assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);

    // Integer status codes still come through as string keys
    let get = spec.paths["/pets"].operation(HttpMethod::Get).unwrap();
    let statuses: Vec<&str> = get.responses.keys().map(String::as_str).collect();
    assert_eq!(statuses, vec!["200", "default"]);

    let endpoints = parser.endpoints();
    assert_eq!(endpoints.len(), 3);
    assert_eq!(endpoints[0].method, "POST");
    assert_eq!(endpoints[0].color, "green");
    assert_eq!(endpoints[2].path, "/pets/{petId}");

    assert_eq!(parser.primary_tag("petstore"), "pets");
    assert_eq!(spec.tag_description("pets"), Some("Everything about pets"));
    assert_eq!(spec.servers[0].resolved_url(), "https://api.petstore.dev/v1");

    // References resolve against components
    let limit = spec.resolve_parameter(&get.parameters[0]).unwrap();
    assert_eq!(limit.name, "limit");
    assert_eq!(limit.location, "query");

    let error = spec.resolve_response(&get.responses["default"]).unwrap();
    assert_eq!(error.description, "Unexpected error");

    let pet = spec.resolve_schema_ref("#/components/schemas/Pet").unwrap();
    let props: Vec<&str> = pet.properties.keys().map(String::as_str).collect();
    assert_eq!(props, vec!["name", "id"]);
}

#[test]
fn test_parse_swagger2_document() {
    let yaml = r##"
swagger: "2.0"
info:
  title: Legacy
  version: "0.9"
host: legacy.example.com
basePath: /api
schemes: [https]
paths:
  /users:
    post:
      tags: [users]
      consumes: [application/json]
      parameters:
        - name: body
          in: body
          required: true
          schema:
            $ref: "#/definitions/User"
      responses:
        "200":
          description: OK
          schema:
            $ref: "#/definitions/User"
  /users/{id}:
    get:
      parameters:
        - name: id
          in: path
          required: true
          type: string
          format: uuid
      responses:
        "404":
          description: Not found
definitions:
  User:
    type: object
    properties:
      email:
        type: string
        format: email
"##;

    let parser = OpenApiParser::from_yaml(yaml, "legacy.yaml").unwrap();
    let spec = parser.spec();

    assert!(spec.is_swagger2());
    assert_eq!(spec.host.as_deref(), Some("legacy.example.com"));
    assert_eq!(spec.schemas().count(), 1);
    assert!(spec.resolve_schema_ref("#/definitions/User").is_some());

    let get = spec.paths["/users/{id}"]
        .operation(HttpMethod::Get)
        .unwrap();
    let id_schema = get.parameters[0].effective_schema();
    assert_eq!(id_schema.type_name(), Some("string"));
    assert_eq!(id_schema.format.as_deref(), Some("uuid"));

    let post = spec.paths["/users"].operation(HttpMethod::Post).unwrap();
    let body_ref = post.parameters[0]
        .schema
        .as_ref()
        .and_then(|s| s.ref_path.as_deref())
        .unwrap();
    assert_eq!(ref_name(body_ref), "User");
}

#[test]
fn test_from_file_reads_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "openapi: 3.0.0\ninfo:\n  title: File API\n  version: '2'\npaths:\n  /ping:\n    get:\n      summary: Ping"
    )
    .unwrap();

    let parser = OpenApiParser::from_file(file.path()).unwrap();
    assert_eq!(parser.spec().info.title, "File API");
    assert_eq!(parser.endpoints()[0].summary, "Ping");
    assert_eq!(parser.source(), file.path());
}

#[test]
fn test_tolerates_loose_documents() {
    let yaml = r##"
swagger: 2.0
info:
  title: Loose
  version: 1
host: loose.example.com
servers:
  - description: no url here
tags:
  - description: nameless
paths:
  x-note: generated by hand
  x-owners: [docs, api]
  x-revision: 3
  /things:
    get:
      responses:
        "200":
          description: OK
          schema:
            $ref: "#/definitions/Thing"
definitions:
  Thing:
    type: object
    properties:
      label:
        type: string
        required: true
      tags:
        type: array
        required: false
        items:
          type: string
"##;

    let parser = OpenApiParser::from_yaml(yaml, "loose.yaml").unwrap();
    let spec = parser.spec();

    assert_eq!(spec.swagger.as_deref(), Some("2.0"));
    assert!(spec.is_swagger2());
    assert_eq!(spec.servers.len(), 1);
    assert_eq!(spec.servers[0].url, "");
    assert_eq!(spec.tags[0].name, "");

    let endpoints = parser.endpoints();
    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].path, "/things");
    assert_eq!(endpoints[0].method, HttpMethod::Get.upper());

    let thing = spec.resolve_schema_ref("#/definitions/Thing").unwrap();
    assert!(thing.required.is_empty());
    assert!(thing.properties["label"].required.is_empty());
    assert_eq!(thing.properties.len(), 2);
}
