//! Endpoint and primary-tag extraction

use crate::openapi::OpenApiSpec;
use swagmark_common::Endpoint;

/// One endpoint descriptor per (path, method) pair, in document order
///
/// A document without `paths` yields an empty list.
pub fn extract_endpoints(spec: &OpenApiSpec) -> Vec<Endpoint> {
    spec.operations()
        .map(|(path, method, op)| {
            Endpoint::new(method, path, op.summary.clone().unwrap_or_default())
        })
        .collect()
}

/// First tag of the first operation (in document order) that has any tags,
/// or `fallback` when none does
pub fn primary_tag(spec: &OpenApiSpec, fallback: &str) -> String {
    spec.operations()
        .find_map(|(_, _, op)| op.tags.first())
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}
