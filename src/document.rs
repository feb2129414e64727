//! The document collaborator invoked while resolving page URLs.

use anyhow::Result;
use serde_json::{Value, json};

/// Method name requested from the collaborator for every template page.
pub const GET_DOCUMENT_METHOD: &str = "rax.getDocument";

/// Capability supplied by the host build tool for rendering page documents.
pub trait ApplyMethod {
  /// Invoke `method` with `args` and return its result.
  ///
  /// Errors are not handled by the manifest helpers and surface to their caller.
  fn apply_method(&self, method: &str, args: &Value) -> Result<Value>;
}

impl<F> ApplyMethod for F
where
  F: Fn(&str, &Value) -> Result<Value>,
{
  fn apply_method(&self, method: &str, args: &Value) -> Result<Value> {
    self(method, args)
  }
}

/// Collaborator that never renders a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopApi;

impl ApplyMethod for NoopApi {
  fn apply_method(&self, _method: &str, _args: &Value) -> Result<Value> {
    Ok(json!({}))
  }
}
