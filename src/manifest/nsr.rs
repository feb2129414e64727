//! Server-rendering markup attached to single-page manifests.

use serde_json::{Map, Value, json};

/// Generator for the extra fields a page needs in server-rendering mode.
pub trait NsrScript {
  /// Add server-rendering fields to `page_manifest`.
  fn augment(&self, page_manifest: &mut Map<String, Value>);
}

/// Bootstraps the page identity and prefetch directives into `window.__PHA_NSR__`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNsrScript;

impl NsrScript for DefaultNsrScript {
  fn augment(&self, page_manifest: &mut Map<String, Value>) {
    let bootstrap = json!({
      "path": page_manifest.get("path").cloned().unwrap_or(Value::Null),
      "name": page_manifest.get("name").cloned().unwrap_or(Value::Null),
      "data_prefetches": page_manifest
        .get("data_prefetches")
        .cloned()
        .unwrap_or_else(|| json!([])),
    });
    // `</` would close the inline script early.
    let payload = bootstrap.to_string().replace("</", "<\\/");
    page_manifest.insert(
      "nsr_script".to_string(),
      Value::String(format!("<script>window.__PHA_NSR__={payload};</script>")),
    );
  }
}
