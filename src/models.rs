//! Option and result structures passed through the manifest helpers.

use serde_json::{Map, Value};

use crate::document::ApplyMethod;

/// Inputs for [`crate::set_real_url_to_manifest`].
#[derive(Clone, Copy)]
pub struct RealUrlOptions<'a> {
  /// Host prefix joined with the page name to build each page `path`.
  pub url_prefix: &'a str,
  /// CDN prefix joined with the page name to build `script` and `stylesheet` URLs.
  pub cdn_prefix: &'a str,
  /// Whether pages are served from prebuilt templates with CDN resources.
  pub is_template: bool,
  /// Whether styles are inlined into the script, suppressing `stylesheet`.
  pub inline_style: bool,
  /// Collaborator used to render the page document.
  pub api: &'a dyn ApplyMethod,
}

impl std::fmt::Debug for RealUrlOptions<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RealUrlOptions")
      .field("url_prefix", &self.url_prefix)
      .field("cdn_prefix", &self.cdn_prefix)
      .field("is_template", &self.is_template)
      .field("inline_style", &self.inline_style)
      .finish_non_exhaustive()
  }
}

/// Inputs for [`crate::get_page_manifest_by_path`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageQuery<'a> {
  /// Manifest produced by [`crate::transform_app_config`].
  pub decamelize_app_config: Option<&'a Value>,
  /// Whether the page is rendered in server-rendering mode.
  pub nsr: bool,
  /// Page path to extract. The first page is used when absent.
  pub path: Option<&'a str>,
}

/// Result returned by the document collaborator.
#[derive(Debug, Clone, Default)]
pub struct RenderedDocument {
  /// Rendered HTML document for the page.
  pub document: Option<String>,
  /// Whether the app ships a custom document component.
  pub custom: bool,
  /// Remaining fields, ignored by the manifest helpers.
  pub extra: Map<String, Value>,
}

impl RenderedDocument {
  /// Interpret an arbitrary callback result.
  ///
  /// Results that are not objects, or whose `document` is not a string, carry no document.
  /// `custom` is read loosely so its shape never decides whether `document` is kept.
  pub fn from_value(value: Value) -> Self {
    let Value::Object(mut extra) = value else {
      return Self::default();
    };
    let document = match extra.remove("document") {
      Some(Value::String(document)) => Some(document),
      _ => None,
    };
    let custom = extra.remove("custom").is_some_and(|custom| is_truthy(&custom));

    Self {
      document,
      custom,
      extra,
    }
  }
}

fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(flag) => *flag,
    Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
    Value::String(text) => !text.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}
