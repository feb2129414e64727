//! Rewrite page paths and resources into absolute URLs.

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use crate::document::GET_DOCUMENT_METHOD;
use crate::models::{RealUrlOptions, RenderedDocument};

/// Rewrite every page and nested frame of `manifest` with absolute URLs.
///
/// The manifest is updated in place and returned for chaining. Errors from the document
/// collaborator abort the walk and are returned to the caller.
pub fn set_real_url_to_manifest<'m>(
  options: &RealUrlOptions,
  manifest: &'m mut Value,
) -> Result<&'m mut Value> {
  if let Some(pages) = manifest.get_mut("pages").and_then(Value::as_array_mut) {
    rewrite_pages(options, pages)?;
  }
  Ok(manifest)
}

/// Name used for a page's URL, key and bundle entry.
///
/// Falls back to the page path with its slashes flattened, and to `index` for `/`. Returns
/// `None` for pages carrying neither, such as pure frame containers.
pub fn page_entry_name(page: &Map<String, Value>) -> Option<String> {
  if let Some(name) = page.get("name").and_then(Value::as_str) {
    return Some(name.to_string());
  }

  let path = page.get("path").and_then(Value::as_str)?;
  let trimmed = path.trim_matches('/');
  if trimmed.is_empty() {
    Some("index".to_string())
  } else {
    Some(trimmed.replace('/', "_"))
  }
}

fn rewrite_pages(options: &RealUrlOptions, pages: &mut [Value]) -> Result<()> {
  for page in pages.iter_mut().filter_map(Value::as_object_mut) {
    rewrite_page(options, page)?;
  }
  Ok(())
}

fn rewrite_page(options: &RealUrlOptions, page: &mut Map<String, Value>) -> Result<()> {
  if let Some(name) = page_entry_name(page) {
    let path = format!("{}{}", options.url_prefix, name);
    tracing::debug!(page = %name, %path, "resolving page url");
    page.insert("path".to_string(), Value::String(path));
    page.insert("key".to_string(), Value::String(name.clone()));

    if options.is_template {
      apply_template_resources(options, page, &name)?;
    }
  }

  if let Some(frames) = page.get_mut("frames").and_then(Value::as_array_mut) {
    rewrite_pages(options, frames)?;
  }
  Ok(())
}

fn apply_template_resources(
  options: &RealUrlOptions,
  page: &mut Map<String, Value>,
  name: &str,
) -> Result<()> {
  page.insert(
    "script".to_string(),
    Value::String(format!("{}{}.js", options.cdn_prefix, name)),
  );
  if options.inline_style {
    page.remove("stylesheet");
  } else {
    page.insert(
      "stylesheet".to_string(),
      Value::String(format!("{}{}.css", options.cdn_prefix, name)),
    );
  }

  let args = json!({
    "name": name,
    "source": page.get("source").cloned().unwrap_or(Value::Null),
  });
  let result = options
    .api
    .apply_method(GET_DOCUMENT_METHOD, &args)
    .with_context(|| format!("failed to render document for page `{name}`"))?;

  if let Some(document) = RenderedDocument::from_value(result).document {
    page.insert("document".to_string(), Value::String(document));
  }
  Ok(())
}
