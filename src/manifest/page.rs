//! Extract the manifest for a single page.

use serde_json::{Map, Value};

use crate::manifest::nsr::{DefaultNsrScript, NsrScript};
use crate::models::PageQuery;

/// Return the manifest for the page matching `query.path`, or the first page.
///
/// An empty object is returned when there is no manifest, no pages, or no matching page.
pub fn get_page_manifest_by_path(query: &PageQuery) -> Value {
  get_page_manifest_with(query, &DefaultNsrScript)
}

/// Same as [`get_page_manifest_by_path`] with a custom server-rendering generator.
pub fn get_page_manifest_with<N: NsrScript + ?Sized>(query: &PageQuery, nsr_script: &N) -> Value {
  let Some(app_manifest) = query.decamelize_app_config.and_then(Value::as_object) else {
    return Value::Object(Map::new());
  };
  let Some(page) = find_page(app_manifest, query.path) else {
    if let Some(path) = query.path {
      tracing::warn!(path, "no page manifest matches the requested path");
    }
    return Value::Object(Map::new());
  };

  let mut manifest = app_manifest.clone();
  if is_frame_page(page) && !page.contains_key("tab_bar") {
    tracing::debug!(path = ?page.get("path"), "dropping app tab bar for frame page");
    manifest.remove("tab_bar");
  }
  for (key, value) in page {
    manifest.insert(key.clone(), value.clone());
  }

  if query.nsr {
    nsr_script.augment(&mut manifest);
  }

  Value::Object(manifest)
}

fn find_page<'a>(
  app_manifest: &'a Map<String, Value>,
  path: Option<&str>,
) -> Option<&'a Map<String, Value>> {
  let mut pages = app_manifest
    .get("pages")?
    .as_array()?
    .iter()
    .filter_map(Value::as_object);

  match path {
    Some(path) => pages.find(|page| page.get("path").and_then(Value::as_str) == Some(path)),
    None => pages.next(),
  }
}

fn is_frame_page(page: &Map<String, Value>) -> bool {
  page.get("frame").and_then(Value::as_bool).unwrap_or(false)
}
