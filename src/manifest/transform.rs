//! Convert an authored app config into the runtime manifest layout.

use serde_json::{Map, Value};

use crate::naming::{decamelize, decamelize_keys, is_manifest_key};

/// Build a manifest from an authored app config.
///
/// Every key is converted to snake_case, `routes` becomes `pages` and the `window` options
/// are hoisted onto the manifest root. When `filter` is set, top-level keys outside the
/// recognised manifest fields are dropped.
pub fn transform_app_config(config: &Value, filter: bool) -> Value {
  let Some(config) = config.as_object() else {
    return Value::Object(Map::new());
  };

  let mut manifest = Map::new();
  for (key, value) in config {
    match key.as_str() {
      "routes" => {
        manifest.insert("pages".to_string(), decamelize_keys(value));
      }
      "window" => match decamelize_keys(value) {
        Value::Object(window) => manifest.extend(window),
        other => {
          tracing::warn!(value = %other, "ignoring non-object window config");
        }
      },
      _ => {
        manifest.insert(decamelize(key), decamelize_keys(value));
      }
    }
  }

  if filter {
    manifest.retain(|key, _| is_manifest_key(key));
  }

  Value::Object(manifest)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn transforms_document_fields() {
    let manifest = transform_app_config(
      &json!({
        "spm": "A-123",
        "metas": ["<meta name=\"apple-mobile-web-app-status-bar-style\" content=\"black\" />"],
        "links": ["<link rel=\"dns-prefetch\" href=\"//g.alicdn.com\" />"],
        "scripts": ["<script defer src=\"xxx/index.js\"></script>"],
      }),
      true,
    );

    assert_eq!(manifest["spm"], "A-123");
    assert_eq!(
      manifest["metas"][0],
      "<meta name=\"apple-mobile-web-app-status-bar-style\" content=\"black\" />"
    );
    assert_eq!(manifest["links"][0], "<link rel=\"dns-prefetch\" href=\"//g.alicdn.com\" />");
    assert_eq!(manifest["scripts"][0], "<script defer src=\"xxx/index.js\"></script>");
  }

  #[test]
  fn transforms_data_prefetches() {
    let manifest = transform_app_config(
      &json!({ "dataPrefetches": [{ "url": "/a.com", "data": { "id": 123 } }] }),
      true,
    );

    let prefetches = manifest["data_prefetches"].as_array().unwrap();
    assert_eq!(prefetches.len(), 1);
    assert_eq!(prefetches[0]["data"], json!({ "id": 123 }));
  }

  #[test]
  fn flattens_window_onto_root() {
    let manifest = transform_app_config(
      &json!({ "window": { "title": "", "backgroundColor": "", "pullRefresh": true } }),
      true,
    );

    assert_eq!(
      manifest,
      json!({ "title": "", "background_color": "", "pull_refresh": true })
    );
    assert!(manifest.get("window").is_none());
  }

  #[test]
  fn drops_non_object_window() {
    let manifest = transform_app_config(&json!({ "window": "fullscreen", "spm": "B" }), false);
    assert_eq!(manifest, json!({ "spm": "B" }));
  }

  #[test]
  fn transforms_tab_bar() {
    let manifest = transform_app_config(
      &json!({
        "tabBar": {
          "textColor": "",
          "selectedColor": "",
          "backgroundColor": "",
          "items": [{ "path": "tab1", "name": "主会场", "icon": "", "activeIcon": "" }],
        },
      }),
      true,
    );

    assert_eq!(
      manifest["tab_bar"]["items"][0],
      json!({ "path": "tab1", "name": "主会场", "icon": "", "active_icon": "" })
    );
    assert_eq!(manifest["tab_bar"]["selected_color"], "");
  }

  #[test]
  fn transforms_routes_to_pages() {
    let manifest = transform_app_config(
      &json!({
        "routes": [
          {
            "path": "/",
            "name": "home",
            "source": "pages/Home/index",
            "dataPrefetches": [{ "url": "/a.com", "data": { "id": 123 } }],
          },
          { "path": "/home1", "name": "home1", "source": "pages/Home1/index" },
        ],
      }),
      true,
    );

    let pages = manifest["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["path"], "/");
    assert_eq!(pages[1]["path"], "/home1");
    assert_eq!(
      pages[0]["data_prefetches"],
      json!([{ "url": "/a.com", "data": { "id": 123 } }])
    );
    assert!(manifest.get("routes").is_none());
  }

  #[test]
  fn keeps_unknown_fields_without_filter() {
    let manifest = transform_app_config(&json!({ "a": 123, "customFlag": true }), false);
    assert_eq!(manifest, json!({ "a": 123, "custom_flag": true }));
  }

  #[test]
  fn filter_only_keeps_whitelisted_keys() {
    let manifest = transform_app_config(
      &json!({
        "a": 123,
        "spm": "A-1",
        "window": { "title": "t", "unknownOption": 1 },
        "routes": [{ "path": "/", "customField": { "deepKey": 1 } }],
      }),
      true,
    );

    for key in manifest.as_object().unwrap().keys() {
      assert!(is_manifest_key(key), "{key} is outside the whitelist");
    }
    assert_eq!(manifest["title"], "t");
    assert!(manifest.get("unknown_option").is_none());
    assert_eq!(manifest["pages"][0]["custom_field"], json!({ "deep_key": 1 }));
  }

  #[test]
  fn reapplying_to_own_output_is_stable() {
    let manifest = transform_app_config(
      &json!({
        "spm": "A-1",
        "tabBar": { "items": [{ "activeIcon": "" }] },
        "routes": [{ "path": "/", "dataPrefetches": [] }],
        "extraOption": 1,
      }),
      false,
    );

    assert_eq!(transform_app_config(&manifest, false), manifest);
  }

  #[test]
  fn non_object_config_yields_empty_manifest() {
    assert_eq!(transform_app_config(&Value::Null, true), json!({}));
    assert_eq!(transform_app_config(&json!([1, 2]), false), json!({}));
  }
}
