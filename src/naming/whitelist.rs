/// Top-level keys recognised by the PHA runtime.
///
/// Filtering is applied to the manifest root only. Nested objects (pages, tab bar items,
/// prefetch payloads) are never filtered.
pub const MANIFEST_WHITELIST: &[&str] = &[
  // document
  "spm",
  "metas",
  "links",
  "scripts",
  "document",
  // data and pages
  "data_prefetches",
  "pages",
  "tab_bar",
  // hoisted window fields
  "title",
  "background_color",
  "pull_refresh",
  "pull_refresh_background_color",
  "pull_refresh_color",
  "navigation_bar_background_color",
  "navigation_bar_title_color",
  "disable_navigation_bar",
  "dynamic",
  "image",
  "page_header",
  // app
  "name",
  "description",
  "icons",
  "start_url",
  "display",
  "theme_color",
  "offline_resources",
  "built_in_library",
  "expires",
  "max_age",
  "query_params_pass_keys",
  "query_params_pass_ignore_keys",
  "splash_view_timeout",
  "splash_view",
  "request_headers",
  "package_resources",
  "package_ignore_resources",
];

/// Returns `true` when `key` is a recognised top-level manifest field.
pub fn is_manifest_key(key: &str) -> bool {
  MANIFEST_WHITELIST.contains(&key)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognises_document_and_window_fields() {
    for key in ["spm", "metas", "links", "scripts", "title", "pull_refresh", "tab_bar"] {
      assert!(is_manifest_key(key), "{key} should be whitelisted");
    }
  }

  #[test]
  fn rejects_camel_case_and_unknown_fields() {
    assert!(!is_manifest_key("tabBar"));
    assert!(!is_manifest_key("routes"));
    assert!(!is_manifest_key("window"));
    assert!(!is_manifest_key("a"));
  }
}
