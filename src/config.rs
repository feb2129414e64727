//! Manifest options loader for describing URL prefixes and output switches.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::document::ApplyMethod;
use crate::error::ConfigError;
use crate::models::{PageQuery, RealUrlOptions};

/// Options file searched for by [`ManifestOptions::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "pha.config.json";

/// Discoverable options describing how manifests are generated for a build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestOptions {
  /// Host prefix for page URLs.
  pub url_prefix: String,
  /// CDN prefix for page scripts and stylesheets.
  pub cdn_prefix: String,
  /// Whether pages are served from prebuilt templates.
  pub is_template: bool,
  /// Whether styles are inlined into page scripts.
  pub inline_style: bool,
  /// Restrict the manifest to recognised top-level fields.
  pub filter: bool,
  /// Generate server-rendering markup for page manifests.
  pub nsr: bool,
}

impl Default for ManifestOptions {
  fn default() -> Self {
    Self {
      url_prefix: String::new(),
      cdn_prefix: String::new(),
      is_template: false,
      inline_style: false,
      filter: true,
      nsr: false,
    }
  }
}

impl ManifestOptions {
  /// Attempt to load options from the provided directory.
  ///
  /// A missing or unreadable options file falls back to the defaults.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    match Self::from_path(&candidate) {
      Ok(options) => options,
      Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
        Self::default()
      }
      Err(err) => {
        tracing::warn!(error = %err, "falling back to default manifest options");
        Self::default()
      }
    }
  }

  /// Read options from a JSON or YAML file, chosen by extension.
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let is_yaml = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
      serde_yaml::from_str(&content).map_err(|source| ConfigError::ParseYaml {
        path: path.to_path_buf(),
        source,
      })
    } else {
      serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
      })
    }
  }

  /// Borrowing conversion into URL rewrite options using `api` for documents.
  pub fn to_real_url_options<'a>(&'a self, api: &'a dyn ApplyMethod) -> RealUrlOptions<'a> {
    RealUrlOptions {
      url_prefix: &self.url_prefix,
      cdn_prefix: &self.cdn_prefix,
      is_template: self.is_template,
      inline_style: self.inline_style,
      api,
    }
  }

  /// Page query for `path` honouring the configured rendering mode.
  pub fn page_query<'a>(
    &self,
    app_manifest: &'a serde_json::Value,
    path: Option<&'a str>,
  ) -> PageQuery<'a> {
    PageQuery {
      decamelize_app_config: Some(app_manifest),
      nsr: self.nsr,
      path,
    }
  }
}
