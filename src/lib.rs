#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod manifest;
pub mod models;
pub mod naming;

pub use config::ManifestOptions;
pub use document::{ApplyMethod, NoopApi};
pub use error::ConfigError;
pub use manifest::{
  DefaultNsrScript, NsrScript, get_page_manifest_by_path, get_page_manifest_with,
  set_real_url_to_manifest, transform_app_config,
};
pub use models::{PageQuery, RealUrlOptions, RenderedDocument};
