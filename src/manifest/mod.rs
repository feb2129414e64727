//! Manifest transforms broken into focused submodules for easier testing.

mod nsr;
mod page;
mod transform;
mod url;

pub use nsr::{DefaultNsrScript, NsrScript};
pub use page::{get_page_manifest_by_path, get_page_manifest_with};
pub use transform::transform_app_config;
pub use url::{page_entry_name, set_real_url_to_manifest};
