//! Key naming helpers shared by the manifest transforms.
//!
//! Case conversion and the recognised top-level key set live in separate submodules so the
//! recursive walk and the whitelist can be tested on their own.

mod case;
mod whitelist;

pub use case::{decamelize, decamelize_keys};
pub use whitelist::{MANIFEST_WHITELIST, is_manifest_key};
