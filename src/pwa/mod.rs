//! Install and offline descriptors published next to the app bundle.

pub mod cache;
pub mod manifest;

pub use cache::Precache;
pub use manifest::AppManifest;

/// Prefixes an absolute `path` with the deployment base, which may be empty.
pub fn join_base(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
