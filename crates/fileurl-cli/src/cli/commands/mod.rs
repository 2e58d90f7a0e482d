//! CLI command handlers. Each command is in its own file.

mod config_path;
mod to_local;
mod to_url;

pub use config_path::run_config_path;
pub use to_local::run_to_local;
pub use to_url::run_to_url;

#[cfg(test)]
pub(crate) use to_local::write_local_paths;
#[cfg(test)]
pub(crate) use to_url::write_urls;
