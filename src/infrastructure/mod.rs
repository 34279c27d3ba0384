//! Infrastructure concerns: filesystem locations.

pub mod paths;

pub use paths::{default_store_path, expand_tilde, get_config_path, get_data_dir};
