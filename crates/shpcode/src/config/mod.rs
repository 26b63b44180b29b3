pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, load_config, load_config_from_str, ENV_DATABASE, ENV_EXPORT_DIR,
};
pub use schema::Config;
