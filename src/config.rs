//! Widget options and the configuration file

mod loader;
mod types;

pub use loader::{
    ConfigResult, config_path, load_config, load_config_from_path, load_config_or_default,
    parse_config_toml,
};
pub use types::{
    AppConfig, DEFAULT_CLASS, OptionsInput, OptionsOverride, SuggestOptions, parse_domain_list,
};
