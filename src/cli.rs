//! Command line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, OptionsInput, OptionsOverride};
use crate::error::SuggestError;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "suggest-domain", version, about = "Email input with domain suggestions after @")]
pub struct Cli {
    /// Domain to suggest (repeat for more; replaces configured domains)
    #[arg(short, long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Widget options as JSON: ["a.com", ...] or {"class": "...", "domains": [...]}
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    /// data-* attribute on the input element, overriding every other source
    #[arg(long = "data", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub data: Vec<(String, String)>,

    /// Config file to read instead of ~/.config/suggest-domain/config.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial field value
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub value: String,

    /// Print the resolved domain list and exit
    #[arg(long)]
    pub list_domains: bool,
}

impl Cli {
    /// Config file, then `--options`, then `--domain`
    pub fn options_input(&self, config: &AppConfig) -> Result<OptionsInput, SuggestError> {
        let mut layer = config.suggest.clone();
        if let Some(json) = &self.options {
            layer = layer.then(OptionsInput::from_json(json)?.to_override());
        }
        if !self.domains.is_empty() {
            layer = layer.then(OptionsOverride::with_domains(self.domains.clone()));
        }
        Ok(OptionsInput::Config(layer))
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{}`", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
