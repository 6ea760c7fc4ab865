use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use serde_yaml;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scripture")]
#[command(about = "Runs the scripture reader service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".scripture")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_port")]
    port: u16,
}

fn default_port() -> u16 {
    5000
}

impl Default for App {
    fn default() -> Self {
        App {
            port: default_port(),
        }
    }
}

impl App {
    pub fn get_port(&self) -> u16 {
        self.port
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Provider {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_translation")]
    pub translation: String,
    /// Zero disables the per-request timeout.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://bible-api.com".to_string()
}

fn default_translation() -> String {
    "kjv".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for Provider {
    fn default() -> Self {
        Provider {
            base_url: default_base_url(),
            translation: default_translation(),
            timeout_seconds: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Search {
    #[serde(default = "default_search_books")]
    pub books: Vec<String>,
    #[serde(default = "default_chapters_per_book")]
    pub chapters_per_book: u32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_search_books() -> Vec<String> {
    ["genesis", "exodus", "psalms", "matthew", "john", "romans"]
        .iter()
        .map(|b| b.to_string())
        .collect()
}

fn default_chapters_per_book() -> u32 {
    3
}

fn default_max_results() -> usize {
    20
}

impl Default for Search {
    fn default() -> Self {
        Search {
            books: default_search_books(),
            chapters_per_book: default_chapters_per_book(),
            max_results: default_max_results(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub search: Search,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let cfg = Config::load_config(path)?;
        Ok(cfg)
    }

    fn load_config(path: &str) -> Result<Config> {
        let yaml_str = fs::read_to_string(path)?;
        Config::from_yaml(&yaml_str)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Config> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str)?;
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    fn substitute_env_vars(yaml_str: &str) -> Result<String> {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            if let Some(end) = result[actual_start..].find("}") {
                let var_name = &result[actual_start + 2..actual_start + end];

                // ${VAR:-default}
                let env_value = if let Some(default_start) = var_name.find(":-") {
                    let actual_var = &var_name[..default_start];
                    let default_val = &var_name[default_start + 2..];
                    env::var(actual_var).unwrap_or_else(|_| default_val.to_string())
                } else {
                    env::var(var_name).unwrap_or_else(|_| {
                        tracing::warn!(var = var_name, "environment variable not found");
                        String::new()
                    })
                };

                result.replace_range(actual_start..actual_start + end + 1, &env_value);
                offset = actual_start + env_value.len();
            } else {
                break;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = Config::from_yaml("{}").unwrap();
        assert_eq!(cfg.app.get_port(), 5000);
        assert_eq!(cfg.provider.base_url, "https://bible-api.com");
        assert_eq!(cfg.provider.translation, "kjv");
        assert_eq!(cfg.search, Search::default());
        assert_eq!(cfg.search.books.len(), 6);
        assert_eq!(cfg.search.chapters_per_book, 3);
        assert_eq!(cfg.search.max_results, 20);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let yaml = "search:\n  max_results: 5\nprovider:\n  translation: web\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.search.max_results, 5);
        assert_eq!(cfg.search.chapters_per_book, 3);
        assert_eq!(cfg.provider.translation, "web");
        assert_eq!(cfg.provider.timeout_seconds, 30);
    }

    #[test]
    fn substitutes_default_when_variable_unset() {
        let yaml = "app:\n  port: ${SCRIPTURE_TEST_UNSET_PORT:-8088}\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.app.get_port(), 8088);
    }

    #[test]
    fn substitutes_set_variable() {
        // SAFETY: the variable name is unique to this test.
        unsafe { env::set_var("SCRIPTURE_TEST_BASE_URL", "http://localhost:9999") };
        let yaml = "provider:\n  base_url: ${SCRIPTURE_TEST_BASE_URL}\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.provider.base_url, "http://localhost:9999");
    }
}
