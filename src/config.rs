// Configuration file support (.gloss.json)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossConfig {
    /// Base URL of the explanation service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// API credential; the GLOSS_API_KEY environment variable is the
    /// fallback when this is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Debounce delay for the file watcher, in milliseconds
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,

    /// Watcher paths to ignore (glob patterns)
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
}

fn default_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_debounce() -> u64 {
    200
}

fn default_ignore_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/.gloss.json".to_string(),
    ]
}

impl Default for GlossConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            debounce_ms: default_debounce(),
            ignore_patterns: default_ignore_patterns(),
        }
    }
}

/// Locate .gloss.json: current directory first, then home
pub fn find_config() -> Option<PathBuf> {
    let local_config = PathBuf::from(".gloss.json");
    if local_config.exists() {
        return Some(local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".gloss.json");
        if home_config.exists() {
            return Some(home_config);
        }
    }

    None
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_config() -> Result<GlossConfig, Box<dyn std::error::Error>> {
    if let Some(config_path) = find_config() {
        println!("📝 Loading config from: {}", config_path.display());
        let contents = fs::read_to_string(&config_path)?;
        let config: GlossConfig = serde_json::from_str(&contents)?;
        Ok(config)
    } else {
        Ok(GlossConfig::default())
    }
}

/// Write an example config for `--init`
pub fn create_example_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let example = GlossConfig::default();
    let json = serde_json::to_string_pretty(&example)?;
    fs::write(path, json)?;
    println!("✅ Created example config at: {}", path.display());
    Ok(())
}
