use crate::error::{AgriMitraError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub geo: GeoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
}

fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    // Accept either a bare number or a string, so ${PORT} substitution works.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Number(u16),
        Text(String),
    }

    match PortValue::deserialize(deserializer)? {
        PortValue::Number(n) => Ok(n),
        PortValue::Text(s) => s.parse::<u16>().map_err(|_| {
            D::Error::custom(format!(
                "invalid port '{}' - ensure the PORT environment variable is set",
                s
            ))
        }),
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoConfig {
    /// Path to the states/districts reference JSON
    pub data_path: PathBuf,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgriMitraError::Config(format!(
                "Config file not found at {:?}. Run `agrimitra init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriMitraError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| AgriMitraError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agrimitra").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| AgriMitraError::Config("Cannot determine config directory".into()))?
            .join("agrimitra")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agrimitra/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriMitraError::Config("Cannot determine config directory".into()))?
            .join("agrimitra");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up AgriMitra!");
        println!();

        println!("HTTP server");
        let host: String = Input::new()
            .with_prompt("  Bind host")
            .default("0.0.0.0".into())
            .interact_text()
            .map_err(|e| AgriMitraError::Config(format!("Input error: {}", e)))?;

        let port: u16 = Input::new()
            .with_prompt("  Port")
            .default(3000)
            .interact_text()
            .map_err(|e| AgriMitraError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Reference data");
        let data_path: String = Input::new()
            .with_prompt("  Geo data file")
            .default("data/indian_geo.json".into())
            .interact_text()
            .map_err(|e| AgriMitraError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            server: ServerConfig { host, port },
            geo: GeoConfig {
                data_path: PathBuf::from(data_path),
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgriMitraError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AgriMitra Configuration\n# Generated by `agrimitra init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 3000,
            },
            geo: GeoConfig {
                data_path: PathBuf::from("data/indian_geo.json"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml_with_numeric_port() {
        let yaml = "server:\n  host: 127.0.0.1\n  port: 8080\ngeo:\n  data_path: data/indian_geo.json\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.geo.data_path, PathBuf::from("data/indian_geo.json"));
    }

    #[test]
    fn parses_port_given_as_string() {
        let yaml = "server:\n  host: 0.0.0.0\n  port: \"3000\"\ngeo:\n  data_path: data/indian_geo.json\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn substitutes_known_env_vars() {
        std::env::set_var("AGRIMITRA_TEST_HOST", "10.0.0.5");
        let out = Config::substitute_env_vars("host: ${AGRIMITRA_TEST_HOST}\nport: ${AGRIMITRA_TEST_UNSET_VAR}");
        assert!(out.contains("host: 10.0.0.5"));
        // Unset variables keep their placeholder
        assert!(out.contains("${AGRIMITRA_TEST_UNSET_VAR}"));
    }
}
