use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Spreadsheet document identifier. Absent means no external fetch
    /// is attempted and the fallback table is served.
    pub spreadsheet_id: Option<String>,

    /// Named tab within the spreadsheet document.
    #[serde(default = "default_worksheet")]
    pub worksheet: String,

    /// Path to a service-account JSON file.
    pub google_credentials_file: Option<String>,

    /// The same service-account blob supplied inline, typically via the
    /// GOOGLE_CREDENTIALS_JSON environment variable. Takes precedence
    /// over the file path.
    pub google_credentials_json: Option<String>,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialServerConfig {
    listen_addr: Option<String>,
    spreadsheet_id: Option<String>,
    worksheet: Option<String>,
    google_credentials_file: Option<String>,
    google_credentials_json: Option<String>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_worksheet() -> String {
    "Sheet1".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            spreadsheet_id: None,
            worksheet: default_worksheet(),
            google_credentials_file: None,
            google_credentials_json: None,
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        dotenv::dotenv().ok();

        // 1. Load from file (optional)
        let file_config: PartialServerConfig = if let Some(path_str) = config_path {
            let path = Path::new(path_str);
            if path.exists() {
                let contents = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config file at {path:?}: {e}"))?;
                toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse TOML from config file at {path:?}: {e}"))?
            } else {
                PartialServerConfig::default()
            }
        } else {
            PartialServerConfig::default()
        };

        // 2. Load from environment variables
        let env_config: PartialServerConfig = envy::from_env::<PartialServerConfig>()
            .map_err(|e| format!("Failed to load config from environment: {e}"))?;

        // 3. Merge: environment overrides file
        Ok(ServerConfig {
            listen_addr: env_config
                .listen_addr
                .or(file_config.listen_addr)
                .unwrap_or_else(default_listen_addr),
            spreadsheet_id: env_config.spreadsheet_id.or(file_config.spreadsheet_id),
            worksheet: env_config
                .worksheet
                .or(file_config.worksheet)
                .unwrap_or_else(default_worksheet),
            google_credentials_file: env_config
                .google_credentials_file
                .or(file_config.google_credentials_file),
            google_credentials_json: env_config
                .google_credentials_json
                .or(file_config.google_credentials_json),
        })
    }
}
