use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ADMIN_WORD: &str = "letmein";

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub data_dir: PathBuf,
    pub users_database: String,
    pub public_dir: PathBuf,
    pub admin_word: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("data_dir", &self.data_dir)
            .field("users_database", &self.users_database)
            .field("public_dir", &self.public_dir)
            .field("admin_word", &"<redacted>")
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: "info".to_string(),
            data_dir: PathBuf::from("data"),
            users_database: "users".to_string(),
            public_dir: PathBuf::from("public"),
            admin_word: DEFAULT_ADMIN_WORD.to_string(),
        }
    }
}

impl Config {
    /// Reads `.env` (if any) and the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            data_dir: env::var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            users_database: env::var("USERS_DATABASE").unwrap_or(defaults.users_database),
            public_dir: env::var("PUBLIC_DIR").map(PathBuf::from).unwrap_or(defaults.public_dir),
            admin_word: env::var("ADMIN_WORD")
                .ok()
                .filter(|word| !word.is_empty())
                .unwrap_or(defaults.admin_word),
        }
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.users_database))
    }
}
