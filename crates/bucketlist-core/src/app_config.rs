use std::path::PathBuf;

/// File name of the saved-location collection inside the data directory.
pub const SAVE_FILE_NAME: &str = "SavedPlaces";

#[derive(Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub geosearch_base_url: String,
    pub geosearch_timeout_secs: u64,
    pub user_agent: String,
    pub passcode: Option<String>,
}

impl AppConfig {
    /// Full path of the durable location file.
    #[must_use]
    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join(SAVE_FILE_NAME)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_dir", &self.data_dir)
            .field("log_level", &self.log_level)
            .field("geosearch_base_url", &self.geosearch_base_url)
            .field("geosearch_timeout_secs", &self.geosearch_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("passcode", &self.passcode.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}
