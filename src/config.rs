use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-request timeout for both outbound calls, in seconds.
    pub timeout_seconds: u64,
    /// Cap on manually-followed redirects during the page fetch.
    pub max_redirects: usize,
    pub user_agent: String,
    /// Ranking-service URL template; `{domain}` is replaced with the
    /// input URL's domain.
    pub traffic_endpoint: String,
    /// JSON model artifact consumed by the classifier.
    pub model_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timeout_seconds: 5,
            max_redirects: 10,
            user_agent: format!("phish-scan/{}", env!("CARGO_PKG_VERSION")),
            traffic_endpoint: "https://www.alexa.com/siteinfo/{domain}".to_string(),
            model_path: "/etc/phish-scan/model.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
