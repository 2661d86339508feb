use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            app_name: "users-api".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(Self::from_config(&cfg))
    }

    fn from_config(cfg: &config::Config) -> Self {
        let defaults = Self::default();

        Self {
            host: cfg.get_string("HOST").unwrap_or(defaults.host),
            port: cfg
                .get_int("PORT")
                .ok()
                .and_then(|port| u16::try_from(port).ok())
                .unwrap_or(defaults.port),
            environment: cfg.get_string("ENVIRONMENT").unwrap_or(defaults.environment),
            app_name: cfg.get_string("APP_NAME").unwrap_or(defaults.app_name),
            app_version: cfg.get_string("APP_VERSION").unwrap_or(defaults.app_version),
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_falls_back_to_defaults() {
        let cfg = config::Config::builder().build().unwrap();

        let app_config = AppConfig::from_config(&cfg);

        assert_eq!(app_config.host, "0.0.0.0");
        assert_eq!(app_config.port, 3000);
        assert_eq!(app_config.environment, "development");
        assert_eq!(app_config.server_address(), "0.0.0.0:3000");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = config::Config::builder()
            .set_override("HOST", "127.0.0.1")
            .unwrap()
            .set_override("PORT", 8080)
            .unwrap()
            .set_override("ENVIRONMENT", "production")
            .unwrap()
            .build()
            .unwrap();

        let app_config = AppConfig::from_config(&cfg);

        assert_eq!(app_config.server_address(), "127.0.0.1:8080");
        assert_eq!(app_config.environment, "production");
    }

    #[test]
    fn out_of_range_port_uses_default() {
        let cfg = config::Config::builder()
            .set_override("PORT", 70000)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(AppConfig::from_config(&cfg).port, 3000);
    }
}
