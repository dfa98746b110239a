use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::{AppConfig, AppSettings, DemoConfig, PortalConfig};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                system_name: "Assignment Portal".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            portal: PortalConfig {
                total_students: 25,
                default_max_score: 100,
                upcoming_deadline_limit: 3,
                login_delay_ms: 1000,
                strict_grading: true,
            },
            demo: DemoConfig {
                username: "student123".to_string(),
                password: "any password".to_string(),
                role: "student".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let mut builder = Config::builder()
            // 内置默认值，配置文件缺省时依然可用
            .set_default("app.system_name", defaults.app.system_name)?
            .set_default("app.environment", defaults.app.environment)?
            .set_default("app.log_level", defaults.app.log_level)?
            .set_default("portal.total_students", defaults.portal.total_students)?
            .set_default("portal.default_max_score", defaults.portal.default_max_score)?
            .set_default(
                "portal.upcoming_deadline_limit",
                defaults.portal.upcoming_deadline_limit as i64,
            )?
            .set_default("portal.login_delay_ms", defaults.portal.login_delay_ms as i64)?
            .set_default("portal.strict_grading", defaults.portal.strict_grading)?
            .set_default("demo.username", defaults.demo.username)?
            .set_default("demo.password", defaults.demo.password)?
            .set_default("demo.role", defaults.demo.role)?
            // 然后加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 再根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖，例如 PORTAL_PORTAL__STRICT_GRADING=false
            .add_source(
                Environment::with_prefix("PORTAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.portal.total_students <= 0 {
            return Err(ConfigError::Message(
                "portal.total_students must be positive".to_string(),
            ));
        }
        if app_config.portal.default_max_score <= 0 {
            return Err(ConfigError::Message(
                "portal.default_max_score must be positive".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_portal_settings() {
        let config = AppConfig::default();
        assert_eq!(config.portal.total_students, 25);
        assert_eq!(config.portal.default_max_score, 100);
        assert_eq!(config.portal.upcoming_deadline_limit, 3);
        assert!(config.portal.strict_grading);
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load().expect("defaults should always load");
        assert_eq!(config.portal.default_max_score, 100);
        assert_eq!(config.app.system_name, "Assignment Portal");
    }
}
