use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::models::auth::entities::Role;
use crate::models::auth::requests::LoginRequest;
use crate::services::Portal;

pub struct StartupContext {
    pub portal: Portal,
    pub login_request: LoginRequest,
}

/// 根据配置构造演示会话的登录请求
pub fn demo_login_request(config: &AppConfig) -> Result<LoginRequest> {
    let role: Role = config
        .demo
        .role
        .parse()
        .map_err(PortalError::configuration)?;

    Ok(LoginRequest::new(
        config.demo.username.clone(),
        config.demo.password.clone(),
        role,
    ))
}

/// 准备门户启动的上下文
pub fn prepare_portal_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let portal = Portal::new(&config.portal);
    warn!(
        "{} initialized (class size {}, login delay {} ms)",
        config.app.system_name, config.portal.total_students, config.portal.login_delay_ms
    );

    let login_request = demo_login_request(config)?;
    debug!(
        "Demo session prepared for {} as {}",
        login_request.username, login_request.role
    );

    Ok(StartupContext {
        portal,
        login_request,
    })
}
