pub mod login;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::config::PortalConfig;
use crate::errors::Result;
use crate::models::auth::entities::User;
use crate::models::auth::requests::LoginRequest;

/// 模拟登录服务
///
/// 每次登录尝试都会领取一个递增的请求令牌，延迟结束时只有最新的令牌才能生效。
pub struct AuthService {
    delay: Duration,
    latest_attempt: AtomicU64,
}

impl AuthService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest_attempt: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(Duration::from_millis(config.login_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 登录
    pub async fn login(&self, req: LoginRequest) -> Result<User> {
        login::handle_login(self, req).await
    }

    /// 作废所有进行中的登录尝试
    pub fn cancel(&self) {
        self.latest_attempt.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn issue_token(&self) -> u64 {
        self.latest_attempt.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_latest(&self, token: u64) -> bool {
        self.latest_attempt.load(Ordering::SeqCst) == token
    }
}
