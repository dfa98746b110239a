use tracing::{info, warn};

use super::AuthService;
use crate::errors::{PortalError, Result};
use crate::models::auth::entities::User;
use crate::models::auth::requests::LoginRequest;
use crate::utils::validate::validate_login_credentials;

pub async fn handle_login(service: &AuthService, login_request: LoginRequest) -> Result<User> {
    // 1. 用户名与密码必填，不核对凭据
    validate_login_credentials(&login_request.username, &login_request.password)
        .map_err(PortalError::authentication)?;

    // 2. 领取请求令牌
    let token = service.issue_token();

    // 3. 模拟登录延迟
    tokio::time::sleep(service.delay()).await;

    // 4. 被更新的尝试或取消操作覆盖时丢弃结果
    if !service.is_latest(token) {
        warn!(
            "Discarding stale login attempt #{} for {}",
            token, login_request.username
        );
        return Err(PortalError::stale_login(format!(
            "Login attempt #{token} was superseded"
        )));
    }

    info!(
        "User {} logged in as {}",
        login_request.username, login_request.role
    );

    Ok(User {
        username: login_request.username,
        role: login_request.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::entities::Role;
    use std::sync::Arc;
    use std::time::Duration;

    fn service() -> AuthService {
        AuthService::new(Duration::from_millis(1000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_accepts_any_password() {
        let user = service()
            .login(LoginRequest::new("teacher123", "whatever", Role::Teacher))
            .await
            .unwrap();
        assert_eq!(user.username, "teacher123");
        assert_eq!(user.role, Role::Teacher);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_requires_username_and_password() {
        let service = service();
        let err = service
            .login(LoginRequest::new("", "secret", Role::Student))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "P008");

        let err = service
            .login(LoginRequest::new("student123", "", Role::Student))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "P008");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_delay() {
        let service = service();
        let started = tokio::time::Instant::now();
        service
            .login(LoginRequest::new("student123", "pw", Role::Student))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_logins_only_latest_wins() {
        let service = service();
        let (first, second) = tokio::join!(
            service.login(LoginRequest::new("student123", "pw", Role::Student)),
            service.login(LoginRequest::new("teacher123", "pw", Role::Teacher)),
        );

        assert_eq!(first.unwrap_err().code(), "P009");
        assert_eq!(second.unwrap().role, Role::Teacher);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_invalidates_in_flight_login() {
        let service = Arc::new(service());
        let pending = {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .login(LoginRequest::new("student123", "pw", Role::Student))
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        service.cancel();

        let result = pending.await.unwrap();
        assert_eq!(result.unwrap_err().code(), "P009");
    }
}
