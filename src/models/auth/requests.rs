use serde::Deserialize;
use ts_rs::TS;

use super::entities::Role;

// 用户登录请求（来自登录表单）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 用户名
    pub username: String,
    /// 密码，任意非空值均可
    pub password: String,
    /// 登录身份
    pub role: Role,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}
