//! 门户外壳
//!
//! 登录后按角色挂载对应面板；退出即卸载面板，面板内的全部数据随之丢弃。
//! 教师与学生面板各自持有独立数据，互不同步。

use std::sync::Arc;

use tracing::info;

use crate::config::PortalConfig;
use crate::errors::Result;
use crate::models::auth::entities::{Role, User};
use crate::models::auth::requests::LoginRequest;
use crate::models::dashboards::responses::DashboardSnapshot;
use crate::services::auth::AuthService;
use crate::services::student_dashboard::StudentDashboard;
use crate::services::teacher_dashboard::TeacherDashboard;

/// 当前挂载的面板
pub enum Dashboard {
    Teacher(TeacherDashboard),
    Student(StudentDashboard),
}

impl Dashboard {
    pub fn mount(user: &User, config: &PortalConfig) -> Self {
        match user.role {
            Role::Teacher => Dashboard::Teacher(TeacherDashboard::mount(&user.username, config)),
            Role::Student => Dashboard::Student(StudentDashboard::mount(&user.username, config)),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        match self {
            Dashboard::Teacher(dashboard) => DashboardSnapshot::Teacher(dashboard.snapshot()),
            Dashboard::Student(dashboard) => DashboardSnapshot::Student(dashboard.snapshot()),
        }
    }
}

pub struct Portal {
    config: PortalConfig,
    auth: Arc<AuthService>,
    session: Option<(User, Dashboard)>,
}

impl Portal {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_auth(config, Arc::new(AuthService::from_config(config)))
    }

    pub fn with_auth(config: &PortalConfig, auth: Arc<AuthService>) -> Self {
        Self {
            config: config.clone(),
            auth,
            session: None,
        }
    }

    pub fn auth(&self) -> Arc<AuthService> {
        self.auth.clone()
    }

    /// 登录并挂载面板，重新登录会重新载入演示数据
    pub async fn login(&mut self, req: LoginRequest) -> Result<&User> {
        let user = self.auth.login(req).await?;
        Ok(self.mount(user))
    }

    /// 直接挂载已登录用户的面板
    pub fn mount(&mut self, user: User) -> &User {
        let dashboard = Dashboard::mount(&user, &self.config);
        let (user, _) = self.session.insert((user, dashboard));
        user
    }

    pub fn logout(&mut self) {
        if let Some((user, _)) = self.session.take() {
            info!("User {} logged out", user.username);
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|(user, _)| user)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.session.as_ref().map(|(_, dashboard)| dashboard)
    }

    pub fn teacher_dashboard_mut(&mut self) -> Option<&mut TeacherDashboard> {
        match self.session.as_mut() {
            Some((_, Dashboard::Teacher(dashboard))) => Some(dashboard),
            _ => None,
        }
    }

    pub fn student_dashboard_mut(&mut self) -> Option<&mut StudentDashboard> {
        match self.session.as_mut() {
            Some((_, Dashboard::Student(dashboard))) => Some(dashboard),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        self.dashboard().map(Dashboard::snapshot)
    }
}
