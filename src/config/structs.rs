use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub app: AppSettings,
    pub portal: PortalConfig,
    pub demo: DemoConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 作业门户配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    pub total_students: i64,          // 每个作业的班级人数
    pub default_max_score: i64,       // 新建作业的默认满分
    pub upcoming_deadline_limit: usize, // 侧边栏展示的临近截止作业数
    pub login_delay_ms: u64,          // 模拟登录延迟 (毫秒)
    pub strict_grading: bool,         // 是否拒绝超出 [0, max_score] 的分数，false 时照单全收
}

/// 演示会话配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    pub username: String,
    #[serde(skip_serializing, default)] // 不序列化到输出中
    pub password: String,
    pub role: String,
}
