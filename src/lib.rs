//! Assignment Portal - 作业门户状态模型
//!
//! 教师与学生双角色的作业流转：布置、提交、评分，以及面板统计。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（登录、门户、教师/学生面板）
//! - `storage`: 数据存储层（内存演示数据）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
