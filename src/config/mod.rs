//! 配置管理

#[path = "impl.rs"]
mod loader;
mod structs;

pub use structs::*;
