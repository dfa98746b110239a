use tokio::signal;
use tracing::{error, warn};

pub async fn listen_for_shutdown() {
    // 等待 Ctrl+C 信号
    match signal::ctrl_c().await {
        Ok(()) => warn!("Shutdown signal received, cancelling pending login..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            // 无法监听信号时永不返回，交由会话自行结束
            std::future::pending::<()>().await;
        }
    }
}
