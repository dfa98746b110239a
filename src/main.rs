use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, info, warn};

// 从 lib.rs 导入模块
use assignment_portal::config::AppConfig;
use assignment_portal::errors::{PortalError, Result};
use assignment_portal::models::AppStartTime;
use assignment_portal::runtime::lifetime;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init()?;
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_portal_startup()?;
    let mut portal = startup.portal;
    let auth = portal.auth();

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    // 演示会话：登录在后台任务中进行，期间收到 Ctrl+C 则作废本次登录
    let mut login = {
        let auth = auth.clone();
        let login_request = startup.login_request;
        tokio::spawn(async move { auth.login(login_request).await })
    };

    let joined = tokio::select! {
        res = &mut login => res,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            auth.cancel();
            login.await
        }
    };

    let user = match joined
        .map_err(|e| PortalError::authentication(format!("Login task failed: {e}")))?
    {
        Ok(user) => user,
        Err(PortalError::StaleLogin(msg)) => {
            warn!("Login cancelled before completion: {}", msg);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let user = portal.mount(user);
    info!("Dashboard mounted for {} ({})", user.username, user.role);

    if let Some(snapshot) = portal.snapshot() {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    portal.logout();
    Ok(())
}
