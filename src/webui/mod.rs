pub mod error;
pub mod extractors;
pub mod status;
pub mod tool_chat;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AppConfig;
use tool_chat::ChatState;

pub fn app(state: ChatState) -> Router {
    Router::new()
        .merge(tool_chat::routes(state))
        .merge(status::routes())
        .layer(CorsLayer::permissive())
}

pub fn run_server(port: u16, config: AppConfig) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(start_server_async(port, config))
}

/// Async version of `run_server` for embedding in an existing tokio runtime.
pub async fn start_server_async(port: u16, config: AppConfig) -> Result<()> {
    let state = ChatState::new(config, default_search_roots())?;
    info!(
        llm_enabled = state.llm.is_some(),
        model = %state.config.openai_model,
        "Tool chat configured"
    );

    let listener = bind_with_reuse(port).await?;
    info!("Toolchat listening on http://0.0.0.0:{port}");
    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}

/// Current directory first, then the directory holding the binary.
pub fn default_search_roots() -> Vec<std::path::PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
    {
        roots.push(dir);
    }
    roots
}

/// Bind a TCP listener with SO_REUSEADDR so restarts reclaim the port instantly.
async fn bind_with_reuse(port: u16) -> Result<tokio::net::TcpListener> {
    let addr: std::net::SocketAddr = format!("0.0.0.0:{port}").parse()?;
    let socket = socket2::Socket::new(
        socket2::Domain::IPV4,
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(1024)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(tokio::net::TcpListener::from_std(std_listener)?)
}
