//! Startup and serve errors for the SSR host.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
