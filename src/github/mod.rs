pub mod client;
pub mod paginator;
pub mod transport;

pub use client::GitHubClient;
pub use paginator::Paginator;
pub use transport::{ApiResponse, HttpTransport, ReqwestTransport};
