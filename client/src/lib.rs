pub mod client;
pub mod error;

pub use client::StatusClient;
pub use error::ClientError;
