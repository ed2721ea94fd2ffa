// newsfront-api: Async Rust client for the news portal REST backend

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{Endpoints, PortalClient};
pub use error::Error;
pub use models::{NewsArticleResponse, NewsImage, ProfileAccount, ProfileResponse, Publisher};
