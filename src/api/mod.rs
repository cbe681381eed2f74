//! Client for the school backend REST API

mod client;
mod error;
mod traits;

pub use client::HttpApi;
pub use error::RemoteError;
pub use traits::SchoolApi;

#[cfg(test)]
pub use traits::MockSchoolApi;
