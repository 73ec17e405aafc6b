//! # porkbun-provider
//!
//! An async client for the [Porkbun](https://porkbun.com/) registrar JSON API (v3).
//!
//! The client is exposed through the [`RegistrarClient`] trait so that callers can swap in
//! a fixture or a mock without touching the network.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static builds and cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use porkbun_provider::{PorkbunClient, PorkbunCredentials, RegistrarClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PorkbunClient::new(PorkbunCredentials {
//!         api_key: "pk1_...".to_string(),
//!         secret_key: "sk1_...".to_string(),
//!     })?;
//!
//!     for domain in client.list_domains().await? {
//!         println!("{} expires {}", domain.name, domain.expire_date);
//!     }
//!
//!     let ns = client.get_nameservers("example.com").await?;
//!     println!("{ns:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`](Result), an alias for
//! `std::result::Result<T, ProviderError>`. See [`ProviderError`] for the
//! variants. Nothing is retried automatically.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
/// Utility modules (lenient deserializers, log sanitization).
pub mod utils;

// Re-export public types
pub use error::{ProviderError, Result};
pub use providers::{PorkbunClient, PorkbunCredentials};
pub use traits::RegistrarClient;
pub use types::{AvailabilityResult, DnsRecord, Domain, PricingTable, TldPricing};
