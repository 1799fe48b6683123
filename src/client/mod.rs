//! Blocking HTTP transport.
//!
//! ```no_run
//! use paket::client::HttpTransport;
//! use paket::core::Credentials;
//! use paket::soap::{Api, ApiConfig, CallOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::from_env()?;
//! let api = Api::new(HttpTransport::new(&config)?, config);
//!
//! let credentials = Credentials::new("sandboxdpd", "secret")?;
//! if let CallOutcome::Success(login) = api.authenticate(&credentials)? {
//!     println!("depot {:?}", login.depot());
//! }
//! # Ok(())
//! # }
//! ```

mod http;

pub use http::HttpTransport;
