//! Client facade: builder, configuration, local validation and the
//! async/blocking clients.

mod builder;
mod core;
mod validation;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use self::builder::{
    ClassifAiClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT,
    DEFAULT_TIMEOUT,
};
pub use self::core::ClassifAiClient;
