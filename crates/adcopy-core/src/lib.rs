//! Provider-agnostic building blocks for **adcopy**.
//!
//! The crate knows nothing about HTTP or terminals. It defines the message
//! shapes a prompt is made of, the identifiers of the models we can target,
//! the [`provider::ChatCompletionProvider`] seam a backend plugs into, and
//! the error type every layer converts into.
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use error::{AdcopyError, Result};
