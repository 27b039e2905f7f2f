mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::OpenAiClient;
pub use model_map::GPT4_O;
pub mod api_v1;
mod client;
pub mod error;
