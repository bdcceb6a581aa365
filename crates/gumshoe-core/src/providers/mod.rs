//! Groq chat-completion client and supporting plumbing.

pub mod groq;
mod sse;
pub mod shared;
pub mod thinking;

pub use shared::{
    ChatMessage, ProviderError, ProviderErrorKind, ProviderResult, ProviderStream, StreamEvent,
    resolve_api_key, resolve_base_url,
};
