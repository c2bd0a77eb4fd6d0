//! Chat proxy: the [`ChatBackend`](backend::ChatBackend) port and the
//! service that relays prompts through it.

pub mod backend;
pub mod service;
