//! HTTP adapter for the external chat backend.

pub mod client;

pub use client::HttpChatBackend;
