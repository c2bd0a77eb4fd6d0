//! Business logic and port trait definitions for the OrgLead backend.
//!
//! This crate defines the "ports" (repository, hasher and chat backend
//! traits) that the infrastructure layer implements. It depends only on
//! `orglead-types` -- never on `orglead-infra` or any database/IO crate.

pub mod chat;
pub mod repository;
pub mod service;
