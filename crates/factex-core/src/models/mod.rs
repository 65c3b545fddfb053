//! Data models for extracted documents.

pub mod config;
pub mod document;
pub mod i18n;
