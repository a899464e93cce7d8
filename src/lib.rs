// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod trace_init;

pub use crate::config::{ConfigError, ConverterConfig};
pub use crate::core::converter::{
    english_to_unicode, preeti_to_unicode, unicode_to_english, unicode_to_preeti, Converter,
};
pub use crate::core::engine::{ParseScriptError, Script};
pub use crate::error::ConvertError;
