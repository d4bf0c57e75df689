#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod application;
pub mod auth;
pub mod error;
pub mod extension;
pub mod navigation;
pub mod state;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
