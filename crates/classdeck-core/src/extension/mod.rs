//! Extension traits for third-party types.

mod toml_table;

pub use toml_table::TomlTableExt;
