//! Application setup shared by dashboard hosts.

mod tracing_subscriber;

pub use self::tracing_subscriber::init_tracing;
