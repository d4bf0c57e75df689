#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod class;
pub mod form;
pub mod icon;
pub mod layout;
pub mod navigation;
pub mod prelude;

#[cfg(test)]
mod testing;
