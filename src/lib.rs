//! Coupon Hunt - Terminal Coupon Generator
//!
//! A terminal-based client that asks a remote service to generate
//! promotional codes for a chosen retailer, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
