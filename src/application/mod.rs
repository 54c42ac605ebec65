//! # Application Layer
//!
//! The demo routines and the sequential runner.
//!
//! - [`DemoContext`]: Signing identity and client, built once at startup
//! - [`Demo`]: One transaction type demonstration
//! - [`DemoRunner`]: Runs demos strictly one after another
//! - [`report`]: Receipt output

pub mod context;
pub mod demos;
pub mod error;
pub mod report;
pub mod runner;

pub use context::DemoContext;
pub use demos::Demo;
pub use error::{ApplicationError, ApplicationResult};
pub use runner::DemoRunner;
