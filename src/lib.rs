#![cfg_attr(test, allow(clippy::unwrap_used))]

mod sensitive;

pub mod client;
pub mod forms;
pub mod validation;

pub use client::SubmitController;
pub use sensitive::Sensitive;
