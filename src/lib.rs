//! Client bindings for GitHub's v3 REST API
//! https://developer.github.com/v3/

mod actions;
pub mod client;
mod common;
mod issues;
mod reactions;
mod user;

pub use actions::*;
pub use client::Client;
pub use common::*;
pub use issues::*;
pub use reactions::*;
pub use user::*;
