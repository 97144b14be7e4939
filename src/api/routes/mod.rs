//! Routes
//!
//! Route handlers for the page and its update channel.

pub mod page;
pub mod update;
