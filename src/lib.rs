//! Lambda handlers for the customers API.
//!
//! Each operation is deployed as its own function (see the `[[bin]]` targets);
//! the shared request/response contract lives in [`common`].

pub mod common;
pub mod handlers;
