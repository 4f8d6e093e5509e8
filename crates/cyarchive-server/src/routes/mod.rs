//! HTTP route handlers.

pub mod games;
pub mod index;
pub mod pages;
