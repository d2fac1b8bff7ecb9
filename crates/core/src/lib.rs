//! Functional core for pinauth.
//!
//! Pure types and decisions for the PIN second-factor flow. Nothing in this
//! crate performs I/O; storage is reached through [`flow::FlowSessionRepository`].

pub mod flow;
