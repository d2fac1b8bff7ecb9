//! Flow session storage implementations.
//!
//! Only an in-memory store is provided; flow outcomes live for the lifetime of
//! the process.

mod inmemory;

pub use inmemory::SessionStore;
