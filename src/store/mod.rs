//! Persistence operations. Each function is a single statement against the shared pool.

pub mod favorites;
pub mod products;
pub mod users;
