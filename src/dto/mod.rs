pub mod auth;
pub mod likes;
pub mod products;
