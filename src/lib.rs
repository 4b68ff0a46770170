pub mod auth;
pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod customers;
pub mod utils;
