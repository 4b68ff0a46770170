pub mod context;
pub mod credentials;
