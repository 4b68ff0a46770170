use crate::core::domain::Identifiable;

pub mod model;

// Book exposes the catalog fields used for keyword matching.
pub trait Book: Identifiable {
    fn book_id(&self) -> i64;
    fn name(&self) -> &str;
    fn author(&self) -> &str;
    fn description(&self) -> &str;
}
