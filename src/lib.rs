pub mod annotation;
pub mod error;
pub mod extract;
pub mod output;
pub mod publications;
pub mod report;
pub mod schema;
pub mod study;
