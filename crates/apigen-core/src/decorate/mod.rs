//! Decoration passes that enrich models, properties and operations with
//! generation metadata before template rendering.

pub mod models;
pub mod operations;

pub use models::{
    ModelDecorator, post_process_inheritance, post_process_model_properties, reorder_schemas,
};
pub use operations::{from_operation, post_process_operation};
