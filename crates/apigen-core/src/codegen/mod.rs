//! Decorated entities handed to the template layer.
//!
//! Everything here serializes with the camelCase field names templates rely
//! on (`subresourceOperation`, `hasMultiple2xxReturnCodes`, `hashCodeInitial`,
//! `constantName`, ...).

pub mod models;
pub mod operations;

pub use models::{CodegenModel, CodegenProperty};
pub use operations::{CodegenOperation, CodegenParameter, CodegenResponse, HttpMethod};
