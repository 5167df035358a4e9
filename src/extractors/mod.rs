//! Request extractors whose rejections use the API's error bodies.

pub mod json;
pub use json::JsonBody;
