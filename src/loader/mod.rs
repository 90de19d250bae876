pub mod openapi;

pub use openapi::{load_document, load_document_str};
