pub mod error;
pub mod options;
pub mod parse;
pub mod result;
pub mod validate;
pub mod wasm;

pub use error::{Level, LoadError, Severity, ValidationIssue, codes};
pub use options::ValidatorOptions;
pub use result::ValidationResult;
pub use validate::{validate_document, validate_file, validate_str};
