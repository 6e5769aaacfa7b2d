pub mod errors;
pub mod models;
pub mod pipeline;
pub mod sanitize;


pub use errors::LexmineError;
pub use models::{
    CorrectionResult,
    PreviewItem,
    SourceKind,
    WordRecord,
    WordStatus,
};
