pub mod core;
pub mod correction;
pub mod persistence;
pub mod segmentation;
pub mod srs;

pub use crate::core::{
    pipeline::ImportPipeline,
    CorrectionResult,
    LexmineError,
    PreviewItem,
    SourceKind,
    WordRecord,
    WordStatus,
};
pub use crate::correction::FuzzyCorrector;
pub use crate::persistence::WordStore;
pub use crate::srs::{
    next_state,
    SrsState,
    SrsUpdate,
};
