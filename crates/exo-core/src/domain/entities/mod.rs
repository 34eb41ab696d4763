pub mod common;
pub mod generation;
pub mod template_id;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use generation::{
    FailurePolicy, FileMapping, FileOutcome, FileStatus, GenerationResult, Requirements,
    WriteOutcome, WritePolicy,
};
pub use template_id::TemplateId;
