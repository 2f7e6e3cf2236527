use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::resume::ResumeError;
use crate::sources::SourceError;

/// Run-aborting failures, tagged by the stage that raised them.
///
/// Per-job failures never surface here; they are logged and the job is skipped.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Resume load failed: {0}")]
    ResumeLoad(#[from] ResumeError),

    #[error("Profile extraction failed: {0}")]
    ProfileExtraction(ExtractionError),

    #[error("Job acquisition failed: {0}")]
    Acquisition(#[from] SourceError),

    #[error("Report write failed: {0}")]
    Report(std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_messages_name_the_stage() {
        let err: PipelineError = ResumeError::NotFound(PathBuf::from("cv.pdf")).into();
        assert!(err.to_string().starts_with("Resume load failed"));
        assert!(err.to_string().contains("cv.pdf"));

        let err: PipelineError = SourceError::Malformed("no items".to_string()).into();
        assert!(err.to_string().starts_with("Job acquisition failed"));

        let err = PipelineError::ProfileExtraction(ExtractionError::NotAnObject);
        assert!(err.to_string().contains("not a JSON object"));
    }
}
