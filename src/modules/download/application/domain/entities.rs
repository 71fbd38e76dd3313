use std::path::PathBuf;

/// Location of the résumé on disk plus the name the browser should save it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: &'static str,
}

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
