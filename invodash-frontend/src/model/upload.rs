use std::path::PathBuf;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const ADVISORY_EXTENSIONS: [&str; 6] = ["pdf", "jpg", "jpeg", "png", "doc", "docx"];

/// The single file currently chosen for upload. The path acts as the content
/// handle; bytes are read by the transport when the upload runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime: Option<String>,
}

impl SelectedFile {
    pub fn size_in_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }

    pub fn has_advisory_extension(&self) -> bool {
        self.path
            .extension()
            .and_then(|it| it.to_str())
            .map(|it| ADVISORY_EXTENSIONS.contains(&it.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

/// State of the upload workflow. Selection and in-flight flag are folded into
/// the variants, so an upload without a file cannot be represented.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    FileSelected(SelectedFile),
    Uploading(SelectedFile),
    Succeeded {
        uploaded: String,
    },
    Failed {
        file: SelectedFile,
        reason: String,
    },
}

impl UploadState {
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match self {
            UploadState::FileSelected(file) | UploadState::Uploading(file) => Some(file),
            UploadState::Failed { file, .. } => Some(file),
            UploadState::Idle | UploadState::Succeeded { .. } => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading(_))
    }
}
