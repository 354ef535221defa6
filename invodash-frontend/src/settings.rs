use std::path::PathBuf;

use crate::model::upload::MAX_UPLOAD_BYTES;

pub const DEFAULT_ENDPOINT: &str = "https://n8nmiat.miasolutions.qzz.io/webhook-test/invoice";

#[derive(Clone, Debug)]
pub struct Settings {
    pub endpoint: String,
    pub max_upload_bytes: u64,
    pub start_on_upload: bool,
    pub startup_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            start_on_upload: false,
            startup_file: None,
        }
    }
}
