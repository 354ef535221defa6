use std::path::{Path, PathBuf};

use reqwest::Client;
use tokio::{sync::mpsc::Sender, task::JoinSet};

use crate::{
    error::AppError,
    event::{Envelope, Message, MessageSource, UploadMessage},
    model::upload::SelectedFile,
    settings::Settings,
    transport,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Task {
    EmitMessages(Vec<Message>),
    ResolveFile(PathBuf),
    UploadFile(SelectedFile),
}

pub struct TaskManager {
    client: Client,
    endpoint: String,
    max_upload_bytes: u64,
    sender: Sender<Envelope>,
    tasks: JoinSet<Result<(), AppError>>,
}

impl TaskManager {
    pub fn new(sender: Sender<Envelope>, settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.endpoint.clone(),
            max_upload_bytes: settings.max_upload_bytes,
            sender,
            tasks: JoinSet::new(),
        }
    }

    pub async fn finishing(&mut self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        while let Some(task) = self.tasks.join_next().await {
            match task {
                Ok(Ok(())) => (),
                Ok(Err(error)) => {
                    tracing::error!("task result returned error: {:?}", error);
                    errors.push(error)
                }
                Err(error) => {
                    tracing::error!("task failed: {:?}", error);
                }
            };
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Aggregate(errors))
        }
    }

    pub fn run(&mut self, task: Task) {
        match task {
            Task::EmitMessages(messages) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move { emit(&sender, messages).await });
            }
            Task::ResolveFile(path) => {
                let sender = self.sender.clone();
                let max_bytes = self.max_upload_bytes;
                self.tasks.spawn(async move {
                    let message = match resolve_file(&path, max_bytes).await {
                        Ok(file) => Message::Upload(UploadMessage::FileResolved(file)),
                        Err(reason) => Message::Upload(UploadMessage::SelectionRejected(reason)),
                    };
                    emit(&sender, vec![message]).await
                });
            }
            Task::UploadFile(file) => {
                let sender = self.sender.clone();
                let client = self.client.clone();
                let endpoint = self.endpoint.clone();
                self.tasks.spawn(async move {
                    tracing::debug!("uploading {} to {}", file.name, endpoint);

                    let result = transport::send(&client, &endpoint, &file).await;
                    emit(&sender, vec![Message::Upload(UploadMessage::Finished(result))]).await
                });
            }
        };
    }
}

async fn emit(sender: &Sender<Envelope>, messages: Vec<Message>) -> Result<(), AppError> {
    let envelope = Envelope {
        messages,
        source: MessageSource::Task,
    };

    Ok(sender.send(envelope).await?)
}

/// Turns a picked path into a [`SelectedFile`], enforcing the size cap at
/// selection time. The mime type is inferred from content and stays advisory.
pub async fn resolve_file(path: &Path, max_bytes: u64) -> Result<SelectedFile, String> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(it) => it,
        Err(_) => return Err(format!("{} does not exist", path.display())),
    };

    if !metadata.is_file() {
        return Err(format!("{} is not a file", path.display()));
    }

    if metadata.len() > max_bytes {
        return Err(format!(
            "{} exceeds the upload limit of {} MB",
            path.display(),
            max_bytes / 1024 / 1024
        ));
    }

    let name = match path.file_name().and_then(|it| it.to_str()) {
        Some(name) => name.to_string(),
        None => return Err(format!("{} has no usable file name", path.display())),
    };

    let mime = infer::get_from_path(path)
        .ok()
        .flatten()
        .map(|kind| kind.mime_type().to_string());

    Ok(SelectedFile {
        path: path.to_path_buf(),
        name,
        size: metadata.len(),
        mime,
    })
}
