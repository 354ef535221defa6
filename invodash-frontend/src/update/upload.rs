use crate::{
    action::Action,
    event::UploadMessage,
    model::{
        notification::Notification,
        upload::{SelectedFile, UploadState},
        Model,
    },
    task::Task,
    transport::{Ack, TransportFailure},
};

pub fn update(model: &mut Model, message: &UploadMessage) -> Vec<Action> {
    match message {
        UploadMessage::FileResolved(file) => select(model, file.clone()),
        UploadMessage::SelectionRejected(reason) => {
            model.notify(Notification::error("File not accepted", reason.clone()));
            Vec::new()
        }
        UploadMessage::Finished(result) => finish(model, result),
    }
}

/// Replaces the current selection wholesale and resets the last outcome. A
/// selection arriving while a request is outstanding is stale and dropped.
pub fn select(model: &mut Model, file: SelectedFile) -> Vec<Action> {
    if model.upload.is_uploading() {
        tracing::warn!("dropping file selection while upload is in flight: {}", file.name);
        return Vec::new();
    }

    if !file.has_advisory_extension() {
        model.notify(Notification::info(
            "Unusual file type",
            format!("{} does not look like an invoice document", file.name),
        ));
    }

    model.upload = UploadState::FileSelected(file);
    Vec::new()
}

pub fn remove(model: &mut Model) -> Vec<Action> {
    match &model.upload {
        UploadState::FileSelected(_) | UploadState::Failed { .. } => {
            model.upload = UploadState::Idle;
        }
        UploadState::Idle | UploadState::Uploading(_) | UploadState::Succeeded { .. } => {}
    }

    Vec::new()
}

/// Starts the single upload attempt. Submitting without a file surfaces a
/// notification, submitting while one is in flight is a no-op.
pub fn submit(model: &mut Model) -> Vec<Action> {
    let file = match &model.upload {
        UploadState::FileSelected(file) => file.clone(),
        UploadState::Failed { file, .. } => file.clone(),
        UploadState::Uploading(_) => return Vec::new(),
        UploadState::Idle | UploadState::Succeeded { .. } => {
            model.notify(Notification::error(
                "No file selected",
                "Please select a file to upload",
            ));
            return Vec::new();
        }
    };

    model.upload = UploadState::Uploading(file.clone());

    vec![Action::Task(Task::UploadFile(file))]
}

fn finish(model: &mut Model, result: &Result<Ack, TransportFailure>) -> Vec<Action> {
    let file = match &model.upload {
        UploadState::Uploading(file) => file.clone(),
        state => {
            tracing::warn!("dropping stale upload resolution in state {:?}", state);
            return Vec::new();
        }
    };

    match result {
        Ok(_) => {
            model.notify(Notification::success(
                "Upload successful!",
                format!("{} has been uploaded successfully.", file.name),
            ));
            model.upload = UploadState::Succeeded {
                uploaded: file.name,
            };
        }
        Err(failure) => {
            tracing::error!("upload of {} failed: {}", file.name, failure);

            model.notify(Notification::error(
                "Upload failed",
                "There was an error uploading your file. Please try again.",
            ));
            model.upload = UploadState::Failed {
                file,
                reason: failure.reason.clone(),
            };
        }
    }

    Vec::new()
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use crate::{
        action::Action,
        model::{
            notification::Severity,
            upload::{SelectedFile, UploadState},
            Model,
        },
        task::Task,
        transport::{Ack, TransportFailure},
    };

    use super::{finish, remove, select, submit};

    fn file(name: &str, size: u64) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(format!("/tmp/{}", name)),
            name: name.to_string(),
            size,
            mime: None,
        }
    }

    fn upload_tasks(actions: &[Action]) -> usize {
        actions
            .iter()
            .filter(|action| matches!(action, Action::Task(Task::UploadFile(_))))
            .count()
    }

    #[test]
    fn selecting_a_file_records_name_and_size_exactly() {
        let mut model = Model::default();

        let actions = select(&mut model, file("invoice.pdf", 2_516_582));

        assert!(actions.is_empty());
        let selected = model.upload.selected_file().expect("file is selected");
        assert_eq!("invoice.pdf", selected.name);
        assert_eq!(2_516_582, selected.size);
    }

    #[test]
    fn selecting_a_second_file_replaces_the_first_wholesale() {
        let mut model = Model::default();

        select(&mut model, file("invoice.pdf", 100));
        select(&mut model, file("scan.png", 200));

        assert_eq!(
            UploadState::FileSelected(file("scan.png", 200)),
            model.upload
        );
    }

    #[test]
    fn selecting_resets_a_previous_outcome() {
        let mut model = Model {
            upload: UploadState::Succeeded {
                uploaded: "old.pdf".to_string(),
            },
            ..Default::default()
        };

        select(&mut model, file("invoice.pdf", 100));
        assert_eq!(
            UploadState::FileSelected(file("invoice.pdf", 100)),
            model.upload
        );

        model.upload = UploadState::Failed {
            file: file("old.pdf", 50),
            reason: "timeout".to_string(),
        };

        select(&mut model, file("invoice.pdf", 100));
        assert_eq!(
            UploadState::FileSelected(file("invoice.pdf", 100)),
            model.upload
        );
    }

    #[test]
    fn selecting_an_unlisted_extension_notifies_but_is_accepted() {
        let mut model = Model::default();

        select(&mut model, file("notes.txt", 10));

        assert_eq!(
            UploadState::FileSelected(file("notes.txt", 10)),
            model.upload
        );
        assert_eq!(1, model.notifications.len());
        assert_eq!(Severity::Info, model.notifications[0].severity);
    }

    #[test]
    fn a_late_selection_does_not_disturb_an_upload_in_flight() {
        let mut model = Model::default();
        select(&mut model, file("invoice.pdf", 100));
        submit(&mut model);

        let actions = select(&mut model, file("scan.png", 200));

        assert!(actions.is_empty());
        assert_eq!(UploadState::Uploading(file("invoice.pdf", 100)), model.upload);
        assert!(model.notifications.is_empty());
    }

    #[test]
    fn removing_returns_to_idle() {
        let mut model = Model::default();

        select(&mut model, file("invoice.pdf", 100));
        remove(&mut model);

        assert_eq!(UploadState::Idle, model.upload);
    }

    #[test]
    fn removing_during_an_upload_is_a_noop() {
        let mut model = Model {
            upload: UploadState::Uploading(file("invoice.pdf", 100)),
            ..Default::default()
        };

        remove(&mut model);

        assert_eq!(UploadState::Uploading(file("invoice.pdf", 100)), model.upload);
    }

    #[test]
    fn submitting_without_a_file_skips_the_transport_and_notifies() {
        let mut model = Model::default();

        let actions = submit(&mut model);

        assert_eq!(0, upload_tasks(&actions));
        assert_eq!(UploadState::Idle, model.upload);
        assert_eq!(1, model.notifications.len());
        assert_eq!("No file selected", model.notifications[0].title);
        assert_eq!(Severity::Error, model.notifications[0].severity);
    }

    #[test]
    fn submitting_invokes_the_transport_exactly_once() {
        let mut model = Model::default();
        select(&mut model, file("invoice.pdf", 100));

        let actions = submit(&mut model);

        assert_eq!(1, upload_tasks(&actions));
        assert_eq!(UploadState::Uploading(file("invoice.pdf", 100)), model.upload);

        let actions = submit(&mut model);

        assert_eq!(0, upload_tasks(&actions));
        assert_eq!(UploadState::Uploading(file("invoice.pdf", 100)), model.upload);
    }

    #[test]
    fn success_clears_the_selection_and_names_the_file() {
        let mut model = Model::default();
        select(&mut model, file("invoice.pdf", 100));
        submit(&mut model);

        finish(&mut model, &Ok(Ack));

        assert_eq!(
            UploadState::Succeeded {
                uploaded: "invoice.pdf".to_string()
            },
            model.upload
        );
        assert_eq!(None, model.upload.selected_file());
        assert_eq!(1, model.notifications.len());
        assert_eq!(Severity::Success, model.notifications[0].severity);
        assert!(model.notifications[0].description.contains("invoice.pdf"));
    }

    #[test]
    fn failure_preserves_the_selection_for_a_retry() {
        let mut model = Model::default();
        select(&mut model, file("invoice.pdf", 100));
        submit(&mut model);

        finish(
            &mut model,
            &Err(TransportFailure {
                reason: "endpoint answered with status 503 Service Unavailable".to_string(),
            }),
        );

        let selected = model.upload.selected_file().expect("file is preserved");
        assert_eq!("invoice.pdf", selected.name);
        assert_eq!(100, selected.size);
        assert_eq!(1, model.notifications.len());
        assert_eq!(Severity::Error, model.notifications[0].severity);
    }

    #[test]
    fn stale_resolutions_outside_an_upload_are_dropped() {
        let mut model = Model::default();

        finish(&mut model, &Ok(Ack));

        assert_eq!(UploadState::Idle, model.upload);
        assert!(model.notifications.is_empty());
    }

    #[test]
    fn upload_of_an_invoice_succeeds_end_to_end() {
        let mut model = Model::default();

        select(&mut model, file("invoice.pdf", 2_516_582));
        let actions = submit(&mut model);
        assert_eq!(1, upload_tasks(&actions));

        finish(&mut model, &Ok(Ack));

        assert_eq!(
            UploadState::Succeeded {
                uploaded: "invoice.pdf".to_string()
            },
            model.upload
        );
        assert_eq!(None, model.upload.selected_file());

        let success: Vec<_> = model
            .notifications
            .iter()
            .filter(|it| it.severity == Severity::Success)
            .collect();
        assert_eq!(1, success.len());
        assert!(success[0].description.contains("invoice.pdf"));
    }

    #[test]
    fn network_fault_keeps_the_file_and_allows_one_retry_call() {
        let mut model = Model::default();

        select(&mut model, file("scan.png", 524_288));
        let actions = submit(&mut model);
        assert_eq!(1, upload_tasks(&actions));

        finish(
            &mut model,
            &Err(TransportFailure {
                reason: "request failed: connection reset by peer".to_string(),
            }),
        );

        let selected = model.upload.selected_file().expect("file is preserved");
        assert_eq!("scan.png", selected.name);
        assert_eq!(524_288, selected.size);

        let failures: Vec<_> = model
            .notifications
            .iter()
            .filter(|it| it.severity == Severity::Error)
            .collect();
        assert_eq!(1, failures.len());

        let actions = submit(&mut model);
        assert_eq!(1, upload_tasks(&actions));
        assert_eq!(UploadState::Uploading(file("scan.png", 524_288)), model.upload);
    }
}
