use reqwest::{multipart, Client, StatusCode};

use crate::model::upload::SelectedFile;

/// Receipt acknowledgment of the webhook endpoint. The response body is not
/// interpreted; a success status is all that is recorded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ack;

/// Uniform classification of everything that can go wrong during the single
/// upload attempt. Non-2xx answers and network level faults are not
/// distinguished for the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportFailure {
    pub reason: String,
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Performs exactly one multipart POST carrying the selected file to the
/// configured endpoint. No retry, no chunking, no local state mutation.
pub async fn send(
    client: &Client,
    endpoint: &str,
    file: &SelectedFile,
) -> Result<Ack, TransportFailure> {
    let content = tokio::fs::read(&file.path)
        .await
        .map_err(|error| TransportFailure {
            reason: format!("reading {} failed: {}", file.name, error),
        })?;

    let mut part = multipart::Part::bytes(content).file_name(file.name.clone());
    if let Some(mime) = &file.mime {
        part = part.mime_str(mime).map_err(|error| TransportFailure {
            reason: format!("invalid mime type {}: {}", mime, error),
        })?;
    }

    let form = multipart::Form::new().part("file", part);

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|error| TransportFailure {
            reason: format!("request to {} failed: {}", endpoint, error),
        })?;

    classify(response.status())
}

fn classify(status: StatusCode) -> Result<Ack, TransportFailure> {
    if status.is_success() {
        Ok(Ack)
    } else {
        Err(TransportFailure {
            reason: format!("endpoint answered with status {}", status),
        })
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;

    use super::{classify, Ack};

    #[test]
    fn success_statuses_acknowledge_receipt() {
        assert_eq!(Ok(Ack), classify(StatusCode::OK));
        assert_eq!(Ok(Ack), classify(StatusCode::CREATED));
        assert_eq!(Ok(Ack), classify(StatusCode::NO_CONTENT));
    }

    #[test]
    fn non_success_statuses_fail_uniformly() {
        assert!(classify(StatusCode::BAD_REQUEST).is_err());
        assert!(classify(StatusCode::NOT_FOUND).is_err());
        assert!(classify(StatusCode::INTERNAL_SERVER_ERROR).is_err());
        assert!(classify(StatusCode::BAD_GATEWAY).is_err());
    }
}
