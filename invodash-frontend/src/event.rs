use crossterm::event::{KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use tokio::{
    select,
    sync::{
        mpsc::{self, Receiver},
        oneshot,
    },
};

use crate::{
    error::AppError,
    model::{upload::SelectedFile, Page},
    settings::Settings,
    task::{Task, TaskManager},
    transport::{Ack, TransportFailure},
};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    Task,
    User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Key(KeyEvent),
    NavigateTo(Page),
    Resize(u16, u16),
    Upload(UploadMessage),
}

/// Resolutions of the suspending operations around the upload workflow. User
/// intents (select, remove, submit) arrive as keys and are mapped in update.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UploadMessage {
    FileResolved(SelectedFile),
    SelectionRejected(String),
    Finished(Result<Ack, TransportFailure>),
}

pub struct Emitter {
    cancellation: Option<oneshot::Sender<oneshot::Sender<bool>>>,
    tasks: TaskManager,
    pub receiver: Receiver<Envelope>,
}

impl Emitter {
    pub fn start(settings: &Settings) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        let tasks = TaskManager::new(sender.clone(), settings);

        let (cancellation, cancellation_receiver) = oneshot::channel();
        start_crossterm_listener(cancellation_receiver, sender);

        Self {
            cancellation: Some(cancellation),
            tasks,
            receiver,
        }
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        if let Some(cancellation) = self.cancellation.take() {
            let (sender, receiver) = oneshot::channel();
            if cancellation.send(sender).is_ok() {
                let _ = receiver.await;
            }
        }

        self.tasks.finishing().await
    }

    pub fn run(&mut self, task: Task) {
        self.tasks.run(task);
    }
}

fn start_crossterm_listener(
    mut cancellation_receiver: oneshot::Receiver<oneshot::Sender<bool>>,
    sender: mpsc::Sender<Envelope>,
) {
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();

        loop {
            let crossterm_event = reader.next().fuse();

            select! {
                Ok(sender) = &mut cancellation_receiver => {
                    let _ = sender.send(true);
                    break
                }
                Some(Ok(event)) = crossterm_event => {
                    if let Some(envelope) = handle_crossterm_event(event) {
                        let _ = sender.send(envelope).await;
                    }
                }
            }
        }
    });
}

fn handle_crossterm_event(event: crossterm::event::Event) -> Option<Envelope> {
    match event {
        crossterm::event::Event::Key(key) => {
            if key.kind == KeyEventKind::Press {
                Some(Envelope {
                    messages: vec![Message::Key(key)],
                    source: MessageSource::User,
                })
            } else {
                None
            }
        }
        crossterm::event::Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
            source: MessageSource::User,
        }),
        crossterm::event::Event::FocusLost
        | crossterm::event::Event::FocusGained
        | crossterm::event::Event::Paste(_)
        | crossterm::event::Event::Mouse(_) => None,
    }
}
