use action::Action;
use error::AppError;
use event::{Emitter, Message};
use layout::AppLayout;
use model::{Model, Page};
use settings::Settings;
use task::Task;
use terminal::TerminalWrapper;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
mod event;
mod layout;
mod model;
pub mod settings;
mod task;
mod terminal;
mod transport;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start(&settings);

    if settings.start_on_upload || settings.startup_file.is_some() {
        emitter.run(Task::EmitMessages(vec![Message::NavigateTo(Page::Upload)]));
    }

    if let Some(path) = &settings.startup_file {
        emitter.run(Task::ResolveFile(path.clone()));
    }

    let mut model = Model {
        settings,
        ..Default::default()
    };

    tracing::debug!("starting with model state: {:?}", model);

    model.layout = AppLayout::new(terminal.size()?);
    render_model(&mut terminal, &model)?;

    let mut result = Vec::new();
    while let Some(envelope) = emitter.receiver.recv().await {
        tracing::debug!(
            "received {:?} messages: {:?}",
            envelope.source,
            envelope.messages
        );

        model.layout = AppLayout::new(terminal.size()?);

        let actions = update_model(&mut model, &envelope);
        let quit = execute_actions(&mut emitter, actions);

        render_model(&mut terminal, &model)?;

        if quit {
            break;
        }
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    terminal.shutdown()?;

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}

fn execute_actions(emitter: &mut Emitter, actions: Vec<Action>) -> bool {
    let mut quit = false;
    for action in actions {
        match action {
            Action::Task(task) => emitter.run(task),
            Action::Quit => quit = true,
        }
    }

    quit
}
