use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    action::Action,
    model::{Model, Page},
    task::Task,
};

use super::{navigation, upload};

pub fn handle(model: &mut Model, key: &KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Action::Quit];
    }

    if model.prompt.is_some() {
        return handle_prompt(model, key);
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('1') => navigation::navigate(model, Page::Dashboard),
        KeyCode::Char('2') => navigation::navigate(model, Page::Upload),
        KeyCode::Char('3') => navigation::navigate(model, Page::Analytics),
        KeyCode::Char('4') => navigation::navigate(model, Page::Invoices),
        KeyCode::Char('5') => navigation::navigate(model, Page::Settings),
        KeyCode::Tab => navigation::next(model),
        KeyCode::Esc => {
            model.notifications.clear();
            Vec::new()
        }
        _ if model.page == Page::Upload => handle_upload_page(model, key),
        _ => Vec::new(),
    }
}

fn handle_upload_page(model: &mut Model, key: &KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('o') => {
            // picking stays disabled while a request is outstanding
            if !model.upload.is_uploading() {
                model.prompt = Some(String::new());
            }
            Vec::new()
        }
        KeyCode::Char('x') => upload::remove(model),
        KeyCode::Char('s') | KeyCode::Enter => upload::submit(model),
        _ => Vec::new(),
    }
}

fn handle_prompt(model: &mut Model, key: &KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            model.prompt = None;
            Vec::new()
        }
        KeyCode::Enter => {
            let input = model.prompt.take().unwrap_or_default();
            if input.is_empty() {
                return Vec::new();
            }

            vec![Action::Task(Task::ResolveFile(PathBuf::from(input)))]
        }
        KeyCode::Backspace => {
            if let Some(input) = &mut model.prompt {
                input.pop();
            }
            Vec::new()
        }
        KeyCode::Char(c) => {
            if let Some(input) = &mut model.prompt {
                input.push(c);
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use crossterm::event::{KeyCode, KeyEvent};

    use crate::{
        action::Action,
        model::{
            upload::{SelectedFile, UploadState},
            Model, Page,
        },
        task::Task,
    };

    use super::handle;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_path(model: &mut Model, path: &str) -> Vec<Action> {
        for c in path.chars() {
            handle(model, &press(KeyCode::Char(c)));
        }
        handle(model, &press(KeyCode::Enter))
    }

    #[test]
    fn confirming_the_prompt_resolves_the_typed_path() {
        let mut model = Model {
            page: Page::Upload,
            ..Default::default()
        };

        handle(&mut model, &press(KeyCode::Char('o')));
        assert_eq!(Some(String::new()), model.prompt);

        let actions = type_path(&mut model, "/tmp/invoice.pdf");

        assert_eq!(
            vec![Action::Task(Task::ResolveFile(PathBuf::from(
                "/tmp/invoice.pdf"
            )))],
            actions
        );
        assert_eq!(None, model.prompt);
    }

    #[test]
    fn cancelling_the_prompt_discards_the_input() {
        let mut model = Model {
            page: Page::Upload,
            prompt: Some("/tmp/inv".to_string()),
            ..Default::default()
        };

        let actions = handle(&mut model, &press(KeyCode::Esc));

        assert!(actions.is_empty());
        assert_eq!(None, model.prompt);
    }

    #[test]
    fn the_picker_is_disabled_while_uploading() {
        let mut model = Model {
            page: Page::Upload,
            upload: UploadState::Uploading(SelectedFile {
                path: PathBuf::from("/tmp/invoice.pdf"),
                name: "invoice.pdf".to_string(),
                size: 100,
                mime: None,
            }),
            ..Default::default()
        };

        handle(&mut model, &press(KeyCode::Char('o')));

        assert_eq!(None, model.prompt);
    }

    #[test]
    fn quit_keys_end_the_application() {
        let mut model = Model::default();

        assert_eq!(vec![Action::Quit], handle(&mut model, &press(KeyCode::Char('q'))));
    }
}
