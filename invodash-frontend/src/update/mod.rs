use crate::{
    action::Action,
    event::{Envelope, Message},
    model::Model,
};

mod key;
mod navigation;
pub mod upload;

#[tracing::instrument(skip(model))]
pub fn update_model(model: &mut Model, envelope: &Envelope) -> Vec<Action> {
    envelope
        .messages
        .iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

fn update_with_message(model: &mut Model, message: &Message) -> Vec<Action> {
    match message {
        Message::Key(key) => key::handle(model, key),
        Message::NavigateTo(page) => navigation::navigate(model, *page),
        Message::Resize(_, _) => Vec::new(),
        Message::Upload(message) => upload::update(model, message),
    }
}
