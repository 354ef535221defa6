use ratatui::layout::Rect;

use crate::{layout::AppLayout, settings::Settings};

use self::{notification::Notification, upload::UploadState};

pub mod dashboard;
pub mod notification;
pub mod upload;

const NOTIFICATION_HISTORY_LIMIT: usize = 16;

#[derive(Debug)]
pub struct Model {
    pub layout: AppLayout,
    pub notifications: Vec<Notification>,
    pub page: Page,
    pub prompt: Option<String>,
    pub settings: Settings,
    pub upload: UploadState,
}

impl Model {
    /// Records a notification, keeping only the most recent entries. The
    /// newest one is rendered; the rest are history for the log.
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);

        let overflow = self
            .notifications
            .len()
            .saturating_sub(NOTIFICATION_HISTORY_LIMIT);
        if overflow > 0 {
            self.notifications.drain(..overflow);
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self {
            layout: AppLayout::new(Rect::default()),
            notifications: Vec::new(),
            page: Page::default(),
            prompt: None,
            settings: Settings::default(),
            upload: UploadState::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Page {
    #[default]
    Dashboard,
    Upload,
    Analytics,
    Invoices,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Upload,
        Page::Analytics,
        Page::Invoices,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Upload => "Upload Invoice",
            Page::Analytics => "Analytics",
            Page::Invoices => "Invoices",
            Page::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Model, NOTIFICATION_HISTORY_LIMIT};

    use crate::model::notification::Notification;

    #[test]
    fn notification_history_is_capped_to_the_newest_entries() {
        let mut model = Model::default();

        for index in 0..40 {
            model.notify(Notification::info("Note", index.to_string()));
        }

        assert_eq!(NOTIFICATION_HISTORY_LIMIT, model.notifications.len());
        assert_eq!(
            "39",
            model.notifications.last().expect("newest entry").description
        );
        assert_eq!("24", model.notifications[0].description);
    }
}
