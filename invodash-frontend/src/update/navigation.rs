use crate::{action::Action, model::{Model, Page}};

pub fn navigate(model: &mut Model, page: Page) -> Vec<Action> {
    if model.page != page {
        tracing::debug!("navigating from {:?} to {:?}", model.page, page);

        model.page = page;
        model.prompt = None;
    }

    Vec::new()
}

pub fn next(model: &mut Model) -> Vec<Action> {
    let index = Page::ALL
        .iter()
        .position(|it| it == &model.page)
        .unwrap_or_default();

    let next = Page::ALL[(index + 1) % Page::ALL.len()];

    navigate(model, next)
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use crate::model::{
        upload::{SelectedFile, UploadState},
        Model, Page,
    };

    use super::{navigate, next};

    #[test]
    fn navigating_closes_an_open_prompt() {
        let mut model = Model {
            page: Page::Upload,
            prompt: Some("/tmp/invoice.pdf".to_string()),
            ..Default::default()
        };

        navigate(&mut model, Page::Dashboard);

        assert_eq!(Page::Dashboard, model.page);
        assert_eq!(None, model.prompt);
    }

    #[test]
    fn navigating_away_leaves_an_upload_in_flight_untouched() {
        let selected = SelectedFile {
            path: PathBuf::from("/tmp/invoice.pdf"),
            name: "invoice.pdf".to_string(),
            size: 100,
            mime: None,
        };
        let mut model = Model {
            page: Page::Upload,
            upload: UploadState::Uploading(selected.clone()),
            ..Default::default()
        };

        navigate(&mut model, Page::Dashboard);

        assert_eq!(UploadState::Uploading(selected), model.upload);
    }

    #[test]
    fn next_cycles_through_all_pages() {
        let mut model = Model::default();

        for expected in [
            Page::Upload,
            Page::Analytics,
            Page::Invoices,
            Page::Settings,
            Page::Dashboard,
        ] {
            next(&mut model);
            assert_eq!(expected, model.page);
        }
    }
}
