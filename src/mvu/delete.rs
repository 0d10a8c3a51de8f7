use log::warn;

use crate::error::DeleteError;
use crate::page::{ClickEvent, HOME_HREF, Page};
use crate::venue::{DeleteOutcome, DeletionResponse, VenueApi, VenueId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HandlerState {
    #[default]
    Idle,
    Pending(VenueId),
    Done(Result<DeleteOutcome, DeleteError>),
}

#[derive(Debug, Clone, Default)]
pub struct DeleteModel {
    pub state: HandlerState,
}

impl DeleteModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.state, HandlerState::Done(_))
    }

    /// The result of a settled run.
    ///
    /// # Errors
    ///
    /// The failure that ended the run, or `Unsettled` when the model never
    /// reached `Done`.
    pub fn into_result(self) -> Result<DeleteOutcome, DeleteError> {
        match self.state {
            HandlerState::Done(result) => result,
            other => {
                debug_assert!(false, "delete loop drained in state {other:?}");
                Err(DeleteError::Unsettled(format!("{other:?}")))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Clicked(ClickEvent),
    DefaultPrevented,
    Deleted(DeletionResponse),
    Navigated(String),
    Notified,
    Failed(DeleteError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PreventDefault,
    SendDelete(VenueId),
    Navigate(String),
    Notify(DeleteError),
}

/// Effects are meant to run in the order returned.
pub fn update(model: &mut DeleteModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Clicked(event) => match event.target.venue_id() {
            Some(id) => {
                model.state = HandlerState::Pending(id.clone());
                vec![Effect::PreventDefault, Effect::SendDelete(id)]
            }
            None => {
                model.state = HandlerState::Done(Err(DeleteError::MissingVenueId));
                vec![
                    Effect::PreventDefault,
                    Effect::Notify(DeleteError::MissingVenueId),
                ]
            }
        },
        Msg::DefaultPrevented | Msg::Notified => vec![],
        Msg::Deleted(resp) => {
            if resp.success {
                vec![Effect::Navigate(HOME_HREF.to_string())]
            } else {
                model.state = HandlerState::Done(Ok(DeleteOutcome::NotDeleted));
                vec![]
            }
        }
        Msg::Navigated(href) => {
            model.state = HandlerState::Done(Ok(DeleteOutcome::Navigated(href)));
            vec![]
        }
        Msg::Failed(e) => {
            model.state = HandlerState::Done(Err(e.clone()));
            vec![Effect::Notify(e)]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub api: &'a dyn VenueApi,
    pub page: &'a dyn Page,
}

pub async fn run_effect(effect: Effect, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::PreventDefault => {
            deps.page.prevent_default();
            Msg::DefaultPrevented
        }
        Effect::SendDelete(id) => match deps.api.delete_venue(&id).await {
            Ok(resp) => Msg::Deleted(resp),
            Err(e) => Msg::Failed(e),
        },
        Effect::Navigate(href) => {
            deps.page.navigate(&href);
            Msg::Navigated(href)
        }
        Effect::Notify(e) => {
            warn!("venue delete failed: {e}");
            deps.page.notify(&e);
            Msg::Notified
        }
    }
}
