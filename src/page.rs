//! The page the delete control lives on: its click events and the side
//! effects a handler may cause there.

use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::{BindError, DeleteError};
use crate::venue::VenueId;

/// Element id the delete handler binds to.
pub const DELETE_BUTTON_ID: &str = "delete_venue";

/// Where the page goes after a confirmed delete.
pub const HOME_HREF: &str = "/";

/// The element a click landed on, reduced to its `data-*` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    dataset: HashMap<String, String>,
}

impl ClickTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `data-{key}`.
    #[must_use]
    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    /// The venue id carried in `data-id`, if any.
    #[must_use]
    pub fn venue_id(&self) -> Option<VenueId> {
        self.data("id").map(VenueId::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: ClickTarget,
}

impl ClickEvent {
    #[must_use]
    pub fn on(target: ClickTarget) -> Self {
        Self { target }
    }
}

/// The single `#delete_venue` element found in a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteButton {
    target: ClickTarget,
}

impl DeleteButton {
    /// Locate the delete control in `html`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no element has the id, `Duplicate` when several do.
    pub fn bind(html: &str) -> Result<Self, BindError> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(&format!("#{DELETE_BUTTON_ID}"))
            .map_err(|_| BindError::NotFound(DELETE_BUTTON_ID.to_string()))?;

        let matches: Vec<_> = document.select(&selector).collect();
        let element = match matches.as_slice() {
            [] => return Err(BindError::NotFound(DELETE_BUTTON_ID.to_string())),
            [one] => one,
            many => {
                return Err(BindError::Duplicate {
                    id: DELETE_BUTTON_ID.to_string(),
                    count: many.len(),
                });
            }
        };

        let mut target = ClickTarget::new();
        for (name, value) in element.value().attrs() {
            if let Some(key) = name.strip_prefix("data-") {
                target = target.with_data(key, value);
            }
        }
        Ok(Self { target })
    }

    #[must_use]
    pub fn click(&self) -> ClickEvent {
        ClickEvent::on(self.target.clone())
    }
}

/// Side effects a handler can have on the page.
pub trait Page: Send + Sync {
    /// Stop the browser's own action for the click (link follow, form submit).
    fn prevent_default(&self);

    /// Full-page navigation.
    fn navigate(&self, href: &str);

    /// Hook for showing a failed delete to the user.
    fn notify(&self, _err: &DeleteError) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    PreventDefault,
    Navigate(String),
    Notify(DeleteError),
}

/// A `Page` that only remembers what was asked of it.
#[derive(Debug, Default)]
pub struct RecordingPage {
    actions: Mutex<Vec<PageAction>>,
}

impl RecordingPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, action: PageAction) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    #[must_use]
    pub fn actions(&self) -> Vec<PageAction> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Last navigation target, if the page was ever sent anywhere.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.actions().into_iter().rev().find_map(|a| match a {
            PageAction::Navigate(href) => Some(href),
            _ => None,
        })
    }
}

impl Page for RecordingPage {
    fn prevent_default(&self) {
        self.push(PageAction::PreventDefault);
    }

    fn navigate(&self, href: &str) {
        self.push(PageAction::Navigate(href.to_string()));
    }

    fn notify(&self, err: &DeleteError) {
        self.push(PageAction::Notify(err.clone()));
    }
}
