//! Wires the `#delete_venue` control on a page to the venue api.

use crate::error::{BindError, DeleteError};
use crate::mvu::delete::Deps;
use crate::mvu::runtime::run_delete;
use crate::page::{ClickEvent, DeleteButton, Page};
use crate::venue::{DeleteOutcome, VenueApi};

pub struct DeleteHandler<'a> {
    deps: Deps<'a>,
}

impl<'a> DeleteHandler<'a> {
    #[must_use]
    pub fn new(api: &'a dyn VenueApi, page: &'a dyn Page) -> Self {
        Self {
            deps: Deps { api, page },
        }
    }

    /// Find the delete control in `html` and attach a handler to it.
    ///
    /// # Errors
    ///
    /// Fails unless exactly one element carries the `delete_venue` id.
    pub fn bind(
        html: &str,
        api: &'a dyn VenueApi,
        page: &'a dyn Page,
    ) -> Result<(DeleteButton, Self), BindError> {
        let button = DeleteButton::bind(html)?;
        Ok((button, Self::new(api, page)))
    }

    /// Handle one click. Calls are not serialized against each other.
    ///
    /// # Errors
    ///
    /// See [`run_delete`].
    pub async fn on_click(&self, event: ClickEvent) -> Result<DeleteOutcome, DeleteError> {
        run_delete(event, self.deps).await
    }
}
