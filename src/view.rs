use maud::{Markup, html};

use crate::page::DELETE_BUTTON_ID;
use crate::venue::VenueId;

/// Markup for the delete control a venue page carries.
#[must_use]
pub fn render_delete_button(venue_id: &VenueId) -> Markup {
    html! {
        button id=(DELETE_BUTTON_ID) class="btn btn-danger btn-lg" type="button" data-id=(venue_id.as_str()) {
            "Delete venue"
        }
    }
}
