pub mod client;
pub mod model;

pub use client::{HttpVenueClient, VenueApi};
pub use model::{DeleteOutcome, DeletionResponse, VenueId};
