use clap::Parser;
use std::fs;
use std::path::Path;

use crate::page::{ClickEvent, ClickTarget, DeleteButton};

pub mod types;
pub mod validation;

pub use types::{Args, Command};

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

/// One click per id, or the single click the saved page's button produces.
///
/// # Errors
///
/// Will return `Err` if the page cannot be read or holds no unique delete button.
pub fn resolve_clicks(
    ids: &[String],
    page: Option<&Path>,
) -> Result<Vec<ClickEvent>, Box<dyn std::error::Error>> {
    if let Some(path) = page {
        let html = fs::read_to_string(path)?;
        let button = DeleteButton::bind(&html)?;
        return Ok(vec![button.click()]);
    }
    Ok(ids
        .iter()
        .map(|id| ClickEvent::on(ClickTarget::new().with_data("id", id)))
        .collect())
}
