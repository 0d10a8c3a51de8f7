use log::debug;
use serde_json::json;
use std::collections::VecDeque;

use crate::error::DeleteError;
use crate::mvu::delete::{DeleteModel, Deps, Msg, run_effect, update};
use crate::page::ClickEvent;
use crate::venue::DeleteOutcome;

/// Runs one click through the delete loop: seeds with `Msg::Clicked` and
/// drains effects first-in first-out until the model settles.
///
/// Each call is independent; concurrent clicks share nothing.
///
/// # Errors
///
/// Returns the transport, decode or missing-id failure that ended the run.
/// A server answer without `success: true` is `Ok(DeleteOutcome::NotDeleted)`.
pub async fn run_delete(event: ClickEvent, deps: Deps<'_>) -> Result<DeleteOutcome, DeleteError> {
    let mut model = DeleteModel::new();
    let mut effects: VecDeque<_> = update(&mut model, Msg::Clicked(event)).into();
    while let Some(effect) = effects.pop_front() {
        debug!(
            "{}",
            json!({"mvu": "effect_start", "effect": format!("{effect:?}")})
        );
        let msg = run_effect(effect, deps).await;
        debug!("{}", json!({"mvu": "effect_done", "msg": format!("{msg:?}")}));
        effects.extend(update(&mut model, msg));
    }

    model.into_result()
}
