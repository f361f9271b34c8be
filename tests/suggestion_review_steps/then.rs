//! Then steps for suggestion review BDD scenarios.

use super::world::{SuggestionReviewWorld, run_async};
use niemeyer::ticket::domain::TicketStatus;
use rstest_bdd_macros::then;

#[then(r#"the ticket status is "{status}""#)]
fn ticket_status_is(
    world: &SuggestionReviewWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status = TicketStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket"))?;
    let stored = run_async(world.service.find_ticket(ticket.id()))
        .map_err(|err| eyre::eyre!("ticket lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("ticket vanished from the store"))?;

    if stored.status() != expected_status {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected_status.as_str(),
            stored.status().as_str()
        ));
    }

    Ok(())
}

#[then("the pending suggestion count is {count:usize}")]
fn pending_suggestion_count_is(
    world: &SuggestionReviewWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket"))?;
    let pending = run_async(world.service.list_suggestions(ticket.id(), &world.manager))
        .map_err(|err| eyre::eyre!("suggestion listing failed: {err}"))?;

    if pending.len() != count {
        return Err(eyre::eyre!(
            "expected {count} pending suggestions, found {}",
            pending.len()
        ));
    }

    Ok(())
}
