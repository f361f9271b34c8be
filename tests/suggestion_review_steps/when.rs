//! When steps for suggestion review BDD scenarios.

use super::world::{SuggestionReviewWorld, run_async};
use eyre::WrapErr;
use niemeyer::ticket::services::EditTicketRequest;
use rstest_bdd_macros::when;

#[when(r#"the developer suggests "{content}""#)]
fn developer_suggests(
    world: &mut SuggestionReviewWorld,
    content: String,
) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket in scenario world"))?;
    let comment = run_async(
        world
            .service
            .submit_suggestion(ticket.id(), &world.developer, content),
    )
    .wrap_err("submit suggestion")?;
    world.suggestion_id = Some(comment.id());
    Ok(())
}

#[when("the developer accepts the ticket")]
fn developer_accepts(world: &mut SuggestionReviewWorld) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket in scenario world"))?;
    let accepted = run_async(world.service.accept_ticket(ticket.id(), &world.developer))
        .wrap_err("accept ticket")?;
    world.ticket = Some(accepted);
    Ok(())
}

#[when("the developer finishes the ticket")]
fn developer_finishes(world: &mut SuggestionReviewWorld) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket in scenario world"))?;
    let finished = run_async(world.service.finish_ticket(ticket.id(), &world.developer))
        .wrap_err("finish ticket")?;
    world.ticket = Some(finished);
    Ok(())
}

#[when("the manager denies the suggestion")]
fn manager_denies(world: &mut SuggestionReviewWorld) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket in scenario world"))?;
    let suggestion_id = world
        .suggestion_id
        .ok_or_else(|| eyre::eyre!("missing suggestion in scenario world"))?;
    let reopened = run_async(
        world
            .service
            .deny_suggestion(ticket.id(), suggestion_id, &world.manager),
    )
    .wrap_err("deny suggestion")?;
    world.ticket = Some(reopened);
    Ok(())
}

#[when("the manager accepts the suggestion")]
fn manager_accepts(world: &mut SuggestionReviewWorld) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket in scenario world"))?;
    let suggestion_id = world
        .suggestion_id
        .ok_or_else(|| eyre::eyre!("missing suggestion in scenario world"))?;
    let edit = run_async(
        world
            .service
            .accept_suggestion(ticket.id(), suggestion_id, &world.manager),
    )
    .wrap_err("accept suggestion")?;
    world.edit = Some(edit);
    Ok(())
}

#[when(r#"the manager saves an edit titled "{title}""#)]
fn manager_saves_edit(
    world: &mut SuggestionReviewWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket in scenario world"))?;
    let mut request = EditTicketRequest::new(title).with_assignee(world.developer.id());
    if let Some(edit) = world.edit.as_ref() {
        request = request.with_description(edit.content.as_str());
    }
    let edited = run_async(
        world
            .service
            .edit_ticket(ticket.id(), request, &world.manager),
    )
    .wrap_err("save manager edit")?;
    world.ticket = Some(edited);
    Ok(())
}
