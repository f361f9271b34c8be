//! Given steps for suggestion review BDD scenarios.

use super::world::{SuggestionReviewWorld, run_async};
use eyre::WrapErr;
use niemeyer::account::ports::ProfileRepository;
use niemeyer::ticket::services::CreateTicketRequest;
use rstest_bdd_macros::given;

#[given("a registered manager and developer")]
fn registered_principals(world: &mut SuggestionReviewWorld) -> Result<(), eyre::Report> {
    run_async(world.profiles.store(&world.manager)).wrap_err("store manager profile")?;
    run_async(world.profiles.store(&world.developer)).wrap_err("store developer profile")?;
    Ok(())
}

#[given(r#"a ticket "{title}" assigned to the developer"#)]
fn ticket_assigned_to_developer(
    world: &mut SuggestionReviewWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_ticket(
        CreateTicketRequest::new(title, world.developer.id()),
        &world.manager,
    ))
    .wrap_err("create ticket in scenario setup")?;
    world.ticket = Some(created);
    Ok(())
}

#[given(r#"the developer has suggested "{content}""#)]
fn developer_has_suggested(
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
    .wrap_err("submit suggestion in scenario setup")?;
    world.suggestion_id = Some(comment.id());
    Ok(())
}

#[given("the developer has accepted the ticket")]
fn developer_has_accepted(world: &mut SuggestionReviewWorld) -> Result<(), eyre::Report> {
    let ticket = world
        .ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created ticket in scenario world"))?;
    let accepted = run_async(world.service.accept_ticket(ticket.id(), &world.developer))
        .wrap_err("accept ticket in scenario setup")?;
    world.ticket = Some(accepted);
    Ok(())
}
