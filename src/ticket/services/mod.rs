//! Application services for the ticket workflow.

mod authorization;
mod workflow;

pub use authorization::AccessError;
pub use workflow::{
    CreateTicketRequest, EditTicketRequest, SuggestionEdit, SuggestionView, TicketWorkflowError,
    TicketWorkflowResult, TicketWorkflowService,
};
