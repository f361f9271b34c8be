//! Diesel schema for ticket and comment persistence.

diesel::table! {
    /// Ticket records raised by managers.
    tickets (id) {
        /// Ticket identifier.
        id -> Uuid,
        /// Ticket title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form ticket description.
        description -> Text,
        /// Lifecycle status string.
        #[max_length = 50]
        status -> Varchar,
        /// Optional due date.
        deadline -> Nullable<Date>,
        /// Raising manager's profile identifier.
        raised_by -> Uuid,
        /// Assigned developer's profile identifier.
        assigned_to -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last lifecycle timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Suggestion comments attached to tickets.
    comments (id) {
        /// Comment identifier.
        id -> Uuid,
        /// Owning ticket identifier.
        ticket_id -> Uuid,
        /// Suggesting developer's profile identifier.
        author_id -> Uuid,
        /// Suggestion text.
        content -> Text,
        /// Review outcome string.
        #[max_length = 50]
        resolution -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
