//! Diesel schema for profile persistence.

diesel::table! {
    /// Stored user profiles.
    profiles (id) {
        /// Profile identifier shared with the auth provider.
        id -> Uuid,
        /// Display name shown in listings and suggestion reviews.
        #[max_length = 255]
        name -> Varchar,
        /// Role string, `manager` or `developer`.
        #[max_length = 50]
        role -> Varchar,
    }
}
