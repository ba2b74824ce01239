//! Diesel schema for doubt lifecycle persistence.

diesel::table! {
    /// Doubt records, one row per raised question.
    doubts (id) {
        /// Short doubt identifier in `DQ-xxxxxx` form.
        #[max_length = 16]
        id -> Varchar,
        /// Username of the raising member.
        #[max_length = 255]
        member -> Varchar,
        /// Doubt title.
        title -> Text,
        /// Doubt details.
        details -> Text,
        /// Whether the doubt has been resolved.
        resolved -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Resolution timestamp.
        resolved_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Reply thread entries, keyed by doubt.
    replies (id) {
        /// Surrogate row identifier.
        id -> Int4,
        /// Identifier of the doubt this reply belongs to.
        #[max_length = 16]
        doubt_id -> Varchar,
        /// Replying representative username.
        #[max_length = 255]
        rep -> Varchar,
        /// Reply text.
        message -> Text,
        /// Reply timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(replies -> doubts (doubt_id));
diesel::allow_tables_to_appear_in_same_query!(doubts, replies);
