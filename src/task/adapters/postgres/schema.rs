//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records, one row per assignment.
    tasks (id) {
        /// Short task identifier in `DC-xxxxxx` form.
        #[max_length = 16]
        id -> Varchar,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Priority display string: High, Medium, or Low.
        #[max_length = 16]
        priority -> Varchar,
        /// Status display string: Pending, In Progress, Submitted, or
        /// Completed.
        #[max_length = 16]
        status -> Varchar,
        /// Calendar date the work is due.
        due_date -> Date,
        /// Calendar date the task was assigned.
        assigned_date -> Date,
        /// Point value awarded on completion.
        points -> Int4,
        /// Assignee username.
        #[max_length = 255]
        assigned_to -> Varchar,
        /// Whether a representative verified the submission.
        verified -> Bool,
        /// Submission link, set once work is handed in.
        submission_link -> Nullable<Text>,
        /// Submission notes, set alongside the link.
        submission_notes -> Nullable<Text>,
        /// Submission timestamp.
        submitted_at -> Nullable<Timestamptz>,
        /// Verification timestamp.
        verified_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
