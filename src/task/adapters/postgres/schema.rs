//! Diesel schema for task persistence.

diesel::table! {
    /// Task records; deleted rows are kept with `deleted = true`.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 64]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Referenced status.
        status_id -> Int8,
        /// Due date.
        date -> Timestamptz,
        /// Soft-deletion flag.
        deleted -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Soft-deletion timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}
