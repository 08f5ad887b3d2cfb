//! Diesel schema for task persistence.
//!
//! The `tasks` table also carries a functional unique index,
//! `idx_tasks_title_normalized_unique` over `LOWER(TRIM(title))`, which
//! backs the title-uniqueness rule inside the window between the use
//! case's pre-check and the write.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title, stored exactly as supplied.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Status label.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
