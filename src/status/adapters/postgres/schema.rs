//! Diesel schema for status persistence.

diesel::table! {
    /// Named task states.
    statuses (id) {
        /// Store-assigned status identifier.
        id -> Int8,
        /// Unique lowercase status name.
        #[max_length = 36]
        name -> Varchar,
    }
}
