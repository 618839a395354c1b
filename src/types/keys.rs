use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a record stored in a [`Timeline`](crate::types::timeline::Timeline).
    pub struct RecordKey;
}
