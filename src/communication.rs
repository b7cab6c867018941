/// Sent to every subscriber of a store after it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub store_id: &'static str,
    pub kind: MutationKind,
}

impl Mutation {
    #[must_use]
    pub const fn new(store_id: &'static str, kind: MutationKind) -> Self {
        Self { store_id, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    // index is the position of the new alarm in the list
    AlarmCreated { index: usize, time: String },
}
