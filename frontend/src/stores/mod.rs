//! Collaborator stores feeding the issue search view model.
//!
//! Each store owns one collection behind an [`Actor`](crate::reactive_actors::Actor)
//! and exposes a snapshot read plus a change subscription.

mod member_list_store;
mod tag_store;
mod team_store;

pub use member_list_store::MemberListStore;
pub use tag_store::TagStore;
pub use team_store::TeamStore;

use crate::reactive_actors::Subscription;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("malformed tag '{key}': {reason}")]
    MalformedTag { key: String, reason: String },
}

/// Read side of a store: point-in-time snapshots plus change notification.
pub trait SnapshotSource {
    type Record;

    fn snapshot(&self) -> Vec<Self::Record>;

    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static;
}
