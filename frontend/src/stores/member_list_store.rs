use super::SnapshotSource;
use crate::reactive_actors::{Actor, Subscription};
use shared::UserRecord;

/// Organization members, in the order the backend listed them.
#[derive(Clone, Debug, Default)]
pub struct MemberListStore {
    members: Actor<Vec<UserRecord>>,
}

impl MemberListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_initial_data(&self, members: Vec<UserRecord>) {
        log::debug!("Member list loaded {} users", members.len());
        self.members.set(members);
    }

    pub fn get_all(&self) -> Vec<UserRecord> {
        self.members.snapshot()
    }
}

impl SnapshotSource for MemberListStore {
    type Record = UserRecord;

    fn snapshot(&self) -> Vec<UserRecord> {
        self.get_all()
    }

    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.members.subscribe(listener)
    }
}
