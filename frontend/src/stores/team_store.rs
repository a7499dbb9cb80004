use super::SnapshotSource;
use crate::reactive_actors::{Actor, Subscription};
use shared::TeamRecord;

/// All teams visible to the user, member or not.
#[derive(Clone, Debug, Default)]
pub struct TeamStore {
    teams: Actor<Vec<TeamRecord>>,
}

impl TeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_initial_data(&self, teams: Vec<TeamRecord>) {
        log::debug!("Team store loaded {} teams", teams.len());
        self.teams.set(teams);
    }

    /// Replaces the team with the same slug in place, or appends it.
    pub fn on_update_success(&self, team: TeamRecord) {
        self.teams.update_mut(|teams| {
            match teams.iter().position(|existing| existing.slug == team.slug) {
                Some(index) => teams[index] = team,
                None => teams.push(team),
            }
        });
    }

    /// Returns whether a team with this slug was present.
    pub fn on_remove_success(&self, slug: &str) -> bool {
        self.teams.update_mut_if(|teams| {
            let before = teams.len();
            teams.retain(|team| team.slug != slug);
            teams.len() != before
        })
    }

    pub fn get_all(&self) -> Vec<TeamRecord> {
        self.teams.snapshot()
    }
}

impl SnapshotSource for TeamStore {
    type Record = TeamRecord;

    fn snapshot(&self) -> Vec<TeamRecord> {
        self.get_all()
    }

    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.teams.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn team(slug: &str, is_member: bool) -> TeamRecord {
        TeamRecord {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            is_member,
        }
    }

    #[test]
    fn update_keeps_position_and_append_new() {
        let store = TeamStore::new();
        store.load_initial_data(vec![team("a", false), team("b", true)]);

        store.on_update_success(team("a", true));
        store.on_update_success(team("c", true));

        let teams = store.get_all();
        let slugs: Vec<_> = teams.iter().map(|team| team.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
        assert!(teams[0].is_member);
    }

    #[test]
    fn remove_reports_presence() {
        let store = TeamStore::new();
        store.load_initial_data(vec![team("a", true)]);

        assert!(store.on_remove_success("a"));
        assert!(!store.on_remove_success("a"));
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn removing_unknown_slug_does_not_notify() {
        let store = TeamStore::new();
        store.load_initial_data(vec![team("a", true)]);
        let calls = Arc::new(AtomicUsize::new(0));
        let _subscription = SnapshotSource::subscribe(&store, {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert!(!store.on_remove_success("missing"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(store.on_remove_success("a"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
