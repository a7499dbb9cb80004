use super::mapping::{TagMapping, aggregate};
use crate::reactive_actors::{Actor, Subscription};
use crate::stores::SnapshotSource;
use futures::channel::mpsc::UnboundedReceiver;
use futures_signals::signal::MutableSignalCloned;
use shared::{TagDescriptor, TeamRecord, UserRecord};
use std::sync::Arc;

/// Issue search facets kept in sync with a tag, member and team source.
///
/// Any notification from any source recomputes the whole mapping from fresh
/// snapshots of all three and republishes it as a new `Arc`. Sources may
/// change in any interleaving; each recomputation sees whatever state the
/// sources hold at that moment. Dropping the binding releases its
/// subscriptions.
///
/// ```rust
/// use frontend::issue_tags::IssueTags;
/// use frontend::stores::{MemberListStore, TagStore, TeamStore};
///
/// let tag_store = TagStore::new();
/// let member_list = MemberListStore::new();
/// let team_store = TeamStore::new();
///
/// let issue_tags = IssueTags::new(tag_store.clone(), member_list.clone(), team_store.clone());
/// assert_eq!(issue_tags.tags()["assigned"].values, vec!["me", "[me, none]"]);
/// ```
pub struct IssueTags {
    tags: Actor<Arc<TagMapping>>,
    _source_subscriptions: [Subscription; 3],
}

impl IssueTags {
    pub fn new<T, U, M>(tag_source: T, user_source: U, team_source: M) -> Self
    where
        T: SnapshotSource<Record = TagDescriptor> + Send + Sync + 'static,
        U: SnapshotSource<Record = UserRecord> + Send + Sync + 'static,
        M: SnapshotSource<Record = TeamRecord> + Send + Sync + 'static,
    {
        let sources = Arc::new((tag_source, user_source, team_source));
        let recompute = {
            let sources = Arc::clone(&sources);
            move || {
                let (tag_source, user_source, team_source) = &*sources;
                aggregate(
                    &tag_source.snapshot(),
                    &user_source.snapshot(),
                    &team_source.snapshot(),
                )
            }
        };

        let tags = Actor::new(Arc::new(recompute()));
        let republish = {
            let tags = tags.clone();
            move || {
                let mapping = recompute();
                log::debug!("Recomputed issue tags ({} keys)", mapping.len());
                tags.set(Arc::new(mapping));
            }
        };
        let republish = Arc::new(republish);

        let (tag_source, user_source, team_source) = &*sources;
        let _source_subscriptions = [
            tag_source.subscribe({
                let republish = Arc::clone(&republish);
                move || republish()
            }),
            user_source.subscribe({
                let republish = Arc::clone(&republish);
                move || republish()
            }),
            team_source.subscribe(move || republish()),
        ];

        IssueTags {
            tags,
            _source_subscriptions,
        }
    }

    /// Current mapping. Consumers replace their reference on change rather
    /// than patching it.
    pub fn tags(&self) -> Arc<TagMapping> {
        self.tags.snapshot()
    }

    /// Registers a listener called after every republish.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.tags.subscribe(listener)
    }

    /// Yields once per republish; ends when the binding is dropped.
    pub fn changes(&self) -> UnboundedReceiver<()> {
        self.tags.changes()
    }

    pub fn signal(&self) -> MutableSignalCloned<Arc<TagMapping>> {
        self.tags.signal()
    }
}

impl std::fmt::Debug for IssueTags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueTags")
            .field("keys", &self.tags.read(|tags| tags.len()))
            .finish()
    }
}
