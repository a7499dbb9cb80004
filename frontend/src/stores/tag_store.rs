use super::{SnapshotSource, StoreError};
use crate::reactive_actors::{Actor, Subscription};
use indexmap::IndexMap;
use shared::{RawTag, TagDescriptor};

/// Custom tag keys reported by the backend, keyed by tag key in load order.
#[derive(Clone, Debug, Default)]
pub struct TagStore {
    tags: Actor<IndexMap<String, TagDescriptor>>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a backend tag listing into the collection.
    pub fn load_tags(&self, raw_tags: Vec<RawTag>) -> Result<(), StoreError> {
        self.load_descriptors(raw_tags.into_iter().map(TagDescriptor::from).collect())
    }

    /// Merges descriptors by key. A malformed descriptor rejects the whole batch.
    pub fn load_descriptors(&self, descriptors: Vec<TagDescriptor>) -> Result<(), StoreError> {
        for descriptor in &descriptors {
            validate_tag(descriptor)
                .inspect_err(|error| log::warn!("Rejected tag batch: {error}"))?;
        }

        let loaded = descriptors.len();
        self.tags.update_mut(|tags| {
            for descriptor in descriptors {
                tags.insert(descriptor.key.clone(), descriptor);
            }
        });
        log::debug!("Tag store loaded {loaded} tags ({} total)", self.len());
        Ok(())
    }

    pub fn reset(&self) {
        self.tags.set(IndexMap::new());
        log::debug!("Tag store reset");
    }

    pub fn get_all_tags(&self) -> Vec<TagDescriptor> {
        self.tags.read(|tags| tags.values().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.tags.read(|tags| tags.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotSource for TagStore {
    type Record = TagDescriptor;

    fn snapshot(&self) -> Vec<TagDescriptor> {
        self.get_all_tags()
    }

    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.tags.subscribe(listener)
    }
}

fn validate_tag(descriptor: &TagDescriptor) -> Result<(), StoreError> {
    if descriptor.key.trim().is_empty() {
        return Err(StoreError::MalformedTag {
            key: descriptor.key.clone(),
            reason: "empty key".to_string(),
        });
    }
    if let Some(value) = descriptor.duplicate_value() {
        return Err(StoreError::MalformedTag {
            key: descriptor.key.clone(),
            reason: format!("duplicate value '{value}'"),
        });
    }
    Ok(())
}
