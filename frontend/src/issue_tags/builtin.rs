//! Built-in issue facets that exist regardless of the tag collection.

use shared::TagDescriptor;

pub const ME: &str = "me";
pub const ME_OR_NONE: &str = "[me, none]";

pub const IS: &str = "is";
pub const HAS: &str = "has";
pub const ASSIGNED: &str = "assigned";
pub const ASSIGNED_OR_SUGGESTED: &str = "assigned_or_suggested";
pub const BOOKMARKS: &str = "bookmarks";

pub const STATUS_VALUES: &[&str] = &[
    "resolved",
    "unresolved",
    "ignored",
    "assigned",
    "for_review",
    "unassigned",
    "linked",
    "unlinked",
];

const ATTRIBUTES: &[(&str, &str)] = &[
    ("age", "Age"),
    ("event.timestamp", "Event Timestamp"),
    ("firstSeen", "First Seen"),
    ("lastSeen", "Last Seen"),
    ("timesSeen", "Times Seen"),
];

/// Structured event fields offered as facets with backend-supplied values.
pub const ISSUE_FIELDS: &[&str] = &[
    "device.arch",
    "device.battery_level",
    "device.brand",
    "device.charging",
    "device.family",
    "device.locale",
    "device.model_id",
    "device.name",
    "device.online",
    "device.orientation",
    "device.simulator",
    "device.uuid",
    "dist",
    "environment",
    "error.handled",
    "error.mechanism",
    "error.type",
    "error.unhandled",
    "error.value",
    "event.type",
    "geo.city",
    "geo.country_code",
    "geo.region",
    "http.method",
    "http.referer",
    "http.url",
    "id",
    "location",
    "message",
    "os.build",
    "os.kernel_version",
    "platform.name",
    "release",
    "release.build",
    "release.package",
    "release.version",
    "sdk.name",
    "sdk.version",
    "stack.abs_path",
    "stack.filename",
    "stack.function",
    "stack.module",
    "stack.package",
    "stack.stack_level",
    "timestamp",
    "title",
    "trace",
    "transaction",
    "unreal.crash_type",
    "user.email",
    "user.id",
    "user.ip",
    "user.username",
];

/// Facets whose definition does not depend on any store.
pub fn static_tags() -> Vec<TagDescriptor> {
    let mut tags = Vec::with_capacity(ISSUE_FIELDS.len() + ATTRIBUTES.len() + 2);
    tags.extend(ISSUE_FIELDS.iter().map(|key| TagDescriptor::new(*key, *key)));
    tags.extend(ATTRIBUTES.iter().map(|(key, name)| TagDescriptor::new(*key, *name)));
    tags.push(TagDescriptor::predefined(
        IS,
        "Status",
        STATUS_VALUES.iter().map(|value| value.to_string()).collect(),
    ));
    tags.push(TagDescriptor::predefined(
        "firstRelease",
        "First Release",
        vec!["latest".to_string()],
    ));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn static_keys_are_unique() {
        let tags = static_tags();
        let keys: HashSet<_> = tags.iter().map(|tag| tag.key.as_str()).collect();
        assert_eq!(keys.len(), tags.len());
        assert!(tags.iter().all(|tag| tag.duplicate_value().is_none()));
    }

    #[test]
    fn fields_have_no_local_values() {
        let tags = static_tags();
        let filename = tags.iter().find(|tag| tag.key == "stack.filename").unwrap();
        assert!(!filename.predefined);
        assert!(filename.values.is_empty());

        let status = tags.iter().find(|tag| tag.key == IS).unwrap();
        assert!(status.predefined);
        assert_eq!(status.values.len(), STATUS_VALUES.len());
    }
}
