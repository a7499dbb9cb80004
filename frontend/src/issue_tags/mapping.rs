use super::builtin::{self, ASSIGNED, ASSIGNED_OR_SUGGESTED, BOOKMARKS, HAS, ME, ME_OR_NONE};
use indexmap::{IndexMap, IndexSet};
use shared::{TagDescriptor, TeamRecord, UserRecord};

/// Facets by tag key: custom tags in collection order, then built-ins.
pub type TagMapping = IndexMap<String, TagDescriptor>;

/// Derives the full facet mapping from one snapshot of each source.
///
/// Built-in facets replace custom tags that share their key. Member and team
/// values keep the order of the supplied snapshots.
pub fn aggregate(
    custom_tags: &[TagDescriptor],
    users: &[UserRecord],
    teams: &[TeamRecord],
) -> TagMapping {
    let mut tags: TagMapping = custom_tags
        .iter()
        .map(|tag| (tag.key.clone(), tag.clone()))
        .collect();

    let user_values: Vec<&str> = users
        .iter()
        .map(UserRecord::preferred_identifier)
        .filter(|identifier| !identifier.is_empty())
        .collect();
    let team_values: Vec<String> = teams
        .iter()
        .filter(|team| team.is_member)
        .map(|team| format!("#{}", team.slug))
        .collect();

    let assigned_values = unique_values(
        [ME, ME_OR_NONE]
            .into_iter()
            .chain(user_values.iter().copied())
            .chain(team_values.iter().map(String::as_str)),
    );
    let bookmark_values = unique_values([ME].into_iter().chain(user_values.iter().copied()));
    let has_values = unique_values(custom_tags.iter().map(|tag| tag.key.as_str()));

    let derived = [
        TagDescriptor::predefined(HAS, "Has Tag", has_values),
        TagDescriptor::predefined(ASSIGNED, "Assigned", assigned_values.clone()),
        TagDescriptor::predefined(ASSIGNED_OR_SUGGESTED, "Assigned or Suggested", assigned_values),
        TagDescriptor::predefined(BOOKMARKS, "Bookmarked By", bookmark_values),
    ];

    for tag in builtin::static_tags().into_iter().chain(derived) {
        tags.insert(tag.key.clone(), tag);
    }
    tags
}

// First occurrence wins.
fn unique_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, username: &str) -> UserRecord {
        UserRecord {
            id: username.to_string(),
            email: email.to_string(),
            username: username.to_string(),
        }
    }

    fn team(slug: &str, is_member: bool) -> TeamRecord {
        TeamRecord {
            slug: slug.to_string(),
            name: String::new(),
            is_member,
        }
    }

    fn values<'a>(tags: &'a TagMapping, key: &str) -> Vec<&'a str> {
        tags[key].values.iter().map(String::as_str).collect()
    }

    #[test]
    fn empty_sources_still_expose_builtins() {
        let tags = aggregate(&[], &[], &[]);

        let expected_keys = [
            builtin::IS,
            HAS,
            BOOKMARKS,
            ASSIGNED,
            ASSIGNED_OR_SUGGESTED,
            "stack.filename",
        ];
        for key in expected_keys {
            assert!(tags.contains_key(key), "missing {key}");
        }
        assert_eq!(values(&tags, ASSIGNED), vec!["me", "[me, none]"]);
        assert_eq!(values(&tags, ASSIGNED_OR_SUGGESTED), vec!["me", "[me, none]"]);
        assert_eq!(values(&tags, BOOKMARKS), vec!["me"]);
        assert!(tags[HAS].values.is_empty());
    }

    #[test]
    fn users_and_member_teams_extend_assignee_values() {
        let custom = [TagDescriptor::new("mechanism", "Mechanism")];
        let users = [user("foo@example.com", "foo"), user("", "joe@example.com")];
        let teams = [team("best-team-na", true), team("other-team", false)];

        let tags = aggregate(&custom, &users, &teams);

        let expected = vec![
            "me",
            "[me, none]",
            "foo@example.com",
            "joe@example.com",
            "#best-team-na",
        ];
        assert_eq!(values(&tags, ASSIGNED), expected);
        assert_eq!(values(&tags, ASSIGNED_OR_SUGGESTED), expected);
        assert_eq!(values(&tags, BOOKMARKS), vec!["me", "foo@example.com", "joe@example.com"]);
        assert_eq!(tags["mechanism"], custom[0]);
        assert_eq!(values(&tags, HAS), vec!["mechanism"]);
        assert!(tags[ASSIGNED].predefined && tags[BOOKMARKS].predefined);
    }

    #[test]
    fn supplied_order_is_kept() {
        let users = [user("b@example.com", "b"), user("a@example.com", "a")];
        let teams = [team("zeta", true), team("alpha", true)];

        let tags = aggregate(&[], &users, &teams);

        assert_eq!(
            values(&tags, ASSIGNED),
            vec!["me", "[me, none]", "b@example.com", "a@example.com", "#zeta", "#alpha"]
        );
    }

    #[test]
    fn builtin_replaces_colliding_custom_tag() {
        let mut custom = TagDescriptor::new(ASSIGNED, "Custom Assigned");
        custom.values = vec!["nobody".to_string()];
        let mut filename = TagDescriptor::new("stack.filename", "Filename");
        filename.values = vec!["main.rs".to_string()];

        let tags = aggregate(&[custom, filename], &[], &[]);

        assert_eq!(tags[ASSIGNED].name, "Assigned");
        assert_eq!(values(&tags, ASSIGNED), vec!["me", "[me, none]"]);
        assert_eq!(tags["stack.filename"].name, "stack.filename");
        assert!(tags["stack.filename"].values.is_empty());
        assert_eq!(tags.get_index_of(ASSIGNED), Some(0));
    }

    #[test]
    fn repeated_identifiers_are_listed_once() {
        let users = [user("foo@example.com", "foo"), user("foo@example.com", "foo2"), user("", "")];
        let tags = aggregate(&[], &users, &[]);
        assert_eq!(values(&tags, BOOKMARKS), vec!["me", "foo@example.com"]);
    }

    #[test]
    fn identical_inputs_give_equal_mappings() {
        let custom = [TagDescriptor::new("mechanism", "Mechanism")];
        let users = [user("foo@example.com", "foo")];
        let teams = [team("best-team-na", true)];

        assert_eq!(aggregate(&custom, &users, &teams), aggregate(&custom, &users, &teams));
    }
}
