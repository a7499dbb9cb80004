//! Issue search and performance chart view models
//!
//! Store-backed state for the issue search bar and the duration charts:
//! - `reactive_actors` - state containers, relays and subscription handles
//! - `stores` - tag, member list and team stores
//! - `issue_tags` - facet mapping derived from the three stores
//! - `charts` - value-axis bounds and panel layout

pub mod charts;
pub mod issue_tags;
pub mod reactive_actors;
pub mod stores;

pub use charts::{AxisLayout, ChartError, ChartOptions, compute_axis_max, plan_axes};
pub use issue_tags::{IssueTags, TagMapping, aggregate};
pub use stores::{MemberListStore, SnapshotSource, StoreError, TagStore, TeamStore};
