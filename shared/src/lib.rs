use serde::{Deserialize, Serialize};

// ===== CHART DATA TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub series_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    #[serde(default)]
    pub data: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn new(series_name: impl Into<String>, data: Vec<SeriesPoint>) -> Self {
        Self {
            series_name: series_name.into(),
            aggregation: None,
            data,
        }
    }

    pub fn with_aggregation(mut self, aggregation: impl Into<String>) -> Self {
        self.aggregation = Some(aggregation.into());
        self
    }

    /// Field used for labels and type detection: the aggregation when known,
    /// otherwise the series name.
    pub fn field(&self) -> &str {
        self.aggregation.as_deref().unwrap_or(&self.series_name)
    }

    pub fn output_type(&self) -> OutputType {
        aggregate_output_type(self.field())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Duration,
    Integer,
    Number,
    Percentage,
    Date,
    String,
}

// ===== TAG / IDENTITY TYPES =====

/// One filterable facet exposed to the search bar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagDescriptor {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub predefined: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_values: Option<u64>,
}

impl TagDescriptor {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            values: Vec::new(),
            predefined: false,
            total_values: None,
        }
    }

    /// Facet whose values are computed locally rather than by a backend query.
    pub fn predefined(
        key: impl Into<String>,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            values,
            predefined: true,
            ..Self::new(key, name)
        }
    }

    /// First value that appears more than once, if any.
    pub fn duplicate_value(&self) -> Option<&str> {
        self.values
            .iter()
            .enumerate()
            .find(|(index, value)| self.values[..*index].contains(value))
            .map(|(_, value)| value.as_str())
    }
}

/// Tag as reported by the backend tag-key listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub count: Option<u64>,
}

impl From<RawTag> for TagDescriptor {
    fn from(raw: RawTag) -> Self {
        Self {
            total_values: raw.count,
            ..TagDescriptor::new(raw.key, raw.name)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}

impl UserRecord {
    /// Email when present, username otherwise.
    pub fn preferred_identifier(&self) -> &str {
        if self.email.is_empty() {
            &self.username
        } else {
            &self.email
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_member: bool,
}

// ===== CONFIG TYPES =====

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unsupported config version '{0}'")]
    UnsupportedVersion(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub charts: ChartsSection,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        match config.app.get_migration_strategy() {
            MigrationStrategy::None => Ok(config),
            MigrationStrategy::Recreate => {
                Err(ConfigError::UnsupportedVersion(config.app.version))
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// AppSection carries the config format version so older files can be migrated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    /// Current configuration format version
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn get_migration_strategy(&self) -> MigrationStrategy {
        match self.version.as_str() {
            "1.0.0" => MigrationStrategy::None,
            _ => MigrationStrategy::Recreate,
        }
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MigrationStrategy {
    None,
    Recreate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChartsSection {
    /// Render a single value axis instead of two side-by-side panels.
    pub disable_multi_axis: bool,
    /// Tick count hint for the single-axis layout.
    pub defined_axis_ticks: Option<u32>,
}

// ===== FIELD CLASSIFICATION =====

/// Classifies a discover field or aggregate such as `p95()` or
/// `avg(transaction.duration)` by the kind of value it produces.
pub fn aggregate_output_type(field: &str) -> OutputType {
    let field = field.trim();
    let Some((function, arguments)) = parse_function(field) else {
        return field_output_type(field);
    };

    match function {
        "count" | "count_unique" | "count_miserable" | "count_if" => OutputType::Integer,
        "failure_rate" => OutputType::Percentage,
        "p50" | "p75" | "p95" | "p99" | "p100" => OutputType::Duration,
        "avg" | "min" | "max" | "sum" | "percentile" => arguments
            .first()
            .map(|argument| field_output_type(argument))
            .unwrap_or(OutputType::Number),
        "last_seen" => OutputType::Date,
        _ => OutputType::Number,
    }
}

fn parse_function(field: &str) -> Option<(&str, Vec<&str>)> {
    let open = field.find('(')?;
    let inner = field.strip_suffix(')')?.get(open + 1..)?;
    let arguments = inner
        .split(',')
        .map(str::trim)
        .filter(|argument| !argument.is_empty())
        .collect();
    Some((&field[..open], arguments))
}

fn field_output_type(field: &str) -> OutputType {
    match field {
        "transaction.duration" => OutputType::Duration,
        "timestamp" | "event.timestamp" | "last_seen" | "first_seen" => OutputType::Date,
        "measurements.cls" => OutputType::Number,
        _ if field.starts_with("measurements.") || field.starts_with("spans.") => {
            OutputType::Duration
        }
        _ => OutputType::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_shorthands_are_durations() {
        assert_eq!(aggregate_output_type("p95()"), OutputType::Duration);
        assert_eq!(aggregate_output_type("p50()"), OutputType::Duration);
    }

    #[test]
    fn aggregate_inherits_argument_type() {
        assert_eq!(aggregate_output_type("avg(transaction.duration)"), OutputType::Duration);
        assert_eq!(
            aggregate_output_type("percentile(measurements.lcp, 0.75)"),
            OutputType::Duration
        );
        assert_eq!(aggregate_output_type("max(measurements.cls)"), OutputType::Number);
        assert_eq!(aggregate_output_type("min(timestamp)"), OutputType::Date);
    }

    #[test]
    fn counters_and_rates() {
        assert_eq!(aggregate_output_type("count()"), OutputType::Integer);
        assert_eq!(aggregate_output_type("count_unique(user)"), OutputType::Integer);
        assert_eq!(aggregate_output_type("failure_rate()"), OutputType::Percentage);
        assert_eq!(aggregate_output_type("epm()"), OutputType::Number);
    }

    #[test]
    fn plain_fields() {
        assert_eq!(aggregate_output_type("transaction.duration"), OutputType::Duration);
        assert_eq!(aggregate_output_type("transaction"), OutputType::String);
    }

    #[test]
    fn series_prefers_aggregation_over_name() {
        let series = TimeSeries::new("Duration", vec![]).with_aggregation("p75()");
        assert_eq!(series.field(), "p75()");
        assert_eq!(series.output_type(), OutputType::Duration);
        assert_eq!(TimeSeries::new("count()", vec![]).output_type(), OutputType::Integer);
    }

    #[test]
    fn preferred_identifier_falls_back_to_username() {
        let with_email = UserRecord {
            id: "1".to_string(),
            email: "foo@example.com".to_string(),
            username: "foo".to_string(),
        };
        let without_email = UserRecord {
            id: "2".to_string(),
            email: String::new(),
            username: "joe".to_string(),
        };
        assert_eq!(with_email.preferred_identifier(), "foo@example.com");
        assert_eq!(without_email.preferred_identifier(), "joe");
    }

    #[test]
    fn duplicate_value_detection() {
        let mut tag = TagDescriptor::predefined("is", "Status", vec!["a".into(), "b".into()]);
        assert_eq!(tag.duplicate_value(), None);
        tag.values.push("a".into());
        assert_eq!(tag.duplicate_value(), Some("a"));
    }

    #[test]
    fn team_record_uses_camel_case() {
        let team: TeamRecord =
            serde_json::from_str(r#"{"slug":"best-team-na","name":"Best Team NA","isMember":true}"#)
                .unwrap();
        assert!(team.is_member);
        assert_eq!(team.slug, "best-team-na");
    }

    #[test]
    fn raw_tag_count_becomes_total_values() {
        let raw: RawTag =
            serde_json::from_str(r#"{"key":"mechanism","name":"Mechanism","count":1}"#).unwrap();
        let tag = TagDescriptor::from(raw);
        assert_eq!(tag.key, "mechanism");
        assert_eq!(tag.total_values, Some(1));
        assert!(!tag.predefined);
        assert!(tag.values.is_empty());
    }

    #[test]
    fn config_defaults_fill_missing_sections() {
        let config = AppConfig::from_toml_str("[charts]\ndisable_multi_axis = true\n").unwrap();
        assert_eq!(config.app.version, AppSection::CURRENT_VERSION);
        assert!(config.charts.disable_multi_axis);
        assert_eq!(config.charts.defined_axis_ticks, None);
    }

    #[test]
    fn config_survives_toml_write() {
        let mut config = AppConfig::default();
        config.charts.defined_axis_ticks = Some(4);
        let text = config.to_toml_string().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn current_config_version_needs_no_migration() {
        let config = AppConfig::from_toml_str("[app]\nversion = \"1.0.0\"\n").unwrap();
        assert_eq!(config.app.get_migration_strategy(), MigrationStrategy::None);
    }

    #[test]
    fn unknown_config_version_is_rejected() {
        let error = AppConfig::from_toml_str("[app]\nversion = \"0.1.0\"\n").unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedVersion(version) if version == "0.1.0"));
        assert_eq!(
            AppSection { version: "0.1.0".into() }.get_migration_strategy(),
            MigrationStrategy::Recreate
        );
    }
}
