use anyhow::Context as _;

/// Add context to snapshot read/write errors
pub fn snapshot_context(operation: &str, path: &str) -> String {
    format!("Failed to {} snapshot at: {}", operation, path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to lookups of records that must exist
pub fn lookup_context(kind: &str, id: &str) -> String {
    format!("No {} with id: {}", kind, id)
}

/// Wrap result with snapshot context
pub fn with_snapshot_context<T, E>(result: Result<T, E>, operation: &str, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| snapshot_context(operation, path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type))
}

/// Turn a missing record into an error naming what was looked up
pub fn require<T>(value: Option<T>, kind: &str, id: &str) -> anyhow::Result<T> {
    value.with_context(|| lookup_context(kind, id))
}
