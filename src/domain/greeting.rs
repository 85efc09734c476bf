pub const WELCOME_MESSAGE: &str = "Welcome to the Go Backend API!";
pub const DEFAULT_NAME: &str = "World";

/// Picks the name to greet from the raw query pairs.
///
/// Only the first `name` pair counts, matching how repeated query keys are
/// read elsewhere. An empty value falls back to [`DEFAULT_NAME`].
pub fn resolve_name(query: &[(String, String)]) -> &str {
    query
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_NAME)
}

pub fn greeting_message(name: &str) -> String {
    format!("Hello, {name}!")
}
