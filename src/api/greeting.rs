pub const GREETING: &str = "Hello! Go CI/CD App Running 🚀\n";

/// Url: /
/// Method: any
pub async fn get_greeting() -> &'static str {
    GREETING
}
