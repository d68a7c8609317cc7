//! Application name configuration for storage paths

/// Application identifier used to locate stores and name the default one
///
/// Stores live under the platform configuration directory, following the
/// [XDG Base Directory Specification](https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html)
/// on Linux and similar conventions on other platforms.
///
/// # Example
///
/// ```
/// use preferred_json_store::AppName;
///
/// let app_name = AppName::new("com", "example", "myapp");
/// assert_eq!(app_name.package_name(), "com.example.myapp");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName {
    pub qualifier: String,
    pub organization: String,
    pub application: String,
}

impl AppName {
    /// Create a new application name
    ///
    /// # Arguments
    ///
    /// * `qualifier` - Typically a reverse domain name (e.g., "com", "org")
    /// * `organization` - Your organization or username (e.g., "mycompany")
    /// * `application` - The application name (e.g., "myapp")
    pub fn new(
        qualifier: impl Into<String>,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            qualifier: qualifier.into(),
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Reverse-domain package identifier, skipping empty parts
    pub fn package_name(&self) -> String {
        [
            self.qualifier.as_str(),
            self.organization.as_str(),
            self.application.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
    }
}
