//! Client profile used to personalize scripts.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Free-form description of the client a personalized video targets.
///
/// # Examples
///
/// ```
/// use explainer_core::ClientProfileBuilder;
///
/// let profile = ClientProfileBuilder::default()
///     .name("Acme Logistics")
///     .industry(Some("freight".to_string()))
///     .pain_points(vec!["manual routing".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(profile.name, "Acme Logistics");
/// assert!(profile.use_cases.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Client display name
    pub name: String,
    /// Industry the client operates in
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Known challenges
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pain_points: Vec<String>,
    /// Capabilities relevant to the client
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,
}

impl ClientProfile {
    /// Profile with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: None,
            pain_points: Vec::new(),
            use_cases: Vec::new(),
        }
    }
}
