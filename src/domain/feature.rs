//! Feature domain types: named, ordered bundles of snippet-resource paths.
//!
//! A registry is built once (builder or YAML) and read-only thereafter;
//! feature order is registration order and drives emission order.

use serde::{Deserialize, Serialize};

use crate::error::{Result, registry_invalid};

/// A named bundle of reusable source snippets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    /// Feature name, the unique lookup key (e.g., "EquatableArray")
    pub name: String,

    /// Ordered snippet-resource paths, relative and slash-separated
    /// (e.g., "Types/EquatableArray.cs")
    #[serde(rename = "snippets")]
    pub snippet_paths: Vec<String>,
}

impl Feature {
    /// Create a feature from a name and its snippet paths
    pub fn new(
        name: impl Into<String>,
        snippet_paths: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            snippet_paths: snippet_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate feature invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(registry_invalid("Feature name cannot be empty"));
        }
        for (i, path) in self.snippet_paths.iter().enumerate() {
            if path.is_empty() {
                return Err(registry_invalid(format!(
                    "Feature '{}' has an empty snippet path",
                    self.name
                )));
            }
            if self.snippet_paths[..i].contains(path) {
                return Err(registry_invalid(format!(
                    "Feature '{}' lists snippet path '{}' more than once",
                    self.name, path
                )));
            }
        }
        Ok(())
    }
}

/// Immutable table of registered features, in registration order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
}

impl FeatureRegistry {
    /// Create a registry from an ordered feature list
    ///
    /// # Errors
    ///
    /// Returns an error if any feature is invalid or a name repeats.
    pub fn new(features: Vec<Feature>) -> Result<Self> {
        let registry = Self { features };
        registry.validate()?;
        Ok(registry)
    }

    /// Start building a registry feature by feature
    pub fn builder() -> FeatureRegistryBuilder {
        FeatureRegistryBuilder::default()
    }

    /// Parse a registry from YAML (a `features:` list)
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the registry invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let registry: Self = serde_yaml::from_str(yaml)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Serialize the registry to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Look up a feature by name
    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name == name)
    }

    /// All registered feature names, in registration order
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.name.as_str())
    }

    /// Number of registered features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the registry has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (i, feature) in self.features.iter().enumerate() {
            feature.validate()?;
            if self.features[..i].iter().any(|f| f.name == feature.name) {
                return Err(registry_invalid(format!(
                    "Feature '{}' is registered more than once",
                    feature.name
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`FeatureRegistry`]
#[derive(Debug, Default)]
pub struct FeatureRegistryBuilder {
    features: Vec<Feature>,
}

impl FeatureRegistryBuilder {
    /// Add a feature with its ordered snippet paths
    #[must_use]
    pub fn feature(
        mut self,
        name: impl Into<String>,
        snippet_paths: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.features.push(Feature::new(name, snippet_paths));
        self
    }

    /// Validate and build the registry
    ///
    /// # Errors
    ///
    /// Returns an error if any feature is invalid or a name repeats.
    pub fn build(self) -> Result<FeatureRegistry> {
        FeatureRegistry::new(self.features)
    }
}
