//! YAML deployment descriptor
//!
//! ```yaml
//! context_params:
//!   greeting: context-context
//! filters:
//!   - name: config-filter
//!     init_params:
//!       greeting: filter-filter
//! servlets:
//!   - name: app
//!     init_params:
//!       greeting: init-init
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::resolver::{ConfigError, ConfigResult};
use crate::sources::{MapPropertySource, SharedSource, SourceTier};

/// A named servlet or filter and its init parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub init_params: BTreeMap<String, String>,
}

impl ComponentDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            init_params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.init_params.insert(key.into(), value.into());
        self
    }
}

/// Application deployment descriptor
///
/// Component names are matched exactly. If a name is declared twice the
/// first declaration is used.
///
/// # Example
///
/// ```
/// use layerconf_core::descriptor::DeploymentDescriptor;
/// use layerconf_core::resolver::ConfigResolver;
///
/// let descriptor = DeploymentDescriptor::from_yaml_str(
///     "context_params:\n  greeting: context-context\nservlets:\n  - name: app\n",
/// ).unwrap();
///
/// let resolver = ConfigResolver::for_deployment(&descriptor, "app", None).unwrap();
/// assert_eq!(resolver.resolve("greeting").unwrap().value(), Some("context-context"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentDescriptor {
    /// Application-wide parameters
    #[serde(default)]
    pub context_params: BTreeMap<String, String>,

    #[serde(default)]
    pub filters: Vec<ComponentDescriptor>,

    #[serde(default)]
    pub servlets: Vec<ComponentDescriptor>,
}

impl DeploymentDescriptor {
    /// Read a descriptor from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parse a descriptor from YAML text
    ///
    /// An empty document yields an empty descriptor.
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the descriptor as YAML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    pub fn servlet(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.servlets.iter().find(|s| s.name == name)
    }

    pub fn filter(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.filters.iter().find(|f| f.name == name)
    }

    /// Source over the context parameters
    pub fn context_source(&self) -> MapPropertySource {
        MapPropertySource::with_properties(
            SourceTier::ServletContext.as_str(),
            SourceTier::ServletContext.priority(),
            self.context_params.clone(),
        )
    }

    /// Source over one servlet's init parameters
    pub fn servlet_source(&self, name: &str) -> ConfigResult<MapPropertySource> {
        let servlet = self
            .servlet(name)
            .ok_or_else(|| ConfigError::unknown_servlet(name))?;
        Ok(component_source(SourceTier::ServletInit, servlet))
    }

    /// Source over one filter's init parameters
    pub fn filter_source(&self, name: &str) -> ConfigResult<MapPropertySource> {
        let filter = self
            .filter(name)
            .ok_or_else(|| ConfigError::unknown_filter(name))?;
        Ok(component_source(SourceTier::Filter, filter))
    }

    /// Every source visible to a request served by `servlet`, optionally
    /// passing through `filter`, highest priority first
    pub fn sources_for(&self, servlet: &str, filter: Option<&str>) -> ConfigResult<Vec<SharedSource>> {
        let mut sources: Vec<SharedSource> = Vec::with_capacity(3);
        sources.push(Arc::new(self.servlet_source(servlet)?));
        if let Some(filter) = filter {
            sources.push(Arc::new(self.filter_source(filter)?));
        }
        sources.push(Arc::new(self.context_source()));
        Ok(sources)
    }
}

fn component_source(tier: SourceTier, component: &ComponentDescriptor) -> MapPropertySource {
    MapPropertySource::with_properties(
        format!("{}:{}", tier.as_str(), component.name),
        tier.priority(),
        component.init_params.clone(),
    )
}
