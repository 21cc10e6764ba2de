//! Named registry of data source factories

use super::{DataSource, NullSource, SimulatedConfig, SimulatedSource, SourceError, SourceResult};
use std::collections::HashMap;

/// Builds a fresh source instance
pub type SourceFactory = Box<dyn Fn() -> Box<dyn DataSource> + Send + Sync>;

/// Registry of available data sources, keyed by name
pub struct SourceRegistry {
    sources: HashMap<String, SourceFactory>,
}

impl SourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Registry holding the built-in `none` and `simulated` sources
    pub fn with_defaults(simulated: &SimulatedConfig) -> Self {
        let mut registry = Self::new();
        let config = simulated.clone();

        registry.sources.insert(
            "none".to_string(),
            Box::new(|| Box::new(NullSource) as Box<dyn DataSource>),
        );
        registry.sources.insert(
            "simulated".to_string(),
            Box::new(move || Box::new(SimulatedSource::new(config.clone())) as Box<dyn DataSource>),
        );
        registry
    }

    /// Register a factory under `name`
    ///
    /// Fails if the name is taken, unless `force` is set.
    pub fn register<F>(&mut self, name: &str, factory: F, force: bool) -> SourceResult<()>
    where
        F: Fn() -> Box<dyn DataSource> + Send + Sync + 'static,
    {
        if self.sources.contains_key(name) && !force {
            return Err(SourceError::AlreadyRegistered(name.to_string()));
        }
        tracing::debug!("Registered data source {:?}", name);
        self.sources.insert(name.to_string(), Box::new(factory));
        Ok(())
    }

    /// Instantiate the source registered under `name`
    pub fn create(&self, name: &str) -> SourceResult<Box<dyn DataSource>> {
        self.sources
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| SourceError::NotRegistered(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sources.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults(&SimulatedConfig::default())
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("sources", &self.names())
            .finish()
    }
}
