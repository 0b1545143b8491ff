use crate::Factory;
use crate::types::DeviationClass;
use crate::types::config::is_mutant_enabled;

/// A named implementation the harness can run the suite against
#[derive(Clone)]
pub struct RegisteredImplementation {
    pub name: String,
    pub description: String,
    pub class: DeviationClass,
    pub factory: Factory,
}

/// Registry for managing the implementations expected to fail the suite
pub struct ImplementationRegistry {
    entries: Vec<RegisteredImplementation>,
}

impl ImplementationRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an implementation under a unique name, replacing any previous
    /// entry with the same name
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        class: DeviationClass,
        factory: Factory,
    ) {
        let entry = RegisteredImplementation {
            name: name.to_string(),
            description: description.to_string(),
            class,
            factory,
        };
        match self
            .entries
            .iter_mut()
            .find(|e| e.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Get an implementation by name
    pub fn get(&self, name: &str) -> Option<&RegisteredImplementation> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Get all registered names, in registration order
    pub fn all_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredImplementation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the named entries, failing on names nobody registered
    pub fn retain_names(&mut self, names: &[String]) -> Result<(), String> {
        if let Some(unknown) = names.iter().find(|name| self.get(name).is_none()) {
            return Err(unknown.clone());
        }
        self.entries
            .retain(|entry| is_mutant_enabled(&entry.name, Some(names)));
        Ok(())
    }
}

impl Default for ImplementationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
