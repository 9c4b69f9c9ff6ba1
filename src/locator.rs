//! Minimal service locator: a registry mapping service names to factory
//! closures. Shown here as a contrast to the constructor injection used by
//! [`crate::converter::CurrencyConverter`]; it has no scoping, lifecycle or
//! dependency-graph resolution.

use anyhow::{Result, anyhow};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Factory = Box<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

static GLOBAL: LazyLock<Locator> = LazyLock::new(Locator::new);

#[derive(Default)]
pub struct Locator {
    factories: RwLock<HashMap<String, Factory>>,
}

impl Locator {
    pub fn new() -> Self {
        Locator::default()
    }

    /// The process-wide registry used by the binary's locator wiring.
    /// Tests should prefer a private `Locator::new()` so registrations in
    /// one test cannot leak into another.
    pub fn global() -> &'static Locator {
        &GLOBAL
    }

    /// Registers a factory under `name`, replacing any previous one.
    pub fn register<F>(&self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Any + Send + Sync> + Send + Sync + 'static,
    {
        self.write().insert(name.to_string(), Box::new(factory));
    }

    /// Removes the factory registered under `name`. No-op when absent.
    pub fn unregister(&self, name: &str) {
        self.write().remove(name);
    }

    /// Invokes the factory registered under `name` and downcasts the result.
    pub fn resolve<T: 'static>(&self, name: &str) -> Result<T> {
        let factories = self.read();
        let factory = factories
            .get(name)
            .ok_or_else(|| anyhow!("No factory registered for service '{name}'"))?;

        factory()
            .downcast::<T>()
            .map(|instance| *instance)
            .map_err(|_| anyhow!("Service '{name}' resolved to an unexpected type"))
    }

    // A poisoned lock still holds a usable map; recover the guard rather
    // than propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Factory>> {
        self.factories.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Factory>> {
        self.factories.write().unwrap_or_else(|e| e.into_inner())
    }
}
