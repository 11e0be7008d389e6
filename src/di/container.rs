use crate::error::{CatalogError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Casts a registered `Arc<Impl>` (erased as `Arc<dyn Any>`) into an `Arc<dyn Trait>`,
/// itself wrapped in an `Arc<dyn Any>`. Returns `None` when the erased value is not `Impl`.
type CasterFn =
    Arc<dyn Fn(Arc<dyn Any + Send + Sync>) -> Option<Arc<dyn Any + Send + Sync>> + Send + Sync>;

/// Thread-safe dependency injection container.
///
/// Holds one shared instance per concrete type, plus trait bindings so that
/// `Arc<dyn ProductRepository>` can be resolved to whichever store was
/// registered at startup.
pub struct Container {
    services: DashMap<TypeId, ServiceEntry>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Clone for Container {
    fn clone(&self) -> Self {
        Self {
            services: self.services.clone(),
            trait_mappings: self.trait_mappings.clone(),
            casters: self.casters.clone(),
        }
    }
}

#[derive(Clone)]
struct ServiceEntry {
    instance: Arc<dyn Any + Send + Sync>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
            trait_mappings: DashMap::new(),
            casters: DashMap::new(),
        }
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_arc(Arc::new(instance))
    }

    /// Register an instance that is already shared elsewhere
    ///
    /// Used for stores whose lifecycle hooks hold their own handle.
    pub fn register_arc<T: 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        let entry = ServiceEntry { instance };
        self.services.insert(TypeId::of::<T>(), entry);
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        let impl_id = TypeId::of::<Impl>();

        self.trait_mappings.insert(trait_id, impl_id);

        let caster: CasterFn = Arc::new(move |instance: Arc<dyn Any + Send + Sync>| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as Arc<dyn Any + Send + Sync>)
        });

        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested_type_id = TypeId::of::<T>();
        let entry = self.services.get(&requested_type_id).ok_or_else(|| {
            CatalogError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            }
        })?;
        entry
            .instance
            .clone()
            .downcast::<T>()
            .map_err(|_| CatalogError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested_type_id = TypeId::of::<T>();

        let caster = self.casters.get(&requested_type_id).ok_or_else(|| {
            CatalogError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            }
        })?;

        let impl_type_id = self.trait_mappings.get(&requested_type_id).ok_or_else(|| {
            CatalogError::DependencyNotFound {
                type_name: format!(
                    "No implementation mapping found for trait '{}'",
                    std::any::type_name::<T>()
                ),
            }
        })?;

        let entry = self
            .services
            .get(impl_type_id.value())
            .ok_or_else(|| CatalogError::DependencyNotFound {
                type_name: format!(
                    "Implementation for trait '{}' not registered",
                    std::any::type_name::<T>()
                ),
            })?;

        let downcast_failed = || CatalogError::DowncastFailed {
            type_name: std::any::type_name::<T>().to_string(),
        };

        // The caster yields an Arc<dyn Any> holding an Arc<T>.
        let wrapper = (caster.value())(entry.instance.clone())
            .ok_or_else(downcast_failed)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed())?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: i32,
    }

    trait Store: Send + Sync {
        fn size(&self) -> usize;
    }

    struct VecStore {
        items: Vec<i64>,
    }

    impl Store for VecStore {
        fn size(&self) -> usize {
            self.items.len()
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut container = Container::new();
        container.register(Counter { value: 42 });
        let service = container.resolve::<Counter>().unwrap();
        assert_eq!(service.value, 42);
    }

    #[test]
    fn test_register_and_resolve_trait() {
        let mut container = Container::new();
        container.register(VecStore {
            items: vec![1, 2, 3],
        });
        container.register_trait::<dyn Store, VecStore, _>(|s| s as Arc<dyn Store>);
        let store = container.resolve_trait::<dyn Store>().unwrap();
        assert_eq!(store.size(), 3);
        assert!(container.contains::<dyn Store>());
    }

    #[test]
    fn test_registered_arc_is_shared() {
        let shared = Arc::new(Counter { value: 7 });
        let mut container = Container::new();
        container.register_arc(Arc::clone(&shared));
        let resolved = container.resolve::<Counter>().unwrap();
        assert!(Arc::ptr_eq(&shared, &resolved));
    }

    #[test]
    fn test_missing_binding_is_reported() {
        let container = Container::new();
        let err = container.resolve_trait::<dyn Store>().err().unwrap();
        assert!(matches!(err, CatalogError::DependencyNotFound { .. }));
    }

    #[test]
    fn test_binding_without_instance_is_reported() {
        let mut container = Container::new();
        container.register_trait::<dyn Store, VecStore, _>(|s| s as Arc<dyn Store>);
        let err = container.resolve_trait::<dyn Store>().err().unwrap();
        assert!(matches!(err, CatalogError::DependencyNotFound { .. }));
    }
}
