//! Generator modules - Villain-specific set selection
//!
//! Some villains don't use a fixed list of modular sets. A villain that
//! carries a [`GeneratorModuleRef`] has its required and recommended sets
//! computed by the referenced module instead of by the default generator
//! path. New bespoke villains are supported by registering another module,
//! never by special-casing the generator.

use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::warn;

use crate::domain::aggregates::Catalog;
use crate::domain::entities::{DrawRule, GeneratorModuleId, GeneratorModuleRef, Villain};
use crate::domain::value_objects::ProductId;

pub const MOJO_MANIA_PRODUCT_ID: &str = "cycle6-mojo-mania";
/// Drawing this set in Mojo Mania grants one extra draw
pub const MOJO_MANIA_BONUS_SET: &str = "Longshot";

/// Sets computed by a module for one villain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSets {
    pub required_sets: Vec<String>,
    pub recommended_sets: Vec<String>,
}

pub trait GeneratorModule: Send + Sync {
    fn id(&self) -> GeneratorModuleId;

    fn compute_sets(
        &self,
        villain: &Villain,
        rule: DrawRule,
        player_count: usize,
        rng: &mut dyn RngCore,
    ) -> ModuleSets;
}

/// Draws sets without replacement from one product's modular-set pool.
///
/// When a bonus set is configured, drawing it adds one more draw to the
/// current invocation.
#[derive(Debug, Clone)]
pub struct PoolDrawModule {
    id: GeneratorModuleId,
    pool: Vec<String>,
    bonus_set: Option<String>,
}

impl PoolDrawModule {
    pub fn new(id: GeneratorModuleId, pool: Vec<String>, bonus_set: Option<String>) -> Self {
        Self {
            id,
            pool,
            bonus_set,
        }
    }

    /// Mojo Mania draws from its own product's modular sets
    pub fn mojo_mania(catalog: &Catalog) -> Self {
        let pool = catalog
            .product(&ProductId::new(MOJO_MANIA_PRODUCT_ID))
            .map(|p| p.modular_sets.clone())
            .unwrap_or_default();
        Self::new(
            GeneratorModuleId::MojoMania,
            pool,
            Some(MOJO_MANIA_BONUS_SET.to_string()),
        )
    }

    fn draw(&self, pool: &mut Vec<String>, count: usize, rng: &mut dyn RngCore) -> Vec<String> {
        pool.shuffle(rng);
        let mut drawn = Vec::new();
        let mut remaining = count;

        while remaining > 0 {
            let Some(set) = pool.pop() else {
                break;
            };
            remaining -= 1;
            if self.bonus_set.as_deref() == Some(set.as_str()) {
                remaining += 1;
            }
            drawn.push(set);
        }

        drawn
    }
}

impl GeneratorModule for PoolDrawModule {
    fn id(&self) -> GeneratorModuleId {
        self.id
    }

    fn compute_sets(
        &self,
        villain: &Villain,
        rule: DrawRule,
        player_count: usize,
        rng: &mut dyn RngCore,
    ) -> ModuleSets {
        if self.pool.is_empty() {
            warn!(
                module = ?self.id,
                villain = %villain.name,
                "Generator module has no modular sets to draw from"
            );
            return ModuleSets::default();
        }

        let mut pool = self.pool.clone();
        let mut required_sets = villain.required_sets.clone();

        match rule {
            DrawRule::RecommendOne => ModuleSets {
                required_sets,
                recommended_sets: self.draw(&mut pool, 1, rng),
            },
            DrawRule::RequireFixed { count } => {
                required_sets.extend(self.draw(&mut pool, count, rng));
                ModuleSets {
                    required_sets,
                    recommended_sets: Vec::new(),
                }
            }
            DrawRule::RequirePerPlayer { base } => {
                required_sets.extend(self.draw(&mut pool, base + player_count, rng));
                ModuleSets {
                    required_sets,
                    recommended_sets: Vec::new(),
                }
            }
        }
    }
}

/// Dispatch table from module id to module
#[derive(Default, Clone)]
pub struct GeneratorModuleRegistry {
    modules: HashMap<GeneratorModuleId, Arc<dyn GeneratorModule>>,
}

impl GeneratorModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in module, backed by the given catalog
    pub fn with_defaults(catalog: &Catalog) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PoolDrawModule::mojo_mania(catalog)));
        registry
    }

    pub fn register(&mut self, module: Arc<dyn GeneratorModule>) {
        self.modules.insert(module.id(), module);
    }

    pub fn get(&self, id: GeneratorModuleId) -> Option<&dyn GeneratorModule> {
        self.modules.get(&id).map(|m| m.as_ref())
    }

    /// Run the module a villain references.
    ///
    /// Returns `None` for villains without a module reference. A reference to
    /// an unregistered module is logged and yields empty sets.
    pub fn compute(
        &self,
        villain: &Villain,
        player_count: usize,
        rng: &mut dyn RngCore,
    ) -> Option<ModuleSets> {
        let GeneratorModuleRef { module, rule } = villain.generator_module?;

        match self.get(module) {
            Some(m) => Some(m.compute_sets(villain, rule, player_count, rng)),
            None => {
                warn!(module = ?module, villain = %villain.name, "Generator module not registered");
                Some(ModuleSets::default())
            }
        }
    }
}

impl std::fmt::Debug for GeneratorModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorModuleRegistry")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}
