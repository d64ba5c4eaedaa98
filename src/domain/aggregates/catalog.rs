//! Catalog Aggregate - The immutable product reference data
//!
//! The catalog is parsed once at startup from the bundled JSON file and
//! shared read-only afterwards. [`OwnedPool`] is the view of the catalog
//! restricted to the products a user owns; it is what the scenario
//! generator samples from.

use std::collections::HashSet;

use crate::domain::entities::{Hero, Product, Villain};
use crate::domain::value_objects::{Aspect, ExpertSet, HeroId, ProductId, StandardSet};

const BUNDLED_CATALOG: &str = include_str!("../../../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(serde::Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products)
    }

    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        validate(&products)?;
        Ok(Self { products })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.product(id).is_some()
    }

    /// All heroes, sorted by name
    pub fn heroes(&self) -> Vec<&Hero> {
        let mut heroes: Vec<&Hero> = self.products.iter().flat_map(|p| &p.heroes).collect();
        heroes.sort_by(|a, b| a.name.cmp(&b.name));
        heroes.dedup_by(|a, b| a.id == b.id);
        heroes
    }

    /// All villains, sorted by name
    pub fn villains(&self) -> Vec<&Villain> {
        let mut villains: Vec<&Villain> =
            self.products.iter().flat_map(|p| &p.villains).collect();
        villains.sort_by(|a, b| a.name.cmp(&b.name));
        villains.dedup();
        villains
    }

    /// Every modular set name, sorted and deduplicated
    pub fn modular_sets(&self) -> Vec<&str> {
        let mut sets: Vec<&str> = self
            .products
            .iter()
            .flat_map(|p| p.modular_sets.iter().map(String::as_str))
            .collect();
        sets.sort_unstable();
        sets.dedup();
        sets
    }

    pub fn aspects(&self) -> Vec<Aspect> {
        distinct(self.products.iter().flat_map(|p| p.aspects.iter().copied()))
    }

    // ========================================================================
    // Finders
    // ========================================================================

    pub fn hero(&self, id: &HeroId) -> Option<(&Hero, &Product)> {
        self.products
            .iter()
            .find_map(|p| p.heroes.iter().find(|h| &h.id == id).map(|h| (h, p)))
    }

    pub fn hero_by_name(&self, name: &str) -> Option<(&Hero, &Product)> {
        self.products
            .iter()
            .find_map(|p| p.heroes.iter().find(|h| h.name == name).map(|h| (h, p)))
    }

    /// First villain with the given name
    pub fn villain_by_name(&self, name: &str) -> Option<(&Villain, &Product)> {
        self.products
            .iter()
            .find_map(|p| p.villains.iter().find(|v| v.name == name).map(|v| (v, p)))
    }

    /// Restrict the catalog to the given owned product ids.
    ///
    /// Unknown ids are ignored. Catalog order is preserved.
    pub fn owned_pool(&self, owned: &[ProductId]) -> OwnedPool<'_> {
        let owned: HashSet<&ProductId> = owned.iter().collect();
        OwnedPool::new(
            self.products
                .iter()
                .filter(|p| owned.contains(&p.id))
                .collect(),
        )
    }
}

/// The subset of the catalog a user owns
#[derive(Debug, Clone, Default)]
pub struct OwnedPool<'a> {
    products: Vec<&'a Product>,
}

impl<'a> OwnedPool<'a> {
    pub fn new(products: Vec<&'a Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Villains across owned products. Same-named villains from different
    /// products are kept as separate entries.
    pub fn villains(&self) -> Vec<&'a Villain> {
        self.products.iter().flat_map(|p| &p.villains).collect()
    }

    pub fn heroes(&self) -> Vec<&'a Hero> {
        self.products.iter().flat_map(|p| &p.heroes).collect()
    }

    /// Distinct modular set names in catalog order
    pub fn modular_sets(&self) -> Vec<&'a str> {
        distinct(
            self.products
                .iter()
                .flat_map(|p| p.modular_sets.iter().map(String::as_str)),
        )
    }

    /// Distinct concrete standard tiers; the random sentinel is never owned
    pub fn standard_sets(&self) -> Vec<StandardSet> {
        distinct(
            self.products
                .iter()
                .flat_map(|p| p.standard_sets.iter().copied())
                .filter(|s| !s.is_random()),
        )
    }

    pub fn expert_sets(&self) -> Vec<ExpertSet> {
        distinct(
            self.products
                .iter()
                .flat_map(|p| p.expert_sets.iter().copied())
                .filter(|s| *s != ExpertSet::None),
        )
    }

    pub fn aspects(&self) -> Vec<Aspect> {
        distinct(self.products.iter().flat_map(|p| p.aspects.iter().copied()))
    }
}

fn distinct<T: Eq + std::hash::Hash + Copy>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
    let mut product_ids = HashSet::new();
    let mut hero_ids = HashSet::new();

    for product in products {
        if product.id.as_str().trim().is_empty() {
            return Err(CatalogError::Invalid("product with empty id".to_string()));
        }
        if !product_ids.insert(&product.id) {
            return Err(CatalogError::Invalid(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if product.name.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "product {} has no name",
                product.id
            )));
        }

        for hero in &product.heroes {
            if hero.name.trim().is_empty()
                || hero.alter_ego.trim().is_empty()
                || hero.nemesis.trim().is_empty()
            {
                return Err(CatalogError::Invalid(format!(
                    "hero {} in {} is missing a name, alter ego or nemesis",
                    hero.id, product.id
                )));
            }
            if !hero_ids.insert(&hero.id) {
                return Err(CatalogError::Invalid(format!("duplicate hero id {}", hero.id)));
            }
        }

        for villain in &product.villains {
            if villain.name.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "villain with empty name in {}",
                    product.id
                )));
            }
            if villain.required_sets.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "villain {} has no required sets",
                    villain.name
                )));
            }
        }
    }

    Ok(())
}
