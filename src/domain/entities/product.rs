//! Product entity - Purchasable content bundles and the heroes and villains
//! they contribute.
//!
//! Products are immutable reference data, loaded once at startup from the
//! bundled catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Aspect, ExpertSet, HeroId, ProductId, StandardSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Core Set")]
    CoreSet,
    #[serde(rename = "Hero Pack")]
    HeroPack,
    #[serde(rename = "Scenario Pack")]
    ScenarioPack,
    #[serde(rename = "Campaign Box")]
    CampaignBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub villains: Vec<Villain>,
    #[serde(default)]
    pub modular_sets: Vec<String>,
    #[serde(default)]
    pub standard_sets: Vec<StandardSet>,
    #[serde(default)]
    pub expert_sets: Vec<ExpertSet>,
    /// Aspect tags this product unlocks for deckbuilding
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub alter_ego: String,
    /// Name of the hero's nemesis villain
    pub nemesis: String,
    /// Aspects of the hero's out-of-the-box deck; `None` when undefined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuilt_aspects: Option<Vec<Aspect>>,
}

impl Hero {
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.alter_ego)
    }

    /// Number of aspects the prebuilt deck uses, at least one
    pub fn aspect_count(&self) -> usize {
        self.prebuilt_aspects
            .as_ref()
            .map(|aspects| aspects.len())
            .unwrap_or(1)
            .max(1)
    }
}

/// A villain and the encounter sets it needs.
///
/// Villains are identified by display name. Names are not guaranteed to be
/// unique across products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Villain {
    pub name: String,
    pub required_sets: Vec<String>,
    #[serde(default)]
    pub recommended_sets: Vec<String>,
    /// When present, set selection for this villain is delegated to a
    /// generator module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator_module: Option<GeneratorModuleRef>,
}

impl Villain {
    pub fn new(name: impl Into<String>, required_sets: Vec<String>) -> Self {
        Self {
            name: name.into(),
            required_sets,
            recommended_sets: Vec::new(),
            generator_module: None,
        }
    }

    pub fn with_recommended(mut self, recommended_sets: Vec<String>) -> Self {
        self.recommended_sets = recommended_sets;
        self
    }

    pub fn with_generator_module(mut self, module: GeneratorModuleRef) -> Self {
        self.generator_module = Some(module);
        self
    }
}

/// Identifies a registered generator module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorModuleId {
    MojoMania,
}

/// How a module should shape a particular villain's sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawRule {
    /// Base required sets, plus one drawn set as a recommendation
    RecommendOne,
    /// Base required sets plus a fixed number of drawn sets
    RequireFixed { count: usize },
    /// Base required sets plus `base + player count` drawn sets
    RequirePerPlayer { base: usize },
}

/// Attachment of a villain to a generator module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorModuleRef {
    pub module: GeneratorModuleId,
    pub rule: DrawRule,
}
