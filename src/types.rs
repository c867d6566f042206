//! Shared content types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → generate) and
//! must round-trip losslessly. Frontmatter keys are camelCase in the source
//! files, so the metadata structs rename accordingly and the manifest JSON
//! uses the same spelling.
//!
//! Each content kind pairs a validated metadata struct (`*Meta`, the typed
//! form of the file's frontmatter) with a wrapper carrying the slug, source
//! path, and markdown body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recipe difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// How foundational an ingredient is to the catalog.
///
/// This is a separate three-value enumeration from the recipe/guide category
/// taxonomy; the two are never conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Core,
    Secondary,
    Specialty,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::Secondary => "secondary",
            Tier::Specialty => "specialty",
        }
    }
}

/// One line of a recipe's ingredient list, in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Validated recipe frontmatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMeta {
    pub title: String,
    pub description: String,
    /// One of the registry's category slugs.
    pub category: String,
    pub difficulty: Difficulty,
    /// ISO-8601 duration, e.g. `PT5M`.
    pub prep_time: String,
    /// ISO-8601 duration covering prep plus any waiting.
    pub total_time: String,
    #[serde(rename = "yield")]
    pub yield_: String,
    pub ingredients: Vec<IngredientLine>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Slugs of related recipes, shown as see-also links.
    #[serde(default)]
    pub related_recipes: Vec<String>,
    #[serde(default)]
    pub safety_warnings: Vec<String>,
    /// Surfaces or materials this recipe must not touch.
    #[serde(default)]
    pub not_safe_for: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,
    pub publish_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
}

/// Validated guide frontmatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideMeta {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    pub publish_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
}

/// Validated ingredient-reference frontmatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMeta {
    /// Canonical display name, e.g. "Baking Soda".
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Ingredient tier, authored under the `category` key.
    pub category: Tier,
    pub science_summary: String,
    #[serde(default)]
    pub safety_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<String>,
    pub publish_date: NaiveDate,
}

/// Validated static-page frontmatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
}

/// A recipe file after validation: slug, metadata, and markdown body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// URL slug, taken from the file stem.
    pub slug: String,
    /// Path relative to the content root, for error reporting.
    pub source_path: String,
    pub meta: RecipeMeta,
    pub body: String,
    /// Ordered step texts extracted from the body's `## Steps` list.
    pub steps: Vec<String>,
}

/// A guide file after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guide {
    pub slug: String,
    pub source_path: String,
    pub meta: GuideMeta,
    pub body: String,
}

/// An ingredient reference file after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// URL slug from frontmatter (ingredients declare theirs explicitly).
    pub slug: String,
    pub source_path: String,
    pub meta: IngredientMeta,
    pub body: String,
}

/// A static page (about, contact, ...) after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPage {
    pub slug: String,
    pub source_path: String,
    pub meta: PageMeta,
    pub body: String,
}
