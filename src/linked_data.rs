//! schema.org linked-data objects embedded in generated pages.
//!
//! Three pure transforms, one per object shape:
//!
//! - [`how_to`]: a recipe into a `HowTo` with its supplies and steps
//! - [`breadcrumb`]: a navigation trail into a `BreadcrumbList`
//! - [`website`]: the site identity into a `WebSite`
//!
//! The field names and nesting here are a compatibility surface toward
//! search engines: they follow the schema.org vocabulary exactly and must
//! not be renamed. The serde `rename` attributes carry the `@`-prefixed and
//! camelCase spellings the vocabulary requires.
//!
//! All transforms are total over well-typed input and referentially
//! transparent: no external state, no failure paths, same input producing
//! identical output. Position fields are 1-indexed and assigned purely by
//! sequence order; nothing is reordered, deduplicated, or inspected.

use crate::types::IngredientLine;
use serde::Serialize;

const CONTEXT: &str = "https://schema.org";

/// Recipe-shaped input for [`how_to`].
#[derive(Debug, Clone, Copy)]
pub struct HowToInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// ISO-8601 duration, passed through verbatim.
    pub prep_time: &'a str,
    pub total_time: &'a str,
    pub yield_: &'a str,
    pub ingredients: &'a [IngredientLine],
    pub steps: &'a [String],
    /// Canonical absolute URL of the recipe page.
    pub url: &'a str,
}

/// A schema.org `HowTo` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowTo {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub type_: &'static str,
    pub name: String,
    pub description: String,
    #[serde(rename = "prepTime")]
    pub prep_time: String,
    #[serde(rename = "totalTime")]
    pub total_time: String,
    #[serde(rename = "yield")]
    pub yield_: String,
    pub supply: Vec<HowToSupply>,
    pub step: Vec<HowToStep>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowToSupply {
    #[serde(rename = "@type")]
    pub type_: &'static str,
    pub name: String,
    #[serde(rename = "requiredQuantity")]
    pub required_quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowToStep {
    #[serde(rename = "@type")]
    pub type_: &'static str,
    /// 1-indexed sequence position.
    pub position: usize,
    pub text: String,
}

/// Map a recipe into a `HowTo`.
///
/// The ingredient list maps 1:1, in order, into `supply`; the step list maps
/// 1:1 into `step` with positions `1..=len` assigned by sequence order.
pub fn how_to(input: HowToInput<'_>) -> HowTo {
    HowTo {
        context: CONTEXT,
        type_: "HowTo",
        name: input.title.to_string(),
        description: input.description.to_string(),
        prep_time: input.prep_time.to_string(),
        total_time: input.total_time.to_string(),
        yield_: input.yield_.to_string(),
        supply: input
            .ingredients
            .iter()
            .map(|line| HowToSupply {
                type_: "HowToSupply",
                name: line.name.clone(),
                required_quantity: line.amount.clone(),
            })
            .collect(),
        step: input
            .steps
            .iter()
            .enumerate()
            .map(|(i, text)| HowToStep {
                type_: "HowToStep",
                position: i + 1,
                text: text.clone(),
            })
            .collect(),
        url: input.url.to_string(),
    }
}

/// One entry of a navigation trail, outermost first.
#[derive(Debug, Clone, Copy)]
pub struct Crumb<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

/// A schema.org `BreadcrumbList` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub type_: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub type_: &'static str,
    /// 1-indexed position within the trail.
    pub position: usize,
    pub name: String,
    pub item: String,
}

/// Map an ordered navigation trail into a `BreadcrumbList`.
///
/// Input order is preserved exactly; positions are `1..=len`.
pub fn breadcrumb(items: &[Crumb<'_>]) -> BreadcrumbList {
    BreadcrumbList {
        context: CONTEXT,
        type_: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(i, crumb)| ListItem {
                type_: "ListItem",
                position: i + 1,
                name: crumb.name.to_string(),
                item: crumb.url.to_string(),
            })
            .collect(),
    }
}

/// A schema.org `WebSite` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub type_: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Construct the site descriptor embedded on the index page.
pub fn website(name: &str, url: &str, description: &str) -> WebSite {
    WebSite {
        context: CONTEXT,
        type_: "WebSite",
        name: name.to_string(),
        url: url.to_string(),
        description: description.to_string(),
    }
}
