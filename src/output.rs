//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric. The primary display for
//! every entity (recipe, guide, ingredient, page) is its semantic identity,
//! a positional index plus title, with filesystem paths shown as secondary
//! context via indented `Source:` lines. The scan output reads as a content
//! inventory; the generate output reads as a page map.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Recipes
//! 001 Kitchen Cleaning (2 recipes)
//!     001 All-Purpose Cleaner
//!         Source: recipes/kitchen/all-purpose-cleaner.md
//!     002 Oven Paste (draft)
//!         Source: recipes/kitchen/oven-paste.md
//!
//! Ingredients
//! 001 Baking Soda (core)
//!     Source: ingredients/baking-soda.md
//!
//! Pages
//! 001 About
//!     Source: pages/about.md
//!
//! Config
//!     site.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 All-Purpose Cleaner → recipes/kitchen/all-purpose-cleaner/index.html
//! ...
//! Generated 3 recipe, 1 guide, 2 ingredient, 1 static pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::scan::Manifest;
use crate::taxonomy;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Kitchen Cleaning (2 recipes)
/// 001 Baking Soda (core)
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan output showing the validated catalog inventory.
///
/// Recipes and guides group under their category in registry order; drafts
/// are marked. Source paths are indented context lines.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Recipes".to_string());
    let mut category_pos = 0;
    for category in taxonomy::list() {
        let in_category: Vec<_> = manifest
            .recipes
            .iter()
            .filter(|r| r.meta.category == category.slug)
            .collect();
        if in_category.is_empty() {
            continue;
        }
        category_pos += 1;
        let detail = format!(
            "{} recipe{}",
            in_category.len(),
            if in_category.len() == 1 { "" } else { "s" }
        );
        lines.push(entity_header(category_pos, category.name, Some(&detail)));
        for (i, recipe) in in_category.iter().enumerate() {
            let draft = if recipe.meta.draft { " (draft)" } else { "" };
            lines.push(format!(
                "{}{}{}",
                indent(1),
                entity_header(i + 1, &recipe.meta.title, None),
                draft
            ));
            lines.push(format!("{}Source: {}", indent(2), recipe.source_path));
        }
    }

    if !manifest.guides.is_empty() {
        lines.push(String::new());
        lines.push("Guides".to_string());
        for (i, guide) in manifest.guides.iter().enumerate() {
            let label = taxonomy::label(&guide.meta.category);
            let draft = if guide.meta.draft { " (draft)" } else { "" };
            lines.push(format!(
                "{}{}",
                entity_header(i + 1, &guide.meta.title, Some(label)),
                draft
            ));
            lines.push(format!("{}Source: {}", indent(1), guide.source_path));
        }
    }

    if !manifest.ingredients.is_empty() {
        lines.push(String::new());
        lines.push("Ingredients".to_string());
        for (i, ingredient) in manifest.ingredients.iter().enumerate() {
            lines.push(entity_header(
                i + 1,
                &ingredient.meta.name,
                Some(ingredient.meta.category.as_str()),
            ));
            lines.push(format!("{}Source: {}", indent(1), ingredient.source_path));
        }
    }

    if !manifest.pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            lines.push(entity_header(i + 1, &page.meta.title, None));
            lines.push(format!("{}Source: {}", indent(1), page.source_path));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("site.toml").exists() {
        lines.push(format!("{}site.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate output: one `title → output file` line per page, plus a
/// closing summary. Draft content is omitted, mirroring what was written.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home → index.html".to_string());

    let recipes: Vec<_> = manifest.recipes.iter().filter(|r| !r.meta.draft).collect();
    for (i, recipe) in recipes.iter().enumerate() {
        lines.push(format!(
            "{} → recipes/{}/{}/index.html",
            entity_header(i + 1, &recipe.meta.title, None),
            recipe.meta.category,
            recipe.slug
        ));
    }

    let guides: Vec<_> = manifest.guides.iter().filter(|g| !g.meta.draft).collect();
    for (i, guide) in guides.iter().enumerate() {
        lines.push(format!(
            "{} → guides/{}/index.html",
            entity_header(i + 1, &guide.meta.title, None),
            guide.slug
        ));
    }

    for (i, ingredient) in manifest.ingredients.iter().enumerate() {
        lines.push(format!(
            "{} → ingredients/{}/index.html",
            entity_header(i + 1, &ingredient.meta.name, None),
            ingredient.slug
        ));
    }

    for (i, page) in manifest.pages.iter().enumerate() {
        lines.push(format!(
            "{} → {}/index.html",
            entity_header(i + 1, &page.meta.title, None),
            page.slug
        ));
    }

    let category_count = taxonomy::list().len();
    let browse_count = taxonomy::super_categories().len();
    lines.push(format!(
        "Generated {} recipe, {} guide, {} ingredient, {} static pages; {} category and {} browse pages",
        recipes.len(),
        guides.len(),
        manifest.ingredients.len(),
        manifest.pages.len(),
        category_count,
        browse_count
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}
