//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and renders the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Index** (`/index.html`): super-category cards, featured recipes, and
//!   the WebSite linked-data descriptor
//! - **Recipe catalog** (`/recipes/`): all recipes grouped by category
//! - **Recipe pages** (`/recipes/{category}/{slug}/`): facts, ingredient
//!   table, article body, HowTo + BreadcrumbList linked data
//! - **Category pages** (`/categories/{slug}/`): one per registered
//!   category, listing its recipes and guides
//! - **Super-category pages** (`/browse/{slug}/`): member category cards
//!   with content counts
//! - **Guides** (`/guides/`, `/guides/{slug}/`)
//! - **Ingredients** (`/ingredients/`, `/ingredients/{slug}/`), grouped by
//!   tier on the index
//! - **Static pages** (`/{slug}/`)
//! - **Search index** (`/search-index.json`) for the client-side dialog
//!
//! Draft content is carried in the manifest but never rendered here.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic escaping. Markdown bodies are converted with
//! pulldown-cmark. Static assets (`static/style.css`, `static/search.js`)
//! are embedded at compile time; colors are injected ahead of the
//! stylesheet as CSS custom properties from `site.toml`.

use crate::config::{self, SiteConfig};
use crate::format::{capitalize, format_duration};
use crate::linked_data::{self, Crumb, HowToInput};
use crate::scan::Manifest;
use crate::taxonomy;
use crate::types::{Guide, Ingredient, Recipe, StaticPage, Tier};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/search.js");

/// Read the manifest JSON and render the site into `output_dir`.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    let manifest: Manifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;
    generate_site(&manifest, output_dir)
}

/// Render a manifest into `output_dir`.
pub fn generate_site(manifest: &Manifest, output_dir: &Path) -> Result<(), GenerateError> {
    let config = &manifest.config;
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    let recipes: Vec<&Recipe> = manifest.recipes.iter().filter(|r| !r.meta.draft).collect();
    let guides: Vec<&Guide> = manifest.guides.iter().filter(|g| !g.meta.draft).collect();
    let ingredients: Vec<&Ingredient> = manifest.ingredients.iter().collect();
    let pages: Vec<&StaticPage> = manifest.pages.iter().collect();

    fs::create_dir_all(output_dir)?;

    write_page(
        output_dir,
        "/",
        render_index(config, &recipes, &guides, &pages),
    )?;
    write_page(
        output_dir,
        "/recipes/",
        render_recipe_catalog(config, &recipes, &pages),
    )?;

    for category in taxonomy::list() {
        let in_category: Vec<&Recipe> = recipes
            .iter()
            .copied()
            .filter(|r| r.meta.category == category.slug)
            .collect();
        let guides_in: Vec<&Guide> = guides
            .iter()
            .copied()
            .filter(|g| g.meta.category == category.slug)
            .collect();
        write_page(
            output_dir,
            &category_path(category.slug),
            render_category_page(config, &category, &in_category, &guides_in, &pages),
        )?;
    }

    for sc in taxonomy::super_categories() {
        write_page(
            output_dir,
            &super_category_path(sc.slug),
            render_super_category_page(config, sc, &recipes, &guides, &pages),
        )?;
    }

    for recipe in &recipes {
        write_page(
            output_dir,
            &recipe_path(recipe),
            render_recipe_page(config, recipe, &recipes, &pages),
        )?;
    }

    write_page(output_dir, "/guides/", render_guide_index(config, &guides, &pages))?;
    for guide in &guides {
        write_page(
            output_dir,
            &guide_path(guide),
            render_guide_page(config, guide, &pages),
        )?;
    }

    write_page(
        output_dir,
        "/ingredients/",
        render_ingredient_index(config, &ingredients, &pages),
    )?;
    for ingredient in &ingredients {
        write_page(
            output_dir,
            &ingredient_path(ingredient),
            render_ingredient_page(config, ingredient, &pages),
        )?;
    }

    for page in &pages {
        write_page(
            output_dir,
            &page_path(page),
            render_static_page(config, page, &pages),
        )?;
    }

    let index = search_index(&recipes, &guides, &ingredients, &pages, config);
    fs::write(
        output_dir.join("search-index.json"),
        serde_json::to_string_pretty(&index)?,
    )?;

    // One stylesheet for the whole site; pages link it rather than inline it.
    fs::write(output_dir.join("style.css"), css)?;
    fs::write(output_dir.join("search.js"), JS)?;

    Ok(())
}

/// Write a rendered page to `<output>/<url path>/index.html`.
fn write_page(output_dir: &Path, url_path: &str, doc: Markup) -> Result<(), GenerateError> {
    let dir = output_dir.join(url_path.trim_matches('/'));
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("index.html"), doc.into_string())?;
    Ok(())
}

// ============================================================================
// URL paths (site-relative, before the configured base path is applied)
// ============================================================================

fn recipe_path(recipe: &Recipe) -> String {
    format!("/recipes/{}/{}/", recipe.meta.category, recipe.slug)
}

fn guide_path(guide: &Guide) -> String {
    format!("/guides/{}/", guide.slug)
}

fn ingredient_path(ingredient: &Ingredient) -> String {
    format!("/ingredients/{}/", ingredient.slug)
}

fn page_path(page: &StaticPage) -> String {
    format!("/{}/", page.slug)
}

fn category_path(slug: &str) -> String {
    format!("/categories/{slug}/")
}

fn super_category_path(slug: &str) -> String {
    format!("/browse/{slug}/")
}

// ============================================================================
// HTML components
// ============================================================================

/// Renders the base HTML document structure shared by every page.
fn base_document(
    config: &SiteConfig,
    title: &str,
    description: &str,
    head_extra: Markup,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="stylesheet" href=(config.href("/style.css"));
                (head_extra)
            }
            body {
                (content)
                dialog id="search-dialog" data-index-url=(config.href("/search-index.json")) {
                    input id="search-input" type="search" placeholder="Search recipes, guides, ingredients...";
                    ul id="search-results" {}
                }
                script src=(config.href("/search.js")) {}
            }
        }
    }
}

/// Renders the site header with title, navigation, and the search opener.
fn site_header(config: &SiteConfig, pages: &[&StaticPage]) -> Markup {
    html! {
        header.site-header {
            a.site-title href=(config.href("/")) { (config.site.name) }
            nav.site-nav {
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" { "☰" }
                ul {
                    li { a href=(config.href("/recipes/")) { "Recipes" } }
                    li { a href=(config.href("/ingredients/")) { "Ingredients" } }
                    li { a href=(config.href("/guides/")) { "Guides" } }
                    @for page in pages {
                        li { a href=(config.href(&page_path(page))) { (page.meta.title) } }
                    }
                    li { button.search-open id="search-open" type="button" { "Search  /" } }
                }
            }
        }
    }
}

/// Visible breadcrumb trail. Entries are `(name, site-relative path)`.
fn trail_nav(config: &SiteConfig, trail: &[(&str, &str)]) -> Markup {
    html! {
        nav.breadcrumbs aria-label="Breadcrumb" {
            @for (i, (name, path)) in trail.iter().enumerate() {
                @if i > 0 { " › " }
                a href=(config.href(path)) { (name) }
            }
        }
    }
}

/// BreadcrumbList linked data for the same trail as [`trail_nav`].
fn trail_json_ld(config: &SiteConfig, trail: &[(&str, &str)]) -> Markup {
    let urls: Vec<String> = trail.iter().map(|(_, path)| config.canonical(path)).collect();
    let crumbs: Vec<Crumb> = trail
        .iter()
        .zip(&urls)
        .map(|(&(name, _), url)| Crumb {
            name,
            url: url.as_str(),
        })
        .collect();
    json_ld(&linked_data::breadcrumb(&crumbs))
}

/// Serialize a linked-data object into its embedded script element.
fn json_ld<T: Serialize>(value: &T) -> Markup {
    // Plain structs of strings and numbers; serialization cannot fail.
    let json = serde_json::to_string(value).expect("linked data serializes");
    // A literal "</script>" inside content would end the element early;
    // the < escape is equivalent JSON and inert in HTML.
    let json = json.replace('<', "\\u003c");
    html! {
        script type="application/ld+json" { (PreEscaped(json)) }
    }
}

/// Convert a markdown fragment to HTML.
fn markdown(text: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    PreEscaped(out)
}

fn published_line(published: chrono::NaiveDate, updated: Option<chrono::NaiveDate>) -> Markup {
    html! {
        p.meta-line {
            "Published " (published.format("%B %-d, %Y"))
            @if let Some(updated) = updated {
                " · Updated " (updated.format("%B %-d, %Y"))
            }
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

/// Renders the index page: super-category cards and featured recipes.
fn render_index(
    config: &SiteConfig,
    recipes: &[&Recipe],
    guides: &[&Guide],
    pages: &[&StaticPage],
) -> Markup {
    let featured: Vec<&&Recipe> = recipes.iter().filter(|r| r.meta.featured).collect();

    let content = html! {
        (site_header(config, pages))
        main {
            section.hero {
                h1 { (config.site.name) }
                p { (config.site.description) }
            }
            section {
                h2 { "Browse" }
                ul.card-grid {
                    @for sc in taxonomy::super_categories() {
                        @let count = recipes.iter().filter(|r| sc.members.contains(&r.meta.category.as_str())).count()
                            + guides.iter().filter(|g| sc.members.contains(&g.meta.category.as_str())).count();
                        li.card {
                            span.icon { (sc.icon) }
                            h3 { a href=(config.href(&super_category_path(sc.slug))) { (sc.name) } }
                            p { (sc.description) }
                            span.count { (count) " entries" }
                        }
                    }
                }
            }
            @if !featured.is_empty() {
                section {
                    h2 { "Featured Recipes" }
                    ul.content-list {
                        @for recipe in &featured {
                            li {
                                a href=(config.href(&recipe_path(recipe))) { (recipe.meta.title) }
                                p.meta-line {
                                    (taxonomy::icon(&recipe.meta.category)) " "
                                    (taxonomy::label(&recipe.meta.category))
                                    " · " (format_duration(&recipe.meta.total_time))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let head = json_ld(&linked_data::website(
        &config.site.name,
        &config.canonical("/"),
        &config.site.description,
    ));

    base_document(config, &config.site.name, &config.site.description, head, content)
}

/// Renders the full recipe catalog grouped by category.
fn render_recipe_catalog(
    config: &SiteConfig,
    recipes: &[&Recipe],
    pages: &[&StaticPage],
) -> Markup {
    let trail = [("Home", "/"), ("Recipes", "/recipes/")];

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            h1 { "All Recipes" }
            @for category in taxonomy::list() {
                @let in_category = recipes.iter().filter(|r| r.meta.category == category.slug).collect::<Vec<_>>();
                @if !in_category.is_empty() {
                    section {
                        h2 {
                            (category.icon) " "
                            a href=(config.href(&category_path(category.slug))) { (category.name) }
                        }
                        ul.content-list {
                            @for recipe in &in_category {
                                li {
                                    a href=(config.href(&recipe_path(recipe))) { (recipe.meta.title) }
                                    p.meta-line { (recipe.meta.description) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(
        config,
        &format!("All Recipes · {}", config.site.name),
        "Every recipe in the catalog, by category",
        trail_json_ld(config, &trail),
        content,
    )
}

/// Renders one category page with its recipes and guides.
fn render_category_page(
    config: &SiteConfig,
    category: &taxonomy::Category,
    recipes: &[&Recipe],
    guides: &[&Guide],
    pages: &[&StaticPage],
) -> Markup {
    // The trail routes through the super-category when the grouping has one.
    let path = category_path(category.slug);
    let mut trail: Vec<(&str, String)> = vec![("Home", "/".to_string())];
    if let Some(sc) = taxonomy::super_category_of(category.slug) {
        trail.push((sc.name, super_category_path(sc.slug)));
    }
    trail.push((category.name, path));
    let trail: Vec<(&str, &str)> = trail
        .iter()
        .map(|(name, path)| (*name, path.as_str()))
        .collect();

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            h1 { (category.icon) " " (category.name) }
            p { (category.description) }
            @if recipes.is_empty() && guides.is_empty() {
                p.meta-line { "Nothing here yet." }
            }
            @if !recipes.is_empty() {
                section {
                    h2 { "Recipes" }
                    ul.content-list {
                        @for recipe in recipes {
                            li {
                                a href=(config.href(&recipe_path(recipe))) { (recipe.meta.title) }
                                p.meta-line {
                                    (capitalize(recipe.meta.difficulty.as_str()))
                                    " · " (format_duration(&recipe.meta.total_time))
                                    " · " (recipe.meta.yield_)
                                }
                            }
                        }
                    }
                }
            }
            @if !guides.is_empty() {
                section {
                    h2 { "Guides" }
                    ul.content-list {
                        @for guide in guides {
                            li {
                                a href=(config.href(&guide_path(guide))) { (guide.meta.title) }
                                p.meta-line { (guide.meta.description) }
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(
        config,
        &format!("{} · {}", category.name, config.site.name),
        category.description,
        trail_json_ld(config, &trail),
        content,
    )
}

/// Renders one super-category page with member category cards.
fn render_super_category_page(
    config: &SiteConfig,
    sc: &taxonomy::SuperCategory,
    recipes: &[&Recipe],
    guides: &[&Guide],
    pages: &[&StaticPage],
) -> Markup {
    let path = super_category_path(sc.slug);
    let trail = [("Home", "/"), (sc.name, path.as_str())];

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            h1 { (sc.icon) " " (sc.name) }
            p { (sc.description) }
            ul.card-grid {
                @for member in sc.members {
                    @let count = recipes.iter().filter(|r| r.meta.category == *member).count()
                        + guides.iter().filter(|g| g.meta.category == *member).count();
                    li.card {
                        span.icon { (taxonomy::icon(member)) }
                        h3 { a href=(config.href(&category_path(member))) { (taxonomy::label(member)) } }
                        span.count { (count) " entries" }
                    }
                }
            }
        }
    };

    base_document(
        config,
        &format!("{} · {}", sc.name, config.site.name),
        sc.description,
        trail_json_ld(config, &trail),
        content,
    )
}

/// Renders a full recipe page with its HowTo and BreadcrumbList linked data.
fn render_recipe_page(
    config: &SiteConfig,
    recipe: &Recipe,
    all_recipes: &[&Recipe],
    pages: &[&StaticPage],
) -> Markup {
    let meta = &recipe.meta;
    let path = recipe_path(recipe);
    let cat_path = category_path(&meta.category);
    let trail = [
        ("Home", "/"),
        (taxonomy::label(&meta.category), cat_path.as_str()),
        (meta.title.as_str(), path.as_str()),
    ];

    let how_to = linked_data::how_to(HowToInput {
        title: &meta.title,
        description: &meta.description,
        prep_time: &meta.prep_time,
        total_time: &meta.total_time,
        yield_: &meta.yield_,
        ingredients: &meta.ingredients,
        steps: &recipe.steps,
        url: &config.canonical(&path),
    });

    let related: Vec<&&Recipe> = meta
        .related_recipes
        .iter()
        .filter_map(|slug| all_recipes.iter().find(|r| &r.slug == slug))
        .collect();

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            article {
                h1 { (meta.title) }
                p { (meta.description) }
                (published_line(meta.publish_date, meta.updated_date))
                dl.recipe-facts {
                    div { dt { "Difficulty" } dd { (capitalize(meta.difficulty.as_str())) } }
                    div { dt { "Prep" } dd { (format_duration(&meta.prep_time)) } }
                    div { dt { "Total" } dd { (format_duration(&meta.total_time)) } }
                    div { dt { "Yield" } dd { (meta.yield_) } }
                }
                @if !meta.safety_warnings.is_empty() || !meta.not_safe_for.is_empty() {
                    aside.safety {
                        h2 { "Safety" }
                        ul {
                            @for warning in &meta.safety_warnings {
                                li { (warning) }
                            }
                            @for surface in &meta.not_safe_for {
                                li { "Not safe for: " (surface) }
                            }
                        }
                    }
                }
                h2 { "Ingredients" }
                table.ingredients {
                    thead {
                        tr { th { "Ingredient" } th { "Amount" } th { "Notes" } }
                    }
                    tbody {
                        @for line in &meta.ingredients {
                            tr {
                                td { (line.name) }
                                td { (line.amount) }
                                td { (line.notes.as_deref().unwrap_or("")) }
                            }
                        }
                    }
                }
                (markdown(&recipe.body))
                @if !meta.tags.is_empty() {
                    p {
                        @for tag in &meta.tags {
                            span.tag { (tag) }
                        }
                    }
                }
                @if !related.is_empty() {
                    section {
                        h2 { "Related Recipes" }
                        ul.content-list {
                            @for other in &related {
                                li { a href=(config.href(&recipe_path(other))) { (other.meta.title) } }
                            }
                        }
                    }
                }
            }
        }
    };

    let head = html! {
        (json_ld(&how_to))
        (trail_json_ld(config, &trail))
    };

    base_document(
        config,
        &format!("{} · {}", meta.title, config.site.name),
        &meta.description,
        head,
        content,
    )
}

/// Renders the guide listing.
fn render_guide_index(config: &SiteConfig, guides: &[&Guide], pages: &[&StaticPage]) -> Markup {
    let trail = [("Home", "/"), ("Guides", "/guides/")];

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            h1 { "Guides" }
            ul.content-list {
                @for guide in guides {
                    li {
                        a href=(config.href(&guide_path(guide))) { (guide.meta.title) }
                        p.meta-line {
                            (taxonomy::icon(&guide.meta.category)) " "
                            (taxonomy::label(&guide.meta.category))
                            " · " (guide.meta.description)
                        }
                    }
                }
            }
        }
    };

    base_document(
        config,
        &format!("Guides · {}", config.site.name),
        "Background reading on ingredients, methods, and healthier habits",
        trail_json_ld(config, &trail),
        content,
    )
}

/// Renders one guide page.
fn render_guide_page(config: &SiteConfig, guide: &Guide, pages: &[&StaticPage]) -> Markup {
    let meta = &guide.meta;
    let path = guide_path(guide);
    let trail = [
        ("Home", "/"),
        ("Guides", "/guides/"),
        (meta.title.as_str(), path.as_str()),
    ];

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            article {
                h1 { (meta.title) }
                p.meta-line {
                    (taxonomy::icon(&meta.category)) " "
                    a href=(config.href(&category_path(&meta.category))) {
                        (taxonomy::label(&meta.category))
                    }
                }
                (published_line(meta.publish_date, meta.updated_date))
                (markdown(&guide.body))
                @if !meta.tags.is_empty() {
                    p {
                        @for tag in &meta.tags {
                            span.tag { (tag) }
                        }
                    }
                }
            }
        }
    };

    base_document(
        config,
        &format!("{} · {}", meta.title, config.site.name),
        &meta.description,
        trail_json_ld(config, &trail),
        content,
    )
}

/// Renders the ingredient reference listing, grouped by tier.
fn render_ingredient_index(
    config: &SiteConfig,
    ingredients: &[&Ingredient],
    pages: &[&StaticPage],
) -> Markup {
    let trail = [("Home", "/"), ("Ingredients", "/ingredients/")];

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            h1 { "Ingredients" }
            @for tier in [Tier::Core, Tier::Secondary, Tier::Specialty] {
                @let in_tier = ingredients.iter().filter(|i| i.meta.category == tier).collect::<Vec<_>>();
                @if !in_tier.is_empty() {
                    section {
                        h2 { (capitalize(tier.as_str())) }
                        ul.content-list {
                            @for ingredient in &in_tier {
                                li {
                                    a href=(config.href(&ingredient_path(ingredient))) { (ingredient.meta.name) }
                                    p.meta-line { (ingredient.meta.description) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(
        config,
        &format!("Ingredients · {}", config.site.name),
        "What each ingredient does, how to use it, and how to store it",
        trail_json_ld(config, &trail),
        content,
    )
}

/// Renders one ingredient reference page.
fn render_ingredient_page(
    config: &SiteConfig,
    ingredient: &Ingredient,
    pages: &[&StaticPage],
) -> Markup {
    let meta = &ingredient.meta;
    let path = ingredient_path(ingredient);
    let trail = [
        ("Home", "/"),
        ("Ingredients", "/ingredients/"),
        (meta.name.as_str(), path.as_str()),
    ];

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            article {
                h1 { (meta.name) }
                p.meta-line { (capitalize(meta.category.as_str())) " ingredient" }
                p { (meta.description) }
                p { (meta.science_summary) }
                @if !meta.safety_notes.is_empty() {
                    aside.safety {
                        h2 { "Safety" }
                        ul {
                            @for note in &meta.safety_notes {
                                li { (note) }
                            }
                        }
                    }
                }
                @if meta.storage_instructions.is_some() || meta.shelf_life.is_some() {
                    dl.recipe-facts {
                        @if let Some(storage) = &meta.storage_instructions {
                            div { dt { "Storage" } dd { (storage) } }
                        }
                        @if let Some(shelf_life) = &meta.shelf_life {
                            div { dt { "Shelf life" } dd { (shelf_life) } }
                        }
                    }
                }
                (markdown(&ingredient.body))
            }
        }
    };

    base_document(
        config,
        &format!("{} · {}", meta.name, config.site.name),
        &meta.description,
        trail_json_ld(config, &trail),
        content,
    )
}

/// Renders a static page.
fn render_static_page(config: &SiteConfig, page: &StaticPage, pages: &[&StaticPage]) -> Markup {
    let meta = &page.meta;
    let path = page_path(page);
    let trail = [("Home", "/"), (meta.title.as_str(), path.as_str())];

    let content = html! {
        (site_header(config, pages))
        main {
            (trail_nav(config, &trail))
            article {
                h1 { (meta.title) }
                @if let Some(updated) = meta.updated_date {
                    p.meta-line { "Updated " (updated.format("%B %-d, %Y")) }
                }
                (markdown(&page.body))
            }
        }
    };

    base_document(
        config,
        &format!("{} · {}", meta.title, config.site.name),
        &meta.description,
        trail_json_ld(config, &trail),
        content,
    )
}

// ============================================================================
// Search index
// ============================================================================

/// One entry of the client-side search index.
#[derive(Debug, Serialize)]
pub struct SearchEntry {
    pub kind: &'static str,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
}

/// Build the search index for all published content, in page order.
fn search_index(
    recipes: &[&Recipe],
    guides: &[&Guide],
    ingredients: &[&Ingredient],
    pages: &[&StaticPage],
    config: &SiteConfig,
) -> Vec<SearchEntry> {
    let mut entries = Vec::new();

    for recipe in recipes {
        entries.push(SearchEntry {
            kind: "recipe",
            title: recipe.meta.title.clone(),
            description: recipe.meta.description.clone(),
            url: config.href(&recipe_path(recipe)),
            category: taxonomy::label(&recipe.meta.category).to_string(),
        });
    }
    for guide in guides {
        entries.push(SearchEntry {
            kind: "guide",
            title: guide.meta.title.clone(),
            description: guide.meta.description.clone(),
            url: config.href(&guide_path(guide)),
            category: taxonomy::label(&guide.meta.category).to_string(),
        });
    }
    for ingredient in ingredients {
        entries.push(SearchEntry {
            kind: "ingredient",
            title: ingredient.meta.name.clone(),
            description: ingredient.meta.description.clone(),
            url: config.href(&ingredient_path(ingredient)),
            category: capitalize(ingredient.meta.category.as_str()),
        });
    }
    for page in pages {
        entries.push(SearchEntry {
            kind: "page",
            title: page.meta.title.clone(),
            description: page.meta.description.clone(),
            url: config.href(&page_path(page)),
            category: String::new(),
        });
    }

    entries
}

// ============================================================================
// Tests
// ============================================================================
