//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content tree, validates every
//! file against its kind's schema and section rules, and produces the
//! structured manifest the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                          # Content root
//! ├── site.toml                     # Site configuration (optional)
//! ├── recipes/
//! │   ├── kitchen/                  # Optional category directory
//! │   │   ├── all-purpose-cleaner.md
//! │   │   └── oven-paste.md
//! │   └── bathroom/
//! │       └── tub-scrub.md
//! ├── guides/
//! │   └── cleaning-vinegar.md
//! ├── ingredients/
//! │   ├── baking-soda.md
//! │   └── white-vinegar.md
//! └── pages/
//!     ├── about.md
//!     └── contact.md
//! ```
//!
//! Every content file is markdown with a `---`-delimited YAML frontmatter
//! header. Recipes and guides may nest one level under a directory named
//! after their category; the directory then has to agree with the
//! frontmatter `category`, which catches mis-filed content at the cheapest
//! possible point.
//!
//! ## Validation
//!
//! A file either fully validates or the build fails for that file:
//!
//! - frontmatter must parse and satisfy the kind's schema ([`crate::schema`])
//! - recipe and ingredient bodies must satisfy their section rules
//!   ([`crate::sections`])
//! - a recipe's `## Steps` section must contain at least one list item
//! - slugs must be unique within a kind
//!
//! Draft content validates like everything else and is carried in the
//! manifest with its `draft` flag set; the generate stage skips it.

use crate::config::{self, SiteConfig};
use crate::schema::{self, Schema, SchemaError};
use crate::sections::{self, SectionError};
use crate::types::{Guide, Ingredient, Recipe, StaticPage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error("{0}: missing '---' frontmatter block")]
    MissingFrontmatter(PathBuf),
    #[error("{file}: frontmatter is not a YAML mapping: {source}")]
    InvalidYaml {
        file: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("{file}: frontmatter does not deserialize: {source}")]
    Meta {
        file: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("{file}: category '{frontmatter}' does not match directory '{directory}'")]
    CategoryMismatch {
        file: PathBuf,
        frontmatter: String,
        directory: String,
    },
    #[error("{0}: '## Steps' contains no list items")]
    NoSteps(PathBuf),
    #[error("{file}: duplicate slug '{slug}'")]
    DuplicateSlug { file: PathBuf, slug: String },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub recipes: Vec<Recipe>,
    pub guides: Vec<Guide>,
    pub ingredients: Vec<Ingredient>,
    pub pages: Vec<StaticPage>,
    pub config: SiteConfig,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;

    let mut recipes = Vec::new();
    for path in content_files(&root.join("recipes"))? {
        recipes.push(scan_recipe(&path, root)?);
    }
    recipes.sort_by(|a, b| a.slug.cmp(&b.slug));
    reject_duplicate_slugs(recipes.iter().map(|r| (r.slug.as_str(), r.source_path.as_str())))?;

    let mut guides = Vec::new();
    for path in content_files(&root.join("guides"))? {
        guides.push(scan_guide(&path, root)?);
    }
    guides.sort_by(|a, b| a.slug.cmp(&b.slug));
    reject_duplicate_slugs(guides.iter().map(|g| (g.slug.as_str(), g.source_path.as_str())))?;

    let mut ingredients = Vec::new();
    for path in content_files(&root.join("ingredients"))? {
        ingredients.push(scan_ingredient(&path, root)?);
    }
    ingredients.sort_by(|a, b| a.slug.cmp(&b.slug));
    reject_duplicate_slugs(
        ingredients
            .iter()
            .map(|i| (i.slug.as_str(), i.source_path.as_str())),
    )?;

    let mut pages = Vec::new();
    for path in content_files(&root.join("pages"))? {
        pages.push(scan_page(&path, root)?);
    }
    pages.sort_by(|a, b| a.slug.cmp(&b.slug));
    reject_duplicate_slugs(pages.iter().map(|p| (p.slug.as_str(), p.source_path.as_str())))?;

    Ok(Manifest {
        recipes,
        guides,
        ingredients,
        pages,
        config,
    })
}

/// All `.md` files under `dir`, sorted by path for deterministic output.
///
/// A missing directory is an empty kind, not an error, so a catalog can
/// start with recipes only and grow the other kinds later.
fn content_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let is_md = entry
            .path()
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if entry.file_type().is_file() && is_md {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn scan_recipe(path: &Path, root: &Path) -> Result<Recipe, ScanError> {
    let rel = rel_path(path, root);
    let (meta, body): (crate::types::RecipeMeta, String) =
        parse_validated(path, &rel, &schema::RECIPE)?;

    check_category_dir(path, root, "recipes", &meta.category, &rel)?;
    sections::check(&sections::RECIPE_SECTIONS, &body, &rel)?;

    let steps = sections::steps(&body);
    if steps.is_empty() {
        return Err(ScanError::NoSteps(rel));
    }

    Ok(Recipe {
        slug: file_slug(path),
        source_path: rel.to_string_lossy().into_owned(),
        meta,
        body,
        steps,
    })
}

fn scan_guide(path: &Path, root: &Path) -> Result<Guide, ScanError> {
    let rel = rel_path(path, root);
    let (meta, body): (crate::types::GuideMeta, String) =
        parse_validated(path, &rel, &schema::GUIDE)?;

    check_category_dir(path, root, "guides", &meta.category, &rel)?;

    Ok(Guide {
        slug: file_slug(path),
        source_path: rel.to_string_lossy().into_owned(),
        meta,
        body,
    })
}

fn scan_ingredient(path: &Path, root: &Path) -> Result<Ingredient, ScanError> {
    let rel = rel_path(path, root);
    let (meta, body): (crate::types::IngredientMeta, String) =
        parse_validated(path, &rel, &schema::INGREDIENT)?;

    sections::check(&sections::INGREDIENT_SECTIONS, &body, &rel)?;

    Ok(Ingredient {
        // Ingredients declare their slug; the file name is just housekeeping.
        slug: meta.slug.clone(),
        source_path: rel.to_string_lossy().into_owned(),
        meta,
        body,
    })
}

fn scan_page(path: &Path, root: &Path) -> Result<StaticPage, ScanError> {
    let rel = rel_path(path, root);
    let (meta, body): (crate::types::PageMeta, String) =
        parse_validated(path, &rel, &schema::PAGE)?;

    Ok(StaticPage {
        slug: file_slug(path),
        source_path: rel.to_string_lossy().into_owned(),
        meta,
        body,
    })
}

/// Read a file, split its frontmatter, validate, and deserialize the
/// metadata. The common front half of every kind's scanner.
fn parse_validated<T: DeserializeOwned>(
    path: &Path,
    rel: &Path,
    schema: &Schema,
) -> Result<(T, String), ScanError> {
    let content = fs::read_to_string(path)?;
    let (yaml, body) = split_frontmatter(&content)
        .ok_or_else(|| ScanError::MissingFrontmatter(rel.to_path_buf()))?;

    let mut map: Mapping = serde_yaml::from_str(yaml).map_err(|source| ScanError::InvalidYaml {
        file: rel.to_path_buf(),
        source,
    })?;

    schema::validate(schema, &mut map, rel)?;

    let meta = serde_yaml::from_value(Value::Mapping(map)).map_err(|source| ScanError::Meta {
        file: rel.to_path_buf(),
        source,
    })?;

    Ok((meta, body.to_string()))
}

/// Split `---`-delimited YAML frontmatter from the markdown body.
///
/// The opening `---` must be the first line; the closing `---` must stand
/// alone on its own line. Returns `None` when either delimiter is absent.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let after_open = content.strip_prefix("---")?;
    let after_open = after_open
        .strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))?;

    let mut search_from = 0;
    loop {
        let idx = after_open[search_from..].find("\n---")? + search_from;
        let yaml = &after_open[..idx];
        let after = &after_open[idx + "\n---".len()..];
        let after = after.strip_prefix('\r').unwrap_or(after);
        if after.is_empty() {
            return Some((yaml, ""));
        }
        if let Some(body) = after.strip_prefix('\n') {
            return Some((yaml, body));
        }
        search_from = idx + 1;
    }
}

/// When a file nests under a directory inside its kind root, that directory
/// must agree with the frontmatter category.
fn check_category_dir(
    path: &Path,
    root: &Path,
    kind_dir: &str,
    category: &str,
    rel: &Path,
) -> Result<(), ScanError> {
    let kind_root = root.join(kind_dir);
    let parent = path.parent().unwrap_or(&kind_root);
    if parent == kind_root {
        return Ok(());
    }
    let directory = parent
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if directory != category {
        return Err(ScanError::CategoryMismatch {
            file: rel.to_path_buf(),
            frontmatter: category.to_string(),
            directory,
        });
    }
    Ok(())
}

/// URL slug from the file stem.
fn file_slug(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn rel_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn reject_duplicate_slugs<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), ScanError> {
    let mut seen = HashSet::new();
    for (slug, source_path) in entries {
        if !seen.insert(slug) {
            return Err(ScanError::DuplicateSlug {
                file: PathBuf::from(source_path),
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}
