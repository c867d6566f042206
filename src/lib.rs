//! # Clean Pantry
//!
//! A static site generator for a DIY household-cleaning recipe catalog.
//! Content lives as markdown files with YAML frontmatter, organized by a
//! closed category taxonomy, validated at build time, and rendered into a
//! plain HTML site with schema.org linked data and a client-side search
//! index.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! The build processes content through two independent stages joined by a
//! JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json   (validated structured data)
//! 2. Generate  manifest  →  dist/           (final HTML site + search index)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Fail-fast validation**: a content file either fully validates during
//!   scan or the build stops naming the file and field; nothing partial
//!   reaches the generate stage.
//! - **Testability**: generation is a pure function of the manifest, so
//!   rendering tests need literal structs, not a content tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`taxonomy`] | The 27-category registry and super-category grouping, behind total, fallback-safe accessors |
//! | [`schema`] | Declarative frontmatter schemas for the four content kinds, interpreted by one generic validator |
//! | [`sections`] | Closed `## ` heading sets and their required order for recipe and ingredient bodies |
//! | [`types`] | Validated metadata structs serialized between stages |
//! | [`scan`] | Stage 1 — walks the content tree, validates, produces the manifest |
//! | [`generate`] | Stage 2 — renders the HTML site and search index with Maud |
//! | [`linked_data`] | Pure schema.org HowTo/BreadcrumbList/WebSite transforms |
//! | [`format`] | ISO-8601 duration humanizing and small text helpers |
//! | [`config`] | `site.toml` loading, validation, and CSS variable generation |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## One Table for the Taxonomy
//!
//! The category registry and the frontmatter schema consume the same
//! 27-entry table: the schema's enumeration is a `const`-derived view of
//! the registry ([`taxonomy::SLUGS`]). The two surfaces cannot drift, which
//! is otherwise the classic failure mode of a category list maintained in
//! two places.
//!
//! ## Total Lookups, Fatal Validation
//!
//! The build has exactly two failure policies. Frontmatter validation is
//! fatal: a file that misses a required field, breaks an enum, or misorders
//! its sections stops the build with the file named. Display lookups are
//! total: an unknown category slug renders with an identity label and a
//! fallback icon rather than erroring, so metadata drift never breaks
//! rendering. The registry's raw table stays private to keep that contract
//! in one place.
//!
//! ## Schema as Data
//!
//! Each content kind's frontmatter contract is a declarative field table
//! interpreted by one generic validator, not hand-written per-field checks.
//! The four kinds stay auditable side by side, and every kind gets the same
//! error text, defaulting, and date coercion for free.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error.
//! - **Type-safe**: template variables are Rust expressions.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or drift.
//!
//! ## Plain Output
//!
//! The generated site is plain HTML, one stylesheet, and ~80 lines of
//! vanilla JavaScript for the search dialog. No framework, no hydration;
//! the site can be dropped on any file server.

pub mod config;
pub mod format;
pub mod generate;
pub mod linked_data;
pub mod output;
pub mod scan;
pub mod schema;
pub mod sections;
pub mod taxonomy;
pub mod types;
