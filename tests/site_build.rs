//! End-to-end build tests: author a small content tree, run the scan and
//! generate stages, and inspect the emitted site.

use clean_pantry::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Extract the embedded JSON-LD payloads of a page, in document order.
fn json_ld_payloads(html: &str) -> Vec<serde_json::Value> {
    let marker = r#"<script type="application/ld+json">"#;
    let mut payloads = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(marker) {
        let after = &rest[start + marker.len()..];
        let end = after.find("</script>").unwrap();
        payloads.push(serde_json::from_str(&after[..end]).unwrap());
        rest = &after[end..];
    }
    payloads
}

fn author_site(content: &Path) {
    write(
        content,
        "site.toml",
        "[site]\nname = \"The Clean Pantry\"\nurl = \"https://thecleanpantry.com\"\n",
    );

    write(
        content,
        "recipes/kitchen/all-purpose-cleaner.md",
        "---\n\
title: All-Purpose Cleaner\n\
description: A simple vinegar cleaner for counters and sinks\n\
category: kitchen\n\
difficulty: beginner\n\
prepTime: PT2M\n\
totalTime: PT5M\n\
yield: 16 oz\n\
ingredients:\n\
  - name: White vinegar\n\
    amount: 1 cup\n\
  - name: Water\n\
    amount: 1 cup\n\
featured: true\n\
publishDate: 2025-01-15\n\
---\n\
\n\
A counter spray from two pantry staples.\n\
\n\
## Steps\n\
\n\
1. Combine vinegar and water in a spray bottle.\n\
2. Shake well before each use.\n\
\n\
## Why It Works\n\
\n\
Acetic acid dissolves mineral film and cuts light grease.\n\
\n\
## Tips\n\
\n\
Skip unsealed stone; the acid etches it.\n",
    );

    write(
        content,
        "recipes/bathroom/secret-scrub.md",
        "---\n\
title: Secret Scrub\n\
description: Still being tested\n\
category: bathroom\n\
difficulty: intermediate\n\
prepTime: PT5M\n\
totalTime: PT10M\n\
yield: 1 jar\n\
ingredients:\n\
  - name: Baking soda\n\
    amount: 1 cup\n\
draft: true\n\
publishDate: 2025-03-01\n\
---\n\
\n\
## Steps\n\
\n\
1. Mix everything.\n\
\n\
## Why It Works\n\
\n\
It scrubs.\n",
    );

    write(
        content,
        "guides/cleaning-vinegar.md",
        "---\n\
title: Understanding Cleaning Vinegar\n\
description: What makes cleaning vinegar different and when to reach for it\n\
category: kitchen\n\
publishDate: 2025-02-01\n\
---\n\
\n\
Cleaning vinegar is about 6% acetic acid instead of 5%.\n",
    );

    write(
        content,
        "ingredients/baking-soda.md",
        "---\n\
name: Baking Soda\n\
slug: baking-soda\n\
description: Mild alkaline powder that scrubs and deodorizes\n\
category: core\n\
scienceSummary: Sodium bicarbonate neutralizes acids and absorbs odors.\n\
storageInstructions: Airtight container, away from moisture\n\
publishDate: 2025-01-10\n\
---\n\
\n\
## What It Does\n\
\n\
Gentle abrasive and odor absorber.\n\
\n\
## How to Use It\n\
\n\
Sprinkle, scrub, rinse.\n\
\n\
## Buying & Storage\n\
\n\
Any grocery store carries it.\n",
    );

    write(
        content,
        "pages/about.md",
        "---\n\
title: About\n\
description: Why we make our own cleaning products\n\
---\n\
\n\
We publish recipes we actually use at home.\n",
    );
}

fn build_site() -> (TempDir, TempDir) {
    let content = TempDir::new().unwrap();
    let dist = TempDir::new().unwrap();
    author_site(content.path());

    let manifest = scan::scan(content.path()).unwrap();
    generate::generate_site(&manifest, dist.path()).unwrap();
    (content, dist)
}

#[test]
fn build_produces_the_expected_page_tree() {
    let (_content, dist) = build_site();
    let dist = dist.path();

    assert!(dist.join("index.html").exists());
    assert!(dist.join("style.css").exists());
    assert!(dist.join("search.js").exists());
    assert!(dist.join("search-index.json").exists());
    assert!(
        dist.join("recipes/kitchen/all-purpose-cleaner/index.html")
            .exists()
    );
    assert!(dist.join("guides/cleaning-vinegar/index.html").exists());
    assert!(dist.join("ingredients/baking-soda/index.html").exists());
    assert!(dist.join("about/index.html").exists());
    assert!(dist.join("browse/home-cleaning/index.html").exists());

    // Every registered category gets a page, populated or not.
    assert!(dist.join("categories/kitchen/index.html").exists());
    assert!(dist.join("categories/travel/index.html").exists());
}

#[test]
fn drafts_are_validated_but_never_published() {
    let (_content, dist) = build_site();
    let dist = dist.path();

    assert!(!dist.join("recipes/bathroom/secret-scrub").exists());

    let index: serde_json::Value =
        serde_json::from_str(&read(dist, "search-index.json")).unwrap();
    let titles: Vec<&str> = index
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"All-Purpose Cleaner"));
    assert!(!titles.contains(&"Secret Scrub"));
}

#[test]
fn index_page_carries_website_descriptor_and_featured_recipe() {
    let (_content, dist) = build_site();
    let html = read(dist.path(), "index.html");

    let payloads = json_ld_payloads(&html);
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0]["@type"], "WebSite");
    assert_eq!(payloads[0]["name"], "The Clean Pantry");

    assert!(html.contains("Featured Recipes"));
    assert!(html.contains("All-Purpose Cleaner"));
    assert!(html.contains("Family &amp; Pets")); // super-category card
}

#[test]
fn recipe_page_embeds_how_to_matching_the_document() {
    let (_content, dist) = build_site();
    let html = read(
        dist.path(),
        "recipes/kitchen/all-purpose-cleaner/index.html",
    );

    let payloads = json_ld_payloads(&html);
    assert_eq!(payloads.len(), 2);

    let how_to = &payloads[0];
    assert_eq!(how_to["@type"], "HowTo");
    assert_eq!(how_to["name"], "All-Purpose Cleaner");
    assert_eq!(how_to["supply"].as_array().unwrap().len(), 2);
    assert_eq!(how_to["supply"][0]["requiredQuantity"], "1 cup");
    let steps = how_to["step"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["position"], 1);
    assert_eq!(
        steps[0]["text"],
        "Combine vinegar and water in a spray bottle."
    );
    assert_eq!(steps[1]["position"], 2);
    assert_eq!(
        how_to["url"],
        "https://thecleanpantry.com/recipes/kitchen/all-purpose-cleaner/"
    );

    let crumbs = &payloads[1];
    assert_eq!(crumbs["@type"], "BreadcrumbList");
    let items = crumbs["itemListElement"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Home");
    assert_eq!(items[1]["name"], "Kitchen Cleaning");
    assert_eq!(items[2]["position"], 3);
}

#[test]
fn recipe_page_renders_body_and_humanized_durations() {
    let (_content, dist) = build_site();
    let html = read(
        dist.path(),
        "recipes/kitchen/all-purpose-cleaner/index.html",
    );

    assert!(html.contains("2 min"));
    assert!(html.contains("5 min"));
    assert!(html.contains("Acetic acid dissolves mineral film"));
    assert!(html.contains("<h2>Why It Works</h2>"));
}

#[test]
fn category_page_lists_its_recipes_and_guides() {
    let (_content, dist) = build_site();
    let html = read(dist.path(), "categories/kitchen/index.html");

    assert!(html.contains("All-Purpose Cleaner"));
    assert!(html.contains("Understanding Cleaning Vinegar"));

    // The draft bathroom recipe leaves its category page empty.
    let bathroom = read(dist.path(), "categories/bathroom/index.html");
    assert!(bathroom.contains("Nothing here yet"));
}

#[test]
fn search_index_entries_carry_kind_url_and_category_label() {
    let (_content, dist) = build_site();
    let index: serde_json::Value =
        serde_json::from_str(&read(dist.path(), "search-index.json")).unwrap();
    let entries = index.as_array().unwrap();

    let recipe = entries.iter().find(|e| e["kind"] == "recipe").unwrap();
    assert_eq!(recipe["url"], "/recipes/kitchen/all-purpose-cleaner/");
    assert_eq!(recipe["category"], "Kitchen Cleaning");

    let ingredient = entries.iter().find(|e| e["kind"] == "ingredient").unwrap();
    assert_eq!(ingredient["category"], "Core");

    assert!(entries.iter().any(|e| e["kind"] == "guide"));
    assert!(entries.iter().any(|e| e["kind"] == "page"));
}

#[test]
fn generate_stage_reads_the_manifest_from_disk() {
    let content = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let dist = TempDir::new().unwrap();
    author_site(content.path());

    let manifest = scan::scan(content.path()).unwrap();
    let manifest_path = temp.path().join("manifest.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    generate::generate(&manifest_path, dist.path()).unwrap();
    assert!(dist.path().join("index.html").exists());
}

#[test]
fn invalid_content_fails_the_scan_with_the_file_named() {
    let content = TempDir::new().unwrap();
    author_site(content.path());
    write(
        content.path(),
        "recipes/kitchen/broken.md",
        "---\ntitle: Broken\ndescription: No category\ndifficulty: beginner\n\
prepTime: PT1M\ntotalTime: PT1M\nyield: 1\ningredients: []\npublishDate: 2025-01-01\n---\n\
\n## Steps\n\n1. Mix.\n\n## Why It Works\n\nOk.\n",
    );

    let err = scan::scan(content.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("broken.md"), "{message}");
    assert!(message.contains("category"), "{message}");
}
