//! Body section rules for content kinds with a fixed article shape.
//!
//! Recipes and ingredient references keep their freeform markdown organized
//! under a closed set of recognized `## ` headings in a fixed relative
//! order, so every article reads the same way and downstream consumers (the
//! HowTo generator reads the `## Steps` list) can rely on the structure.
//!
//! Guides and static pages are freeform and have no rules here.
//!
//! Only level-2 headings participate; authors are free to use `### ` and
//! deeper within a section.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SectionError {
    #[error("{file}: missing required section '## {heading}'")]
    MissingHeading { file: PathBuf, heading: String },
    #[error("{file}: unrecognized section '## {heading}' at line {line}")]
    UnrecognizedHeading {
        file: PathBuf,
        heading: String,
        line: usize,
    },
    #[error("{file}: duplicate section '## {heading}'")]
    DuplicateHeading { file: PathBuf, heading: String },
    #[error("{file}: section '## {second}' must come before '## {first}'")]
    OutOfOrder {
        file: PathBuf,
        first: String,
        second: String,
    },
}

/// The section contract for one content kind.
#[derive(Debug, Clone, Copy)]
pub struct SectionRules {
    /// Recognized headings in their required relative order.
    pub recognized: &'static [&'static str],
    /// Headings that must be present.
    pub required: &'static [&'static str],
}

pub static RECIPE_SECTIONS: SectionRules = SectionRules {
    recognized: &["Steps", "Why It Works", "Alternatives", "Tips"],
    required: &["Steps", "Why It Works"],
};

pub static INGREDIENT_SECTIONS: SectionRules = SectionRules {
    recognized: &["What It Does", "How to Use It", "Buying & Storage"],
    required: &["What It Does", "How to Use It", "Buying & Storage"],
};

/// Collect `## ` headings with their 1-based line numbers.
fn headings(body: &str) -> Vec<(&str, usize)> {
    body.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix("## ")
                .map(|rest| (rest.trim(), i + 1))
        })
        .collect()
}

/// Check a markdown body against a kind's section contract.
///
/// Every `## ` heading must be recognized, appear at most once, and appear
/// in the contract's relative order; every required heading must be present.
pub fn check(rules: &SectionRules, body: &str, file: &Path) -> Result<(), SectionError> {
    let found = headings(body);

    let mut last_rank: Option<usize> = None;
    for (heading, line) in &found {
        let Some(rank) = rules.recognized.iter().position(|r| r == heading) else {
            return Err(SectionError::UnrecognizedHeading {
                file: file.to_path_buf(),
                heading: heading.to_string(),
                line: *line,
            });
        };
        match last_rank {
            Some(prev) if rank == prev => {
                return Err(SectionError::DuplicateHeading {
                    file: file.to_path_buf(),
                    heading: heading.to_string(),
                });
            }
            Some(prev) if rank < prev => {
                return Err(SectionError::OutOfOrder {
                    file: file.to_path_buf(),
                    first: rules.recognized[prev].to_string(),
                    second: heading.to_string(),
                });
            }
            _ => {}
        }
        last_rank = Some(rank);
    }

    for required in rules.required {
        if !found.iter().any(|(heading, _)| heading == required) {
            return Err(SectionError::MissingHeading {
                file: file.to_path_buf(),
                heading: required.to_string(),
            });
        }
    }

    Ok(())
}

/// Extract the markdown between `## <heading>` and the next `## ` heading.
///
/// Returns `None` when the section is absent.
pub fn section(body: &str, heading: &str) -> Option<String> {
    let mut collected: Option<Vec<&str>> = None;
    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(found) = trimmed.strip_prefix("## ") {
            if collected.is_some() {
                break;
            }
            if found.trim() == heading {
                collected = Some(Vec::new());
            }
            continue;
        }
        if let Some(lines) = collected.as_mut() {
            lines.push(line);
        }
    }
    collected.map(|lines| lines.join("\n").trim().to_string())
}

/// Plain-text items of the top-level list in a markdown fragment, in order.
///
/// Inline formatting is flattened to its text; nested lists fold into their
/// parent item. Non-list content in the fragment is ignored.
pub fn list_items(markdown: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut list_depth = 0usize;
    let mut current: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => list_depth -= 1,
            Event::Start(Tag::Item) if list_depth == 1 => current = Some(String::new()),
            Event::End(TagEnd::Item) if list_depth == 1 => {
                if let Some(text) = current.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        items.push(text);
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(buf) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    items
}

/// Ordered step texts from a recipe body's `## Steps` section.
pub fn steps(body: &str) -> Vec<String> {
    section(body, "Steps")
        .map(|fragment| list_items(&fragment))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPE_BODY: &str = "\
Intro paragraph about the cleaner.

## Steps

1. Combine vinegar and water in a spray bottle.
2. Add the essential oil and **shake well**.
3. Label the bottle.

## Why It Works

Acetic acid dissolves mineral deposits.

## Alternatives

Use lemon juice when the smell matters.

## Tips

Store away from sunlight.
";

    const INGREDIENT_BODY: &str = "\
## What It Does

Scrubs and deodorizes.

## How to Use It

Sprinkle, scrub, rinse.

## Buying & Storage

Any grocery store; keep dry.
";

    // =========================================================================
    // check()
    // =========================================================================

    #[test]
    fn complete_recipe_body_passes() {
        check(&RECIPE_SECTIONS, RECIPE_BODY, Path::new("r.md")).unwrap();
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let body = "## Steps\n\n1. Mix.\n\n## Why It Works\n\nChemistry.\n";
        check(&RECIPE_SECTIONS, body, Path::new("r.md")).unwrap();
    }

    #[test]
    fn missing_steps_is_an_error() {
        let body = "## Why It Works\n\nChemistry.\n";
        let err = check(&RECIPE_SECTIONS, body, Path::new("r.md")).unwrap_err();
        assert!(
            matches!(err, SectionError::MissingHeading { ref heading, .. } if heading == "Steps"),
            "{err}"
        );
    }

    #[test]
    fn missing_why_it_works_is_an_error() {
        let body = "## Steps\n\n1. Mix.\n";
        let err = check(&RECIPE_SECTIONS, body, Path::new("r.md")).unwrap_err();
        assert!(err.to_string().contains("Why It Works"));
    }

    #[test]
    fn unrecognized_heading_is_an_error_with_line() {
        let body = "## Steps\n\n1. Mix.\n\n## Why It Works\n\nOk.\n\n## How to Make It\n\nNo.\n";
        let err = check(&RECIPE_SECTIONS, body, Path::new("r.md")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("How to Make It"), "{message}");
        assert!(message.contains("line 9"), "{message}");
    }

    #[test]
    fn tips_before_alternatives_is_out_of_order() {
        let body = "\
## Steps

1. Mix.

## Why It Works

Ok.

## Tips

Tip.

## Alternatives

Alt.
";
        let err = check(&RECIPE_SECTIONS, body, Path::new("r.md")).unwrap_err();
        assert!(
            matches!(
                err,
                SectionError::OutOfOrder { ref first, ref second, .. }
                    if first == "Tips" && second == "Alternatives"
            ),
            "{err}"
        );
    }

    #[test]
    fn duplicate_heading_is_an_error() {
        let body = "## Steps\n\n1. Mix.\n\n## Steps\n\n1. Again.\n\n## Why It Works\n\nOk.\n";
        let err = check(&RECIPE_SECTIONS, body, Path::new("r.md")).unwrap_err();
        assert!(matches!(err, SectionError::DuplicateHeading { .. }), "{err}");
    }

    #[test]
    fn sub_headings_are_ignored() {
        let body = "## Steps\n\n1. Mix.\n\n### Detail\n\nFine.\n\n## Why It Works\n\nOk.\n";
        check(&RECIPE_SECTIONS, body, Path::new("r.md")).unwrap();
    }

    #[test]
    fn ingredient_body_requires_all_three_sections_in_order() {
        check(&INGREDIENT_SECTIONS, INGREDIENT_BODY, Path::new("i.md")).unwrap();

        let reordered = "\
## How to Use It

Use it.

## What It Does

Does things.

## Buying & Storage

Keep dry.
";
        let err = check(&INGREDIENT_SECTIONS, reordered, Path::new("i.md")).unwrap_err();
        assert!(matches!(err, SectionError::OutOfOrder { .. }), "{err}");

        let incomplete = "## What It Does\n\nDoes things.\n\n## How to Use It\n\nUse it.\n";
        let err = check(&INGREDIENT_SECTIONS, incomplete, Path::new("i.md")).unwrap_err();
        assert!(err.to_string().contains("Buying & Storage"));
    }

    // =========================================================================
    // section() and steps()
    // =========================================================================

    #[test]
    fn section_returns_text_up_to_next_heading() {
        let why = section(RECIPE_BODY, "Why It Works").unwrap();
        assert_eq!(why, "Acetic acid dissolves mineral deposits.");
    }

    #[test]
    fn section_returns_none_when_absent() {
        assert!(section(RECIPE_BODY, "Troubleshooting").is_none());
    }

    #[test]
    fn section_at_end_of_body_extends_to_eof() {
        let tips = section(RECIPE_BODY, "Tips").unwrap();
        assert_eq!(tips, "Store away from sunlight.");
    }

    #[test]
    fn steps_extracts_ordered_list_in_order() {
        let extracted = steps(RECIPE_BODY);
        assert_eq!(
            extracted,
            vec![
                "Combine vinegar and water in a spray bottle.",
                "Add the essential oil and shake well.",
                "Label the bottle.",
            ]
        );
    }

    #[test]
    fn steps_empty_when_section_missing_or_listless() {
        assert!(steps("No sections here.").is_empty());
        assert!(steps("## Steps\n\nJust prose, no list.\n").is_empty());
    }

    #[test]
    fn list_items_flattens_inline_formatting() {
        let items = list_items("- use `baking soda`\n- **scrub** gently\n");
        assert_eq!(items, vec!["use baking soda", "scrub gently"]);
    }

    #[test]
    fn list_items_folds_nested_lists_into_parent() {
        let items = list_items("1. Mix\n   - vinegar\n   - water\n2. Pour\n");
        assert_eq!(items.len(), 2);
        assert!(items[0].contains("Mix"));
        assert!(items[0].contains("vinegar"));
        assert_eq!(items[1], "Pour");
    }
}
