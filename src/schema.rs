//! Declarative frontmatter schemas and the generic validator behind them.
//!
//! Each content kind (recipe, guide, ingredient, static page) declares its
//! fields as data: name, type, required/optional/default, enum constraint,
//! length bound. One generic interpreter walks the declaration against a
//! parsed YAML mapping, so adding a field to a kind is a one-line table edit
//! and all four kinds share the same failure behavior.
//!
//! ## Validation contract
//!
//! - Required fields must be present and type-correct, or validation fails
//!   with an error naming the file and field.
//! - Optional fields with a declared default are filled in when absent
//!   (empty list, `false`). A file either fully validates or is rejected;
//!   nothing partial comes out of this module.
//! - Enumerated fields must match their closed value set. The recipe/guide
//!   `category` set is [`taxonomy::SLUGS`], a compile-time view of the
//!   category registry, so schema and registry cannot drift. The ingredient
//!   `category` is the separate core/secondary/specialty tier; the two
//!   enumerations never mix.
//! - Date fields accept `YYYY-MM-DD` scalars or full RFC-3339 timestamps
//!   and are normalized to the canonical `YYYY-MM-DD` spelling in place.
//! - Unknown keys are rejected to catch typos early.
//!
//! After [`validate`] succeeds, the mapping deserializes cleanly into the
//! matching `types::*Meta` struct; the scanner owns that second step.

use crate::taxonomy;
use chrono::{DateTime, NaiveDate};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("{file}: missing required field '{field}'")]
    MissingField { file: PathBuf, field: String },
    #[error("{file}: field '{field}' {problem}")]
    InvalidField {
        file: PathBuf,
        field: String,
        problem: String,
    },
    #[error("{file}: unknown field '{field}'")]
    UnknownField { file: PathBuf, field: String },
    #[error("{file}: frontmatter keys must be strings")]
    NonStringKey { file: PathBuf },
}

/// Value type of a frontmatter field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// Free-form string with an optional maximum length in characters.
    Str { max_len: Option<usize> },
    /// List of strings.
    StrList,
    Bool,
    /// Date scalar, normalized in place to `YYYY-MM-DD`.
    Date,
    /// One of a closed set of string values.
    Enum(&'static [&'static str]),
    /// Ordered list of `{name, amount, notes?}` mappings.
    IngredientList,
}

/// Presence rule for a frontmatter field.
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    Required,
    Optional,
    /// Optional; filled with the given default when absent.
    Default(DefaultValue),
}

#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    EmptyList,
    False,
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            DefaultValue::EmptyList => Value::Sequence(Vec::new()),
            DefaultValue::False => Value::Bool(false),
        }
    }
}

/// One field declaration within a kind's schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub requirement: Requirement,
}

/// The complete declaration for one content kind.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Kind name used in diagnostics ("recipe", "guide", ...).
    pub kind: &'static str,
    pub fields: &'static [FieldSpec],
}

const DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];
const TIERS: &[&str] = &["core", "secondary", "specialty"];

const TITLE_MAX: usize = 80;
const DESCRIPTION_MAX: usize = 160;

use DefaultValue::{EmptyList, False};
use FieldType::{Bool, Date, Enum, IngredientList, Str, StrList};
use Requirement::{Default, Optional, Required};

const fn field(name: &'static str, ty: FieldType, requirement: Requirement) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        requirement,
    }
}

pub static RECIPE: Schema = Schema {
    kind: "recipe",
    fields: &[
        field("title", Str { max_len: Some(TITLE_MAX) }, Required),
        field("description", Str { max_len: Some(DESCRIPTION_MAX) }, Required),
        field("category", Enum(&taxonomy::SLUGS), Required),
        field("difficulty", Enum(DIFFICULTIES), Required),
        field("prepTime", Str { max_len: None }, Required),
        field("totalTime", Str { max_len: None }, Required),
        field("yield", Str { max_len: None }, Required),
        field("ingredients", IngredientList, Required),
        field("tags", StrList, Default(EmptyList)),
        field("relatedRecipes", StrList, Default(EmptyList)),
        field("safetyWarnings", StrList, Default(EmptyList)),
        field("notSafeFor", StrList, Default(EmptyList)),
        field("featured", Bool, Default(False)),
        field("draft", Bool, Default(False)),
        field("publishDate", Date, Required),
        field("updatedDate", Date, Optional),
    ],
};

pub static GUIDE: Schema = Schema {
    kind: "guide",
    fields: &[
        field("title", Str { max_len: Some(TITLE_MAX) }, Required),
        field("description", Str { max_len: Some(DESCRIPTION_MAX) }, Required),
        field("category", Enum(&taxonomy::SLUGS), Required),
        field("tags", StrList, Default(EmptyList)),
        field("draft", Bool, Default(False)),
        field("publishDate", Date, Required),
        field("updatedDate", Date, Optional),
    ],
};

pub static INGREDIENT: Schema = Schema {
    kind: "ingredient",
    fields: &[
        field("name", Str { max_len: None }, Required),
        field("slug", Str { max_len: None }, Required),
        field("description", Str { max_len: Some(DESCRIPTION_MAX) }, Required),
        field("category", Enum(TIERS), Required),
        field("scienceSummary", Str { max_len: None }, Required),
        field("safetyNotes", StrList, Default(EmptyList)),
        field("storageInstructions", Str { max_len: None }, Optional),
        field("shelfLife", Str { max_len: None }, Optional),
        field("publishDate", Date, Required),
    ],
};

pub static PAGE: Schema = Schema {
    kind: "page",
    fields: &[
        field("title", Str { max_len: None }, Required),
        field("description", Str { max_len: Some(DESCRIPTION_MAX) }, Required),
        field("updatedDate", Date, Optional),
    ],
};

/// Validate `map` against `schema`, filling declared defaults in place.
///
/// On success the mapping contains every required field (type-checked),
/// every defaulted field, and canonical date spellings. On failure the
/// mapping must be considered unusable; errors identify the file and field.
pub fn validate(schema: &Schema, map: &mut Mapping, file: &Path) -> Result<(), SchemaError> {
    for key in map.keys() {
        let Some(name) = key.as_str() else {
            return Err(SchemaError::NonStringKey {
                file: file.to_path_buf(),
            });
        };
        if !schema.fields.iter().any(|spec| spec.name == name) {
            return Err(SchemaError::UnknownField {
                file: file.to_path_buf(),
                field: name.to_string(),
            });
        }
    }

    for spec in schema.fields {
        let present = !matches!(map.get(spec.name), None | Some(Value::Null));
        if !present {
            match spec.requirement {
                Required => {
                    return Err(SchemaError::MissingField {
                        file: file.to_path_buf(),
                        field: spec.name.to_string(),
                    });
                }
                Optional => {
                    // Drop an explicit null so it reads as absent downstream.
                    map.remove(spec.name);
                }
                Default(default) => {
                    map.insert(Value::from(spec.name), default.to_value());
                }
            }
            continue;
        }

        let value = map.get_mut(spec.name).expect("probed present above");
        check_field(spec, value, file)?;
    }

    Ok(())
}

fn check_field(spec: &FieldSpec, value: &mut Value, file: &Path) -> Result<(), SchemaError> {
    let invalid = |problem: String| SchemaError::InvalidField {
        file: file.to_path_buf(),
        field: spec.name.to_string(),
        problem,
    };

    match spec.ty {
        Str { max_len } => {
            let s = value
                .as_str()
                .ok_or_else(|| invalid("must be a string".to_string()))?;
            if let Some(max) = max_len {
                let len = s.chars().count();
                if len > max {
                    return Err(invalid(format!(
                        "exceeds {max} characters (got {len})"
                    )));
                }
            }
        }
        StrList => {
            let seq = value
                .as_sequence()
                .ok_or_else(|| invalid("must be a list of strings".to_string()))?;
            for (i, item) in seq.iter().enumerate() {
                if !item.is_string() {
                    return Err(invalid(format!("entry {} must be a string", i + 1)));
                }
            }
        }
        Bool => {
            if !value.is_bool() {
                return Err(invalid("must be true or false".to_string()));
            }
        }
        Date => {
            let s = value
                .as_str()
                .ok_or_else(|| invalid("must be a date".to_string()))?;
            let date = coerce_date(s).ok_or_else(|| {
                invalid(format!("is not a recognizable date: '{s}'"))
            })?;
            *value = Value::from(date.format("%Y-%m-%d").to_string());
        }
        Enum(allowed) => {
            let s = value
                .as_str()
                .ok_or_else(|| invalid("must be a string".to_string()))?;
            if !allowed.contains(&s) {
                return Err(invalid(format!(
                    "must be one of [{}], got '{s}'",
                    allowed.join(", ")
                )));
            }
        }
        IngredientList => check_ingredient_list(value, file, spec.name)?,
    }

    Ok(())
}

/// Accept `YYYY-MM-DD` or a full RFC-3339 timestamp (time-of-day discarded).
fn coerce_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

fn check_ingredient_list(value: &Value, file: &Path, field: &str) -> Result<(), SchemaError> {
    let invalid = |problem: String| SchemaError::InvalidField {
        file: file.to_path_buf(),
        field: field.to_string(),
        problem,
    };

    let seq = value
        .as_sequence()
        .ok_or_else(|| invalid("must be a list of ingredient entries".to_string()))?;

    for (i, entry) in seq.iter().enumerate() {
        let entry_no = i + 1;
        let map = entry
            .as_mapping()
            .ok_or_else(|| invalid(format!("entry {entry_no} must be a mapping")))?;

        for required in ["name", "amount"] {
            match map.get(required) {
                Some(v) if v.is_string() => {}
                Some(_) => {
                    return Err(invalid(format!(
                        "entry {entry_no}: '{required}' must be a string"
                    )));
                }
                None => {
                    return Err(invalid(format!(
                        "entry {entry_no} is missing '{required}'"
                    )));
                }
            }
        }

        if let Some(notes) = map.get("notes")
            && !notes.is_string()
        {
            return Err(invalid(format!(
                "entry {entry_no}: 'notes' must be a string"
            )));
        }

        for key in map.keys() {
            match key.as_str() {
                Some("name") | Some("amount") | Some("notes") => {}
                Some(other) => {
                    return Err(invalid(format!(
                        "entry {entry_no} has unknown key '{other}'"
                    )));
                }
                None => {
                    return Err(SchemaError::NonStringKey {
                        file: file.to_path_buf(),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecipeMeta, Tier};

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn file() -> PathBuf {
        PathBuf::from("recipes/kitchen/all-purpose-cleaner.md")
    }

    const VALID_RECIPE: &str = r#"
title: All-Purpose Cleaner
description: A simple vinegar cleaner for counters and sinks
category: kitchen
difficulty: beginner
prepTime: PT2M
totalTime: PT5M
yield: 16 oz
ingredients:
  - name: White vinegar
    amount: 1 cup
  - name: Water
    amount: 1 cup
    notes: distilled works best
publishDate: 2025-01-15
"#;

    // =========================================================================
    // Happy path and defaults
    // =========================================================================

    #[test]
    fn valid_recipe_passes() {
        let mut map = mapping(VALID_RECIPE);
        validate(&RECIPE, &mut map, &file()).unwrap();
    }

    #[test]
    fn absent_optionals_are_filled_with_defaults() {
        let mut map = mapping(VALID_RECIPE);
        validate(&RECIPE, &mut map, &file()).unwrap();

        assert_eq!(
            map.get("tags"),
            Some(&Value::Sequence(Vec::new()))
        );
        assert_eq!(map.get("featured"), Some(&Value::Bool(false)));
        assert_eq!(map.get("draft"), Some(&Value::Bool(false)));
        // Plain optionals get no default.
        assert_eq!(map.get("updatedDate"), None);
    }

    #[test]
    fn present_values_are_not_overwritten_by_defaults() {
        let yaml = format!("{VALID_RECIPE}featured: true\ntags: [vinegar, spray]\n");
        let mut map = mapping(&yaml);
        validate(&RECIPE, &mut map, &file()).unwrap();

        assert_eq!(map.get("featured"), Some(&Value::Bool(true)));
        let tags = map.get("tags").unwrap().as_sequence().unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn validated_recipe_deserializes_into_typed_meta() {
        let mut map = mapping(VALID_RECIPE);
        validate(&RECIPE, &mut map, &file()).unwrap();

        let meta: RecipeMeta = serde_yaml::from_value(Value::Mapping(map)).unwrap();
        assert_eq!(meta.title, "All-Purpose Cleaner");
        assert_eq!(meta.ingredients.len(), 2);
        assert_eq!(meta.ingredients[1].notes.as_deref(), Some("distilled works best"));
        assert!(!meta.draft);
        assert_eq!(meta.publish_date.to_string(), "2025-01-15");
    }

    #[test]
    fn explicit_null_optional_reads_as_absent() {
        let yaml = format!("{VALID_RECIPE}updatedDate: null\n");
        let mut map = mapping(&yaml);
        validate(&RECIPE, &mut map, &file()).unwrap();
        assert_eq!(map.get("updatedDate"), None);
    }

    // =========================================================================
    // Required fields and types
    // =========================================================================

    #[test]
    fn missing_required_field_names_file_and_field() {
        let yaml = VALID_RECIPE.replace("title: All-Purpose Cleaner\n", "");
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("all-purpose-cleaner.md"), "{message}");
        assert!(message.contains("'title'"), "{message}");
    }

    #[test]
    fn explicit_null_required_field_is_missing() {
        let yaml = VALID_RECIPE.replace(
            "yield: 16 oz",
            "yield: null",
        );
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { field, .. } if field == "yield"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let yaml = VALID_RECIPE.replace("yield: 16 oz", "yield: 16");
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let yaml = format!("{VALID_RECIPE}servings: 4\n");
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownField { field, .. } if field == "servings"));
    }

    // =========================================================================
    // Length bounds
    // =========================================================================

    #[test]
    fn overlong_title_is_rejected() {
        let long = "x".repeat(81);
        let yaml = VALID_RECIPE.replace("All-Purpose Cleaner", &long);
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("exceeds 80 characters"));
    }

    #[test]
    fn title_at_the_bound_passes() {
        let exact = "x".repeat(80);
        let yaml = VALID_RECIPE.replace("All-Purpose Cleaner", &exact);
        let mut map = mapping(&yaml);
        validate(&RECIPE, &mut map, &file()).unwrap();
    }

    #[test]
    fn overlong_description_is_rejected() {
        let long = "d".repeat(161);
        let yaml = VALID_RECIPE.replace(
            "A simple vinegar cleaner for counters and sinks",
            &long,
        );
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("exceeds 160 characters"));
    }

    // =========================================================================
    // Enumerations
    // =========================================================================

    #[test]
    fn unknown_category_is_rejected() {
        let yaml = VALID_RECIPE.replace("category: kitchen", "category: kichen");
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("got 'kichen'"));
    }

    #[test]
    fn every_registry_slug_is_a_valid_recipe_category() {
        for slug in taxonomy::SLUGS {
            let yaml = VALID_RECIPE.replace("category: kitchen", &format!("category: {slug}"));
            let mut map = mapping(&yaml);
            validate(&RECIPE, &mut map, &file()).unwrap();
        }
    }

    #[test]
    fn ingredient_tier_is_not_a_recipe_category() {
        let yaml = VALID_RECIPE.replace("category: kitchen", "category: core");
        let mut map = mapping(&yaml);
        assert!(validate(&RECIPE, &mut map, &file()).is_err());
    }

    #[test]
    fn recipe_category_is_not_an_ingredient_tier() {
        let yaml = r#"
name: Baking Soda
slug: baking-soda
description: Mild alkaline powder that scrubs and deodorizes
category: kitchen
scienceSummary: Sodium bicarbonate neutralizes acids and absorbs odors.
publishDate: 2025-01-10
"#;
        let mut map = mapping(yaml);
        let err = validate(&INGREDIENT, &mut map, Path::new("ingredients/baking-soda.md"))
            .unwrap_err();
        assert!(err.to_string().contains("core, secondary, specialty"));
    }

    #[test]
    fn invalid_difficulty_is_rejected() {
        let yaml = VALID_RECIPE.replace("difficulty: beginner", "difficulty: expert");
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("beginner, intermediate, advanced"));
    }

    // =========================================================================
    // Dates
    // =========================================================================

    #[test]
    fn rfc3339_timestamp_is_coerced_to_plain_date() {
        let yaml = VALID_RECIPE.replace(
            "publishDate: 2025-01-15",
            "publishDate: \"2025-01-15T08:30:00Z\"",
        );
        let mut map = mapping(&yaml);
        validate(&RECIPE, &mut map, &file()).unwrap();
        assert_eq!(
            map.get("publishDate"),
            Some(&Value::from("2025-01-15"))
        );
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let yaml = VALID_RECIPE.replace("publishDate: 2025-01-15", "publishDate: January 15");
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("not a recognizable date"));
    }

    // =========================================================================
    // Ingredient lists
    // =========================================================================

    #[test]
    fn ingredient_entry_missing_amount_is_rejected() {
        let yaml = VALID_RECIPE.replace("    amount: 1 cup\n  - name: Water", "  - name: Water");
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("missing 'amount'"));
    }

    #[test]
    fn ingredient_entry_unknown_key_is_rejected() {
        let yaml = VALID_RECIPE.replace(
            "notes: distilled works best",
            "brand: AnyCo",
        );
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("unknown key 'brand'"));
    }

    #[test]
    fn ingredients_must_be_a_list() {
        let mut yaml = VALID_RECIPE.to_string();
        yaml = yaml.replace(
            "ingredients:\n  - name: White vinegar\n    amount: 1 cup\n  - name: Water\n    amount: 1 cup\n    notes: distilled works best\n",
            "ingredients: vinegar and water\n",
        );
        let mut map = mapping(&yaml);
        let err = validate(&RECIPE, &mut map, &file()).unwrap_err();
        assert!(err.to_string().contains("list of ingredient entries"));
    }

    // =========================================================================
    // Other kinds
    // =========================================================================

    #[test]
    fn valid_guide_passes_and_defaults_fill() {
        let yaml = r#"
title: Understanding Cleaning Vinegar
description: What makes cleaning vinegar different and when to use it
category: kitchen
publishDate: 2025-02-01
"#;
        let mut map = mapping(yaml);
        validate(&GUIDE, &mut map, Path::new("guides/cleaning-vinegar.md")).unwrap();
        assert_eq!(map.get("draft"), Some(&Value::Bool(false)));
    }

    #[test]
    fn valid_ingredient_deserializes_with_tier() {
        let yaml = r#"
name: Baking Soda
slug: baking-soda
description: Mild alkaline powder that scrubs and deodorizes
category: core
scienceSummary: Sodium bicarbonate neutralizes acids and absorbs odors.
shelfLife: Indefinite if kept dry
publishDate: 2025-01-10
"#;
        let mut map = mapping(yaml);
        validate(&INGREDIENT, &mut map, Path::new("ingredients/baking-soda.md")).unwrap();

        let meta: crate::types::IngredientMeta =
            serde_yaml::from_value(Value::Mapping(map)).unwrap();
        assert_eq!(meta.category, Tier::Core);
        assert_eq!(meta.shelf_life.as_deref(), Some("Indefinite if kept dry"));
        assert!(meta.storage_instructions.is_none());
    }

    #[test]
    fn valid_page_passes() {
        let yaml = r#"
title: About
description: Why we make our own cleaning products
"#;
        let mut map = mapping(yaml);
        validate(&PAGE, &mut map, Path::new("pages/about.md")).unwrap();
    }
}
