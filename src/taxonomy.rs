//! Category registry: the closed taxonomy behind the catalog.
//!
//! Every recipe and guide is filed under exactly one of the 27 categories
//! defined here. The table carries the display metadata (name, description,
//! icon, sort order) and a hand-curated grouping of categories into six
//! super-categories used for top-level navigation.
//!
//! ## Lookup contract
//!
//! All accessors are total. An unrecognized slug is presentation drift, not
//! an integrity problem, so lookups degrade instead of failing:
//!
//! - [`label`] returns the slug itself when it is unknown
//! - [`icon`] returns [`FALLBACK_ICON`] when the slug is unknown
//! - [`super_category_of`] returns `None` when no group lists the slug
//!
//! The raw tables are private; rendering code can only reach them through
//! these accessors, which keeps the no-panic contract in one place.
//!
//! ## Consistency with the content schema
//!
//! The frontmatter schema validates `category` against [`SLUGS`], which is
//! derived from the registry table in a `const` block. Adding or removing a
//! category here updates both the registry and the schema enumeration in the
//! same edit.
//!
//! ## Grouping coverage
//!
//! The super-category grouping is curated by hand and does not have to cover
//! every category (`condiments` and `travel` are currently ungrouped).
//! [`grouping_gaps`] reports coverage drift; the `check` command surfaces it
//! as warnings without failing the build.

/// Icon returned for slugs the registry does not know.
pub const FALLBACK_ICON: &str = "📋";

/// A registered category with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable kebab-case identifier used in frontmatter and URLs.
    pub slug: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// One-sentence description shown on listing pages.
    pub description: &'static str,
    /// Emoji glyph shown next to the name.
    pub icon: &'static str,
    /// Position in listings, 1-based and dense.
    pub order: u32,
}

/// A curated grouping of categories into a top-level navigation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuperCategory {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Member category slugs, alphabetized.
    pub members: &'static [&'static str],
}

const CATEGORIES: [Category; 27] = [
    Category {
        slug: "kitchen",
        name: "Kitchen Cleaning",
        description: "All-purpose cleaners, degreasers, and oven solutions using simple pantry ingredients",
        icon: "🍽️",
        order: 1,
    },
    Category {
        slug: "kitchen-food-contact",
        name: "Kitchen & Food Contact",
        description: "Non-toxic cookware, food storage, utensils, cutting boards, and water bottles",
        icon: "🍳",
        order: 2,
    },
    Category {
        slug: "bathroom",
        name: "Bathroom Cleaning",
        description: "Toilet cleaners, tub scrubs, and glass sprays without harsh chemicals",
        icon: "🚿",
        order: 3,
    },
    Category {
        slug: "personal-care",
        name: "Personal Care",
        description: "Simple deodorants, toothpaste, shampoo, and skincare from natural ingredients",
        icon: "🧴",
        order: 4,
    },
    Category {
        slug: "beauty-cosmetics",
        name: "Beauty & Cosmetics",
        description: "Safer makeup choices, natural nail care, hair dye alternatives, and brush cleaning",
        icon: "💄",
        order: 5,
    },
    Category {
        slug: "baby-child",
        name: "Baby, Child & Teen",
        description: "Extra-gentle cleaners for nurseries, toys, teen gear, and sensitive skin",
        icon: "👶",
        order: 6,
    },
    Category {
        slug: "laundry",
        name: "Laundry",
        description: "Gentle, effective detergents, stain removers, and fabric softeners",
        icon: "👕",
        order: 7,
    },
    Category {
        slug: "floors",
        name: "Floor Care",
        description: "Safe cleaners for hardwood, tile, and carpet, with material-specific guidance",
        icon: "🏠",
        order: 8,
    },
    Category {
        slug: "clothing-textiles",
        name: "Clothing & Textiles",
        description: "Healthier socks, house shoes, bedding, carpet materials, and fabric care",
        icon: "🧶",
        order: 9,
    },
    Category {
        slug: "air-quality",
        name: "Air Quality",
        description: "Natural air freshening, ozonators, purifiers, and healthier indoor air",
        icon: "🌬️",
        order: 10,
    },
    Category {
        slug: "candles-fragrance",
        name: "Candles & Fragrance",
        description: "Safer candle choices, DIY beeswax candles, and essential oil guidance",
        icon: "🕯️",
        order: 11,
    },
    Category {
        slug: "water",
        name: "Water",
        description: "Shower filters, drinking water filtration, and water quality guidance",
        icon: "💧",
        order: 12,
    },
    Category {
        slug: "home-setup",
        name: "Home Setup",
        description: "Mattress selection, natural lighting, ozonators, and healthier living spaces",
        icon: "🔧",
        order: 13,
    },
    Category {
        slug: "pest-control",
        name: "Pest Control",
        description: "Non-toxic solutions for ants, fleas, mosquitoes, and other common household pests",
        icon: "🐜",
        order: 14,
    },
    Category {
        slug: "pet-care",
        name: "Pet Care",
        description: "Natural pet shampoo, flea treatment, safe litter, bowls, and bedding",
        icon: "🐾",
        order: 15,
    },
    Category {
        slug: "outdoor-garden",
        name: "Outdoor & Garden",
        description: "Lawn care, garden solutions, insect repellent, pool maintenance, and deck cleaning",
        icon: "🌿",
        order: 16,
    },
    Category {
        slug: "car-care",
        name: "Car Care",
        description: "Non-toxic car interior cleaning, air fresheners, car wash, and off-gassing reduction",
        icon: "🚗",
        order: 17,
    },
    Category {
        slug: "deep-cleaning",
        name: "Deep Cleaning",
        description: "Grout restoration, mold removal, rust treatment, adhesive removal, and garage cleaning",
        icon: "🧽",
        order: 18,
    },
    Category {
        slug: "fitness-wellness",
        name: "Fitness & Wellness",
        description: "Yoga mat cleaner, gym equipment sanitizer, sports bottle care, and workout gear",
        icon: "🏋️",
        order: 19,
    },
    Category {
        slug: "home-office",
        name: "Home Office",
        description: "Non-toxic desk, chair, keyboard, and monitor cleaning for a safer workspace",
        icon: "💻",
        order: 20,
    },
    Category {
        slug: "seasonal",
        name: "Seasonal",
        description: "Holiday candle safety, de-icing alternatives, spring cleaning checklists, and back-to-school",
        icon: "🍂",
        order: 21,
    },
    Category {
        slug: "entertaining",
        name: "Entertaining & Guests",
        description: "Hosting prep, dinner parties, guest bedrooms, and after-party cleanup",
        icon: "🥂",
        order: 22,
    },
    Category {
        slug: "sleep-wellness",
        name: "Sleep & Wellness",
        description: "EMF reduction, circadian rhythms, bedroom plants, window treatments, and sleep optimization",
        icon: "🌙",
        order: 23,
    },
    Category {
        slug: "daily-habits",
        name: "Daily Habits",
        description: "Shoe policies, medicine storage, receipt handling, and overlooked household best practices",
        icon: "📋",
        order: 24,
    },
    Category {
        slug: "elderly-accessibility",
        name: "Elderly & Accessibility",
        description: "Grab bars, non-slip solutions, medication management, and elder-proofing your home",
        icon: "♿",
        order: 25,
    },
    Category {
        slug: "condiments",
        name: "Condiments",
        description: "Homemade ketchup, mustard, dressings, and simple sauces without additives",
        icon: "🫙",
        order: 26,
    },
    Category {
        slug: "travel",
        name: "Travel",
        description: "Packable cleaners, laundry on the road, and healthier hotel and travel habits",
        icon: "🧳",
        order: 27,
    },
];

/// Slugs of every registered category, in table order.
///
/// Derived from the registry table so the frontmatter enumeration and the
/// registry stay a single table.
pub const SLUGS: [&str; CATEGORIES.len()] = {
    let mut slugs = [""; CATEGORIES.len()];
    let mut i = 0;
    while i < CATEGORIES.len() {
        slugs[i] = CATEGORIES[i].slug;
        i += 1;
    }
    slugs
};

const SUPER_CATEGORIES: [SuperCategory; 6] = [
    SuperCategory {
        slug: "family-pets",
        name: "Family & Pets",
        icon: "👶",
        description: "Baby-safe cleaners, pet care, elderly accessibility, and gentle solutions for the whole family",
        members: &["baby-child", "elderly-accessibility", "pet-care"],
    },
    SuperCategory {
        slug: "home-cleaning",
        name: "Home Cleaning",
        icon: "🏠",
        description: "Kitchen, bathroom, floors, laundry, and deep cleaning for every room",
        members: &[
            "bathroom",
            "deep-cleaning",
            "entertaining",
            "floors",
            "kitchen",
            "laundry",
        ],
    },
    SuperCategory {
        slug: "living-spaces",
        name: "Living Spaces",
        icon: "🏡",
        description: "Air quality, fragrance, textiles, water, and home office: your daily environment",
        members: &[
            "air-quality",
            "candles-fragrance",
            "clothing-textiles",
            "daily-habits",
            "home-office",
            "home-setup",
            "sleep-wellness",
            "water",
        ],
    },
    SuperCategory {
        slug: "outdoor-auto",
        name: "Outdoor & Auto",
        icon: "🌍",
        description: "Garden, car care, and pest control for everything outside your front door",
        members: &["car-care", "outdoor-garden", "pest-control"],
    },
    SuperCategory {
        slug: "personal-beauty",
        name: "Personal & Beauty",
        icon: "🌿",
        description: "Skincare, hair care, fitness gear, and personal wellness, naturally",
        members: &["beauty-cosmetics", "fitness-wellness", "personal-care"],
    },
    SuperCategory {
        slug: "seasonal-specialty",
        name: "Seasonal & Specialty",
        icon: "📅",
        description: "Holiday prep, seasonal cleaning, and food-safe kitchen solutions",
        members: &["kitchen-food-contact", "seasonal"],
    },
];

fn find(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// Display name for a category slug.
///
/// Unknown slugs are returned unchanged so that content filed under a typo'd
/// or retired category still renders.
pub fn label(slug: &str) -> &str {
    match find(slug) {
        Some(category) => category.name,
        None => slug,
    }
}

/// Emoji icon for a category slug, or [`FALLBACK_ICON`] when unknown.
pub fn icon(slug: &str) -> &'static str {
    match find(slug) {
        Some(category) => category.icon,
        None => FALLBACK_ICON,
    }
}

/// All registered categories sorted ascending by `order`.
///
/// Freshly computed on every call; callers may reorder or filter the result.
pub fn list() -> Vec<Category> {
    let mut categories = CATEGORIES.to_vec();
    categories.sort_by_key(|c| c.order);
    categories
}

/// The curated super-category groups, in display order.
pub fn super_categories() -> &'static [SuperCategory] {
    &SUPER_CATEGORIES
}

/// The first super-category whose member list contains `slug`.
///
/// Returns `None` for slugs absent from every group; the caller decides how
/// to render ungrouped content.
pub fn super_category_of(slug: &str) -> Option<&'static SuperCategory> {
    SUPER_CATEGORIES.iter().find(|sc| sc.members.contains(&slug))
}

/// Report drift between the registry and the super-category grouping.
///
/// Three defect shapes are reported: a registered category no group lists,
/// a category listed by more than one group, and a group member that is not
/// a registered category. An empty result means full, unambiguous coverage.
pub fn grouping_gaps() -> Vec<String> {
    let mut gaps = Vec::new();

    for category in &CATEGORIES {
        let homes: Vec<&str> = SUPER_CATEGORIES
            .iter()
            .filter(|sc| sc.members.contains(&category.slug))
            .map(|sc| sc.slug)
            .collect();
        match homes.len() {
            0 => gaps.push(format!(
                "category '{}' is not assigned to any super-category",
                category.slug
            )),
            1 => {}
            _ => gaps.push(format!(
                "category '{}' is assigned to multiple super-categories: {}",
                category.slug,
                homes.join(", ")
            )),
        }
    }

    for sc in &SUPER_CATEGORIES {
        for member in sc.members {
            if find(member).is_none() {
                gaps.push(format!(
                    "super-category '{}' lists unknown category '{}'",
                    sc.slug, member
                ));
            }
        }
    }

    gaps
}
