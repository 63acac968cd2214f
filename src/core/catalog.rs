//! Reference-image catalog.
//!
//! Groups the flat build-time manifest of `(path, url)` pairs into a
//! three-level index: type -> model -> category -> ordered images. The
//! catalog is built once at startup and never mutated afterwards; every
//! view the gallery renders is derived from it.
//!
//! # Path Convention
//!
//! Paths are slash-delimited and interpreted relative to the anchor
//! folder (`references`): the three segments after the anchor are
//! `(type, model, category)` and the last segment is the file name,
//! e.g. `references/figure/jane_doe/gesture/pose_02.jpg`. Missing
//! segments degrade to placeholder keys; no path is ever rejected.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::{REFERENCE_ANCHOR, THUMBNAIL_CATEGORY, UNCATEGORIZED, UNKNOWN_MODEL};
use crate::models::{CategoryFilter, TypeFilter};

// =============================================================================
// Ordering and display helpers
// =============================================================================

/// Natural (numeric-aware, case-insensitive) string comparison.
///
/// Digit runs compare by numeric value, everything else by lowercased
/// characters, so `image2` sorts before `image10` and `Pose` equals
/// `pose`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digit_run(&mut ca);
                let run_b = take_digit_run(&mut cb);
                let ord = cmp_digit_runs(&run_a, &run_b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                ca.next();
                cb.next();
            }
        }
    }
}

/// Consume a maximal run of ASCII digits from the iterator.
fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs by numeric value without parsing into a fixed
/// width integer (runs can be arbitrarily long).
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Human-facing name for a grouping key: underscores and hyphens become
/// spaces and each word is title-cased.
pub fn display_name(key: &str) -> String {
    key.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Catalog types
// =============================================================================

/// A single reference image: file name plus the URL it is served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub file: String,
    pub url: String,
}

/// Ordered images within one category of one model.
#[derive(Clone, Debug, Default)]
pub struct CategoryBucket {
    images: Vec<ImageRef>,
}

impl CategoryBucket {
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// One model: an optional cover image and its category buckets.
///
/// The cover is promoted from the first-seen image of the special
/// `thumbnail` category; that category never appears in
/// [`category_keys`](Self::category_keys).
#[derive(Clone, Debug, Default)]
pub struct ModelEntry {
    cover: Option<ImageRef>,
    categories: HashMap<String, CategoryBucket>,
    category_keys: Vec<String>,
}

impl ModelEntry {
    pub fn cover(&self) -> Option<&ImageRef> {
        self.cover.as_ref()
    }

    /// Navigable category keys, naturally sorted, thumbnail excluded.
    pub fn category_keys(&self) -> &[String] {
        &self.category_keys
    }

    pub fn bucket(&self, key: &str) -> Option<&CategoryBucket> {
        self.categories.get(key)
    }

    /// Total image count across all navigable categories (the "all"
    /// pill's count).
    pub fn total_images(&self) -> usize {
        self.category_keys
            .iter()
            .filter_map(|k| self.categories.get(k))
            .map(CategoryBucket::len)
            .sum()
    }

    /// Image shown on the model's landing card: the cover if present,
    /// otherwise the first image of the first category.
    pub fn card_image(&self) -> Option<&ImageRef> {
        self.cover.as_ref().or_else(|| {
            self.category_keys
                .first()
                .and_then(|k| self.categories.get(k))
                .and_then(|bucket| bucket.images().first())
        })
    }

    /// The active sequence for lightbox navigation: all buckets
    /// concatenated in key order, or exactly one bucket.
    pub fn sequence(&self, filter: &CategoryFilter) -> Vec<&ImageRef> {
        match filter {
            CategoryFilter::All => self
                .category_keys
                .iter()
                .filter_map(|k| self.categories.get(k))
                .flat_map(|bucket| bucket.images().iter())
                .collect(),
            CategoryFilter::One(key) => self
                .categories
                .get(key)
                .map(|bucket| bucket.images().iter().collect())
                .unwrap_or_default(),
        }
    }
}

/// All models of one type.
#[derive(Clone, Debug, Default)]
pub struct TypeIndex {
    models: HashMap<String, ModelEntry>,
    model_names: Vec<String>,
}

impl TypeIndex {
    /// Model names, naturally sorted.
    pub fn model_names(&self) -> &[String] {
        &self.model_names
    }

    pub fn model(&self, name: &str) -> Option<&ModelEntry> {
        self.models.get(name)
    }
}

/// The full reference index: type -> model -> category -> images.
///
/// Frozen after construction; rebuilding requires reloading the asset
/// manifest.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    types: HashMap<String, TypeIndex>,
    type_names: Vec<String>,
}

impl Catalog {
    /// Build the catalog from `(path, url)` pairs.
    ///
    /// Grouping keys for type and category are lowercased; model names
    /// keep their on-disk casing. Malformed paths fall back to
    /// placeholder keys rather than being rejected.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut types: HashMap<String, TypeIndex> = HashMap::new();

        for (path, url) in paths {
            let parsed = ParsedPath::from(path);
            let image = ImageRef {
                file: parsed.file.to_string(),
                url: url.to_string(),
            };

            let entry = types
                .entry(parsed.type_key)
                .or_default()
                .models
                .entry(parsed.model)
                .or_default();

            if parsed.category_key == THUMBNAIL_CATEGORY {
                // First-seen thumbnail becomes the cover; later ones in
                // the same bucket are not navigable and are dropped.
                if entry.cover.is_none() {
                    entry.cover = Some(image);
                }
            } else {
                entry
                    .categories
                    .entry(parsed.category_key)
                    .or_default()
                    .images
                    .push(image);
            }
        }

        for index in types.values_mut() {
            for entry in index.models.values_mut() {
                for bucket in entry.categories.values_mut() {
                    bucket.images.sort_by(|a, b| natural_cmp(&a.file, &b.file));
                }
                entry.category_keys = entry.categories.keys().cloned().collect();
                entry.category_keys.sort_by(|a, b| natural_cmp(a, b));
            }
            index.model_names = index.models.keys().cloned().collect();
            index.model_names.sort_by(|a, b| natural_cmp(a, b));
        }

        let mut type_names: Vec<String> = types.keys().cloned().collect();
        type_names.sort_by(|a, b| natural_cmp(a, b));

        Self { types, type_names }
    }

    /// Type keys, naturally sorted.
    pub fn type_names(&self) -> &[String] {
        &self.type_names
    }

    pub fn type_index(&self, key: &str) -> Option<&TypeIndex> {
        self.types.get(key)
    }

    pub fn model(&self, type_key: &str, model: &str) -> Option<&ModelEntry> {
        self.types.get(type_key).and_then(|t| t.models.get(model))
    }

    /// `(type key, model name)` pairs for the landing grid, in type
    /// order then model order. `TypeFilter::All` unions every type.
    pub fn cards(&self, filter: &TypeFilter) -> Vec<(String, String)> {
        let selected: Vec<&String> = match filter {
            TypeFilter::All => self.type_names.iter().collect(),
            TypeFilter::One(key) => self.type_names.iter().filter(|t| *t == key).collect(),
        };

        selected
            .into_iter()
            .filter_map(|t| self.types.get(t).map(|idx| (t, idx)))
            .flat_map(|(t, idx)| {
                idx.model_names
                    .iter()
                    .map(move |m| (t.clone(), m.clone()))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// =============================================================================
// Path parsing
// =============================================================================

/// The interpreted segments of one manifest path.
struct ParsedPath<'a> {
    type_key: String,
    model: String,
    category_key: String,
    file: &'a str,
}

impl<'a> ParsedPath<'a> {
    fn from(path: &'a str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let file = segments.last().copied().unwrap_or_default();

        // Everything between the anchor and the file name; when the
        // anchor is absent the path is malformed and all grouping
        // segments fall back to placeholders.
        let dirs: &[&str] = match segments.iter().position(|s| *s == REFERENCE_ANCHOR) {
            Some(anchor) if anchor + 1 < segments.len() => {
                &segments[anchor + 1..segments.len() - 1]
            }
            _ => &[],
        };

        Self {
            type_key: dirs
                .first()
                .map(|s| s.to_lowercase())
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            model: dirs
                .get(1)
                .map(|s| s.to_string())
                .unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
            category_key: dirs
                .get(2)
                .map(|s| s.to_lowercase())
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_paths([
            ("references/figure/Jane Doe/gesture/pose_10.jpg", "/u/10"),
            ("references/figure/Jane Doe/gesture/pose_2.jpg", "/u/2"),
            ("references/figure/Jane Doe/thumbnail/cover.jpg", "/u/cover"),
            ("references/figure/Jane Doe/portrait/front.jpg", "/u/front"),
            ("references/animal/Hawk/flight/wing1.png", "/u/wing"),
        ])
    }

    #[test]
    fn natural_cmp_orders_numeric_runs_by_value() {
        assert_eq!(natural_cmp("image2", "image10"), Ordering::Less);
        assert_eq!(natural_cmp("image10", "image2"), Ordering::Greater);
        assert_eq!(natural_cmp("pose_02", "pose_2"), Ordering::Equal);
        assert_eq!(natural_cmp("Pose", "pose"), Ordering::Equal);
        assert_eq!(natural_cmp("a", "ab"), Ordering::Less);
    }

    #[test]
    fn display_name_strips_separators_and_title_cases() {
        assert_eq!(display_name("jane_doe"), "Jane Doe");
        assert_eq!(display_name("quick-sketch"), "Quick Sketch");
        assert_eq!(display_name("figure"), "Figure");
        assert_eq!(display_name("__"), "");
    }

    #[test]
    fn buckets_are_sorted_naturally() {
        let catalog = sample_catalog();
        let entry = catalog.model("figure", "Jane Doe").expect("model");
        let bucket = entry.bucket("gesture").expect("bucket");
        let files: Vec<&str> = bucket.images().iter().map(|i| i.file.as_str()).collect();
        assert_eq!(files, ["pose_2.jpg", "pose_10.jpg"]);
    }

    #[test]
    fn thumbnail_promotes_cover_and_stays_hidden() {
        let catalog = sample_catalog();
        let entry = catalog.model("figure", "Jane Doe").expect("model");
        assert_eq!(entry.cover().expect("cover").file, "cover.jpg");
        assert_eq!(entry.category_keys(), ["gesture", "portrait"]);
        assert!(entry.bucket(THUMBNAIL_CATEGORY).is_none());
    }

    #[test]
    fn card_image_falls_back_to_first_category_image() {
        let catalog = sample_catalog();
        let entry = catalog.model("animal", "Hawk").expect("model");
        assert!(entry.cover().is_none());
        assert_eq!(entry.card_image().expect("card").file, "wing1.png");
    }

    #[test]
    fn every_image_lands_in_exactly_one_place() {
        let catalog = sample_catalog();
        let mut seen = 0;
        for t in catalog.type_names() {
            let index = catalog.type_index(t).expect("type");
            for m in index.model_names() {
                let entry = index.model(m).expect("model");
                seen += entry.total_images();
                if entry.cover().is_some() {
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, 5);
    }

    #[test]
    fn sequence_concatenates_in_category_key_order() {
        let catalog = sample_catalog();
        let entry = catalog.model("figure", "Jane Doe").expect("model");

        let all: Vec<&str> = entry
            .sequence(&CategoryFilter::All)
            .iter()
            .map(|i| i.file.as_str())
            .collect();
        assert_eq!(all, ["pose_2.jpg", "pose_10.jpg", "front.jpg"]);

        let one: Vec<&str> = entry
            .sequence(&CategoryFilter::One("portrait".to_string()))
            .iter()
            .map(|i| i.file.as_str())
            .collect();
        assert_eq!(one, ["front.jpg"]);
    }

    #[test]
    fn type_and_category_keys_are_case_folded() {
        let catalog = Catalog::from_paths([("references/Figure/Jane/Gesture/a.jpg", "/u/a")]);
        assert_eq!(catalog.type_names(), ["figure"]);
        let entry = catalog.model("figure", "Jane").expect("model");
        assert_eq!(entry.category_keys(), ["gesture"]);
    }

    #[test]
    fn malformed_paths_fall_back_to_placeholders() {
        let catalog = Catalog::from_paths([("loose.jpg", "/u/loose")]);
        assert_eq!(catalog.type_names(), [UNCATEGORIZED]);
        let entry = catalog.model(UNCATEGORIZED, UNKNOWN_MODEL).expect("model");
        assert_eq!(entry.category_keys(), [UNCATEGORIZED]);
        assert_eq!(entry.total_images(), 1);
    }

    #[test]
    fn partial_paths_fill_segments_in_order() {
        let catalog = Catalog::from_paths([("references/figure/solo.jpg", "/u/solo")]);
        let entry = catalog.model("figure", UNKNOWN_MODEL).expect("model");
        let bucket = entry.bucket(UNCATEGORIZED).expect("bucket");
        assert_eq!(bucket.images()[0].file, "solo.jpg");
    }

    #[test]
    fn cards_union_all_types_in_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.cards(&TypeFilter::All),
            [
                ("animal".to_string(), "Hawk".to_string()),
                ("figure".to_string(), "Jane Doe".to_string()),
            ]
        );
        assert_eq!(
            catalog.cards(&TypeFilter::One("figure".to_string())),
            [("figure".to_string(), "Jane Doe".to_string())]
        );
    }
}
