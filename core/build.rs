use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const LAYOUTS: &[(&str, &str)] = &[
    ("feature", "CardLayout::Feature"),
    ("wide", "CardLayout::Wide"),
    ("compact", "CardLayout::Compact"),
];

#[derive(Deserialize)]
struct CatalogFile {
    case_studies: Vec<CaseStudyEntry>,
}

#[derive(Deserialize)]
struct CaseStudyEntry {
    slug: String,
    title: String,
    organization: String,
    summary: String,
    layout: Option<String>,
    detail: DetailEntry,
    page: PageEntry,
}

#[derive(Deserialize)]
struct DetailEntry {
    context: String,
    challenges: Vec<String>,
    solution: Vec<String>,
    impact: Vec<String>,
}

#[derive(Deserialize)]
struct PageEntry {
    headline: Option<String>,
    context: String,
    challenges: Vec<String>,
    solution: Vec<String>,
    outcome: Vec<String>,
    reflection: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=CASE_STUDY_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read case study catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse case study catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.case_studies.is_empty() {
        panic!("case study catalog {} has no entries", catalog_path.display());
    }
    if catalog.case_studies.len() > u8::MAX as usize {
        panic!(
            "case study catalog {} has {} entries, at most {} are supported",
            catalog_path.display(),
            catalog.case_studies.len(),
            u8::MAX
        );
    }

    validate_entries(&catalog.case_studies, &catalog_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const CASE_STUDY_COUNT: usize = {};",
        catalog.case_studies.len()
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(
        &mut output,
        "pub const CASE_STUDY_CATALOG: [CatalogEntry; CASE_STUDY_COUNT] = ["
    )
    .unwrap();

    for entry in &catalog.case_studies {
        let layout = layout_variant(entry.layout.as_deref().unwrap_or("compact"));
        let headline = entry.page.headline.as_deref().unwrap_or(entry.title.as_str());
        writeln!(&mut output, "    CatalogEntry {{").unwrap();
        writeln!(&mut output, "        slug: {},", rust_string(&entry.slug)).unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(
            &mut output,
            "        organization: {},",
            rust_string(&entry.organization)
        )
        .unwrap();
        writeln!(&mut output, "        summary: {},", rust_string(&entry.summary)).unwrap();
        writeln!(&mut output, "        layout: {layout},").unwrap();
        writeln!(&mut output, "        detail: CaseStudyDetail {{").unwrap();
        writeln!(
            &mut output,
            "            context: {},",
            rust_string(&entry.detail.context)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            challenges: {},",
            rust_string_slice(&entry.detail.challenges)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            solution: {},",
            rust_string_slice(&entry.detail.solution)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            impact: {},",
            rust_string_slice(&entry.detail.impact)
        )
        .unwrap();
        writeln!(&mut output, "        }},").unwrap();
        writeln!(&mut output, "        page: CaseStudyPage {{").unwrap();
        writeln!(&mut output, "            headline: {},", rust_string(headline)).unwrap();
        writeln!(
            &mut output,
            "            context: {},",
            rust_string(&entry.page.context)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            challenges: {},",
            rust_string_slice(&entry.page.challenges)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            solution: {},",
            rust_string_slice(&entry.page.solution)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            outcome: {},",
            rust_string_slice(&entry.page.outcome)
        )
        .unwrap();
        writeln!(
            &mut output,
            "            reflection: {},",
            rust_string(&entry.page.reflection)
        )
        .unwrap();
        writeln!(&mut output, "        }},").unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("case_study_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("CASE_STUDY_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("case-studies/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_string_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn layout_variant(raw: &str) -> &'static str {
    LAYOUTS
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, variant)| *variant)
        .unwrap_or("CardLayout::Compact")
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

fn validate_entries(entries: &[CaseStudyEntry], catalog_path: &Path) {
    let mut slugs = HashSet::new();

    for entry in entries {
        if !is_valid_slug(&entry.slug) {
            panic!(
                "case study slug '{}' must be lowercase ascii words joined by '-' in {}",
                entry.slug,
                catalog_path.display()
            );
        }
        if !slugs.insert(entry.slug.clone()) {
            panic!(
                "duplicate case study slug '{}' in {}",
                entry.slug,
                catalog_path.display()
            );
        }
        let required = [
            ("title", entry.title.as_str()),
            ("organization", entry.organization.as_str()),
            ("summary", entry.summary.as_str()),
            ("detail.context", entry.detail.context.as_str()),
            ("page.context", entry.page.context.as_str()),
            ("page.reflection", entry.page.reflection.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                panic!(
                    "case study '{}' has an empty {field} in {}",
                    entry.slug,
                    catalog_path.display()
                );
            }
        }
        if let Some(layout) = entry.layout.as_deref() {
            if !LAYOUTS.iter().any(|(name, _)| *name == layout) {
                panic!(
                    "case study '{}' has unknown layout '{layout}' in {}",
                    entry.slug,
                    catalog_path.display()
                );
            }
        }
        let lists = [
            ("detail.challenges", &entry.detail.challenges),
            ("detail.solution", &entry.detail.solution),
            ("detail.impact", &entry.detail.impact),
            ("page.challenges", &entry.page.challenges),
            ("page.solution", &entry.page.solution),
            ("page.outcome", &entry.page.outcome),
        ];
        for (field, items) in lists {
            if items.is_empty() || items.iter().any(|item| item.trim().is_empty()) {
                panic!(
                    "case study '{}' needs a non-empty {field} list in {}",
                    entry.slug,
                    catalog_path.display()
                );
            }
        }
    }
}
