//! Schema-driven section and key ordering

use super::{ConfigDocument, Section};

/// Known sections in output order, each with its leading keys
pub const KEYS_ORDER: &[(&str, &[&str])] = &[
    (
        "metadata",
        &[
            "name",
            "version",
            "description",
            "long_description",
            "long_description_content_type",
            "url",
            "author",
            "author_email",
            "maintainer",
            "maintainer_email",
            "license",
            "license_files",
            "platforms",
            "classifiers",
        ],
    ),
    (
        "options",
        &["packages", "py_modules", "install_requires", "python_requires"],
    ),
    ("options.packages.find", &["where", "exclude", "include"]),
    ("options.entry_points", &["console_scripts"]),
    ("options.extras_require", &[]),
    ("options.package_data", &[]),
    ("options.exclude_package_data", &[]),
];

/// Reorders a document into its canonical layout.
///
/// Known sections come first in schema order. Their keys have `-` replaced
/// by `_`, listed keys lead in listed order and the rest follow
/// alphabetically. Other sections keep their relative order and keys.
pub fn reorder(doc: ConfigDocument) -> ConfigDocument {
    let mut remaining = doc;
    let mut ordered = ConfigDocument::new();

    for (name, key_order) in KEYS_ORDER {
        let Some(entries) = remaining.remove_section(name) else {
            continue;
        };
        ordered.insert_section(*name, order_keys(entries, key_order));
    }

    for (name, entries) in remaining.sections {
        ordered.insert_section(name, entries);
    }

    ordered
}

fn order_keys(entries: Section, key_order: &[&str]) -> Section {
    let mut entries: Section = entries
        .into_iter()
        .map(|(key, value)| (key.replace('-', "_"), value))
        .collect();

    let mut section: Section = key_order
        .iter()
        .filter_map(|key| entries.shift_remove_entry(*key))
        .collect();

    entries.sort_keys();
    section.extend(entries);
    section
}
