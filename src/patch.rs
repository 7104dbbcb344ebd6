use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{LocaleError, LocaleFile};

/// A single edit applied to one locale file.
#[derive(Debug, Clone)]
pub enum PatchOp {
    /// Set the given keys inside a top-level section, creating the section
    /// when absent and leaving every other key in the file untouched.
    MergeKeys {
        section: String,
        entries: IndexMap<String, String>,
    },
    /// Assign a complete mapping as the value of a top-level section,
    /// discarding whatever was there before.
    ReplaceSection {
        section: String,
        entries: IndexMap<String, String>,
    },
}

impl PatchOp {
    pub fn merge_key(section: &str, key: &str, value: &str) -> PatchOp {
        PatchOp::merge_keys(section, [(key, value)])
    }

    pub fn merge_keys<'a, I>(section: &str, entries: I) -> PatchOp
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        PatchOp::MergeKeys {
            section: section.to_string(),
            entries: owned_entries(entries),
        }
    }

    pub fn replace_section<'a, I>(section: &str, entries: I) -> PatchOp
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        PatchOp::ReplaceSection {
            section: section.to_string(),
            entries: owned_entries(entries),
        }
    }

    pub fn apply(&self, locale: &mut LocaleFile) -> Result<(), LocaleError> {
        match self {
            PatchOp::MergeKeys { section, entries } => {
                for (key, value) in entries {
                    locale.set_key(section, key, value)?;
                }

                Ok(())
            }
            PatchOp::ReplaceSection { section, entries } => {
                locale.replace_section(
                    section,
                    entries.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                );

                Ok(())
            }
        }
    }
}

fn owned_entries<'a, I>(entries: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// What happened to one language during a patch run.
#[derive(Debug)]
pub enum PatchOutcome {
    Updated,
    /// No locale file exists for the language. The language was skipped and
    /// no file was created.
    Missing(PathBuf),
    /// The locale file could not be read, parsed or written. Nothing was
    /// written to disk for this language.
    Failed(LocaleError),
}

impl PatchOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, PatchOutcome::Updated)
    }
}

/**
Applies one [`PatchOp`] per language against the locale files under
`base_dir`, in the order the patches are given.

Each language is processed independently: a missing file or a parse failure
is reported and skipped, and processing continues with the next language.
The write step only happens once the patch has succeeded in memory, so a
failed language leaves its file exactly as it was.

Per-language diagnostics are printed as the run progresses, and the outcome
of every language is returned in iteration order.

# Examples
```no_run
use locpatch::patch::{self, PatchOp};

let patches = [
    ("en".to_string(), PatchOp::merge_key("common", "done", "Done")),
    ("fr".to_string(), PatchOp::merge_key("common", "done", "Terminé")),
];

patch::apply_table("./src/locales", "common.json", patches);
```
*/
pub fn apply_table<P, I>(base_dir: P, file_name: &str, patches: I) -> Vec<(String, PatchOutcome)>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (String, PatchOp)>,
{
    let mut outcomes = Vec::new();

    for (lang, op) in patches {
        let outcome = match apply_one(base_dir.as_ref(), &lang, file_name, &op) {
            Ok(()) => {
                println!("Updated {}", lang);

                PatchOutcome::Updated
            }
            Err(LocaleError::NotFound(path)) => {
                eprintln!("File not found: {}", path.display());

                PatchOutcome::Missing(path)
            }
            Err(e) => {
                eprintln!("Error updating {}: {}", lang, e);

                PatchOutcome::Failed(e)
            }
        };

        outcomes.push((lang, outcome));
    }

    outcomes
}

fn apply_one(
    base_dir: &Path,
    lang: &str,
    file_name: &str,
    op: &PatchOp,
) -> Result<(), LocaleError> {
    let mut locale = LocaleFile::for_language(base_dir, lang, file_name)?;

    op.apply(&mut locale)?;

    locale.save()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use ntest::timeout;

    use crate::LOCALE_FILE_NAME;

    fn write_locale(dir: &Path, lang: &str, contents: &str) -> PathBuf {
        let lang_dir = dir.join(lang);
        fs::create_dir_all(&lang_dir).unwrap();

        let path = lang_dir.join(LOCALE_FILE_NAME);
        fs::write(&path, contents).unwrap();

        path
    }

    const EN_DOCUMENT: &str = r#"{
  "common": {
    "save": "Save",
    "cancel": "Cancel"
  },
  "settings": {
    "language": "Language",
    "steps": [1, 2, 3]
  }
}"#;

    #[test]
    #[timeout(1000)]
    fn run_continues_past_missing_language() {
        let tmp = tempfile::tempdir().unwrap();
        write_locale(tmp.path(), "en", EN_DOCUMENT);
        write_locale(tmp.path(), "ru", r#"{ "common": {} }"#);

        let patches = ["en", "fr", "ru"].map(|lang| {
            (
                lang.to_string(),
                PatchOp::merge_key("common", "done", "Done"),
            )
        });

        let outcomes = apply_table(tmp.path(), LOCALE_FILE_NAME, patches);

        assert!(matches!(outcomes[0].1, PatchOutcome::Updated));
        assert!(matches!(outcomes[1].1, PatchOutcome::Missing(_)));
        assert!(matches!(outcomes[2].1, PatchOutcome::Updated));

        // The skipped language must not gain a file.
        assert!(!tmp.path().join("fr").exists());

        let ru = LocaleFile::for_language(tmp.path(), "ru", LOCALE_FILE_NAME).unwrap();
        assert_eq!(ru.get("common", "done"), Some("Done"));
    }

    #[test]
    fn malformed_file_is_reported_and_left_unmodified() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(tmp.path(), "de", "{ not json at all");

        let patches = [(
            "de".to_string(),
            PatchOp::merge_key("common", "done", "Fertig"),
        )];

        let outcomes = apply_table(tmp.path(), LOCALE_FILE_NAME, patches);

        assert!(matches!(outcomes[0].1, PatchOutcome::Failed(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json at all");
    }

    #[test]
    fn merge_leaves_untargeted_sections_intact() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(tmp.path(), "en", EN_DOCUMENT);

        let before = LocaleFile::open(&path).unwrap();
        let settings_before = before.section("settings").unwrap().clone();

        let patches = [(
            "en".to_string(),
            PatchOp::merge_keys(
                "dashboard",
                [("spendingRatio", "Spending Ratio"), ("ofIncome", "of income")],
            ),
        )];
        apply_table(tmp.path(), LOCALE_FILE_NAME, patches);

        let after = LocaleFile::open(&path).unwrap();

        assert_eq!(after.section("settings"), Some(&settings_before));
        assert_eq!(after.get("common", "save"), Some("Save"));
        assert_eq!(after.get("dashboard", "spendingRatio"), Some("Spending Ratio"));
    }

    #[test]
    fn replace_discards_existing_section_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(
            tmp.path(),
            "fr",
            r#"{
  "common": { "save": "Enregistrer" },
  "categories": { "stale": "Périmé" }
}"#,
        );

        let patches = [(
            "fr".to_string(),
            PatchOp::replace_section("categories", [("groceries", "Épicerie"), ("rent", "Loyer")]),
        )];
        apply_table(tmp.path(), LOCALE_FILE_NAME, patches);

        let after = LocaleFile::open(&path).unwrap();
        let categories = after.section("categories").unwrap();

        assert!(!categories.contains_key("stale"));
        assert_eq!(after.get("categories", "groceries"), Some("Épicerie"));
        assert_eq!(after.get("categories", "rent"), Some("Loyer"));
        assert_eq!(after.get("common", "save"), Some("Enregistrer"));
    }

    #[test]
    fn second_run_is_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(tmp.path(), "en", EN_DOCUMENT);

        let op = PatchOp::merge_key("common", "done", "Done");

        apply_table(
            tmp.path(),
            LOCALE_FILE_NAME,
            [("en".to_string(), op.clone())],
        );
        let first = fs::read(&path).unwrap();

        apply_table(tmp.path(), LOCALE_FILE_NAME, [("en".to_string(), op)]);
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}
