pub mod patch;

pub mod tables;

use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

/// Locales directory of the mobile app, relative to the repository root.
pub const DEFAULT_LOCALES_DIR: &str = "./src/locales";

/// File name of the locale document inside each language directory.
pub const LOCALE_FILE_NAME: &str = "common.json";

#[derive(Debug)]
pub enum LocaleError {
    /// No locale file exists for this language. The language is skipped and
    /// the file is never created.
    NotFound(PathBuf),
    /// The locale file could not be read or written.
    Io(String),
    /// The locale file exists but does not hold the expected JSON structure.
    Parse(String),
}

impl From<std::io::Error> for LocaleError {
    fn from(value: std::io::Error) -> Self {
        LocaleError::Io(format!("File error: {}", value))
    }
}

impl From<serde_json::Error> for LocaleError {
    fn from(value: serde_json::Error) -> Self {
        LocaleError::Parse(value.to_string())
    }
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocaleError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            LocaleError::Io(details) => write!(f, "{}", details),
            LocaleError::Parse(details) => write!(f, "{}", details),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocaleFile {
    path: PathBuf,
    document: Map<String, Value>,
}

impl LocaleFile {
    /**
    Opens and parses the locale file at `path`.

    The file must already exist: locale files are only ever mutated, never
    created from nothing.

    # Errors
    - [`LocaleError::NotFound`] when no file exists at the path
    - [`LocaleError::Io`] when the file exists but can not be read
    - [`LocaleError::Parse`] when the contents are not a JSON object

    # Examples
    ```no_run
    use locpatch::LocaleFile;

    let locale = LocaleFile::open("./src/locales/en/common.json")
        .expect("Unable to open locale file.");
    ```
    */
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LocaleFile, LocaleError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LocaleError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let document: Map<String, Value> = serde_json::from_slice(&bytes)?;

        Ok(LocaleFile {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Opens the locale file for one language under `base_dir`, located at
    /// `base_dir/<lang>/<file_name>`.
    pub fn for_language<P: AsRef<Path>>(
        base_dir: P,
        lang: &str,
        file_name: &str,
    ) -> Result<LocaleFile, LocaleError> {
        LocaleFile::open(LocaleFile::language_path(base_dir, lang, file_name))
    }

    pub fn language_path<P: AsRef<Path>>(base_dir: P, lang: &str, file_name: &str) -> PathBuf {
        base_dir.as_ref().join(lang).join(file_name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the names of the top-level sections, in document order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    /// Looks up a string value inside a top-level section.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.document.get(section)?.get(key)?.as_str()
    }

    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.document.get(name)?.as_object()
    }

    /// Returns the named top-level section, creating it as an empty object
    /// when absent.
    ///
    /// # Errors
    /// [`LocaleError::Parse`] when the name is already taken by a non-object
    /// value.
    pub fn section_mut(&mut self, name: &str) -> Result<&mut Map<String, Value>, LocaleError> {
        self.document
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| LocaleError::Parse(format!("section \"{}\" is not an object", name)))
    }

    /// Sets one key inside a section, creating the section when absent and
    /// leaving every other key untouched.
    pub fn set_key(&mut self, section: &str, key: &str, value: &str) -> Result<(), LocaleError> {
        self.section_mut(section)?
            .insert(key.to_string(), Value::String(value.to_string()));

        Ok(())
    }

    /// Assigns a complete mapping as the value of a top-level section,
    /// discarding whatever was there before.
    pub fn replace_section<'a, I>(&mut self, name: &str, entries: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let section: Map<String, Value> = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect();

        self.document.insert(name.to_string(), Value::Object(section));
    }

    /**
    Serializes the document back to the path it was opened from, overwriting
    the previous contents in full.

    The output is UTF-8 with 2-space indentation, and non-ASCII text is
    written as literal characters rather than `\uXXXX` escapes, so a second
    save with no intervening edits is byte-identical.

    # Errors
    - [`LocaleError::Io`] when the file can not be written
    */
    pub fn save(&self) -> Result<(), LocaleError> {
        let mut bytes = Vec::new();

        let formatter = PrettyFormatter::with_indent(b"  ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);

        self.document.serialize(&mut serializer)?;

        fs::write(&self.path, bytes)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_locale(dir: &Path, lang: &str, contents: &str) -> PathBuf {
        let lang_dir = dir.join(lang);
        fs::create_dir_all(&lang_dir).unwrap();

        let path = lang_dir.join(LOCALE_FILE_NAME);
        fs::write(&path, contents).unwrap();

        path
    }

    #[test]
    fn missing_file_is_not_created() {
        let tmp = tempfile::tempdir().unwrap();

        let path = LocaleFile::language_path(tmp.path(), "fr", LOCALE_FILE_NAME);
        let result = LocaleFile::open(&path);

        assert!(matches!(result, Err(LocaleError::NotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn set_key_creates_section_and_preserves_siblings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(
            tmp.path(),
            "en",
            r#"{
  "common": {
    "save": "Save"
  }
}"#,
        );

        let mut locale = LocaleFile::open(&path).unwrap();
        locale.set_key("common", "done", "Done").unwrap();
        locale.set_key("dashboard", "ofIncome", "of income").unwrap();

        assert_eq!(locale.get("common", "save"), Some("Save"));
        assert_eq!(locale.get("common", "done"), Some("Done"));
        assert_eq!(locale.get("dashboard", "ofIncome"), Some("of income"));
    }

    #[test]
    fn set_key_rejects_non_object_section() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(tmp.path(), "en", r#"{ "common": "not a section" }"#);

        let mut locale = LocaleFile::open(&path).unwrap();

        assert!(matches!(
            locale.set_key("common", "done", "Done"),
            Err(LocaleError::Parse(_))
        ));
    }

    #[test]
    fn save_writes_two_space_indent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(tmp.path(), "en", r#"{ "common": { "save": "Save" } }"#);

        let mut locale = LocaleFile::open(&path).unwrap();
        locale.set_key("common", "done", "Done").unwrap();
        locale.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();

        assert_eq!(
            written,
            "{\n  \"common\": {\n    \"save\": \"Save\",\n    \"done\": \"Done\"\n  }\n}"
        );
    }

    #[test]
    fn save_keeps_non_ascii_text_literal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_locale(tmp.path(), "zh-CN", "{}");

        let mut locale = LocaleFile::open(&path).unwrap();
        locale.set_key("common", "done", "完成").unwrap();
        locale.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();

        assert!(written.contains("完成"));
        assert!(!written.contains("\\u"));
    }
}
