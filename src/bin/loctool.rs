use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use walkdir::WalkDir;

use locpatch::{
    DEFAULT_LOCALES_DIR, LOCALE_FILE_NAME, LocaleError, LocaleFile,
    patch::{self, PatchOp},
};

#[derive(Parser, Debug)]
#[command(
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(short_flag = 's')]
    /// Set one key inside a section for every language in a translations file
    Set {
        /// JSON file mapping language codes to the translated string
        #[arg(value_name = "TRANSLATIONS")]
        translations_file: PathBuf,

        /// Top-level section holding the key
        #[arg(long)]
        section: String,

        /// Key to set inside the section
        #[arg(long)]
        key: String,

        /// The locales directory holding one subdirectory per language
        #[arg(short = 'd', long = "dir", default_value = DEFAULT_LOCALES_DIR)]
        locales_dir: PathBuf,

        /// Locale file name inside each language directory
        #[arg(long, default_value = LOCALE_FILE_NAME)]
        file_name: String,
    },

    #[command(short_flag = 'r')]
    /// Replace a whole section for every target language from a table file
    Replace {
        /// JSON file mapping language codes to a key/string table
        #[arg(value_name = "TABLES")]
        tables_file: PathBuf,

        /// Top-level section to replace
        #[arg(long)]
        section: String,

        /// Languages to patch (defaults to the languages present in TABLES)
        #[arg(long = "lang")]
        langs: Vec<String>,

        /// Language whose table stands in for languages missing from TABLES
        #[arg(long)]
        fallback: Option<String>,

        /// The locales directory holding one subdirectory per language
        #[arg(short = 'd', long = "dir", default_value = DEFAULT_LOCALES_DIR)]
        locales_dir: PathBuf,

        /// Locale file name inside each language directory
        #[arg(long, default_value = LOCALE_FILE_NAME)]
        file_name: String,
    },

    #[command(short_flag = 'l')]
    /// List the languages found under a locales directory
    List {
        /// The locales directory holding one subdirectory per language
        #[arg(value_name = "DIR", default_value = DEFAULT_LOCALES_DIR)]
        locales_dir: PathBuf,

        /// Locale file name inside each language directory
        #[arg(long, default_value = LOCALE_FILE_NAME)]
        file_name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Set {
            translations_file,
            section,
            key,
            locales_dir,
            file_name,
        } => {
            let table: IndexMap<String, String> = read_json_file(&translations_file);

            let patches = table
                .into_iter()
                .map(|(lang, text)| (lang, PatchOp::merge_key(&section, &key, &text)));

            patch::apply_table(&locales_dir, &file_name, patches);
        }
        Commands::Replace {
            tables_file,
            section,
            langs,
            fallback,
            locales_dir,
            file_name,
        } => {
            let tables: IndexMap<String, IndexMap<String, String>> = read_json_file(&tables_file);

            let langs = if langs.is_empty() {
                tables.keys().cloned().collect()
            } else {
                langs
            };

            let fallback_table = fallback.as_ref().map(|lang| match tables.get(lang) {
                Some(table) => table,
                None => {
                    eprintln!("Fallback language {} has no table in the tables file.", lang);

                    error_exit();
                }
            });

            let mut patches = vec![];

            for lang in langs {
                let entries = match tables.get(&lang).or(fallback_table) {
                    Some(table) => table,
                    None => {
                        eprintln!("No table for {} and no fallback given, skipping.", lang);

                        continue;
                    }
                };

                patches.push((
                    lang,
                    PatchOp::replace_section(
                        &section,
                        entries.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                    ),
                ));
            }

            patch::apply_table(&locales_dir, &file_name, patches);
        }
        Commands::List {
            locales_dir,
            file_name,
        } => {
            if !locales_dir.is_dir() {
                eprintln!("Locales directory {} does not exist.", locales_dir.display());

                error_exit();
            }

            let mut lang_dirs: Vec<PathBuf> = WalkDir::new(&locales_dir)
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_dir())
                .map(|entry| entry.into_path())
                .collect();

            lang_dirs.sort();

            for lang_dir in lang_dirs {
                let lang = lang_dir
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("unknown")
                    .to_string();

                match LocaleFile::open(lang_dir.join(&file_name)) {
                    Ok(locale) => {
                        let sections: Vec<&str> = locale.sections().collect();

                        println!("{}: {}", lang, sections.join(", "));
                    }
                    Err(LocaleError::NotFound(_)) => {
                        println!("{}: missing {}", lang, file_name);
                    }
                    Err(e) => {
                        println!("{}: unreadable ({})", lang, e);
                    }
                }
            }
        }
    }
}

fn read_json_file<T: serde::de::DeserializeOwned>(path: &PathBuf) -> T {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Unable to open file {}. Error: {}", path.display(), e);

            error_exit();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Unable to parse {}. Error: {}", path.display(), e);

            error_exit();
        }
    }
}

fn error_exit() -> ! {
    eprintln!("\nUnable to continue.");

    std::process::exit(1);
}
