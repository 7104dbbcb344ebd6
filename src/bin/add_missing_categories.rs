use locpatch::{
    DEFAULT_LOCALES_DIR, LOCALE_FILE_NAME,
    patch::{self, PatchOp},
    tables::categories::{self, TARGET_LANGS},
};

fn main() {
    let base_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LOCALES_DIR.to_string());

    // Languages without a curated table get the English labels as a
    // placeholder, keeping every category key present.
    let patches = TARGET_LANGS.iter().map(|lang| {
        (
            lang.to_string(),
            PatchOp::replace_section("categories", categories::categories_for(lang).iter().copied()),
        )
    });

    patch::apply_table(&base_dir, LOCALE_FILE_NAME, patches);
}
