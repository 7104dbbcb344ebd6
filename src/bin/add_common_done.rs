use locpatch::{
    DEFAULT_LOCALES_DIR, LOCALE_FILE_NAME,
    patch::{self, PatchOp},
    tables::done::DONE,
};

fn main() {
    let base_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LOCALES_DIR.to_string());

    let patches = DONE.iter().map(|(lang, text)| {
        (
            lang.to_string(),
            PatchOp::merge_key("common", "done", text),
        )
    });

    patch::apply_table(&base_dir, LOCALE_FILE_NAME, patches);
}
