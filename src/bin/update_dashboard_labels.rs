use locpatch::{
    DEFAULT_LOCALES_DIR, LOCALE_FILE_NAME,
    patch::{self, PatchOp},
    tables::dashboard::DASHBOARD,
};

fn main() {
    let base_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LOCALES_DIR.to_string());

    let patches = DASHBOARD.iter().map(|(lang, labels)| {
        (
            lang.to_string(),
            PatchOp::merge_keys(
                "dashboard",
                [
                    ("spendingRatio", labels.spending_ratio),
                    ("ofIncome", labels.of_income),
                ],
            ),
        )
    });

    patch::apply_table(&base_dir, LOCALE_FILE_NAME, patches);
}
