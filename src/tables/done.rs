/// Translations for the "Done" action label, keyed by language code.
pub const DONE: &[(&str, &str)] = &[
    ("en", "Done"),
    ("es", "Hecho"),
    ("fr", "Terminé"),
    ("de", "Fertig"),
    ("pt-BR", "Concluído"),
    ("zh-CN", "完成"),
    ("ja", "完了"),
    ("hi", "हो गया"),
    ("ru", "Готово"),
    ("ar", "تم"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_supported_language() {
        assert_eq!(DONE.len(), 10);
        assert!(DONE.iter().any(|(lang, _)| *lang == "en"));
        assert!(DONE.iter().any(|(lang, _)| *lang == "pt-BR"));
    }
}
