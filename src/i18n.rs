// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库,支持中文（默认）和英文
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 已提供语言包的语言代码
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 返回
/// - true: 已切换
/// - false: 不支持的语言代码,保持当前语言
pub fn set_locale(locale: &str) -> bool {
    let locale = locale.trim();
    if !SUPPORTED_LOCALES.contains(&locale) {
        tracing::warn!(locale = %locale, "不支持的语言代码，保持当前语言");
        return false;
    }
    rust_i18n::set_locale(locale);
    true
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use academic_data_entry::i18n::t;
/// let msg = t("tab.training");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数,占位符格式 `%{name}`）
///
/// # 示例
/// ```no_run
/// use academic_data_entry::i18n::t_with_args;
/// let msg = t_with_args("ingest.confirm_commit", &[("count", "3"), ("title", "Classes")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
// 断言具体译文的测试需持有该锁。
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_locale_is_rejected() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert!(!set_locale("fr"));
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_translate_tab_labels() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(t("tab.admission"), "招生");

        set_locale("en");
        assert_eq!(t("tab.admission"), "Admissions");

        set_locale("zh-CN");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args(
            "ingest.confirm_commit",
            &[("count", "12"), ("title", "Import classes")],
        );
        assert!(msg.contains("12"));
        assert!(msg.contains("Import classes"));
        assert!(!msg.contains("%{count}"));

        set_locale("zh-CN");
        let msg = t_with_args("ingest.confirm_commit", &[("count", "12"), ("title", "班级")]);
        assert!(msg.contains("确认"));
        assert!(msg.contains("12"));
    }
}
