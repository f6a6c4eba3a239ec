//! User-facing message catalog backed by Fluent.
//!
//! Two bundles are embedded at compile time: Russian (the bot's original
//! audience) and English (the fallback for every other `language_code`
//! Telegram reports).

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::sync::OnceLock;
use unic_langid::LanguageIdentifier;

const EN_MAIN: &str = include_str!("../locales/en/main.ftl");
const RU_MAIN: &str = include_str!("../locales/ru/main.ftl");

const FALLBACK_LOCALE: &str = "en";

/// Localization manager holding one bundle per supported locale.
pub struct LocalizationManager {
    bundles: HashMap<&'static str, FluentBundle<FluentResource>>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles = HashMap::new();
        for (locale, source) in [("en", EN_MAIN), ("ru", RU_MAIN)] {
            bundles.insert(locale, Self::create_bundle(locale, source));
        }
        Self { bundles }
    }

    fn create_bundle(locale: &str, source: &str) -> FluentBundle<FluentResource> {
        let langid: LanguageIdentifier = locale.parse().expect("locale id should be valid");
        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Messages go straight to Telegram; skip the Unicode isolation
        // marks Fluent would otherwise wrap placeables in.
        bundle.set_use_isolating(false);

        // The sources are embedded and known-good; on a parse error, keep
        // whatever parsed.
        let resource =
            FluentResource::try_new(source.to_string()).unwrap_or_else(|(resource, _)| resource);
        let _ = bundle.add_resource(resource);
        bundle
    }

    /// Pick a bundle from a Telegram `language_code` ("ru", "ru-RU", ...),
    /// falling back to English.
    fn bundle_for(&self, language_code: Option<&str>) -> &FluentBundle<FluentResource> {
        let primary = language_code
            .and_then(|code| code.split('-').next())
            .unwrap_or(FALLBACK_LOCALE);
        self.bundles
            .get(primary)
            .unwrap_or_else(|| &self.bundles[FALLBACK_LOCALE])
    }

    /// Resolve a message key for the given language.
    pub fn get_message(
        &self,
        key: &str,
        language_code: Option<&str>,
        args: Option<&FluentArgs>,
    ) -> String {
        let bundle = self.bundle_for(language_code);

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };
        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let mut errors = vec![];
        bundle
            .format_pattern(pattern, args, &mut errors)
            .into_owned()
    }
}

static LOCALIZATION_MANAGER: OnceLock<LocalizationManager> = OnceLock::new();

fn manager() -> &'static LocalizationManager {
    LOCALIZATION_MANAGER.get_or_init(LocalizationManager::new)
}

/// Get a localized message for the given Telegram language code.
pub fn t_lang(key: &str, language_code: Option<&str>) -> String {
    manager().get_message(key, language_code, None)
}

/// Get a localized message with string arguments.
pub fn t_args_lang(key: &str, language_code: Option<&str>, args: &[(&str, &str)]) -> String {
    let mut fluent_args = FluentArgs::new();
    for (name, value) in args {
        fluent_args.set(*name, FluentValue::from(*value));
    }
    manager().get_message(key, language_code, Some(&fluent_args))
}
