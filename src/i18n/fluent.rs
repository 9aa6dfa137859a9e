// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl I18n {
    /// Loads the embedded translations and picks a locale from `cli_lang`,
    /// then `config_lang` (the `[general] language` setting), then the OS.
    pub fn new(cli_lang: Option<String>, config_lang: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|s| s.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let res = match FluentResource::try_new(source) {
                Ok(res) => res,
                Err((_, errors)) => {
                    tracing::warn!(%filename, errors = errors.len(), "skipping unparsable translation file");
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            if let Err(errors) = bundle.add_resource(res) {
                tracing::warn!(%filename, errors = errors.len(), "translation file has duplicate messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale =
            resolve_locale(cli_lang, config_lang, &available_locales).unwrap_or_else(|| {
                DEFAULT_LOCALE.parse().unwrap_or_default()
            });
        tracing::debug!(locale = %current_locale, "localization ready");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }

    pub fn tr(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Translates `key`, or returns `fallback` when the current locale lacks it.
    pub fn tr_or(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or_else(|| fallback.to_string())
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |lang: &str| {
        lang.parse::<LanguageIdentifier>()
            .ok()
            .filter(|l| available.contains(l))
    };

    // CLI first, then config file, then OS locale.
    cli_lang
        .as_deref()
        .and_then(supported)
        .or_else(|| config_lang.and_then(supported))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(supported))
}
