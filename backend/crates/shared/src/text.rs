//! Bilingual Text
//!
//! Every user-facing string produced by the domain services carries both an
//! English and an Arabic rendering. Resolution is a pure, total function:
//! rendering must never fail because one side of a translation is missing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported locales
///
/// Closed set; anything else falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// BCP 47 primary language subtag
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Parse a single language tag ("en", "ar-EG", ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Pick the locale from an `Accept-Language` header value
    ///
    /// First supported tag wins; quality weights beyond ordering are not
    /// honored. `None` or no supported tag yields the default locale.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Locale::default();
        };

        header
            .split(',')
            .filter_map(|part| {
                let tag = part.split(';').next()?;
                Locale::from_tag(tag)
            })
            .next()
            .unwrap_or_default()
    }

    /// Resolve a bilingual text for this locale
    #[inline]
    pub fn resolve<'a>(&self, text: &'a BilingualText) -> &'a str {
        text.get(*self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A value carrying both locale renderings of the same content
///
/// Created by domain services; consumed only for rendering. Either side may
/// arrive empty from upstream; resolution then returns the present side so
/// partial localization never blocks a view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BilingualText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Rendering for the requested locale, falling back to the other side
    /// when the requested one is absent
    pub fn get(&self, locale: Locale) -> &str {
        let (wanted, fallback) = match locale {
            Locale::En => (&self.en, &self.ar),
            Locale::Ar => (&self.ar, &self.en),
        };

        if wanted.is_empty() { fallback } else { wanted }
    }
}
