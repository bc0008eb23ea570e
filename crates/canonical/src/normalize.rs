use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use unicode_normalization::{UnicodeNormalization, is_nfkc};

use crate::config::NormalizeConfig;

/// Lowercased, punctuation-free text derived from a raw document.
///
/// Only [`normalize`] builds one, so holding a `NormalizedText` means the
/// configured transforms have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True for the 32 characters of the ASCII punctuation set
/// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
pub fn is_stripped_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// Applies Unicode normalization, lowercasing and punctuation removal, in
/// that order. With `normalize_unicode` the result is recomposed once more
/// at the end, since deleting punctuation can leave a letter next to a
/// combining mark that used to be separated from it.
///
/// Total and deterministic. Running it again on its own output returns the
/// same text.
pub fn normalize(raw: &str, cfg: &NormalizeConfig) -> NormalizedText {
    // NFKC first: it can change which characters are present at all.
    let source: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(raw.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(raw)
    };

    // `str::to_lowercase` handles context-sensitive mappings (final sigma)
    // that a per-char loop would miss.
    let cased: Cow<str> = if cfg.lowercase {
        Cow::Owned(source.to_lowercase())
    } else {
        source
    };

    let text: String = if cfg.strip_punctuation {
        cased
            .chars()
            .filter(|&ch| !is_stripped_punctuation(ch))
            .collect()
    } else {
        cased.into_owned()
    };

    if cfg.normalize_unicode && !is_nfkc(&text) {
        return NormalizedText(text.nfkc().collect());
    }
    NormalizedText(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> String {
        normalize(raw, &NormalizeConfig::default()).into_string()
    }

    #[test]
    fn lowercases_and_strips_sentence() {
        assert_eq!(
            norm("Il Sapere è la Meraviglia del sapere."),
            "il sapere è la meraviglia del sapere"
        );
    }

    #[test]
    fn lowercases_accented_capitals() {
        assert_eq!(norm("È PERCHÉ COSÌ"), "è perché così");
    }

    #[test]
    fn punctuation_is_deleted_not_replaced() {
        assert_eq!(norm("word,word"), "wordword");
        assert_eq!(norm("L'uomo"), "luomo");
        assert_eq!(norm("a - b"), "a  b");
    }

    #[test]
    fn every_ascii_punctuation_char_is_removed() {
        let all = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
        assert_eq!(all.chars().count(), 32);
        assert_eq!(norm(all), "");
        assert!(all.chars().all(is_stripped_punctuation));
    }

    #[test]
    fn non_ascii_punctuation_is_kept() {
        assert_eq!(norm("«Ciao»…"), "«ciao»…");
    }

    #[test]
    fn digits_and_whitespace_survive() {
        assert_eq!(norm("Anno 1492,\n\tfine."), "anno 1492\n\tfine");
    }

    #[test]
    fn idempotent_on_own_output() {
        let inputs = [
            "Il Sapere è la Meraviglia del sapere.",
            "ΟΔΥΣΣΕΥΣ, Σοφία!",
            "  spazi   multipli \n e a-capo  ",
            "caffe.\u{0301} e perche\u{0301}",
            "ℌ ﬁne ２０２４",
            "",
        ];
        let nfkc = NormalizeConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        for cfg in [NormalizeConfig::default(), nfkc] {
            for input in inputs {
                let once = normalize(input, &cfg);
                let twice = normalize(once.as_str(), &cfg);
                assert_eq!(once, twice, "not idempotent for {input:?} with {cfg:?}");
            }
        }
    }

    #[test]
    fn nfkc_recomposes_marks_exposed_by_stripping() {
        let cfg = NormalizeConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        assert_eq!(normalize("caffe.\u{0301}", &cfg).as_str(), "caff\u{00E9}");
        assert_eq!(normalize("ℌ", &cfg).as_str(), "h");
    }

    #[test]
    fn nfkc_folds_decomposed_accents_when_enabled() {
        let cfg = NormalizeConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        let composed = normalize("perch\u{00E9}", &cfg);
        let decomposed = normalize("perche\u{0301}", &cfg);
        assert_eq!(composed, decomposed);

        let raw_cfg = NormalizeConfig::default();
        assert_ne!(
            normalize("perch\u{00E9}", &raw_cfg),
            normalize("perche\u{0301}", &raw_cfg)
        );
    }

    #[test]
    fn toggles_can_disable_each_step() {
        let keep_case = NormalizeConfig {
            lowercase: false,
            ..Default::default()
        };
        assert_eq!(normalize("Ciao, Mondo!", &keep_case).as_str(), "Ciao Mondo");

        let keep_punct = NormalizeConfig {
            strip_punctuation: false,
            ..Default::default()
        };
        assert_eq!(normalize("Ciao, Mondo!", &keep_punct).as_str(), "ciao, mondo!");
    }
}
