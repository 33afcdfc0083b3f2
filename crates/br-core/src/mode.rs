use serde::{Deserialize, Serialize};

/// Mode de translittération tri-état, persisté côté hôte.
///
/// Les noms sérialisés (`translate`, `translateWithOriginal`, `disabled`)
/// et l'ordre de rotation font partie du contrat externe : un hôte qui fait
/// tourner le mode doit suivre [`TranslationMode::next`].
///
/// # Example
/// ```
/// use br_core::mode::TranslationMode;
/// assert_eq!(TranslationMode::default(), TranslationMode::Translate);
/// assert_eq!(TranslationMode::Disabled.next(), TranslationMode::Translate);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum TranslationMode {
    /// Encode, cellules braille seulement.
    #[default]
    #[serde(rename = "translate")]
    Translate,
    /// Encode, en intercalant le caractère source après chaque traduction.
    #[serde(rename = "translateWithOriginal", alias = "with-original")]
    TranslateWithOriginal,
    /// L'encodeur n'est pas invoqué, le texte passe inchangé.
    #[serde(rename = "disabled")]
    Disabled,
}

impl TranslationMode {
    /// Nom sérialisé du mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::TranslateWithOriginal => "translateWithOriginal",
            Self::Disabled => "disabled",
        }
    }

    /// Mode suivant dans l'ordre de rotation de l'hôte :
    /// translate → translateWithOriginal → disabled → translate.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Translate => Self::TranslateWithOriginal,
            Self::TranslateWithOriginal => Self::Disabled,
            Self::Disabled => Self::Translate,
        }
    }

    /// Parsing tolérant : toute valeur inconnue, vide ou absente retombe sur
    /// `Translate` plutôt que d'échouer.
    ///
    /// # Example
    /// ```
    /// use br_core::mode::TranslationMode;
    /// assert_eq!(TranslationMode::parse_lenient("disabled"), TranslationMode::Disabled);
    /// assert_eq!(TranslationMode::parse_lenient("???"), TranslationMode::Translate);
    /// ```
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "translateWithOriginal" | "with-original" => Self::TranslateWithOriginal,
            "disabled" => Self::Disabled,
            other => {
                if !other.is_empty() && other != "translate" {
                    log::warn!("mode inconnu '{other}', utilisation de translate");
                }
                Self::Translate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_order_matches_host_contract() {
        let mut mode = TranslationMode::Translate;
        mode = mode.next();
        assert_eq!(mode, TranslationMode::TranslateWithOriginal);
        mode = mode.next();
        assert_eq!(mode, TranslationMode::Disabled);
        mode = mode.next();
        assert_eq!(mode, TranslationMode::Translate);
    }

    #[test]
    fn lenient_parse_round_trips_known_names() {
        for mode in [
            TranslationMode::Translate,
            TranslationMode::TranslateWithOriginal,
            TranslationMode::Disabled,
        ] {
            assert_eq!(TranslationMode::parse_lenient(mode.as_str()), mode);
        }
    }

    #[test]
    fn lenient_parse_defaults_to_translate() {
        assert_eq!(TranslationMode::parse_lenient(""), TranslationMode::Translate);
        assert_eq!(TranslationMode::parse_lenient("garbage"), TranslationMode::Translate);
        assert_eq!(
            TranslationMode::parse_lenient("  disabled\n"),
            TranslationMode::Disabled
        );
    }

    #[test]
    fn serde_names_are_the_external_contract() {
        let toml = "mode = \"translateWithOriginal\"";
        #[derive(Deserialize)]
        struct Probe {
            mode: TranslationMode,
        }
        let probe: Probe = toml::from_str(toml).unwrap();
        assert_eq!(probe.mode, TranslationMode::TranslateWithOriginal);
    }
}
