use crate::mode::TranslationMode;

/// Fournit des segments de texte brut au pipeline, dans l'ordre du document.
///
/// C'est l'abstraction du parcours d'arbre côté hôte : chaque segment est un
/// bloc de texte indépendant dont le remplacement encodé sera réécrit à la
/// même position.
///
/// # Example
/// ```
/// use br_core::traits::SegmentSource;
///
/// struct OneShot(Option<String>);
/// impl SegmentSource for OneShot {
///     fn next_segment(&mut self) -> anyhow::Result<Option<String>> { Ok(self.0.take()) }
/// }
///
/// let mut source = OneShot(Some("hello".into()));
/// assert_eq!(source.next_segment().unwrap().as_deref(), Some("hello"));
/// assert_eq!(source.next_segment().unwrap(), None);
/// ```
pub trait SegmentSource: Send {
    /// Retourne le prochain segment, ou `Ok(None)` quand la source est épuisée.
    ///
    /// # Errors
    /// Une lecture interrompue en cours de flux remonte en erreur plutôt que
    /// de passer pour une fin d'entrée.
    fn next_segment(&mut self) -> anyhow::Result<Option<String>>;
}

impl<T: SegmentSource + ?Sized> SegmentSource for Box<T> {
    fn next_segment(&mut self) -> anyhow::Result<Option<String>> {
        (**self).next_segment()
    }
}

/// Accepte les remplacements encodés, un par segment, dans l'ordre d'émission.
///
/// CONTRAT : un appel à `accept` par segment fourni par la source, identité
/// et ordre des segments préservés.
pub trait SegmentSink {
    /// Consomme le rendu encodé d'un segment.
    ///
    /// # Errors
    /// Propagates the underlying write failure, if any.
    fn accept(&mut self, encoded: &str) -> anyhow::Result<()>;
}

/// Lecture synchrone du mode de translittération courant.
///
/// Un état absent ou illisible doit se lire comme `Translate`, jamais comme
/// une erreur.
pub trait ModeStore {
    /// Mode courant.
    fn current(&self) -> TranslationMode;
}
