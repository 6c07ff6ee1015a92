//! Part-of-speech collaborator used by the relevance-feedback path.

/// Closed tag set emitted by a [`PosTagger`].
///
/// The noun and verb tags follow the Penn Treebank names; everything
/// else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    /// Noun, singular
    Nn,
    /// Noun, plural
    Nns,
    /// Proper noun, singular
    Nnp,
    /// Proper noun, plural
    Nnps,
    /// Verb, base form
    Vb,
    /// Verb, past tense
    Vbd,
    /// Verb, gerund
    Vbg,
    /// Verb, past participle
    Vbn,
    /// Verb, non-3rd person singular present
    Vbp,
    /// Verb, 3rd person singular present
    Vbz,
    /// Anything that is neither noun nor verb
    Other,
}

impl PosTag {
    /// Nouns and verbs carry the content of a feedback document; the
    /// rest is noise for query expansion.
    pub fn is_content_bearing(self) -> bool {
        !matches!(self, PosTag::Other)
    }
}

/// Tagging contract. `tag` pairs every input token with one tag from
/// the closed set, in input order.
pub trait PosTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)>;
}

/// Suffix-rule tagger bundled as the default implementation.
///
/// It separates obvious verb morphology and plural forms from the rest
/// and defaults unrecognized content words to nouns, which errs toward
/// keeping expansion terms. A statistical tagger can replace it behind
/// the same trait without touching the engine.
#[derive(Debug, Default)]
pub struct HeuristicTagger;

impl PosTagger for HeuristicTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        tokens
            .iter()
            .map(|token| (token.clone(), tag_token(token)))
            .collect()
    }
}

fn tag_token(token: &str) -> PosTag {
    let Some(first) = token.chars().next() else {
        return PosTag::Other;
    };
    if !first.is_alphabetic() {
        return PosTag::Other;
    }
    if first.is_uppercase() {
        return if token.ends_with('s') {
            PosTag::Nnps
        } else {
            PosTag::Nnp
        };
    }
    if token.ends_with("ly") && token.len() > 3 {
        return PosTag::Other; // adverb
    }
    if token.ends_with("ing") && token.len() > 4 {
        return PosTag::Vbg;
    }
    if token.ends_with("ed") && token.len() > 3 {
        return PosTag::Vbd;
    }
    if token.ends_with("en") && token.len() > 3 {
        return PosTag::Vbn;
    }
    if token.ends_with('s') && token.len() > 2 {
        return PosTag::Nns;
    }
    PosTag::Nn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_suffixes() {
        assert_eq!(tag_token("running"), PosTag::Vbg);
        assert_eq!(tag_token("jumped"), PosTag::Vbd);
        assert_eq!(tag_token("taken"), PosTag::Vbn);
    }

    #[test]
    fn test_nouns() {
        assert_eq!(tag_token("cat"), PosTag::Nn);
        assert_eq!(tag_token("cats"), PosTag::Nns);
        assert_eq!(tag_token("London"), PosTag::Nnp);
    }

    #[test]
    fn test_non_content_tokens() {
        assert_eq!(tag_token("42"), PosTag::Other);
        assert_eq!(tag_token("quickly"), PosTag::Other);
        assert_eq!(tag_token(""), PosTag::Other);
    }

    #[test]
    fn test_tagger_pairs_in_order() {
        let tokens = vec!["running".to_string(), "42".to_string()];
        let tagged = HeuristicTagger.tag(&tokens);
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0], ("running".to_string(), PosTag::Vbg));
        assert!(!tagged[1].1.is_content_bearing());
    }
}
