//! Rule-based annotator implementation.
//!
//! [`SimpleAnnotator`] is a deterministic, dependency-light annotation
//! provider. It splits text on Unicode word boundaries (UAX #29), flags stop
//! words from a static English list, lemmatizes with conservative suffix
//! stripping, assigns coarse part-of-speech tags from a closed-class lexicon
//! plus suffix heuristics, segments sentences on terminal punctuation, and
//! chunks noun phrases with a `DET? (ADJ|NUM)* (NOUN|PROPN)+` pattern.
//!
//! It is intentionally modest: no abbreviation handling, no syntax. Callers
//! with access to a statistical NLP pipeline should wrap it in their own
//! [`Annotator`] implementation instead.
//!
//! # Examples
//!
//! ```
//! use sagitta::annotation::Annotator;
//! use sagitta::annotation::simple::SimpleAnnotator;
//!
//! let annotator = SimpleAnnotator::new();
//! let doc = annotator.annotate("A clever fox. It jumps!").unwrap();
//!
//! assert_eq!(doc.sentences().len(), 2);
//! assert_eq!(doc.noun_phrases()[0].text, "A clever fox");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::annotation::Annotator;
use crate::document::{Document, NounPhraseSpan, Sentence, Token};
use crate::error::Result;

/// English stop words flagged by [`SimpleAnnotator`].
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "isn't", "it", "its", "itself",
    "just", "me", "might", "more", "most", "must", "mustn't", "my", "myself", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves",
    "out", "over", "own", "same", "shall", "shan't", "she", "should", "shouldn't", "so", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "wasn't", "we", "were", "weren't", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "won't", "would", "wouldn't", "you", "your", "yours",
    "yourself", "yourselves",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Closed-class word lists, keyed by the coarse tag they receive.
const CLOSED_CLASS_WORDS: &[(&str, &[&str])] = &[
    (
        "DET",
        &[
            "the", "a", "an", "this", "that", "these", "those", "each", "every", "either",
            "neither", "some", "any", "all", "both", "no", "another",
        ],
    ),
    (
        "PRON",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
            "your", "his", "its", "our", "their", "mine", "yours", "ours", "theirs", "who", "whom",
            "whose", "which", "what", "myself", "yourself", "himself", "herself", "itself",
            "ourselves", "yourselves", "themselves", "anyone", "everyone", "someone", "anything",
            "everything", "something", "nothing",
        ],
    ),
    (
        "ADP",
        &[
            "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "of", "off", "over", "under", "near", "without", "within", "upon", "toward", "towards",
        ],
    ),
    ("CCONJ", &["and", "but", "or", "nor", "yet", "so"]),
    (
        "SCONJ",
        &[
            "because", "although", "though", "while", "if", "unless", "since", "whereas",
            "whether",
        ],
    ),
    (
        "AUX",
        &[
            "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
            "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can",
            "could",
        ],
    ),
    ("PART", &["not"]),
    (
        "ADV",
        &[
            "very", "too", "quite", "rather", "almost", "always", "never", "often", "sometimes",
            "usually", "again", "also", "just", "still", "even", "only", "here", "there", "now",
            "then", "soon", "already",
        ],
    ),
    (
        "NUM",
        &[
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "hundred", "thousand", "million", "billion",
        ],
    ),
    ("INTJ", &["oh", "wow", "hey", "hello", "hi", "ouch", "oops", "hmm", "yeah"]),
];

static CLOSED_CLASS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (tag, words) in CLOSED_CLASS_WORDS {
        for word in *words {
            map.entry(*word).or_insert(*tag);
        }
    }
    map
});

/// Irregular lemma forms checked before the suffix rules.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("going", "go"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("got", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("ran", "run"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
];

static IRREGULAR_LEMMA_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_LEMMAS.iter().copied().collect());

/// Terminal punctuation characters that close a sentence.
const SENTENCE_TERMINALS: &[char] = &['.', '!', '?', '\u{2026}'];

/// A deterministic rule-based annotation provider.
///
/// See the [module documentation](self) for the rules applied at each stage.
#[derive(Clone, Debug, Default)]
pub struct SimpleAnnotator;

impl SimpleAnnotator {
    /// Create a new rule-based annotator.
    pub fn new() -> Self {
        SimpleAnnotator
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut at_sentence_start = true;

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                // A single ASCII space is ordinary inter-word spacing, not a
                // token. Anything else (newlines, runs, tabs) is preserved.
                if segment != " " && !segment.is_empty() {
                    tokens.push(Token::space(segment, tokens.len()));
                }
                continue;
            }

            if !segment.chars().any(char::is_alphanumeric) {
                tokens.push(Token::punct(segment, tokens.len()));
                if segment.chars().any(|c| SENTENCE_TERMINALS.contains(&c)) {
                    at_sentence_start = true;
                }
                continue;
            }

            let lower = segment.to_lowercase();
            let is_stop = STOP_WORD_SET.contains(lower.as_str());
            let pos_tag = tag_word(segment, &lower, at_sentence_start);
            let lemma = lemmatize(&lower);
            tokens.push(Token::new(
                segment,
                lemma,
                pos_tag,
                is_stop,
                false,
                false,
                tokens.len(),
            ));
            at_sentence_start = false;
        }

        tokens
    }

    /// Segment tokens into contiguous sentence ranges.
    ///
    /// A sentence closes at the first terminal punctuation token after at
    /// least one word token; trailing punctuation-only or space-only tails
    /// are absorbed into the preceding sentence.
    fn split_sentences(&self, tokens: &[Token]) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut has_word = false;

        for (index, token) in tokens.iter().enumerate() {
            if token.is_word() {
                has_word = true;
                continue;
            }
            if token.is_punct
                && has_word
                && token.text.chars().any(|c| SENTENCE_TERMINALS.contains(&c))
            {
                sentences.push(Sentence::new(start, index + 1));
                start = index + 1;
                has_word = false;
            }
        }

        if start < tokens.len() {
            if has_word || sentences.is_empty() {
                sentences.push(Sentence::new(start, tokens.len()));
            } else if let Some(last) = sentences.last_mut() {
                last.end = tokens.len();
            }
        }

        sentences
    }

    /// Chunk maximal `DET? (ADJ|NUM)* (NOUN|PROPN)+` spans.
    fn chunk_noun_phrases(&self, tokens: &[Token]) -> Vec<NounPhraseSpan> {
        let mut spans = Vec::new();
        let mut index = 0;

        while index < tokens.len() {
            let start = index;
            let mut cursor = index;

            if cursor < tokens.len() && tokens[cursor].pos_tag == "DET" {
                cursor += 1;
            }
            while cursor < tokens.len()
                && matches!(tokens[cursor].pos_tag.as_str(), "ADJ" | "NUM")
            {
                cursor += 1;
            }
            let head_start = cursor;
            while cursor < tokens.len()
                && matches!(tokens[cursor].pos_tag.as_str(), "NOUN" | "PROPN")
            {
                cursor += 1;
            }

            if cursor > head_start {
                let text = tokens[start..cursor]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                spans.push(NounPhraseSpan::new(start, cursor, text));
                index = cursor;
            } else {
                index = start + 1;
            }
        }

        spans
    }
}

impl Annotator for SimpleAnnotator {
    fn annotate(&self, text: &str) -> Result<Document> {
        let tokens = self.tokenize(text);
        let sentences = self.split_sentences(&tokens);
        let noun_phrases = self.chunk_noun_phrases(&tokens);
        Document::new(text.to_string(), tokens, sentences, noun_phrases)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

/// Assign a coarse part-of-speech tag to a word token.
fn tag_word(text: &str, lower: &str, at_sentence_start: bool) -> &'static str {
    if lower.chars().any(|c| c.is_ascii_digit())
        && lower.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
    {
        return "NUM";
    }

    if let Some(tag) = CLOSED_CLASS.get(lower) {
        return tag;
    }

    // A capitalized word away from a sentence start is a decent proper-noun
    // signal in English prose.
    if !at_sentence_start && text.chars().next().is_some_and(char::is_uppercase) {
        return "PROPN";
    }

    if lower.len() > 3 {
        if lower.ends_with("ly") {
            return "ADV";
        }
        if lower.ends_with("ing") || lower.ends_with("ed") {
            return "VERB";
        }
        for suffix in ["ous", "ful", "ive", "able", "ible", "ish", "less"] {
            if lower.ends_with(suffix) {
                return "ADJ";
            }
        }
        for suffix in ["tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood"] {
            if lower.ends_with(suffix) {
                return "NOUN";
            }
        }
    }

    "NOUN"
}

/// Reduce a lowercased word to a base form with conservative suffix rules.
///
/// Irregular forms come from a small static table; everything else goes
/// through plural and participle stripping with final-consonant undoubling.
/// Words of three characters or fewer are returned unchanged.
fn lemmatize(lower: &str) -> String {
    if let Some(lemma) = IRREGULAR_LEMMA_MAP.get(lower) {
        return (*lemma).to_string();
    }
    if lower.len() <= 3 {
        return lower.to_string();
    }

    if lower.len() > 4 && lower.ends_with("ies") {
        let mut stem = lower[..lower.len() - 3].to_string();
        stem.push('y');
        return stem;
    }
    if lower.ends_with("sses") {
        return lower[..lower.len() - 2].to_string();
    }
    for suffix in ["xes", "ches", "shes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.len() > 5 && lower.ends_with("ing") {
        let stem = undouble(&lower[..lower.len() - 3]);
        if has_vowel(&stem) {
            return stem;
        }
        return lower.to_string();
    }
    if lower.len() > 4 && lower.ends_with("ed") {
        let stem = undouble(&lower[..lower.len() - 2]);
        if has_vowel(&stem) {
            return stem;
        }
        return lower.to_string();
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && !lower.ends_with("is")
    {
        return lower[..lower.len() - 1].to_string();
    }

    lower.to_string()
}

fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

/// Drop a doubled trailing consonant ("runn" -> "run").
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        if last == chars[chars.len() - 2] && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u') {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}
