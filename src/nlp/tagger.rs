//! Rule-based tokenizer and part-of-speech tagger.
//!
//! Segmentation follows unicode sentence and word boundaries (UAX #29).
//! Tags are Penn Treebank tags, coming from (in order):
//! 1. punctuation and numbers,
//! 1. a lexicon of closed-class words and irregular verb forms,
//! 1. the previous word (`to`/modals, subject pronouns, perfect/passive auxiliaries),
//! 1. capitalization inside a sentence (proper nouns),
//! 1. suffixes.
//!
//! Anything left is tagged as a singular noun.
use std::collections::HashMap;

use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

use super::{Sentence, Tokenize, Word};
use crate::error::Error;

lazy_static! {
    /// surface form -> (xpos, lemma)
    static ref LEXICON: HashMap<&'static str, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        for w in [
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "all", "both", "another", "either", "neither",
        ] {
            m.insert(w, ("DT", w));
        }
        for w in [
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
            "yourselves",
        ] {
            m.insert(w, ("PRP", w));
        }
        for w in ["my", "your", "his", "its", "our", "their"] {
            m.insert(w, ("PRP$", w));
        }
        for w in [
            "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "from", "over", "under",
            "since", "until", "while", "because", "if", "than", "as", "like", "though",
            "although", "whether", "upon", "within", "without", "across", "toward", "towards",
        ] {
            m.insert(w, ("IN", w));
        }
        for w in ["up", "down", "out", "off"] {
            m.insert(w, ("RP", w));
        }
        for w in ["and", "or", "but", "nor", "plus"] {
            m.insert(w, ("CC", w));
        }
        for w in ["can", "could", "will", "would", "shall", "should", "may", "might", "must"] {
            m.insert(w, ("MD", w));
        }
        for w in ["who", "whom", "what"] {
            m.insert(w, ("WP", w));
        }
        for w in ["when", "where", "why", "how"] {
            m.insert(w, ("WRB", w));
        }
        for w in [
            "not", "very", "also", "just", "too", "so", "never", "always", "here", "now",
            "then", "only", "really", "already", "still", "even", "again", "ever", "quite",
            "soon", "yet", "maybe", "perhaps",
        ] {
            m.insert(w, ("RB", w));
        }
        for w in [
            "yes", "hi", "hello", "hey", "oh", "ok", "okay", "yeah", "wow", "bye", "um", "uh",
            "please", "sorry",
        ] {
            m.insert(w, ("UH", w));
        }
        for w in [
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "hundred", "thousand", "million",
        ] {
            m.insert(w, ("CD", w));
        }
        m.insert("to", ("TO", "to"));
        m.insert("there", ("EX", "there"));
        m.insert("which", ("WDT", "which"));
        m.insert("whose", ("WP$", "whose"));

        let verbs = [
            ("be", "VB", "be"), ("am", "VBP", "be"), ("are", "VBP", "be"),
            ("is", "VBZ", "be"), ("was", "VBD", "be"), ("were", "VBD", "be"),
            ("been", "VBN", "be"), ("being", "VBG", "be"),
            ("have", "VBP", "have"), ("has", "VBZ", "have"), ("had", "VBD", "have"),
            ("having", "VBG", "have"),
            ("do", "VBP", "do"), ("does", "VBZ", "do"), ("did", "VBD", "do"),
            ("done", "VBN", "do"), ("doing", "VBG", "do"),
            ("go", "VBP", "go"), ("goes", "VBZ", "go"), ("went", "VBD", "go"),
            ("gone", "VBN", "go"),
            ("get", "VBP", "get"), ("gets", "VBZ", "get"), ("got", "VBD", "get"),
            ("gotten", "VBN", "get"), ("getting", "VBG", "get"),
            ("say", "VBP", "say"), ("said", "VBD", "say"),
            ("make", "VBP", "make"), ("made", "VBD", "make"), ("making", "VBG", "make"),
            ("take", "VBP", "take"), ("took", "VBD", "take"), ("taken", "VBN", "take"),
            ("taking", "VBG", "take"),
            ("come", "VBP", "come"), ("came", "VBD", "come"), ("coming", "VBG", "come"),
            ("give", "VBP", "give"), ("gave", "VBD", "give"), ("given", "VBN", "give"),
            ("giving", "VBG", "give"),
            ("know", "VBP", "know"), ("knew", "VBD", "know"), ("known", "VBN", "know"),
            ("think", "VBP", "think"), ("thought", "VBD", "think"),
            ("tell", "VBP", "tell"), ("told", "VBD", "tell"),
            ("find", "VBP", "find"), ("found", "VBD", "find"),
            ("send", "VBP", "send"), ("sent", "VBD", "send"),
            ("pay", "VBP", "pay"), ("paid", "VBD", "pay"),
            ("buy", "VBP", "buy"), ("bought", "VBD", "buy"),
            ("leave", "VBP", "leave"), ("left", "VBD", "leave"),
            ("feel", "VBP", "feel"), ("felt", "VBD", "feel"),
            ("keep", "VBP", "keep"), ("kept", "VBD", "keep"),
            ("hear", "VBP", "hear"), ("heard", "VBD", "hear"),
            ("see", "VBP", "see"), ("saw", "VBD", "see"), ("seen", "VBN", "see"),
            ("write", "VBP", "write"), ("wrote", "VBD", "write"), ("written", "VBN", "write"),
            ("lose", "VBP", "lose"), ("lost", "VBD", "lose"),
            ("need", "VBP", "need"), ("want", "VBP", "want"),
        ];
        for (surface, tag, lemma) in verbs {
            m.insert(surface, (tag, lemma));
        }
        m
    };
}

const SUBJECT_PRONOUNS: [&str; 7] = ["i", "you", "we", "they", "he", "she", "it"];
const THIRD_PERSON: [&str; 3] = ["he", "she", "it"];

/// Verb forms become `VB` after `to` or a modal.
fn is_verb(xpos: &str) -> bool {
    xpos.starts_with("VB")
}

/// Self-contained [Tokenize] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTagger;

impl RuleTagger {
    fn tag_sentence(&self, sentence: &str) -> Sentence {
        let mut words: Vec<Word> = Vec::new();
        let tokens = sentence
            .split_word_bounds()
            .filter(|token| !token.trim().is_empty());

        for (position, token) in tokens.enumerate() {
            let (xpos, lemma) = tag(token, position == 0, words.last());
            words.push(Word {
                id: position + 1,
                text: token.to_string(),
                lemma,
                upos: upos(xpos).to_string(),
                xpos: xpos.to_string(),
            });
        }

        Sentence::new(words)
    }
}

impl Tokenize for RuleTagger {
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>, Error> {
        Ok(text
            .split_sentence_bounds()
            .map(|sentence| self.tag_sentence(sentence))
            .filter(|sentence| !sentence.words.is_empty())
            .collect())
    }
}

/// Returns the (xpos, lemma) couple for a token.
fn tag(token: &str, initial: bool, previous: Option<&Word>) -> (&'static str, String) {
    if token.chars().all(|c| !c.is_alphanumeric()) {
        return (punctuation(token), token.to_string());
    }

    let lower = token.to_lowercase();

    if lower.chars().any(|c| c.is_ascii_digit())
        && lower
            .chars()
            .all(|c| c.is_ascii_digit() || ",.:/-".contains(c))
    {
        return ("CD", lower);
    }

    let prev_xpos = previous.map(|w| w.xpos.as_str());
    let prev_lemma = previous.map(|w| w.lemma.as_str());
    let after_base_trigger = matches!(prev_xpos, Some("TO") | Some("MD"));
    let after_auxiliary = matches!(prev_lemma, Some("have") | Some("be"));

    if let Some((xpos, lemma)) = LEXICON.get(contraction_head(&lower).as_str()) {
        let xpos = match *xpos {
            x if is_verb(x) && after_base_trigger => "VB",
            "VBD" if after_auxiliary => "VBN",
            x => x,
        };
        return (xpos, lemma.to_string());
    }

    if after_base_trigger {
        return ("VB", lower);
    }

    if !initial && token.chars().next().map_or(false, char::is_uppercase) {
        return ("NNP", token.to_string());
    }

    let len = lower.chars().count();
    let after_subject = prev_lemma.map_or(false, |l| SUBJECT_PRONOUNS.contains(&l))
        && prev_xpos == Some("PRP");

    if len > 4 && lower.ends_with("ing") {
        return ("VBG", ing_stem(&lower));
    }

    if len > 3 && lower.ends_with("ed") {
        let xpos = if after_auxiliary { "VBN" } else { "VBD" };
        return (xpos, ed_stem(&lower));
    }

    if len > 3 && lower.ends_with("ly") {
        return ("RB", lower);
    }

    if len > 4
        && ["ous", "ful", "able", "ible", "ive", "less", "ical", "ish"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return ("JJ", lower);
    }

    let plural = len > 3
        && lower.ends_with('s')
        && !["ss", "us", "is", "'s"].iter().any(|s| lower.ends_with(s));

    if after_subject {
        let third_person = prev_lemma.map_or(false, |l| THIRD_PERSON.contains(&l));
        return match (plural, third_person) {
            (true, true) => ("VBZ", plural_stem(&lower)),
            _ => ("VBP", lower),
        };
    }

    if plural {
        return ("NNS", plural_stem(&lower));
    }

    ("NN", lower)
}

/// Returns the word a contraction is built on (`won't` -> `will`, `i'm` -> `i`).
fn contraction_head(lower: &str) -> String {
    let lower = lower.replace('’', "'");
    match lower.as_str() {
        "won't" => "will".to_string(),
        "can't" => "can".to_string(),
        "shan't" => "shall".to_string(),
        _ => {
            if let Some(head) = lower.strip_suffix("n't") {
                head.to_string()
            } else if let Some((head, _)) = lower.split_once('\'') {
                head.to_string()
            } else {
                lower
            }
        }
    }
}

fn punctuation(token: &str) -> &'static str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "…" | "–" | "—" => ":",
        "\"" | "”" | "'" | "’" => "''",
        "“" | "‘" | "`" => "``",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "$" | "€" | "£" => "$",
        "#" => "#",
        _ => "SYM",
    }
}

/// Universal part-of-speech derived from the Penn tag.
fn upos(xpos: &str) -> &'static str {
    match xpos {
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "MD" => "AUX",
        x if x.starts_with("VB") => "VERB",
        x if x.starts_with("JJ") => "ADJ",
        x if x.starts_with("RB") || x == "WRB" => "ADV",
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => "PRON",
        "DT" | "WDT" => "DET",
        "IN" => "ADP",
        "CC" => "CCONJ",
        "CD" => "NUM",
        "UH" => "INTJ",
        "TO" | "RP" => "PART",
        "." | "," | ":" | "''" | "``" | "-LRB-" | "-RRB-" => "PUNCT",
        "$" | "#" | "SYM" => "SYM",
        _ => "X",
    }
}

fn ends_with_double_consonant(stem: &str) -> bool {
    let mut rev = stem.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) => a == b && !"aeioulsz".contains(a),
        _ => false,
    }
}

/// Restores a final `e` dropped before a suffix (`sav` -> `save`).
fn restore_e(mut stem: String) -> String {
    if ["v", "at", "iz", "is", "us", "uc", "ur"]
        .iter()
        .any(|s| stem.ends_with(s))
    {
        stem.push('e');
    }
    stem
}

fn undouble(mut stem: String) -> String {
    if ends_with_double_consonant(&stem) {
        stem.pop();
    }
    stem
}

fn ing_stem(lower: &str) -> String {
    let stem = lower.strip_suffix("ing").unwrap_or(lower).to_string();
    if ends_with_double_consonant(&stem) {
        undouble(stem)
    } else {
        restore_e(stem)
    }
}

fn ed_stem(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ied") {
        return format!("{}y", stem);
    }
    let stem = lower[..lower.len() - 2].to_string();
    if ends_with_double_consonant(&stem) {
        undouble(stem)
    } else {
        restore_e(stem)
    }
}

fn plural_stem(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if ["sses", "shes", "ches", "xes", "zes"]
        .iter()
        .any(|s| lower.ends_with(s))
    {
        return lower[..lower.len() - 2].to_string();
    }
    lower[..lower.len() - 1].to_string()
}
