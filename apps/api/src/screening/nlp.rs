//! Lightweight rule-based text pipeline: stopword/punctuation filtering and
//! named-entity recognition for dates, money, percentages and organizations.
//!
//! Deterministic and model-free. Entity spans never overlap; when two patterns
//! claim the same text, the earlier and then the longer span is kept.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Org,
    Date,
    Money,
    Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub filtered_tokens: Vec<String>,
    pub named_entities: Vec<NamedEntity>,
}

pub fn analyze_text(text: &str) -> TextAnalysis {
    TextAnalysis {
        filtered_tokens: filtered_tokens(text),
        named_entities: named_entities(text),
    }
}

/// Surface tokens in document order, minus stopwords and punctuation.
pub fn filtered_tokens(text: &str) -> Vec<String> {
    let stopwords = stopwords();
    token_regex()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| !is_punct(token))
        .filter(|token| !stopwords.contains(token.to_lowercase().as_str()))
        .map(String::from)
        .collect()
}

pub fn named_entities(text: &str) -> Vec<NamedEntity> {
    let mut spans: Vec<(usize, usize, EntityLabel)> = Vec::new();

    for (label, regex) in entity_patterns() {
        for caps in regex.captures_iter(text) {
            // Group 1, when present, narrows the entity inside the match.
            let m = caps.get(1).or_else(|| caps.get(0));
            if let Some(m) = m {
                spans.push((m.start(), m.end(), *label));
            }
        }
    }

    spans.sort_by(|a, b| a.0.cmp(&b.0).then((b.1 - b.0).cmp(&(a.1 - a.0))));

    let mut entities = Vec::new();
    let mut last_end = 0;
    for (start, end, label) in spans {
        if start < last_end {
            continue;
        }
        last_end = end;
        entities.push(NamedEntity {
            text: text[start..end].trim().to_string(),
            label,
        });
    }
    entities
}

fn is_punct(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_whitespace()))
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"[\w+#]+(?:['’.\-][\w+#]+)*|[^\w\s]").expect("token regex is valid")
    })
}

fn entity_patterns() -> &'static [(EntityLabel, Regex)] {
    static PATTERNS: OnceLock<Vec<(EntityLabel, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";
        const ORG_SUFFIX: &str = r"(?:Inc|LLC|Ltd|Corp|Corporation|Company|University|College|Institute|Group|Technologies|Labs)";

        let patterns = [
            (
                EntityLabel::Org,
                format!(r"\b(?:[A-Z][\w&.\-]*[ \t]+){{1,4}}{ORG_SUFFIX}\b"),
            ),
            (
                EntityLabel::Org,
                r"\bUniversity of(?:[ \t]+[A-Z][\w\-]*)+".to_string(),
            ),
            (
                EntityLabel::Money,
                r"[$€£][ \t]?\d[\d,]*(?:\.\d+)?(?:[ \t]?[kKmM]\b)?".to_string(),
            ),
            (EntityLabel::Percent, r"\b\d+(?:\.\d+)?[ \t]?%".to_string()),
            (EntityLabel::Date, format!(r"\b{MONTH}\.?[ \t]+\d{{4}}\b")),
            (
                EntityLabel::Date,
                r"\b(?:0?[1-9]|1[0-2])/(?:19|20)\d{2}\b".to_string(),
            ),
            (EntityLabel::Date, r"\b(?:19[5-9]\d|20\d{2})\b".to_string()),
            (
                EntityLabel::Date,
                r"(?:-|–|\bto)[ \t]*\b(Present|Current|present|current)\b".to_string(),
            ),
        ];

        patterns
            .into_iter()
            .map(|(label, pattern)| {
                (label, Regex::new(&pattern).expect("entity regex is valid"))
            })
            .collect()
    })
}

fn stopwords() -> &'static HashSet<&'static str> {
    static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOPWORDS.get_or_init(|| STOPWORD_LIST.iter().copied().collect())
}

const STOPWORD_LIST: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "am", "among",
    "an", "and", "any", "are", "as", "at", "be", "became", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing",
    "done", "down", "during", "each", "either", "else", "enough", "etc", "even", "ever", "every",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "least", "less", "may", "me", "might", "more", "most", "much",
    "must", "my", "myself", "neither", "no", "nor", "not", "now", "of", "off", "often", "on",
    "once", "only", "or", "other", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "per", "perhaps", "quite", "rather", "really", "same", "she", "should", "since", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "though", "through", "thus", "to", "together",
    "too", "toward", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "where", "whether", "which", "while", "who", "whole",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(entities: &[NamedEntity], label: EntityLabel) -> Vec<&str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_stopwords_and_punctuation_are_dropped() {
        let tokens = filtered_tokens("I led the migration of our data platform to AWS.");
        assert_eq!(tokens, vec!["led", "migration", "data", "platform", "AWS"]);
    }

    #[test]
    fn test_tokens_keep_technical_terms() {
        let tokens = filtered_tokens("Skills: C++, C#, Node.js and e-mail");
        assert_eq!(tokens, vec!["Skills", "C++", "C#", "Node.js", "e-mail"]);
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze_text("");
        assert!(analysis.filtered_tokens.is_empty());
        assert!(analysis.named_entities.is_empty());
    }

    #[test]
    fn test_organizations() {
        let entities =
            named_entities("Worked at Acme Corp before joining Stanford University.\nUniversity of Texas");
        assert_eq!(
            labelled(&entities, EntityLabel::Org),
            vec!["Acme Corp", "Stanford University", "University of Texas"]
        );
    }

    #[test]
    fn test_dates_money_and_percent() {
        let entities = named_entities(
            "IT Manager, Jan 2018 - Present. Cut costs by 35% and saved $120,000 since 06/2015.",
        );
        assert_eq!(
            labelled(&entities, EntityLabel::Date),
            vec!["Jan 2018", "Present", "06/2015"]
        );
        assert_eq!(labelled(&entities, EntityLabel::Percent), vec!["35%"]);
        assert_eq!(labelled(&entities, EntityLabel::Money), vec!["$120,000"]);
    }

    #[test]
    fn test_bare_year_is_a_date() {
        let entities = named_entities("BSc Computer Science, 2012");
        assert_eq!(labelled(&entities, EntityLabel::Date), vec!["2012"]);
    }

    #[test]
    fn test_entities_do_not_overlap() {
        // "06/2015" must not also yield a bare "2015".
        let entities = named_entities("since 06/2015");
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_entity_label_serialization() {
        let entity = NamedEntity {
            text: "Acme Corp".to_string(),
            label: EntityLabel::Org,
        };
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["label"], "ORG");
    }
}
