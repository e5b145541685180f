//! Rule-based grouping of keywords into topical categories.
//!
//! Each keyword lands in exactly one [`Topic`]: the first category, in
//! priority order, with a marker word that occurs inside the keyword.
//! Keywords matching no markers fall into [`Topic::Other`].
//!
//! | Priority | Topic | Example markers |
//! |----------|-------|-----------------|
//! | 1 | Concept / Definition | 정의, 개념, definition, concept |
//! | 2 | Feature / Advantage | 특징, 장점, feature, performance |
//! | 3 | Application / Usage | 응용, 활용, application, usage |
//! | 4 | Technique / Method | 기술, 알고리즘, method, algorithm |
//! | 5 | Other | everything else |

use std::fmt;

use crate::keywords::Keyword;

/// Number of leading keywords the classifier looks at.
pub const CLASSIFIED_KEYWORDS: usize = 20;

/// Keywords shown per topic when rendered.
pub const SHOWN_PER_TOPIC: usize = 5;

/// A topical category, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Definitions and concepts.
    Concept,
    /// Features, advantages, effects.
    Feature,
    /// Applications and usage.
    Application,
    /// Techniques, methods, algorithms.
    Technique,
    /// Catch-all.
    Other,
}

impl Topic {
    /// All topics in priority order.
    pub const ALL: [Self; 5] = [
        Self::Concept,
        Self::Feature,
        Self::Application,
        Self::Technique,
        Self::Other,
    ];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Concept => "Concept/Definition",
            Self::Feature => "Feature/Advantage",
            Self::Application => "Application/Usage",
            Self::Technique => "Technique/Method",
            Self::Other => "Other",
        }
    }

    /// Marker substrings for this topic. `Other` has none.
    pub const fn markers(self) -> &'static [&'static str] {
        match self {
            Self::Concept => &[
                "정의", "개념", "의미", "이해", "defin", "concept", "meaning", "understand",
            ],
            Self::Feature => &[
                "특징", "장점", "효과", "성능", "feature", "advantage", "benefit", "effect",
                "perform",
            ],
            Self::Application => &[
                "응용", "사용", "활용", "적용", "applica", "usage", "utiliz",
            ],
            Self::Technique => &[
                "기술", "방법", "알고리즘", "기법", "techn", "method", "algorithm",
            ],
            Self::Other => &[],
        }
    }

    /// Whether `keyword` contains one of this topic's markers.
    pub fn matches(self, keyword: &str) -> bool {
        let lowered = keyword.to_lowercase();
        self.markers().iter().any(|m| lowered.contains(m))
    }

    /// Classify one keyword.
    pub fn classify(keyword: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|topic| topic.matches(keyword))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keywords grouped by topic, each group in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicGroups {
    groups: Vec<(Topic, Vec<String>)>,
}

impl TopicGroups {
    /// Group the first [`CLASSIFIED_KEYWORDS`] keywords by topic.
    pub fn classify(keywords: &[Keyword]) -> Self {
        let mut groups: Vec<(Topic, Vec<String>)> =
            Topic::ALL.iter().map(|&t| (t, Vec::new())).collect();

        for keyword in keywords.iter().take(CLASSIFIED_KEYWORDS) {
            let topic = Topic::classify(&keyword.term);
            if let Some((_, terms)) = groups.iter_mut().find(|(t, _)| *t == topic) {
                terms.push(keyword.term.clone());
            }
        }

        groups.retain(|(_, terms)| !terms.is_empty());
        Self { groups }
    }

    /// Non-empty groups in priority order.
    pub fn groups(&self) -> &[(Topic, Vec<String>)] {
        &self.groups
    }

    /// Keywords assigned to `topic`.
    pub fn get(&self, topic: Topic) -> &[String] {
        self.groups
            .iter()
            .find(|(t, _)| *t == topic)
            .map(|(_, terms)| terms.as_slice())
            .unwrap_or(&[])
    }

    /// Whether no keyword was classified.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Render as Markdown, one bold-labelled line per non-empty topic.
    pub fn render(&self) -> String {
        self.groups
            .iter()
            .map(|(topic, terms)| {
                let shown: Vec<&str> = terms
                    .iter()
                    .take(SHOWN_PER_TOPIC)
                    .map(String::as_str)
                    .collect();
                format!("**{topic}**: {}", shown.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(terms: &[&str]) -> Vec<Keyword> {
        terms
            .iter()
            .enumerate()
            .map(|(i, t)| Keyword::new(*t, 1.0 / (i + 1) as f64))
            .collect()
    }

    #[test]
    fn test_classify_single() {
        assert_eq!(Topic::classify("개념도"), Topic::Concept);
        assert_eq!(Topic::classify("성능"), Topic::Feature);
        assert_eq!(Topic::classify("활용사례"), Topic::Application);
        assert_eq!(Topic::classify("알고리즘"), Topic::Technique);
        assert_eq!(Topic::classify("데이터"), Topic::Other);
    }

    #[test]
    fn test_english_markers_are_case_insensitive() {
        assert_eq!(Topic::classify("Definitions"), Topic::Concept);
        assert_eq!(Topic::classify("ALGORITHMS"), Topic::Technique);
    }

    #[test]
    fn test_priority_order() {
        // Contains both a concept and a technique marker.
        assert_eq!(Topic::classify("기술개념"), Topic::Concept);
    }

    #[test]
    fn test_empty_groups_omitted() {
        let groups = TopicGroups::classify(&keywords(&["정의", "데이터"]));
        let topics: Vec<_> = groups.groups().iter().map(|(t, _)| *t).collect();
        assert_eq!(topics, [Topic::Concept, Topic::Other]);
        assert_eq!(groups.render(), "**Concept/Definition**: 정의\n\n**Other**: 데이터");
    }

    #[test]
    fn test_render_caps_each_group() {
        let groups = TopicGroups::classify(&keywords(&["a1", "a2", "a3", "a4", "a5", "a6", "a7"]));
        assert_eq!(groups.get(Topic::Other).len(), 7);
        assert_eq!(groups.render(), "**Other**: a1, a2, a3, a4, a5");
    }

    #[test]
    fn test_only_first_twenty_classified() {
        let terms: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
        let groups = TopicGroups::classify(&keywords(&refs));
        assert_eq!(groups.get(Topic::Other).len(), CLASSIFIED_KEYWORDS);
    }

    #[test]
    fn test_empty_input() {
        let groups = TopicGroups::classify(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.render(), "");
    }
}
