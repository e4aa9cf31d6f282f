//! # CampusBot Rule Tables
//!
//! File: cli/src/assistant/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The two ordered rule tables the dispatcher walks:
//!
//! - `TEMPLATE_RULES`: keyword → template pairs for the exact-keyword phase.
//!   A keyword fires when it occurs anywhere in the normalized query,
//!   including inside another word (`hi` matches `this`).
//! - `PatternRule`s: regex-detected intents for the pattern phase, built by
//!   `build_pattern_rules` in their fixed precedence order.
//!
//! Both tables are slices/vectors rather than maps: declaration order is the
//! tie-break.
//!
use crate::assistant::knowledge::KnowledgeStore;
use crate::core::error::CampusError;
use regex::Regex;
use std::fmt;

/// One entry of the exact-keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateRule {
    pub category: &'static str,
    pub keyword: &'static str,
    /// Tera template; see `core::templating` for the available fields.
    pub template: &'static str,
}

impl TemplateRule {
    /// Template name used when registering with Tera, e.g. `greetings.hello`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.category, self.keyword)
    }
}

/// The exact-keyword table, in match order.
pub const TEMPLATE_RULES: &[TemplateRule] = &[
    TemplateRule {
        category: "greetings",
        keyword: "hello",
        template: "Hello! Welcome to {{ college_name }}. How can I assist you today?",
    },
    TemplateRule {
        category: "greetings",
        keyword: "hi",
        template: "Hi there! How can I help you with {{ college_name }} information?",
    },
    TemplateRule {
        category: "college_info",
        keyword: "principal",
        template: "Our Principal is {{ principal_name }}",
    },
    TemplateRule {
        category: "college_info",
        keyword: "admission",
        template: "📋 Admission Process:\n\
                   1. Online Application\n\
                   2. Entrance Exam\n\
                   3. Personal Interview\n\
                   4. Document Verification",
    },
    TemplateRule {
        category: "college_info",
        keyword: "contact",
        template: "📞 Contact Us:\n\
                   Phone: {{ phone }}\n\
                   Email: {{ email }}\n\
                   Address: {{ address }}",
    },
];

/// The intents of the pattern phase, listed in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Search,
    Time,
    Joke,
    Course,
    Professor,
    Math,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Search => "search",
            Intent::Time => "time",
            Intent::Joke => "joke",
            Intent::Course => "course",
            Intent::Professor => "professor",
            Intent::Math => "math",
        };
        f.write_str(name)
    }
}

/// One entry of the pattern table.
///
/// `detect` decides whether the rule fires; `strip` removes the trigger
/// words from the query to leave the remainder the handler works on.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub intent: Intent,
    detect: Regex,
    strip: Regex,
}

impl PatternRule {
    fn new(intent: Intent, detect: &str, strip: &str) -> Result<Self, CampusError> {
        Ok(Self {
            intent,
            detect: Regex::new(detect)?,
            strip: Regex::new(strip)?,
        })
    }

    /// Whether this rule fires for the normalized query.
    pub fn is_match(&self, query: &str) -> bool {
        self.detect.is_match(query)
    }

    /// The query with every trigger word removed, trimmed.
    pub fn remainder(&self, query: &str) -> String {
        self.strip.replace_all(query, "").trim().to_string()
    }
}

const SEARCH_WORDS: &str = r"\b(?:search|find)\b";
const TIME_WORDS: &str = r"\b(?:time|date)\b";
const JOKE_WORDS: &str = r"\b(?:joke|funny)\b";
const COURSE_WORDS: &str = r"\b(?:courses?|programs?)\b";
const PROFESSOR_WORDS: &str = r"\b(?:professors?|faculty|lecturers?|teachers?)\b";
/// Trigger words plus a leading question phrase and trailing question marks,
/// so "what is 2 + 2?" leaves "2 + 2".
const MATH_WORDS: &str =
    r"\b(?:solve|calculate)\b|^\s*(?:what\s+is|what's|how\s+much\s+is)\b|\?+\s*$";
/// A keyword, or any digit, operator or parenthesis.
const MATH_DETECT: &str = r"\b(?:solve|calculate)\b|[\d+\-*/^()%]";

/// Builds the pattern table in precedence order:
/// search, time, joke, course, professor, math.
///
/// Course and professor rules also fire on a known course key / display name
/// or a full professor key, so "details about cse" reaches the course handler.
pub fn build_pattern_rules(knowledge: &KnowledgeStore) -> Result<Vec<PatternRule>, CampusError> {
    let course_names = knowledge
        .courses
        .iter()
        .flat_map(|c| [c.key.clone(), c.name.to_lowercase()]);
    let professor_names = knowledge.professors.iter().map(|p| p.key.clone());

    Ok(vec![
        PatternRule::new(Intent::Search, SEARCH_WORDS, SEARCH_WORDS)?,
        PatternRule::new(Intent::Time, TIME_WORDS, TIME_WORDS)?,
        PatternRule::new(Intent::Joke, JOKE_WORDS, JOKE_WORDS)?,
        PatternRule::new(
            Intent::Course,
            &with_names(COURSE_WORDS, course_names),
            COURSE_WORDS,
        )?,
        PatternRule::new(
            Intent::Professor,
            &with_names(PROFESSOR_WORDS, professor_names),
            PROFESSOR_WORDS,
        )?,
        PatternRule::new(Intent::Math, MATH_DETECT, MATH_WORDS)?,
    ])
}

/// Extends a trigger-word pattern with whole-word alternatives for `names`.
fn with_names(words: &str, names: impl Iterator<Item = String>) -> String {
    let alternatives: Vec<String> = names
        .filter(|n| !n.trim().is_empty())
        .map(|n| regex::escape(n.trim()))
        .collect();
    if alternatives.is_empty() {
        words.to_string()
    } else {
        format!(r"{}|\b(?:{})\b", words, alternatives.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<PatternRule> {
        build_pattern_rules(&KnowledgeStore::builtin()).expect("Failed to build rules")
    }

    fn first_intent(query: &str) -> Option<Intent> {
        rules().into_iter().find(|r| r.is_match(query)).map(|r| r.intent)
    }

    #[test]
    fn test_rules_are_in_precedence_order() {
        let intents: Vec<Intent> = rules().iter().map(|r| r.intent).collect();
        assert_eq!(
            intents,
            vec![
                Intent::Search,
                Intent::Time,
                Intent::Joke,
                Intent::Course,
                Intent::Professor,
                Intent::Math
            ]
        );
    }

    #[test]
    fn test_template_names_are_unique() {
        let mut names: Vec<String> = TEMPLATE_RULES.iter().map(|r| r.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TEMPLATE_RULES.len());
    }

    #[test]
    fn test_detection() {
        assert_eq!(first_intent("find the library"), Some(Intent::Search));
        assert_eq!(first_intent("what time is it"), Some(Intent::Time));
        assert_eq!(first_intent("say something funny"), Some(Intent::Joke));
        assert_eq!(first_intent("list all programs"), Some(Intent::Course));
        assert_eq!(first_intent("details about cse"), Some(Intent::Course));
        assert_eq!(
            first_intent("computer science engineering fees"),
            Some(Intent::Course)
        );
        assert_eq!(first_intent("who is kharmega sir"), Some(Intent::Professor));
        assert_eq!(first_intent("solve banana"), Some(Intent::Math));
        assert_eq!(first_intent("12 * 3"), Some(Intent::Math));
        assert_eq!(first_intent("banana"), None);
    }

    #[test]
    fn test_earlier_pattern_shadows_later() {
        // Mentions both a time word and a number; time is declared first.
        assert_eq!(first_intent("time 2 + 2"), Some(Intent::Time));
        assert_eq!(first_intent("search for course timetable"), Some(Intent::Search));
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(first_intent("finder"), None);
        assert_eq!(first_intent("jokes"), None);
    }

    #[test]
    fn test_remainder_strips_trigger_words() {
        let rules = rules();
        assert_eq!(rules[0].remainder("search rust tutorials"), "rust tutorials");
        assert_eq!(rules[3].remainder("course details cse"), "details cse");
        assert_eq!(rules[4].remainder("professor kareemulla"), "kareemulla");
        assert_eq!(rules[5].remainder("solve 2 + 2"), "2 + 2");
        assert_eq!(rules[5].remainder("calculate"), "");
        assert_eq!(rules[5].remainder("what is 2 + 2?"), "2 + 2");
        assert_eq!(rules[5].remainder("how much is 7 * 6"), "7 * 6");
        assert_eq!(rules[5].remainder("what's 9 - 1"), "9 - 1");
    }

    #[test]
    fn test_math_fires_on_bare_operators() {
        assert_eq!(first_intent("(("), Some(Intent::Math));
        assert_eq!(first_intent("+ -"), Some(Intent::Math));
        assert_eq!(first_intent("what is 2 + 2"), Some(Intent::Math));
        // Whitespace alone is not arithmetic.
        assert_eq!(first_intent("tell me something"), None);
    }
}
