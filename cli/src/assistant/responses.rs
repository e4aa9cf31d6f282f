//! # CampusBot Responses
//!
//! File: cli/src/assistant/responses.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Response texts and renderers for the pattern-phase handlers. Each
//! renderer takes already-resolved data and returns the final string; the
//! dispatcher decides which one to call.

use crate::assistant::knowledge::{Course, KnowledgeStore, Professor};
use crate::eval;
use chrono::NaiveDateTime;
use url::Url;

pub const EMPTY_QUERY: &str = "❗ Please type a question.";
pub const SPECIFY_QUERY: &str = "Please specify your query.";
pub const MATH_FAILURE: &str = "❌ I couldn't understand the math problem. Please try again.";
pub const CAPABILITY_MENU: &str = "🤖 I can help you with:\n\
                                   - 🎓 Course Information\n\
                                   - 🧑‍🏫 Professor Details\n\
                                   - 🧮 Math Problems\n\
                                   - 📅 Date & Time\n\
                                   - 📞 Contact Info\n\
                                   - 😂 Jokes\n\
                                   Just ask me anything!";

pub const TIME_LABEL: &str = "📅 Current Date & Time: ";
pub const JOKE_PREFIX: &str = "😂 ";
pub const SEARCH_PREFIX: &str = "🔍 Here's what I found: ";
pub const MATH_PREFIX: &str = "🧮 Solution: ";

/// `🔍 Here's what I found: <endpoint>?q=<terms>`, or the "please specify"
/// message when there are no terms left.
pub fn search_link(endpoint: &Url, terms: &str) -> String {
    if terms.is_empty() {
        return SPECIFY_QUERY.to_string();
    }
    let mut link = endpoint.clone();
    link.query_pairs_mut().append_pair("q", terms);
    format!("{}{}", SEARCH_PREFIX, link)
}

pub fn current_time(now: NaiveDateTime) -> String {
    format!("{}{}", TIME_LABEL, now.format("%Y-%m-%d %H:%M:%S"))
}

pub fn joke(jokes: &[String], index: usize) -> String {
    match jokes.get(index).or_else(|| jokes.first()) {
        Some(text) => format!("{}{}", JOKE_PREFIX, text),
        // Unreachable once the store has been validated.
        None => CAPABILITY_MENU.to_string(),
    }
}

pub fn course_details(course: &Course) -> String {
    format!(
        "📘 {}:\nDuration: {}\nFees: {}\nSpecializations: {}\nMore Info: {}",
        course.name,
        course.duration,
        course.fees,
        course.specializations.join(", "),
        course.website
    )
}

pub fn course_listing(knowledge: &KnowledgeStore) -> String {
    let names: Vec<String> = knowledge
        .courses
        .iter()
        .map(|c| format!("- {}", c.name))
        .collect();
    format!("📚 Available Courses:\n{}", names.join("\n"))
}

pub fn professor_details(professor: &Professor) -> String {
    format!(
        "👨‍🏫 Professor Details:\n\
         Name: {}\n\
         Department: {}\n\
         Qualification: {}\n\
         Experience: {}\n\
         Research Areas: {}\n\
         Email: {}",
        professor.name,
        professor.department,
        professor.qualification,
        professor.experience,
        professor.research,
        professor.email
    )
}

pub fn professor_listing(knowledge: &KnowledgeStore) -> String {
    let names: Vec<String> = knowledge
        .professors
        .iter()
        .map(|p| format!("- {} ({})", p.name, p.department))
        .collect();
    format!(
        "📚 Professors at {}:\n{}\n\nYou can ask for details about a specific professor.",
        knowledge.institution.name,
        names.join("\n")
    )
}

/// `🧮 Solution: <expression> = <result>`, or the fixed apology when the
/// expression cannot be evaluated.
pub fn solution(expression: &str) -> String {
    match eval::evaluate(expression) {
        Ok(value) => format!(
            "{}{} = {}",
            MATH_PREFIX,
            expression.trim(),
            eval::format_number(value)
        ),
        Err(e) => {
            tracing::debug!("Expression '{}' rejected: {}", expression, e);
            MATH_FAILURE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_search_link_encodes_terms() {
        let endpoint = Url::parse("https://www.google.com/search").unwrap();
        assert_eq!(
            search_link(&endpoint, "rust & c++"),
            "🔍 Here's what I found: https://www.google.com/search?q=rust+%26+c%2B%2B"
        );
        assert_eq!(search_link(&endpoint, ""), SPECIFY_QUERY);
    }

    #[test]
    fn test_current_time_format() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 5)
            .and_then(|d| d.and_hms_opt(7, 8, 9))
            .unwrap();
        assert_eq!(current_time(now), "📅 Current Date & Time: 2024-01-05 07:08:09");
    }

    #[test]
    fn test_joke_falls_back_to_first() {
        let jokes = vec!["one".to_string(), "two".to_string()];
        assert_eq!(joke(&jokes, 1), "😂 two");
        assert_eq!(joke(&jokes, 9), "😂 one");
    }

    #[test]
    fn test_solution() {
        assert_eq!(solution("2 + 2"), "🧮 Solution: 2 + 2 = 4");
        assert_eq!(solution(" 10 / 4 "), "🧮 Solution: 10 / 4 = 2.5");
        assert_eq!(solution("banana"), MATH_FAILURE);
        assert_eq!(solution(""), MATH_FAILURE);
    }

    #[test]
    fn test_course_details_field_order() {
        let store = KnowledgeStore::builtin();
        let text = course_details(store.course("cse").unwrap());
        assert_eq!(
            text,
            "📘 Computer Science Engineering:\n\
             Duration: 4 years\n\
             Fees: $15,000/year\n\
             Specializations: AI, Cloud Computing, IoT\n\
             More Info: /cse"
        );
    }
}
