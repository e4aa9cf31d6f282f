//! # CampusBot Query Classifier & Dispatcher
//!
//! File: cli/src/assistant/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module turns one free-text query into one response string. The
//! `Assistant` is built once (from configuration or the built-in data) and
//! is immutable afterwards, so a single instance can serve any number of
//! queries, including concurrently from the HTTP server.
//!
//! ## Architecture
//!
//! `Assistant::handle_query` runs three steps, short-circuiting on the first hit:
//! 1. Normalize (lowercase, trim). Empty input gets a prompt for a question.
//! 2. Exact-keyword phase: the first keyword of `rules::TEMPLATE_RULES` found
//!    anywhere in the query returns its pre-rendered template.
//! 3. Pattern phase: the first `PatternRule` that matches selects the handler
//!    (search, time, joke, course, professor, math), which receives the query
//!    with the trigger words stripped.
//!
//! Nothing matched: the capability menu.
//!
//! The keyword phase always runs to completion before any pattern is tried,
//! so a keyword anywhere in the input beats every pattern.
//!
//! Submodules:
//! - `knowledge`: courses, professors, institution identity, jokes
//! - `rules`: the keyword table and the ordered pattern table
//! - `responses`: response texts and renderers
//! - `capabilities`: injectable clock and random source
//! - `boundary`: the input guard used by every front end
//!
//! ## Examples
//!
//! ```rust,ignore
//! let assistant = Assistant::builtin()?;
//! assert!(assistant.handle_query("Hello!").starts_with("Hello! Welcome to ABC College"));
//! assert_eq!(assistant.handle_query("solve 2 + 2"), "🧮 Solution: 2 + 2 = 4");
//! ```
//!
pub mod boundary;
pub mod capabilities;
pub mod knowledge;
pub mod responses;
pub mod rules;

use crate::core::config::{Config, DEFAULT_SEARCH_ENDPOINT};
use crate::core::error::{CampusError, Result};
use crate::core::templating;
use anyhow::Context;
use capabilities::{Clock, RandomSource, SystemClock, ThreadRandom};
use knowledge::{Course, KnowledgeStore, Professor};
use rules::{Intent, PatternRule, TEMPLATE_RULES};
use tracing::{debug, info};
use url::Url;

/// A keyword paired with its template, already rendered for this institution.
#[derive(Debug, Clone)]
struct KeywordResponse {
    keyword: &'static str,
    response: String,
}

/// The rule-based campus assistant.
pub struct Assistant {
    knowledge: KnowledgeStore,
    keyword_responses: Vec<KeywordResponse>,
    patterns: Vec<PatternRule>,
    search_endpoint: Url,
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
}

impl Assistant {
    /// Builds an assistant over `knowledge`, using the system clock and the
    /// thread-local random generator.
    ///
    /// ## Errors
    ///
    /// Fails if the knowledge tables violate their invariants, the search
    /// endpoint is not an absolute URL, a keyword template cannot be rendered
    /// with the institution's fields, or an intent pattern fails to compile.
    pub fn new(knowledge: KnowledgeStore, search_endpoint: &str) -> Result<Self> {
        knowledge
            .validate()
            .context("Knowledge store validation failed")?;

        let search_endpoint = Url::parse(search_endpoint)
            .map_err(CampusError::from)
            .with_context(|| format!("Failed to parse search endpoint '{}'", search_endpoint))?;

        let names: Vec<String> = TEMPLATE_RULES.iter().map(|r| r.name()).collect();
        let templates: Vec<(&str, &str)> = names
            .iter()
            .zip(TEMPLATE_RULES)
            .map(|(name, rule)| (name.as_str(), rule.template))
            .collect();
        let rendered = templating::render_templates(&templates, &knowledge.institution)?;
        let keyword_responses = TEMPLATE_RULES
            .iter()
            .zip(rendered)
            .map(|(rule, response)| KeywordResponse {
                keyword: rule.keyword,
                response,
            })
            .collect();

        let patterns =
            rules::build_pattern_rules(&knowledge).context("Failed to compile intent patterns")?;

        info!(
            "Assistant ready for {} ({} courses, {} professors, {} keyword rules, {} patterns)",
            knowledge.institution.name,
            knowledge.courses.len(),
            knowledge.professors.len(),
            TEMPLATE_RULES.len(),
            patterns.len()
        );

        Ok(Self {
            knowledge,
            keyword_responses,
            patterns,
            search_endpoint,
            clock: Box::new(SystemClock),
            random: Box::new(ThreadRandom),
        })
    }

    /// Builds an assistant from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.knowledge(), &config.search.endpoint)
    }

    /// Builds an assistant over the compiled-in dataset.
    pub fn builtin() -> Result<Self> {
        Self::new(KnowledgeStore::builtin(), DEFAULT_SEARCH_ENDPOINT)
    }

    /// Replaces the clock used by the date/time answer.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the random source used to pick jokes.
    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn knowledge(&self) -> &KnowledgeStore {
        &self.knowledge
    }

    /// Answers one query. Never fails: every input, including empty or
    /// nonsensical text, yields a non-empty response.
    pub fn handle_query(&self, text: &str) -> String {
        let query = text.to_lowercase();
        let query = query.trim();

        if query.is_empty() {
            return responses::EMPTY_QUERY.to_string();
        }

        if let Some(hit) = self
            .keyword_responses
            .iter()
            .find(|r| query.contains(r.keyword))
        {
            debug!("Query matched keyword '{}'", hit.keyword);
            return hit.response.clone();
        }

        if let Some(rule) = self.patterns.iter().find(|r| r.is_match(query)) {
            let remainder = rule.remainder(query);
            debug!(
                "Query matched {} pattern (remainder: '{}')",
                rule.intent, remainder
            );
            return self.dispatch(rule.intent, &remainder);
        }

        debug!("Query matched no rule, answering with the capability menu");
        responses::CAPABILITY_MENU.to_string()
    }

    fn dispatch(&self, intent: Intent, remainder: &str) -> String {
        match intent {
            Intent::Search => responses::search_link(&self.search_endpoint, remainder),
            Intent::Time => responses::current_time(self.clock.now()),
            Intent::Joke => {
                let index = self.random.pick(self.knowledge.jokes.len());
                responses::joke(&self.knowledge.jokes, index)
            }
            Intent::Course => match self.find_course(remainder) {
                Some(course) => responses::course_details(course),
                None => responses::course_listing(&self.knowledge),
            },
            Intent::Professor => match self.find_professor(remainder) {
                Some(professor) => responses::professor_details(professor),
                None => responses::professor_listing(&self.knowledge),
            },
            Intent::Math => responses::solution(remainder),
        }
    }

    /// First course whose key or full display name occurs in `query`.
    fn find_course(&self, query: &str) -> Option<&Course> {
        self.knowledge
            .courses
            .iter()
            .find(|c| query.contains(c.key.as_str()) || query.contains(&c.name.to_lowercase()))
    }

    /// First professor whose full key occurs in `query`; failing that, the
    /// first professor with any single key word in `query`.
    fn find_professor(&self, query: &str) -> Option<&Professor> {
        let professors = &self.knowledge.professors;
        professors
            .iter()
            .find(|p| query.contains(p.key.as_str()))
            .or_else(|| {
                professors
                    .iter()
                    .find(|p| p.key.split_whitespace().any(|word| query.contains(word)))
            })
    }
}
