//! # CampusBot Knowledge Store
//!
//! File: cli/src/assistant/knowledge.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Static, read-only data the assistant answers from: the institution's
//! identity and contact block, the course table, the professor table and
//! the joke list. The built-in tables can be replaced from the configuration
//! file (see `core::config`), which is why every record derives `Deserialize`.
//!
//! The store does no matching of its own. Scanning entries against a query is
//! the dispatcher's job; this module only guarantees that the tables are
//! well-formed (`validate`).
//!
use crate::core::error::CampusError;
use serde::Deserialize;
use std::collections::HashSet;

/// Identity and contact details of the institution.
///
/// These are the substitution fields available to the keyword templates.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Institution {
    pub name: String,
    pub principal: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for Institution {
    fn default() -> Self {
        Self {
            name: "ABC College".to_string(),
            principal: "Dr. Syed Ariff".to_string(),
            phone: "+1-234-567-890".to_string(),
            email: "info@abccollege.edu".to_string(),
            address: "123 College Street, Education City".to_string(),
        }
    }
}

/// One course offered by the institution.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Course {
    /// Canonical lowercase identifier, e.g. `cse`.
    pub key: String,
    /// Full display name, e.g. `Computer Science Engineering`.
    pub name: String,
    pub duration: String,
    pub fees: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub website: String,
}

/// One member of the teaching staff.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Professor {
    /// Canonical lowercase identifier, e.g. `kareemulla sir`.
    pub key: String,
    pub name: String,
    pub department: String,
    pub qualification: String,
    pub experience: String,
    pub email: String,
    pub research: String,
}

/// The complete dataset the assistant answers from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeStore {
    pub institution: Institution,
    pub courses: Vec<Course>,
    pub professors: Vec<Professor>,
    pub jokes: Vec<String>,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeStore {
    /// The dataset compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            institution: Institution::default(),
            courses: builtin_courses(),
            professors: builtin_professors(),
            jokes: builtin_jokes(),
        }
    }

    /// Looks a course up by its canonical key.
    pub fn course(&self, key: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.key == key)
    }

    /// Looks a professor up by its canonical key.
    pub fn professor(&self, key: &str) -> Option<&Professor> {
        self.professors.iter().find(|p| p.key == key)
    }

    /// Checks the table invariants: keys are non-empty, lowercase, free of
    /// surrounding whitespace and unique within their table, and there is at
    /// least one joke to pick from.
    pub fn validate(&self) -> Result<(), CampusError> {
        if self.institution.name.trim().is_empty() {
            return Err(CampusError::Knowledge(
                "Institution name cannot be empty.".to_string(),
            ));
        }
        validate_keys("course", self.courses.iter().map(|c| c.key.as_str()))?;
        validate_keys("professor", self.professors.iter().map(|p| p.key.as_str()))?;
        if self.jokes.is_empty() {
            return Err(CampusError::Knowledge(
                "The joke list cannot be empty.".to_string(),
            ));
        }
        if let Some(course) = self.courses.iter().find(|c| c.name.trim().is_empty()) {
            return Err(CampusError::Knowledge(format!(
                "Course '{}' has an empty display name.",
                course.key
            )));
        }
        Ok(())
    }
}

fn validate_keys<'a>(table: &str, keys: impl Iterator<Item = &'a str>) -> Result<(), CampusError> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(CampusError::Knowledge(format!(
                "A {} key cannot be empty.",
                table
            )));
        }
        if key != key.to_lowercase() || key != key.trim() {
            return Err(CampusError::Knowledge(format!(
                "The {} key '{}' must be lowercase without surrounding whitespace.",
                table, key
            )));
        }
        if !seen.insert(key) {
            return Err(CampusError::Knowledge(format!(
                "Duplicate {} key '{}'.",
                table, key
            )));
        }
    }
    Ok(())
}

fn builtin_courses() -> Vec<Course> {
    vec![
        Course {
            key: "cse".to_string(),
            name: "Computer Science Engineering".to_string(),
            duration: "4 years".to_string(),
            fees: "$15,000/year".to_string(),
            specializations: vec![
                "AI".to_string(),
                "Cloud Computing".to_string(),
                "IoT".to_string(),
            ],
            website: "/cse".to_string(),
        },
        Course {
            key: "ece".to_string(),
            name: "Electronics and Communication Engineering".to_string(),
            duration: "4 years".to_string(),
            fees: "$14,500/year".to_string(),
            specializations: vec!["VLSI".to_string(), "Embedded Systems".to_string()],
            website: "/ece".to_string(),
        },
    ]
}

fn builtin_professors() -> Vec<Professor> {
    vec![
        Professor {
            key: "kareemulla sir".to_string(),
            name: "Dr. Mohamed Kareemulla".to_string(),
            department: "Computer Science".to_string(),
            qualification: "PhD".to_string(),
            experience: "28 years".to_string(),
            email: "kareemulla@drttit.edu.in".to_string(),
            research: "Machine Learning, Neural Networks".to_string(),
        },
        Professor {
            key: "kharmega sir".to_string(),
            name: "Dr. G. Kharmega Sundararaj".to_string(),
            department: "Computer Science".to_string(),
            qualification: "PhD".to_string(),
            experience: "24 years".to_string(),
            email: "drkharmegam@drttit.edu.in".to_string(),
            research: "Smart Grids, Renewable Energy".to_string(),
        },
    ]
}

fn builtin_jokes() -> Vec<String> {
    vec![
        "Why don't scientists trust atoms? They make up everything!".to_string(),
        "What do you call fake spaghetti? An impasta!".to_string(),
    ]
}
