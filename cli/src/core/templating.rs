//! # CampusBot Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module renders the keyword response templates (greetings, principal,
//! admission, contact) with the institution's identity using the Tera
//! templating engine.
//!
//! ## Architecture
//!
//! Templates are rendered once, when the assistant is built:
//! 1. All templates are registered in a single `Tera` instance (syntax errors surface here)
//! 2. A context is built from the `Institution` record
//! 3. Every template is rendered against that context
//!
//! Tera fails on variables missing from the context, so a template that
//! references an unknown field is reported as a configuration error before
//! the first query is answered.
//!
//! Available fields: `college_name`, `principal_name`, `phone`, `email`, `address`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let rendered = templating::render_templates(
//!     &[("greetings.hello", "Hello! Welcome to {{ college_name }}.")],
//!     &institution,
//! )?;
//! assert_eq!(rendered[0], "Hello! Welcome to ABC College.");
//! ```
//!
use crate::assistant::knowledge::Institution;
use crate::core::error::{CampusError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

/// The substitution fields available to every keyword template.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub college_name: &'a str,
    pub principal_name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a Institution> for TemplateContext<'a> {
    fn from(institution: &'a Institution) -> Self {
        Self {
            college_name: &institution.name,
            principal_name: &institution.principal,
            phone: &institution.phone,
            email: &institution.email,
            address: &institution.address,
        }
    }
}

/// Renders each `(name, template)` pair with the institution's fields.
///
/// The output keeps the input order. Fails if any template has invalid
/// syntax or references a field that is not part of `TemplateContext`.
pub fn render_templates(
    templates: &[(&str, &str)],
    institution: &Institution,
) -> Result<Vec<String>> {
    let mut tera = Tera::default();
    tera.add_raw_templates(templates.iter().copied())
        .map_err(|e| {
            anyhow!(CampusError::Template { source: e })
                .context("Failed to parse keyword response templates")
        })?;

    let context = tera::Context::from_serialize(TemplateContext::from(institution)).map_err(|e| {
        anyhow!(CampusError::Template { source: e })
            .context("Failed to create Tera context from institution")
    })?;

    templates
        .iter()
        .map(|(name, _)| {
            debug!("Rendering keyword template '{}'", name);
            tera.render(name, &context).map_err(|e| {
                anyhow!(CampusError::Template { source: e })
                    .context(format!("Tera rendering failed for template '{}'", name))
            })
        })
        .collect()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_fields() -> Result<()> {
        let institution = Institution::default();
        let rendered = render_templates(
            &[
                ("greetings.hello", "Hello! Welcome to {{ college_name }}."),
                ("college.contact", "Phone: {{ phone }}\nEmail: {{ email }}"),
            ],
            &institution,
        )?;
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0], "Hello! Welcome to ABC College.");
        assert_eq!(
            rendered[1],
            "Phone: +1-234-567-890\nEmail: info@abccollege.edu"
        );
        Ok(())
    }

    #[test]
    fn test_render_leaves_plain_text_untouched() -> Result<()> {
        let rendered = render_templates(
            &[("college.admission", "1. Online Application & Interview")],
            &Institution::default(),
        )?;
        assert_eq!(rendered[0], "1. Online Application & Interview");
        Ok(())
    }

    #[test]
    fn test_render_unknown_field_fails() {
        let result = render_templates(
            &[("greetings.bad", "Dean: {{ dean_name }}")],
            &Institution::default(),
        );
        assert!(result.is_err());
        let error_string = format!("{:#}", result.unwrap_err());
        assert!(error_string.contains("Tera rendering failed"));
        assert!(error_string.contains("greetings.bad"));
    }

    #[test]
    fn test_render_invalid_syntax_fails() {
        let result = render_templates(
            &[("greetings.broken", "Hello {{ college_name")],
            &Institution::default(),
        );
        assert!(result.is_err());
    }
}
