//! Validation engine for digest configuration.
//!
//! Every registered [`ValidationRule`] runs against a [`DigestConfig`] and
//! all findings are collected into one [`ValidationReport`], so a config
//! with several mistakes reports all of them at once.
//!
//! ```rust,ignore
//! use review_digest::config::validation::ValidationEngine;
//!
//! let report = ValidationEngine::with_defaults().validate(&config);
//! for err in report.errors() {
//!     eprintln!("{err}");
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::errors::{ConfigError, ErrorCode};
use super::DigestConfig;
use crate::nlp::stopwords::StopwordFilter;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single finding with its severity
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// `true` when there are no errors; warnings are acceptable.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// One stateless check over a [`DigestConfig`].
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier (e.g. `"lsa_parameters"`)
    fn name(&self) -> &str;

    fn validate(&self, config: &DigestConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(SentenceBudgetRule));
        engine.add_rule(Box::new(LsaParametersRule));
        engine.add_rule(Box::new(ThemeParametersRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, config: &DigestConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(config));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. The header takes one sentence; zero leaves no room ──────────────────

struct SentenceBudgetRule;

impl ValidationRule for SentenceBudgetRule {
    fn name(&self) -> &str {
        "sentence_budget"
    }

    fn validate(&self, config: &DigestConfig) -> Vec<ValidationDiagnostic> {
        if config.sentences == 0 {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/sentences",
                    "sentences must be at least 1",
                )
                .with_hint("One sentence is the sentiment header; set 2 or more to include extracts"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 2. LSA smoothing and dimension reduction ───────────────────────────────

struct LsaParametersRule;

impl ValidationRule for LsaParametersRule {
    fn name(&self) -> &str {
        "lsa_parameters"
    }

    fn validate(&self, config: &DigestConfig) -> Vec<ValidationDiagnostic> {
        let lsa = &config.summarizer;
        let mut out = Vec::new();

        if !(0.0..1.0).contains(&lsa.smoothing) {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/summarizer/smoothing",
                    format!("smoothing must be in [0, 1), got {}", lsa.smoothing),
                )
                .with_hint("The usual value is 0.4"),
            ));
        }

        if lsa.min_dimensions == 0 {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/summarizer/min_dimensions",
                    "min_dimensions must be greater than 0",
                )
                .with_hint("The usual value is 3"),
            ));
        }

        if !(lsa.reduction_ratio > 0.0 && lsa.reduction_ratio <= 1.0) {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/summarizer/reduction_ratio",
                    format!(
                        "reduction_ratio must be in (0, 1], got {}",
                        lsa.reduction_ratio
                    ),
                )
                .with_hint("Use 1.0 to keep every dimension"),
            ));
        }

        out
    }
}

// ─── 3. Theme counting ──────────────────────────────────────────────────────

struct ThemeParametersRule;

impl ValidationRule for ThemeParametersRule {
    fn name(&self) -> &str {
        "theme_parameters"
    }

    fn validate(&self, config: &DigestConfig) -> Vec<ValidationDiagnostic> {
        let themes = &config.themes;
        let mut out = Vec::new();

        if themes.top_n == 0 {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/themes/top_n",
                    "top_n must be greater than 0",
                ),
            ));
        }

        if themes.min_word_chars == 0 {
            out.push(ValidationDiagnostic::warning(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/themes/min_word_chars",
                    "min_word_chars of 0 counts every word as a theme",
                )
                .with_hint("Short function words will dominate; 4 is the usual value"),
            ));
        }

        out
    }
}

// ─── 4. Stopword languages must have a bundled list ─────────────────────────

struct StopwordLanguageRule;

impl StopwordLanguageRule {
    fn check(path: &str, language: &str) -> Option<ValidationDiagnostic> {
        if StopwordFilter::is_supported(language) {
            return None;
        }
        Some(ValidationDiagnostic::error(
            ConfigError::new(
                ErrorCode::UnknownLanguage,
                path,
                format!("no stopword list for language \"{language}\""),
            )
            .with_hint("Use an ISO 639-1 code such as \"en\""),
        ))
    }
}

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopword_language"
    }

    fn validate(&self, config: &DigestConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        if let Some(language) = &config.summarizer.stop_words {
            out.extend(Self::check("/summarizer/stop_words", language));
        }
        // Only loaded when theme filtering is on
        if config.themes.exclude_stop_words {
            out.extend(Self::check(
                "/themes/stop_words_language",
                &config.themes.stop_words_language,
            ));
        }
        out
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    ConfigError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, config: &DigestConfig) -> Vec<ValidationDiagnostic> {
        let strict = config.strict;
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &config.unknown_fields, strict));
        out.extend(Self::check_unknowns(
            "/summarizer",
            &config.summarizer.unknown_fields,
            strict,
        ));
        out.extend(Self::check_unknowns(
            "/themes",
            &config.themes.unknown_fields,
            strict,
        ));
        out.extend(Self::check_unknowns(
            "/corpus",
            &config.corpus.unknown_fields,
            strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
