// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind catalog ranking.
//!
//! A record's score is the sum of three independent parts:
//!
//! ```text
//! score = authority(links)                       policy-dependent
//!       + 10 if title contains query
//!       +  5 if description contains query
//!       +  3 if url contains query
//!       + 50 if title == query
//!       + 100 if url == query or url == "https://<query>/"
//! ```
//!
//! A record where none of the three containment checks pass is not scored at
//! all. It is excluded, which is different from scoring zero.
//!
//! # Authority policies
//!
//! Two ways of turning a link count into a score have been used in practice,
//! and they rank very differently. Neither is hard-coded: the authority term is
//! an [`AuthorityPolicy`], and [`ScoringPolicy`] names the two known ones.
//!
//! | Policy   | Term              | Absent `links` | Character                           |
//! |----------|-------------------|----------------|-------------------------------------|
//! | `Log`    | `log10(links+1)`  | 0              | Canonical. Text relevance dominates |
//! | `Linear` | `links`           | 1              | Popular domains swamp bonuses       |

use crate::types::Record;
use crate::util::normalize::fold_case;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Bonus when the title contains the query.
pub const TITLE_MATCH_BONUS: f64 = 10.0;

/// Bonus when the description contains the query.
pub const DESCRIPTION_MATCH_BONUS: f64 = 5.0;

/// Bonus when the url contains the query.
pub const DOMAIN_MATCH_BONUS: f64 = 3.0;

/// Bonus when the whole title equals the query.
pub const EXACT_TITLE_BONUS: f64 = 50.0;

/// Bonus when the url equals the query, bare or as `https://<query>/`.
pub const EXACT_URL_BONUS: f64 = 100.0;

// =============================================================================
// AUTHORITY POLICIES
// =============================================================================

/// Turns a record's inbound link count into the base term of its score.
///
/// Implementations must be monotone (more links never lowers the term) and
/// must return finite values. `None` means the catalog had no usable count;
/// each policy picks its own default rather than treating it as an error.
///
/// Any `Fn(Option<u64>) -> f64` is a policy:
///
/// ```
/// use bluom::{rank_with, Record};
///
/// let catalog = vec![Record::new("https://a.com/", "Alpha", "", Some(9))];
/// let flat = |_links: Option<u64>| 0.0;
/// let results = rank_with("alpha", &catalog, &flat);
/// assert_eq!(results[0].score, 60.0);
/// ```
pub trait AuthorityPolicy {
    fn authority(&self, links: Option<u64>) -> f64;
}

impl<F> AuthorityPolicy for F
where
    F: Fn(Option<u64>) -> f64,
{
    fn authority(&self, links: Option<u64>) -> f64 {
        self(links)
    }
}

/// The two named authority policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScoringPolicy {
    /// Raw link count. Absent counts as 1.
    Linear,
    /// `log10(links + 1)`. Absent counts as 0.
    #[default]
    #[value(alias = "logarithmic")]
    Log,
}

impl ScoringPolicy {
    /// Link count assumed when a record carries none.
    pub fn default_links(self) -> u64 {
        match self {
            ScoringPolicy::Linear => 1,
            ScoringPolicy::Log => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoringPolicy::Linear => "linear",
            ScoringPolicy::Log => "log",
        }
    }
}

impl AuthorityPolicy for ScoringPolicy {
    fn authority(&self, links: Option<u64>) -> f64 {
        let links = links.unwrap_or(self.default_links()) as f64;
        match self {
            ScoringPolicy::Linear => links,
            ScoringPolicy::Log => (links + 1.0).log10(),
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scoring policy '{0}' (expected 'log' or 'linear')")]
pub struct UnknownPolicy(pub String);

impl FromStr for ScoringPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(ScoringPolicy::Linear),
            "log" | "logarithmic" => Ok(ScoringPolicy::Log),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

// =============================================================================
// MATCHING
// =============================================================================

/// Which fields of a record contain the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFlags {
    pub in_title: bool,
    pub in_description: bool,
    pub in_domain: bool,
}

impl MatchFlags {
    /// Check each field for the (already normalized) query.
    pub fn evaluate(query: &str, record: &Record) -> Self {
        MatchFlags {
            in_title: fold_case(&record.title).contains(query),
            in_description: fold_case(&record.description).contains(query),
            in_domain: fold_case(&record.url).contains(query),
        }
    }

    /// True if any field matched. Records with no match are excluded.
    pub fn any(self) -> bool {
        self.in_title || self.in_description || self.in_domain
    }

    /// Sum of the containment bonuses for the matched fields.
    pub fn bonus(self) -> f64 {
        let mut bonus = 0.0;
        if self.in_title {
            bonus += TITLE_MATCH_BONUS;
        }
        if self.in_description {
            bonus += DESCRIPTION_MATCH_BONUS;
        }
        if self.in_domain {
            bonus += DOMAIN_MATCH_BONUS;
        }
        bonus
    }
}

/// Bonuses for whole-field equality with the query.
///
/// The url bonus also accepts the protocol-wrapped form, so typing `bbc.com`
/// finds the record stored as `https://bbc.com/`.
pub fn exact_match_bonus(query: &str, record: &Record) -> f64 {
    let mut bonus = 0.0;
    if fold_case(&record.title) == query {
        bonus += EXACT_TITLE_BONUS;
    }
    let url = fold_case(&record.url);
    if url == query || url == format!("https://{}/", query) {
        bonus += EXACT_URL_BONUS;
    }
    bonus
}

/// Score one record against a normalized, non-empty query.
///
/// Returns `None` when the record does not match at all.
pub fn score_record<P>(query: &str, record: &Record, policy: &P) -> Option<f64>
where
    P: AuthorityPolicy + ?Sized,
{
    let flags = MatchFlags::evaluate(query, record);
    if !flags.any() {
        return None;
    }
    Some(policy.authority(record.links) + flags.bonus() + exact_match_bonus(query, record))
}
