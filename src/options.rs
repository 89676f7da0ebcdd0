//! Configuration options for content extraction.
//!
//! `Options` holds the classifier's acceptance threshold, window size, tag
//! catalogs and the tuned cutoffs of the word-count, timing and
//! alphabetic-ratio signals. Every field is public and has a default.
//! `Options::from_json` overrides only the fields a document names.

use serde::{Deserialize, Serialize};

use crate::extractor::tags::{CONTENT_TAGS, FURNITURE_TAGS};
use crate::Result;

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use textsift::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     acceptance_threshold: 1.0,
///     window_radius: 3,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Minimum certainty (belief minus disbelief) for a sequence to be kept.
    ///
    /// Default: `0.75`
    pub acceptance_threshold: f64,

    /// Number of neighbours on each side considered by the timing signal.
    ///
    /// Default: `2`
    pub window_radius: usize,

    /// Tags that count as evidence for content (headings, paragraphs).
    ///
    /// Default: `h1`-`h6`, `p`
    pub content_tags: Vec<String>,

    /// Tags that count as evidence for boilerplate (scripts, buttons, ...).
    ///
    /// Default: `script`, `noscript`, `style`, `button`, `time`, `select`,
    /// `option`, `label`, `textarea`, `template`
    pub furniture_tags: Vec<String>,

    /// Average-words-per-member cutoffs.
    pub word_count: WordCountThresholds,

    /// Neighbourhood gap cutoffs.
    pub timing: TimingThresholds,

    /// Alphabetic token ratio cutoffs.
    pub alpha_ratio: AlphaRatioThresholds,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            acceptance_threshold: 0.75,
            window_radius: 2,
            content_tags: CONTENT_TAGS.iter().map(|t| (*t).to_string()).collect(),
            furniture_tags: FURNITURE_TAGS.iter().map(|t| (*t).to_string()).collect(),
            word_count: WordCountThresholds::default(),
            timing: TimingThresholds::default(),
            alpha_ratio: AlphaRatioThresholds::default(),
        }
    }
}

impl Options {
    /// Load options from JSON. Missing fields keep their defaults.
    ///
    /// ```rust
    /// use textsift::Options;
    ///
    /// let options = Options::from_json(r#"{ "window_radius": 1, "timing": { "near_sum_below": 4.0 } }"#)?;
    /// assert_eq!(options.window_radius, 1);
    /// assert_eq!(options.timing.near_sum_below, 4.0);
    /// assert_eq!(options.timing.far_sum_below, 6.0);
    /// # Ok::<(), textsift::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Cutoffs on the average number of words per sequence member.
///
/// Belief bands are strict lower bounds checked from the highest down; the
/// first match wins. Disbelief bands apply only when no belief band matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCountThresholds {
    /// Above this: belief 1.0. Default: `20`
    pub strong_above: f64,
    /// Above this: belief 0.75. Default: `10`
    pub good_above: f64,
    /// Above this: belief 0.5. Default: `7`
    pub fair_above: f64,
    /// Above this: belief 0.25. Default: `5`
    pub weak_above: f64,
    /// At or below this: disbelief 0.5. Default: `1`
    pub fragment_at_most: f64,
    /// Below this: disbelief 0.25. Default: `3`
    pub stub_below: f64,
}

impl Default for WordCountThresholds {
    fn default() -> Self {
        Self {
            strong_above: 20.0,
            good_above: 10.0,
            fair_above: 7.0,
            weak_above: 5.0,
            fragment_at_most: 1.0,
            stub_below: 3.0,
        }
    }
}

/// Cutoffs on traversal-order gaps between a sequence and its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingThresholds {
    /// Uniform gap below this: belief 0.5. Default: `2`
    pub tight_below: f64,
    /// Uniform gap below this: belief 0.25. Default: `4`
    pub close_below: f64,
    /// Uniform gap above this: disbelief 0.75. Default: `5`
    pub sparse_above: f64,
    /// Both decayed sums below this: belief 0.25. Default: `3`
    pub near_sum_below: f64,
    /// Both decayed sums below this: disbelief 0.25, otherwise 1.0. Default: `6`
    pub far_sum_below: f64,
    /// Weight multiplier per step away from the sequence. Default: `0.5`
    pub decay: f64,
}

impl Default for TimingThresholds {
    fn default() -> Self {
        Self {
            tight_below: 2.0,
            close_below: 4.0,
            sparse_above: 5.0,
            near_sum_below: 3.0,
            far_sum_below: 6.0,
            decay: 0.5,
        }
    }
}

/// Cutoffs on the share of purely alphabetic tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaRatioThresholds {
    /// The signal only applies above this many tokens. Default: `10`
    pub min_tokens: usize,
    /// Above this: belief 0.75. Default: `0.85`
    pub prose_above: f64,
    /// Above this: belief 0.5. Default: `0.8`
    pub mostly_prose_above: f64,
    /// Below this: disbelief 0.75. Default: `0.1`
    pub symbolic_below: f64,
    /// Below this: disbelief 0.5. Default: `0.2`
    pub noisy_below: f64,
    /// Below this: disbelief 0.25. Default: `0.5`
    pub mixed_below: f64,
}

impl Default for AlphaRatioThresholds {
    fn default() -> Self {
        Self {
            min_tokens: 10,
            prose_above: 0.85,
            mostly_prose_above: 0.8,
            symbolic_below: 0.1,
            noisy_below: 0.2,
            mixed_below: 0.5,
        }
    }
}
