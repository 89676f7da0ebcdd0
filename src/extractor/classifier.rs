//! Windowed belief/disbelief classification of node sequences.
//!
//! Each sequence is scored by six independent signals. A signal adds belief
//! (evidence for content), disbelief (evidence for boilerplate), both or
//! neither, always in steps of 0.25. A sequence is kept when the summed
//! belief minus the summed disbelief reaches the acceptance threshold.
//!
//! Signals:
//! 1. multiplicity: how many text nodes were merged into the sequence
//! 2. tag lists: content tags (headings, paragraphs) vs furniture tags
//! 3. tag homogeneity: one shared tag vs all-distinct tags
//! 4. average words per member
//! 5. timing: traversal-order gaps to the neighbouring sequences
//! 6. share of purely alphabetic tokens (long sequences only)

use std::collections::HashSet;

use tracing::trace;

use crate::options::{AlphaRatioThresholds, TimingThresholds, WordCountThresholds};
use crate::Options;

use super::text::NodeSequence;

/// The signal an [`Evidence`] entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Multiplicity,
    TagLists,
    TagHomogeneity,
    WordCount,
    Timing,
    AlphaRatio,
}

/// Belief and disbelief contributed by one signal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evidence {
    pub belief: f64,
    pub disbelief: f64,
}

impl Evidence {
    /// No evidence either way.
    pub const NONE: Evidence = Evidence {
        belief: 0.0,
        disbelief: 0.0,
    };

    /// Evidence for content.
    #[must_use]
    pub const fn belief(weight: f64) -> Self {
        Self {
            belief: weight,
            disbelief: 0.0,
        }
    }

    /// Evidence for boilerplate.
    #[must_use]
    pub const fn disbelief(weight: f64) -> Self {
        Self {
            belief: 0.0,
            disbelief: weight,
        }
    }

    /// Sum of two pieces of evidence.
    #[must_use]
    pub fn and(self, other: Evidence) -> Self {
        Self {
            belief: self.belief + other.belief,
            disbelief: self.disbelief + other.disbelief,
        }
    }
}

/// Per-signal evidence for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub signals: Vec<(Signal, Evidence)>,
}

impl Verdict {
    /// Total belief.
    #[must_use]
    pub fn belief(&self) -> f64 {
        self.signals.iter().map(|(_, e)| e.belief).sum()
    }

    /// Total disbelief.
    #[must_use]
    pub fn disbelief(&self) -> f64 {
        self.signals.iter().map(|(_, e)| e.disbelief).sum()
    }

    /// Belief minus disbelief.
    #[must_use]
    pub fn certainty(&self) -> f64 {
        self.belief() - self.disbelief()
    }

    /// Evidence recorded for `signal`.
    #[must_use]
    pub fn evidence(&self, signal: Signal) -> Evidence {
        self.signals
            .iter()
            .find(|(s, _)| *s == signal)
            .map_or(Evidence::NONE, |(_, e)| *e)
    }
}

/// Scores sequences against the thresholds of an [`Options`].
pub struct ContentClassifier<'a> {
    options: &'a Options,
    content_tags: HashSet<String>,
    furniture_tags: HashSet<String>,
}

impl<'a> ContentClassifier<'a> {
    /// Build a classifier borrowing `options`.
    #[must_use]
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            content_tags: lowercase_set(&options.content_tags),
            furniture_tags: lowercase_set(&options.furniture_tags),
        }
    }

    /// Score the sequence at `index`, using its neighbours for timing.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn assess(&self, sequences: &[NodeSequence], index: usize) -> Verdict {
        let seq = &sequences[index];
        let radius = self.options.window_radius;
        let start = index.saturating_sub(radius);
        let end = index.saturating_add(radius).saturating_add(1).min(sequences.len());

        let average = seq.word_count() as f64 / seq.len() as f64;

        Verdict {
            signals: vec![
                (Signal::Multiplicity, multiplicity(seq)),
                (Signal::TagLists, self.tag_lists(seq)),
                (Signal::TagHomogeneity, tag_homogeneity(seq)),
                (Signal::WordCount, word_count(average, &self.options.word_count)),
                (
                    Signal::Timing,
                    timing(&sequences[start..end], index - start, &self.options.timing),
                ),
                (Signal::AlphaRatio, alpha_ratio(seq, &self.options.alpha_ratio)),
            ],
        }
    }

    /// Whether a verdict clears the acceptance threshold.
    #[must_use]
    pub fn accepts(&self, verdict: &Verdict) -> bool {
        verdict.certainty() >= self.options.acceptance_threshold
    }

    /// Keep the sequences classified as content, in their original order.
    #[must_use]
    pub fn classify(&self, sequences: Vec<NodeSequence>) -> Vec<NodeSequence> {
        let keep: Vec<bool> = (0..sequences.len())
            .map(|index| {
                let verdict = self.assess(&sequences, index);
                let kept = self.accepts(&verdict);
                trace!(
                    entry = sequences[index].entry_order(),
                    exit = sequences[index].exit_order(),
                    belief = verdict.belief(),
                    disbelief = verdict.disbelief(),
                    kept,
                    "sequence verdict"
                );
                kept
            })
            .collect();

        sequences
            .into_iter()
            .zip(keep)
            .filter_map(|(seq, kept)| kept.then_some(seq))
            .collect()
    }

    /// Signal 2: content and furniture tags. Both can apply at once.
    #[must_use]
    pub fn tag_lists(&self, seq: &NodeSequence) -> Evidence {
        let tags = seq.tags();
        let mut evidence = Evidence::NONE;
        if tags.iter().any(|tag| self.content_tags.contains(*tag)) {
            evidence = evidence.and(Evidence::belief(1.0));
        }
        if tags.iter().any(|tag| self.furniture_tags.contains(*tag)) {
            evidence = evidence.and(Evidence::disbelief(1.0));
        }
        evidence
    }
}

/// Member tags are lowercase, so the catalogs are too.
fn lowercase_set(tags: &[String]) -> HashSet<String> {
    tags.iter().map(|tag| tag.to_ascii_lowercase()).collect()
}

/// Signal 1: merged sequences are more likely running text.
#[must_use]
pub fn multiplicity(seq: &NodeSequence) -> Evidence {
    if seq.len() > 1 {
        Evidence::belief(0.5)
    } else {
        Evidence::disbelief(0.25)
    }
}

/// Signal 3: a run of same-tag members vs a patchwork of distinct tags.
#[must_use]
pub fn tag_homogeneity(seq: &NodeSequence) -> Evidence {
    let distinct = seq.tags().len();
    if distinct == 1 && seq.len() > 1 {
        Evidence::belief(0.25)
    } else if distinct == seq.len() {
        Evidence::disbelief(0.25)
    } else {
        Evidence::NONE
    }
}

/// Signal 4: average words per member. Bands are mutually exclusive.
#[must_use]
pub fn word_count(average: f64, t: &WordCountThresholds) -> Evidence {
    if average > t.strong_above {
        Evidence::belief(1.0)
    } else if average > t.good_above {
        Evidence::belief(0.75)
    } else if average > t.fair_above {
        Evidence::belief(0.5)
    } else if average > t.weak_above {
        Evidence::belief(0.25)
    } else if average <= t.fragment_at_most {
        Evidence::disbelief(0.5)
    } else if average < t.stub_below {
        Evidence::disbelief(0.25)
    } else {
        Evidence::NONE
    }
}

/// Signal 5: gaps between consecutive window members.
///
/// `center` is the position of the scored sequence inside `window`. A window
/// of one sequence has no gaps and gives no evidence.
#[must_use]
pub fn timing(window: &[NodeSequence], center: usize, t: &TimingThresholds) -> Evidence {
    let gaps: Vec<usize> = window
        .windows(2)
        .map(|pair| pair[1].entry_order().abs_diff(pair[0].exit_order()))
        .collect();

    let Some(&first) = gaps.first() else {
        return Evidence::NONE;
    };

    if gaps.iter().all(|&gap| gap == first) {
        let gap = first as f64;
        return if gap < t.tight_below {
            Evidence::belief(0.5)
        } else if gap < t.close_below {
            Evidence::belief(0.25)
        } else if gap > t.sparse_above {
            Evidence::disbelief(0.75)
        } else {
            Evidence::NONE
        };
    }

    // gap j sits between window[j] and window[j + 1]
    let split = center.min(gaps.len());
    let before = decayed_sum(gaps[..split].iter().rev(), t.decay);
    let after = decayed_sum(gaps[split..].iter(), t.decay);

    if before < t.near_sum_below && after < t.near_sum_below {
        Evidence::belief(0.25)
    } else if before < t.far_sum_below && after < t.far_sum_below {
        Evidence::disbelief(0.25)
    } else {
        Evidence::disbelief(1.0)
    }
}

/// Gaps weighted 1, decay, decay², ... from the nearest outwards.
fn decayed_sum<'g>(gaps: impl Iterator<Item = &'g usize>, decay: f64) -> f64 {
    let mut weight = 1.0;
    let mut sum = 0.0;
    for &gap in gaps {
        sum += weight * gap as f64;
        weight *= decay;
    }
    sum
}

/// Signal 6: share of purely alphabetic tokens, for long sequences only.
#[must_use]
pub fn alpha_ratio(seq: &NodeSequence, t: &AlphaRatioThresholds) -> Evidence {
    let total = seq.word_count();
    if total <= t.min_tokens {
        return Evidence::NONE;
    }

    let alphabetic = seq
        .tokens()
        .filter(|token| token.chars().all(char::is_alphabetic))
        .count();
    let ratio = alphabetic as f64 / total as f64;

    if ratio > t.prose_above {
        Evidence::belief(0.75)
    } else if ratio > t.mostly_prose_above {
        Evidence::belief(0.5)
    } else if ratio < t.symbolic_below {
        Evidence::disbelief(0.75)
    } else if ratio < t.noisy_below {
        Evidence::disbelief(0.5)
    } else if ratio < t.mixed_below {
        Evidence::disbelief(0.25)
    } else {
        Evidence::NONE
    }
}
