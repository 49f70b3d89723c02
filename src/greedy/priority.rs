//! Priority rules for ranking vehicle models.

use crate::model::Model;
use std::cmp::Ordering;

/// A scoring rule that assigns a priority value to a model.
///
/// Rules return integer scores where **lower is higher priority**.
///
/// # Examples
///
/// ```
/// use carseq::greedy::PriorityRule;
/// use carseq::model::Model;
///
/// // Fewest vehicles first.
/// struct FewestVehicles;
///
/// impl PriorityRule for FewestVehicles {
///     fn name(&self) -> &str { "FewestVehicles" }
///     fn score(&self, model: &Model) -> i64 {
///         model.count() as i64
///     }
/// }
/// ```
pub trait PriorityRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given model.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, model: &Model) -> i64;
}

/// Models that need more options go first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostOptions;

impl PriorityRule for MostOptions {
    fn name(&self) -> &str {
        "MostOptions"
    }

    fn score(&self, model: &Model) -> i64 {
        -(model.option_count() as i64)
    }
}

/// Models with more vehicles to build go first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostVehicles;

impl PriorityRule for MostVehicles {
    fn name(&self) -> &str {
        "MostVehicles"
    }

    fn score(&self, model: &Model) -> i64 {
        -(model.count() as i64)
    }
}

/// Strategy for breaking ties when all rules produce equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the order in which models were loaded (stable sort).
    LoadOrder,

    /// Lower external identifier first.
    ById,
}

/// Engine for composing priority rules into a ranking.
///
/// Rules are applied in order. A later rule is only consulted when every
/// earlier rule produces a tie.
///
/// # Examples
///
/// ```
/// use carseq::greedy::{MostOptions, MostVehicles, RuleEngine};
/// use carseq::model::{Model, ModelId};
///
/// let models = vec![
///     Model::new(ModelId::new(0), 5, vec![true, false]),
///     Model::new(ModelId::new(1), 2, vec![true, true]),
///     Model::new(ModelId::new(2), 9, vec![false, true]),
/// ];
///
/// let engine = RuleEngine::new()
///     .with_rule(MostOptions)
///     .with_rule(MostVehicles);
///
/// assert_eq!(engine.sort_indices(&models), vec![1, 2, 0]);
/// ```
pub struct RuleEngine {
    rules: Vec<Box<dyn PriorityRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an engine with no rules that keeps load order on ties.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::LoadOrder,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Appends a rule.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Sorts models by priority (lowest score first = highest priority).
    ///
    /// Returns indices into the original slice, sorted by priority.
    pub fn sort_indices(&self, models: &[Model]) -> Vec<usize> {
        let scores: Vec<Vec<i64>> = models
            .iter()
            .map(|m| self.rules.iter().map(|r| r.score(m)).collect())
            .collect();

        let mut indices: Vec<usize> = (0..models.len()).collect();

        indices.sort_by(|&a, &b| {
            scores[a].cmp(&scores[b]).then_with(|| match self.tie_breaker {
                TieBreaker::LoadOrder => Ordering::Equal,
                TieBreaker::ById => models[a].id().cmp(&models[b].id()),
            })
        });

        indices
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
