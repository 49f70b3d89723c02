//! Option constraints, vehicle models, and the immutable problem instance.

use std::fmt;

/// Stable external identifier of a vehicle model.
///
/// This is the number written in instance files and solution files. It is
/// independent of the model's position inside [`Problem::models`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelId(usize);

impl ModelId {
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    pub const fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capacity rule for one option: at most `capacity` vehicles requiring the
/// option in any `window` consecutive positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionConstraint {
    capacity: usize,
    window: usize,
}

impl OptionConstraint {
    pub const fn new(capacity: usize, window: usize) -> Self {
        Self { capacity, window }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Penalty charged for a window that holds `observed` requirers.
    #[inline]
    pub const fn excess(&self, observed: usize) -> u64 {
        observed.saturating_sub(self.capacity) as u64
    }
}

/// A vehicle class: how many vehicles to build and which options each needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    id: ModelId,
    count: usize,
    requires: Vec<bool>,
}

impl Model {
    pub fn new(id: ModelId, count: usize, requires: Vec<bool>) -> Self {
        Self {
            id,
            count,
            requires,
        }
    }

    #[inline]
    pub fn id(&self) -> ModelId {
        self.id
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn requirements(&self) -> &[bool] {
        &self.requires
    }

    /// Whether this model needs option `option`. Out-of-range options are
    /// treated as not required.
    #[inline]
    pub fn requires(&self, option: usize) -> bool {
        self.requires.get(option).copied().unwrap_or(false)
    }

    /// Number of options this model requires.
    pub fn option_count(&self) -> usize {
        self.requires.iter().filter(|&&r| r).count()
    }
}

/// Reasons a problem instance is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// An option's capacity is zero or exceeds its window.
    InvalidConstraint {
        option: usize,
        capacity: usize,
        window: usize,
    },
    /// A model's requirement vector does not cover every option.
    RequirementLength {
        model: ModelId,
        expected: usize,
        found: usize,
    },
    /// Two models share the same identifier.
    DuplicateModel(ModelId),
    /// Model counts do not add up to the declared number of vehicles.
    SupplyMismatch { declared: usize, supplied: usize },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ProblemError::*;
        match self {
            InvalidConstraint {
                option,
                capacity,
                window,
            } => write!(
                f,
                "option {option}: capacity {capacity} must satisfy 1 <= c <= n (n = {window})"
            ),
            RequirementLength {
                model,
                expected,
                found,
            } => write!(
                f,
                "model {model}: expected {expected} requirement flags, found {found}"
            ),
            DuplicateModel(id) => write!(f, "model {id} is declared more than once"),
            SupplyMismatch { declared, supplied } => write!(
                f,
                "model counts sum to {supplied} but the line has {declared} vehicles"
            ),
        }
    }
}

impl std::error::Error for ProblemError {}

/// An immutable car-sequencing instance.
///
/// Construction performs no checks so that solvers can be exercised on
/// degenerate data; loaders call [`Problem::validate`] before handing the
/// instance to a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    total_vehicles: usize,
    options: Vec<OptionConstraint>,
    models: Vec<Model>,
}

impl Problem {
    pub fn new(total_vehicles: usize, options: Vec<OptionConstraint>, models: Vec<Model>) -> Self {
        Self {
            total_vehicles,
            options,
            models,
        }
    }

    /// Length `C` of every complete sequence.
    #[inline]
    pub fn total_vehicles(&self) -> usize {
        self.total_vehicles
    }

    #[inline]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[inline]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn options(&self) -> &[OptionConstraint] {
        &self.options
    }

    #[inline]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    #[inline]
    pub fn model(&self, index: usize) -> &Model {
        &self.models[index]
    }

    /// Whether the model at `index` requires `option`.
    #[inline]
    pub fn requires(&self, index: usize, option: usize) -> bool {
        self.models[index].requires(option)
    }

    /// Sum of all model counts.
    pub fn supply(&self) -> usize {
        self.models.iter().map(Model::count).sum()
    }

    /// Maps a sequence of model indices to external identifiers.
    pub fn identifiers(&self, sequence: &[usize]) -> Vec<ModelId> {
        sequence.iter().map(|&i| self.models[i].id()).collect()
    }

    /// Checks the instance for internal consistency.
    pub fn validate(&self) -> Result<(), ProblemError> {
        for (option, c) in self.options.iter().enumerate() {
            if c.capacity() == 0 || c.capacity() > c.window() {
                return Err(ProblemError::InvalidConstraint {
                    option,
                    capacity: c.capacity(),
                    window: c.window(),
                });
            }
        }

        let mut seen = std::collections::HashSet::with_capacity(self.models.len());
        for model in &self.models {
            if model.requirements().len() != self.options.len() {
                return Err(ProblemError::RequirementLength {
                    model: model.id(),
                    expected: self.options.len(),
                    found: model.requirements().len(),
                });
            }
            if !seen.insert(model.id()) {
                return Err(ProblemError::DuplicateModel(model.id()));
            }
        }

        let supplied = self.supply();
        if supplied != self.total_vehicles {
            return Err(ProblemError::SupplyMismatch {
                declared: self.total_vehicles,
                supplied,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_model_problem() -> Problem {
        Problem::new(
            4,
            vec![OptionConstraint::new(1, 2), OptionConstraint::new(2, 3)],
            vec![
                Model::new(ModelId::new(0), 2, vec![true, false]),
                Model::new(ModelId::new(1), 2, vec![false, true]),
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let p = two_model_problem();
        assert_eq!(p.total_vehicles(), 4);
        assert_eq!(p.option_count(), 2);
        assert_eq!(p.model_count(), 2);
        assert_eq!(p.supply(), 4);
        assert!(p.requires(0, 0));
        assert!(!p.requires(0, 1));
        assert_eq!(p.model(1).option_count(), 1);
    }

    #[test]
    fn test_excess() {
        let c = OptionConstraint::new(2, 5);
        assert_eq!(c.excess(1), 0);
        assert_eq!(c.excess(2), 0);
        assert_eq!(c.excess(5), 3);
    }

    #[test]
    fn test_identifiers_follow_model_ids() {
        let p = Problem::new(
            3,
            vec![OptionConstraint::new(1, 1)],
            vec![
                Model::new(ModelId::new(7), 1, vec![true]),
                Model::new(ModelId::new(3), 2, vec![false]),
            ],
        );
        let ids: Vec<usize> = p
            .identifiers(&[1, 0, 1])
            .into_iter()
            .map(ModelId::value)
            .collect();
        assert_eq!(ids, vec![3, 7, 3]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(two_model_problem().validate().is_ok());
    }

    #[test]
    fn test_validate_capacity_above_window() {
        let p = Problem::new(
            1,
            vec![OptionConstraint::new(3, 2)],
            vec![Model::new(ModelId::new(0), 1, vec![true])],
        );
        assert!(matches!(
            p.validate(),
            Err(ProblemError::InvalidConstraint { option: 0, .. })
        ));
    }

    #[test]
    fn test_validate_zero_capacity() {
        let p = Problem::new(
            1,
            vec![OptionConstraint::new(0, 2)],
            vec![Model::new(ModelId::new(0), 1, vec![true])],
        );
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_supply_mismatch() {
        let p = Problem::new(
            5,
            vec![OptionConstraint::new(1, 2)],
            vec![Model::new(ModelId::new(0), 4, vec![true])],
        );
        assert_eq!(
            p.validate(),
            Err(ProblemError::SupplyMismatch {
                declared: 5,
                supplied: 4
            })
        );
    }

    #[test]
    fn test_validate_duplicate_id() {
        let p = Problem::new(
            2,
            vec![OptionConstraint::new(1, 2)],
            vec![
                Model::new(ModelId::new(4), 1, vec![true]),
                Model::new(ModelId::new(4), 1, vec![false]),
            ],
        );
        assert_eq!(p.validate(), Err(ProblemError::DuplicateModel(ModelId::new(4))));
    }

    #[test]
    fn test_validate_short_requirements() {
        let p = Problem::new(
            1,
            vec![OptionConstraint::new(1, 2), OptionConstraint::new(1, 2)],
            vec![Model::new(ModelId::new(0), 1, vec![true])],
        );
        assert!(matches!(
            p.validate(),
            Err(ProblemError::RequirementLength {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }
}
