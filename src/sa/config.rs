//! SA configuration and cooling constants.

/// Default starting temperature.
pub const INITIAL_TEMPERATURE: f64 = 1000.0;

/// Default stopping temperature: the loop runs while `T > MIN_TEMPERATURE`.
pub const MIN_TEMPERATURE: f64 = 0.001;

/// Default geometric cooling factor: `T_{k+1} = ALPHA * T_k`.
pub const ALPHA: f64 = 0.9999;

/// Configuration for the Simulated Annealing solver.
///
/// The number of iterations is fixed by the schedule:
/// `ceil(ln(min / initial) / ln(alpha))`, about 1.38 × 10⁵ with the
/// defaults, independent of the instance size.
///
/// # Examples
///
/// ```
/// use carseq::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.01)
///     .with_alpha(0.999)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The algorithm stops once T is at or below this.
    /// A value at or above `initial_temperature` means no iterations run.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: INITIAL_TEMPERATURE,
            min_temperature: MIN_TEMPERATURE,
            alpha: ALPHA,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of loop iterations the schedule allows, or 0 for an invalid
    /// configuration.
    pub fn iteration_bound(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut t = self.initial_temperature;
        let mut steps = 0usize;
        while t > self.min_temperature {
            t *= self.alpha;
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        Ok(())
    }
}
