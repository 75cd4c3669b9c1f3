//! SA configuration and the geometric cooling schedule.

use crate::error::{Error, Result};

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied after
/// every block of `iterations_per_temperature` neighbor evaluations,
/// until the temperature no longer exceeds `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_tour_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.1)
///     .with_cooling_rate(0.9)
///     .with_iterations_per_temperature(200)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cooling_steps().unwrap(), 66);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The algorithm stops once T is no longer above this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    ///
    /// Typical values: 0.90–0.99.
    pub cooling_rate: f64,

    /// Number of neighbor evaluations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1.0,
            cooling_rate: 0.95,
            iterations_per_temperature: 1000,
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

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let t0 = self.initial_temperature;
        let t_min = self.min_temperature;
        let alpha = self.cooling_rate;

        // Subnormal temperatures stop shrinking under multiplication.
        if !t0.is_normal() || t0 < 0.0 {
            return Err(Error::invalid_parameter(
                "initial_temperature",
                format!("must be positive, finite and normal, got {t0}"),
            ));
        }
        if !t_min.is_normal() || t_min < 0.0 {
            return Err(Error::invalid_parameter(
                "min_temperature",
                format!("must be positive, finite and normal, got {t_min}"),
            ));
        }
        if t_min >= t0 {
            return Err(Error::invalid_parameter(
                "min_temperature",
                format!("must be less than initial_temperature ({t0}), got {t_min}"),
            ));
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::invalid_parameter(
                "cooling_rate",
                format!("must be in (0, 1), got {alpha}"),
            ));
        }
        if self.iterations_per_temperature == 0 {
            return Err(Error::invalid_parameter(
                "iterations_per_temperature",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Number of cooling steps a run performs.
    ///
    /// Counts the multiplications `T *= cooling_rate` starting from
    /// `initial_temperature` until `T <= min_temperature`, in the same
    /// floating-point arithmetic the runner uses. This is
    /// `ceil(ln(T_min / T_0) / ln(alpha))` up to rounding at exact
    /// boundaries.
    pub fn cooling_steps(&self) -> Result<usize> {
        self.validate()?;
        let mut temperature = self.initial_temperature;
        let mut steps = 0usize;
        while temperature > self.min_temperature {
            let next = temperature * self.cooling_rate;
            if next >= temperature {
                return Err(Error::invalid_parameter(
                    "cooling_rate",
                    format!("temperature stops decreasing at {temperature}"),
                ));
            }
            temperature = next;
            steps += 1;
        }
        Ok(steps)
    }

    /// Total neighbor evaluations a run performs.
    pub fn total_iterations(&self) -> Result<usize> {
        Ok(self.cooling_steps()? * self.iterations_per_temperature)
    }
}
