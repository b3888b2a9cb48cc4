use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Barrier method settings.
///
/// Construct with [`BarrierSettings::default()`] or through
/// [`BarrierSettingsBuilder`], which validates the values on `build()`.
///
/// ```
/// use logbarrier::solver::*;
///
/// let settings = BarrierSettingsBuilder::<f64>::default()
///     .mu(20.)
///     .verbose(false)
///     .build()
///     .unwrap();
/// ```

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarrierSettings<T: FloatT> {
    ///maximum number of Newton iterations per barrier weight
    #[builder(default = "20")]
    pub max_iter: u32,

    ///initial barrier weight
    #[builder(default = "T::one()")]
    pub t_init: T,

    ///barrier weight growth factor
    #[builder(default = "(10.0).as_T()")]
    pub mu: T,

    ///tolerance on both the gap bound m/t and the Newton decrement λ²/2
    #[builder(default = "(1e-8).as_T()")]
    pub epsilon: T,

    ///line search sufficient decrease coefficient
    #[builder(default = "(0.01).as_T()")]
    pub linesearch_alpha: T,

    ///line search backtracking factor
    #[builder(default = "(0.5).as_T()")]
    pub linesearch_beta: T,

    ///maximum number of line search backtracking steps
    #[builder(default = "20")]
    pub linesearch_max_iter: u32,

    ///Newton system pivots at or below this magnitude are singular
    #[builder(default = "T::zero()")]
    pub pivot_tol: T,

    ///maximum run time (seconds), checked between barrier weights
    #[builder(default = "f64::INFINITY")]
    pub time_limit: f64,

    ///verbose printing
    #[builder(default = "true")]
    pub verbose: bool,
}

impl<T> Default for BarrierSettings<T>
where
    T: FloatT,
{
    fn default() -> BarrierSettings<T> {
        BarrierSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> BarrierSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.  Used on settings that
    /// did not come through the builder, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_t_init(self.t_init)?;
        validate_mu(self.mu)?;
        validate_epsilon(self.epsilon)?;
        validate_linesearch_alpha(self.linesearch_alpha)?;
        validate_linesearch_beta(self.linesearch_beta)?;
        validate_pivot_tol(self.pivot_tol)?;
        validate_time_limit(self.time_limit)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for BarrierSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        BarrierSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> BarrierSettingsBuilder<T>
where
    T: FloatT,
{
    /// check any numerical values that have been set explicitly
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(t_init) = self.t_init {
            validate_t_init(t_init)?;
        }
        if let Some(mu) = self.mu {
            validate_mu(mu)?;
        }
        if let Some(epsilon) = self.epsilon {
            validate_epsilon(epsilon)?;
        }
        if let Some(alpha) = self.linesearch_alpha {
            validate_linesearch_alpha(alpha)?;
        }
        if let Some(beta) = self.linesearch_beta {
            validate_linesearch_beta(beta)?;
        }
        if let Some(pivot_tol) = self.pivot_tol {
            validate_pivot_tol(pivot_tol)?;
        }
        if let Some(time_limit) = self.time_limit {
            validate_time_limit(time_limit)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

// NB: comparisons are written so that NaN fails every check

fn validate_t_init<T: FloatT>(t_init: T) -> Result<(), SettingsError> {
    if t_init > T::zero() && t_init.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("t_init"))
    }
}

fn validate_mu<T: FloatT>(mu: T) -> Result<(), SettingsError> {
    if mu > T::one() && mu.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("mu"))
    }
}

fn validate_epsilon<T: FloatT>(epsilon: T) -> Result<(), SettingsError> {
    if epsilon > T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("epsilon"))
    }
}

fn validate_linesearch_alpha<T: FloatT>(alpha: T) -> Result<(), SettingsError> {
    if alpha > T::zero() && alpha < (0.5).as_T() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("linesearch_alpha"))
    }
}

fn validate_linesearch_beta<T: FloatT>(beta: T) -> Result<(), SettingsError> {
    if beta > T::zero() && beta < T::one() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("linesearch_beta"))
    }
}

fn validate_pivot_tol<T: FloatT>(pivot_tol: T) -> Result<(), SettingsError> {
    if pivot_tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("pivot_tol"))
    }
}

fn validate_time_limit(time_limit: f64) -> Result<(), SettingsError> {
    if time_limit > 0. {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("time_limit"))
    }
}

#[test]
fn test_settings_defaults() {
    let settings = BarrierSettings::<f64>::default();
    assert_eq!(settings.max_iter, 20);
    assert_eq!(settings.t_init, 1.);
    assert_eq!(settings.mu, 10.);
    assert_eq!(settings.epsilon, 1e-8);
    assert_eq!(settings.linesearch_alpha, 0.01);
    assert_eq!(settings.linesearch_beta, 0.5);
    assert_eq!(settings.linesearch_max_iter, 20);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validate() {
    // all fields OK
    let builder = BarrierSettingsBuilder::<f64>::default()
        .mu(4.)
        .linesearch_beta(0.8)
        .build();
    assert!(builder.is_ok());

    // mu must be > 1
    let builder = BarrierSettingsBuilder::<f64>::default().mu(1.).build();
    assert!(builder.is_err());

    // beta must be in (0,1)
    let builder = BarrierSettingsBuilder::<f64>::default()
        .linesearch_beta(1.5)
        .build();
    assert!(builder.is_err());

    // alpha must be in (0,1/2)
    let builder = BarrierSettingsBuilder::<f64>::default()
        .linesearch_alpha(f64::NAN)
        .build();
    assert!(builder.is_err());

    // direct field edits are caught by validate()
    let mut settings = BarrierSettings::<f64>::default();
    settings.epsilon = 0.;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("epsilon"))
    );
}
