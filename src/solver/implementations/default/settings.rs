use crate::{algebra::*, solver::core::SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for the [`DefaultSolver`](super::DefaultSolver)

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultSettings<T: FloatT> {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///host input: treat non-numeric entries as zero rather than failing
    #[builder(default = "true")]
    pub coerce_non_numeric_to_zero: bool,

    ///reject a square D that is not numerically symmetric
    #[builder(default = "false")]
    pub check_symmetry: bool,

    ///absolute tolerance for the symmetry check
    #[builder(default = "(1e-10).as_T()")]
    pub symmetry_tolerance: T,

    ///D is supplied as the inverse of its upper Cholesky factor
    #[builder(default = "false")]
    pub factorized: bool,
}

impl<T> Default for DefaultSettings<T>
where
    T: FloatT,
{
    fn default() -> DefaultSettings<T> {
        DefaultSettingsBuilder::<T>::default()
            .build()
            .expect("default settings are valid")
    }
}

impl<T> DefaultSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_symmetry_tolerance(self.symmetry_tolerance)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DefaultSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DefaultSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> DefaultSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that the symmetry tolerance is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.symmetry_tolerance {
            validate_symmetry_tolerance(tol)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_symmetry_tolerance<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("symmetry_tolerance"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    DefaultSettingsBuilder::<f64>::default().build().unwrap();

    let settings = DefaultSettings::<f64>::default();
    assert!(!settings.verbose);
    assert!(settings.coerce_non_numeric_to_zero);
    assert!(!settings.check_symmetry);
    assert_eq!(settings.symmetry_tolerance, 1e-10);
    assert!(!settings.factorized);

    // fail on bad tolerances
    assert!(DefaultSettingsBuilder::<f64>::default()
        .symmetry_tolerance(-1.)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .symmetry_tolerance(f64::NAN)
        .build()
        .is_err());

    // direct field assignment is caught by validate
    let mut settings = DefaultSettings::<f64>::default();
    settings.symmetry_tolerance = f64::INFINITY;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("symmetry_tolerance"))
    );
}
