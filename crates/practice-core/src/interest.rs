//! Simple and compound interest.

use serde::{Deserialize, Serialize};

/// Principal, annual rate in percent, and time in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestInputs {
    pub principal: f64,
    pub rate: f64,
    pub years: f64,
}

/// Results of [`compute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestReport {
    pub simple_interest: f64,
    pub compound_amount: f64,
    pub compound_interest: f64,
}

/// Apply the simple and annually-compounded interest formulas.
///
/// Inputs are not validated: zero, negative, and fractional values are
/// computed through as given.
#[must_use]
pub fn compute(inputs: &InterestInputs) -> InterestReport {
    let InterestInputs {
        principal,
        rate,
        years,
    } = *inputs;
    let simple_interest = principal * rate * years / 100.0;
    let compound_amount = principal * (1.0 + rate / 100.0).powf(years);
    InterestReport {
        simple_interest,
        compound_amount,
        compound_interest: compound_amount - principal,
    }
}
