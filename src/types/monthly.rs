// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Series mensuales
================

Monthly series type and domain checks shared by every computation.
*/

use crate::error::{Result, SectorError};
use crate::peb::NUM_MONTHS;

/// Serie de valores mensuales (enero = 0)
///
/// Monthly values in calendar order, index 0 is January.
pub type Monthly = [f64; NUM_MONTHS];

/// Serie mensual con todos los valores nulos
pub const ZEROS: Monthly = [0.0; NUM_MONTHS];

/// Serie mensual con un valor constante
pub fn monthly_const(value: f64) -> Monthly {
    [value; NUM_MONTHS]
}

/// Convierte una lista de valores en serie mensual
///
/// Build a monthly series from a slice, rejecting anything that is not exactly 12 values long.
pub fn monthly_from_slice(name: &str, values: &[f64]) -> Result<Monthly> {
    if values.len() != NUM_MONTHS {
        return Err(SectorError::InvalidDimension {
            name: name.into(),
            len: values.len(),
        });
    }
    let mut res = [0.0; NUM_MONTHS];
    res.copy_from_slice(values);
    Ok(res)
}

/// Trait común para elementos con valores mensuales
pub trait HasValues {
    /// Get list of values
    fn values(&self) -> &Monthly;

    /// Sum of all values
    fn values_sum(&self) -> f64 {
        self.values().iter().sum::<f64>()
    }
}

// Comprobaciones de dominio

/// Scalar must be finite and strictly positive
pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(domain_error(name, None, value))
    }
}

/// Scalar must be finite and not negative
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(domain_error(name, None, value))
    }
}

/// All monthly values must be finite and strictly positive
pub(crate) fn check_positive_monthly(name: &str, values: &Monthly) -> Result<()> {
    check_monthly(name, values, |v| v > 0.0)
}

/// All monthly values must be finite and not negative
pub(crate) fn check_non_negative_monthly(name: &str, values: &Monthly) -> Result<()> {
    check_monthly(name, values, |v| v >= 0.0)
}

/// All monthly values must be finite
pub(crate) fn check_finite_monthly(name: &str, values: &Monthly) -> Result<()> {
    check_monthly(name, values, |_| true)
}

fn check_monthly(name: &str, values: &Monthly, valid: impl Fn(f64) -> bool) -> Result<()> {
    match values
        .iter()
        .position(|&v| !(v.is_finite() && valid(v)))
    {
        Some(m) => Err(domain_error(name, Some(m), values[m])),
        None => Ok(()),
    }
}

fn domain_error(name: &str, month: Option<usize>, value: f64) -> SectorError {
    SectorError::DomainViolation {
        name: name.into(),
        month,
        value,
    }
}
