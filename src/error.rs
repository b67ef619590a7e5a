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
Errores
=======

Error type for sector computations and input parsing.
*/

use thiserror::Error;

/// Errores de cálculo y de lectura de datos
///
/// Errors produced while validating inputs or computing the sector balance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SectorError {
    /// A monthly series without exactly 12 values
    #[error("La serie mensual {name} debe tener 12 valores y tiene {len}")]
    InvalidDimension {
        /// Series name
        name: String,
        /// Number of values found
        len: usize,
    },
    /// Zero denominator (heat balance ratio, time constant, tap counts)
    #[error("División por cero al calcular {quantity}{}", month_suffix(.month))]
    DivisionByZero {
        /// Quantity being computed
        quantity: String,
        /// Month index (0 = January), when the failure is monthly
        month: Option<usize>,
    },
    /// Value outside its physical domain
    #[error("Valor fuera de rango para {name}{}: {value}", month_suffix(.month))]
    DomainViolation {
        /// Quantity name
        name: String,
        /// Month index (0 = January), when the value is monthly
        month: Option<usize>,
        /// Offending value
        value: f64,
    },
    /// Malformed text input
    #[error("Error de formato: {0}")]
    ParseError(String),
    /// Missing or inconsistent input data
    #[error("Datos de entrada incorrectos: {0}")]
    WrongInput(String),
}

fn month_suffix(month: &Option<usize>) -> String {
    month.map(|m| format!(" (mes {})", m)).unwrap_or_default()
}

impl From<std::num::ParseFloatError> for SectorError {
    fn from(err: std::num::ParseFloatError) -> Self {
        SectorError::ParseError(format!("formato numérico incorrecto ({})", err))
    }
}

/// Resultado de las operaciones de cálculo
pub type Result<T, E = SectorError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_messages() {
        let err = SectorError::DivisionByZero {
            quantity: "gamma_heat".into(),
            month: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "División por cero al calcular gamma_heat (mes 3)"
        );
        let err = SectorError::DomainViolation {
            name: "V_sec".into(),
            month: None,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Valor fuera de rango para V_sec: -1");
    }

    #[test]
    fn parse_float_conversion() {
        let err: SectorError = "1,2".parse::<f64>().unwrap_err().into();
        match err {
            SectorError::ParseError(_) => {}
            other => panic!("unexpected error {:?}", other),
        }
    }
}
