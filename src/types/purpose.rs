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
Propósito del balance
=====================

Heating, overheating and cooling balances share the same structure and only
differ in their setpoints and in the direction of the heat balance ratio.
*/

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::peb::{T_E_OFFSET_OVERH_COOL, T_I_HEAT, T_I_OVERH_COOL};

/// Propósito del cálculo (calefacción, sobrecalentamiento, refrigeración)
///
/// Purpose of a gains and losses balance.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Purpose {
    /// Calefacción
    #[strum(serialize = "HEAT")]
    Heating,
    /// Sobrecalentamiento
    #[strum(serialize = "OVERH")]
    Overheating,
    /// Refrigeración
    #[strum(serialize = "COOL")]
    Cooling,
}

/// Lista de propósitos en orden de cálculo
pub const PURPOSES: [Purpose; 3] = [Purpose::Heating, Purpose::Overheating, Purpose::Cooling];

impl Purpose {
    /// Indoor setpoint temperature [°C]
    pub fn indoor_setpoint(self) -> f64 {
        match self {
            Purpose::Heating => T_I_HEAT,
            Purpose::Overheating | Purpose::Cooling => T_I_OVERH_COOL,
        }
    }

    /// Increase applied to the outdoor temperature [K]
    pub fn outdoor_offset(self) -> f64 {
        match self {
            Purpose::Heating => 0.0,
            Purpose::Overheating | Purpose::Cooling => T_E_OFFSET_OVERH_COOL,
        }
    }

    /// True when the heat balance ratio is losses over gains (cooling)
    pub fn is_loss_gain_ratio(self) -> bool {
        self == Purpose::Cooling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn purpose_roundtrip() {
        for purpose in &PURPOSES {
            assert_eq!(purpose.to_string().parse::<Purpose>().unwrap(), *purpose);
        }
        assert_eq!(Purpose::Overheating.to_string(), "OVERH");
        assert!("HEATING".parse::<Purpose>().is_err());
    }

    #[test]
    fn purpose_setpoints() {
        assert_eq!(Purpose::Heating.indoor_setpoint(), 18.0);
        assert_eq!(Purpose::Heating.outdoor_offset(), 0.0);
        assert_eq!(Purpose::Cooling.indoor_setpoint(), 23.0);
        assert_eq!(Purpose::Overheating.outdoor_offset(), 1.0);
        assert!(Purpose::Cooling.is_loss_gain_ratio());
        assert!(!Purpose::Overheating.is_loss_gain_ratio());
    }
}
