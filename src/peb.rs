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
Valores reglamentarios del método mensual PEB
=============================================

Regulatory values of the monthly net needs method: indoor setpoints,
internal gains and DHW coefficients, utilization factor parameters and
overheating thresholds.
*/

use crate::types::Monthly;

/// Número de meses del periodo de cálculo
pub const NUM_MONTHS: usize = 12;

/// Días de cada mes en un año no bisiesto
pub const DAYS_PER_MONTH: [u32; NUM_MONTHS] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Segundos por día [s]
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// Consignas interiores [°C]

/// Indoor setpoint for heating [°C]
pub const T_I_HEAT: f64 = 18.0;
/// Indoor setpoint for overheating and cooling [°C]
pub const T_I_OVERH_COOL: f64 = 23.0;
/// Outdoor temperature increase for overheating and cooling [K]
pub const T_E_OFFSET_OVERH_COOL: f64 = 1.0;

// Ganancias internas [W]

/// Volume limit between the two internal gains (and DHW) correlations [m³]
pub const V_LIMIT: f64 = 192.0;
/// Internal gains correlation for V <= V_LIMIT: (slope [W/m³], intercept [W])
pub const Q_INT_SMALL: (f64, f64) = (1.41, 78.0);
/// Internal gains correlation for V > V_LIMIT: (slope [W/m³], intercept [W])
pub const Q_INT_LARGE: (f64, f64) = (0.67, 220.0);

// Factor de utilización

/// Reference time constant of the utilization factor numerical parameter [s]
pub const TAU_0: f64 = 54_000.0;
/// Heat balance ratio limit for the allowance factor [-]
pub const RATIO_ALLOW_MAX: f64 = 2.5;

// Sobrecalentamiento

/// Overheating degree threshold for active cooling [Kh]
pub const I_OVERH_THRESH: f64 = 1_000.0;
/// Maximum overheating degree [Kh]
pub const I_OVERH_MAX: f64 = 6_500.0;
/// Time fraction over 25°C at the maximum overheating degree [-]
pub const F_COOL_MAX: f64 = 0.05;
/// Geometric cooling correction fraction (not evaluated) [-]
pub const F_COOL_GEO: f64 = 0.0;

// Agua caliente sanitaria [W]

/// Bath / shower tap: (base [W], slope [W/m³] over V_LIMIT)
pub const Q_WATER_BATH: (f64, f64) = (64.0, 0.220);
/// Kitchen sink tap: (base [W], slope [W/m³] over V_LIMIT)
pub const Q_WATER_SINK: (f64, f64) = (16.0, 0.055);

/// Duración de los meses [Ms]
///
/// Month lengths in mega-seconds for a regular or leap year.
pub fn month_lengths(leap: bool) -> Monthly {
    std::array::from_fn(|m| {
        let days = if leap && m == 1 {
            DAYS_PER_MONTH[m] + 1
        } else {
            DAYS_PER_MONTH[m]
        };
        f64::from(days) * SECONDS_PER_DAY / 1_000_000.0
    })
}
