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
Riesgo de sobrecalentamiento
============================

Yearly overheating degree of a sector and the indicators derived from it:

- probability of active cooling, p_cool, used for the net cooling needs
- time fraction with indoor temperature over 25°C, f_cool
*/

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::Result,
    gains_losses::GainsLosses,
    heat_balance::HeatBalance,
    peb::{F_COOL_GEO, F_COOL_MAX, I_OVERH_MAX, I_OVERH_THRESH},
    types::{Monthly, Purpose, SectorParams},
    vecops::vecsum,
};

/// Riesgo de sobrecalentamiento del sector
///
/// Overheating risk indicators of a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheatingRisk {
    /// Heat balance (gamma_overh_m, eta_util_overh_m)
    pub balance: HeatBalance,
    /// Normalised monthly excess heat, Q_excess_norm_m [Kh]
    pub excess: Monthly,
    /// Yearly overheating degree, I_overh [Kh]
    pub degree: f64,
    /// Probability of active cooling, p_cool [-]
    pub p_cool: f64,
    /// Time fraction over 25°C, f_cool [-]
    pub f_cool: f64,
}

impl OverheatingRisk {
    /// Calcula el riesgo de sobrecalentamiento
    ///
    /// `gl` must hold the overheating gains and losses.
    ///
    /// # Errors
    ///
    /// * Gains and losses computed for other purpose than overheating
    /// * Heat balance errors (zero losses, zero heat transfer coefficient)
    pub fn compute(gl: &GainsLosses, params: &SectorParams) -> Result<Self> {
        gl.check_purpose(Purpose::Overheating)?;
        let balance = HeatBalance::compute(gl, params)?;
        let excess = excess_heat(
            gl,
            &balance.utilization,
            params.h_trans_overh,
            &params.h_vent_overh,
        );
        let degree = overheating_degree(&excess);
        let p_cool = active_cooling_probability(degree);
        let f_cool = time_fraction_over_25(degree);

        debug!(
            "Sobrecalentamiento: I_overh = {:.1} Kh, p_cool = {:.3}, f_cool = {:.4}",
            degree, p_cool, f_cool
        );

        Ok(Self {
            balance,
            excess,
            degree,
            p_cool,
            f_cool,
        })
    }
}

/// Exceso de calor mensual normalizado [Kh]
///
/// Q_excess_m = (1 - eta_m) * (1 - f_cool_geo) * Q_gain_m / (H_trans + H_vent_m) * 1000 / 3.6
pub fn excess_heat(
    gl: &GainsLosses,
    utilization: &Monthly,
    h_trans: f64,
    h_vent: &Monthly,
) -> Monthly {
    let gains = gl.gains();
    std::array::from_fn(|m| {
        (1.0 - utilization[m]) * (1.0 - F_COOL_GEO) * gains[m] / (h_trans + h_vent[m]) * 1_000.0
            / 3.6
    })
}

/// Grado de sobrecalentamiento anual, I_overh [Kh]
pub fn overheating_degree(excess: &Monthly) -> f64 {
    vecsum(excess)
}

/// Probabilidad de refrigeración activa, p_cool [-]
///
/// Linear between 1000 Kh (0) and 6500 Kh (1).
pub fn active_cooling_probability(degree: f64) -> f64 {
    ((degree - I_OVERH_THRESH) / (I_OVERH_MAX - I_OVERH_THRESH))
        .min(1.0)
        .max(0.0)
}

/// Fracción de tiempo por encima de 25°C, f_cool [-]
pub fn time_fraction_over_25(degree: f64) -> f64 {
    (F_COOL_MAX * degree / I_OVERH_MAX).min(1.0).max(0.0)
}
