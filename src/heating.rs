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
Necesidades netas de calefacción
================================

Q_heat_net_m = (Q_loss_m - eta_m * Q_gain_m) * f_allow_m
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::Result,
    gains_losses::GainsLosses,
    heat_balance::{allowance_factor, HeatBalance},
    types::{HasValues, Monthly, Purpose, SectorParams},
    vecops::{vecvecdif, vecvecmul},
};

/// Necesidades netas mensuales de calefacción
///
/// Monthly net heating needs of a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetHeatingNeeds {
    /// Heat balance (gamma_heat_m, eta_util_heat_m)
    pub balance: HeatBalance,
    /// Heating allowance factor, f_allow_heat_m {0, 1}
    pub allowance: Monthly,
    /// Net heating needs, Q_heat_net_m [MJ]
    pub net: Monthly,
}

impl HasValues for NetHeatingNeeds {
    fn values(&self) -> &Monthly {
        &self.net
    }
}

impl NetHeatingNeeds {
    /// Calcula las necesidades netas de calefacción
    ///
    /// `gl` must hold the heating gains and losses.
    ///
    /// # Errors
    ///
    /// * Gains and losses computed for other purpose than heating
    /// * Heat balance errors (zero losses, zero heat transfer coefficient)
    pub fn compute(gl: &GainsLosses, params: &SectorParams) -> Result<Self> {
        gl.check_purpose(Purpose::Heating)?;
        let balance = HeatBalance::compute(gl, params)?;
        let allowance = allowance_factor(&balance.ratio);
        let net = net_heating_needs(gl, &balance.utilization, &allowance);

        for m in 0..net.len() {
            let q = net[m];
            if q < 0.0 && allowance[m] > 0.0 && balance.ratio[m] >= 0.0 {
                warn!(
                    "Necesidades netas de calefacción negativas en el mes {}: {:.2} MJ",
                    m, q
                );
            }
        }
        debug!(
            "Necesidades netas de calefacción: {:.2} MJ/año",
            net.iter().sum::<f64>()
        );

        Ok(Self {
            balance,
            allowance,
            net,
        })
    }
}

/// Necesidades netas mensuales de calefacción [MJ]
///
/// The result is not clamped: months with gains greater than losses can give
/// negative values when the allowance factor is 1.
pub fn net_heating_needs(gl: &GainsLosses, utilization: &Monthly, allowance: &Monthly) -> Monthly {
    let used_gains = vecvecmul(utilization, &gl.gains());
    vecvecmul(&vecvecdif(&gl.losses(), &used_gains), allowance)
}
