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
Necesidades netas de refrigeración
==================================

Q_cool_net_m = p_cool * (1 - f_cool_geo) * (Q_gain_m - eta_m * Q_loss_m) * f_allow_m

The heat balance ratio is losses over gains (lambda) and the probability of
active cooling comes from the overheating risk of the sector.
*/

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, SectorError},
    gains_losses::GainsLosses,
    heat_balance::{allowance_factor, HeatBalance},
    peb::F_COOL_GEO,
    types::{HasValues, Monthly, Purpose, SectorParams},
    vecops::{veckmul, vecvecdif, vecvecmul},
};

/// Necesidades netas mensuales de refrigeración
///
/// Monthly net cooling needs of a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetCoolingNeeds {
    /// Heat balance (lambda_cool_m, eta_util_cool_m)
    pub balance: HeatBalance,
    /// Cooling allowance factor, f_allow_cool_m {0, 1}
    pub allowance: Monthly,
    /// Probability of active cooling used, p_cool [-]
    pub p_cool: f64,
    /// Net cooling needs, Q_cool_net_m [MJ]
    pub net: Monthly,
}

impl HasValues for NetCoolingNeeds {
    fn values(&self) -> &Monthly {
        &self.net
    }
}

impl NetCoolingNeeds {
    /// Calcula las necesidades netas de refrigeración
    ///
    /// * `gl` - cooling gains and losses
    /// * `params` - sector parameters
    /// * `p_cool` - probability of active cooling [0, 1]
    ///
    /// # Errors
    ///
    /// * Gains and losses computed for other purpose than cooling
    /// * Probability of active cooling outside [0, 1]
    /// * Heat balance errors (zero gains, zero heat transfer coefficient)
    pub fn compute(gl: &GainsLosses, params: &SectorParams, p_cool: f64) -> Result<Self> {
        gl.check_purpose(Purpose::Cooling)?;
        if !(0.0..=1.0).contains(&p_cool) {
            return Err(SectorError::DomainViolation {
                name: "p_cool".into(),
                month: None,
                value: p_cool,
            });
        }
        let balance = HeatBalance::compute(gl, params)?;
        let allowance = allowance_factor(&balance.ratio);
        let net = net_cooling_needs(gl, &balance.utilization, &allowance, p_cool);

        debug!(
            "Necesidades netas de refrigeración: {:.2} MJ/año (p_cool = {:.3})",
            net.iter().sum::<f64>(),
            p_cool
        );

        Ok(Self {
            balance,
            allowance,
            p_cool,
            net,
        })
    }
}

/// Necesidades netas mensuales de refrigeración [MJ]
pub fn net_cooling_needs(
    gl: &GainsLosses,
    utilization: &Monthly,
    allowance: &Monthly,
    p_cool: f64,
) -> Monthly {
    let used_losses = vecvecmul(utilization, &gl.losses());
    let q_cool_net_princ = vecvecmul(&vecvecdif(&gl.gains(), &used_losses), allowance);
    veckmul(&q_cool_net_princ, p_cool * (1.0 - F_COOL_GEO))
}
