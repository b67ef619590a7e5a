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
Necesidades netas de agua caliente sanitaria
============================================

DHW needs only depend on the sector volume and consider two kinds of taps:
showers / bathrooms and kitchen sinks.
*/

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::Result,
    peb::{Q_WATER_BATH, Q_WATER_SINK, V_LIMIT},
    types::{check_positive, check_positive_monthly, DhwParams, HasValues, Monthly},
};

/// Necesidades netas mensuales de ACS
///
/// Monthly net domestic hot water needs of a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetDhwNeeds {
    /// Tap data used
    pub params: DhwParams,
    /// Net needs of each shower / bathroom, Q_water_bath_net_m [MJ]
    pub bath: Monthly,
    /// Net needs of each kitchen sink, Q_water_sink_net_m [MJ]
    pub sink: Monthly,
    /// Net DHW needs of the sector, Q_water_net_m [MJ]
    pub net: Monthly,
}

impl HasValues for NetDhwNeeds {
    fn values(&self) -> &Monthly {
        &self.net
    }
}

impl NetDhwNeeds {
    /// Calcula las necesidades netas de ACS
    ///
    /// * `volume` - sector volume [m³]
    /// * `t_m` - month length [Ms]
    /// * `params` - tap counts and reduction factors
    ///
    /// # Errors
    ///
    /// * Zero number of taps
    /// * Volume, month length, tap counts or reduction factors out of domain
    pub fn compute(volume: f64, t_m: &Monthly, params: DhwParams) -> Result<Self> {
        check_positive("V_sec", volume)?;
        check_positive_monthly("t_m", t_m)?;
        params.validate()?;

        let bath = tap_needs(volume, params.r_bath, params.n_bath, Q_WATER_BATH, t_m);
        let sink = tap_needs(volume, params.r_sink, params.n_sink, Q_WATER_SINK, t_m);
        let net = std::array::from_fn(|m| params.n_bath * bath[m] + params.n_sink * sink[m]);

        debug!("Necesidades netas de ACS: {:.2} MJ/año", net.iter().sum::<f64>());

        Ok(Self {
            params,
            bath,
            sink,
            net,
        })
    }
}

/// Necesidades netas mensuales de un punto de consumo [MJ]
///
/// Q_m = r * (1 / N) * max(base, base + slope * (V - 192)) * t_m
fn tap_needs(volume: f64, r: f64, n: f64, (base, slope): (f64, f64), t_m: &Monthly) -> Monthly {
    let f = 1.0 / n;
    let q = r * f * base.max(base + slope * (volume - V_LIMIT));
    std::array::from_fn(|m| q * t_m[m])
}
