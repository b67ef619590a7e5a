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
Balance del sector energético
=============================

Complete monthly balance of an energy sector:

1. gains and losses for heating, overheating and cooling
2. net heating needs
3. overheating risk and probability of active cooling
4. net cooling needs
5. net DHW needs
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    cooling::NetCoolingNeeds,
    dhw::NetDhwNeeds,
    error::Result,
    gains_losses::{SectorGainsLosses, SolarGains},
    heating::NetHeatingNeeds,
    overheating::OverheatingRisk,
    types::{Climate, DhwParams, HasValues, SectorParams},
};

/// Datos y resultados del balance de un sector energético
///
/// Data and results of the energy balance of a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBalance {
    /// Sector parameters
    pub params: SectorParams,
    /// Climate data
    pub climate: Climate,
    /// Monthly gains and losses for each purpose
    pub gains_losses: SectorGainsLosses,
    /// Net heating needs
    pub heating: NetHeatingNeeds,
    /// Overheating risk
    pub overheating: OverheatingRisk,
    /// Net cooling needs
    pub cooling: NetCoolingNeeds,
    /// Net DHW needs
    pub dhw: NetDhwNeeds,
    /// Yearly totals
    pub annual: AnnualNeeds,
}

/// Necesidades netas anuales [MJ]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualNeeds {
    /// Net heating needs [MJ]
    pub heating: f64,
    /// Net cooling needs [MJ]
    pub cooling: f64,
    /// Net DHW needs [MJ]
    pub dhw: f64,
}

impl SectorBalance {
    /// Calcula el balance del sector energético
    ///
    /// Compute the monthly balance of an energy sector.
    ///
    /// * `params` - physical parameters of the sector
    /// * `climate` - monthly outdoor temperature and month length
    /// * `dhw` - DHW tap counts and reduction factors
    /// * `solar` - source of solar gains
    ///
    /// # Errors
    ///
    /// * Inputs out of their domain
    /// * Zero denominators in heat balance ratios, time constants or tap counts
    pub fn compute(
        params: &SectorParams,
        climate: &Climate,
        dhw: DhwParams,
        solar: &dyn SolarGains,
    ) -> Result<Self> {
        let gains_losses = SectorGainsLosses::compute(params, climate, solar)?;

        let heating = NetHeatingNeeds::compute(&gains_losses.heating, params)?;
        let overheating = OverheatingRisk::compute(&gains_losses.overheating, params)?;
        let cooling =
            NetCoolingNeeds::compute(&gains_losses.cooling, params, overheating.p_cool)?;
        let dhw = NetDhwNeeds::compute(params.volume, &climate.month_length, dhw)?;

        let annual = AnnualNeeds {
            heating: heating.values_sum(),
            cooling: cooling.values_sum(),
            dhw: dhw.values_sum(),
        };
        debug!("Necesidades netas anuales: {:?}", annual);
        info!(
            "Balance del sector calculado: Q_heat = {:.1} MJ, Q_cool = {:.1} MJ, Q_dhw = {:.1} MJ, I_overh = {:.1} Kh",
            annual.heating, annual.cooling, annual.dhw, overheating.degree
        );

        Ok(Self {
            params: params.clone(),
            climate: climate.clone(),
            gains_losses,
            heating,
            overheating,
            cooling,
            dhw,
            annual,
        })
    }
}
