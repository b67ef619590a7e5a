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
Ganancias y pérdidas mensuales
==============================

Monthly internal gains, transmission losses and ventilation losses of an
energy sector for heating, overheating and cooling.

Solar gains are provided from outside through the [`SolarGains`] trait.
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{Result, SectorError},
    peb::{Q_INT_LARGE, Q_INT_SMALL, V_LIMIT},
    types::{
        check_non_negative_monthly, monthly_from_slice, Climate, Monthly, Purpose, SectorParams,
        PURPOSES, ZEROS,
    },
    vecops::vecvecsum,
};

// -------------------- Solar gains

/// Ganancias solares mensuales
///
/// Source of monthly solar gains [MJ] for each purpose. Solar gains are not
/// computed by this crate.
pub trait SolarGains {
    /// Monthly solar gains for the given purpose [MJ]
    fn solar_gains(&self, purpose: Purpose) -> Result<Monthly>;
}

/// Sin ganancias solares (todos los meses nulos)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSolarGains;

impl SolarGains for NoSolarGains {
    fn solar_gains(&self, _purpose: Purpose) -> Result<Monthly> {
        Ok(ZEROS)
    }
}

/// Ganancias solares calculadas externamente
///
/// Monthly solar gains computed elsewhere [MJ].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySolarGains {
    /// Solar gains for heating, Q_solar_heat_m [MJ]
    pub heating: Monthly,
    /// Solar gains for overheating, Q_solar_overh_m [MJ]
    pub overheating: Monthly,
    /// Solar gains for cooling, Q_solar_cool_m [MJ]
    pub cooling: Monthly,
}

impl MonthlySolarGains {
    /// Build from value lists, checking their length
    pub fn from_slices(heating: &[f64], overheating: &[f64], cooling: &[f64]) -> Result<Self> {
        Ok(Self {
            heating: monthly_from_slice("Q_solar_heat", heating)?,
            overheating: monthly_from_slice("Q_solar_overh", overheating)?,
            cooling: monthly_from_slice("Q_solar_cool", cooling)?,
        })
    }
}

impl SolarGains for MonthlySolarGains {
    fn solar_gains(&self, purpose: Purpose) -> Result<Monthly> {
        Ok(match purpose {
            Purpose::Heating => self.heating,
            Purpose::Overheating => self.overheating,
            Purpose::Cooling => self.cooling,
        })
    }
}

// -------------------- Gains and losses

/// Ganancias y pérdidas mensuales para un propósito
///
/// Monthly gains and losses of a sector for a given purpose [MJ]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainsLosses {
    /// Purpose of the balance
    pub purpose: Purpose,
    /// Solar gains, Q_solar_m [MJ]
    pub solar: Monthly,
    /// Internal gains, Q_int_m [MJ]
    pub internal: Monthly,
    /// Transmission losses, Q_trans_m [MJ]
    pub transmission: Monthly,
    /// Ventilation losses, Q_vent_m [MJ]
    pub ventilation: Monthly,
}

impl GainsLosses {
    /// Total gains, Q_gain_m = Q_int_m + Q_solar_m [MJ]
    pub fn gains(&self) -> Monthly {
        vecvecsum(&self.internal, &self.solar)
    }

    /// Total losses, Q_loss_m = Q_trans_m + Q_vent_m [MJ]
    pub fn losses(&self) -> Monthly {
        vecvecsum(&self.transmission, &self.ventilation)
    }

    /// Comprueba que las ganancias y pérdidas corresponden al propósito indicado
    pub fn check_purpose(&self, purpose: Purpose) -> Result<()> {
        if self.purpose == purpose {
            Ok(())
        } else {
            Err(SectorError::WrongInput(format!(
                "Se esperaban ganancias y pérdidas para {} y se encontraron para {}",
                purpose, self.purpose
            )))
        }
    }
}

/// Ganancias y pérdidas del sector para calefacción, sobrecalentamiento y refrigeración
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorGainsLosses {
    /// Heating balance
    pub heating: GainsLosses,
    /// Overheating balance
    pub overheating: GainsLosses,
    /// Cooling balance
    pub cooling: GainsLosses,
}

impl SectorGainsLosses {
    /// Calcula ganancias y pérdidas para todos los propósitos
    ///
    /// Compute monthly gains and losses of a sector for heating, overheating and cooling.
    ///
    /// # Errors
    ///
    /// * Parameters or climate data out of their domain
    /// * Negative or non finite solar gains
    pub fn compute(
        params: &SectorParams,
        climate: &Climate,
        solar: &dyn SolarGains,
    ) -> Result<Self> {
        params.validate()?;
        climate.validate()?;

        let [heating, overheating, cooling] = PURPOSES;
        let res = Self {
            heating: gains_losses(heating, params, climate, solar)?,
            overheating: gains_losses(overheating, params, climate, solar)?,
            cooling: gains_losses(cooling, params, climate, solar)?,
        };
        debug!(
            "Ganancias y pérdidas calculadas (V = {:.2} m³, Q_int anual = {:.2} MJ)",
            params.volume,
            res.heating.internal.iter().sum::<f64>()
        );
        Ok(res)
    }

    /// Gains and losses for the given purpose
    pub fn get(&self, purpose: Purpose) -> &GainsLosses {
        match purpose {
            Purpose::Heating => &self.heating,
            Purpose::Overheating => &self.overheating,
            Purpose::Cooling => &self.cooling,
        }
    }
}

/// Gains and losses for a single purpose
fn gains_losses(
    purpose: Purpose,
    params: &SectorParams,
    climate: &Climate,
    solar: &dyn SolarGains,
) -> Result<GainsLosses> {
    let solar = solar.solar_gains(purpose)?;
    check_non_negative_monthly(&format!("Q_solar_{}", purpose), &solar)?;

    let t_m = &climate.month_length;
    let t_e = &climate.outdoor_temperature;
    let t_i = purpose.indoor_setpoint();
    let offset = purpose.outdoor_offset();

    let internal = internal_gains(params.volume, t_m);
    let transmission = transmission_losses(params.h_trans(purpose), t_i, t_e, offset, t_m);
    let ventilation = ventilation_losses(&params.h_vent(purpose), t_i, t_e, offset, t_m);

    for m in 0..t_m.len() {
        trace!(
            "{} mes {}: Q_int = {:.3}, Q_sol = {:.3}, Q_trans = {:.3}, Q_vent = {:.3} [MJ]",
            purpose,
            m,
            internal[m],
            solar[m],
            transmission[m],
            ventilation[m]
        );
    }

    Ok(GainsLosses {
        purpose,
        solar,
        internal,
        transmission,
        ventilation,
    })
}

/// Ganancias internas mensuales [MJ]
///
/// Monthly internal gains, identical for heating, overheating and cooling.
///
/// * `volume` - sector volume, V_sec_i [m³]
/// * `t_m` - month length [Ms]
pub fn internal_gains(volume: f64, t_m: &Monthly) -> Monthly {
    let (slope, intercept) = if volume <= V_LIMIT {
        Q_INT_SMALL
    } else {
        Q_INT_LARGE
    };
    let q_int = slope * volume + intercept; // W
    std::array::from_fn(|m| q_int * t_m[m])
}

/// Pérdidas por transmisión mensuales [MJ]
///
/// Q_trans_m = H_trans * (T_i - (T_e_m + offset)) * t_m
///
/// * `h_trans` - transmission heat transfer coefficient [W/K]
/// * `t_i` - indoor setpoint [°C]
/// * `t_e` - monthly average outdoor temperature [°C]
/// * `offset` - increase of the outdoor temperature [K]
/// * `t_m` - month length [Ms]
pub fn transmission_losses(
    h_trans: f64,
    t_i: f64,
    t_e: &Monthly,
    offset: f64,
    t_m: &Monthly,
) -> Monthly {
    std::array::from_fn(|m| h_trans * (t_i - (t_e[m] + offset)) * t_m[m])
}

/// Pérdidas por ventilación mensuales [MJ]
///
/// Q_vent_m = H_vent_m * (T_i - (T_e_m + offset)) * t_m
///
/// The ventilation coefficient may change from month to month.
pub fn ventilation_losses(
    h_vent: &Monthly,
    t_i: f64,
    t_e: &Monthly,
    offset: f64,
    t_m: &Monthly,
) -> Monthly {
    std::array::from_fn(|m| h_vent[m] * (t_i - (t_e[m] + offset)) * t_m[m])
}
