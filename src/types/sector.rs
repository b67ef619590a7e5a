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
Datos del sector energético
===========================

Physical parameters of an energy sector, monthly climate and DHW tap data.
*/

use serde::{Deserialize, Serialize};

use super::monthly::{
    check_finite_monthly, check_non_negative, check_non_negative_monthly, check_positive,
    check_positive_monthly, monthly_const, Monthly,
};
use super::Purpose;
use crate::error::{Result, SectorError};
use crate::peb::month_lengths;

/// Parámetros físicos del sector energético
///
/// Physical parameters of an energy sector. The ventilation coefficient for
/// heating is a single value while overheating and cooling use monthly values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorParams {
    /// Sector volume, V_sec_i [m³]
    pub volume: f64,
    /// Effective heat capacity, C_sec_i [J/K]
    pub heat_capacity: f64,
    /// Transmission heat transfer coefficient for heating, H_trans_heat [W/K]
    pub h_trans_heat: f64,
    /// Transmission heat transfer coefficient for overheating, H_trans_overh [W/K]
    pub h_trans_overh: f64,
    /// Transmission heat transfer coefficient for cooling, H_trans_cool [W/K]
    pub h_trans_cool: f64,
    /// Ventilation heat transfer coefficient for heating, H_vent_heat [W/K]
    pub h_vent_heat: f64,
    /// Monthly ventilation heat transfer coefficient for overheating, H_vent_overh_m [W/K]
    pub h_vent_overh: Monthly,
    /// Monthly ventilation heat transfer coefficient for cooling, H_vent_cool_m [W/K]
    pub h_vent_cool: Monthly,
}

impl SectorParams {
    /// Comprueba el dominio de los parámetros
    pub fn validate(&self) -> Result<()> {
        check_positive("V_sec", self.volume)?;
        check_positive("C_sec", self.heat_capacity)?;
        check_non_negative("H_trans_heat", self.h_trans_heat)?;
        check_non_negative("H_trans_overh", self.h_trans_overh)?;
        check_non_negative("H_trans_cool", self.h_trans_cool)?;
        check_non_negative("H_vent_heat", self.h_vent_heat)?;
        check_non_negative_monthly("H_vent_overh", &self.h_vent_overh)?;
        check_non_negative_monthly("H_vent_cool", &self.h_vent_cool)?;
        Ok(())
    }

    /// Transmission coefficient for the given purpose [W/K]
    pub fn h_trans(&self, purpose: Purpose) -> f64 {
        match purpose {
            Purpose::Heating => self.h_trans_heat,
            Purpose::Overheating => self.h_trans_overh,
            Purpose::Cooling => self.h_trans_cool,
        }
    }

    /// Monthly ventilation coefficient for the given purpose [W/K]
    ///
    /// The heating coefficient is repeated for every month.
    pub fn h_vent(&self, purpose: Purpose) -> Monthly {
        match purpose {
            Purpose::Heating => monthly_const(self.h_vent_heat),
            Purpose::Overheating => self.h_vent_overh,
            Purpose::Cooling => self.h_vent_cool,
        }
    }
}

/// Datos climáticos mensuales
///
/// Monthly climate data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Climate {
    /// Monthly average outdoor temperature, T_e_m [°C]
    pub outdoor_temperature: Monthly,
    /// Month length, t_m [Ms]
    pub month_length: Monthly,
}

impl Climate {
    /// Climate with standard month lengths for a regular (or leap) year
    pub fn new(outdoor_temperature: Monthly, leap: bool) -> Self {
        Self {
            outdoor_temperature,
            month_length: month_lengths(leap),
        }
    }

    /// Comprueba el dominio de los datos climáticos
    pub fn validate(&self) -> Result<()> {
        check_finite_monthly("T_e", &self.outdoor_temperature)?;
        check_positive_monthly("t_m", &self.month_length)?;
        Ok(())
    }
}

/// Datos de puntos de consumo de ACS
///
/// Domestic hot water tap counts and reduction factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DhwParams {
    /// Number of showers / bathrooms, N_bath [-]
    pub n_bath: f64,
    /// Number of kitchen sinks, N_sink [-]
    pub n_sink: f64,
    /// Reduction factor for showers / bathrooms, r_water_bath [-]
    pub r_bath: f64,
    /// Reduction factor for kitchen sinks, r_water_sink [-]
    pub r_sink: f64,
}

impl Default for DhwParams {
    fn default() -> Self {
        Self {
            n_bath: 1.0,
            n_sink: 1.0,
            r_bath: 1.0,
            r_sink: 1.0,
        }
    }
}

impl DhwParams {
    /// Comprueba el dominio de los datos de ACS
    pub fn validate(&self) -> Result<()> {
        for (name, n) in &[("N_bath", self.n_bath), ("N_sink", self.n_sink)] {
            if *n == 0.0 {
                return Err(SectorError::DivisionByZero {
                    quantity: format!("1/{}", name),
                    month: None,
                });
            }
            check_positive(name, *n)?;
        }
        check_non_negative("r_bath", self.r_bath)?;
        check_non_negative("r_sink", self.r_sink)?;
        Ok(())
    }
}
