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
Balance térmico
===============

Heat balance ratio, utilization factor and allowance factor of the monthly
method. Heating and overheating use the gains to losses ratio (gamma) while
cooling uses the losses to gains ratio (lambda).
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{Result, SectorError},
    gains_losses::GainsLosses,
    peb::{RATIO_ALLOW_MAX, TAU_0},
    types::{Monthly, Purpose, SectorParams},
    vecops::vecvecdiv,
};

/// Balance térmico mensual de un propósito
///
/// Monthly heat balance ratio and utilization factor for a purpose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatBalance {
    /// Purpose of the balance
    pub purpose: Purpose,
    /// Heat balance ratio, gamma_m (gains / losses) or lambda_m (losses / gains) [-]
    pub ratio: Monthly,
    /// Time constant of the sector, tau_m [s]
    pub time_constant: Monthly,
    /// Dimensionless numerical parameter, a_m [-]
    pub a: Monthly,
    /// Utilization factor, eta_util_m [-]
    pub utilization: Monthly,
}

impl HeatBalance {
    /// Calcula el balance térmico de unas ganancias y pérdidas
    ///
    /// Compute heat balance ratio and utilization factor for the gains and losses of a purpose.
    ///
    /// # Errors
    ///
    /// * Zero denominator of the heat balance ratio in any month
    /// * Zero total heat transfer coefficient
    /// * Heat balance ratio is not a number
    /// * Utilization factor is not finite
    pub fn compute(gl: &GainsLosses, params: &SectorParams) -> Result<Self> {
        let purpose = gl.purpose;
        let ratio = heat_balance_ratio(gl)?;
        let time_constant = time_constant(
            purpose,
            params.heat_capacity,
            params.h_trans(purpose),
            &params.h_vent(purpose),
        )?;
        let a = time_constant.map(utilization_parameter);
        let utilization = utilization_factors(purpose, &ratio, &a)?;

        debug!(
            "Balance térmico {}: {} = {:.3?}, eta = {:.3?}",
            purpose,
            ratio_name(purpose),
            ratio,
            utilization
        );

        Ok(Self {
            purpose,
            ratio,
            time_constant,
            a,
            utilization,
        })
    }
}

/// Nombre del ratio de balance térmico del propósito
pub fn ratio_name(purpose: Purpose) -> &'static str {
    match purpose {
        Purpose::Heating => "gamma_heat",
        Purpose::Overheating => "gamma_overh",
        Purpose::Cooling => "lambda_cool",
    }
}

/// Ratio de balance térmico mensual [-]
///
/// Gains over losses for heating and overheating, losses over gains for cooling.
///
/// # Errors
///
/// * The denominator (losses, or gains for cooling) is zero in some month
pub fn heat_balance_ratio(gl: &GainsLosses) -> Result<Monthly> {
    let gains = gl.gains();
    let losses = gl.losses();
    let res = if gl.purpose.is_loss_gain_ratio() {
        vecvecdiv(&losses, &gains)
    } else {
        vecvecdiv(&gains, &losses)
    };
    res.map_err(|month| SectorError::DivisionByZero {
        quantity: ratio_name(gl.purpose).into(),
        month: Some(month),
    })
}

/// Constante de tiempo del sector [s]
///
/// tau_m = C / (H_trans + H_vent_m)
///
/// # Errors
///
/// * Zero total heat transfer coefficient in some month
pub fn time_constant(
    purpose: Purpose,
    heat_capacity: f64,
    h_trans: f64,
    h_vent: &Monthly,
) -> Result<Monthly> {
    let mut tau = [0.0; 12];
    for (m, h_v) in h_vent.iter().enumerate() {
        let h = h_trans + h_v;
        if h == 0.0 {
            return Err(SectorError::DivisionByZero {
                quantity: format!("tau_{}", purpose),
                month: Some(m),
            });
        }
        tau[m] = heat_capacity / h;
    }
    Ok(tau)
}

/// Parámetro numérico adimensional del factor de utilización [-]
///
/// a = 1 + tau / 54000
pub fn utilization_parameter(time_constant: f64) -> f64 {
    1.0 + time_constant / TAU_0
}

/// Factor de utilización de un mes [-]
///
/// eta = (1 - ratio^a) / (1 - ratio^(a + 1)), with the limit a / (a + 1) when
/// the ratio is exactly 1.
///
/// Ratios above 1 use the equivalent form in powers of 1 / ratio, since ratio^a
/// overflows for large time constants.
pub fn utilization_factor(ratio: f64, a: f64) -> f64 {
    if ratio == 1.0 {
        a / (a + 1.0)
    } else if ratio > 1.0 {
        let inv = 1.0 / ratio;
        let inv_a1 = inv.powf(a + 1.0);
        (inv_a1 - inv) / (inv_a1 - 1.0)
    } else {
        (1.0 - ratio.powf(a)) / (1.0 - ratio.powf(a + 1.0))
    }
}

/// Nombre del factor de utilización según el uso
pub fn utilization_name(purpose: Purpose) -> &'static str {
    match purpose {
        Purpose::Heating => "eta_heat",
        Purpose::Overheating => "eta_overh",
        Purpose::Cooling => "eta_cool",
    }
}

/// Factores de utilización mensuales [-]
///
/// Negative ratios come from negative losses (outdoor temperature above the setpoint).
/// In that case the gain utilization factor is 1 / ratio (heating, overheating) and the
/// loss utilization factor is 1 (cooling), as in EN ISO 13790.
///
/// # Errors
///
/// * Heat balance ratio is not a number in some month
/// * Utilization factor is not finite in some month
pub fn utilization_factors(purpose: Purpose, ratio: &Monthly, a: &Monthly) -> Result<Monthly> {
    let mut eta = [0.0; 12];
    for m in 0..eta.len() {
        let r = ratio[m];
        if r.is_nan() {
            return Err(SectorError::DomainViolation {
                name: ratio_name(purpose).into(),
                month: Some(m),
                value: r,
            });
        }
        eta[m] = if r < 0.0 {
            trace!("{} mes {}: ratio negativo ({:.3})", purpose, m, r);
            if purpose.is_loss_gain_ratio() {
                1.0
            } else {
                1.0 / r
            }
        } else {
            if r == 1.0 {
                trace!("{} mes {}: ratio unitario, eta = a / (a + 1)", purpose, m);
            }
            utilization_factor(r, a[m])
        };
        if !eta[m].is_finite() {
            return Err(SectorError::DomainViolation {
                name: utilization_name(purpose).into(),
                month: Some(m),
                value: eta[m],
            });
        }
    }
    Ok(eta)
}

/// Factor de permisividad mensual {0, 1}
///
/// 1 when the heat balance ratio is below 2.5, 0 otherwise.
pub fn allowance_factor(ratio: &Monthly) -> Monthly {
    ratio.map(|r| if r < RATIO_ALLOW_MAX { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{monthly_const, ZEROS};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn gains_losses(purpose: Purpose, gains: f64, losses: f64) -> GainsLosses {
        GainsLosses {
            purpose,
            solar: ZEROS,
            internal: monthly_const(gains),
            transmission: monthly_const(losses / 2.0),
            ventilation: monthly_const(losses / 2.0),
        }
    }

    #[test]
    fn ratio_direction() {
        let gl = gains_losses(Purpose::Heating, 100.0, 400.0);
        assert_eq!(heat_balance_ratio(&gl).unwrap(), monthly_const(0.25));
        let gl = gains_losses(Purpose::Overheating, 100.0, 400.0);
        assert_eq!(heat_balance_ratio(&gl).unwrap(), monthly_const(0.25));
        let gl = gains_losses(Purpose::Cooling, 100.0, 400.0);
        assert_eq!(heat_balance_ratio(&gl).unwrap(), monthly_const(4.0));
    }

    #[test]
    fn ratio_zero_denominator() {
        let mut gl = gains_losses(Purpose::Heating, 100.0, 400.0);
        gl.transmission[2] = 0.0;
        gl.ventilation[2] = 0.0;
        assert_eq!(
            heat_balance_ratio(&gl),
            Err(SectorError::DivisionByZero {
                quantity: "gamma_heat".into(),
                month: Some(2)
            })
        );
        let gl = gains_losses(Purpose::Cooling, 0.0, 400.0);
        assert_eq!(
            heat_balance_ratio(&gl),
            Err(SectorError::DivisionByZero {
                quantity: "lambda_cool".into(),
                month: Some(0)
            })
        );
    }

    #[test]
    fn time_constant_values() {
        let tau = time_constant(Purpose::Heating, 1e7, 100.0, &monthly_const(50.0)).unwrap();
        assert_eq!(tau[0], 1e7 / 150.0);
        assert_relative_eq!(utilization_parameter(tau[0]), 2.234567901234568, epsilon = 1e-12);
        assert!(time_constant(Purpose::Cooling, 1e7, 0.0, &ZEROS).is_err());
    }

    #[test]
    fn utilization_factor_singularity() {
        // Exact equality branch
        let a = 2.234567901234568;
        assert_eq!(utilization_factor(1.0, a), a / (a + 1.0));
        // General formula tends to the same limit
        for eps in &[1e-3, 1e-5, 1e-7] {
            let limit = a / (a + 1.0);
            assert!((utilization_factor(1.0 + eps, a) - limit).abs() < 10.0 * eps);
            assert!((utilization_factor(1.0 - eps, a) - limit).abs() < 10.0 * eps);
        }
    }

    #[test]
    fn utilization_factor_bounds() {
        assert_eq!(utilization_factor(0.0, 2.0), 1.0);
        let eta_low = utilization_factor(0.5, 2.0);
        let eta_high = utilization_factor(2.0, 2.0);
        assert!(eta_low > eta_high);
        assert!(eta_low <= 1.0 && eta_high >= 0.0);
        // (1 - 2^2) / (1 - 2^3) = 3 / 7
        assert_relative_eq!(eta_high, 3.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn utilization_factor_negative_ratio() {
        let mut ratio = monthly_const(0.5);
        ratio[7] = -0.25;
        let a = monthly_const(2.0);

        let eta = utilization_factors(Purpose::Heating, &ratio, &a).unwrap();
        assert_eq!(eta[7], -4.0);
        assert_eq!(eta[0], utilization_factor(0.5, 2.0));

        let eta = utilization_factors(Purpose::Overheating, &ratio, &a).unwrap();
        assert_eq!(eta[7], -4.0);

        let eta = utilization_factors(Purpose::Cooling, &ratio, &a).unwrap();
        assert_eq!(eta[7], 1.0);
    }

    #[test]
    fn utilization_factor_nan_ratio() {
        let mut ratio = monthly_const(0.5);
        ratio[3] = f64::NAN;
        match utilization_factors(Purpose::Cooling, &ratio, &monthly_const(2.0)) {
            Err(SectorError::DomainViolation { name, month, .. }) => {
                assert_eq!(name, "lambda_cool");
                assert_eq!(month, Some(3));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn utilization_factor_large_time_constant() {
        // C = 1e9 J/K, H = 50 W/K
        let a = utilization_parameter(1e9 / 50.0);
        assert_relative_eq!(a, 371.3703703703704, epsilon = 1e-9);
        // 17.37^a is not representable
        assert!(17.37_f64.powf(a).is_infinite());
        let eta = utilization_factor(17.37, a);
        assert!(eta.is_finite());
        assert_relative_eq!(eta, 1.0 / 17.37, epsilon = 1e-12);

        let eta = utilization_factors(Purpose::Cooling, &monthly_const(17.37), &monthly_const(a))
            .unwrap();
        assert!(eta.iter().all(|e| e.is_finite()));

        // Large ratios through the heat balance
        let params = SectorParams {
            volume: 10.0,
            heat_capacity: 1e9,
            h_trans_heat: 50.0,
            h_trans_overh: 50.0,
            h_trans_cool: 50.0,
            h_vent_heat: 0.0,
            h_vent_overh: ZEROS,
            h_vent_cool: ZEROS,
        };
        let gl = gains_losses(Purpose::Cooling, 100.0, 1737.0);
        let hb = HeatBalance::compute(&gl, &params).unwrap();
        assert_relative_eq!(hb.ratio[0], 17.37, epsilon = 1e-12);
        assert_relative_eq!(hb.utilization[0], 1.0 / 17.37, epsilon = 1e-12);
        assert_eq!(allowance_factor(&hb.ratio), ZEROS);
    }

    #[test]
    fn utilization_factor_not_finite() {
        let mut a = monthly_const(2.0);
        a[5] = f64::NAN;
        match utilization_factors(Purpose::Overheating, &monthly_const(0.5), &a) {
            Err(SectorError::DomainViolation { name, month, value }) => {
                assert_eq!(name, "eta_overh");
                assert_eq!(month, Some(5));
                assert!(value.is_nan());
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn allowance_factor_step() {
        let mut ratio = monthly_const(0.0);
        ratio[0] = 2.499_999;
        ratio[1] = 2.5;
        ratio[2] = 2.500_001;
        ratio[3] = 10.0;
        let f_allow = allowance_factor(&ratio);
        assert_eq!(&f_allow[..5], &[1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn heat_balance_compute() {
        let params = SectorParams {
            volume: 10.0,
            heat_capacity: 1e7,
            h_trans_heat: 100.0,
            h_trans_overh: 100.0,
            h_trans_cool: 100.0,
            h_vent_heat: 50.0,
            h_vent_overh: monthly_const(50.0),
            h_vent_cool: monthly_const(50.0),
        };
        let gl = gains_losses(Purpose::Heating, 100.0, 100.0);
        let hb = HeatBalance::compute(&gl, &params).unwrap();
        assert_eq!(hb.ratio, monthly_const(1.0));
        let a = 1.0 + (1e7 / 150.0) / 54_000.0;
        assert_eq!(hb.a[0], a);
        assert_eq!(hb.utilization[0], a / (a + 1.0));
    }

    #[test]
    fn time_constant_follows_monthly_ventilation() {
        let mut h_vent_overh = monthly_const(50.0);
        h_vent_overh[3] = 150.0;
        let params = SectorParams {
            volume: 10.0,
            heat_capacity: 1e7,
            h_trans_heat: 100.0,
            h_trans_overh: 100.0,
            h_trans_cool: 100.0,
            h_vent_heat: 50.0,
            h_vent_overh,
            h_vent_cool: monthly_const(50.0),
        };
        let gl = gains_losses(Purpose::Overheating, 100.0, 400.0);
        let hb = HeatBalance::compute(&gl, &params).unwrap();

        let a_april = 1.0 + (1e7 / 250.0) / 54_000.0;
        let a_other = 1.0 + (1e7 / 150.0) / 54_000.0;
        assert_relative_eq!(hb.a[3], 1.7407407407407407, epsilon = 1e-12);
        assert_relative_eq!(hb.a[0], 2.234567901234568, epsilon = 1e-12);
        assert_eq!(hb.a[3], a_april);
        assert_eq!(hb.a[0], a_other);
        assert_eq!(hb.time_constant[3], 1e7 / 250.0);

        assert_eq!(hb.utilization[3], utilization_factor(0.25, a_april));
        assert_eq!(hb.utilization[0], utilization_factor(0.25, a_other));
        assert!(hb.utilization[3] < hb.utilization[0]);
    }
}
