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


use itertools::Itertools;

use crate::{peb::NUM_MONTHS, sector::SectorBalance};

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Esta función usa un formato simple y compacto para representar los resultados
/// del balance del sector energético
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

/// Nombres cortos de los meses
const MONTH_NAMES: [&str; NUM_MONTHS] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEP", "OCT", "NOV", "DIC",
];

impl AsPlain for SectorBalance {
    /// Muestra las necesidades mensuales y anuales y el riesgo de sobrecalentamiento
    fn to_plain(&self) -> String {
        let annual = &self.annual;
        let q_heat = annual.heating;
        let q_cool = annual.cooling;
        let q_dhw = annual.dhw;
        let volume = self.params.volume;

        let risk = &self.overheating;
        let i_overh = risk.degree;
        let p_cool = risk.p_cool;
        let f_cool = risk.f_cool;

        let monthly = (0..NUM_MONTHS)
            .map(|m| {
                format!(
                    "{}: {:>10.1} {:>10.1} {:>10.1}",
                    MONTH_NAMES[m], self.heating.net[m], self.cooling.net[m], self.dhw.net[m]
                )
            })
            .join("\n");

        format!(
            "** Necesidades netas del sector

V_sec = {volume:.2} [m3]

** Necesidades anuales [MJ/an]:

- CAL: Q_heat_nd = {q_heat:.1}
- REF: Q_cool_nd = {q_cool:.1}
- ACS: Q_dhw_nd = {q_dhw:.1}

** Riesgo de sobrecalentamiento:

I_overh = {i_overh:.1} [Kh]
p_cool = {p_cool:.3}
f_cool = {f_cool:.3}

** Necesidades mensuales [MJ]:

MES         CAL        REF        ACS
{monthly}
"
        )
    }
}
