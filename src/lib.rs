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
SectorNeeds
===========

This crate provides a library and binary that compute, with a **monthly quasi-steady-state
method**, the net energy needs of an energy sector of a building:

- net heating needs, with its gain utilization factor and the heating allowance gate
- overheating risk (overheating degree-hours) and the probability of active cooling
- net cooling needs, with its loss utilization factor, weighted by that probability
- net domestic hot water (DHW) needs

Inputs are the sector volume and effective heat capacity, its transmission and ventilation
heat transfer coefficients, the monthly outdoor temperature and month length and, optionally,
monthly solar gains and the DHW tap counts and reduction factors.

Este *crate* proporciona una biblioteca y un programa que calculan, mediante un **método mensual
cuasiestacionario**, las necesidades energéticas netas de un sector energético de un edificio:

- necesidades netas de calefacción, con su factor de utilización de ganancias y su habilitación
- riesgo de sobrecalentamiento (grados-hora de sobrecalentamiento) y probabilidad de refrigeración activa
- necesidades netas de refrigeración, con su factor de utilización de pérdidas, ponderadas por esa probabilidad
- necesidades netas de agua caliente sanitaria (ACS)

# Ejemplo

```rust
use sectorneeds::*;

// lectura de los datos del sector energético
let data = "#META V_SEC: 250
#META C_SEC: 2.5e7
#META H_TRANS_HEAT: 120
#META H_TRANS_OVERH: 120
#META H_TRANS_COOL: 120
#META H_VENT_HEAT: 40
T_E, 3.2, 3.9, 5.9, 9.2, 13.3, 16.2, 17.6, 17.6, 15.2, 11.2, 6.3, 3.5
H_VENT_OVERH, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80
H_VENT_COOL, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60"
    .parse::<SectorData>()
    .unwrap();

// Cálculo del balance del sector
let balance = data.compute(false).unwrap();

// Visualización compacta
println!("{}", balance.to_plain());
```

*/

#![deny(missing_docs)]

mod asplain;
mod cooling;
mod dhw;
mod gains_losses;
mod heat_balance;
mod heating;
mod overheating;
mod sector;
mod sector_data;
mod vecops;

pub mod error;
pub mod peb;
pub mod types;

pub use asplain::*;
pub use cooling::*;
pub use dhw::*;
pub use gains_losses::*;
pub use heat_balance::*;
pub use heating::*;
pub use overheating::*;
pub use sector::*;
pub use sector_data::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
