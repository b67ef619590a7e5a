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
Datos de entrada del sector energético
======================================

Define el tipo SectorData (series mensuales + metadatos) y sus traits.

Text format, one item per line:

```text
#META SECTOR_NAME: Vivienda
#META V_SEC: 10
#META C_SEC: 1e7
#META H_TRANS_HEAT: 100
#META H_TRANS_OVERH: 100
#META H_TRANS_COOL: 100
#META H_VENT_HEAT: 50
T_E, 3.2, 3.9, 5.9, 9.2, 13.3, 16.2, 17.6, 17.6, 15.2, 11.2, 6.3, 3.5 # Temperatura exterior
H_VENT_OVERH, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60
H_VENT_COOL, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60
```

Optional items:

- `N_BATH`, `N_SINK`, `R_BATH`, `R_SINK` metadata (default 1)
- `T_M` series (default: month lengths of a regular year)
- `Q_SOLAR_HEAT`, `Q_SOLAR_OVERH`, `Q_SOLAR_COOL` series (default: zero solar gains)
*/

use std::collections::HashSet;
use std::fmt;
use std::str;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{
    error::{Result, SectorError},
    gains_losses::MonthlySolarGains,
    peb::month_lengths,
    sector::SectorBalance,
    types::{
        monthly_from_slice, Climate, DhwParams, HasValues, Meta, MetaVec, Monthly, SectorParams,
        ZEROS,
    },
};

/// Nombre del sector energético
pub const META_NAME: &str = "SECTOR_NAME";
/// Volumen del sector [m³]
pub const META_V_SEC: &str = "V_SEC";
/// Capacidad térmica efectiva [J/K]
pub const META_C_SEC: &str = "C_SEC";
/// Coeficiente de transmisión para calefacción [W/K]
pub const META_H_TRANS_HEAT: &str = "H_TRANS_HEAT";
/// Coeficiente de transmisión para sobrecalentamiento [W/K]
pub const META_H_TRANS_OVERH: &str = "H_TRANS_OVERH";
/// Coeficiente de transmisión para refrigeración [W/K]
pub const META_H_TRANS_COOL: &str = "H_TRANS_COOL";
/// Coeficiente de ventilación para calefacción [W/K]
pub const META_H_VENT_HEAT: &str = "H_VENT_HEAT";
/// Número de duchas / baños
pub const META_N_BATH: &str = "N_BATH";
/// Número de fregaderos
pub const META_N_SINK: &str = "N_SINK";
/// Factor de reducción de duchas / baños
pub const META_R_BATH: &str = "R_BATH";
/// Factor de reducción de fregaderos
pub const META_R_SINK: &str = "R_SINK";

// -------------------- Series

/// Tipo de serie mensual de los datos de entrada
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Outdoor temperature [°C]
    T_E,
    /// Month length [Ms]
    T_M,
    /// Ventilation heat transfer coefficient for overheating [W/K]
    H_VENT_OVERH,
    /// Ventilation heat transfer coefficient for cooling [W/K]
    H_VENT_COOL,
    /// Solar gains for heating [MJ]
    Q_SOLAR_HEAT,
    /// Solar gains for overheating [MJ]
    Q_SOLAR_OVERH,
    /// Solar gains for cooling [MJ]
    Q_SOLAR_COOL,
}

/// Serie mensual de datos de entrada
///
/// Se serializa como: `TIPO, vals... # comentario`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Kind of series
    pub kind: SeriesKind,
    /// Monthly values
    pub values: Monthly,
    /// Optional comment
    pub comment: String,
}

impl HasValues for Series {
    fn values(&self) -> &Monthly {
        &self.values
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value_list = self.values.iter().join(", ");
        let comment = if !self.comment.is_empty() {
            format!(" # {}", self.comment)
        } else {
            "".to_owned()
        };
        write!(f, "{}, {}{}", self.kind, value_list, comment)
    }
}

impl str::FromStr for Series {
    type Err = SectorError;

    fn from_str(s: &str) -> Result<Series, Self::Err> {
        // Split comment from the rest of fields
        let items: Vec<&str> = s.trim().splitn(2, '#').map(str::trim).collect();
        let comment = items.get(1).unwrap_or(&"").to_string();
        let items: Vec<&str> = items[0].split(',').map(str::trim).collect();

        let kind: SeriesKind = items[0]
            .parse()
            .map_err(|_| SectorError::ParseError(format!("Tipo de serie desconocido: {}", s)))?;
        let values = items[1..]
            .iter()
            .map(|v| v.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()?;
        let values = monthly_from_slice(&kind.to_string(), &values)?;

        Ok(Series {
            kind,
            values,
            comment,
        })
    }
}

// -------------------- Sector data

/// Datos de un sector energético con sus metadatos
///
/// Sector input data: scalar parameters as metadata plus monthly series
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorData {
    /// Metadata
    pub meta: Vec<Meta>,
    /// Monthly series
    pub data: Vec<Series>,
}

impl MetaVec for SectorData {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.meta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.meta
    }
}

impl fmt::Display for SectorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metalines = self.meta.iter().map(|v| format!("{}", v)).join("\n");
        let datalines = self.data.iter().map(|v| format!("{}", v)).join("\n");
        write!(f, "{}\n{}", metalines, datalines)
    }
}

impl str::FromStr for SectorData {
    type Err = SectorError;

    fn from_str(s: &str) -> Result<SectorData, Self::Err> {
        let s_nobom = s.strip_prefix('\u{feff}').unwrap_or(s);
        let lines: Vec<&str> = s_nobom.lines().map(str::trim).collect();
        let metalines = lines.iter().filter(|l| l.starts_with("#META"));
        let datalines = lines
            .iter()
            .filter(|l| !(l.starts_with('#') || l.is_empty()));
        let meta = metalines
            .map(|e| e.parse())
            .collect::<Result<Vec<Meta>, _>>()?;
        let data = datalines
            .map(|e| e.parse())
            .collect::<Result<Vec<Series>, _>>()?;

        let mut keys = HashSet::new();
        if let Some(dup) = meta.iter().find(|m| !keys.insert(m.key.as_str())) {
            return Err(SectorError::WrongInput(format!(
                "Metadato duplicado: {}",
                dup.key
            )));
        }
        let mut kinds = HashSet::new();
        if let Some(dup) = data.iter().find(|d| !kinds.insert(d.kind)) {
            return Err(SectorError::WrongInput(format!(
                "Serie duplicada: {}",
                dup.kind
            )));
        }
        Ok(SectorData { meta, data })
    }
}

impl SectorData {
    /// Nombre del sector, si está definido
    pub fn name(&self) -> Option<String> {
        self.get_meta(META_NAME)
    }

    /// Asigna un nombre al sector si no tiene uno definido
    pub fn set_default_name(&mut self, name: &str) {
        if !self.has_meta(META_NAME) {
            self.set_meta(META_NAME, name);
        }
    }

    /// Valores de una serie, si está definida
    pub fn series(&self, kind: SeriesKind) -> Option<&Monthly> {
        self.data.iter().find(|s| s.kind == kind).map(|s| s.values())
    }

    fn require_series(&self, kind: SeriesKind) -> Result<Monthly> {
        self.series(kind).copied().ok_or_else(|| {
            SectorError::WrongInput(format!("Falta la serie obligatoria {}", kind))
        })
    }

    /// Parámetros físicos del sector
    ///
    /// # Errors
    ///
    /// * Missing or non numeric metadata, missing ventilation series
    pub fn params(&self) -> Result<SectorParams> {
        Ok(SectorParams {
            volume: self.require_meta_f64(META_V_SEC)?,
            heat_capacity: self.require_meta_f64(META_C_SEC)?,
            h_trans_heat: self.require_meta_f64(META_H_TRANS_HEAT)?,
            h_trans_overh: self.require_meta_f64(META_H_TRANS_OVERH)?,
            h_trans_cool: self.require_meta_f64(META_H_TRANS_COOL)?,
            h_vent_heat: self.require_meta_f64(META_H_VENT_HEAT)?,
            h_vent_overh: self.require_series(SeriesKind::H_VENT_OVERH)?,
            h_vent_cool: self.require_series(SeriesKind::H_VENT_COOL)?,
        })
    }

    /// Datos climáticos
    ///
    /// Month lengths default to those of a regular (or leap) year when no `T_M` series is given.
    pub fn climate(&self, leap: bool) -> Result<Climate> {
        Ok(Climate {
            outdoor_temperature: self.require_series(SeriesKind::T_E)?,
            month_length: self
                .series(SeriesKind::T_M)
                .copied()
                .unwrap_or_else(|| month_lengths(leap)),
        })
    }

    /// Datos de ACS, con valores por defecto
    pub fn dhw_params(&self) -> Result<DhwParams> {
        let defaults = DhwParams::default();
        Ok(DhwParams {
            n_bath: self.get_meta_f64(META_N_BATH)?.unwrap_or(defaults.n_bath),
            n_sink: self.get_meta_f64(META_N_SINK)?.unwrap_or(defaults.n_sink),
            r_bath: self.get_meta_f64(META_R_BATH)?.unwrap_or(defaults.r_bath),
            r_sink: self.get_meta_f64(META_R_SINK)?.unwrap_or(defaults.r_sink),
        })
    }

    /// Ganancias solares, nulas si no se definen
    pub fn solar_gains(&self) -> MonthlySolarGains {
        let get = |kind| self.series(kind).copied().unwrap_or(ZEROS);
        MonthlySolarGains {
            heating: get(SeriesKind::Q_SOLAR_HEAT),
            overheating: get(SeriesKind::Q_SOLAR_OVERH),
            cooling: get(SeriesKind::Q_SOLAR_COOL),
        }
    }

    /// Calcula el balance del sector con estos datos
    pub fn compute(&self, leap: bool) -> Result<SectorBalance> {
        SectorBalance::compute(
            &self.params()?,
            &self.climate(leap)?,
            self.dhw_params()?,
            &self.solar_gains(),
        )
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTOR1: &str = "#META SECTOR_NAME: Vivienda 1
#META V_SEC: 10
#META C_SEC: 1e7
#META H_TRANS_HEAT: 100
#META H_TRANS_OVERH: 100
#META H_TRANS_COOL: 100
#META H_VENT_HEAT: 50
#META N_BATH: 2
T_E, 3.2, 3.9, 5.9, 9.2, 13.3, 16.2, 17.6, 17.6, 15.2, 11.2, 6.3, 3.5 # Temperatura exterior
H_VENT_OVERH, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60, 60
H_VENT_COOL, 70, 70, 70, 70, 70, 70, 70, 70, 70, 70, 70, 70";

    #[test]
    fn series_roundtrip() {
        let s = "Q_SOLAR_HEAT, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12.5 # ganancias";
        let series: Series = s.parse().unwrap();
        assert_eq!(series.kind, SeriesKind::Q_SOLAR_HEAT);
        assert_eq!(series.values[11], 12.5);
        assert_eq!(series.comment, "ganancias");
        assert_eq!(series.to_string(), s);
        assert_eq!(series.values_sum(), 78.5);
    }

    #[test]
    fn series_errors() {
        assert!("T_X, 1, 2, 3".parse::<Series>().is_err());
        assert!("T_E, 1, 2, a, 4, 5, 6, 7, 8, 9, 10, 11, 12"
            .parse::<Series>()
            .is_err());
        assert_eq!(
            "T_E, 1, 2, 3".parse::<Series>(),
            Err(SectorError::InvalidDimension {
                name: "T_E".into(),
                len: 3
            })
        );
    }

    #[test]
    fn sector_data_parse() {
        let data: SectorData = SECTOR1.parse().unwrap();
        assert_eq!(data.name(), Some("Vivienda 1".to_string()));
        assert_eq!(data.to_string(), SECTOR1);

        let params = data.params().unwrap();
        assert_eq!(params.volume, 10.0);
        assert_eq!(params.heat_capacity, 1e7);
        assert_eq!(params.h_vent_cool[0], 70.0);

        let climate = data.climate(false).unwrap();
        assert_eq!(climate.outdoor_temperature[6], 17.6);
        assert_eq!(climate.month_length, month_lengths(false));

        let dhw = data.dhw_params().unwrap();
        assert_eq!(dhw.n_bath, 2.0);
        assert_eq!(dhw.n_sink, 1.0);

        assert_eq!(data.solar_gains(), MonthlySolarGains::default());
    }

    #[test]
    fn sector_data_default_name() {
        let mut data: SectorData = SECTOR1.parse().unwrap();
        data.set_default_name("sector1");
        assert_eq!(data.name(), Some("Vivienda 1".to_string()));

        let mut data: SectorData = "#META V_SEC: 10".parse().unwrap();
        assert_eq!(data.name(), None);
        data.set_default_name("sector1");
        assert_eq!(data.name(), Some("sector1".to_string()));
        assert_eq!(data.meta.len(), 2);
        assert!(data.to_string().contains("#META SECTOR_NAME: sector1"));
    }

    #[test]
    fn sector_data_missing_items() {
        let data: SectorData = "#META V_SEC: 10\nT_E, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12"
            .parse()
            .unwrap();
        assert!(data.params().is_err());
        assert!(data.climate(false).is_ok());

        let data: SectorData = "#META V_SEC: 10".parse().unwrap();
        match data.climate(true) {
            Err(SectorError::WrongInput(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn sector_data_duplicates() {
        let s = format!("{}\nT_E, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12", SECTOR1);
        assert!(s.parse::<SectorData>().is_err());
        let s = format!("#META V_SEC: 12\n{}", SECTOR1);
        assert!(s.parse::<SectorData>().is_err());
    }

    #[test]
    fn sector_data_bom_and_comments() {
        let s = format!("\u{feff}# Sector de prueba\n\n{}\n", SECTOR1);
        let data: SectorData = s.parse().unwrap();
        assert_eq!(data.data.len(), 3);
        assert_eq!(data.meta.len(), 8);
    }
}
