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


use std::fs;
use std::path::Path;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg};
use tracing::{debug, info, Level};

use sectorneeds::*;

const LICENSE: &str = "
Copyright (c) 2018-2022 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
           Daniel Jiménez González <danielj@ietcc.csic.es>
           Marta Sorribes Gil <msorribes@ietcc.csic.es>";

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Archivo {} no encontrado", path.display()))
}

fn writefile(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("No se ha podido escribir en \"{}\"", path.display()))
}

/// Nivel de registro según el número de apariciones de -v
fn log_level(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Carga los datos del sector desde archivo
///
/// Termina con IOERR si no se puede leer y con DATAERR si el formato no es correcto
fn get_sector_data(path: &Path) -> SectorData {
    let contents = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: No se ha podido leer el archivo del sector energético -> {:#}",
            err
        );
        exit(exitcode::IOERR);
    });
    let mut data = contents
        .parse::<SectorData>()
        .with_context(|| format!("Formato incorrecto del archivo \"{}\"", path.display()))
        .unwrap_or_else(|err| {
            eprintln!("ERROR: {:#}", err);
            exit(exitcode::DATAERR);
        });
    if let Some(stem) = path.file_stem() {
        data.set_default_name(&stem.to_string_lossy());
    }
    println!("Sector energético: \"{}\"", path.display());
    if let Some(name) = data.name() {
        println!("Nombre: {}", name);
    }
    debug!("Metadatos del sector: {:?}", data.meta);
    data
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("SectorNeeds")
        .bin_name("sectorneeds")
        .version(VERSION)
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <danielj@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("SectorNeeds - Necesidades energéticas netas de un sector energético (método mensual).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("archivo_sector")
            .short("s")
            .long("sector")
            .value_name("ARCHIVO_SECTOR")
            .help("Archivo de definición del sector energético")
            .required_unless("showlicense")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("leap")
            .long("leap")
            .help("Usa la duración de los meses de un año bisiesto si no se define la serie T_M")
            .display_order(2))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .alias("license")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!("{}", LICENSE);
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity))
        .with_writer(std::io::stderr)
        .init();

    debug!("Opciones indicadas: {:#?}", matches);

    println!("** Datos de entrada");

    // Datos del sector ---------------------------------------------------------------------------
    // clap garantiza la presencia del archivo si no se pide la licencia
    let path = Path::new(matches.value_of_os("archivo_sector").unwrap_or_default());
    let data = get_sector_data(path);
    let leap = matches.is_present("leap");
    if leap {
        info!("Duración de los meses de año bisiesto");
    }

    // Cálculo del balance -------------------------------------------------------------------------
    let balance = data
        .compute(leap)
        .context("No se ha podido calcular el balance del sector energético")
        .unwrap_or_else(|err| {
            eprintln!("ERROR: {:#}", err);
            exit(exitcode::DATAERR);
        });

    // Salida de resultados ------------------------------------------------------------------------
    if let Some(json_path) = matches.value_of_os("archivo_salida_json") {
        let json_path = Path::new(json_path);
        info!("Resultados en formato JSON: {}", json_path.display());
        let json = serde_json::to_string_pretty(&balance).unwrap_or_else(|err| {
            eprintln!("ERROR: No se ha podido convertir el balance al formato JSON -> {}", err);
            exit(exitcode::DATAERR);
        });
        if let Err(err) = writefile(json_path, json.as_bytes()) {
            eprintln!("ERROR: {:#}", err);
            exit(exitcode::CANTCREAT);
        }
    }

    println!("\n{}", balance.to_plain());
}
