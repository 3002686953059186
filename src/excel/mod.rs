//! Módulo `excel`: lectura de planillas de horario y manejo del directorio
//! de archivos de datos.
//!
//! Submódulos:
//! - `io`: helpers de conversión de celdas y diagnóstico del contenedor zip
//! - `horario`: lectura del workbook maestro hacia `HorarioGrid`

mod horario;
mod io;

pub use horario::{ErrorHorario, horario_desde_filas, leer_horario_excel};
pub use io::{celda_a_string, listar_hojas_zip};

use std::error::Error;
use std::path::{Path, PathBuf};

/// Directorio por defecto con los workbooks subidos (relativo al proceso).
pub const DATAFILES_DIR: &str = "datafiles";

/// Resuelve el directorio de datafiles.
///
/// Primero la variable de entorno `MIHORARIO_DATAFILES_DIR`, después los
/// candidatos relativos al directorio de trabajo; si ninguno existe se
/// devuelve el default (el caller decide si crearlo).
pub fn get_datafiles_dir() -> PathBuf {
    if let Ok(p) = std::env::var("MIHORARIO_DATAFILES_DIR") {
        let p = PathBuf::from(p);
        if p.exists() {
            return p;
        }
        eprintln!("WARN: MIHORARIO_DATAFILES_DIR apunta a {:?} pero no existe", p);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    for candidato in [cwd.join(DATAFILES_DIR), cwd.join("src").join(DATAFILES_DIR)] {
        if candidato.exists() {
            return candidato;
        }
    }

    PathBuf::from(DATAFILES_DIR)
}

/// Resuelve el nombre de un workbook contra el directorio de datafiles.
/// Un path que ya existe tal cual se respeta (útil en tests).
pub fn resolver_horario(nombre: &str) -> PathBuf {
    if Path::new(nombre).exists() {
        return PathBuf::from(nombre);
    }
    get_datafiles_dir().join(nombre)
}

/// Lista los workbooks (.xlsx/.xls) disponibles en el directorio de datafiles.
pub fn listar_horarios() -> Result<Vec<String>, Box<dyn Error>> {
    let dir = get_datafiles_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut nombres: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(&dir)?.flatten() {
        let path = entry.path();
        let ext = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(|e| e.to_lowercase());
        if matches!(ext.as_deref(), Some("xlsx") | Some("xls")) {
            if let Some(nombre) = path.file_name().and_then(std::ffi::OsStr::to_str) {
                nombres.push(nombre.to_string());
            }
        }
    }
    nombres.sort();
    Ok(nombres)
}
