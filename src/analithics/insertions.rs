use crate::analithics::db::analytics_db_path;
use crate::models::Perfil;
use chrono::Utc;
use rusqlite::{Connection, params};
use std::error::Error;

/// Registra una generación de horario (exitosa o no) en la tabla
/// `generaciones`. Abre una conexión corta e inserta la fila; el perfil es
/// opcional porque una generación puede fallar antes del lookup.
pub fn log_generacion(
    matricula: &str,
    perfil: Option<&Perfil>,
    horario_archivo: &str,
    duration_ms: i64,
    error: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let db_path = analytics_db_path();
    let conn = Connection::open(db_path)?;
    let ts = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO generaciones (
            ts, duration_ms, matricula, seccion, sector,
            electivo_1, electivo_2, materia_adicional,
            horario_archivo, exito, error
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            ts,
            duration_ms,
            matricula,
            perfil.map(|p| p.seccion.letra()),
            perfil.map(|p| p.sector.as_str()),
            perfil.map(|p| p.electivo_1.as_str()),
            perfil.map(|p| p.electivo_2.as_str()),
            perfil.map(|p| p.materia_adicional.as_str()),
            horario_archivo,
            if error.is_none() { 1 } else { 0 },
            error,
        ],
    )?;
    Ok(())
}
