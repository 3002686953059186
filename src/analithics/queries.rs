use crate::analithics::db::analytics_db_path;
use rusqlite::Connection;
use std::error::Error;

/// Total de generaciones registradas (exitosas y fallidas).
pub fn conteo_generaciones() -> Result<(i64, i64), Box<dyn Error>> {
    let conn = Connection::open(analytics_db_path())?;
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM generaciones", [], |r| r.get(0))?;
    let exitosas: i64 = conn.query_row(
        "SELECT COUNT(*) FROM generaciones WHERE exito = 1",
        [],
        |r| r.get(0),
    )?;
    Ok((total, exitosas))
}

fn top_por_columna(columna: &str, limite: usize) -> Result<Vec<(String, i64)>, Box<dyn Error>> {
    let conn = Connection::open(analytics_db_path())?;
    // columna viene de un conjunto fijo interno, nunca de entrada del usuario
    let sql = format!(
        "SELECT {col}, COUNT(*) AS c FROM generaciones
         WHERE exito = 1 AND {col} IS NOT NULL
         GROUP BY {col} ORDER BY c DESC, {col} ASC LIMIT ?1",
        col = columna
    );
    let mut stmt = conn.prepare(&sql)?;
    let filas = stmt.query_map([limite as i64], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))?;
    let mut out = Vec::new();
    for fila in filas {
        out.push(fila?);
    }
    Ok(out)
}

/// Sectores más elegidos entre las generaciones exitosas.
pub fn sectores_mas_elegidos(limite: usize) -> Result<Vec<(String, i64)>, Box<dyn Error>> {
    top_por_columna("sector", limite)
}

/// Electivos del pool 1 más elegidos.
pub fn electivos_1_mas_elegidos(limite: usize) -> Result<Vec<(String, i64)>, Box<dyn Error>> {
    top_por_columna("electivo_1", limite)
}

/// Electivos del pool 2 más elegidos.
pub fn electivos_2_mas_elegidos(limite: usize) -> Result<Vec<(String, i64)>, Box<dyn Error>> {
    top_por_columna("electivo_2", limite)
}
