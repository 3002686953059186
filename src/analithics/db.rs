use rusqlite::Connection;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

// load .env at module init if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Ruta del archivo SQLite de analítica. Honra `ANALITICA_DB_PATH` (vía
/// entorno o `.env`); otras submódulos abren conexiones cortas contra esta
/// misma ruta.
pub fn analytics_db_path() -> PathBuf {
    load_dotenv();
    if let Ok(p) = env::var("ANALITICA_DB_PATH") {
        PathBuf::from(p)
    } else {
        PathBuf::from("analitica/analitica.db")
    }
}

/// Crea directorio, archivo y tabla si no existen. La analítica es
/// best-effort: el caller decide si un fallo acá es fatal (el server sólo
/// avisa por stderr y sigue).
pub fn init_db() -> Result<(), Box<dyn Error>> {
    let db_path = analytics_db_path();
    if let Some(dir) = db_path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let conn = Connection::open(db_path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS generaciones (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ts TEXT NOT NULL,
            duration_ms INTEGER,
            matricula TEXT,
            seccion TEXT,
            sector TEXT,
            electivo_1 TEXT,
            electivo_2 TEXT,
            materia_adicional TEXT,
            horario_archivo TEXT,
            exito INTEGER NOT NULL,
            error TEXT
        )",
        [],
    )?;
    Ok(())
}
