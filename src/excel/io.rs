use calamine::Data;
use std::path::Path;

/// Convierte una celda `Data` de calamine a texto plano.
///
/// Los flotantes enteros se imprimen sin decimales porque los números de
/// matrícula y los bloques horarios suelen venir tipados como float en las
/// planillas exportadas.
pub fn celda_a_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Enumera las entradas de hoja (`xl/worksheets/sheet*`) de un workbook
/// abriéndolo como zip. Sirve de diagnóstico cuando calamine no puede leer el
/// archivo: distingue "no es un xlsx" de "es un xlsx sin la hoja esperada".
pub fn listar_hojas_zip<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let archivo = std::fs::File::open(path)?;
    let archive = zip::ZipArchive::new(archivo)?;
    let hojas: Vec<String> = archive
        .file_names()
        .filter(|n| n.starts_with("xl/worksheets/sheet"))
        .map(|n| n.to_string())
        .collect();
    Ok(hojas)
}
