// Lectura del workbook maestro de horarios hacia una `HorarioGrid`.

use crate::excel::io::{celda_a_string, listar_hojas_zip};
use crate::models::HorarioGrid;
use calamine::{Reader, open_workbook_auto};
use std::fmt;
use std::path::Path;

/// Errores del cargador de planillas. La grilla se carga entera o no se
/// carga; nunca se devuelve una grilla parcial.
#[derive(Debug)]
pub enum ErrorHorario {
    /// El workbook se abrió pero la hoja pedida no existe.
    HojaNoEncontrada { pedida: String, disponibles: Vec<String> },
    /// El archivo no es un workbook legible o no tiene el formato esperado.
    ArchivoInvalido(String),
}

impl fmt::Display for ErrorHorario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorHorario::HojaNoEncontrada { pedida, disponibles } => write!(
                f,
                "hoja '{}' no encontrada; hojas disponibles: {:?}",
                pedida, disponibles
            ),
            ErrorHorario::ArchivoInvalido(msg) => write!(f, "planilla inválida: {}", msg),
        }
    }
}

impl std::error::Error for ErrorHorario {}

/// Construye la grilla desde filas ya leídas (de calamine o de un test).
///
/// Se saltean las filas iniciales completamente vacías; la primera fila con
/// contenido es el encabezado y el resto son filas de datos, rellenadas o
/// recortadas al ancho del encabezado para que la grilla quede rectangular.
pub fn horario_desde_filas(filas_crudas: Vec<Vec<String>>) -> Result<HorarioGrid, ErrorHorario> {
    let mut iter = filas_crudas
        .into_iter()
        .skip_while(|fila| fila.iter().all(|c| c.trim().is_empty()));

    let columnas: Vec<String> = match iter.next() {
        Some(encabezado) => encabezado.iter().map(|c| c.trim().to_string()).collect(),
        None => {
            return Err(ErrorHorario::ArchivoInvalido(
                "la hoja no tiene filas con contenido".to_string(),
            ));
        }
    };

    if columnas.iter().all(|c| c.is_empty()) {
        return Err(ErrorHorario::ArchivoInvalido(
            "la fila de encabezado está vacía".to_string(),
        ));
    }

    let ancho = columnas.len();
    let filas: Vec<Vec<String>> = iter
        .map(|mut fila| {
            fila.truncate(ancho);
            while fila.len() < ancho {
                fila.push(String::new());
            }
            fila
        })
        .collect();

    Ok(HorarioGrid { columnas, filas })
}

/// Lee la hoja pedida del workbook y la devuelve como grilla.
///
/// Sin `hoja` explícita se prefiere `catalogo::HOJA_HORARIO` y, si el
/// workbook no la trae, la primera hoja. Con `hoja` explícita la hoja tiene
/// que existir.
pub fn leer_horario_excel<P: AsRef<Path>>(
    path: P,
    hoja: Option<&str>,
) -> Result<HorarioGrid, ErrorHorario> {
    let path = path.as_ref();
    let mut workbook = match open_workbook_auto(path) {
        Ok(wb) => wb,
        Err(e) => {
            // Distinguir "no es un xlsx" de un error de IO genérico mirando
            // el contenedor zip directamente.
            let detalle = match listar_hojas_zip(path) {
                Ok(hojas) => format!(
                    "calamine no pudo abrir el workbook ({}); el zip contiene {} hojas",
                    e,
                    hojas.len()
                ),
                Err(zip_err) => format!("no es un workbook legible: {} / {}", e, zip_err),
            };
            return Err(ErrorHorario::ArchivoInvalido(detalle));
        }
    };

    let nombres = workbook.sheet_names().to_owned();
    if nombres.is_empty() {
        return Err(ErrorHorario::ArchivoInvalido(
            "el workbook no contiene hojas".to_string(),
        ));
    }

    let hoja_elegida = match hoja {
        Some(pedida) => nombres
            .iter()
            .find(|n| n.trim() == pedida.trim())
            .cloned()
            .ok_or_else(|| ErrorHorario::HojaNoEncontrada {
                pedida: pedida.to_string(),
                disponibles: nombres.clone(),
            })?,
        None => nombres
            .iter()
            .find(|n| n.trim() == crate::catalogo::HOJA_HORARIO)
            .cloned()
            .unwrap_or_else(|| nombres[0].clone()),
    };

    let range = workbook
        .worksheet_range(&hoja_elegida)
        .map_err(|e| ErrorHorario::ArchivoInvalido(format!("no se pudo leer la hoja: {}", e)))?;

    let filas_crudas: Vec<Vec<String>> = range
        .rows()
        .map(|fila| fila.iter().map(celda_a_string).collect())
        .collect();

    horario_desde_filas(filas_crudas)
}
