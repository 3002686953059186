// Filtro de la grilla: deja en blanco toda celda que no corresponda al
// conjunto de materias del perfil, preservando la forma de la grilla.

use crate::algorithm::GeneracionError;
use crate::algorithm::normalizer::{NormalizerConfig, celda_coincide, normalizar_celda};
use crate::models::{HorarioGrid, Seccion};
use serde::Deserialize;
use std::collections::HashMap;

/// Esquema de la planilla: cómo ubicar las filas de cada sección.
///
/// Las planillas históricas vienen en dos sabores: con columna `Section`
/// explícita, o con bloques de filas fijos por sección. Ninguno de los dos se
/// codifica a fuego: el esquema se deserializa junto al resto de la
/// configuración y puede cambiar sin tocar código.
#[derive(Debug, Clone, Deserialize)]
pub struct EsquemaHorario {
    /// Encabezado de la columna de sección (se compara ignorando mayúsculas).
    #[serde(default = "columna_seccion_default")]
    pub columna_seccion: String,
    /// Rangos de filas de datos `[desde, hasta)` por letra de sección. Cuando
    /// está presente tiene prioridad sobre `columna_seccion`.
    #[serde(default)]
    pub rangos: Option<HashMap<String, [usize; 2]>>,
}

fn columna_seccion_default() -> String {
    "Section".to_string()
}

impl Default for EsquemaHorario {
    fn default() -> Self {
        EsquemaHorario {
            columna_seccion: columna_seccion_default(),
            rangos: None,
        }
    }
}

/// Restringe la grilla a las filas de la sección del estudiante.
///
/// Con `rangos` definidos se toma el bloque `[desde, hasta)` de filas de
/// datos; si no, se busca la columna de sección por nombre y se conservan las
/// filas cuya celda parsea a la misma letra. Sin filas resultantes la
/// generación falla completa (nunca una grilla a medias).
pub fn filtrar_filas_seccion(
    grid: &HorarioGrid,
    seccion: Seccion,
    esquema: &EsquemaHorario,
) -> Result<HorarioGrid, GeneracionError> {
    let filas: Vec<Vec<String>> = match &esquema.rangos {
        Some(rangos) => {
            let [desde, hasta] = rangos.get(seccion.letra()).copied().ok_or_else(|| {
                GeneracionError::ArchivoInvalido(format!(
                    "el esquema de rangos no define la sección {}",
                    seccion
                ))
            })?;
            if desde >= grid.filas.len() || desde >= hasta {
                Vec::new()
            } else {
                let hasta = hasta.min(grid.filas.len());
                grid.filas[desde..hasta].to_vec()
            }
        }
        None => {
            let col = grid.columna_por_nombre(&esquema.columna_seccion).ok_or_else(|| {
                GeneracionError::ArchivoInvalido(format!(
                    "la planilla no tiene columna '{}'",
                    esquema.columna_seccion
                ))
            })?;
            grid.filas
                .iter()
                .filter(|fila| {
                    fila.get(col)
                        .and_then(|celda| Seccion::parse(celda))
                        .map(|s| s == seccion)
                        .unwrap_or(false)
                })
                .cloned()
                .collect()
        }
    };

    if filas.is_empty() {
        return Err(GeneracionError::SeccionNoEncontrada(seccion));
    }

    Ok(HorarioGrid { columnas: grid.columnas.clone(), filas })
}

/// Deja en blanco las celdas que no coinciden con ninguna materia.
///
/// Recorre toda columna que no sea la de etiquetas (índice 0): si ningún
/// token de la celda coincide con el conjunto de tokens de materias, la celda
/// pasa a `""`; si coincide, se conserva el texto ORIGINAL sin normalizar.
/// La forma de la grilla no cambia y la operación es determinista e
/// idempotente (una celda ya en blanco no produce tokens y queda en blanco;
/// una celda conservada vuelve a coincidir).
pub fn filtrar_horario(
    grid: &HorarioGrid,
    tokens_materias: &[String],
    config: &NormalizerConfig,
) -> HorarioGrid {
    let filas = grid
        .filas
        .iter()
        .map(|fila| {
            fila.iter()
                .enumerate()
                .map(|(i, celda)| {
                    if i == 0 {
                        return celda.clone();
                    }
                    let tokens = normalizar_celda(celda, config);
                    if celda_coincide(&tokens, tokens_materias, config.modo) {
                        celda.clone()
                    } else {
                        String::new()
                    }
                })
                .collect()
        })
        .collect();

    HorarioGrid { columnas: grid.columnas.clone(), filas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::normalizer::ModoCoincidencia;

    fn grilla() -> HorarioGrid {
        HorarioGrid {
            columnas: vec!["Time".to_string(), "A".to_string()],
            filas: vec![
                vec!["09:00".to_string(), "CB/IMC".to_string()],
                vec!["10:00".to_string(), "PMS".to_string()],
            ],
        }
    }

    #[test]
    fn test_celda_coincidente_queda_textual() {
        let cfg = NormalizerConfig::default();
        let filtrada = filtrar_horario(&grilla(), &["CB".to_string()], &cfg);
        // La celda que coincide se conserva ENTERA, no reducida a "CB"
        assert_eq!(filtrada.filas[0][1], "CB/IMC");
        assert_eq!(filtrada.filas[1][1], "");
        assert_eq!(filtrada.filas[0][0], "09:00");
    }

    #[test]
    fn test_seccion_por_columna() {
        let grid = HorarioGrid {
            columnas: vec!["Time".into(), "Section".into(), "Subject".into()],
            filas: vec![
                vec!["09:00".into(), "A".into(), "CB".into()],
                vec!["09:00".into(), "B".into(), "PMS".into()],
            ],
        };
        let filtrada =
            filtrar_filas_seccion(&grid, Seccion::A, &EsquemaHorario::default()).expect("Debe filtrar");
        assert_eq!(filtrada.filas.len(), 1);
        assert_eq!(filtrada.filas[0][2], "CB");
    }

    #[test]
    fn test_seccion_sin_filas_falla() {
        let grid = HorarioGrid {
            columnas: vec!["Time".into(), "Section".into()],
            filas: vec![vec!["09:00".into(), "A".into()]],
        };
        let err = filtrar_filas_seccion(&grid, Seccion::C, &EsquemaHorario::default());
        assert!(matches!(err, Err(GeneracionError::SeccionNoEncontrada(Seccion::C))));
    }

    #[test]
    fn test_modo_subcadena() {
        let grid = HorarioGrid {
            columnas: vec!["Time".into(), "A".into()],
            filas: vec![vec!["09:00".into(), "Consumer Behaviour (CB)".into()]],
        };
        let cfg = NormalizerConfig { modo: ModoCoincidencia::Subcadena, ..Default::default() };
        let filtrada = filtrar_horario(&grid, &["Consumer Behaviour".to_string()], &cfg);
        assert_eq!(filtrada.filas[0][1], "Consumer Behaviour (CB)");
    }
}
