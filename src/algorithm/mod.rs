// Módulo de alto nivel para la generación del horario personalizado.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod filters;
pub mod normalizer;

// Reexportar la API pública que usan el server y los tests
pub use filters::{EsquemaHorario, filtrar_filas_seccion, filtrar_horario};
pub use normalizer::{
    ModoCoincidencia, NormalizerConfig, celda_coincide, materias_a_tokens, normalizar_celda,
};

use crate::catalogo;
use crate::excel::{self, ErrorHorario};
use crate::models::{HorarioGrid, Perfil, Seccion};
use crate::perfiles::PerfilStore;
use std::fmt;
use std::path::Path;

/// Taxonomía de fallos de la generación. Todos son recuperables en el borde
/// del request: el pedido falla entero y se reporta; repetirlo con los mismos
/// datos falla determinísticamente igual.
#[derive(Debug)]
pub enum GeneracionError {
    /// No hay perfil guardado para la matrícula pedida.
    PerfilNoEncontrado(String),
    /// El perfil guardado referencia data que el catálogo no conoce. Es un
    /// error de configuración, no un caso de runtime esperable.
    CatalogoInvalido(String),
    /// El workbook no trae la hoja esperada.
    HojaNoEncontrada { pedida: String, disponibles: Vec<String> },
    /// El archivo no es una planilla legible con el esquema esperado.
    ArchivoInvalido(String),
    /// La planilla no tiene filas para la sección del estudiante.
    SeccionNoEncontrada(Seccion),
}

impl fmt::Display for GeneracionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneracionError::PerfilNoEncontrado(m) => {
                write!(f, "no existe perfil para la matrícula '{}'", m)
            }
            GeneracionError::CatalogoInvalido(msg) => {
                write!(f, "perfil inconsistente con el catálogo: {}", msg)
            }
            GeneracionError::HojaNoEncontrada { pedida, disponibles } => write!(
                f,
                "hoja '{}' no encontrada; disponibles: {:?}",
                pedida, disponibles
            ),
            GeneracionError::ArchivoInvalido(msg) => write!(f, "planilla inválida: {}", msg),
            GeneracionError::SeccionNoEncontrada(s) => {
                write!(f, "la planilla no tiene filas para la sección {}", s)
            }
        }
    }
}

impl std::error::Error for GeneracionError {}

impl From<ErrorHorario> for GeneracionError {
    fn from(e: ErrorHorario) -> Self {
        match e {
            ErrorHorario::HojaNoEncontrada { pedida, disponibles } => {
                GeneracionError::HojaNoEncontrada { pedida, disponibles }
            }
            ErrorHorario::ArchivoInvalido(msg) => GeneracionError::ArchivoInvalido(msg),
        }
    }
}

/// Pipeline puro sobre una grilla ya cargada: materias efectivas del perfil,
/// filas de su sección, y blanqueo de celdas ajenas.
pub fn generar_para_perfil(
    perfil: &Perfil,
    grid: &HorarioGrid,
    esquema: &EsquemaHorario,
    config: &NormalizerConfig,
) -> Result<HorarioGrid, GeneracionError> {
    let materias = catalogo::materias_de_perfil(perfil)
        .map_err(|e| GeneracionError::CatalogoInvalido(e.to_string()))?;
    let tokens = materias_a_tokens(&materias, config);

    let de_seccion = filtrar_filas_seccion(grid, perfil.seccion, esquema)?;
    Ok(filtrar_horario(&de_seccion, &tokens, config))
}

/// Punto de entrada de generación: busca el perfil, carga el workbook y corre
/// el pipeline. Devuelve la grilla filtrada completa o un error; nunca una
/// grilla a medias.
pub fn generar_desde_archivo<P: AsRef<Path>>(
    store: &PerfilStore,
    matricula: &str,
    path: P,
    hoja: Option<&str>,
    esquema: &EsquemaHorario,
    config: &NormalizerConfig,
) -> Result<HorarioGrid, GeneracionError> {
    let perfil = store
        .obtener(matricula)
        .ok_or_else(|| GeneracionError::PerfilNoEncontrado(matricula.trim().to_string()))?;

    let grid = excel::leer_horario_excel(path, hoja)?;
    generar_para_perfil(&perfil, &grid, esquema, config)
}
