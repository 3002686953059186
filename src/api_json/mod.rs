pub mod handlers;

use crate::catalogo;
use crate::models::{Perfil, Seccion};
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Cuerpo de entrada para crear o reemplazar un perfil.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "matricula": "EN2023045",
///   "nombre": "Priya Sharma",
///   "seccion": "B",
///   "electivo_1": "Bibliophiles (Bibl)",
///   "electivo_2": "Project Management",
///   "sector": "Finance",
///   "materia_adicional": "SCM"
/// }
/// ```
///
/// # Campos:
/// - `matricula`: número de matrícula, texto libre no vacío (clave del perfil)
/// - `nombre`: nombre para mostrar
/// - `seccion`: letra de sección, una de "A", "B", "C"
/// - `electivo_1` / `electivo_2`: una materia de cada pool de electivos
/// - `sector`: sector de especialización (implica sus tres materias fijas)
/// - `materia_adicional`: una materia de la lista de adicionales
///
/// Los campos de materia aceptan la etiqueta completa, el nombre sin
/// abreviatura, la abreviatura sola o un texto aproximado: se resuelven
/// contra el catálogo antes de guardar.
#[derive(Debug, Serialize, Deserialize)]
pub struct PerfilInput {
    pub matricula: String,
    pub nombre: String,
    pub seccion: String,
    pub electivo_1: String,
    pub electivo_2: String,
    pub sector: String,
    pub materia_adicional: String,
}

/// Cuerpo de entrada para generar el horario personalizado.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "matricula": "EN2023045",
///   "horario": "Horario3erSemestre.xlsx",
///   "hoja": null,
///   "modo": "abreviatura"
/// }
/// ```
///
/// - `horario`: nombre del workbook dentro del directorio de datafiles
/// - `hoja`: hoja interna (opcional; por defecto la hoja del semestre vigente)
/// - `modo`: granularidad de coincidencia opcional
///   ("abreviatura" | "nombre_exacto" | "subcadena")
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerarInput {
    pub matricula: String,
    pub horario: String,
    #[serde(default)]
    pub hoja: Option<String>,
    #[serde(default)]
    pub modo: Option<crate::algorithm::ModoCoincidencia>,
}

/// Versión parcial de `PerfilInput` para ediciones: sólo los campos
/// presentes se tocan.
#[derive(Debug, Default, Deserialize)]
pub struct PerfilUpdateInput {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub seccion: Option<String>,
    #[serde(default)]
    pub electivo_1: Option<String>,
    #[serde(default)]
    pub electivo_2: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub materia_adicional: Option<String>,
}

pub fn parse_perfil_input(json_str: &str) -> Result<PerfilInput, serde_json::Error> {
    serde_json::from_str::<PerfilInput>(json_str)
}

/// Resuelve un `PerfilInput` de texto libre a un `Perfil` canónico.
///
/// Cada campo de materia se busca en su pool (exacto, por abreviatura o
/// difuso, ver `catalogo::buscar_materia`); un campo que no resuelve dentro
/// de su pool es un error con mensaje que nombra el campo y el pool válido.
pub fn resolver_perfil(input: PerfilInput) -> Result<Perfil, Box<dyn Error>> {
    let matricula = input.matricula.trim().to_string();
    if matricula.is_empty() {
        return Err("matricula es obligatoria".into());
    }

    let seccion = Seccion::parse(&input.seccion)
        .ok_or_else(|| format!("seccion '{}' inválida; debe ser A, B o C", input.seccion))?;

    let electivo_1 = catalogo::buscar_en_pool(&input.electivo_1, &catalogo::ELECTIVOS_1)
        .ok_or_else(|| {
            format!(
                "electivo_1 '{}' no resuelve dentro del pool {:?}",
                input.electivo_1,
                catalogo::ELECTIVOS_1
            )
        })?;

    let electivo_2 = catalogo::buscar_en_pool(&input.electivo_2, &catalogo::ELECTIVOS_2)
        .ok_or_else(|| {
            format!(
                "electivo_2 '{}' no resuelve dentro del pool {:?}",
                input.electivo_2,
                catalogo::ELECTIVOS_2
            )
        })?;

    let sector = catalogo::buscar_sector(&input.sector).ok_or_else(|| {
        format!(
            "sector '{}' desconocido; sectores: {:?}",
            input.sector,
            catalogo::SECTORES
        )
    })?;

    let materia_adicional =
        catalogo::buscar_en_pool(&input.materia_adicional, &catalogo::ADICIONALES).ok_or_else(
            || format!("materia_adicional '{}' no está en la lista de adicionales", input.materia_adicional),
        )?;

    Ok(Perfil {
        matricula,
        nombre: input.nombre.trim().to_string(),
        seccion,
        electivo_1: electivo_1.to_string(),
        electivo_2: electivo_2.to_string(),
        sector: sector.to_string(),
        materia_adicional: materia_adicional.to_string(),
    })
}

/// Resuelve un body de edición parcial a un `PerfilUpdate` canónico. Cada
/// campo presente se resuelve igual que en `resolver_perfil`; un campo que no
/// resuelve es error (y la edición no se aplica).
pub fn resolver_update(body: serde_json::Value) -> Result<crate::models::PerfilUpdate, Box<dyn Error>> {
    let input: PerfilUpdateInput =
        serde_json::from_value(body).map_err(|e| format!("failed to parse input: {}", e))?;

    let mut cambios = crate::models::PerfilUpdate::default();

    if let Some(nombre) = input.nombre {
        cambios.nombre = Some(nombre.trim().to_string());
    }
    if let Some(s) = input.seccion {
        let seccion = Seccion::parse(&s)
            .ok_or_else(|| format!("seccion '{}' inválida; debe ser A, B o C", s))?;
        cambios.seccion = Some(seccion);
    }
    if let Some(e1) = input.electivo_1 {
        let resuelto = catalogo::buscar_en_pool(&e1, &catalogo::ELECTIVOS_1)
            .ok_or_else(|| format!("electivo_1 '{}' no resuelve dentro de su pool", e1))?;
        cambios.electivo_1 = Some(resuelto.to_string());
    }
    if let Some(e2) = input.electivo_2 {
        let resuelto = catalogo::buscar_en_pool(&e2, &catalogo::ELECTIVOS_2)
            .ok_or_else(|| format!("electivo_2 '{}' no resuelve dentro de su pool", e2))?;
        cambios.electivo_2 = Some(resuelto.to_string());
    }
    if let Some(s) = input.sector {
        let resuelto = catalogo::buscar_sector(&s)
            .ok_or_else(|| format!("sector '{}' desconocido", s))?;
        cambios.sector = Some(resuelto.to_string());
    }
    if let Some(a) = input.materia_adicional {
        let resuelto = catalogo::buscar_en_pool(&a, &catalogo::ADICIONALES)
            .ok_or_else(|| format!("materia_adicional '{}' no está en la lista de adicionales", a))?;
        cambios.materia_adicional = Some(resuelto.to_string());
    }

    Ok(cambios)
}
