// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sección del programa. El horario maestro sólo conoce estas tres letras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seccion {
    A,
    B,
    C,
}

impl Seccion {
    /// Parsea la letra de sección tal como aparece en la planilla ("A", "b", " C ").
    pub fn parse(s: &str) -> Option<Seccion> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Seccion::A),
            "B" => Some(Seccion::B),
            "C" => Some(Seccion::C),
            _ => None,
        }
    }

    pub fn letra(&self) -> &'static str {
        match self {
            Seccion::A => "A",
            Seccion::B => "B",
            Seccion::C => "C",
        }
    }
}

impl fmt::Display for Seccion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letra())
    }
}

/// Perfil de selección de materias de un estudiante.
///
/// Las obligatorias no se guardan por perfil: son invariantes del programa y
/// viven en `catalogo`. La clave es `matricula`; re-guardar sobreescribe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perfil {
    pub matricula: String,
    pub nombre: String,
    pub seccion: Seccion,
    pub electivo_1: String,
    pub electivo_2: String,
    pub sector: String,
    pub materia_adicional: String,
}

/// Cambios parciales sobre un perfil existente. Los campos ausentes se
/// conservan tal cual.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerfilUpdate {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub seccion: Option<Seccion>,
    #[serde(default)]
    pub electivo_1: Option<String>,
    #[serde(default)]
    pub electivo_2: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub materia_adicional: Option<String>,
}

/// Grilla de horario: encabezado + filas de celdas de texto libre.
///
/// La primera columna es la etiqueta de bloque horario; el resto son columnas
/// de sección/día. Una celda puede estar vacía, contener una materia
/// ("Nombre (ABR)") o varias alternativas separadas por `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorarioGrid {
    pub columnas: Vec<String>,
    pub filas: Vec<Vec<String>>,
}

impl HorarioGrid {
    pub fn num_columnas(&self) -> usize {
        self.columnas.len()
    }

    pub fn num_filas(&self) -> usize {
        self.filas.len()
    }

    /// Índice de la columna cuyo encabezado coincide (ignorando mayúsculas y
    /// espacios alrededor).
    pub fn columna_por_nombre(&self, nombre: &str) -> Option<usize> {
        let buscado = nombre.trim().to_lowercase();
        self.columnas
            .iter()
            .position(|c| c.trim().to_lowercase() == buscado)
    }
}
