// Normalización de celdas del horario maestro.
//
// Una celda cruda puede traer una materia ("Consumer Behaviour (CB)"), varias
// alternativas separadas por un delimitador ("CB/IMC"), anotaciones entre
// corchetes ("[Aula 204]") o nada. Acá se reduce a tokens comparables según
// la granularidad configurada.

use serde::{Deserialize, Serialize};

/// Granularidad de comparación entre celdas y materias del perfil.
///
/// Las cinco variantes históricas de la planilla no coinciden entre sí en
/// esto, así que la granularidad es configuración del esquema, no una
/// constante del código.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModoCoincidencia {
    /// Comparar por abreviatura (el texto entre paréntesis), igualdad exacta.
    #[default]
    Abreviatura,
    /// Comparar por nombre completo sin paréntesis, igualdad exacta.
    NombreExacto,
    /// Comparar por nombre, aceptando contención de subcadenas.
    Subcadena,
}

/// Configuración del normalizador de celdas.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerConfig {
    /// Separador de alternativas dentro de una celda.
    #[serde(default = "delimitador_default")]
    pub delimitador: char,
    #[serde(default)]
    pub modo: ModoCoincidencia,
}

fn delimitador_default() -> char {
    '/'
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            delimitador: '/',
            modo: ModoCoincidencia::Abreviatura,
        }
    }
}

/// Marcadores textuales de celda sin valor (pandas exporta "nan" literal).
fn es_marcador_vacio(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t == "-" || t.eq_ignore_ascii_case("nan") || t.eq_ignore_ascii_case("none")
}

/// Elimina todos los tramos `abre...cierra` (no anidados) de un texto.
fn quitar_delimitados(s: &str, abre: char, cierra: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut dentro = false;
    for c in s.chars() {
        if c == abre {
            dentro = true;
        } else if c == cierra {
            dentro = false;
        } else if !dentro {
            out.push(c);
        }
    }
    out
}

/// Contenido del último par de paréntesis de un texto, si existe.
fn contenido_parentesis(s: &str) -> Option<&str> {
    let fin = s.rfind(')')?;
    let inicio = s[..fin].rfind('(')?;
    let dentro = s[inicio + 1..fin].trim();
    if dentro.is_empty() { None } else { Some(dentro) }
}

/// Reduce una celda cruda a su lista de tokens candidatos.
///
/// 1. Recorta espacios; vacío o marcador de faltante => sin tokens.
/// 2. Separa alternativas por el delimitador configurado.
/// 3. Por alternativa: los corchetes `[...]` se descartan siempre; en modo
///    `Abreviatura` el token es el contenido del paréntesis final (o el texto
///    sin paréntesis cuando la celda no trae abreviatura), en los otros modos
///    el token es el texto sin paréntesis ni corchetes.
///
/// Los tokens vacíos se descartan: una celda puede producir cero, uno o
/// varios tokens.
pub fn normalizar_celda(crudo: &str, config: &NormalizerConfig) -> Vec<String> {
    if es_marcador_vacio(crudo) {
        return Vec::new();
    }

    let mut tokens: Vec<String> = Vec::new();
    for alternativa in crudo.split(config.delimitador) {
        let sin_corchetes = quitar_delimitados(alternativa, '[', ']');
        let token = match config.modo {
            ModoCoincidencia::Abreviatura => match contenido_parentesis(&sin_corchetes) {
                Some(abr) => abr.to_string(),
                None => quitar_delimitados(&sin_corchetes, '(', ')').trim().to_string(),
            },
            ModoCoincidencia::NombreExacto | ModoCoincidencia::Subcadena => {
                quitar_delimitados(&sin_corchetes, '(', ')').trim().to_string()
            }
        };
        if !token.is_empty() {
            tokens.push(token);
        }
    }
    tokens
}

/// Compara un token de celda contra un token de materia según el modo.
/// La comparación es sensible a mayúsculas y se aplica de forma uniforme.
pub fn token_coincide(token_celda: &str, token_materia: &str, modo: ModoCoincidencia) -> bool {
    match modo {
        ModoCoincidencia::Abreviatura | ModoCoincidencia::NombreExacto => {
            token_celda == token_materia
        }
        ModoCoincidencia::Subcadena => {
            token_celda.contains(token_materia) || token_materia.contains(token_celda)
        }
    }
}

/// `true` si alguno de los tokens de la celda coincide con alguna materia.
pub fn celda_coincide(
    tokens_celda: &[String],
    tokens_materias: &[String],
    modo: ModoCoincidencia,
) -> bool {
    tokens_celda
        .iter()
        .any(|tc| tokens_materias.iter().any(|tm| token_coincide(tc, tm, modo)))
}

/// Reduce las etiquetas de materias del perfil a la granularidad del modo:
/// abreviaturas en `Abreviatura`, nombres sin paréntesis en los demás.
pub fn materias_a_tokens(materias: &[String], config: &NormalizerConfig) -> Vec<String> {
    materias
        .iter()
        .map(|m| match config.modo {
            ModoCoincidencia::Abreviatura => crate::catalogo::abreviatura(m).to_string(),
            _ => crate::catalogo::nombre_sin_abreviatura(m).to_string(),
        })
        .collect()
}
