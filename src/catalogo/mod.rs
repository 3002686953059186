// Catálogo estático del programa MBA: materias obligatorias, pools de
// electivos, sectores de especialización y materias adicionales.
//
// Es data de referencia de sólo lectura; un lookup que falla acá es un error
// de configuración (data inválida en un perfil), nunca un caso a reintentar.

use crate::models::Perfil;
use std::error::Error;

/// Hoja del workbook maestro que trae el horario del semestre vigente.
pub const HOJA_HORARIO: &str = "MBA 2023-25_3RD SEMESTER";

pub const OBLIGATORIAS: [&str; 3] = [
    "Innovation, Entrepreneurship and Start-ups (IES)",
    "Know yourself (KY)",
    "Professional Ethics (PE)",
];

pub const ELECTIVOS_1: [&str; 2] = [
    "Bibliophiles (Bibl)",
    "Psychology in Business (PB-A)",
];

pub const ELECTIVOS_2: [&str; 3] = [
    "International Business (IB)",
    "Project Management (PM)",
    "E-Business (E.Bus)",
];

pub const SECTORES: [&str; 6] = [
    "Sales and Marketing",
    "Finance",
    "Business Analytics and Operations",
    "Media",
    "HR",
    "Logistics & Supply Chain",
];

pub const ADICIONALES: [&str; 28] = [
    "Consumer Behaviour (CB)",
    "Integrated Marketing Communication (IMC)",
    "Sales & Distribution Management (S&DM)",
    "Marketing Analytics (Man)",
    "Strategic Brand Management (SBM)",
    "Financial Statement Analysis (FSA)",
    "Business Valuation (BussV)",
    "Security and Portfolio Management (SPM)",
    "International Finance (IF)",
    "Management of Banks (MoB)",
    "Programming for Analytics (PA)",
    "Text Mining and Sentiment Analytics (TM&SA)",
    "Data Mining and Visualization (DMV)",
    "Analytics for Service Operations (ASO)",
    "AI and Machine Learning (AIML)",
    "Digital Media (DM)",
    "Media Production and Consumption (MPC)",
    "Media and Sports Industry (MSI)",
    "Media Research Tools and Analytics (MRTA)",
    "Media Cost Management & Control (MCMC)",
    "Performance Management System (PMS)",
    "Talent Acquisition (TA)",
    "Learnings & Development (L&D)",
    "Compensation & Reward Management (C&RM)",
    "Purchasing & Inventory Management (P&IM)",
    "Supply Chain Management (SCM)",
    "Transportation & Distribution Management (TDM)",
    "Warehousing & Distribution Facilities Management (W&DFM)",
];

/// Las tres materias fijas que implica cada sector de especialización.
pub fn materias_de_sector(sector: &str) -> Result<[&'static str; 3], Box<dyn Error>> {
    match sector {
        "Sales and Marketing" => Ok([
            "Consumer Behaviour (CB)",
            "Integrated Marketing Communication (IMC)",
            "Sales & Distribution Management (S&DM)",
        ]),
        "Finance" => Ok([
            "Financial Statement Analysis (FSA)",
            "Business Valuation (BussV)",
            "Security and Portfolio Management (SPM)",
        ]),
        "Business Analytics and Operations" => Ok([
            "Programming for Analytics (PA)",
            "Data Mining and Visualization (DMV)",
            "AI and Machine Learning (AIML)",
        ]),
        "Media" => Ok([
            "Digital Media (DM)",
            "Media Production and Consumption (MPC)",
            "Media Research Tools and Analytics (MRTA)",
        ]),
        "HR" => Ok([
            "Performance Management System (PMS)",
            "Talent Acquisition (TA)",
            "Learnings & Development (L&D)",
        ]),
        "Logistics & Supply Chain" => Ok([
            "Purchasing & Inventory Management (P&IM)",
            "Supply Chain Management (SCM)",
            "Transportation & Distribution Management (TDM)",
        ]),
        otro => Err(format!("sector desconocido en el catálogo: '{}'", otro).into()),
    }
}

/// Conjunto efectivo de materias de un perfil: 3 obligatorias + 2 electivos +
/// 3 del sector + 1 adicional = 9 entradas (puede haber repetidas si la
/// adicional coincide con una del sector).
///
/// Valida la pertenencia de cada campo a su pool; un campo fuera de pool es
/// un error de configuración del perfil.
pub fn materias_de_perfil(perfil: &Perfil) -> Result<Vec<String>, Box<dyn Error>> {
    if !ELECTIVOS_1.contains(&perfil.electivo_1.as_str()) {
        return Err(format!(
            "electivo_1 '{}' no pertenece al pool de Electivos Generales 1",
            perfil.electivo_1
        )
        .into());
    }
    if !ELECTIVOS_2.contains(&perfil.electivo_2.as_str()) {
        return Err(format!(
            "electivo_2 '{}' no pertenece al pool de Electivos Generales 2",
            perfil.electivo_2
        )
        .into());
    }
    if !ADICIONALES.contains(&perfil.materia_adicional.as_str()) {
        return Err(format!(
            "materia adicional '{}' no está en la lista de adicionales",
            perfil.materia_adicional
        )
        .into());
    }

    let del_sector = materias_de_sector(&perfil.sector)?;

    let mut materias: Vec<String> = Vec::with_capacity(9);
    materias.extend(OBLIGATORIAS.iter().map(|s| s.to_string()));
    materias.push(perfil.electivo_1.clone());
    materias.push(perfil.electivo_2.clone());
    materias.extend(del_sector.iter().map(|s| s.to_string()));
    materias.push(perfil.materia_adicional.clone());

    Ok(materias)
}

/// Todas las etiquetas del catálogo (sin repetir), para resolución de nombres.
pub fn todas_las_materias() -> Vec<&'static str> {
    let mut todas: Vec<&'static str> = Vec::new();
    for &m in OBLIGATORIAS
        .iter()
        .chain(ELECTIVOS_1.iter())
        .chain(ELECTIVOS_2.iter())
        .chain(ADICIONALES.iter())
    {
        if !todas.contains(&m) {
            todas.push(m);
        }
    }
    todas
}

/// Abreviatura de una etiqueta "Nombre (ABR)": el texto del último par de
/// paréntesis. Si no hay paréntesis devuelve la etiqueta completa recortada.
pub fn abreviatura(etiqueta: &str) -> &str {
    let recortada = etiqueta.trim();
    if let Some(fin) = recortada.rfind(')') {
        if let Some(inicio) = recortada[..fin].rfind('(') {
            let dentro = recortada[inicio + 1..fin].trim();
            if !dentro.is_empty() {
                return dentro;
            }
        }
    }
    recortada
}

/// Parte "Nombre" de una etiqueta "Nombre (ABR)", sin el paréntesis final.
pub fn nombre_sin_abreviatura(etiqueta: &str) -> &str {
    let recortada = etiqueta.trim();
    if let Some(inicio) = recortada.rfind('(') {
        if recortada[inicio..].contains(')') {
            return recortada[..inicio].trim_end();
        }
    }
    recortada
}

/// Normaliza una etiqueta para comparación tolerante: minúsculas y sin
/// espacios.
pub fn normalizar_nombre(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Umbral Jaro-Winkler para aceptar una coincidencia difusa.
const UMBRAL_FUZZY: f64 = 0.90;

/// Resuelve un texto libre a la etiqueta canónica del catálogo.
///
/// Intenta en orden: etiqueta exacta, abreviatura exacta (ignorando
/// mayúsculas), nombre sin abreviatura normalizado, y por último similitud
/// Jaro-Winkler sobre el nombre normalizado. Devuelve `None` si nada supera
/// el umbral.
pub fn buscar_materia(texto: &str) -> Option<&'static str> {
    let limpio = texto.trim();
    if limpio.is_empty() {
        return None;
    }

    let todas = todas_las_materias();

    for &m in todas.iter() {
        if m == limpio {
            return Some(m);
        }
    }

    let limpio_lower = limpio.to_lowercase();
    for &m in todas.iter() {
        if abreviatura(m).to_lowercase() == limpio_lower {
            return Some(m);
        }
    }

    let limpio_norm = normalizar_nombre(limpio);
    for &m in todas.iter() {
        if normalizar_nombre(nombre_sin_abreviatura(m)) == limpio_norm {
            return Some(m);
        }
    }

    let mut mejor: Option<(&'static str, f64)> = None;
    for &m in todas.iter() {
        let puntaje = strsim::jaro_winkler(
            &limpio_norm,
            &normalizar_nombre(nombre_sin_abreviatura(m)),
        );
        if puntaje >= UMBRAL_FUZZY {
            match mejor {
                Some((_, p)) if p >= puntaje => {}
                _ => mejor = Some((m, puntaje)),
            }
        }
    }
    mejor.map(|(m, _)| m)
}

/// Igual que `buscar_materia` pero restringido a un pool concreto (para
/// validar electivos contra su pool y no contra todo el catálogo).
pub fn buscar_en_pool(texto: &str, pool: &[&'static str]) -> Option<&'static str> {
    buscar_materia(texto).filter(|m| pool.contains(m))
}

/// Resuelve un texto libre a un nombre de sector del catálogo.
pub fn buscar_sector(texto: &str) -> Option<&'static str> {
    let limpio = texto.trim();
    if limpio.is_empty() {
        return None;
    }
    let limpio_norm = normalizar_nombre(limpio);
    for &s in SECTORES.iter() {
        if normalizar_nombre(s) == limpio_norm {
            return Some(s);
        }
    }
    let mut mejor: Option<(&'static str, f64)> = None;
    for &s in SECTORES.iter() {
        let puntaje = strsim::jaro_winkler(&limpio_norm, &normalizar_nombre(s));
        if puntaje >= UMBRAL_FUZZY {
            match mejor {
                Some((_, p)) if p >= puntaje => {}
                _ => mejor = Some((s, puntaje)),
            }
        }
    }
    mejor.map(|(s, _)| s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abreviatura() {
        assert_eq!(abreviatura("Consumer Behaviour (CB)"), "CB");
        assert_eq!(abreviatura("Psychology in Business (PB-A)"), "PB-A");
        // Sin paréntesis: la etiqueta completa
        assert_eq!(abreviatura("Sin Abreviatura"), "Sin Abreviatura");
    }

    #[test]
    fn test_nombre_sin_abreviatura() {
        assert_eq!(nombre_sin_abreviatura("Consumer Behaviour (CB)"), "Consumer Behaviour");
        assert_eq!(nombre_sin_abreviatura("Sin Abreviatura"), "Sin Abreviatura");
    }

    #[test]
    fn test_buscar_materia_exacta_y_abreviatura() {
        assert_eq!(
            buscar_materia("Consumer Behaviour (CB)"),
            Some("Consumer Behaviour (CB)")
        );
        assert_eq!(buscar_materia("cb"), Some("Consumer Behaviour (CB)"));
        assert_eq!(buscar_materia("SCM"), Some("Supply Chain Management (SCM)"));
    }

    #[test]
    fn test_buscar_materia_fuzzy() {
        // typo leve: debe resolver igual
        assert_eq!(
            buscar_materia("Consumer Behavior"),
            Some("Consumer Behaviour (CB)")
        );
        // texto sin relación: no resuelve
        assert_eq!(buscar_materia("Quantum Chromodynamics"), None);
    }
}
