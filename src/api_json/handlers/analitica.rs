use crate::analithics;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// GET /analitica/resumen
/// Resumen de uso: conteo de generaciones y selecciones más frecuentes.
pub async fn resumen_handler() -> impl Responder {
    let (total, exitosas) = match analithics::conteo_generaciones() {
        Ok(c) => c,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("analítica no disponible: {}", e)})),
    };

    let a_json = |filas: Vec<(String, i64)>| -> Vec<serde_json::Value> {
        filas
            .into_iter()
            .map(|(valor, conteo)| json!({"valor": valor, "conteo": conteo}))
            .collect()
    };

    let sectores = analithics::sectores_mas_elegidos(5).unwrap_or_default();
    let electivos_1 = analithics::electivos_1_mas_elegidos(5).unwrap_or_default();
    let electivos_2 = analithics::electivos_2_mas_elegidos(5).unwrap_or_default();

    HttpResponse::Ok().json(json!({
        "generaciones": {"total": total, "exitosas": exitosas},
        "sectores_mas_elegidos": a_json(sectores),
        "electivos_1_mas_elegidos": a_json(electivos_1),
        "electivos_2_mas_elegidos": a_json(electivos_2),
    }))
}
