use crate::algorithm::{GeneracionError, NormalizerConfig, generar_desde_archivo};
use crate::api_json::GenerarInput;
use crate::catalogo;
use crate::excel;
use crate::perfiles::PerfilStore;
use crate::server::ConfigHorario;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::sync::Mutex;
use std::time::Instant;

/// POST /horario/generar
/// Corre el pipeline completo: perfil -> materias efectivas -> filas de la
/// sección -> blanqueo de celdas ajenas. Devuelve la grilla filtrada entera
/// o un error; nunca una grilla a medias.
pub async fn generar_handler(
    store: web::Data<Mutex<PerfilStore>>,
    config: web::Data<ConfigHorario>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let body_value = body.into_inner();
    let input: GenerarInput = match serde_json::from_value(body_value) {
        Ok(i) => i,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };

    if input.matricula.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "matricula es obligatoria"}));
    }
    if input.horario.contains("..") {
        return HttpResponse::BadRequest().json(json!({"error": "nombre de horario inválido"}));
    }

    let path = excel::resolver_horario(&input.horario);
    let normalizer = match input.modo {
        Some(modo) => NormalizerConfig { modo, ..config.normalizer.clone() },
        None => config.normalizer.clone(),
    };

    let store = match store.lock() {
        Ok(s) => s,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("store lock poisoned: {}", e)})),
    };

    let inicio = Instant::now();
    let resultado = generar_desde_archivo(
        &store,
        &input.matricula,
        &path,
        input.hoja.as_deref(),
        &config.esquema,
        &normalizer,
    );
    let duracion_ms = inicio.elapsed().as_millis() as i64;

    // Analítica best-effort: un fallo del log jamás voltea el request
    let perfil = store.obtener(&input.matricula);
    let error_txt = resultado.as_ref().err().map(|e| e.to_string());
    if let Err(e) = crate::analithics::log_generacion(
        &input.matricula,
        perfil.as_ref(),
        &input.horario,
        duracion_ms,
        error_txt.as_deref(),
    ) {
        eprintln!("WARN: no se pudo registrar la generación en analítica: {}", e);
    }

    match resultado {
        Ok(grid) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "matricula": input.matricula,
            "horario": grid,
        })),
        Err(e @ GeneracionError::PerfilNoEncontrado(_)) => {
            HttpResponse::NotFound().json(json!({"error": format!("{}", e)}))
        }
        Err(e @ GeneracionError::CatalogoInvalido(_)) => {
            // data corrupta en el perfil guardado: error del servicio, no del caller
            HttpResponse::InternalServerError().json(json!({"error": format!("{}", e)}))
        }
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// GET /catalogo
/// Catálogo completo para que la UI arme el formulario de perfil.
pub async fn catalogo_handler() -> impl Responder {
    let sectores: Vec<serde_json::Value> = catalogo::SECTORES
        .iter()
        .map(|s| {
            let materias = catalogo::materias_de_sector(s)
                .map(|m| m.to_vec())
                .unwrap_or_default();
            json!({"sector": s, "materias": materias})
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "obligatorias": catalogo::OBLIGATORIAS,
        "electivos_1": catalogo::ELECTIVOS_1,
        "electivos_2": catalogo::ELECTIVOS_2,
        "sectores": sectores,
        "adicionales": catalogo::ADICIONALES,
        "hoja_default": catalogo::HOJA_HORARIO,
    }))
}
