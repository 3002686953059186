use crate::api_json::{parse_perfil_input, resolver_perfil, resolver_update};
use crate::perfiles::{ErrorPerfil, PerfilStore};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::sync::Mutex;

/// POST /perfiles
/// Crea o reemplaza el perfil de la matrícula del body. Si ya existe un
/// perfil con la misma matrícula, lo sustituye (el último guardado gana).
pub async fn save_perfil_handler(
    store: web::Data<Mutex<PerfilStore>>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let input = match parse_perfil_input(&json_str) {
        Ok(i) => i,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };

    let perfil = match resolver_perfil(input) {
        Ok(p) => p,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };

    let mut store = match store.lock() {
        Ok(s) => s,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("store lock poisoned: {}", e)})),
    };

    match store.guardar(perfil) {
        Ok(()) => HttpResponse::Ok().json(json!({"status": "ok", "count": store.len()})),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// GET /perfiles
pub async fn listar_perfiles_handler(store: web::Data<Mutex<PerfilStore>>) -> impl Responder {
    let store = match store.lock() {
        Ok(s) => s,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("store lock poisoned: {}", e)})),
    };
    HttpResponse::Ok().json(json!({"count": store.len(), "perfiles": store.listar()}))
}

/// GET /perfiles/{matricula}
pub async fn get_perfil_handler(
    store: web::Data<Mutex<PerfilStore>>,
    path: web::Path<String>,
) -> impl Responder {
    let matricula = path.into_inner();
    let store = match store.lock() {
        Ok(s) => s,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("store lock poisoned: {}", e)})),
    };
    match store.obtener(&matricula) {
        Some(perfil) => HttpResponse::Ok().json(perfil),
        None => HttpResponse::NotFound()
            .json(json!({"error": format!("no existe perfil para la matrícula '{}'", matricula)})),
    }
}

/// PUT /perfiles/{matricula}
/// Edición parcial: sólo los campos presentes cambian; la edición es
/// todo-o-nada (un campo inválido deja el perfil guardado intacto).
pub async fn editar_perfil_handler(
    store: web::Data<Mutex<PerfilStore>>,
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let matricula = path.into_inner();

    let cambios = match resolver_update(body.into_inner()) {
        Ok(c) => c,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };

    let mut store = match store.lock() {
        Ok(s) => s,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("store lock poisoned: {}", e)})),
    };

    match store.editar(&matricula, cambios) {
        Ok(perfil) => HttpResponse::Ok().json(json!({"status": "ok", "perfil": perfil})),
        Err(ErrorPerfil::NoEncontrado(m)) => HttpResponse::NotFound()
            .json(json!({"error": format!("no existe perfil para la matrícula '{}'", m)})),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// DELETE /perfiles/{matricula}
/// Borrar una matrícula inexistente no es un error: responde 200 con
/// `deleted: false` y el store queda igual.
pub async fn eliminar_perfil_handler(
    store: web::Data<Mutex<PerfilStore>>,
    path: web::Path<String>,
) -> impl Responder {
    let matricula = path.into_inner();
    let mut store = match store.lock() {
        Ok(s) => s,
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("store lock poisoned: {}", e)})),
    };
    let existia = store.eliminar(&matricula);
    HttpResponse::Ok().json(json!({"deleted": existia, "count": store.len()}))
}
