use crate::excel::{get_datafiles_dir, listar_horarios};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, web};
use futures_util::stream::StreamExt;
use serde_json::json;
use tokio::io::AsyncWriteExt;

/// GET /datafiles
/// Lista los workbooks de horario disponibles en el directorio de datafiles.
pub async fn datafiles_list_handler() -> impl Responder {
    match listar_horarios() {
        Ok(horarios) => HttpResponse::Ok().json(json!({"horarios": horarios})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to list datafiles: {}", e)})),
    }
}

/// POST /datafiles/upload
/// Sube uno o más workbooks (multipart). Los nombres con ".." se ignoran.
pub async fn datafiles_upload_handler(mut payload: Multipart) -> impl Responder {
    let base = get_datafiles_dir();
    if let Err(e) = std::fs::create_dir_all(&base) {
        return HttpResponse::InternalServerError().json(json!({"error": format!("failed to create datafiles dir: {}", e)}));
    }

    let mut saved: Vec<String> = Vec::new();
    while let Some(field_res) = payload.next().await {
        match field_res {
            Ok(mut field) => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("upload-{}.xlsx", chrono::Utc::now().timestamp_millis()));

                if filename.contains("..") {
                    continue;
                }

                let filepath = base.join(&filename);
                match tokio::fs::File::create(&filepath).await {
                    Ok(mut f) => {
                        while let Some(chunk) = field.next().await {
                            match chunk {
                                Ok(bytes) => {
                                    if let Err(e) = f.write_all(&bytes).await {
                                        eprintln!("failed to write upload chunk: {}", e);
                                        break;
                                    }
                                }
                                Err(e) => {
                                    eprintln!("upload stream error: {}", e);
                                    break;
                                }
                            }
                        }
                        saved.push(filename);
                    }
                    Err(e) => {
                        eprintln!("failed to create upload file: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("multipart field error: {}", e);
            }
        }
    }

    HttpResponse::Ok().json(json!({"status": "ok", "saved": saved}))
}

/// GET /datafiles/download?name=Horario.xlsx
pub async fn datafiles_download_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let name = match query.get("name") {
        Some(n) if !n.trim().is_empty() => n.clone(),
        _ => return HttpResponse::BadRequest().json(json!({"error": "missing name parameter"})),
    };

    if name.contains("..") {
        return HttpResponse::BadRequest().json(json!({"error": "invalid name"}));
    }
    let path = get_datafiles_dir().join(&name);
    if !path.exists() {
        return HttpResponse::NotFound().json(json!({"error": "file not found"}));
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = match path.extension().and_then(std::ffi::OsStr::to_str) {
                Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                Some("xls") => "application/vnd.ms-excel",
                _ => "application/octet-stream",
            };
            HttpResponse::Ok()
                .content_type(mime)
                .append_header((
                    actix_web::http::header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", name),
                ))
                .body(bytes)
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to read file: {}", e)})),
    }
}

/// DELETE /datafiles?name=Horario.xlsx
pub async fn datafiles_delete_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let name = match query.get("name") {
        Some(n) if !n.trim().is_empty() => n.clone(),
        _ => return HttpResponse::BadRequest().json(json!({"error": "missing name parameter"})),
    };
    if name.contains("..") {
        return HttpResponse::BadRequest().json(json!({"error": "invalid name"}));
    }
    let path = get_datafiles_dir().join(&name);
    if !path.exists() {
        return HttpResponse::NotFound().json(json!({"error": "file not found"}));
    }
    match tokio::fs::remove_file(&path).await {
        Ok(_) => HttpResponse::Ok().json(json!({"status": "deleted", "name": name})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to delete file: {}", e)})),
    }
}
