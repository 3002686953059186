use crate::api_json::{GenerarInput, PerfilInput};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// GET /help
/// Describe las rutas y muestra payloads de ejemplo.
pub async fn help_handler() -> impl Responder {
    let perfil_ejemplo = PerfilInput {
        matricula: "EN2023045".to_string(),
        nombre: "Priya Sharma".to_string(),
        seccion: "B".to_string(),
        electivo_1: "Bibliophiles (Bibl)".to_string(),
        electivo_2: "Project Management".to_string(),
        sector: "Finance".to_string(),
        materia_adicional: "SCM".to_string(),
    };

    let generar_ejemplo = GenerarInput {
        matricula: "EN2023045".to_string(),
        horario: "Horario3erSemestre.xlsx".to_string(),
        hoja: None,
        modo: None,
    };

    let help = json!({
        "description": "API de horarios personalizados. POST /perfiles guarda la selección de materias de un estudiante (acepta nombres completos, abreviaturas o texto aproximado). POST /horario/generar filtra el workbook maestro a las materias del perfil, dejando en blanco las celdas ajenas.",
        "rutas": {
            "POST /perfiles": "crear o reemplazar perfil (el último guardado gana)",
            "GET /perfiles": "listar perfiles guardados",
            "GET /perfiles/{matricula}": "obtener un perfil",
            "PUT /perfiles/{matricula}": "edición parcial de un perfil",
            "DELETE /perfiles/{matricula}": "borrar (no-op silencioso si no existe)",
            "POST /horario/generar": "generar el horario filtrado",
            "GET /catalogo": "materias y sectores disponibles",
            "GET /datafiles": "workbooks subidos",
            "POST /datafiles/upload": "subir workbook (multipart)",
            "GET /datafiles/download?name=": "bajar workbook",
            "DELETE /datafiles?name=": "borrar workbook",
            "GET /analitica/resumen": "resumen de uso",
        },
        "perfil_example": perfil_ejemplo,
        "generar_example": generar_ejemplo,
        "modos_coincidencia": ["abreviatura", "nombre_exacto", "subcadena"],
    });

    HttpResponse::Ok().json(help)
}
