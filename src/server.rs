use crate::algorithm::{EsquemaHorario, NormalizerConfig};
use crate::api_json::handlers::{
    catalogo_handler, datafiles_delete_handler, datafiles_download_handler,
    datafiles_list_handler, datafiles_upload_handler, editar_perfil_handler,
    eliminar_perfil_handler, generar_handler, get_perfil_handler, help_handler,
    listar_perfiles_handler, resumen_handler, save_perfil_handler,
};
use crate::perfiles::PerfilStore;
use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use serde::Deserialize;
use std::sync::Mutex;

/// Configuración de generación del proceso: esquema de la planilla + reglas
/// del normalizador. Se carga una vez al arrancar; el request puede overridear
/// sólo el modo de coincidencia.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigHorario {
    #[serde(default)]
    pub esquema: EsquemaHorario,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

/// Carga la configuración desde el JSON apuntado por `MIHORARIO_CONFIG`, si
/// existe; cualquier problema degrada al default con aviso por stderr (los
/// rangos de filas por sección y el modo de coincidencia son data del esquema
/// de cada planilla, nunca literales del código).
pub fn cargar_config() -> ConfigHorario {
    let Ok(path) = std::env::var("MIHORARIO_CONFIG") else {
        return ConfigHorario::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(contenido) => match serde_json::from_str::<ConfigHorario>(&contenido) {
            Ok(config) => {
                eprintln!("Configuración cargada desde {}", path);
                config
            }
            Err(e) => {
                eprintln!("WARN: config '{}' inválida ({}); usando defaults", path, e);
                ConfigHorario::default()
            }
        },
        Err(e) => {
            eprintln!("WARN: no se pudo leer config '{}' ({}); usando defaults", path, e);
            ConfigHorario::default()
        }
    }
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    // Store por proceso: un despliegue multiusuario instanciaría uno por sesión
    let store = web::Data::new(Mutex::new(PerfilStore::new()));
    let config = web::Data::new(cargar_config());

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(config.clone())
            .route("/perfiles", web::post().to(save_perfil_handler))
            .route("/perfiles", web::get().to(listar_perfiles_handler))
            .route("/perfiles/{matricula}", web::get().to(get_perfil_handler))
            .route("/perfiles/{matricula}", web::put().to(editar_perfil_handler))
            .route("/perfiles/{matricula}", web::delete().to(eliminar_perfil_handler))
            .route("/horario/generar", web::post().to(generar_handler))
            .route("/catalogo", web::get().to(catalogo_handler))
            .route("/datafiles", web::get().to(datafiles_list_handler))
            .route("/datafiles", web::delete().to(datafiles_delete_handler))
            .route("/datafiles/upload", web::post().to(datafiles_upload_handler))
            .route("/datafiles/download", web::get().to(datafiles_download_handler))
            .route("/analitica/resumen", web::get().to(resumen_handler))
            .route("/help", web::get().to(help_handler))
    })
    .workers(num_cpus::get())
    .bind(bind_addr)?
    .run()
    .await
}
