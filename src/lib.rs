// Biblioteca raíz del crate `mihorario`.
// Reexporta los módulos principales: el catálogo estático del programa, el
// store de perfiles, el normalizador/filtro de la grilla y el servidor HTTP.
pub mod algorithm;
pub mod analithics;
pub mod api_json;
pub mod catalogo;
pub mod excel;
pub mod models;
pub mod perfiles;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
