pub mod db;
pub mod insertions;
pub mod queries;

pub use db::init_db;
pub use insertions::log_generacion;
pub use queries::{
    conteo_generaciones, electivos_1_mas_elegidos, electivos_2_mas_elegidos, sectores_mas_elegidos,
};
