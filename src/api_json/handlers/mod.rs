pub mod analitica;
pub mod datafiles;
pub mod docs;
pub mod horario;
pub mod perfiles;

pub use analitica::*;
pub use datafiles::*;
pub use docs::*;
pub use horario::*;
pub use perfiles::*;
