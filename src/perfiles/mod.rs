// Store en memoria de perfiles de estudiantes.
//
// El store es un objeto explícito e inyectable: el proceso que lo crea decide
// su vida útil (el servidor lo mantiene por proceso detrás de un Mutex; un
// despliegue multiusuario tendría que instanciar uno por sesión). No hay
// singleton ambiental ni sincronización entre procesos.

use crate::catalogo;
use crate::models::{Perfil, PerfilUpdate};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
pub enum ErrorPerfil {
    /// No hay perfil guardado con esa matrícula.
    NoEncontrado(String),
    /// El perfil viola el catálogo (campo fuera de su pool) o trae matrícula vacía.
    Invalido(String),
}

impl fmt::Display for ErrorPerfil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPerfil::NoEncontrado(m) => write!(f, "no existe perfil para la matrícula '{}'", m),
            ErrorPerfil::Invalido(msg) => write!(f, "perfil inválido: {}", msg),
        }
    }
}

impl std::error::Error for ErrorPerfil {}

/// Mapa matrícula -> perfil con las cuatro operaciones CRUD.
#[derive(Debug, Default)]
pub struct PerfilStore {
    perfiles: HashMap<String, Perfil>,
}

impl PerfilStore {
    pub fn new() -> PerfilStore {
        PerfilStore { perfiles: HashMap::new() }
    }

    /// Inserta o sobreescribe sin condición: el último guardado gana. No hay
    /// error de unicidad; re-guardar la misma matrícula reemplaza el perfil
    /// anterior completo.
    pub fn guardar(&mut self, perfil: Perfil) -> Result<(), ErrorPerfil> {
        Self::validar(&perfil)?;
        self.perfiles.insert(perfil.matricula.clone(), perfil);
        Ok(())
    }

    pub fn obtener(&self, matricula: &str) -> Option<Perfil> {
        self.perfiles.get(matricula.trim()).cloned()
    }

    /// Borra el perfil. Si la matrícula no existe es un no-op silencioso:
    /// devuelve `false` y el store queda igual (nunca un error).
    pub fn eliminar(&mut self, matricula: &str) -> bool {
        self.perfiles.remove(matricula.trim()).is_some()
    }

    /// Aplica cambios parciales sobre un perfil existente. Todo-o-nada: si la
    /// matrícula no existe o el resultado viola el catálogo, el perfil
    /// guardado no se toca.
    pub fn editar(&mut self, matricula: &str, cambios: PerfilUpdate) -> Result<Perfil, ErrorPerfil> {
        let clave = matricula.trim();
        let mut perfil = self
            .perfiles
            .get(clave)
            .cloned()
            .ok_or_else(|| ErrorPerfil::NoEncontrado(clave.to_string()))?;

        if let Some(nombre) = cambios.nombre {
            perfil.nombre = nombre;
        }
        if let Some(seccion) = cambios.seccion {
            perfil.seccion = seccion;
        }
        if let Some(e1) = cambios.electivo_1 {
            perfil.electivo_1 = e1;
        }
        if let Some(e2) = cambios.electivo_2 {
            perfil.electivo_2 = e2;
        }
        if let Some(sector) = cambios.sector {
            perfil.sector = sector;
        }
        if let Some(adicional) = cambios.materia_adicional {
            perfil.materia_adicional = adicional;
        }

        Self::validar(&perfil)?;
        self.perfiles.insert(clave.to_string(), perfil.clone());
        Ok(perfil)
    }

    /// Perfiles guardados, ordenados por matrícula para salida estable.
    pub fn listar(&self) -> Vec<Perfil> {
        let mut todos: Vec<Perfil> = self.perfiles.values().cloned().collect();
        todos.sort_by(|a, b| a.matricula.cmp(&b.matricula));
        todos
    }

    pub fn len(&self) -> usize {
        self.perfiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perfiles.is_empty()
    }

    fn validar(perfil: &Perfil) -> Result<(), ErrorPerfil> {
        if perfil.matricula.trim().is_empty() {
            return Err(ErrorPerfil::Invalido("la matrícula no puede estar vacía".to_string()));
        }
        catalogo::materias_de_perfil(perfil)
            .map(|_| ())
            .map_err(|e| ErrorPerfil::Invalido(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Seccion;

    fn perfil_base() -> Perfil {
        Perfil {
            matricula: "EN2023001".to_string(),
            nombre: "Ana".to_string(),
            seccion: Seccion::A,
            electivo_1: "Bibliophiles (Bibl)".to_string(),
            electivo_2: "Project Management (PM)".to_string(),
            sector: "Finance".to_string(),
            materia_adicional: "Supply Chain Management (SCM)".to_string(),
        }
    }

    #[test]
    fn test_guardar_y_obtener() {
        let mut store = PerfilStore::new();
        store.guardar(perfil_base()).expect("Debe guardar");
        let leido = store.obtener("EN2023001").expect("Debe existir");
        assert_eq!(leido.nombre, "Ana");
    }

    #[test]
    fn test_matricula_vacia_invalida() {
        let mut store = PerfilStore::new();
        let mut p = perfil_base();
        p.matricula = "   ".to_string();
        assert!(matches!(store.guardar(p), Err(ErrorPerfil::Invalido(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_editar_no_toca_en_fallo() {
        let mut store = PerfilStore::new();
        store.guardar(perfil_base()).expect("Debe guardar");

        // update con sector inexistente: todo-o-nada
        let cambios = PerfilUpdate { sector: Some("Astrology".to_string()), ..Default::default() };
        assert!(matches!(store.editar("EN2023001", cambios), Err(ErrorPerfil::Invalido(_))));
        assert_eq!(store.obtener("EN2023001").unwrap().sector, "Finance");
    }
}
