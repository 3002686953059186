use mihorario::algorithm::{
    EsquemaHorario, GeneracionError, NormalizerConfig, generar_desde_archivo, generar_para_perfil,
};
use mihorario::excel::horario_desde_filas;
use mihorario::models::{Perfil, Seccion};
use mihorario::perfiles::PerfilStore;

fn perfil_finanzas() -> Perfil {
    Perfil {
        matricula: "EN2023045".to_string(),
        nombre: "Priya".to_string(),
        seccion: Seccion::A,
        electivo_1: "Psychology in Business (PB-A)".to_string(),
        electivo_2: "E-Business (E.Bus)".to_string(),
        sector: "Finance".to_string(),
        materia_adicional: "Management of Banks (MoB)".to_string(),
    }
}

fn filas_planilla() -> Vec<Vec<String>> {
    let a_fila = |celdas: &[&str]| -> Vec<String> { celdas.iter().map(|c| c.to_string()).collect() };
    vec![
        a_fila(&["Time", "Section", "Monday", "Tuesday"]),
        a_fila(&["09:00", "A", "Financial Statement Analysis (FSA)", "Know yourself (KY)"]),
        a_fila(&["10:00", "A", "Consumer Behaviour (CB)/Business Valuation (BussV)", "Digital Media (DM)"]),
        a_fila(&["09:00", "B", "Talent Acquisition (TA)", "Professional Ethics (PE)"]),
    ]
}

#[test]
fn test_pipeline_completo_sobre_filas() {
    let grid = horario_desde_filas(filas_planilla()).expect("Debe construir la grilla");
    let filtrada = generar_para_perfil(
        &perfil_finanzas(),
        &grid,
        &EsquemaHorario::default(),
        &NormalizerConfig::default(),
    )
    .expect("Debe generar el horario");

    // sólo las dos filas de la sección A
    assert_eq!(filtrada.filas.len(), 2);

    // FSA es del sector Finance: la celda queda textual
    assert_eq!(filtrada.filas[0][2], "Financial Statement Analysis (FSA)");
    // KY es obligatoria: queda
    assert_eq!(filtrada.filas[0][3], "Know yourself (KY)");
    // la celda con alternativas queda ENTERA porque BussV es del perfil
    assert_eq!(filtrada.filas[1][2], "Consumer Behaviour (CB)/Business Valuation (BussV)");
    // DM no es del perfil: en blanco
    assert_eq!(filtrada.filas[1][3], "");
    // la columna de etiquetas no se toca
    assert_eq!(filtrada.filas[0][0], "09:00");
}

#[test]
fn test_seccion_sin_filas() {
    let grid = horario_desde_filas(filas_planilla()).expect("Debe construir la grilla");
    let mut perfil = perfil_finanzas();
    perfil.seccion = Seccion::C;

    let err = generar_para_perfil(
        &perfil,
        &grid,
        &EsquemaHorario::default(),
        &NormalizerConfig::default(),
    );
    assert!(matches!(err, Err(GeneracionError::SeccionNoEncontrada(Seccion::C))));
}

#[test]
fn test_perfil_corrupto_es_error_de_catalogo() {
    let grid = horario_desde_filas(filas_planilla()).expect("Debe construir la grilla");
    let mut perfil = perfil_finanzas();
    perfil.sector = "Astrology".to_string();

    let err = generar_para_perfil(
        &perfil,
        &grid,
        &EsquemaHorario::default(),
        &NormalizerConfig::default(),
    );
    assert!(matches!(err, Err(GeneracionError::CatalogoInvalido(_))));
}

#[test]
fn test_perfil_inexistente_antes_que_archivo() {
    // el lookup del perfil corre antes de tocar el archivo: con matrícula
    // desconocida el error es PerfilNoEncontrado aunque el archivo tampoco exista
    let store = PerfilStore::new();
    let err = generar_desde_archivo(
        &store,
        "NO-EXISTE",
        "tampoco-existe.xlsx",
        None,
        &EsquemaHorario::default(),
        &NormalizerConfig::default(),
    );
    assert!(matches!(err, Err(GeneracionError::PerfilNoEncontrado(_))));
}

#[test]
fn test_archivo_ilegible_es_archivo_invalido() {
    let mut store = PerfilStore::new();
    store.guardar(perfil_finanzas()).expect("Debe guardar");

    let err = generar_desde_archivo(
        &store,
        "EN2023045",
        "no-existe-en-disco.xlsx",
        None,
        &EsquemaHorario::default(),
        &NormalizerConfig::default(),
    );
    assert!(matches!(err, Err(GeneracionError::ArchivoInvalido(_))));
}
