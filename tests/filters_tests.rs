use mihorario::algorithm::{
    EsquemaHorario, NormalizerConfig, filtrar_filas_seccion, filtrar_horario,
};
use mihorario::models::{HorarioGrid, Seccion};
use std::collections::HashMap;

fn grilla_base() -> HorarioGrid {
    HorarioGrid {
        columnas: vec!["Time".to_string(), "A".to_string()],
        filas: vec![
            vec!["09:00".to_string(), "CB/IMC".to_string()],
            vec!["10:00".to_string(), "PMS".to_string()],
        ],
    }
}

#[test]
fn test_extremo_a_extremo_celda_verbatim() {
    // La celda que coincide queda ENTERA ("CB/IMC"), no reducida a "CB";
    // la que no coincide queda en blanco; la columna de etiquetas no se toca
    let cfg = NormalizerConfig::default();
    let filtrada = filtrar_horario(&grilla_base(), &["CB".to_string()], &cfg);
    assert_eq!(
        filtrada.filas,
        vec![
            vec!["09:00".to_string(), "CB/IMC".to_string()],
            vec!["10:00".to_string(), "".to_string()],
        ]
    );
}

#[test]
fn test_sin_coincidencias_todo_en_blanco() {
    let cfg = NormalizerConfig::default();
    let filtrada = filtrar_horario(&grilla_base(), &["ZZZ".to_string()], &cfg);
    for fila in filtrada.filas.iter() {
        // etiqueta intacta, resto en blanco
        assert!(!fila[0].is_empty());
        assert_eq!(fila[1], "");
    }
}

#[test]
fn test_filtrado_idempotente() {
    let cfg = NormalizerConfig::default();
    let tokens = vec!["CB".to_string()];
    let una = filtrar_horario(&grilla_base(), &tokens, &cfg);
    let dos = filtrar_horario(&una, &tokens, &cfg);
    assert_eq!(una, dos);
}

#[test]
fn test_forma_de_la_grilla_se_preserva() {
    let cfg = NormalizerConfig::default();
    let original = grilla_base();
    let filtrada = filtrar_horario(&original, &["CB".to_string()], &cfg);
    assert_eq!(filtrada.num_filas(), original.num_filas());
    assert_eq!(filtrada.num_columnas(), original.num_columnas());
    for (f, o) in filtrada.filas.iter().zip(original.filas.iter()) {
        assert_eq!(f.len(), o.len());
    }
}

#[test]
fn test_determinismo() {
    let cfg = NormalizerConfig::default();
    let tokens = vec!["IMC".to_string()];
    let a = filtrar_horario(&grilla_base(), &tokens, &cfg);
    let b = filtrar_horario(&grilla_base(), &tokens, &cfg);
    assert_eq!(a, b);
}

fn grilla_con_secciones() -> HorarioGrid {
    HorarioGrid {
        columnas: vec!["Time".into(), "Section".into(), "Subject".into()],
        filas: vec![
            vec!["09:00".into(), "A".into(), "CB".into()],
            vec!["09:00".into(), "B".into(), "PMS".into()],
            vec!["10:00".into(), "A".into(), "FSA".into()],
            vec!["10:00".into(), "C".into(), "IB".into()],
        ],
    }
}

#[test]
fn test_seccion_por_columna() {
    let filtrada = filtrar_filas_seccion(&grilla_con_secciones(), Seccion::A, &EsquemaHorario::default())
        .expect("Debe encontrar filas de la sección A");
    assert_eq!(filtrada.filas.len(), 2);
    assert!(filtrada.filas.iter().all(|f| f[1] == "A"));
}

#[test]
fn test_seccion_por_rangos_de_filas() {
    // Variante de planilla sin columna Section: bloques fijos de filas por
    // sección, declarados como data del esquema
    let grid = HorarioGrid {
        columnas: vec!["Time".into(), "Monday".into()],
        filas: vec![
            vec!["09:00".into(), "CB".into()],
            vec!["10:00".into(), "IMC".into()],
            vec!["09:00".into(), "PMS".into()],
            vec!["10:00".into(), "TA".into()],
        ],
    };
    let mut rangos = HashMap::new();
    rangos.insert("A".to_string(), [0usize, 2usize]);
    rangos.insert("B".to_string(), [2usize, 4usize]);
    let esquema = EsquemaHorario { rangos: Some(rangos), ..Default::default() };

    let de_b = filtrar_filas_seccion(&grid, Seccion::B, &esquema).expect("Debe tomar el bloque de B");
    assert_eq!(de_b.filas.len(), 2);
    assert_eq!(de_b.filas[0][1], "PMS");

    // sección sin rango declarado: falla, no adivina
    assert!(filtrar_filas_seccion(&grid, Seccion::C, &esquema).is_err());
}

#[test]
fn test_esquema_desde_json() {
    // El esquema es configuración deserializable, no literales del código
    let json = r#"{"columna_seccion": "Grupo", "rangos": {"A": [0, 5]}}"#;
    let esquema: EsquemaHorario = serde_json::from_str(json).expect("Debe deserializar el esquema");
    assert_eq!(esquema.columna_seccion, "Grupo");
    assert_eq!(esquema.rangos.unwrap()["A"], [0, 5]);
}
