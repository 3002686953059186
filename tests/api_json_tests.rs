use mihorario::api_json::{GenerarInput, parse_perfil_input, resolver_perfil, resolver_update};
use mihorario::models::Seccion;
use serde_json::json;

#[test]
fn test_parse_perfil_completo() {
    let json_data = r#"
    {
        "matricula": "EN2023001",
        "nombre": "Arjun Mehta",
        "seccion": "A",
        "electivo_1": "Psychology in Business (PB-A)",
        "electivo_2": "International Business (IB)",
        "sector": "Media",
        "materia_adicional": "Media and Sports Industry (MSI)"
    }
    "#;

    let input = parse_perfil_input(json_data).expect("Debe parsear el JSON");
    let perfil = resolver_perfil(input).expect("Debe resolver el perfil");

    assert_eq!(perfil.matricula, "EN2023001");
    assert_eq!(perfil.seccion, Seccion::A);
    assert_eq!(perfil.sector, "Media");
}

#[test]
fn test_resolucion_flexible_de_materias() {
    // abreviaturas y nombres aproximados resuelven a la etiqueta canónica
    let json_data = r#"
    {
        "matricula": "EN2023002",
        "nombre": "Sana",
        "seccion": "c",
        "electivo_1": "bibl",
        "electivo_2": "e-business",
        "sector": "business analytics and operations",
        "materia_adicional": "TM&SA"
    }
    "#;

    let input = parse_perfil_input(json_data).expect("Debe parsear el JSON");
    let perfil = resolver_perfil(input).expect("Debe resolver con tolerancia");

    assert_eq!(perfil.electivo_1, "Bibliophiles (Bibl)");
    assert_eq!(perfil.electivo_2, "E-Business (E.Bus)");
    assert_eq!(perfil.sector, "Business Analytics and Operations");
    assert_eq!(perfil.materia_adicional, "Text Mining and Sentiment Analytics (TM&SA)");
}

#[test]
fn test_matricula_vacia_no_resuelve() {
    let json_data = r#"
    {
        "matricula": "   ",
        "nombre": "X",
        "seccion": "A",
        "electivo_1": "Bibliophiles (Bibl)",
        "electivo_2": "Project Management (PM)",
        "sector": "HR",
        "materia_adicional": "Talent Acquisition (TA)"
    }
    "#;
    let input = parse_perfil_input(json_data).expect("Debe parsear el JSON");
    assert!(resolver_perfil(input).is_err());
}

#[test]
fn test_electivo_de_otro_pool_rechazado() {
    // "Bibliophiles" es del pool 1: como electivo_2 no resuelve
    let json_data = r#"
    {
        "matricula": "EN2023003",
        "nombre": "X",
        "seccion": "A",
        "electivo_1": "Bibliophiles (Bibl)",
        "electivo_2": "Bibliophiles (Bibl)",
        "sector": "HR",
        "materia_adicional": "Talent Acquisition (TA)"
    }
    "#;
    let input = parse_perfil_input(json_data).expect("Debe parsear el JSON");
    assert!(resolver_perfil(input).is_err());
}

#[test]
fn test_update_parcial_resuelve_y_preserva() {
    let cambios = resolver_update(json!({"sector": "hr"})).expect("Debe resolver el update");
    assert_eq!(cambios.sector.as_deref(), Some("HR"));
    assert!(cambios.electivo_1.is_none());
    assert!(cambios.seccion.is_none());
}

#[test]
fn test_generar_input_con_defaults() {
    let input: GenerarInput =
        serde_json::from_value(json!({"matricula": "EN1", "horario": "H.xlsx"}))
            .expect("Debe parsear con campos opcionales ausentes");
    assert!(input.hoja.is_none());
    assert!(input.modo.is_none());

    let input: GenerarInput = serde_json::from_value(
        json!({"matricula": "EN1", "horario": "H.xlsx", "modo": "subcadena"}),
    )
    .expect("Debe parsear el modo");
    assert!(input.modo.is_some());
}
