// --- MiHorario - Archivo principal ---

use mihorario::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    println!("=== MiHorario (API de horarios personalizados) ===");

    if let Err(e) = mihorario::analithics::init_db() {
        eprintln!("WARN: analítica deshabilitada, no se pudo inicializar la DB: {}", e);
    }

    let bind = "127.0.0.1:8080";
    println!("Iniciando servidor en http://{}", bind);
    run_server(bind).await
}
