use tracing_subscriber::EnvFilter;
use vesstor::{command_argument_builder, handle_scan, version_line};
use vesstor_core::print_banner;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();

    if matches.get_flag("version") {
        println!("{}", version_line());
        return;
    }

    init_tracing();

    if !matches.get_flag("quiet") {
        print_banner();
    }

    match handle_scan(&matches).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("✗ {:#}", e);
            std::process::exit(1);
        }
    }
}
