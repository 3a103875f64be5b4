use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive("trip_planner=info".parse().expect("static directive"))
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = trip_planner::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
