use hexfont::app::App;
use hexfont::cli::{self, CliError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = App::run(&args, &mut out) {
        eprintln!("error: {e}");
        if matches!(e, CliError::Usage(_)) {
            eprintln!("\n{}", cli::USAGE);
        }
        std::process::exit(e.exit_code());
    }
}
