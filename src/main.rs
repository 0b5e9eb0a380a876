use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = folio::cli::Cli::parse();

    if let Err(err) = folio::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
