use clap::Parser;
use logdash::cli::Cli;

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  if let Err(e) = logdash::app::run(cli).await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
