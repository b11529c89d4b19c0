mod args;
mod chime;
mod generate;
mod phrases;
mod tts;

use clap::Parser;
use tracing::info;

use crate::args::Args;
use crate::tts::GoogleTts;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info") // set to "debug" for per-request logs
        .init();

    let args = Args::parse();

    info!("Starting audio file generation into '{}'", args.out);

    let synth = GoogleTts::new(&args.lang);

    generate::run_batch(&synth, &args.out, args.max_number).await?;

    info!("All audio files generated successfully");
    info!("Files saved in the '{}' folder", args.out);
    Ok(())
}
