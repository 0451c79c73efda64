use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = hearth_api::Args::parse();
	hearth_api::run(args).await
}
