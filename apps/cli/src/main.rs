use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = worddeck_cli::Args::parse();
    worddeck_cli::run(args)
}
