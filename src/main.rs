use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cfg = fidomock::config::Config::parse();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(fidomock::run(cfg))
}
