use anyhow::Result;
use clap::{App as ClapApp, Arg};
use startpage::{app::App, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml and storage.json")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("city")
                .long("city")
                .value_name("CITY")
                .help("City to show weather for in this session")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config, matches.value_of("city").map(str::to_owned)).await?;
    Ok(())
}
