use std::env;

use sapori_site::{generate_site, serve, SiteConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("build");

    let mut config = SiteConfig::load()?;
    if let Some(source) = args.get(2) {
        config.data_source = source.clone();
    }

    match mode {
        "build" => {
            let report = generate_site(&config)?;
            println!("{} pages written to {}", report.pages_written, config.output_dir);
            Ok(())
        }
        "serve" => {
            serve(&config)?;
            Ok(())
        }
        _ => Err("usage: sapori-site [build|serve] [data-source]".into()),
    }
}
