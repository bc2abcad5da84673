use clap::{Args, ValueEnum};

use crate::api::openapi::{openapi, to_json, to_yaml};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum DocFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Args, Debug, Clone)]
pub struct OpenapiArgs {
    #[arg(long, value_enum, default_value_t = DocFormat::Json, help = "Output format")]
    pub format: DocFormat,
}

pub fn handle(args: OpenapiArgs, config: AppConfig) -> anyhow::Result<()> {
    let doc = openapi(&config.server.base_path);
    let rendered = match args.format {
        DocFormat::Json => to_json(&doc)?,
        DocFormat::Yaml => to_yaml(&doc)?,
    };
    println!("{}", rendered);
    Ok(())
}
