// SPDX-License-Identifier: MPL-2.0
use catalog_desk::api::{HttpProductApi, ProductApi};
use catalog_desk::app::{self, Flags};
use catalog_desk::config::{self, paths, Config};
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
catalog_desk - desktop client for a product catalog API

USAGE:
  catalog_desk [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (pt-BR, en-US)
  --api-url <URL>        Catalog API base address [env: CATALOG_DESK_API_URL]
  --config-dir <PATH>    Settings directory [env: CATALOG_DESK_CONFIG_DIR]
  -h, --help             Print this help
";

struct Args {
    lang: Option<String>,
    api_url: Option<String>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(parsed))
}

fn build_api(cli_url: Option<&str>, config: &Config) -> catalog_desk::error::Result<HttpProductApi> {
    let base_url = config::resolve_api_base_url(cli_url, config)?;
    Ok(HttpProductApi::new(base_url)?)
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("catalog_desk=info,warn"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(args.config_dir);
    let (config, config_warning) = config::load();

    let api = match build_api(args.api_url.as_deref(), &config) {
        Ok(api) => api,
        Err(err) => {
            tracing::error!(error = %err, "cannot create the API client");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(base_url = %api.base_url(), "API client ready");

    let flags = Flags {
        lang: args.lang,
        config,
        config_warning,
        config_dir: None,
        api: Arc::new(api),
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
