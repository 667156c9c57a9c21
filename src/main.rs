use alpha_utils::app::{render_json, render_text, run};
use alpha_utils::config::{CliConfig, ToolConfig};
use alpha_utils::utils::{logger, validation::Validate};
use alpha_utils::UtilsError;
use clap::Parser;

fn load_config(path: Option<&str>) -> Result<ToolConfig, UtilsError> {
    let config = match path {
        Some(path) => ToolConfig::from_file(path)?,
        None => ToolConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn fail(e: &UtilsError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔載入失敗時 logger 尚未初始化，直接輸出到 stderr
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let json_output = cli.json || config.json_output();
    if json_output {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("File config: {:?}", config);

    let result = match run(&cli.command) {
        Ok(result) => result,
        Err(e) => fail(&e),
    };
    tracing::debug!("{} -> {}", cli.command.name(), result);

    if json_output {
        match render_json(&cli.command, &result) {
            Ok(output) => println!("{}", output),
            Err(e) => fail(&e),
        }
    } else {
        println!("{}", render_text(&result));
    }

    Ok(())
}
