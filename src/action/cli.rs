use std::io;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_dirs, Cli, OutputFormat};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::ConfigService;
use crate::service::summary::summarize;
use crate::utils::convert::ConversionAdapter;
use crate::utils::report::{render_empty, render_failures, render_summary};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<String> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config.clone())?;

    if output.discovered == 0 {
        println!("{}", render_empty(&config.input));
    } else {
        print_outcome(&output, config.format);
    }

    Ok(output.output_path)
}

/// 輸出失敗清單與大小統計
pub fn print_outcome(output: &ConversionOutput, format: OutputFormat) {
    if !output.outcome.failures.is_empty() {
        println!("\n{}", render_failures(&output.outcome.failures));
    }
    if let Some(summary) = summarize(&output.outcome) {
        println!("\n{}", render_summary(&summary, format));
    }
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_dirs(&self.cli.input, &self.cli.output)?;

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            format: self.cli.format,
            no_progress: self.cli.no_progress,
        })
    }
}
