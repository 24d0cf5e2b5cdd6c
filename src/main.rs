use anyhow::Context;
use binding_lab::config::cli::load_catalog;
use binding_lab::core::LessonProvider;
use binding_lab::utils::{logger, validation::Validate};
use binding_lab::{CliConfig, ConsoleReporter, Demonstrator, LabError};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting binding-lab");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        // 依錯誤類別決定退出碼
        let exit_code = match e.downcast_ref::<LabError>() {
            Some(lab_error) => {
                tracing::error!(
                    "❌ {} (Category: {:?})",
                    lab_error,
                    lab_error.category()
                );
                eprintln!("❌ {}", lab_error.user_friendly_message());
                eprintln!("💡 {}", lab_error.recovery_suggestion());
                lab_error.exit_code()
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let catalog = load_catalog(config)?;

    if config.list {
        for title in catalog.titles() {
            println!("{}", title);
        }
        return Ok(());
    }

    let name = catalog.name().to_string();
    let summary = Demonstrator::new(ConsoleReporter::new(), catalog)
        .with_headings(config.headings)
        .run()
        .with_context(|| format!("running catalog '{}'", name))?;

    tracing::info!(
        "✅ Finished {} lessons ({} bindings)",
        summary.lessons,
        summary.bindings
    );
    Ok(())
}
