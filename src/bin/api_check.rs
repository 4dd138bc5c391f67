#[tokio::main]
async fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("tally-api-check".to_string())
        .install()
        .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    // Load config
    let cosmic_cfg =
        cosmic::cosmic_config::Config::new("dev.tally.app", tally::config::CONFIG_VERSION)
            .expect("Failed to load config");
    let config = <tally::config::TallyConfig as cosmic::cosmic_config::CosmicConfigEntry>::get_entry(
        &cosmic_cfg,
    )
    .unwrap_or_else(|(_, cfg)| cfg);

    println!("=== Backend check: {} ===\n", config.api_base_url);

    let client = tally::api::ApiClient::new(&config.api_base_url);
    match client.fetch_tasks().await {
        Ok(tasks) => {
            let completed = tasks.iter().filter(|t| t.completed).count();
            println!(
                "{} tasks ({} completed, {} pending)\n",
                tasks.len(),
                completed,
                tasks.len() - completed
            );
            for task in &tasks {
                let mark = if task.completed { "x" } else { " " };
                println!("  [{}] #{:<6} {}", mark, task.id, task.title);
            }
        }
        Err(e) => {
            println!("Fetch failed: {}", e);
        }
    }
}
