#![allow(dead_code)]

use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod components;
mod localize;
mod message;
mod pages;

use tally::api;
use tally::config;
use tally::core;

use application::{Flags, Tally};
use config::{CONFIG_VERSION, TallyConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new("dev.tally.app", CONFIG_VERSION)
        .expect("Failed to create cosmic config");
    let config = TallyConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Set up logging to the systemd user journal (`journalctl --user -t tally -f`).
    // Wrapper filters: tally crate at info, everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                let target = metadata.target();
                let max = if target.starts_with("tally")
                    || target.starts_with("application")
                    || target.starts_with("pages")
                    || target.starts_with("components")
                {
                    log::LevelFilter::Info
                } else {
                    log::LevelFilter::Warn
                };
                metadata.level() <= max
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()
            .unwrap()
            .with_syslog_identifier("tally".to_string());

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).unwrap();
        log::set_max_level(log::LevelFilter::Info);
    }

    localize::localize();

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(360.0).min_height(300.0));

    let flags = Flags {
        config,
        cosmic_config: cosmic_cfg,
    };
    cosmic::app::run::<Tally>(settings, flags)?;

    Ok(())
}
