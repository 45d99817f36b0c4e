// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod logic;
mod models;
mod mvu;
mod ui;

use std::path::Path;

use config::{CONFIG_FILE_NAME, GuardConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match GuardConfig::load_or_default(Path::new(CONFIG_FILE_NAME)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err:#}; falling back to defaults");
            GuardConfig::default()
        }
    };

    app::run(config)
}
