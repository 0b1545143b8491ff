use std::env;

use log::debug;

use crate::ImplementationRegistry;
use crate::core::harness::Harness;
use crate::core::logging::init_logging;
use crate::core::report;
use crate::core::suite::Suite;
use crate::types::config::{EnvOverrides, config, init_with_overrides};
use crate::types::{AppError, AppResult};

pub fn run_main(mut registry: ImplementationRegistry) -> AppResult<()> {
    // Initialize configuration (file, then environment overrides)
    let initialized = init_with_overrides(&EnvOverrides::from_env());

    // Initialize logging after config so level/color are applied
    init_logging();
    initialized?;

    let cwd = env::current_dir()?;
    debug!("Current working directory: {}", cwd.display());
    debug!("Effective config: {:?}", config().to_effective());

    // Subjects that panic are reported as failures, keep the default hook quiet
    std::panic::set_hook(Box::new(|info| debug!("subject panicked: {info}")));

    let harness_config = config().harness();
    if let Some(selected) = harness_config.mutants() {
        registry
            .retain_names(selected)
            .map_err(AppError::UnknownMutant)?;
    }
    debug!("Selected mutants: {}", registry.all_names().join(", "));

    let suite = Suite::from_config(&config().suite());
    let harness = Harness::new(suite, registry).with_progress(harness_config.progress());
    let campaign = harness.run()?;

    report::render(&campaign, harness_config.format())?;
    campaign.ensure_all_caught()
}
