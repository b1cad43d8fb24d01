use std::io::Write;

use anyhow::Context;

use newsletter_dispatch::configuration::get_configuration;
use newsletter_dispatch::startup::Application;
use newsletter_dispatch::telemetry;

fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;

    // The bunyan logs go to stderr so that stdout only carries the send report,
    // which can then be piped or compared line by line.
    let subscriber = telemetry::get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stderr,
    );
    telemetry::init_subscriber(subscriber);

    let application = Application::build(&configuration, std::io::stdout().lock())
        .context("Failed to build application.")?;
    let mut console = application.run_until_complete();
    console.flush().context("Failed to flush the console.")?;

    Ok(())
}
