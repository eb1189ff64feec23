use anyhow::Context;
use tracing::info;

use rgscaling::configuration::Configuration;
use rgscaling::scaling::betafunction::BetaFunction;
use rgscaling::scalingplot::render;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("rgscaling=info")
        .init();

    let config = Configuration::new();

    let three_dimensional = BetaFunction::new(3.0);
    if let Some(nu) = three_dimensional
        .correlation_length_exponent()
        .context("failed to linearize the d=3 flow")?
    {
        info!(nu, "d=3 correlation-length exponent");
    }

    let path = render(&config)
        .with_context(|| format!("failed to render {}", config.output_path().display()))?;
    println!("{}", path.display());
    Ok(())
}
