use anyhow::Result;

use crate::cli::ui;
use crate::traits::rate_source::RateSource;

/// Oracle connectivity command: fetch and display one quote.
pub async fn execute<R: RateSource>(rates: &R) -> Result<()> {
    let quote = rates.quote().await?;

    if !quote.rate.is_finite() || quote.rate <= 0.0 {
        ui::print_warning(
            format!("Oracle answered an unusable rate: {}", quote.rate).as_str(),
        );
    }
    ui::display_quote(&quote);

    Ok(())
}
