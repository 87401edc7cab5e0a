use colored::*;

use crate::models::property::Property;
use crate::models::rate::RateQuote;

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Display a single property record
pub fn display_property(property: &Property) {
    println!("{}", property.id.cyan().bold());
    print_result("  Name", &property.name);
    print_result("  Area", &format!("{} m2", property.area));
    print_result("  Owner", &property.owner_name);
    print_result("  Value", &format!("{} USD", property.value));
    print_result(
        "  Bitcoin value",
        &format!("{:.8} BTC", property.bitcoin_value),
    );
}

/// Display a list of property records
pub fn display_properties(properties: &[Property]) {
    for property in properties {
        display_property(property);
    }
}

/// Display an exchange-rate quote
pub fn display_quote(quote: &RateQuote) {
    print_result(
        "Pair",
        &format!("{}/{}", quote.from_currency, quote.to_currency),
    );
    print_result("Rate", &quote.rate.to_string());
    if let Some(refreshed) = &quote.last_refreshed {
        print_result("Last refreshed", refreshed);
    }
    print_result("Fetched at", &quote.fetched_at.to_rfc3339());
}
