//! Output formatting module

use comuna_types::{Comuna, OutputFormat, Result, DATE_FORMAT};

/// Print a list of comunas
pub fn output_comunas(output_format: OutputFormat, comunas: &[Comuna]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(comunas)?);
        return Ok(());
    }

    if comunas.is_empty() {
        println!("No comunas found");
        return Ok(());
    }

    println!(
        "{:>6}  {:<16} {:>10}  {:<24} {:>6}  {}",
        "ID", "Zone", "Population", "Name", "Code", "Registered"
    );
    for comuna in comunas {
        println!("{}", table_row(comuna));
    }
    println!("\n{} comuna(s)", comunas.len());
    Ok(())
}

/// Print a single lookup result
pub fn output_comuna(
    output_format: OutputFormat,
    comuna: Option<&Comuna>,
    not_found: &str,
) -> Result<()> {
    match (output_format, comuna) {
        (OutputFormat::Json, comuna) => println!("{}", serde_json::to_string_pretty(&comuna)?),
        (OutputFormat::Table, Some(comuna)) => println!("{}", comuna),
        (OutputFormat::Table, None) => println!("{}", not_found),
    }
    Ok(())
}

fn table_row(comuna: &Comuna) -> String {
    format!(
        "{:>6}  {:<16} {:>10}  {:<24} {:>6}  {}",
        comuna.id(),
        comuna.zone(),
        comuna.population(),
        comuna.name(),
        comuna.code(),
        comuna.registration_date().format(DATE_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_table_row() {
        let comuna = Comuna::new(
            1,
            "Norte",
            10000,
            "Los Colores",
            1,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let row = table_row(&comuna);
        assert!(row.starts_with("     1  Norte"));
        assert!(row.ends_with("2024-01-01"));
        assert!(row.contains("Los Colores"));
    }
}
