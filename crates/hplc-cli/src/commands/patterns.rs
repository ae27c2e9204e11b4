use hplc_core::error::HplcError;
use hplc_core::parsing::ReportParser;
use hplc_core::patterns::{self, builtin};
use std::path::Path;

/// Build the parser from a custom pattern file, or from a preset.
pub fn load_parser(preset: &str, pattern_file: Option<&Path>) -> Result<ReportParser, HplcError> {
    let def = match pattern_file {
        Some(path) => patterns::load_patterns(path)?,
        None => builtin::load_preset(preset)?,
    };
    log::debug!("using pattern set '{}'", def.name);
    ReportParser::new(&def)
}

pub fn list() -> Result<(), HplcError> {
    println!("Available predefined pattern sets:\n");
    for name in builtin::PRESETS {
        let def = builtin::load_preset(name)?;
        println!(
            "  {:<4} {} [columns: {} / {} / {}]",
            name, def.name, def.name_column, def.area_column, def.conc_column
        );
        if let Some(ref desc) = def.description {
            println!("       {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), HplcError> {
    let def = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&def)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), HplcError> {
    let def = patterns::load_patterns(file)?;
    println!("Valid pattern set: {}", def.name);
    println!("  sample name:      {}", def.sample_name);
    println!("  blank sample:     {}", def.blank_sample);
    println!("  standard name:    {}", def.standard_name);
    println!("  standard type:    {}", def.standard_vial_type);
    println!(
        "  columns:          name '{}', area '{}', conc '{}'",
        def.name_column, def.area_column, def.conc_column
    );
    println!("  internal std:     *{}", def.internal_standard_suffix);
    Ok(())
}
