use crate::types::ExportFormat;
use anyhow::Result;
use castlist_runtime::load_roster;
use castlist_types::Profile;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub fn handle(roster_path: &Path, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let cast = load_roster(roster_path)?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &cast)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => write_csv(&cast, writer)?,
    }

    if let Some(path) = output {
        eprintln!("Exported {} profiles to {}", cast.len(), path.display());
    }

    Ok(())
}

fn write_csv(cast: &[Profile], writer: Box<dyn Write>) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "id",
        "first",
        "last",
        "dob",
        "gender",
        "country",
        "description",
        "picture",
    ])?;

    for p in cast {
        csv.write_record([
            p.id.to_string(),
            p.first.clone(),
            p.last.clone(),
            p.dob.to_string(),
            p.gender.clone(),
            p.country.clone(),
            p.description.clone(),
            p.picture.clone(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
