//! Print the variables stored in a MATLAB `.mat` file.
//!
//! Usage: `mat-info <file.mat> [variable ...]`
//!
//! With variable names given, only those are shown (and a missing one is an
//! error); otherwise every variable in the file is listed with its shape.

use anyhow::{bail, Context, Result};
use plotassist::MatData;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, variables) = match args.split_first() {
        Some((path, rest)) => (path.clone(), rest.to_vec()),
        None => bail!("usage: mat-info <file.mat> [variable ...]"),
    };

    let filter: Option<Vec<&str>> = if variables.is_empty() {
        None
    } else {
        Some(variables.iter().map(String::as_str).collect())
    };

    let data = MatData::load(&path, filter.as_deref())
        .with_context(|| format!("loading {path}"))?;

    println!("{}", data.file_path().display());
    for name in data.get_keys() {
        let array = data
            .get(name)
            .with_context(|| format!("reading variable '{name}'"))?;
        let shape: Vec<String> = array.size().iter().map(|d| d.to_string()).collect();
        println!("  {name}  [{}]", shape.join(" x "));
    }

    // Explicitly requested variables must all be present.
    for wanted in &variables {
        data.get(wanted)
            .with_context(|| format!("variable '{wanted}' not in {path}"))?;
    }

    Ok(())
}
