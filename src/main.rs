use std::path::Path;

use anyhow::Result;
use log::info;

use yamhill_check::data::{filter, loader, render, sort};

const FILE_NAME: &str = "yamhill.parquet";
const NEW_DATA_DIR: &str = "../../uber-h3-playground-newdata/data/";

fn main() -> Result<()> {
    env_logger::init();

    let df = loader::load_file(Path::new(FILE_NAME))?;
    info!("Loaded {} rows with columns {:?}", df.len(), df.columns);

    let childcare = filter::equals_mask(&df, "var", "childcare")?;
    let childcare_vals = filter::apply_mask(&df, &childcare)?;
    let sorted = sort::sort_by(&childcare_vals, "value")?;
    println!("{}", render::render(&sorted)?);

    let new_data = format!("{NEW_DATA_DIR}{FILE_NAME}");
    let new_df = loader::load_file(Path::new(&new_data))?;
    info!(
        "Loaded {} rows with columns {:?}",
        new_df.len(),
        new_df.columns
    );

    // The mask computed from the first table is applied to the new drop as
    // well; both exports must keep the same row layout for this to select
    // the intended rows.
    let new_childcare_vals = filter::apply_mask(&new_df, &childcare)?;
    let new_sorted = sort::sort_by(&new_childcare_vals, "value")?;
    println!("{}", render::render(&new_sorted)?);

    Ok(())
}
