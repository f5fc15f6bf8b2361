use anyhow::Result;

fn main() -> Result<()> {
    crs_cli::main_entry()
}
