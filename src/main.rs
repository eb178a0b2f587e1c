use sheetfold::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    sheetfold::cli::run_from_env()
}
