use anyhow::Result;
use doclint::cli::run;

fn main() -> Result<()> {
    run()
}
