use chrono::Local;
use harvest::{info_time, process::run_batch, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    run_batch(Config::default()).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
