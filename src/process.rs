use std::time::Duration;

use chrono::Local;
use rand::Rng;
use reqwest::Client;
use tokio::{fs::File, io::AsyncWriteExt, task::JoinSet, time::sleep};

use crate::scrape::{scrape_page, PageResult};
use crate::{info_time, Config, Result};

/// Runs the whole batch: every page in `1..=total_pages`, at most
/// `concurrency` in flight at once, and the collected results written to
/// `output_path` as pretty-printed JSON.
///
/// Groups are strictly sequential: the next group only starts once every
/// task of the current one has resolved, so the result vector is only ever
/// touched between groups. Returns the results in completion order.
pub async fn run_batch(config: Config) -> Result<Vec<PageResult>> {
    let start_time = Local::now();
    let client = Client::new();
    let mut results = Vec::with_capacity(config.total_pages);

    info_time!("Started harvesting {} pages", config.total_pages);

    let page_ids = (1..=config.total_pages).collect::<Vec<_>>();
    for group in page_ids.chunks(config.concurrency.max(1)) {
        info_time!("Processing group: {} - {}", group[0], group[group.len() - 1]);

        let mut task_set = spawn_group(group, &client, &config);
        // Barrier: drain every task of this group before the next one spawns.
        while let Some(task) = task_set.join_next().await {
            if let Some(page) = task? {
                results.push(page);
            }
        }
    }

    write_results(&results, &config.output_path).await?;
    info_time!(
        start_time,
        "Done: {}/{} pages harvested",
        results.len(),
        config.total_pages
    );

    Ok(results)
}

/// Spawns one task per id in the group, in ascending id order. Each task
/// sleeps a random jitter before fetching so a group doesn't hit the site
/// as a single burst.
fn spawn_group(group: &[usize], client: &Client, config: &Config) -> JoinSet<Option<PageResult>> {
    let mut task_set = JoinSet::new();

    for &id in group {
        // Client uses Arc so we can clone cheaply
        let client = client.clone();
        let base_url = config.base_url.clone();
        let jitter_ms = config.jitter_ms.clone();

        task_set.spawn(async move {
            let delay = if jitter_ms.is_empty() {
                0
            } else {
                rand::thread_rng().gen_range(jitter_ms)
            };
            sleep(Duration::from_millis(delay)).await;

            scrape_page(&client, &base_url, id).await
        });
    }
    task_set
}

/// Serializes the collected pages and writes them out in one go, replacing
/// whatever a previous run left behind.
async fn write_results(results: &[PageResult], path: &str) -> Result<()> {
    let json = serde_json::to_vec_pretty(results)?;

    let mut file = File::create(path).await?;
    file.write_all(&json).await?;
    file.flush().await?;
    info_time!("Wrote {} results to file: {}", results.len(), path);

    Ok(())
}
