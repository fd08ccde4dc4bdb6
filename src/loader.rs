use futures::future::join_all;
use tracing::{info, warn};

use crate::data_provider::{discover_records, RecordSource};
use crate::roster::Roster;
use crate::types::{Dataset, RawRecord};

/// Fetch every record of a dataset concurrently and rank the survivors
///
/// All fetches are awaited as one batch. Records that fail to load are logged
/// and left out; if every record fails the roster is simply empty.
pub async fn load_roster(source: &dyn RecordSource, dataset: Dataset) -> Roster {
    let ids = discover_records(source, dataset).await;
    info!("LOAD: {} - fetching {} records", dataset.name(), ids.len());

    // Create futures for all record requests
    let fetch_futures = ids.iter().map(|id| async move {
        let result = source.fetch_record(dataset, id).await;
        (id, result)
    });

    let results = join_all(fetch_futures).await;

    let records: Vec<RawRecord> = results
        .into_iter()
        .filter_map(|(id, result)| match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("LOAD: {} - dropping {}: {}", dataset.name(), id, e);
                None
            }
        })
        .collect();

    info!(
        "LOAD: {} - loaded {} of {} records",
        dataset.name(),
        records.len(),
        ids.len()
    );

    Roster::load(dataset, &records)
}
