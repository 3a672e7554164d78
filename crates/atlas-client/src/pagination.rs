//! Page accumulation for v3 collection endpoints.
//!
//! Each page response carries `results` and `totalCount`. Pages are requested
//! in increasing order with the caller's parameters plus `page=<n>`, until the
//! number of accumulated records reaches `totalCount`.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::transport::{Transport, join_url_with_params};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page<R> {
    #[serde(default = "Vec::new")]
    results: Vec<R>,
    total_count: usize,
}

/// Fetch every record of a paginated collection.
///
/// The number of requests is `ceil(totalCount / page size)`, or one when the
/// collection is empty. Pages of varying size are tolerated.
///
/// # Errors
///
/// Returns the first [`FetchError`] raised by the transport or while decoding
/// a page, and [`FetchError::Pagination`] when a page comes back empty while
/// records are still missing. No partial result is returned.
pub async fn fetch_all<T, R>(
    transport: &T,
    path: &str,
    params: &[(&str, String)],
) -> Result<Vec<R>, FetchError>
where
    T: Transport,
    R: DeserializeOwned,
{
    let mut records: Vec<R> = Vec::new();
    let mut page = 0usize;

    loop {
        let mut query = params.to_vec();
        query.push(("page", page.to_string()));
        let url = join_url_with_params(path, &query);

        let body = transport.get_json(&url).await?;
        let Page {
            results,
            total_count,
        } = serde_json::from_value::<Page<R>>(body).map_err(|e| FetchError::parse(&url, e))?;

        let received = results.len();
        records.extend(results);
        tracing::debug!(path, page, received, total_count, "fetched page");

        if records.len() >= total_count {
            return Ok(records);
        }
        if received == 0 {
            return Err(FetchError::Pagination {
                path: path.to_string(),
                page,
                received: records.len(),
                total: total_count,
            });
        }
        page += 1;
    }
}
