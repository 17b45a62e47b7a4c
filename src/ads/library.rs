//! Paging through the bibcodes of an ADS library.
use crate::ads::client::AdsClient;
use crate::ads::models::{Fetched, RateLimit};
use crate::error::Result;
use indicatif::ProgressBar;
use log::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Bibcodes requested per page.
    pub rows: u32,
    /// Hard cap on the number of page requests.
    pub max_pages: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            rows: 100,
            max_pages: 32,
        }
    }
}

/// Collects every bibcode of `library`, in library order.
///
/// A page shorter than `rows` marks the end of the library. The returned rate
/// limit is the one reported by the last page.
pub async fn fetch_library_bibcodes(
    client: &AdsClient,
    library: &str,
    limits: PageLimits,
    progress: &ProgressBar,
) -> Result<Fetched<Vec<String>>> {
    let mut all_bibcodes = Vec::new();
    let mut rate_limit = RateLimit::default();
    let mut start = 0u32;

    for page in 1..=limits.max_pages {
        let fetched = client.fetch_library_page(library, start, limits.rows).await?;
        let page_len = fetched.body.len();
        rate_limit = fetched.rate_limit;
        all_bibcodes.extend(fetched.body);
        progress.set_message(format!("page {}: {} bibcodes", page, all_bibcodes.len()));
        progress.tick();

        if page_len < limits.rows as usize {
            break;
        }
        if page == limits.max_pages {
            warn!(
                "Stopped after {} pages; the library may hold more than {} bibcodes",
                limits.max_pages,
                all_bibcodes.len()
            );
            break;
        }
        start += limits.rows;
    }

    info!("Number of bibcodes retrieved: {}", all_bibcodes.len());
    Ok(Fetched {
        body: all_bibcodes,
        rate_limit,
    })
}
