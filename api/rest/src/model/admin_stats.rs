use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResJson {
    page_views: i64,
}

impl AdminStatsResJson {
    pub fn new(page_views: &i64) -> Self {
        Self {
            page_views: *page_views,
        }
    }
}
