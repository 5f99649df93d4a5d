use crate::structs::shifts::Shift;
use std::{env::var, sync::Arc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 頁面共用的檢視狀態：最後一次成功抓回的清單、載入旗標、錯誤訊息
#[derive(Default)]
pub struct ShiftsView {
    pub shifts: Vec<Shift>,
    pub loading: bool,
    pub err: String,
}

#[derive(Clone)]
pub struct AppStateV2 {
    http_client: reqwest::Client,
    shift_api_host: String,
    shifts_view: Arc<RwLock<ShiftsView>>,
}

impl AppStateV2 {
    pub async fn new() -> Self {
        let shift_api_host =
            var("SHIFT_API_HOST").unwrap_or_else(|_| "http://localhost:8000".to_string());

        Self::from_host(shift_api_host)
    }

    pub fn from_host(shift_api_host: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            shift_api_host,
            shifts_view: Arc::new(RwLock::new(ShiftsView::default())),
        }
    }

    pub fn get_http_client(&self) -> reqwest::Client {
        self.http_client.clone()
    }

    pub fn get_shift_api_host(&self) -> &str {
        &self.shift_api_host
    }

    pub async fn read_view(&self) -> RwLockReadGuard<'_, ShiftsView> {
        self.shifts_view.read().await
    }

    pub async fn write_view(&self) -> RwLockWriteGuard<'_, ShiftsView> {
        self.shifts_view.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_reads_api_host_from_env() {
        temp_env::async_with_vars(
            [("SHIFT_API_HOST", Some("http://api.example:9000"))],
            async {
                let state = AppStateV2::new().await;
                assert_eq!(state.get_shift_api_host(), "http://api.example:9000");
            },
        )
        .await;
    }

    #[tokio::test]
    async fn new_falls_back_to_local_default() {
        temp_env::async_with_vars([("SHIFT_API_HOST", None::<&str>)], async {
            let state = AppStateV2::new().await;
            assert_eq!(state.get_shift_api_host(), "http://localhost:8000");
        })
        .await;
    }
}
