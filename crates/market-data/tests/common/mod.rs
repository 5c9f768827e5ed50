use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pricefeed_market_data::{
    DataFetcher, FetcherConfig, HttpRequest, HttpResponse, HttpTransport, MarketDataError,
};
use reqwest::StatusCode;

/// Transport that replays canned responses and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<(StatusCode, &str)>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|(status, body)| HttpResponse::new(status, body))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MarketDataError> {
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedTransport ran out of responses");
        Ok(response)
    }
}

pub fn fetcher(transport: Arc<ScriptedTransport>) -> DataFetcher {
    fetcher_with(FetcherConfig::default(), transport)
}

pub fn fetcher_with(config: FetcherConfig, transport: Arc<ScriptedTransport>) -> DataFetcher {
    DataFetcher::with_transport(
        config
            .with_yahoo_base_url("https://yahoo.test")
            .with_vietcap_base_url("https://vietcap.test/api"),
        transport,
    )
}

pub fn no_delay() -> FetcherConfig {
    FetcherConfig::default().with_delay(Duration::ZERO)
}

/// Three daily bars, the middle one missing its close.
pub const YAHOO_CHART: &str = r#"{"chart": {"result": [{
    "meta": {"symbol": "^GSPC", "currency": "USD"},
    "timestamp": [1739197800, 1739284200, 1739370600],
    "indicators": {"quote": [{
        "open":   [6046.4, 6057.2, 6031.0],
        "high":   [6073.4, 6085.3, 6076.1],
        "low":    [6043.2, 6052.1, 6003.0],
        "close":  [6066.44, null, 6051.97],
        "volume": [4500000000, 4400000000, 4160940000]
    }]}
}], "error": null}}"#;

pub const VIETCAP_OHLC: &str = r#"[{"symbol": "VNINDEX", "t": [100, 200], "o": [10, 11], "h": [12, 13], "l": [9, 9], "c": [11, 12], "v": [1000, 1500]}]"#;
