use chrono::{Duration as ChronoDuration, Utc};
use colored::*;
use governor::{Quota, RateLimiter};
use hdrhistogram::Histogram;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const DURATION_SECS: u64 = 20;
const BASE_URL: &str = "http://localhost:3000";
// Latency histogram bounds in microseconds
const HISTOGRAM_MAX_MICROS: u64 = 60_000_000;

struct Target {
    name: &'static str,
    method: Method,
    url: String,
    body: Option<serde_json::Value>,
}

#[tokio::main]
async fn main() {
    println!("{}", "Starting Benchmark Suite".bold().green());
    println!("Target URL: {}", BASE_URL);

    let creator_id = std::env::var("BENCH_CREATOR_ID").unwrap_or_else(|_| "bench-creator".to_string());

    let client = match Client::builder()
        .pool_max_idle_per_host(1000)
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", format!("Failed to build HTTP client: {}", e).red().bold());
            return;
        }
    };

    if client.get(format!("{}/health", BASE_URL)).send().await.is_err() {
        eprintln!("{}", format!("Server is NOT reachable at {}. Please start it first.", BASE_URL).red().bold());
        return;
    }

    println!("\n{}", "Loading creator sessions...".yellow());
    let session_ids = load_session_ids(&client, &creator_id).await;
    if session_ids.is_empty() {
        eprintln!("{}", "Creator has no sessions to schedule.".red().bold());
        return;
    }
    println!("   Creator:  {}", creator_id);
    println!("   Sessions: {}", session_ids.len());

    let today = Utc::now().date_naive();
    let range_body = json!({
        "session_ids": session_ids,
        "start_date": today.to_string(),
        "end_date": (today + ChronoDuration::days(90)).to_string(),
    });

    let targets = vec![
        Target {
            name: "Health Check",
            method: Method::GET,
            url: format!("{}/health", BASE_URL),
            body: None,
        },
        Target {
            name: "Schedule Preview (90 days)",
            method: Method::POST,
            url: format!("{}/api/v1/creators/{}/schedule/preview", BASE_URL, creator_id),
            body: Some(range_body.clone()),
        },
        Target {
            name: "Schedule Preview (unbounded)",
            method: Method::POST,
            url: format!("{}/api/v1/creators/{}/schedule/preview", BASE_URL, creator_id),
            body: Some(json!({ "session_ids": session_ids })),
        },
        Target {
            name: "Select All",
            method: Method::POST,
            url: format!("{}/api/v1/creators/{}/schedule/select-all", BASE_URL, creator_id),
            body: Some(range_body),
        },
    ];

    let rps_stages = vec![10, 50, 200, 1000];

    for target in targets {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking Endpoint: {}", target.name.cyan().bold());
        println!("URL: {}", target.url);
        println!("{}", "=".repeat(60));

        println!("{:<10} | {:<15} | {:<15} | {:<15}", "RPS", "Mean (ms)", "P99 (ms)", "Success Rate");
        println!("{:-<10}-+-{:-<15}-+-{:-<15}-+-{:-<15}", "", "", "", "");

        for &rps in &rps_stages {
            run_stage(&client, &target, rps).await;
        }
    }
}

async fn load_session_ids(client: &Client, creator_id: &str) -> Vec<String> {
    let res = match client
        .get(format!("{}/api/v1/creators/{}/sessions", BASE_URL, creator_id))
        .send()
        .await
    {
        Ok(res) if res.status().is_success() => res,
        Ok(res) => {
            eprintln!("Failed to list sessions: status {}", res.status());
            return Vec::new();
        }
        Err(e) => {
            eprintln!("Failed to list sessions: {}", e);
            return Vec::new();
        }
    };

    let body: Value = res.json().await.unwrap_or(Value::Null);
    body.as_array()
        .map(|sessions| {
            sessions
                .iter()
                .filter_map(|s| s["session_id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

struct StageReport {
    total: u64,
    successes: u64,
    dropped_samples: u64,
    histogram: Histogram<u64>,
}

impl StageReport {
    fn new() -> Option<Self> {
        Some(Self {
            total: 0,
            successes: 0,
            dropped_samples: 0,
            histogram: Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_MICROS, 3).ok()?,
        })
    }

    fn record(&mut self, latency: Duration, success: bool) {
        self.total += 1;
        if success {
            self.successes += 1;
        }
        if self.histogram.record(latency.as_micros() as u64).is_err() {
            self.dropped_samples += 1;
        }
    }

    fn print(&self, rps: u32) {
        let mean_ms = self.histogram.mean() / 1000.0;
        let p99_ms = self.histogram.value_at_quantile(0.99) as f64 / 1000.0;
        let success_rate = if self.total > 0 {
            (self.successes as f64 / self.total as f64) * 100.0
        } else {
            0.0
        };

        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<14.1}%",
            rps, mean_ms, p99_ms, success_rate
        );
        if self.dropped_samples > 0 {
            println!("{}", format!("   {} latency samples out of histogram range", self.dropped_samples).yellow());
        }
    }
}

async fn run_stage(client: &Client, target: &Target, rps: u32) {
    let Some(per_second) = NonZeroU32::new(rps) else {
        return;
    };
    let Some(mut report) = StageReport::new() else {
        eprintln!("Failed to allocate latency histogram");
        return;
    };
    let limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));

    let (tx, mut rx) = mpsc::channel(50000);
    let deadline = Instant::now() + Duration::from_secs(DURATION_SECS);

    while Instant::now() < deadline {
        if limiter.check().is_err() {
            tokio::task::yield_now().await;
            continue;
        }

        let mut request = client.request(target.method.clone(), &target.url);
        if let Some(body) = &target.body {
            request = request.json(body);
        }
        let tx = tx.clone();

        tokio::spawn(async move {
            let sent_at = Instant::now();
            let success = matches!(request.send().await, Ok(r) if r.status().is_success());
            let _ = tx.send((sent_at.elapsed(), success)).await;
        });
    }

    drop(tx);

    while let Some((latency, success)) = rx.recv().await {
        report.record(latency, success);
    }
    report.print(rps);

    tokio::time::sleep(Duration::from_millis(500)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_report_counts_out_of_range_samples() {
        let mut report = StageReport::new().unwrap();
        report.record(Duration::from_millis(12), true);
        report.record(Duration::from_millis(30), false);
        report.record(Duration::from_secs(120), false);

        assert_eq!(report.total, 3);
        assert_eq!(report.successes, 1);
        assert_eq!(report.dropped_samples, 1);
        assert_eq!(report.histogram.len(), 2);
    }
}
