//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read every flag from its `OS_EXPORTER_*` environment variable as a fallback.
//! - Convert parsed flags into collector settings.
//!
//! Non-responsibilities:
//! - Cloud credentials. Those are `OS_*` variables read on every scrape.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use openstack_client::LogFormat;
use openstack_config::constants::{
    DEFAULT_LISTEN_ADDRESS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SCRAPE_TIMEOUT_SECS,
    DEFAULT_TELEMETRY_PATH, MAX_PAGE_SIZE, MAX_TIMEOUT_SECS,
};
use openstack_exporter::{CollectorSettings, ResourceKind};

#[derive(Parser, Debug)]
#[command(name = "openstack-exporter")]
#[command(about = "Prometheus exporter for OpenStack resource statuses", long_about = None)]
#[command(version)]
#[command(
    after_help = "Cloud credentials are read from the standard OS_* variables on every scrape.\n\nExamples:\n  openstack-exporter\n  openstack-exporter --collectors router,volume,lb,server\n  openstack-exporter --web.listen-address 127.0.0.1:9401 --log-format json\n"
)]
pub struct Cli {
    /// Address to listen on for scrapes
    #[arg(
        long = "web.listen-address",
        env = "OS_EXPORTER_LISTEN_ADDRESS",
        default_value = DEFAULT_LISTEN_ADDRESS
    )]
    pub listen_address: SocketAddr,

    /// Path under which to expose metrics
    #[arg(
        long = "web.telemetry-path",
        env = "OS_EXPORTER_TELEMETRY_PATH",
        default_value = DEFAULT_TELEMETRY_PATH
    )]
    pub telemetry_path: String,

    /// Comma-separated resource kinds to collect (router, volume, lb, server)
    #[arg(
        long,
        env = "OS_EXPORTER_COLLECTORS",
        value_delimiter = ',',
        default_value = "router,volume,lb"
    )]
    pub collectors: Vec<ResourceKind>,

    /// Timeout for each OpenStack API request, in seconds
    #[arg(
        long,
        env = "OS_EXPORTER_REQUEST_TIMEOUT",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS)
    )]
    pub request_timeout: u64,

    /// Timeout for a whole collection pass, in seconds
    #[arg(
        long,
        env = "OS_EXPORTER_SCRAPE_TIMEOUT",
        default_value_t = DEFAULT_SCRAPE_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS)
    )]
    pub scrape_timeout: u64,

    /// Records requested per page (service default when unset)
    #[arg(
        long,
        env = "OS_EXPORTER_PAGE_SIZE",
        value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE as u64)
    )]
    pub page_size: Option<u64>,

    /// Log output format (text or json)
    #[arg(long, env = "OS_EXPORTER_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// OTLP endpoint for trace export (e.g., http://localhost:4317)
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Cli {
    pub fn collector_settings(&self) -> CollectorSettings {
        CollectorSettings {
            request_timeout: Duration::from_secs(self.request_timeout),
            scrape_timeout: Duration::from_secs(self.scrape_timeout),
            page_size: self.page_size.map(|n| n as usize),
            ..CollectorSettings::default()
        }
        .with_kinds(self.collectors.iter().copied())
    }
}
