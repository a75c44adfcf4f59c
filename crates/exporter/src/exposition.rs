//! Prometheus rendering of a collection pass.
//!
//! Every render builds a new `PrometheusRecorder` and installs it as the
//! local recorder only while the pass is recorded, so no series survives
//! from one scrape to the next and nothing touches the global recorder.

use metrics::{describe_gauge, gauge, with_local_recorder};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::collector::{CollectionResult, KindOutcome, ResourceKind};

pub const METRIC_UP: &str = "openstack_up";
pub const METRIC_COLLECTOR_SUCCESS: &str = "openstack_collector_success";
pub const METRIC_COLLECTOR_DURATION: &str = "openstack_collector_duration_seconds";
pub const METRIC_SCRAPE_DURATION: &str = "openstack_scrape_duration_seconds";

/// Content type of the Prometheus text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

fn status_help(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Router => "Number of routers per status.",
        ResourceKind::Volume => "Number of volumes per status.",
        ResourceKind::LoadBalancer => "Number of load balancers per provisioning status.",
        ResourceKind::Server => "Number of servers per status.",
    }
}

fn record(result: &CollectionResult) {
    describe_gauge!(
        METRIC_UP,
        "Whether the last collection pass authenticated and listed every enabled collector."
    );
    describe_gauge!(
        METRIC_COLLECTOR_SUCCESS,
        "Whether the collector listed all of its resources."
    );
    describe_gauge!(
        METRIC_COLLECTOR_DURATION,
        "Time spent listing the collector's resources."
    );
    describe_gauge!(
        METRIC_SCRAPE_DURATION,
        "Time spent on the whole collection pass."
    );

    gauge!(METRIC_UP).set(if result.operational { 1.0 } else { 0.0 });

    for report in result.reports.iter().filter(|r| r.attempted()) {
        let collector = report.kind.subsystem();
        let success = report.outcome == KindOutcome::Collected;
        gauge!(METRIC_COLLECTOR_SUCCESS, "collector" => collector)
            .set(if success { 1.0 } else { 0.0 });
        gauge!(METRIC_COLLECTOR_DURATION, "collector" => collector)
            .set(report.duration.as_secs_f64());

        let name = report.kind.status_metric();
        if !report.snapshot.is_empty() {
            describe_gauge!(name, status_help(report.kind));
        }
        for (status, count) in report.snapshot.iter() {
            gauge!(name, "status" => status.to_string()).set(count as f64);
        }
    }

    gauge!(METRIC_SCRAPE_DURATION).set(result.duration.as_secs_f64());
}

/// Render `result` in the Prometheus text exposition format.
pub fn render(result: &CollectionResult) -> String {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    with_local_recorder(&recorder, || record(result));
    handle.render()
}
