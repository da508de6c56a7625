//! Dev console diagnostics.
//!
//! When the observed page is served from a loopback address, delivered
//! reports are additionally summarized through `tracing`, grouped and
//! ordered by severity. This output is cosmetic and not part of the
//! delivery contract.

use a11y::ComplianceReport;
use vitals::PerformanceReport;

/// Whether a page URL points at a loopback/local host.
pub fn is_local_host(url: &str) -> bool {
    let after_scheme = url.split("://").nth(1).unwrap_or(url);
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    // Drop userinfo if present.
    let host_port = authority.rsplit('@').next().unwrap_or_default();

    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split(']').next() == Some("::1");
    }
    let host = host_port.split(':').next().unwrap_or_default();
    matches!(host, "localhost" | "127.0.0.1" | "0.0.0.0")
}

/// Grouped, severity-descending summary of a compliance report.
pub fn log_compliance_summary(report: &ComplianceReport) {
    tracing::info!(
        target: "reporting::console",
        compliance = report.compliance,
        violations = report.violations.len(),
        "accessibility scan"
    );

    let mut ordered = report.violations.clone();
    ordered.sort_by(|a, b| b.severity.cmp(&a.severity));
    for violation in &ordered {
        tracing::info!(
            target: "reporting::console",
            severity = %violation.severity,
            kind = %violation.kind,
            standard = violation.standard_reference.as_str(),
            element = violation.element.as_deref().unwrap_or("(page)"),
            "{}",
            violation.description
        );
    }
}

/// One-line summary of a performance report; exceeded budgets log at warn.
pub fn log_performance_report(report: &PerformanceReport) {
    if report.is_budget_exceeded {
        tracing::warn!(target: "reporting::console", "{report}");
    } else {
        tracing::info!(target: "reporting::console", "{report}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_hosts() {
        assert!(is_local_host("http://localhost:3000/donate"));
        assert!(is_local_host("http://127.0.0.1/"));
        assert!(is_local_host("http://[::1]:8080/path"));
        assert!(is_local_host("http://0.0.0.0:4000"));
    }

    #[test]
    fn test_public_hosts() {
        assert!(!is_local_host("https://example.com/"));
        assert!(!is_local_host("https://localhost.example.com/"));
        assert!(!is_local_host("https://user@example.com/"));
        assert!(!is_local_host("about:blank"));
    }
}
