use crate::license_audit::domain::{AggregatedFinding, AuditSummary};

/// ReportRenderer - markdown rendering of the serialized findings
///
/// Builds the report purely from the sorted arrays and the run summary, so
/// the output is deterministic given identical inputs. The body contains no
/// timestamps or other run-varying text; the content differ depends on
/// that.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Renders the full report.
    pub fn render(
        blacklisted: &[AggregatedFinding],
        missing: &[AggregatedFinding],
        summary: &AuditSummary,
    ) -> String {
        let mut output = String::new();

        output.push_str("# Organization License Audit\n\n");

        output.push_str("## Scan summary\n\n");
        output.push_str(&format!(
            "- Repositories scanned: {}\n",
            summary.repositories_scanned
        ));
        output.push_str(&format!(
            "- Repositories failed: {}\n",
            summary.repositories_failed
        ));
        output.push_str(&format!(
            "- Repositories archived (skipped): {}\n",
            summary.repositories_archived
        ));
        output.push_str(&format!(
            "- Repositories affected: {}\n",
            summary.repositories_affected
        ));
        output.push_str(&format!(
            "- Direct dependency findings: {}\n",
            summary.direct_findings
        ));
        output.push_str(&format!(
            "- Transitive dependency findings: {}\n",
            summary.transitive_findings
        ));

        if summary.repos_with_direct_findings.is_empty() {
            output.push_str("\nNo repository has a direct-dependency finding.\n");
        } else {
            let repos: Vec<&str> = summary
                .repos_with_direct_findings
                .iter()
                .map(String::as_str)
                .collect();
            output.push_str(&format!(
                "\nRepositories with direct-dependency findings: {}\n",
                repos.join(", ")
            ));
        }

        output.push_str("\n## Blacklisted licenses\n\n");
        output.push_str(
            "Dependencies whose resolved license is on the configured blacklist.\n\n",
        );
        Self::render_findings_table(&mut output, blacklisted, "No blacklisted licenses found.");

        output.push_str("\n## Missing licenses\n\n");
        output.push_str(
            "Dependencies for which no license could be determined.\n\n",
        );
        Self::render_findings_table(&mut output, missing, "No missing licenses found.");

        output
    }

    /// Renders the one-line summary used for webhook notifications.
    pub fn render_notification(
        blacklisted: &[AggregatedFinding],
        missing: &[AggregatedFinding],
        summary: &AuditSummary,
    ) -> String {
        format!(
            "License audit: {} blacklisted and {} missing license finding(s) across {} affected repositories ({} scanned, {} failed, {} archived)",
            blacklisted.len(),
            missing.len(),
            summary.repositories_affected,
            summary.repositories_scanned,
            summary.repositories_failed,
            summary.repositories_archived
        )
    }

    fn render_findings_table(
        output: &mut String,
        findings: &[AggregatedFinding],
        empty_message: &str,
    ) {
        if findings.is_empty() {
            output.push_str(&format!("_{}_\n", empty_message));
            return;
        }

        output.push_str("| Package | License | Version | Repositories |\n");
        output.push_str("|---------|---------|---------|--------------|\n");

        for finding in findings {
            let repositories: Vec<String> = finding
                .occurrences
                .iter()
                .map(|occurrence| {
                    format!(
                        "{} ({}, {})",
                        escape_cell(&occurrence.repo),
                        if occurrence.is_transitive_dep {
                            "transitive"
                        } else {
                            "direct"
                        },
                        occurrence.resolve_mode
                    )
                })
                .collect();

            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                escape_cell(&finding.name),
                escape_cell(&finding.license),
                escape_cell(&finding.version),
                repositories.join(", ")
            ));
        }
    }
}

/// Escapes markdown table control characters in a cell value.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
