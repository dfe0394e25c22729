use macvendor_cli::commands::lookup::{lookup, Outcome};
use macvendor_cli::terminal::logging;
use macvendor_common::config::Config;
use macvendor_common::network::mac::MacAddress;
use macvendor_common::vendors::{LookupError, VendorLookup, VendorRepository};
use macvendor_core::vendors::HttpVendorRepo;

use crate::fixture::{closed_api_url, MockVendorService, SharedBuf};

const MAC: &str = "00:1A:2B:3C:4D:5E";

struct Run {
    outcome: Outcome,
    stdout: String,
    logs: String,
}

impl Run {
    /// Whether some log line carries both the level symbol and the message.
    fn logged(&self, symbol: &str, message: &str) -> bool {
        self.logs
            .lines()
            .any(|line| line.contains(symbol) && line.contains(message))
    }
}

/// Runs the lookup command against `api_url` with a captured logger.
///
/// `RUST_LOG` is ignored so the quiet level is always info.
fn run(raw: &str, api_url: String, verbose: bool) -> anyhow::Result<Run> {
    let logs = SharedBuf::default();
    let writer = logs.clone();
    let dispatch =
        logging::dispatcher_with_filter(logging::filter(verbose, None), move || writer.clone());

    let repo = HttpVendorRepo::new(&Config { api_url });
    let mut stdout = Vec::new();
    let outcome = tracing::dispatcher::with_default(&dispatch, || lookup(raw, &repo, &mut stdout))?;

    Ok(Run {
        outcome,
        stdout: String::from_utf8(stdout)?,
        logs: logs.contents(),
    })
}

#[test]
fn known_vendor_is_printed() -> anyhow::Result<()> {
    let service = MockVendorService::json(r#"{"result": {"company": "Acme Corp"}}"#)?;

    let run = run(MAC, service.api_url(), false)?;

    assert_eq!(run.outcome, Outcome::Resolved);
    assert_eq!(run.outcome.exit_code(), 0);
    assert_eq!(run.stdout, "Vendor: Acme Corp\n");
    assert_eq!(
        service.next_request_line().as_deref(),
        Some("GET /api/00:1A:2B:3C:4D:5E HTTP/1.1")
    );
    Ok(())
}

#[test]
fn server_error_prints_not_found() -> anyhow::Result<()> {
    let service = MockVendorService::serve(500, "Internal Server Error", r#"{"error": "boom"}"#)?;

    let run = run(MAC, service.api_url(), true)?;

    assert_eq!(run.outcome, Outcome::Unresolved);
    assert_eq!(run.outcome.exit_code(), 0);
    assert_eq!(run.stdout, "Vendor information not found.\n");
    assert!(
        run.logged("[-]", "An error occurred during the request: vendor service answered with HTTP status 500"),
        "{}",
        run.logs
    );
    Ok(())
}

#[test]
fn missing_company_prints_not_found() -> anyhow::Result<()> {
    let service = MockVendorService::json(r#"{"result": {}}"#)?;

    let run = run(MAC, service.api_url(), true)?;

    assert_eq!(run.outcome, Outcome::Unresolved);
    assert_eq!(run.stdout, "Vendor information not found.\n");
    assert!(
        run.logged("[*]", "Vendor information not found for MAC address: 00:1A:2B:3C:4D:5E"),
        "{}",
        run.logs
    );
    assert!(!run.logs.contains("[-]"), "{}", run.logs);
    Ok(())
}

#[test]
fn invalid_json_prints_not_found() -> anyhow::Result<()> {
    let service = MockVendorService::json("<html>rate limited</html>")?;

    let run = run(MAC, service.api_url(), true)?;

    assert_eq!(run.outcome, Outcome::Unresolved);
    assert_eq!(run.stdout, "Vendor information not found.\n");
    assert!(run.logged("[-]", "Failed to parse JSON response"), "{}", run.logs);
    assert!(!run.logs.contains("[*]"), "{}", run.logs);
    Ok(())
}

#[test]
fn unreachable_service_prints_not_found() -> anyhow::Result<()> {
    let run = run(MAC, closed_api_url()?, false)?;

    assert_eq!(run.outcome, Outcome::Unresolved);
    assert_eq!(run.outcome.exit_code(), 0);
    assert_eq!(run.stdout, "Vendor information not found.\n");
    assert!(run.logged("[-]", "An error occurred during the request: "), "{}", run.logs);
    assert_eq!(run.logs.matches("An error occurred").count(), 1, "{}", run.logs);
    assert!(!run.logs.contains("vendor service failed"), "{}", run.logs);
    Ok(())
}

#[test]
fn malformed_input_exits_with_one_and_prints_nothing() -> anyhow::Result<()> {
    let service = MockVendorService::json(r#"{"result": {"company": "Acme Corp"}}"#)?;

    let run = run("not-a-mac", service.api_url(), true)?;

    assert_eq!(run.outcome, Outcome::Rejected);
    assert_eq!(run.outcome.exit_code(), 1);
    assert!(run.stdout.is_empty());
    assert!(run.logged("[-]", "XX:XX:XX:XX:XX:XX"), "{}", run.logs);
    Ok(())
}

#[test]
fn verbose_only_changes_logs() -> anyhow::Result<()> {
    let bodies = [
        (200, "OK", r#"{"result": {"company": "Acme Corp"}}"#),
        (500, "Internal Server Error", ""),
        (200, "OK", r#"{"result": {}}"#),
    ];

    for (status, reason, body) in bodies {
        let service = MockVendorService::serve(status, reason, body)?;
        let quiet = run(MAC, service.api_url(), false)?;
        let verbose = run(MAC, service.api_url(), true)?;

        assert_eq!(quiet.stdout, verbose.stdout);
        assert_eq!(quiet.outcome, verbose.outcome);
        assert!(verbose.logged("[?]", "Sending request to http://"), "{}", verbose.logs);
        assert!(!quiet.logs.contains("[?]"), "{}", quiet.logs);
        assert!(!quiet.logs.contains("Sending request to"), "{}", quiet.logs);
    }

    let service = MockVendorService::json("{}")?;
    let quiet = run("not-a-mac", service.api_url(), false)?;
    let verbose = run("not-a-mac", service.api_url(), true)?;
    assert_eq!(quiet.stdout, verbose.stdout);
    assert_eq!(verbose.outcome, Outcome::Rejected);
    assert!(!quiet.logs.contains("[?]"), "{}", quiet.logs);
    assert!(verbose.logged("[?]", "Rejected input 'not-a-mac'"), "{}", verbose.logs);
    Ok(())
}

#[test]
fn repository_distinguishes_failure_kinds() -> anyhow::Result<()> {
    let mac = MacAddress::parse(MAC)?;

    let service = MockVendorService::serve(503, "Service Unavailable", "")?;
    let repo = HttpVendorRepo::new(&Config { api_url: service.api_url() });
    assert_eq!(
        repo.lookup(&mac),
        VendorLookup::Failed(LookupError::Status { status: 503 })
    );

    let service = MockVendorService::json(r#"{"result": {"error": "no result"}}"#)?;
    let repo = HttpVendorRepo::new(&Config { api_url: service.api_url() });
    assert_eq!(repo.lookup(&mac), VendorLookup::NotFound);

    let repo = HttpVendorRepo::new(&Config { api_url: closed_api_url()? });
    assert!(matches!(
        repo.lookup(&mac),
        VendorLookup::Failed(LookupError::Transport(_))
    ));
    Ok(())
}
