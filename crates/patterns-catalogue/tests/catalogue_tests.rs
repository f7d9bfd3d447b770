use patterns_catalogue::{Catalogue, Category, DemoError, DemoReport, Demonstration};
use pretty_assertions::assert_eq;

struct AlwaysFails;

impl Demonstration for AlwaysFails {
    fn name(&self) -> &'static str {
        "always-fails"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn intent(&self) -> &'static str {
        "Report a failing check."
    }

    fn execute(&self) -> Result<DemoReport, DemoError> {
        let mut report = DemoReport::new(self.name(), self.category());
        report.check_eq("answer", &41, &42);
        Ok(report)
    }
}

#[test]
fn test_default_catalogue_listing() {
    let catalogue = Catalogue::with_defaults();

    let listing: Vec<(&str, Category)> = catalogue.iter().map(|d| (d.name(), d.category())).collect();
    assert_eq!(
        listing,
        vec![
            ("chain-of-responsibility", Category::Behavioral),
            ("state", Category::Behavioral),
        ]
    );
    assert!(catalogue.iter().all(|d| !d.intent().is_empty()));
}

#[test]
fn test_run_by_name() {
    let catalogue = Catalogue::with_defaults();

    let report = catalogue.run("chain-of-responsibility").unwrap();
    assert_eq!(report.pattern, "chain-of-responsibility");
    assert!(report.passed(), "{}", report.generate_text());
}

#[test]
fn test_run_unknown_name() {
    let err = Catalogue::with_defaults().run("flyweight").unwrap_err();
    assert!(matches!(err, DemoError::UnknownDemonstration(ref name) if name == "flyweight"));
}

#[test]
fn test_failing_demonstration_is_reported_not_raised() {
    let mut catalogue = Catalogue::with_defaults();
    catalogue.register(Box::new(AlwaysFails));

    let reports = catalogue.run_all().unwrap();
    assert_eq!(reports.len(), 3);

    let failing: Vec<&str> = reports.iter().filter(|r| !r.passed()).map(|r| r.pattern.as_str()).collect();
    assert_eq!(failing, vec!["always-fails"]);

    let text = reports[0].generate_text();
    assert!(text.starts_with("always-fails (creational): FAIL\n"));
    assert!(text.contains("expected 42, got 41"));
}

#[test]
fn test_reports_serialize_to_json() {
    let report = Catalogue::with_defaults().run("state").unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["pattern"], "state");
    assert_eq!(json["category"], "behavioral");
    assert_eq!(json["checks"].as_array().map(Vec::len), Some(report.checks.len()));

    let back: DemoReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
