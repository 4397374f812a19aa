//! Integration tests for document loading and the assembly entry points.

#![expect(clippy::expect_used, reason = "tests fail loudly on fixture errors")]

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use flotilla_loader::{LoaderError, from_document, from_project, from_solution, probe_launch_profile};
use flotilla_model::ServiceDescription;

const DOCUMENT: &str = "\
- name: web
  bindings:
    - port: 8080
      protocol: http
- name: db
  replicas: 2
  bindings:
    - name: primary
      connectionString: cs1
";

struct Fixture {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().expect("temporary directory should create");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .expect("temporary directory should be UTF-8");
        Self { _temp: temp, root }
    }

    fn write(&self, relative: &str, content: &str) -> Utf8PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("fixture directories should create");
        }
        fs::write(&path, content).expect("fixture file should write");
        path
    }
}

#[test]
fn document_loads_into_an_assembled_application() {
    let fixture = Fixture::new();
    fixture.write("flotilla.yaml", DOCUMENT);

    let application = from_document(&fixture.root, Utf8Path::new("flotilla.yaml"))
        .expect("document should load");

    assert_eq!(application.context_directory(), fixture.root);
    let names: Vec<_> = application.services().keys().cloned().collect();
    assert_eq!(names, ["web", "db"]);

    let web = application.service("web").expect("web should be present");
    assert_eq!(web.replicas(), 1);
    assert_eq!(web.bindings().len(), 1);
    let web_binding = web.bindings().first().expect("web should have a binding");
    assert_eq!(web_binding.port, Some(8080));
    assert_eq!(web_binding.protocol.as_deref(), Some("http"));

    let db = application.service("db").expect("db should be present");
    assert_eq!(db.replicas(), 2);
    let db_binding = db.bindings().first().expect("db should have a binding");
    assert_eq!(db_binding.effective_name(), Some("primary"));
    assert_eq!(db_binding.connection_string.as_deref(), Some("cs1"));
}

#[test]
fn relative_documents_resolve_against_the_supplied_base_only() {
    let fixture = Fixture::new();
    fixture.write("nested/flotilla.yaml", DOCUMENT);

    let application = from_document(&fixture.root, Utf8Path::new("nested/flotilla.yaml"))
        .expect("document should load");

    assert_eq!(application.context_directory(), fixture.root.join("nested"));
}

#[test]
fn malformed_documents_are_parse_errors() {
    let fixture = Fixture::new();
    // A scalar where a description record is expected.
    fixture.write("flotilla.yaml", "- 7\n");

    let error = from_document(&fixture.root, Utf8Path::new("flotilla.yaml"))
        .expect_err("malformed YAML should fail");
    assert!(matches!(error, LoaderError::Parse { .. }));
}

#[test]
fn missing_documents_are_read_errors() {
    let fixture = Fixture::new();

    let error = from_document(&fixture.root, Utf8Path::new("absent.yaml"))
        .expect_err("missing documents should fail");
    assert!(matches!(error, LoaderError::Read { .. }));
}

#[test]
fn project_entry_point_yields_an_empty_application() {
    let fixture = Fixture::new();
    let project = fixture.write("web/web.csproj", "<Project />");

    let application =
        from_project(&fixture.root, &project).expect("project entry point should assemble");

    assert!(application.services().is_empty());
    assert_eq!(application.context_directory(), fixture.root.join("web"));
}

#[test]
fn solution_entry_point_matches_the_project_contract() {
    let fixture = Fixture::new();
    fixture.write("demo.sln", "");

    let application = from_solution(&fixture.root, Utf8Path::new("demo.sln"))
        .expect("solution entry point should assemble");

    assert!(application.services().is_empty());
    assert_eq!(application.context_directory(), fixture.root);
}

#[test]
fn launch_profile_probe_finds_the_matching_profile() {
    let fixture = Fixture::new();
    fixture.write(
        "web/Properties/launchSettings.json",
        r#"{"profiles":{"web":{"applicationUrl":"http://localhost:5000"}}}"#,
    );

    let mut description = ServiceDescription::named("web");
    description.project_file = Some(Utf8PathBuf::from("web/web.csproj"));

    let profile = probe_launch_profile(&fixture.root, &description)
        .expect("probe should succeed")
        .expect("profile should be discovered");
    assert_eq!(profile.name, "web");
    assert_eq!(
        profile.application_url.as_deref(),
        Some("http://localhost:5000")
    );
}

#[test]
fn absent_launch_settings_are_a_no_op() {
    let fixture = Fixture::new();

    let mut description = ServiceDescription::named("web");
    description.project_file = Some(Utf8PathBuf::from("web/web.csproj"));

    let probed = probe_launch_profile(&fixture.root, &description).expect("probe should succeed");
    assert_eq!(probed, None);
}

#[test]
fn unmatched_profiles_are_a_no_op() {
    let fixture = Fixture::new();
    fixture.write(
        "web/Properties/launchSettings.json",
        r#"{"profiles":{"other":{}}}"#,
    );

    let mut description = ServiceDescription::named("web");
    description.project_file = Some(Utf8PathBuf::from("web/web.csproj"));

    let probed = probe_launch_profile(&fixture.root, &description).expect("probe should succeed");
    assert_eq!(probed, None);
}

#[test]
fn malformed_launch_settings_are_errors() {
    let fixture = Fixture::new();
    fixture.write("web/Properties/launchSettings.json", "{not json");

    let mut description = ServiceDescription::named("web");
    description.project_file = Some(Utf8PathBuf::from("web/web.csproj"));

    let error = probe_launch_profile(&fixture.root, &description)
        .expect_err("malformed settings should fail");
    assert!(matches!(error, LoaderError::LaunchSettings { .. }));
}
