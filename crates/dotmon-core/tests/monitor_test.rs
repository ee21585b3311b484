// Lifecycle and lookup tests for `Monitor` against a wiremock API.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dotmon_core::{
    CoreError, GroupSpec, LocationFilter, LocationSelection, Lookup, Monitor, MonitorConfig,
    SchedulerSpec, TaskSpec,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Monitor) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", ".ASPXFORMSAUTH=abc; path=/")
                .set_body_json(json!({ "Success": true })),
        )
        .mount(&server)
        .await;

    let config = MonitorConfig::new(
        Url::parse(&server.uri()).unwrap(),
        SecretString::from("uid-1".to_owned()),
    );
    let monitor = Monitor::new(config).unwrap();
    monitor.connect().await.unwrap();
    (server, monitor)
}

fn task_body(id: i64, device_id: i64, name: &str) -> Value {
    json!({
        "Id": id,
        "Name": name,
        "Url": "https://example.com",
        "RequestType": "GET",
        "Device_Id": device_id,
        "Task_Type_Id": 2,
        "Timeout": 120_000,
        "CheckCertificateAuthority": true,
        "CheckCertificateCN": true,
        "CheckCertificateDate": true,
        "CheckCertificateRevocation": true,
        "CheckCertificateUsage": true
    })
}

async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_empty(server: &MockServer, verb: &str, route: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

// ── Lifecycle ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_reads_back_stored_task() {
    let (server, monitor) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Success": true,
            "Result": 55
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, "/task/55", task_body(55, 7, "home")).await;

    let spec = TaskSpec::new(7, "home", "https://example.com");
    let (id, stored) = monitor.create(&spec).await.unwrap();

    assert_eq!(id, 55);
    assert_eq!(stored, spec);
}

#[tokio::test]
async fn test_invalid_task_sends_nothing() {
    let (server, monitor) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut spec = TaskSpec::new(7, "", "https://example.com");
    spec.task_type_id = 99;
    let err = monitor.create(&spec).await.unwrap_err();

    match err {
        CoreError::ValidationFailed { violations, .. } => assert_eq!(violations.len(), 2),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_read_missing_is_none() {
    let (server, monitor) = setup().await;
    mount_empty(&server, "GET", "/group/4").await;

    let found = monitor.read::<GroupSpec>(4).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_missing_is_none_and_sends_nothing() {
    let (server, monitor) = setup().await;
    mount_empty(&server, "GET", "/scheduler/3").await;
    Mock::given(method("POST"))
        .and(path("/scheduler/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let spec = SchedulerSpec {
        name: "nights".into(),
        description: None,
        weekly_intervals: Vec::new(),
        excluded_time_intervals: Vec::new(),
    };
    assert!(monitor.update(3, &spec).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_cannot_move_task() {
    let (server, monitor) = setup().await;
    mount_get(&server, "/task/55", task_body(55, 7, "home")).await;

    let spec = TaskSpec::new(8, "home", "https://example.com");
    let err = monitor.update(55, &spec).await.unwrap_err();
    assert!(err.to_string().contains("cannot move a task from device 7 to 8"));
}

#[tokio::test]
async fn test_update_sends_full_object_and_reads_back() {
    let (server, monitor) = setup().await;
    mount_get(&server, "/task/55", task_body(55, 7, "renamed")).await;
    Mock::given(method("POST"))
        .and(path("/task/55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let spec = TaskSpec::new(7, "renamed", "https://example.com");
    let stored = monitor.update(55, &spec).await.unwrap().unwrap();
    assert_eq!(stored.name, "renamed");
}

#[tokio::test]
async fn test_delete_reports_whether_it_existed() {
    let (server, monitor) = setup().await;
    mount_empty(&server, "GET", "/filter/1").await;
    mount_get(
        &server,
        "/filter/2",
        json!({ "Id": 2, "Name": "quiet", "Rules": { "Time_Min": 1 } }),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/filter/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(!monitor.delete::<dotmon_core::FilterSpec>(1).await.unwrap());
    assert!(monitor.delete::<dotmon_core::FilterSpec>(2).await.unwrap());
}

#[tokio::test]
async fn test_exists_assumes_true_when_probe_fails() {
    let (server, monitor) = setup().await;
    Mock::given(method("GET"))
        .and(path("/device/9"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_empty(&server, "GET", "/device/10").await;

    assert!(monitor.exists::<dotmon_core::DeviceSpec>(9).await);
    assert!(!monitor.exists::<dotmon_core::DeviceSpec>(10).await);
}

// ── Lookups ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_find_group_ambiguous_lists_ids() {
    let (server, monitor) = setup().await;
    mount_get(&server, "/groups", json!([1, 2, 3])).await;
    mount_get(&server, "/group/1", json!({ "Id": 1, "Name": "ops" })).await;
    mount_get(&server, "/group/2", json!({ "Id": 2, "Name": "dev" })).await;
    mount_get(&server, "/group/3", json!({ "Id": 3, "Name": "ops" })).await;

    let err = monitor.find_group("ops").await.unwrap_err();
    match err {
        CoreError::Ambiguous { ids, .. } => assert_eq!(ids, vec![1, 3]),
        other => panic!("expected Ambiguous, got {other:?}"),
    }

    let (id, spec) = monitor.find_group("dev").await.unwrap();
    assert_eq!(id, 2);
    assert_eq!(spec.name, "dev");

    let err = monitor.find_group("nobody").await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
}

#[tokio::test]
async fn test_find_scheduler_by_id_or_name() {
    let (server, monitor) = setup().await;
    mount_get(&server, "/schedulers", json!([5])).await;
    mount_get(&server, "/scheduler/5", json!({ "Id": 5, "Name": "weekends" })).await;
    mount_empty(&server, "GET", "/scheduler/6").await;

    let (id, _) = monitor
        .find_scheduler(&Lookup::Name("weekends".into()))
        .await
        .unwrap();
    assert_eq!(id, 5);

    let (id, spec) = monitor.find_scheduler(&Lookup::Id(5)).await.unwrap();
    assert_eq!((id, spec.name.as_str()), (5, "weekends"));

    let err = monitor.find_scheduler(&Lookup::Id(6)).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
}

fn locations_body() -> Value {
    json!([
        { "Id": 1, "Name": "Dallas", "Available": true, "IsDeleted": false, "IsPrivate": false },
        { "Id": 11, "Name": "Hong Kong", "Available": true, "IsDeleted": false, "IsPrivate": false },
        { "Id": 23, "Name": "London", "Available": true, "IsDeleted": false, "IsPrivate": false },
        { "Id": 500, "Name": "Office", "Available": true, "IsDeleted": false, "IsPrivate": true }
    ])
}

#[tokio::test]
async fn test_select_locations_without_restrictive() {
    let (server, monitor) = setup().await;
    mount_get(&server, "/locations/1", locations_body()).await;

    let mut selection = LocationSelection::new(LocationFilter::Public);
    selection.include_restrictive = false;
    let ids: Vec<i64> = monitor
        .select_locations(&selection)
        .await
        .unwrap()
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec![1, 23]);
}

#[tokio::test]
async fn test_select_only_restrictive_is_empty_error() {
    let (server, monitor) = setup().await;
    mount_get(&server, "/locations/1", locations_body()).await;

    let mut selection = LocationSelection::new(LocationFilter::Ids(vec![11]));
    selection.include_restrictive = false;
    let err = monitor.select_locations(&selection).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }), "got {err:?}");

    selection.include_restrictive = true;
    let kept = monitor.select_locations(&selection).await.unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, 11);
}

#[tokio::test]
async fn test_select_locations_rejects_unknown_names() {
    let (server, monitor) = setup().await;
    mount_get(&server, "/locations/1", locations_body()).await;

    let selection =
        LocationSelection::new(LocationFilter::Names(vec!["London".into(), "Atlantis".into()]));
    let err = monitor.select_locations(&selection).await.unwrap_err();
    assert!(err.to_string().contains("Atlantis"));

    let selection = LocationSelection::new(LocationFilter::Ids(vec![23, 500]));
    let ids: Vec<i64> = monitor
        .select_locations(&selection)
        .await
        .unwrap()
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec![23, 500]);
}

#[tokio::test]
async fn test_select_locations_only_on_serverview() {
    let (_server, monitor) = setup().await;
    let mut selection = LocationSelection::new(LocationFilter::All);
    selection.platform_id = 3;
    let err = monitor.select_locations(&selection).await.unwrap_err();
    assert!(matches!(err, CoreError::ValidationFailed { .. }));
}
