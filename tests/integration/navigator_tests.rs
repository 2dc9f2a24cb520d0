//! Record navigator against the stub record server

use buzz_server::{
    config::RecordsConfig,
    error::AppError,
    models::{NavigationMode, RecordFragment},
    services::records::RecordNavigator,
};

use crate::stub::spawn_upstream;

fn navigator(base_url: String) -> RecordNavigator {
    RecordNavigator::new(&RecordsConfig {
        base_url,
        timeout_seconds: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_next_then_end_of_file() {
    let navigator = navigator(spawn_upstream().await);

    let first = navigator.next(NavigationMode::Next).await.unwrap();
    assert!(matches!(first, RecordFragment::Html(ref html) if html.contains("=LDR")));

    let second = navigator.next(NavigationMode::Next).await.unwrap();
    assert!(second.is_end_of_file());
    assert!(second.html().starts_with("<p>End of file"));
}

#[tokio::test]
async fn test_next_with_errors_exhausted() {
    let navigator = navigator(spawn_upstream().await);

    let fragment = navigator.next(NavigationMode::NextWithErrors).await.unwrap();
    assert!(fragment.is_end_of_file());
}

#[tokio::test]
async fn test_position() {
    let navigator = navigator(spawn_upstream().await);
    assert_eq!(navigator.position().await.unwrap(), 3);
}

#[tokio::test]
async fn test_unreachable_record_server() {
    let upstream = spawn_upstream().await;
    let navigator = navigator(format!("{}/missing", upstream));

    let err = navigator.position().await.unwrap_err();
    assert!(matches!(err, AppError::RecordServer(_)));
}
