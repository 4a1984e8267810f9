//! Integration tests for the drive upload client using a mock server.

use folio_drive::{DriveClient, DriveConfig, DriveError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> DriveClient {
    DriveClient::new(DriveConfig::new(server.uri(), "client-123")).expect("build client")
}

#[tokio::test]
async fn successful_upload_returns_the_public_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://cdn.example.com/media/abc123.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let url = client
        .upload_media("photo.jpg", vec![0xFF, 0xD8, 0xFF], "image/jpeg")
        .await
        .expect("upload");

    assert_eq!(url, "https://cdn.example.com/media/abc123.jpg");
}

#[tokio::test]
async fn unauthorized_maps_to_auth_required() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .upload_media("photo.jpg", vec![1, 2, 3], "image/jpeg")
        .await
        .unwrap_err();

    assert!(matches!(err, DriveError::AuthRequired));
}

#[tokio::test]
async fn server_failure_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(507).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .upload_media("clip.mp4", vec![0; 16], "video/mp4")
        .await
        .unwrap_err();

    match err {
        DriveError::ServerError { status, message } => {
            assert_eq!(status, 507);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn success_with_unparseable_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .upload_media("photo.png", vec![1], "image/png")
        .await
        .unwrap_err();

    assert!(matches!(err, DriveError::ParseError(_)));
}

#[tokio::test]
async fn upload_file_reads_from_disk_and_uploads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://cdn.example.com/media/from-disk.png"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("hero.png");
    std::fs::write(&file_path, [0x89, 0x50, 0x4E, 0x47]).expect("write file");

    let client = client_for(&server).await;
    let url = client.upload_file(&file_path).await.expect("upload");
    assert_eq!(url, "https://cdn.example.com/media/from-disk.png");
}

#[tokio::test]
async fn missing_file_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    // No mock mounted; a request would fail the test via connection refused
    let client = client_for(&server).await;

    let err = client
        .upload_file(std::path::Path::new("/nonexistent/file.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, DriveError::FileNotFound(_)));
}
