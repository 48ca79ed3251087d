use super::*;

use std::io::Write;

struct FailingSource;

#[async_trait]
impl ImageSource for FailingSource {
    async fn read_blob(&self) -> Result<ImageBlob, IngestError> {
        Err(IngestError::Read(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        )))
    }
}

fn write_temp(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(bytes).expect("write temp file");
    file
}

#[test]
fn encodes_image_blobs_as_data_uris() {
    let blob = ImageBlob {
        mime_type: Some("image/png".into()),
        bytes: b"hello".to_vec(),
    };
    let image = encode_data_uri(&blob).expect("encode");
    assert_eq!(image.as_str(), "data:image/png;base64,aGVsbG8=");
}

#[test]
fn rejects_non_images_and_empty_files() {
    let text = ImageBlob {
        mime_type: Some("text/plain".into()),
        bytes: b"hello".to_vec(),
    };
    assert!(matches!(
        encode_data_uri(&text),
        Err(IngestError::UnsupportedType(mime)) if mime == "text/plain"
    ));

    let unknown = ImageBlob {
        mime_type: None,
        bytes: b"hello".to_vec(),
    };
    assert!(matches!(
        encode_data_uri(&unknown),
        Err(IngestError::UnsupportedType(_))
    ));

    let empty = ImageBlob {
        mime_type: Some("image/gif".into()),
        bytes: Vec::new(),
    };
    assert!(matches!(encode_data_uri(&empty), Err(IngestError::Empty)));
}

#[tokio::test]
async fn reads_local_files_and_guesses_the_mime_type() {
    let file = write_temp(".png", &[0x89, b'P', b'N', b'G']);
    let source = LocalFileSource::new(file.path());

    let image = ingest_image(&source).await.expect("ingest");
    assert_eq!(image.mime_type(), Some("image/png"));
    assert_eq!(image.as_str(), "data:image/png;base64,iVBORw==");
}

#[tokio::test]
async fn missing_files_surface_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = LocalFileSource::new(dir.path().join("absent.jpg"));
    assert!(matches!(
        ingest_image(&source).await,
        Err(IngestError::Read(_))
    ));
}

#[tokio::test]
async fn text_files_are_not_images() {
    let file = write_temp(".txt", b"menu");
    let source = LocalFileSource::new(file.path());
    assert!(matches!(
        ingest_image(&source).await,
        Err(IngestError::UnsupportedType(_))
    ));
}

#[tokio::test]
async fn source_failures_propagate() {
    assert!(matches!(
        ingest_image(&FailingSource).await,
        Err(IngestError::Read(_))
    ));
}

#[test]
fn missing_offers_surface_as_stale_targets() {
    assert_eq!(ImageOutcome::from(EditOutcome::Applied), ImageOutcome::Applied);
    assert_eq!(
        ImageOutcome::from(EditOutcome::UnknownOffer),
        ImageOutcome::StaleTarget
    );
}
