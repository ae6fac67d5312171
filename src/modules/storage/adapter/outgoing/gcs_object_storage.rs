use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::storage::application::{
    domain::entities::{FileUpload, MediaFolder, StoredFile},
    ports::outgoing::{ObjectStorage, StorageError},
};

/// TTL of the signed URLs the backend uses for its own PUT and DELETE calls.
const SIGNED_URL_TTL: Duration = Duration::from_secs(5 * 60);

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn object_key(folder: MediaFolder, file: &FileUpload) -> String {
    let stem = file.stem();
    let id = Uuid::new_v4().simple();
    match file.extension() {
        Some(ext) => format!("{}/{}-{}.{}", folder.as_str(), stem, id, ext),
        None => format!("{}/{}-{}", folder.as_str(), stem, id),
    }
}

fn map_storage_error(msg: &str) -> StorageError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") || m.contains("403") {
        StorageError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        StorageError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") {
        StorageError::Configuration(msg.to_string())
    } else {
        StorageError::Transport(msg.to_string())
    }
}

/// Internal seam to make the adapter testable without a bucket.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn put_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn put_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .put_object(bucket_resource, object_name, content_type, bytes)
            .await
    }

    async fn delete_object(&self, bucket_resource: &str, object_name: &str) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

/// Production adapter for the [`ObjectStorage`] port.
#[derive(Clone)]
pub struct GcsObjectStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
    public_base_url: String,
}

impl GcsObjectStorage {
    /// Synchronous constructor - client is initialized lazily on first use.
    ///
    /// `public_base_url` is the prefix clients fetch objects from. It defaults to the bucket's
    /// public endpoint.
    pub fn new(bucket: String, public_base_url: Option<String>) -> Self {
        let public_base_url = public_base_url
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| format!("https://storage.googleapis.com/{}", bucket));

        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
            public_base_url,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, StorageError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok::<_, Box<dyn std::error::Error + Send + Sync>>(
                    Box::new(real_client) as Box<dyn GcsClient>
                )
            })
            .await
            .map(|boxed| &**boxed)
            .map_err(|e| StorageError::Configuration(e.to_string()))
    }

    fn public_url(&self, object_name: &str) -> String {
        format!("{}/{}", self.public_base_url, object_name)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str, public_base_url: Option<String>) -> Self {
        let storage = Self::new(bucket.to_string(), public_base_url);
        let _ = storage.client.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);
        storage
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn upload(&self, folder: MediaFolder, file: FileUpload) -> Result<StoredFile, StorageError> {
        let client = self.get_client().await?;

        let bucket = bucket_resource(&self.bucket);
        let object = object_key(folder, &file);
        let size = file.size();

        client
            .put_object(&bucket, &object, &file.content_type, file.bytes)
            .await
            .map_err(|e| {
                tracing::error!(object = %object, error = %e, "Object upload failed");
                map_storage_error(&e)
            })?;

        tracing::debug!(object = %object, size, "Object uploaded");

        Ok(StoredFile {
            url: self.public_url(&object),
            storage_key: object,
            original_name: None,
        })
    }

    async fn delete(&self, storage_key: &str) -> Result<(), StorageError> {
        let client = self.get_client().await?;
        let bucket = bucket_resource(&self.bucket);

        client
            .delete_object(&bucket, storage_key)
            .await
            .map_err(|e| map_storage_error(&e))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage + reqwest)
// ============================================================================

struct RealGcsClient {
    signer: google_cloud_auth::signer::Signer,
    http: reqwest::Client,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS signer...");

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                let msg = e.to_string();
                tracing::error!("Failed to build GCS signer: {:?}", e);

                if msg.contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }

                e
            })?;

        tracing::info!("GCS signer created successfully");

        Ok(Self {
            signer,
            http: reqwest::Client::new(),
        })
    }

    async fn signed_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        method: google_cloud_storage::http::Method,
    ) -> Result<String, String> {
        google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(method)
        .with_expiration(SIGNED_URL_TTL)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn put_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        let url = self
            .signed_url(bucket_resource, object_name, google_cloud_storage::http::Method::PUT)
            .await?;

        let response = self
            .http
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("upload returned {}", status.as_u16()))
        }
    }

    async fn delete_object(&self, bucket_resource: &str, object_name: &str) -> Result<(), String> {
        let url = self
            .signed_url(bucket_resource, object_name, google_cloud_storage::http::Method::DELETE)
            .await?;

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        // An object that is already gone counts as deleted
        if status.is_success() || status.as_u16() == 404 {
            Ok(())
        } else {
            Err(format!("delete returned {}", status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeGcsClient {
        puts: Mutex<Vec<(String, String, String, usize)>>,
        deletes: Mutex<Vec<(String, String)>>,
        put_result: Mutex<Option<String>>,
        delete_result: Mutex<Option<String>>,
    }

    impl FakeGcsClient {
        fn fail_puts(&self, msg: &str) {
            *self.put_result.lock().unwrap() = Some(msg.to_string());
        }

        fn fail_deletes(&self, msg: &str) {
            *self.delete_result.lock().unwrap() = Some(msg.to_string());
        }
    }

    #[async_trait]
    impl GcsClient for FakeGcsClient {
        async fn put_object(
            &self,
            bucket_resource: &str,
            object_name: &str,
            content_type: &str,
            bytes: Vec<u8>,
        ) -> Result<(), String> {
            self.puts.lock().unwrap().push((
                bucket_resource.to_string(),
                object_name.to_string(),
                content_type.to_string(),
                bytes.len(),
            ));
            match self.put_result.lock().unwrap().clone() {
                Some(msg) => Err(msg),
                None => Ok(()),
            }
        }

        async fn delete_object(&self, bucket_resource: &str, object_name: &str) -> Result<(), String> {
            self.deletes
                .lock()
                .unwrap()
                .push((bucket_resource.to_string(), object_name.to_string()));
            match self.delete_result.lock().unwrap().clone() {
                Some(msg) => Err(msg),
                None => Ok(()),
            }
        }
    }

    fn photo() -> FileUpload {
        FileUpload::new("Front Row.PNG", "image/png", vec![7; 32])
    }

    #[tokio::test]
    async fn upload_writes_into_folder_and_returns_public_url() {
        let fake = Arc::new(FakeGcsClient::default());
        let storage = GcsObjectStorage::with_client(fake.clone(), "gulfcoast-media", None);

        let stored = storage.upload(MediaFolder::Venues, photo()).await.unwrap();

        let puts = fake.puts.lock().unwrap().clone();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].0, "projects/_/buckets/gulfcoast-media");
        assert!(puts[0].1.starts_with("gulf-music/venues/front-row-"));
        assert!(puts[0].1.ends_with(".png"));
        assert_eq!(puts[0].2, "image/png");
        assert_eq!(puts[0].3, 32);

        assert_eq!(stored.storage_key, puts[0].1);
        assert_eq!(
            stored.url,
            format!("https://storage.googleapis.com/gulfcoast-media/{}", stored.storage_key)
        );
    }

    #[tokio::test]
    async fn custom_public_base_url_is_used_without_trailing_slash() {
        let fake = Arc::new(FakeGcsClient::default());
        let storage = GcsObjectStorage::with_client(
            fake,
            "gulfcoast-media",
            Some("https://cdn.gulfcoastmusic.test/".to_string()),
        );

        let stored = storage.upload(MediaFolder::News, photo()).await.unwrap();
        assert!(stored.url.starts_with("https://cdn.gulfcoastmusic.test/gulf-music/news/"));
    }

    #[tokio::test]
    async fn keys_are_unique_per_upload() {
        let fake = Arc::new(FakeGcsClient::default());
        let storage = GcsObjectStorage::with_client(fake, "b", None);

        let a = storage.upload(MediaFolder::Artists, photo()).await.unwrap();
        let b = storage.upload(MediaFolder::Artists, photo()).await.unwrap();
        assert_ne!(a.storage_key, b.storage_key);
    }

    #[tokio::test]
    async fn upload_maps_permission_errors() {
        let fake = Arc::new(FakeGcsClient::default());
        fake.fail_puts("upload returned 403");
        let storage = GcsObjectStorage::with_client(fake, "b", None);

        let err = storage.upload(MediaFolder::Artists, photo()).await.unwrap_err();
        assert_eq!(err, StorageError::AccessDenied);
    }

    #[tokio::test]
    async fn upload_maps_unknown_errors_to_transport() {
        let fake = Arc::new(FakeGcsClient::default());
        fake.fail_puts("connection reset by peer");
        let storage = GcsObjectStorage::with_client(fake, "b", None);

        let err = storage.upload(MediaFolder::Artists, photo()).await.unwrap_err();
        assert!(matches!(err, StorageError::Transport(_)));
    }

    #[tokio::test]
    async fn delete_targets_bucket_object() {
        let fake = Arc::new(FakeGcsClient::default());
        let storage = GcsObjectStorage::with_client(fake.clone(), "gulfcoast-media", None);

        storage.delete("gulf-music/news/a.png").await.unwrap();

        let deletes = fake.deletes.lock().unwrap().clone();
        assert_eq!(
            deletes,
            vec![(
                "projects/_/buckets/gulfcoast-media".to_string(),
                "gulf-music/news/a.png".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn delete_maps_missing_bucket() {
        let fake = Arc::new(FakeGcsClient::default());
        fake.fail_deletes("Bucket not found (404)");
        let storage = GcsObjectStorage::with_client(fake, "b", None);

        let err = storage.delete("x").await.unwrap_err();
        assert_eq!(err, StorageError::BucketNotFound);
    }

    #[test]
    fn object_key_without_extension() {
        let file = FileUpload::new("demo", "audio/mpeg", vec![]);
        let key = object_key(MediaFolder::ArtistAudio, &file);
        assert!(key.starts_with("gulf-music/audio/demo-"));
        assert!(!key.contains('.'));
    }
}
