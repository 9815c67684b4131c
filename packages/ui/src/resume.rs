//! Résumé download with a fixed save-as name.
//!
//! The button fetches the configured PDF and hands the bytes to the browser as a
//! synthetic download, so the file always lands as
//! [`ResumeConfig::download_name`](content::ResumeConfig) whatever the source is
//! called. If the fetch (or the synthetic download) fails, the PDF is opened in a
//! new browsing context instead. That fallback is the whole recovery story: no
//! message, no retry, no timeout.
//!
//! All browser interaction goes through [`ResumeHost`], so the policy in
//! [`download_resume`] runs the same against the real browser ([`BrowserHost`] on
//! WASM) and against test doubles.

use content::SiteConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DownloadError {
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("browser downloads are not available on this platform")]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResumeOutcome {
    /// The PDF was saved under `file_name`.
    Downloaded { file_name: String },
    /// The fallback ran: `url` was opened directly.
    OpenedDirectly { url: String },
}

/// The browser capabilities the download needs.
pub trait ResumeHost {
    /// Fetch `url`, failing on transport errors and non-success statuses.
    fn fetch(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, DownloadError>>;
    /// Offer `bytes` to the user as a download named `file_name`.
    fn save_as(&self, bytes: Vec<u8>, file_name: &str) -> Result<(), DownloadError>;
    /// Open `url` in a new browsing context.
    fn open_in_new_context(&self, url: &str);
}

/// Fetch the résumé and save it under the configured name, or open it
/// directly when that is not possible.
pub async fn download_resume<H: ResumeHost>(host: &H, config: &SiteConfig) -> ResumeOutcome {
    let url = config.resume_url();
    let file_name = &config.resume.download_name;

    let saved = match host.fetch(&url).await {
        Ok(bytes) => host.save_as(bytes, file_name),
        Err(e) => Err(e),
    };

    match saved {
        Ok(()) => {
            tracing::debug!("Saved {url} as {file_name}");
            ResumeOutcome::Downloaded {
                file_name: file_name.clone(),
            }
        }
        Err(e) => {
            tracing::warn!("Resume download failed ({e}), opening {url} directly");
            host.open_in_new_context(&url);
            ResumeOutcome::OpenedDirectly { url }
        }
    }
}

/// Cleanup after the synthetic click. The download has already started, so a
/// cleanup failure is logged and the save still counts as done.
#[cfg(any(target_arch = "wasm32", test))]
fn finish_save<E: std::fmt::Debug>(cleanup: Result<(), E>) -> Result<(), DownloadError> {
    if let Err(e) = cleanup {
        tracing::warn!("Failed to revoke resume object URL: {e:?}");
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHost;
#[cfg(target_arch = "wasm32")]
pub type PlatformHost = BrowserHost;

#[cfg(not(target_arch = "wasm32"))]
pub use headless::HeadlessHost;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHost = HeadlessHost;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{finish_save, DownloadError, ResumeHost};

    /// `fetch` + `Blob` + object URL + a throwaway `<a download>`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserHost;

    fn js_error(err: JsValue) -> DownloadError {
        DownloadError::Transport(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    fn missing(what: &str) -> DownloadError {
        DownloadError::Transport(format!("{what} unavailable"))
    }

    impl ResumeHost for BrowserHost {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
            let window = web_sys::window().ok_or_else(|| missing("window"))?;
            let response = JsFuture::from(window.fetch_with_str(url))
                .await
                .map_err(js_error)?;
            let response: web_sys::Response =
                response.dyn_into().map_err(|_| missing("response"))?;
            if !response.ok() {
                return Err(DownloadError::Status(response.status()));
            }
            let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
                .await
                .map_err(js_error)?;
            Ok(js_sys::Uint8Array::new(&buffer).to_vec())
        }

        fn save_as(&self, bytes: Vec<u8>, file_name: &str) -> Result<(), DownloadError> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| missing("document"))?;
            let body = document.body().ok_or_else(|| missing("body"))?;

            let data = js_sys::Uint8Array::from(bytes.as_slice());
            let parts = js_sys::Array::of1(&data);
            let options = web_sys::BlobPropertyBag::new();
            options.set_type("application/pdf");
            let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                .map_err(js_error)?;
            let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

            let anchor: web_sys::HtmlAnchorElement = document
                .create_element("a")
                .map_err(js_error)?
                .dyn_into()
                .map_err(|_| missing("anchor element"))?;
            anchor.set_href(&object_url);
            anchor.set_download(file_name);
            body.append_child(&anchor).map_err(js_error)?;
            anchor.click();
            anchor.remove();

            finish_save(web_sys::Url::revoke_object_url(&object_url))
        }

        fn open_in_new_context(&self, url: &str) {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::error!("Failed to open {url}: {e:?}");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use super::{DownloadError, ResumeHost};

    /// Stand-in for renderers without a browser (SSR, tests): nothing can be
    /// fetched, so every attempt takes the fallback path.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct HeadlessHost;

    impl ResumeHost for HeadlessHost {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, DownloadError> {
            Err(DownloadError::Unsupported)
        }

        fn save_as(&self, _bytes: Vec<u8>, _file_name: &str) -> Result<(), DownloadError> {
            Err(DownloadError::Unsupported)
        }

        fn open_in_new_context(&self, url: &str) {
            tracing::info!("Would open {url} in a new window");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every call; `fetch` answers with the configured result.
    struct RecordingHost {
        response: Result<Vec<u8>, DownloadError>,
        save_result: Result<(), DownloadError>,
        fetched: RefCell<Vec<String>>,
        saved: RefCell<Vec<(Vec<u8>, String)>>,
        opened: RefCell<Vec<String>>,
    }

    impl RecordingHost {
        fn answering(response: Result<Vec<u8>, DownloadError>) -> Self {
            Self {
                response,
                save_result: Ok(()),
                fetched: RefCell::default(),
                saved: RefCell::default(),
                opened: RefCell::default(),
            }
        }
    }

    impl ResumeHost for RecordingHost {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
            self.fetched.borrow_mut().push(url.to_string());
            self.response.clone()
        }

        fn save_as(&self, bytes: Vec<u8>, file_name: &str) -> Result<(), DownloadError> {
            self.saved.borrow_mut().push((bytes, file_name.to_string()));
            self.save_result.clone()
        }

        fn open_in_new_context(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    #[tokio::test]
    async fn test_success_saves_under_fixed_name() {
        let host = RecordingHost::answering(Ok(b"%PDF-1.7".to_vec()));
        let mut config = SiteConfig::default();
        config.resume.path = "files/cv-final-v3.pdf".to_string();

        let outcome = download_resume(&host, &config).await;

        assert_eq!(
            outcome,
            ResumeOutcome::Downloaded {
                file_name: "Unique_Patel_Resume.pdf".to_string()
            }
        );
        assert_eq!(*host.fetched.borrow(), ["/files/cv-final-v3.pdf"]);
        let saved = host.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, b"%PDF-1.7");
        assert_eq!(saved[0].1, "Unique_Patel_Resume.pdf");
        assert!(host.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_bad_status_opens_resource_directly() {
        let host = RecordingHost::answering(Err(DownloadError::Status(404)));
        let config = SiteConfig::default().with_base_url("/portfolio/");

        let outcome = download_resume(&host, &config).await;

        assert_eq!(
            outcome,
            ResumeOutcome::OpenedDirectly {
                url: "/portfolio/Unique_Patel_Resume.pdf".to_string()
            }
        );
        assert!(host.saved.borrow().is_empty());
        assert_eq!(*host.opened.borrow(), ["/portfolio/Unique_Patel_Resume.pdf"]);
    }

    #[tokio::test]
    async fn test_transport_error_opens_resource_directly() {
        let host = RecordingHost::answering(Err(DownloadError::Transport("offline".into())));
        let outcome = download_resume(&host, &SiteConfig::default()).await;
        assert!(matches!(outcome, ResumeOutcome::OpenedDirectly { .. }));
        assert!(host.saved.borrow().is_empty());
        assert_eq!(host.opened.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_falls_back() {
        let mut host = RecordingHost::answering(Ok(vec![1, 2, 3]));
        host.save_result = Err(DownloadError::Transport("blob".into()));

        let outcome = download_resume(&host, &SiteConfig::default()).await;

        assert_eq!(
            outcome,
            ResumeOutcome::OpenedDirectly {
                url: "/Unique_Patel_Resume.pdf".to_string()
            }
        );
        assert_eq!(host.saved.borrow().len(), 1);
        assert_eq!(host.opened.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_headless_host_always_falls_back() {
        let outcome = download_resume(&HeadlessHost, &SiteConfig::default()).await;
        assert!(matches!(outcome, ResumeOutcome::OpenedDirectly { .. }));
    }

    #[test]
    fn test_cleanup_failure_after_click_is_not_a_failed_save() {
        assert_eq!(finish_save::<&str>(Ok(())), Ok(()));
        assert_eq!(finish_save(Err("revoke failed")), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DownloadError::Status(503).to_string(),
            "server answered with status 503"
        );
    }
}
