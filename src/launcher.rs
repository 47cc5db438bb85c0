use crate::config::LauncherConfig;
use crate::error::{BingMapsError, Result};
use crate::uri_builder::BingMapsUri;

use std::process::Command;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Something able to open a URI in the handler registered for its scheme
pub trait UriDispatcher: Send + Sync + 'static {
    /// Open `uri`. Called from a blocking thread, so waiting is fine.
    ///
    /// # Errors
    /// Returns an error if the handler could not be started or failed.
    fn dispatch(&self, uri: &str) -> Result<()>;
}

/// Opens URIs by running an external program with the URI as last argument
#[derive(Debug, Clone, Default)]
pub struct CommandDispatcher {
    config: LauncherConfig,
}

impl CommandDispatcher {
    #[must_use]
    pub fn new(config: LauncherConfig) -> Self {
        CommandDispatcher { config }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LauncherConfig::from_env())
    }
}

impl UriDispatcher for CommandDispatcher {
    fn dispatch(&self, uri: &str) -> Result<()> {
        let status = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(uri)
            .status()?;

        if !status.success() {
            return Err(BingMapsError::Launch(format!(
                "{} exited with {status}",
                self.config.program
            )));
        }

        Ok(())
    }
}

/// Launch the map application on `uri`.
///
/// The dispatch runs on tokio's blocking pool. Failures are logged and
/// swallowed: the returned handle completes the same way whether the map
/// opened or not, so callers may await it or simply drop it.
///
/// Must be called from within a tokio runtime.
pub fn show_map<D: UriDispatcher>(dispatcher: Arc<D>, uri: &BingMapsUri) -> JoinHandle<()> {
    let uri = uri.build();

    tokio::task::spawn_blocking(move || {
        debug!("Dispatching {uri}");
        if let Err(e) = dispatcher.dispatch(&uri) {
            warn!("Could not launch {uri}: {e}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ENV_LOCK, LAUNCHER_ARGS_VAR, LAUNCHER_VAR};
    use crate::types::MapStyle;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDispatcher {
        seen: Mutex<Vec<String>>,
    }

    impl UriDispatcher for RecordingDispatcher {
        fn dispatch(&self, uri: &str) -> Result<()> {
            self.seen.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    struct FailingDispatcher;

    impl UriDispatcher for FailingDispatcher {
        fn dispatch(&self, _uri: &str) -> Result<()> {
            Err(BingMapsError::Launch("no handler registered".to_string()))
        }
    }

    #[tokio::test]
    async fn test_show_map_hands_over_built_uri() {
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let mut uri = BingMapsUri::new();
        uri.query("coffee").set_map_style(MapStyle::Road);

        show_map(Arc::clone(&dispatcher), &uri).await.unwrap();

        assert_eq!(
            *dispatcher.seen.lock().unwrap(),
            vec!["bingmaps:?q=coffee&sty=r".to_string()]
        );
    }

    #[tokio::test]
    async fn test_show_map_swallows_dispatch_failure() {
        let uri = BingMapsUri::new();
        let handle = show_map(Arc::new(FailingDispatcher), &uri);

        assert!(handle.await.is_ok());
    }

    struct PanickingDispatcher;

    impl UriDispatcher for PanickingDispatcher {
        fn dispatch(&self, _uri: &str) -> Result<()> {
            panic!("launcher crashed");
        }
    }

    #[tokio::test]
    async fn test_show_map_reports_dispatcher_panic_as_join_error() {
        let uri = BingMapsUri::new();
        let handle = show_map(Arc::new(PanickingDispatcher), &uri);

        let err = handle.await.unwrap_err();
        assert!(err.is_panic());
    }

    #[tokio::test]
    async fn test_missing_launcher_program_is_an_io_error() {
        let dispatcher = CommandDispatcher::new(LauncherConfig {
            program: "bingmaps-launcher-that-does-not-exist".to_string(),
            args: Vec::new(),
        });

        let result = tokio::task::spawn_blocking(move || dispatcher.dispatch("bingmaps:?q=x"))
            .await
            .unwrap();

        assert!(matches!(result, Err(BingMapsError::Io(_))));
    }

    #[test]
    fn test_dispatcher_from_env_defaults_without_variables() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var(LAUNCHER_VAR);
        std::env::remove_var(LAUNCHER_ARGS_VAR);

        let dispatcher = CommandDispatcher::from_env();

        assert_eq!(dispatcher.config, LauncherConfig::default());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_launcher_exit_status_is_reported() {
        let dispatcher = CommandDispatcher::new(LauncherConfig {
            program: "false".to_string(),
            args: Vec::new(),
        });

        let result = dispatcher.dispatch("bingmaps:?q=x");

        assert!(matches!(result, Err(BingMapsError::Launch(msg)) if msg.starts_with("false exited")));
    }
}
