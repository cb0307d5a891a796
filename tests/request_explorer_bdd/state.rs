//! Scenario state, recording collaborators and runtime/server setup for the
//! request explorer BDD tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use docket::telemetry::test_support::RecordingTelemetrySink;
use docket::{
    ApiCredentials, ApiEndpoint, Catalog, HttpCollectionsGateway, Navigator, Notifier,
    RequestExplorer, RequestsSession, Route, TelemetrySink,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the requests collection on the mock server.
pub(crate) const REQUESTS_PATH: &str = "/api/requests";

/// Runtime handle that can be stored in an rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Notifier that keeps every message it is shown.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}

/// Navigator that keeps every route it is asked to open.
#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

/// State shared across steps in a request explorer scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ExplorerState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) catalog: Slot<Arc<Catalog>>,
    pub(crate) session: Slot<RequestsSession>,
    pub(crate) explorer: Slot<RequestExplorer>,
    pub(crate) notifier: Slot<Arc<RecordingNotifier>>,
    pub(crate) navigator: Slot<Arc<RecordingNavigator>>,
    pub(crate) telemetry: Slot<Arc<RecordingTelemetrySink>>,
}

impl ExplorerState {
    /// Ensures the runtime and mock server exist, returning the runtime.
    pub(crate) fn ensure_runtime_and_server(&self) -> SharedRuntime {
        if self.runtime.with_ref(|_| ()).is_none() {
            let runtime = Runtime::new()
                .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
            self.runtime.set(SharedRuntime::new(runtime));
        }

        let shared_runtime = self
            .runtime
            .get()
            .unwrap_or_else(|| panic!("runtime not initialised after set"));

        if self.server.with_ref(|_| ()).is_none() {
            self.server.set(shared_runtime.block_on(MockServer::start()));
        }

        shared_runtime
    }

    /// Serves `response` for every requests collection query.
    pub(crate) fn mount_requests_response(&self, response: ResponseTemplate) {
        let runtime = self.ensure_runtime_and_server();
        let mock = Mock::given(method("GET"))
            .and(path(REQUESTS_PATH))
            .respond_with(response);

        self.server
            .with_ref(|server| runtime.block_on(mock.mount(server)))
            .unwrap_or_else(|| panic!("mock server not initialised"));
    }

    /// Builds a fresh explorer for the scenario's session and loads it
    /// through the HTTP gateway.
    pub(crate) fn load_new_explorer(&self) {
        let runtime = self.ensure_runtime_and_server();
        let gateway = self.gateway();
        let session = self.session_or_default();
        let catalog = self
            .catalog
            .get()
            .unwrap_or_else(|| Arc::new(Catalog::english()));
        let telemetry = self.shared_telemetry();
        let notifier = self.shared_notifier();

        let mut explorer = RequestExplorer::new(
            session,
            catalog,
            Arc::clone(&telemetry) as Arc<dyn TelemetrySink>,
        );
        runtime.block_on(explorer.load(&gateway, notifier.as_ref()));
        self.explorer.set(explorer);
    }

    /// Runs `f` against the loaded explorer.
    pub(crate) fn with_explorer<R>(&self, f: impl FnOnce(&mut RequestExplorer) -> R) -> R {
        self.explorer
            .with_mut(f)
            .unwrap_or_else(|| panic!("explorer not loaded"))
    }

    /// Returns the shared navigator, creating it on first use.
    pub(crate) fn shared_navigator(&self) -> Arc<RecordingNavigator> {
        if let Some(navigator) = self.navigator.get() {
            return navigator;
        }
        let navigator = Arc::new(RecordingNavigator::default());
        self.navigator.set(Arc::clone(&navigator));
        navigator
    }

    /// Returns the shared notifier, creating it on first use.
    pub(crate) fn shared_notifier(&self) -> Arc<RecordingNotifier> {
        if let Some(notifier) = self.notifier.get() {
            return notifier;
        }
        let notifier = Arc::new(RecordingNotifier::default());
        self.notifier.set(Arc::clone(&notifier));
        notifier
    }

    /// Returns the shared telemetry sink, creating it on first use.
    pub(crate) fn shared_telemetry(&self) -> Arc<RecordingTelemetrySink> {
        if let Some(sink) = self.telemetry.get() {
            return sink;
        }
        let sink = Arc::new(RecordingTelemetrySink::default());
        self.telemetry.set(Arc::clone(&sink));
        sink
    }

    fn session_or_default(&self) -> RequestsSession {
        if let Some(session) = self.session.get() {
            return session;
        }
        let session = RequestsSession::new();
        self.session.set(session.clone());
        session
    }

    fn gateway(&self) -> HttpCollectionsGateway {
        let uri = self
            .server
            .with_ref(MockServer::uri)
            .unwrap_or_else(|| panic!("mock server not initialised"));
        let endpoint = ApiEndpoint::parse(&uri)
            .unwrap_or_else(|error| panic!("mock server URL should parse: {error}"));
        let credentials = ApiCredentials::token("scenario-token")
            .unwrap_or_else(|error| panic!("token should be accepted: {error}"));
        HttpCollectionsGateway::new(endpoint, credentials, Duration::from_secs(5))
            .unwrap_or_else(|error| panic!("gateway should build: {error}"))
    }
}
