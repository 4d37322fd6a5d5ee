// ============================================================================
// TEST SUPPORT - Dobles de los puertos del navegador
// ============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::models::ToastOptions;
use crate::platform::{History, Navigator, Overlay, Scheduler, Spawner, Toaster, Viewport};
use crate::services::api_client::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn assign(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingViewport {
    scrolls: Rc<RefCell<Vec<(f64, f64)>>>,
}

impl RecordingViewport {
    pub fn scrolls(&self) -> Vec<(f64, f64)> {
        self.scrolls.borrow().clone()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to(&self, x: f64, y: f64) {
        self.scrolls.borrow_mut().push((x, y));
    }
}

/// Guarda los futures hasta que el test llama `run_all`
#[derive(Clone, Default)]
pub struct ManualSpawner {
    tasks: Rc<RefCell<Vec<LocalBoxFuture<'static, ()>>>>,
}

impl ManualSpawner {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn run_all(&self) {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        for task in tasks {
            futures::executor::block_on(task);
        }
    }
}

impl Spawner for ManualSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }
}

type ScheduledTask = (u32, Box<dyn FnOnce()>);

#[derive(Clone, Default)]
pub struct ManualScheduler {
    tasks: Rc<RefCell<Vec<ScheduledTask>>>,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_all(&self) {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push((delay_ms, task));
    }
}

#[derive(Clone, Default)]
pub struct RecordingToaster {
    shown: Rc<RefCell<Vec<ToastOptions>>>,
}

impl RecordingToaster {
    pub fn shown(&self) -> Vec<ToastOptions> {
        self.shown.borrow().clone()
    }
}

impl Toaster for RecordingToaster {
    fn show(&self, options: &ToastOptions) {
        self.shown.borrow_mut().push(options.clone());
    }
}

/// Respuestas encoladas en orden; sin respuesta encolada devuelve 404
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            url: String::new(),
            body: body.to_string(),
        }));
    }

    pub fn push_failure(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        let next = self.responses.borrow_mut().pop_front();

        Box::pin(async move {
            next.unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    url: String::new(),
                    body: String::new(),
                })
            })
            .map(|response| HttpResponse { url, ..response })
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingHistory {
    current: Rc<RefCell<String>>,
    pushed: Rc<RefCell<Vec<String>>>,
    replaced: Rc<RefCell<Vec<String>>>,
    title: Rc<RefCell<Option<String>>>,
    fail_next: Rc<RefCell<Option<String>>>,
}

impl RecordingHistory {
    pub fn at(url: &str) -> Self {
        let history = Self::default();
        *history.current.borrow_mut() = url.to_string();
        history
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }

    pub fn replaced(&self) -> Vec<String> {
        self.replaced.borrow().clone()
    }

    pub fn title(&self) -> Option<String> {
        self.title.borrow().clone()
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_next.borrow_mut() = Some(message.to_string());
    }

    fn record(&self, log: &Rc<RefCell<Vec<String>>>, url: &str) -> Result<(), String> {
        if let Some(message) = self.fail_next.borrow_mut().take() {
            return Err(message);
        }
        log.borrow_mut().push(url.to_string());
        *self.current.borrow_mut() = url.to_string();
        Ok(())
    }
}

impl History for RecordingHistory {
    fn current_url(&self) -> String {
        self.current.borrow().clone()
    }

    fn push_state(&self, url: &str) -> Result<(), String> {
        self.record(&self.pushed, url)
    }

    fn replace_state(&self, url: &str) -> Result<(), String> {
        self.record(&self.replaced, url)
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = Some(title.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingOverlay {
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingOverlay {
    pub fn record(&self, event: &'static str) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.borrow().clone()
    }
}

impl Overlay for RecordingOverlay {
    fn show(&self) {
        self.record("show");
    }

    fn hide(&self) {
        self.record("hide");
    }
}
