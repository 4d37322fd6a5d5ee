pub mod api_client;
pub mod notify;
pub mod service_utility;
pub mod stub_service;
pub mod system_service;

pub use api_client::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use notify::Notify;
pub use service_utility::{ClientConfig, Payload, ResponseAction, ServiceClient, ServiceError};
pub use stub_service::StubService;
pub use system_service::SystemService;
