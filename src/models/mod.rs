pub mod manifest;
pub mod navigation;
pub mod notification;
pub mod server_messages;
pub mod stub_model;

pub use manifest::VersionManifest;
pub use navigation::{NavigationInstruction, RouteConfig};
pub use notification::{Severity, ToastOptions, ToastOverrides};
pub use server_messages::ServerMessages;
pub use stub_model::StubModel;
