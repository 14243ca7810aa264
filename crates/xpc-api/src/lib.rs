//! Host-side access to xPC Target real-time targets.
//!
//! The crate has two layers. [`raw`] holds the bindings generated from the
//! vendor headers by `xpcgen`: the native entry-point table, the constant
//! groups and one checked convenience method per native function, all
//! routed through a single call-then-check step that turns the library's
//! last-error register into [`XpcError::Native`]. [`XpcApi`] is the session
//! facade on top: connection lifecycle, the block tree of the loaded
//! application, scopes and the target file system.
//!
//! ```no_run
//! use xpc_api::{XpcApi, SCTYPE};
//!
//! # fn main() -> xpc_api::Result<()> {
//! let mut api = XpcApi::load("xpcapi.dll")?;
//! api.open_tcp_ip("192.168.0.10", 22222)?;
//! api.load_app("models/plant.dlm")?;
//!
//! let model = api.model()?;
//! if let Some(gain) = model.lookup("Controller.Gain.Gain").as_param() {
//!     gain.set(&api, 2.5)?;
//! }
//!
//! let scope = api.add_scope(SCTYPE::HOST, None)?;
//! scope.start(&api)?;
//! api.close()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod file;
pub mod library;
pub mod model;
pub mod raw;
pub mod scope;
pub mod session;

pub use config::{Connection, XpcConfig};
pub use error::{Result, XpcError};
pub use file::{FileInfo, RemoteFile};
pub use library::NativeLibrary;
pub use model::{Block, Collision, Model, Node, Param, Signal};
pub use raw::types::{DirStruct, DiskInfo, ScopeData};
pub use raw::{XpcFunctions, XpcRaw, COMMTYP, LGMOD, SCMODE, SCST, SCTYPE, TRIGMD, TRIGSLOPE};
pub use scope::Scope;
pub use session::{SessionState, XpcApi};
