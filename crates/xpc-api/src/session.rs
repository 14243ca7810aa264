//! Session facade over the generated bindings.
//!
//! [`XpcApi`] tracks the connection lifecycle and the lazily built
//! [`Model`], and turns buffer-based native calls into plain Rust values.
//! Calls are strictly sequential: the native last-error register is global,
//! so the facade is not `Sync`.

use std::cell::OnceCell;
use std::os::raw::c_int;
use std::path::Path;

use crate::config::{Connection, XpcConfig};
use crate::decode::{self, encode, latin1, string_buffer};
use crate::error::{Result, XpcError};
use crate::model::Model;
use crate::raw::{XpcRaw, NO_PORT};

/// Required extension of application bundles.
pub const APP_EXTENSION: &str = "dlm";

/// Connection lifecycle of an [`XpcApi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No connection.
    Closed,
    /// Connected, no application loaded through this session.
    Open,
    /// Connected with an application loaded.
    Loaded,
}

/// A session with one target.
///
/// Closing is explicit: dropping an open session does not close it.
#[derive(Debug)]
pub struct XpcApi {
    raw: XpcRaw,
    state: SessionState,
    model: OnceCell<Model>,
}

impl XpcApi {
    /// Wrap an already loaded native layer.
    pub fn new(raw: XpcRaw) -> Self {
        Self {
            raw,
            state: SessionState::Closed,
            model: OnceCell::new(),
        }
    }

    /// Load the native library at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(XpcRaw::load(path)?))
    }

    /// Load the configured library, open the configured connection and
    /// apply the load time-out.
    pub fn connect(config: &XpcConfig) -> Result<Self> {
        let mut api = Self::load(config.library_path())?;
        match &config.connection {
            Some(Connection::Tcp { address, port }) => api.open_tcp_ip(address, *port)?,
            Some(Connection::Serial { port, baud }) => api.open_serial(*port, *baud)?,
            None => {}
        }
        if let Some(timeout) = config.load_timeout {
            api.set_load_timeout(timeout)?;
        }
        Ok(api)
    }

    /// The generated native layer.
    pub fn raw(&self) -> &XpcRaw {
        &self.raw
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    // --- lifecycle ---

    /// Open a network connection.
    pub fn open_tcp_ip(&mut self, address: &str, port: u16) -> Result<()> {
        let mut address_buf = encode(address)?;
        let mut port_buf = encode(&port.to_string())?;
        let handle =
            unsafe { self.raw.openTcpIpPort(address_buf.as_mut_ptr(), port_buf.as_mut_ptr()) }?;
        self.opened(handle);
        log::info!("opened TCP/IP session {handle} to {address}:{port}");
        Ok(())
    }

    /// Open a serial connection.
    pub fn open_serial(&mut self, com_port: i32, baud: i32) -> Result<()> {
        let handle = self.raw.openSerialPort(com_port, baud)?;
        self.opened(handle);
        log::info!("opened serial session {handle} on COM{com_port} at {baud} baud");
        Ok(())
    }

    /// Re-open the current connection after a target reboot.
    pub fn reopen(&mut self) -> Result<()> {
        let handle = self.raw.reOpenPort()?;
        self.opened(handle);
        log::info!("re-opened session {handle}");
        Ok(())
    }

    fn opened(&mut self, handle: c_int) {
        self.raw.set_port(handle);
        self.state = SessionState::Open;
        self.model.take();
    }

    /// Load an application bundle (`*.dlm`) onto the target.
    ///
    /// The bundle's directory and base name are passed separately.
    pub fn load_app(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        if !path.is_file() {
            return Err(XpcError::InvalidApplication {
                detail: format!("file {} does not exist", path.display()),
            });
        }
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(APP_EXTENSION));
        if !has_extension {
            return Err(XpcError::InvalidApplication {
                detail: format!("{} should have a .{APP_EXTENSION} extension", path.display()),
            });
        }

        let dir = path.parent().and_then(Path::to_str);
        let stem = path.file_stem().and_then(|s| s.to_str());
        let (Some(dir), Some(stem)) = (dir, stem) else {
            return Err(XpcError::InvalidApplication {
                detail: format!("{} is not a valid path", path.display()),
            });
        };
        let mut dir_buf = encode(dir)?;
        let mut stem_buf = encode(stem)?;
        unsafe { self.raw.loadApp(dir_buf.as_mut_ptr(), stem_buf.as_mut_ptr()) }?;

        self.state = SessionState::Loaded;
        self.model.take();
        log::info!("loaded application '{stem}' from {dir}");
        Ok(())
    }

    /// Unload the current application.
    pub fn unload_app(&mut self) -> Result<()> {
        self.raw.unloadApp()?;
        self.state = SessionState::Open;
        self.model.take();
        log::info!("unloaded application");
        Ok(())
    }

    /// Close the connection.
    ///
    /// The session handle and the model are cleared even when the native
    /// close reports an error. Closing a closed session is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.state == SessionState::Closed {
            return Ok(());
        }
        let result = self.raw.closePort();
        self.raw.set_port(NO_PORT);
        self.state = SessionState::Closed;
        self.model.take();
        log::info!("closed session");
        result
    }

    // --- application ---

    pub fn start_app(&self) -> Result<()> {
        self.raw.startApp()
    }

    pub fn stop_app(&self) -> Result<()> {
        self.raw.stopApp()
    }

    pub fn is_app_running(&self) -> Result<bool> {
        Ok(self.raw.isAppRunning()? != 0)
    }

    /// Name of the application loaded on the target.
    pub fn app_name(&self) -> Result<String> {
        let mut buf = string_buffer();
        unsafe { self.raw.getAppName(buf.as_mut_ptr()) }?;
        Ok(latin1(&buf))
    }

    /// Version of the native host library.
    pub fn api_version(&self) -> Result<String> {
        let version = self.raw.getAPIVersion()?;
        Ok(unsafe { decode::latin1_ptr(version) })
    }

    /// Version of the target kernel.
    pub fn target_version(&self) -> Result<String> {
        let mut buf = string_buffer();
        unsafe { self.raw.getTargetVersion(buf.as_mut_ptr()) }?;
        Ok(latin1(&buf))
    }

    /// Whether the target answers.
    pub fn ping(&self) -> Result<bool> {
        Ok(self.raw.targetPing()? != 0)
    }

    pub fn exec_time(&self) -> Result<f64> {
        self.raw.getExecTime()
    }

    pub fn stop_time(&self) -> Result<f64> {
        self.raw.getStopTime()
    }

    pub fn set_stop_time(&self, stop_time: f64) -> Result<()> {
        self.raw.setStopTime(stop_time)
    }

    pub fn sample_time(&self) -> Result<f64> {
        self.raw.getSampleTime()
    }

    pub fn set_sample_time(&self, sample_time: f64) -> Result<()> {
        self.raw.setSampleTime(sample_time)
    }

    /// Remote application load time-out in seconds.
    pub fn load_timeout(&self) -> Result<i32> {
        self.raw.getLoadTimeOut()
    }

    pub fn set_load_timeout(&self, seconds: i32) -> Result<()> {
        self.raw.setLoadTimeOut(seconds)
    }

    // --- signals ---

    pub fn num_signals(&self) -> Result<i32> {
        self.raw.getNumSignals()
    }

    /// Full block path of a signal, `/`-separated.
    pub fn signal_name(&self, index: i32) -> Result<String> {
        let mut buf = string_buffer();
        unsafe { self.raw.getSignalName(index, buf.as_mut_ptr()) }?;
        Ok(latin1(&buf))
    }

    /// Human-readable label of a signal, empty when it has none.
    pub fn signal_label(&self, index: i32) -> Result<String> {
        let mut buf = string_buffer();
        unsafe { self.raw.getSignalLabel(index, buf.as_mut_ptr()) }?;
        Ok(latin1(&buf))
    }

    pub fn signal_index(&self, name: &str) -> Result<i32> {
        let mut name = encode(name)?;
        unsafe { self.raw.getSignalIdx(name.as_mut_ptr()) }
    }

    /// Indices of every signal carrying `label`.
    pub fn signal_indices_from_label(&self, label: &str) -> Result<Vec<i32>> {
        let mut label = encode(label)?;
        let width = unsafe { self.raw.getSigLabelWidth(label.as_mut_ptr()) }?;
        let mut ids: Vec<c_int> = vec![0; usize::try_from(width).unwrap_or(0)];
        if ids.is_empty() {
            return Ok(ids);
        }
        unsafe { self.raw.getSigIdxfromLabel(label.as_mut_ptr(), ids.as_mut_ptr()) }?;
        Ok(ids)
    }

    /// Current value of one signal.
    pub fn signal(&self, index: i32) -> Result<f64> {
        self.raw.getSignal(index)
    }

    /// Current values of several signals, sampled together.
    pub fn signals(&self, indices: &[i32]) -> Result<Vec<f64>> {
        if indices.is_empty() {
            return Ok(Vec::new());
        }
        let mut ids = indices.to_vec();
        let mut values = vec![0.0; indices.len()];
        let count = c_int::try_from(indices.len()).map_err(|_| XpcError::NotImplemented {
            detail: format!("{} signals in one request", indices.len()),
        })?;
        unsafe {
            self.raw
                .getSignals(count, ids.as_mut_ptr(), values.as_mut_ptr())
        }?;
        Ok(values)
    }

    // --- parameters ---

    pub fn num_params(&self) -> Result<i32> {
        self.raw.getNumParams()
    }

    /// Block path and parameter name of a parameter.
    pub fn param_name(&self, index: i32) -> Result<(String, String)> {
        let mut block = string_buffer();
        let mut param = string_buffer();
        unsafe {
            self.raw
                .getParamName(index, block.as_mut_ptr(), param.as_mut_ptr())
        }?;
        Ok((latin1(&block), latin1(&param)))
    }

    pub fn param_index(&self, block: &str, param: &str) -> Result<i32> {
        let mut block = encode(block)?;
        let mut param = encode(param)?;
        unsafe { self.raw.getParamIdx(block.as_mut_ptr(), param.as_mut_ptr()) }
    }

    /// Dimensions of a parameter as `(rows, columns)`.
    pub fn param_dims(&self, index: i32) -> Result<(i32, i32)> {
        let mut dims: [c_int; 2] = [0; 2];
        unsafe { self.raw.getParamDims(index, dims.as_mut_ptr()) }?;
        Ok((dims[0], dims[1]))
    }

    /// Value of a scalar parameter.
    pub fn param(&self, index: i32) -> Result<f64> {
        self.require_scalar(index)?;
        let mut value = [0.0];
        unsafe { self.raw.getParam(index, value.as_mut_ptr()) }?;
        Ok(value[0])
    }

    /// Set a scalar parameter.
    pub fn set_param(&self, index: i32, value: f64) -> Result<()> {
        self.require_scalar(index)?;
        let mut value = [value];
        unsafe { self.raw.setParam(index, value.as_mut_ptr()) }
    }

    fn require_scalar(&self, index: i32) -> Result<()> {
        match self.param_dims(index)? {
            (1, 1) => Ok(()),
            (rows, cols) => Err(XpcError::NotImplemented {
                detail: format!("parameter {index} is {rows}x{cols}, only scalars are supported"),
            }),
        }
    }

    // --- model ---

    /// The block tree of the loaded application, built on first access.
    pub fn model(&self) -> Result<&Model> {
        if let Some(model) = self.model.get() {
            return Ok(model);
        }
        let model = Model::build(self)?;
        Ok(self.model.get_or_init(|| model))
    }
}
