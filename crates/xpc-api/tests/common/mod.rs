//! In-process fake target.
//!
//! Every entry point is an `unsafe extern "system"` function operating on a
//! thread-local [`Target`], so each test thread sees its own target.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::os::raw::{c_char, c_double, c_int, c_uchar};

use xpc_api::raw::types::SCOPE_SIGNAL_SLOTS;
use xpc_api::{DirStruct, ScopeData, XpcApi, XpcFunctions, XpcRaw};

pub const ERR_BAD_INDEX: c_int = 2;
pub const ERR_NO_FILE: c_int = 3;
pub const ERR_NO_CONNECTION: c_int = 4;

pub struct FakeSignal {
    pub name: String,
    pub label: String,
    pub value: f64,
}

pub struct FakeParam {
    pub block: String,
    pub name: String,
    pub dims: (c_int, c_int),
    pub value: f64,
}

#[derive(Default)]
pub struct Target {
    pub last_error: c_int,
    pub signals: Vec<FakeSignal>,
    pub params: Vec<FakeParam>,
    pub scopes: Vec<c_int>,
    /// Stale ids the target leaves after the sentinel.
    pub stale_scopes: Vec<c_int>,
    pub scope_signals: BTreeMap<c_int, Vec<c_int>>,
    pub added_scopes: Vec<(c_int, c_int)>,
    pub files: BTreeMap<String, Vec<u8>>,
    pub open_files: BTreeMap<c_int, String>,
    pub next_handle: c_int,
    /// `(start, count)` of every file read request.
    pub reads: Vec<(c_int, c_int)>,
    pub closed_files: Vec<c_int>,
    pub dir: Vec<DirStruct>,
    pub loaded: Option<(String, String)>,
    /// Make the next port close report a lost connection.
    pub fail_close: bool,
    pub load_timeout: c_int,
    /// Names of native calls in order.
    pub calls: Vec<&'static str>,
}

thread_local! {
    static TARGET: RefCell<Target> = RefCell::new(Target::default());
}

/// Run `f` against this thread's target.
pub fn with<R>(f: impl FnOnce(&mut Target) -> R) -> R {
    TARGET.with(|t| f(&mut t.borrow_mut()))
}

fn call(name: &'static str) {
    with(|t| t.calls.push(name));
}

fn fail(code: c_int) {
    with(|t| t.last_error = code);
}

pub fn calls_to(name: &str) -> usize {
    with(|t| t.calls.iter().filter(|c| **c == name).count())
}

unsafe fn read_str(ptr: *const c_char) -> String {
    unsafe { std::ffi::CStr::from_ptr(ptr) }
        .to_bytes()
        .iter()
        .map(|&b| char::from(b))
        .collect()
}

unsafe fn write_str(ptr: *mut c_char, text: &str) {
    for (i, b) in text.bytes().chain(std::iter::once(0)).enumerate() {
        unsafe { *ptr.add(i) = b as c_char };
    }
}

// --- error register ---

unsafe extern "system" fn get_last_error() -> c_int {
    with(|t| t.last_error)
}

unsafe extern "system" fn set_last_error(code: c_int) {
    with(|t| t.last_error = code);
}

unsafe extern "system" fn error_msg(code: c_int, buf: *mut c_char) -> *mut c_char {
    let text = match code {
        ERR_BAD_INDEX => "Invalid index".to_string(),
        ERR_NO_FILE => "File not found".to_string(),
        ERR_NO_CONNECTION => "Could not connect to target".to_string(),
        other => format!("Unknown error {other}"),
    };
    unsafe { write_str(buf, &text) };
    buf
}

// --- session ---

unsafe extern "system" fn open_tcp_ip_port(address: *mut c_char, port: *mut c_char) -> c_int {
    call("xPCOpenTcpIpPort");
    let (address, port) = unsafe { (read_str(address), read_str(port)) };
    if address == "unreachable" || port.is_empty() {
        fail(ERR_NO_CONNECTION);
        return -1;
    }
    7
}

unsafe extern "system" fn open_serial_port(_comport: c_int, _baud: c_int) -> c_int {
    call("xPCOpenSerialPort");
    3
}

unsafe extern "system" fn re_open_port(port: c_int) -> c_int {
    call("xPCReOpenPort");
    port
}

unsafe extern "system" fn close_port(_port: c_int) {
    call("xPCClosePort");
    if with(|t| std::mem::take(&mut t.fail_close)) {
        fail(ERR_NO_CONNECTION);
    }
}

unsafe extern "system" fn load_app(_port: c_int, dir: *mut c_char, name: *mut c_char) {
    call("xPCLoadApp");
    let loaded = unsafe { (read_str(dir), read_str(name)) };
    with(|t| t.loaded = Some(loaded));
}

unsafe extern "system" fn unload_app(_port: c_int) {
    call("xPCUnloadApp");
    with(|t| t.loaded = None);
}

unsafe extern "system" fn get_api_version() -> *mut c_char {
    static VERSION: &[u8] = b"4.3\0";
    VERSION.as_ptr() as *mut c_char
}

unsafe extern "system" fn target_ping(port: c_int) -> c_int {
    c_int::from(port >= 0)
}

unsafe extern "system" fn set_load_timeout(_port: c_int, seconds: c_int) {
    with(|t| t.load_timeout = seconds);
}

unsafe extern "system" fn get_load_timeout(_port: c_int) -> c_int {
    with(|t| t.load_timeout)
}

// --- signals and parameters ---

unsafe extern "system" fn get_num_signals(_port: c_int) -> c_int {
    call("xPCGetNumSignals");
    with(|t| t.signals.len() as c_int)
}

fn signal_text(index: c_int, pick: impl Fn(&FakeSignal) -> String) -> Option<String> {
    with(|t| t.signals.get(index as usize).map(pick))
}

unsafe extern "system" fn get_signal_name(_port: c_int, index: c_int, buf: *mut c_char) -> *mut c_char {
    match signal_text(index, |s| s.name.clone()) {
        Some(name) => unsafe { write_str(buf, &name) },
        None => fail(ERR_BAD_INDEX),
    }
    buf
}

unsafe extern "system" fn get_signal_label(_port: c_int, index: c_int, buf: *mut c_char) -> *mut c_char {
    match signal_text(index, |s| s.label.clone()) {
        Some(label) => unsafe { write_str(buf, &label) },
        None => fail(ERR_BAD_INDEX),
    }
    buf
}

unsafe extern "system" fn get_signal(_port: c_int, index: c_int) -> c_double {
    call("xPCGetSignal");
    match with(|t| t.signals.get(index as usize).map(|s| s.value)) {
        Some(value) => value,
        None => {
            fail(ERR_BAD_INDEX);
            0.0
        }
    }
}

unsafe extern "system" fn get_signals(
    _port: c_int,
    count: c_int,
    ids: *mut c_int,
    values: *mut c_double,
) -> c_int {
    call("xPCGetSignals");
    for i in 0..count as usize {
        let id = unsafe { *ids.add(i) };
        let value = with(|t| t.signals.get(id as usize).map(|s| s.value)).unwrap_or(f64::NAN);
        unsafe { *values.add(i) = value };
    }
    0
}

unsafe extern "system" fn get_num_params(_port: c_int) -> c_int {
    with(|t| t.params.len() as c_int)
}

unsafe extern "system" fn get_param_name(
    _port: c_int,
    index: c_int,
    block: *mut c_char,
    name: *mut c_char,
) {
    match with(|t| t.params.get(index as usize).map(|p| (p.block.clone(), p.name.clone()))) {
        Some((b, n)) => unsafe {
            write_str(block, &b);
            write_str(name, &n);
        },
        None => fail(ERR_BAD_INDEX),
    }
}

unsafe extern "system" fn get_param_dims(_port: c_int, index: c_int, dims: *mut c_int) {
    call("xPCGetParamDims");
    match with(|t| t.params.get(index as usize).map(|p| p.dims)) {
        Some((rows, cols)) => unsafe {
            *dims = rows;
            *dims.add(1) = cols;
        },
        None => fail(ERR_BAD_INDEX),
    }
}

unsafe extern "system" fn get_param(_port: c_int, index: c_int, value: *mut c_double) {
    call("xPCGetParam");
    if let Some(v) = with(|t| t.params.get(index as usize).map(|p| p.value)) {
        unsafe { *value = v };
    }
}

unsafe extern "system" fn set_param(_port: c_int, index: c_int, value: *mut c_double) {
    call("xPCSetParam");
    let v = unsafe { *value };
    with(|t| {
        if let Some(p) = t.params.get_mut(index as usize) {
            p.value = v;
        }
    });
}

// --- scopes ---

unsafe extern "system" fn get_scopes(_port: c_int, data: *mut c_int) {
    let ids = with(|t| {
        let mut ids = t.scopes.clone();
        ids.push(-1);
        ids.extend(&t.stale_scopes);
        ids
    });
    for (i, id) in ids.into_iter().enumerate() {
        unsafe { *data.add(i) = id };
    }
}

unsafe extern "system" fn add_scope(_port: c_int, kind: c_int, id: c_int) {
    with(|t| {
        t.scopes.push(id);
        t.added_scopes.push((kind, id));
    });
}

unsafe extern "system" fn rem_scope(_port: c_int, id: c_int) {
    with(|t| t.scopes.retain(|s| *s != id));
}

unsafe extern "system" fn get_scope(_port: c_int, id: c_int) -> ScopeData {
    let mut data = ScopeData {
        number: id,
        signals: [-1; SCOPE_SIGNAL_SLOTS],
        ..Default::default()
    };
    let members = with(|t| t.scope_signals.get(&id).cloned().unwrap_or_default());
    for (slot, index) in data.signals.iter_mut().zip(members) {
        *slot = index;
    }
    data
}

unsafe extern "system" fn sc_add_signal(_port: c_int, id: c_int, signal: c_int) {
    with(|t| t.scope_signals.entry(id).or_default().push(signal));
}

unsafe extern "system" fn sc_get_state(_port: c_int, _id: c_int) -> c_int {
    2
}

unsafe extern "system" fn sc_get_type(_port: c_int, _id: c_int) -> c_int {
    42
}

unsafe extern "system" fn sc_get_trigger_signal(_port: c_int, id: c_int) -> c_int {
    if id == 1 {
        -1
    } else {
        0
    }
}

// --- file system ---

unsafe extern "system" fn fs_open_file(_port: c_int, name: *mut c_char, _attrib: *mut c_char) -> c_int {
    let name = unsafe { read_str(name) };
    with(|t| {
        if !t.files.contains_key(&name) {
            t.last_error = ERR_NO_FILE;
            return -1;
        }
        t.next_handle += 1;
        let handle = t.next_handle;
        t.open_files.insert(handle, name);
        handle
    })
}

unsafe extern "system" fn fs_get_file_size(_port: c_int, handle: c_int) -> c_int {
    with(|t| {
        let name = t.open_files.get(&handle)?;
        t.files.get(name).map(|data| data.len() as c_int)
    })
    .unwrap_or(-1)
}

unsafe extern "system" fn fs_read_file(
    _port: c_int,
    handle: c_int,
    start: c_int,
    count: c_int,
    data: *mut c_uchar,
) {
    let chunk = with(|t| {
        t.reads.push((start, count));
        let name = t.open_files.get(&handle)?;
        let bytes = t.files.get(name)?;
        bytes
            .get(start as usize..(start + count) as usize)
            .map(<[u8]>::to_vec)
    });
    match chunk {
        Some(chunk) => unsafe { std::ptr::copy_nonoverlapping(chunk.as_ptr(), data, chunk.len()) },
        None => fail(ERR_BAD_INDEX),
    }
}

unsafe extern "system" fn fs_close_file(_port: c_int, handle: c_int) {
    with(|t| {
        t.open_files.remove(&handle);
        t.closed_files.push(handle);
    });
}

unsafe extern "system" fn fs_dir_struct_size(_port: c_int, _path: *mut c_char) -> c_int {
    with(|t| t.dir.len() as c_int)
}

unsafe extern "system" fn fs_dir_items(_port: c_int, _path: *mut c_char, dirs: *mut DirStruct, count: c_int) {
    let entries = with(|t| t.dir.clone());
    for (i, entry) in entries.into_iter().take(count as usize).enumerate() {
        unsafe { *dirs.add(i) = entry };
    }
}

/// Function table wired to the fake target.
pub fn functions() -> XpcFunctions {
    XpcFunctions {
        xPCGetLastError: Some(get_last_error),
        xPCSetLastError: Some(set_last_error),
        xPCErrorMsg: Some(error_msg),
        xPCOpenTcpIpPort: Some(open_tcp_ip_port),
        xPCOpenSerialPort: Some(open_serial_port),
        xPCReOpenPort: Some(re_open_port),
        xPCClosePort: Some(close_port),
        xPCLoadApp: Some(load_app),
        xPCUnloadApp: Some(unload_app),
        xPCGetAPIVersion: Some(get_api_version),
        xPCTargetPing: Some(target_ping),
        xPCSetLoadTimeOut: Some(set_load_timeout),
        xPCGetLoadTimeOut: Some(get_load_timeout),
        xPCGetNumSignals: Some(get_num_signals),
        xPCGetSignalName: Some(get_signal_name),
        xPCGetSignalLabel: Some(get_signal_label),
        xPCGetSignal: Some(get_signal),
        xPCGetSignals: Some(get_signals),
        xPCGetNumParams: Some(get_num_params),
        xPCGetParamName: Some(get_param_name),
        xPCGetParamDims: Some(get_param_dims),
        xPCGetParam: Some(get_param),
        xPCSetParam: Some(set_param),
        xPCGetScopes: Some(get_scopes),
        xPCAddScope: Some(add_scope),
        xPCRemScope: Some(rem_scope),
        xPCGetScope: Some(get_scope),
        xPCScAddSignal: Some(sc_add_signal),
        xPCScGetState: Some(sc_get_state),
        xPCScGetType: Some(sc_get_type),
        xPCScGetTriggerSignal: Some(sc_get_trigger_signal),
        xPCFSOpenFile: Some(fs_open_file),
        xPCFSGetFileSize: Some(fs_get_file_size),
        xPCFSReadFile: Some(fs_read_file),
        xPCFSCloseFile: Some(fs_close_file),
        xPCFSDirStructSize: Some(fs_dir_struct_size),
        xPCFSDirItems: Some(fs_dir_items),
        ..Default::default()
    }
}

/// A fresh target and a closed session talking to it.
pub fn api() -> XpcApi {
    with(|t| *t = Target::default());
    XpcApi::new(XpcRaw::from_functions(functions()).expect("error protocol symbols present"))
}

/// A fresh target and an open session.
pub fn connected() -> XpcApi {
    let mut api = api();
    api.open_tcp_ip("192.168.0.10", 22222).expect("fake target accepts connection");
    api
}

/// Populate the target with a small model.
pub fn install_model() {
    with(|t| {
        t.signals = vec![
            FakeSignal {
                name: "Plant/Motor/Speed".into(),
                label: String::new(),
                value: 1500.0,
            },
            FakeSignal {
                name: "Plant/Motor/Out1".into(),
                label: "rpm out".into(),
                value: 25.0,
            },
            FakeSignal {
                name: "Clock".into(),
                label: String::new(),
                value: 0.5,
            },
        ];
        t.params = vec![
            FakeParam {
                block: "Controller/Gain".into(),
                name: "Gain".into(),
                dims: (1, 1),
                value: 2.0,
            },
            FakeParam {
                block: "Controller/Table".into(),
                name: "Values".into(),
                dims: (1, 4),
                value: 0.0,
            },
        ];
    });
}
