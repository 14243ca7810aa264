// @generated by xpc-bindgen. Do not edit by hand.
// Regenerate with `xpcgen generate`; `xpcgen check` verifies this file is current.
// source-digest: sha256:350abe9cd8e97f3a27bc1864ccba4101d9f4ea19ecae111b3ace39c84a54e5b9

#![allow(non_camel_case_types, non_snake_case, clippy::too_many_arguments, clippy::upper_case_acronyms)]

use std::os::raw::{c_char, c_double, c_int, c_uchar, c_uint, c_void};

use super::types::{DirStruct, DiskInfo, FileHandleInfo, LgMode, ScopeData};
use super::{require, XpcRaw};
use crate::error::{Result, XpcError};
use crate::library::NativeLibrary;

pub const MAX_ERR_MSG_LENGTH: i32 = 50;
pub const MAX_SCOPES: i32 = 30;
pub const MAX_SIGNALS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum COMMTYP {
    RS232 = 1,
    TCPIP = 2,
}

impl TryFrom<i32> for COMMTYP {
    type Error = XpcError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::RS232),
            2 => Ok(Self::TCPIP),
            _ => Err(XpcError::UnknownValue {
                group: "COMMTYP",
                value,
            }),
        }
    }
}

impl From<COMMTYP> for i32 {
    fn from(value: COMMTYP) -> Self {
        value as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SCTYPE {
    NONE = 0,
    HOST = 1,
    TARGET = 2,
    FILE = 3,
    HIDDEN = 4,
}

impl TryFrom<i32> for SCTYPE {
    type Error = XpcError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::NONE),
            1 => Ok(Self::HOST),
            2 => Ok(Self::TARGET),
            3 => Ok(Self::FILE),
            4 => Ok(Self::HIDDEN),
            _ => Err(XpcError::UnknownValue {
                group: "SCTYPE",
                value,
            }),
        }
    }
}

impl From<SCTYPE> for i32 {
    fn from(value: SCTYPE) -> Self {
        value as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TRIGMD {
    FREERUN = 0,
    SOFTWARE = 1,
    SIGNAL = 2,
    SCOPE = 3,
    SCEND = 4,
}

impl TryFrom<i32> for TRIGMD {
    type Error = XpcError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::FREERUN),
            1 => Ok(Self::SOFTWARE),
            2 => Ok(Self::SIGNAL),
            3 => Ok(Self::SCOPE),
            4 => Ok(Self::SCEND),
            _ => Err(XpcError::UnknownValue {
                group: "TRIGMD",
                value,
            }),
        }
    }
}

impl From<TRIGMD> for i32 {
    fn from(value: TRIGMD) -> Self {
        value as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TRIGSLOPE {
    EITHER = 0,
    RISING = 1,
    FALLING = 2,
}

impl TryFrom<i32> for TRIGSLOPE {
    type Error = XpcError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::EITHER),
            1 => Ok(Self::RISING),
            2 => Ok(Self::FALLING),
            _ => Err(XpcError::UnknownValue {
                group: "TRIGSLOPE",
                value,
            }),
        }
    }
}

impl From<TRIGSLOPE> for i32 {
    fn from(value: TRIGSLOPE) -> Self {
        value as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SCMODE {
    NUMERICAL = 0,
    REDRAW = 1,
    SLIDING = 2,
    ROLLING = 3,
}

impl TryFrom<i32> for SCMODE {
    type Error = XpcError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::NUMERICAL),
            1 => Ok(Self::REDRAW),
            2 => Ok(Self::SLIDING),
            3 => Ok(Self::ROLLING),
            _ => Err(XpcError::UnknownValue {
                group: "SCMODE",
                value,
            }),
        }
    }
}

impl From<SCMODE> for i32 {
    fn from(value: SCMODE) -> Self {
        value as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SCST {
    WAITTOSTART = 0,
    WAITFORTRIG = 1,
    ACQUIRING = 2,
    FINISHED = 3,
    INTERRUPTED = 4,
    PREACQUIRING = 5,
}

impl TryFrom<i32> for SCST {
    type Error = XpcError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::WAITTOSTART),
            1 => Ok(Self::WAITFORTRIG),
            2 => Ok(Self::ACQUIRING),
            3 => Ok(Self::FINISHED),
            4 => Ok(Self::INTERRUPTED),
            5 => Ok(Self::PREACQUIRING),
            _ => Err(XpcError::UnknownValue {
                group: "SCST",
                value,
            }),
        }
    }
}

impl From<SCST> for i32 {
    fn from(value: SCST) -> Self {
        value as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LGMOD {
    TIME = 0,
    VALUE = 1,
}

impl TryFrom<i32> for LGMOD {
    type Error = XpcError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::TIME),
            1 => Ok(Self::VALUE),
            _ => Err(XpcError::UnknownValue {
                group: "LGMOD",
                value,
            }),
        }
    }
}

impl From<LGMOD> for i32 {
    fn from(value: LGMOD) -> Self {
        value as i32
    }
}

/// Entry points of the native library.
///
/// A field is `None` when the loaded build does not export that symbol.
#[derive(Clone, Copy, Default)]
pub struct XpcFunctions {
    pub xPCReOpenPort: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCOpenSerialPort: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCClosePort: Option<unsafe extern "system" fn(c_int)>,
    pub xPCGetLastError: Option<unsafe extern "system" fn() -> c_int>,
    pub xPCSetLastError: Option<unsafe extern "system" fn(c_int)>,
    pub xPCGetExecTime: Option<unsafe extern "system" fn(c_int) -> c_double>,
    pub xPCSetStopTime: Option<unsafe extern "system" fn(c_int, c_double)>,
    pub xPCGetStopTime: Option<unsafe extern "system" fn(c_int) -> c_double>,
    pub xPCSetSampleTime: Option<unsafe extern "system" fn(c_int, c_double)>,
    pub xPCGetSampleTime: Option<unsafe extern "system" fn(c_int) -> c_double>,
    pub xPCSetEcho: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCGetEcho: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCSetHiddenScopeEcho: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCGetHiddenScopeEcho: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCAverageTET: Option<unsafe extern "system" fn(c_int) -> c_double>,
    pub xPCGetNumParams: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetNumSignals: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetAppName: Option<unsafe extern "system" fn(c_int, *mut c_char) -> *mut c_char>,
    pub xPCUnloadApp: Option<unsafe extern "system" fn(c_int)>,
    pub xPCStartApp: Option<unsafe extern "system" fn(c_int)>,
    pub xPCStopApp: Option<unsafe extern "system" fn(c_int)>,
    pub xPCIsAppRunning: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCIsOverloaded: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetNumOutputs: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetNumStates: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetParam: Option<unsafe extern "system" fn(c_int, c_int, *mut c_double)>,
    pub xPCSetLogMode: Option<unsafe extern "system" fn(c_int, LgMode)>,
    pub xPCSetParam: Option<unsafe extern "system" fn(c_int, c_int, *mut c_double)>,
    pub xPCGetLogMode: Option<unsafe extern "system" fn(c_int) -> LgMode>,
    pub xPCNumLogSamples: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCMaxLogSamples: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCNumLogWraps: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCReboot: Option<unsafe extern "system" fn(c_int)>,
    pub xPCGetOutputLog: Option<unsafe extern "system" fn(c_int, c_int, c_int, c_int, c_int, *mut c_double)>,
    pub xPCGetStateLog: Option<unsafe extern "system" fn(c_int, c_int, c_int, c_int, c_int, *mut c_double)>,
    pub xPCGetTimeLog: Option<unsafe extern "system" fn(c_int, c_int, c_int, c_int, *mut c_double)>,
    pub xPCGetTETLog: Option<unsafe extern "system" fn(c_int, c_int, c_int, c_int, *mut c_double)>,
    pub xPCScGetData: Option<unsafe extern "system" fn(c_int, c_int, c_int, c_int, c_int, c_int, *mut c_double)>,
    pub xPCMinimumTET: Option<unsafe extern "system" fn(c_int, *mut c_double)>,
    pub xPCMaximumTET: Option<unsafe extern "system" fn(c_int, *mut c_double)>,
    pub xPCGetSignals: Option<unsafe extern "system" fn(c_int, c_int, *mut c_int, *mut c_double) -> c_int>,
    pub xPCGetSignal: Option<unsafe extern "system" fn(c_int, c_int) -> c_double>,
    pub xPCAddScope: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCRemScope: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCScAddSignal: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScRemSignal: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScSetAutoRestart: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetAutoRestart: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCGetScopes: Option<unsafe extern "system" fn(c_int, *mut c_int)>,
    pub xPCGetHiddenScopes: Option<unsafe extern "system" fn(c_int, *mut c_int)>,
    pub xPCScGetSignals: Option<unsafe extern "system" fn(c_int, c_int, *mut c_int)>,
    pub xPCScSetDecimation: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetNumSignals: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScGetDecimation: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSetNumSamples: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetNumSamples: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScGetStartTime: Option<unsafe extern "system" fn(c_int, c_int) -> c_double>,
    pub xPCScGetState: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSetTriggerLevel: Option<unsafe extern "system" fn(c_int, c_int, c_double)>,
    pub xPCScGetTriggerLevel: Option<unsafe extern "system" fn(c_int, c_int) -> c_double>,
    pub xPCScSetTriggerMode: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetTriggerMode: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSetTriggerScope: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetTriggerScope: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSetTriggerScopeSample: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetTriggerScopeSample: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSetTriggerSignal: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetTriggerSignal: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSetTriggerSlope: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCScGetTriggerSlope: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSoftwareTrigger: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCScStart: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCScStop: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCIsScFinished: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScGetNumPrePostSamples: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCScSetNumPrePostSamples: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCGetScope: Option<unsafe extern "system" fn(c_int, c_int) -> ScopeData>,
    pub xPCSetScope: Option<unsafe extern "system" fn(c_int, ScopeData)>,
    pub xPCLoadApp: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut c_char)>,
    pub xPCGetParamDims: Option<unsafe extern "system" fn(c_int, c_int, *mut c_int)>,
    pub xPCGetParamDimsSize: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCGetSignalWidth: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCGetSignalIdx: Option<unsafe extern "system" fn(c_int, *mut c_char) -> c_int>,
    pub xPCGetSigLabelWidth: Option<unsafe extern "system" fn(c_int, *mut c_char) -> c_int>,
    pub xPCGetSigIdxfromLabel: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut c_int) -> c_int>,
    pub xPCGetSignalLabel: Option<unsafe extern "system" fn(c_int, c_int, *mut c_char) -> *mut c_char>,
    pub xPCGetParamIdx: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut c_char) -> c_int>,
    pub xPCGetParamName: Option<unsafe extern "system" fn(c_int, c_int, *mut c_char, *mut c_char)>,
    pub xPCGetParamType: Option<unsafe extern "system" fn(c_int, c_int, *mut c_char)>,
    pub xPCGetSignalName: Option<unsafe extern "system" fn(c_int, c_int, *mut c_char) -> *mut c_char>,
    pub xPCTgScGetGrid: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCTgScGetMode: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCTgScGetViewMode: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCTgScGetYLimits: Option<unsafe extern "system" fn(c_int, c_int, *mut c_double)>,
    pub xPCTgScSetGrid: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCTgScSetMode: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCTgScSetViewMode: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCTgScSetYLimits: Option<unsafe extern "system" fn(c_int, c_int, *mut c_double)>,
    pub xPCTgScSetSignalFormat: Option<unsafe extern "system" fn(c_int, c_int, c_int, *mut c_char)>,
    pub xPCTgScGetSignalFormat: Option<unsafe extern "system" fn(c_int, c_int, c_int, *mut c_char) -> *mut c_char>,
    pub xPCSetLoadTimeOut: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCErrorMsg: Option<unsafe extern "system" fn(c_int, *mut c_char) -> *mut c_char>,
    pub xPCScGetType: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCGetLoadTimeOut: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCOpenTcpIpPort: Option<unsafe extern "system" fn(*mut c_char, *mut c_char) -> c_int>,
    pub xPCOpenConnection: Option<unsafe extern "system" fn(c_int)>,
    pub xPCCloseConnection: Option<unsafe extern "system" fn(c_int)>,
    pub xPCRegisterTarget: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut c_char, c_int, c_int) -> c_int>,
    pub xPCDeRegisterTarget: Option<unsafe extern "system" fn(c_int)>,
    pub xPCGetAPIVersion: Option<unsafe extern "system" fn() -> *mut c_char>,
    pub xPCGetTargetVersion: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCTargetPing: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCFSReadFile: Option<unsafe extern "system" fn(c_int, c_int, c_int, c_int, *mut c_uchar)>,
    pub xPCFSRead: Option<unsafe extern "system" fn(c_int, c_int, c_int, c_int, *mut c_uchar) -> c_int>,
    pub xPCFSWriteFile: Option<unsafe extern "system" fn(c_int, c_int, c_int, *mut c_uchar)>,
    pub xPCFSBufferInfo: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCFSGetFileSize: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCFSOpenFile: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut c_char) -> c_int>,
    pub xPCFSCloseFile: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCFSGetPWD: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCFTPGet: Option<unsafe extern "system" fn(c_int, c_int, c_int, *mut c_char)>,
    pub xPCFTPPut: Option<unsafe extern "system" fn(c_int, c_int, *mut c_char)>,
    pub xPCFSRemoveFile: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCFSCD: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCFSMKDIR: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCFSRMDIR: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCFSDir: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut c_char, c_int)>,
    pub xPCFSDirSize: Option<unsafe extern "system" fn(c_int, *mut c_char) -> c_int>,
    pub xPCFSGetError: Option<unsafe extern "system" fn(c_int, c_uint, *mut c_uchar)>,
    pub xPCSaveParamSet: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCLoadParamSet: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCFSScSetFilename: Option<unsafe extern "system" fn(c_int, c_int, *mut c_char)>,
    pub xPCFSScGetFilename: Option<unsafe extern "system" fn(c_int, c_int, *mut c_char) -> *mut c_char>,
    pub xPCFSScSetWriteMode: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCFSScGetWriteMode: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCFSScSetWriteSize: Option<unsafe extern "system" fn(c_int, c_int, c_uint)>,
    pub xPCFSScGetWriteSize: Option<unsafe extern "system" fn(c_int, c_int) -> c_uint>,
    pub xPCReadXML: Option<unsafe extern "system" fn(c_int, c_int, *mut c_uchar)>,
    pub xPCFSDiskInfo: Option<unsafe extern "system" fn(c_int, *mut c_char) -> DiskInfo>,
    pub xPCFSFileTable: Option<unsafe extern "system" fn(c_int, *mut c_char) -> *mut c_char>,
    pub xPCFSDirItems: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut DirStruct, c_int)>,
    pub xPCFSDirStructSize: Option<unsafe extern "system" fn(c_int, *mut c_char) -> c_int>,
    pub xPCGetNumScopes: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetNumHiddenScopes: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetScopeList: Option<unsafe extern "system" fn(c_int, *mut c_int)>,
    pub xPCGetHiddenList: Option<unsafe extern "system" fn(c_int, *mut c_int)>,
    pub xPCScGetSignalList: Option<unsafe extern "system" fn(c_int, c_int, *mut c_int)>,
    pub xPCGetSimMode: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCGetPCIInfo: Option<unsafe extern "system" fn(c_int, *mut c_char)>,
    pub xPCGetSessionTime: Option<unsafe extern "system" fn(c_int) -> c_double>,
    pub xPCGetLogStatus: Option<unsafe extern "system" fn(c_int, *mut c_int)>,
    pub xPCFSFileInfo: Option<unsafe extern "system" fn(c_int, c_int) -> FileHandleInfo>,
    pub xPCSetDefaultStopTime: Option<unsafe extern "system" fn(c_int)>,
    pub xPCGetXMLSize: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCIsTargetScope: Option<unsafe extern "system" fn(c_int) -> c_int>,
    pub xPCSetTargetScopeUpdate: Option<unsafe extern "system" fn(c_int, c_int)>,
    pub xPCFSReNameFile: Option<unsafe extern "system" fn(c_int, *mut c_char, *mut c_char)>,
    pub xPCFSScSetDynamicMode: Option<unsafe extern "system" fn(c_int, c_int, c_int)>,
    pub xPCFSScGetDynamicMode: Option<unsafe extern "system" fn(c_int, c_int) -> c_int>,
    pub xPCFSScSetMaxWriteFileSize: Option<unsafe extern "system" fn(c_int, c_int, c_uint)>,
    pub xPCFSScGetMaxWriteFileSize: Option<unsafe extern "system" fn(c_int, c_int) -> c_uint>,
    pub xPCInitAPI: Option<unsafe extern "system" fn() -> c_int>,
    pub xPCFreeAPI: Option<unsafe extern "system" fn()>,
    pub xPCResolveAPI: Option<unsafe extern "system" fn(*mut c_void) -> c_int>,
}

impl XpcFunctions {
    /// Number of entry points the header declares.
    pub const COUNT: usize = 164;

    /// Look up every entry point, leaving absent symbols unset.
    ///
    /// # Safety
    ///
    /// Each exported symbol of `library` must have the signature declared
    /// for it in the header.
    pub unsafe fn resolve(library: &NativeLibrary) -> Self {
        unsafe {
            Self {
                xPCReOpenPort: library.symbol(b"xPCReOpenPort\0"),
                xPCOpenSerialPort: library.symbol(b"xPCOpenSerialPort\0"),
                xPCClosePort: library.symbol(b"xPCClosePort\0"),
                xPCGetLastError: library.symbol(b"xPCGetLastError\0"),
                xPCSetLastError: library.symbol(b"xPCSetLastError\0"),
                xPCGetExecTime: library.symbol(b"xPCGetExecTime\0"),
                xPCSetStopTime: library.symbol(b"xPCSetStopTime\0"),
                xPCGetStopTime: library.symbol(b"xPCGetStopTime\0"),
                xPCSetSampleTime: library.symbol(b"xPCSetSampleTime\0"),
                xPCGetSampleTime: library.symbol(b"xPCGetSampleTime\0"),
                xPCSetEcho: library.symbol(b"xPCSetEcho\0"),
                xPCGetEcho: library.symbol(b"xPCGetEcho\0"),
                xPCSetHiddenScopeEcho: library.symbol(b"xPCSetHiddenScopeEcho\0"),
                xPCGetHiddenScopeEcho: library.symbol(b"xPCGetHiddenScopeEcho\0"),
                xPCAverageTET: library.symbol(b"xPCAverageTET\0"),
                xPCGetNumParams: library.symbol(b"xPCGetNumParams\0"),
                xPCGetNumSignals: library.symbol(b"xPCGetNumSignals\0"),
                xPCGetAppName: library.symbol(b"xPCGetAppName\0"),
                xPCUnloadApp: library.symbol(b"xPCUnloadApp\0"),
                xPCStartApp: library.symbol(b"xPCStartApp\0"),
                xPCStopApp: library.symbol(b"xPCStopApp\0"),
                xPCIsAppRunning: library.symbol(b"xPCIsAppRunning\0"),
                xPCIsOverloaded: library.symbol(b"xPCIsOverloaded\0"),
                xPCGetNumOutputs: library.symbol(b"xPCGetNumOutputs\0"),
                xPCGetNumStates: library.symbol(b"xPCGetNumStates\0"),
                xPCGetParam: library.symbol(b"xPCGetParam\0"),
                xPCSetLogMode: library.symbol(b"xPCSetLogMode\0"),
                xPCSetParam: library.symbol(b"xPCSetParam\0"),
                xPCGetLogMode: library.symbol(b"xPCGetLogMode\0"),
                xPCNumLogSamples: library.symbol(b"xPCNumLogSamples\0"),
                xPCMaxLogSamples: library.symbol(b"xPCMaxLogSamples\0"),
                xPCNumLogWraps: library.symbol(b"xPCNumLogWraps\0"),
                xPCReboot: library.symbol(b"xPCReboot\0"),
                xPCGetOutputLog: library.symbol(b"xPCGetOutputLog\0"),
                xPCGetStateLog: library.symbol(b"xPCGetStateLog\0"),
                xPCGetTimeLog: library.symbol(b"xPCGetTimeLog\0"),
                xPCGetTETLog: library.symbol(b"xPCGetTETLog\0"),
                xPCScGetData: library.symbol(b"xPCScGetData\0"),
                xPCMinimumTET: library.symbol(b"xPCMinimumTET\0"),
                xPCMaximumTET: library.symbol(b"xPCMaximumTET\0"),
                xPCGetSignals: library.symbol(b"xPCGetSignals\0"),
                xPCGetSignal: library.symbol(b"xPCGetSignal\0"),
                xPCAddScope: library.symbol(b"xPCAddScope\0"),
                xPCRemScope: library.symbol(b"xPCRemScope\0"),
                xPCScAddSignal: library.symbol(b"xPCScAddSignal\0"),
                xPCScRemSignal: library.symbol(b"xPCScRemSignal\0"),
                xPCScSetAutoRestart: library.symbol(b"xPCScSetAutoRestart\0"),
                xPCScGetAutoRestart: library.symbol(b"xPCScGetAutoRestart\0"),
                xPCGetScopes: library.symbol(b"xPCGetScopes\0"),
                xPCGetHiddenScopes: library.symbol(b"xPCGetHiddenScopes\0"),
                xPCScGetSignals: library.symbol(b"xPCScGetSignals\0"),
                xPCScSetDecimation: library.symbol(b"xPCScSetDecimation\0"),
                xPCScGetNumSignals: library.symbol(b"xPCScGetNumSignals\0"),
                xPCScGetDecimation: library.symbol(b"xPCScGetDecimation\0"),
                xPCScSetNumSamples: library.symbol(b"xPCScSetNumSamples\0"),
                xPCScGetNumSamples: library.symbol(b"xPCScGetNumSamples\0"),
                xPCScGetStartTime: library.symbol(b"xPCScGetStartTime\0"),
                xPCScGetState: library.symbol(b"xPCScGetState\0"),
                xPCScSetTriggerLevel: library.symbol(b"xPCScSetTriggerLevel\0"),
                xPCScGetTriggerLevel: library.symbol(b"xPCScGetTriggerLevel\0"),
                xPCScSetTriggerMode: library.symbol(b"xPCScSetTriggerMode\0"),
                xPCScGetTriggerMode: library.symbol(b"xPCScGetTriggerMode\0"),
                xPCScSetTriggerScope: library.symbol(b"xPCScSetTriggerScope\0"),
                xPCScGetTriggerScope: library.symbol(b"xPCScGetTriggerScope\0"),
                xPCScSetTriggerScopeSample: library.symbol(b"xPCScSetTriggerScopeSample\0"),
                xPCScGetTriggerScopeSample: library.symbol(b"xPCScGetTriggerScopeSample\0"),
                xPCScSetTriggerSignal: library.symbol(b"xPCScSetTriggerSignal\0"),
                xPCScGetTriggerSignal: library.symbol(b"xPCScGetTriggerSignal\0"),
                xPCScSetTriggerSlope: library.symbol(b"xPCScSetTriggerSlope\0"),
                xPCScGetTriggerSlope: library.symbol(b"xPCScGetTriggerSlope\0"),
                xPCScSoftwareTrigger: library.symbol(b"xPCScSoftwareTrigger\0"),
                xPCScStart: library.symbol(b"xPCScStart\0"),
                xPCScStop: library.symbol(b"xPCScStop\0"),
                xPCIsScFinished: library.symbol(b"xPCIsScFinished\0"),
                xPCScGetNumPrePostSamples: library.symbol(b"xPCScGetNumPrePostSamples\0"),
                xPCScSetNumPrePostSamples: library.symbol(b"xPCScSetNumPrePostSamples\0"),
                xPCGetScope: library.symbol(b"xPCGetScope\0"),
                xPCSetScope: library.symbol(b"xPCSetScope\0"),
                xPCLoadApp: library.symbol(b"xPCLoadApp\0"),
                xPCGetParamDims: library.symbol(b"xPCGetParamDims\0"),
                xPCGetParamDimsSize: library.symbol(b"xPCGetParamDimsSize\0"),
                xPCGetSignalWidth: library.symbol(b"xPCGetSignalWidth\0"),
                xPCGetSignalIdx: library.symbol(b"xPCGetSignalIdx\0"),
                xPCGetSigLabelWidth: library.symbol(b"xPCGetSigLabelWidth\0"),
                xPCGetSigIdxfromLabel: library.symbol(b"xPCGetSigIdxfromLabel\0"),
                xPCGetSignalLabel: library.symbol(b"xPCGetSignalLabel\0"),
                xPCGetParamIdx: library.symbol(b"xPCGetParamIdx\0"),
                xPCGetParamName: library.symbol(b"xPCGetParamName\0"),
                xPCGetParamType: library.symbol(b"xPCGetParamType\0"),
                xPCGetSignalName: library.symbol(b"xPCGetSignalName\0"),
                xPCTgScGetGrid: library.symbol(b"xPCTgScGetGrid\0"),
                xPCTgScGetMode: library.symbol(b"xPCTgScGetMode\0"),
                xPCTgScGetViewMode: library.symbol(b"xPCTgScGetViewMode\0"),
                xPCTgScGetYLimits: library.symbol(b"xPCTgScGetYLimits\0"),
                xPCTgScSetGrid: library.symbol(b"xPCTgScSetGrid\0"),
                xPCTgScSetMode: library.symbol(b"xPCTgScSetMode\0"),
                xPCTgScSetViewMode: library.symbol(b"xPCTgScSetViewMode\0"),
                xPCTgScSetYLimits: library.symbol(b"xPCTgScSetYLimits\0"),
                xPCTgScSetSignalFormat: library.symbol(b"xPCTgScSetSignalFormat\0"),
                xPCTgScGetSignalFormat: library.symbol(b"xPCTgScGetSignalFormat\0"),
                xPCSetLoadTimeOut: library.symbol(b"xPCSetLoadTimeOut\0"),
                xPCErrorMsg: library.symbol(b"xPCErrorMsg\0"),
                xPCScGetType: library.symbol(b"xPCScGetType\0"),
                xPCGetLoadTimeOut: library.symbol(b"xPCGetLoadTimeOut\0"),
                xPCOpenTcpIpPort: library.symbol(b"xPCOpenTcpIpPort\0"),
                xPCOpenConnection: library.symbol(b"xPCOpenConnection\0"),
                xPCCloseConnection: library.symbol(b"xPCCloseConnection\0"),
                xPCRegisterTarget: library.symbol(b"xPCRegisterTarget\0"),
                xPCDeRegisterTarget: library.symbol(b"xPCDeRegisterTarget\0"),
                xPCGetAPIVersion: library.symbol(b"xPCGetAPIVersion\0"),
                xPCGetTargetVersion: library.symbol(b"xPCGetTargetVersion\0"),
                xPCTargetPing: library.symbol(b"xPCTargetPing\0"),
                xPCFSReadFile: library.symbol(b"xPCFSReadFile\0"),
                xPCFSRead: library.symbol(b"xPCFSRead\0"),
                xPCFSWriteFile: library.symbol(b"xPCFSWriteFile\0"),
                xPCFSBufferInfo: library.symbol(b"xPCFSBufferInfo\0"),
                xPCFSGetFileSize: library.symbol(b"xPCFSGetFileSize\0"),
                xPCFSOpenFile: library.symbol(b"xPCFSOpenFile\0"),
                xPCFSCloseFile: library.symbol(b"xPCFSCloseFile\0"),
                xPCFSGetPWD: library.symbol(b"xPCFSGetPWD\0"),
                xPCFTPGet: library.symbol(b"xPCFTPGet\0"),
                xPCFTPPut: library.symbol(b"xPCFTPPut\0"),
                xPCFSRemoveFile: library.symbol(b"xPCFSRemoveFile\0"),
                xPCFSCD: library.symbol(b"xPCFSCD\0"),
                xPCFSMKDIR: library.symbol(b"xPCFSMKDIR\0"),
                xPCFSRMDIR: library.symbol(b"xPCFSRMDIR\0"),
                xPCFSDir: library.symbol(b"xPCFSDir\0"),
                xPCFSDirSize: library.symbol(b"xPCFSDirSize\0"),
                xPCFSGetError: library.symbol(b"xPCFSGetError\0"),
                xPCSaveParamSet: library.symbol(b"xPCSaveParamSet\0"),
                xPCLoadParamSet: library.symbol(b"xPCLoadParamSet\0"),
                xPCFSScSetFilename: library.symbol(b"xPCFSScSetFilename\0"),
                xPCFSScGetFilename: library.symbol(b"xPCFSScGetFilename\0"),
                xPCFSScSetWriteMode: library.symbol(b"xPCFSScSetWriteMode\0"),
                xPCFSScGetWriteMode: library.symbol(b"xPCFSScGetWriteMode\0"),
                xPCFSScSetWriteSize: library.symbol(b"xPCFSScSetWriteSize\0"),
                xPCFSScGetWriteSize: library.symbol(b"xPCFSScGetWriteSize\0"),
                xPCReadXML: library.symbol(b"xPCReadXML\0"),
                xPCFSDiskInfo: library.symbol(b"xPCFSDiskInfo\0"),
                xPCFSFileTable: library.symbol(b"xPCFSFileTable\0"),
                xPCFSDirItems: library.symbol(b"xPCFSDirItems\0"),
                xPCFSDirStructSize: library.symbol(b"xPCFSDirStructSize\0"),
                xPCGetNumScopes: library.symbol(b"xPCGetNumScopes\0"),
                xPCGetNumHiddenScopes: library.symbol(b"xPCGetNumHiddenScopes\0"),
                xPCGetScopeList: library.symbol(b"xPCGetScopeList\0"),
                xPCGetHiddenList: library.symbol(b"xPCGetHiddenList\0"),
                xPCScGetSignalList: library.symbol(b"xPCScGetSignalList\0"),
                xPCGetSimMode: library.symbol(b"xPCGetSimMode\0"),
                xPCGetPCIInfo: library.symbol(b"xPCGetPCIInfo\0"),
                xPCGetSessionTime: library.symbol(b"xPCGetSessionTime\0"),
                xPCGetLogStatus: library.symbol(b"xPCGetLogStatus\0"),
                xPCFSFileInfo: library.symbol(b"xPCFSFileInfo\0"),
                xPCSetDefaultStopTime: library.symbol(b"xPCSetDefaultStopTime\0"),
                xPCGetXMLSize: library.symbol(b"xPCGetXMLSize\0"),
                xPCIsTargetScope: library.symbol(b"xPCIsTargetScope\0"),
                xPCSetTargetScopeUpdate: library.symbol(b"xPCSetTargetScopeUpdate\0"),
                xPCFSReNameFile: library.symbol(b"xPCFSReNameFile\0"),
                xPCFSScSetDynamicMode: library.symbol(b"xPCFSScSetDynamicMode\0"),
                xPCFSScGetDynamicMode: library.symbol(b"xPCFSScGetDynamicMode\0"),
                xPCFSScSetMaxWriteFileSize: library.symbol(b"xPCFSScSetMaxWriteFileSize\0"),
                xPCFSScGetMaxWriteFileSize: library.symbol(b"xPCFSScGetMaxWriteFileSize\0"),
                xPCInitAPI: library.symbol(b"xPCInitAPI\0"),
                xPCFreeAPI: library.symbol(b"xPCFreeAPI\0"),
                xPCResolveAPI: library.symbol(b"xPCResolveAPI\0"),
            }
        }
    }

    /// Number of entry points that were resolved.
    pub fn resolved_count(&self) -> usize {
        [
            self.xPCReOpenPort.is_some(),
            self.xPCOpenSerialPort.is_some(),
            self.xPCClosePort.is_some(),
            self.xPCGetLastError.is_some(),
            self.xPCSetLastError.is_some(),
            self.xPCGetExecTime.is_some(),
            self.xPCSetStopTime.is_some(),
            self.xPCGetStopTime.is_some(),
            self.xPCSetSampleTime.is_some(),
            self.xPCGetSampleTime.is_some(),
            self.xPCSetEcho.is_some(),
            self.xPCGetEcho.is_some(),
            self.xPCSetHiddenScopeEcho.is_some(),
            self.xPCGetHiddenScopeEcho.is_some(),
            self.xPCAverageTET.is_some(),
            self.xPCGetNumParams.is_some(),
            self.xPCGetNumSignals.is_some(),
            self.xPCGetAppName.is_some(),
            self.xPCUnloadApp.is_some(),
            self.xPCStartApp.is_some(),
            self.xPCStopApp.is_some(),
            self.xPCIsAppRunning.is_some(),
            self.xPCIsOverloaded.is_some(),
            self.xPCGetNumOutputs.is_some(),
            self.xPCGetNumStates.is_some(),
            self.xPCGetParam.is_some(),
            self.xPCSetLogMode.is_some(),
            self.xPCSetParam.is_some(),
            self.xPCGetLogMode.is_some(),
            self.xPCNumLogSamples.is_some(),
            self.xPCMaxLogSamples.is_some(),
            self.xPCNumLogWraps.is_some(),
            self.xPCReboot.is_some(),
            self.xPCGetOutputLog.is_some(),
            self.xPCGetStateLog.is_some(),
            self.xPCGetTimeLog.is_some(),
            self.xPCGetTETLog.is_some(),
            self.xPCScGetData.is_some(),
            self.xPCMinimumTET.is_some(),
            self.xPCMaximumTET.is_some(),
            self.xPCGetSignals.is_some(),
            self.xPCGetSignal.is_some(),
            self.xPCAddScope.is_some(),
            self.xPCRemScope.is_some(),
            self.xPCScAddSignal.is_some(),
            self.xPCScRemSignal.is_some(),
            self.xPCScSetAutoRestart.is_some(),
            self.xPCScGetAutoRestart.is_some(),
            self.xPCGetScopes.is_some(),
            self.xPCGetHiddenScopes.is_some(),
            self.xPCScGetSignals.is_some(),
            self.xPCScSetDecimation.is_some(),
            self.xPCScGetNumSignals.is_some(),
            self.xPCScGetDecimation.is_some(),
            self.xPCScSetNumSamples.is_some(),
            self.xPCScGetNumSamples.is_some(),
            self.xPCScGetStartTime.is_some(),
            self.xPCScGetState.is_some(),
            self.xPCScSetTriggerLevel.is_some(),
            self.xPCScGetTriggerLevel.is_some(),
            self.xPCScSetTriggerMode.is_some(),
            self.xPCScGetTriggerMode.is_some(),
            self.xPCScSetTriggerScope.is_some(),
            self.xPCScGetTriggerScope.is_some(),
            self.xPCScSetTriggerScopeSample.is_some(),
            self.xPCScGetTriggerScopeSample.is_some(),
            self.xPCScSetTriggerSignal.is_some(),
            self.xPCScGetTriggerSignal.is_some(),
            self.xPCScSetTriggerSlope.is_some(),
            self.xPCScGetTriggerSlope.is_some(),
            self.xPCScSoftwareTrigger.is_some(),
            self.xPCScStart.is_some(),
            self.xPCScStop.is_some(),
            self.xPCIsScFinished.is_some(),
            self.xPCScGetNumPrePostSamples.is_some(),
            self.xPCScSetNumPrePostSamples.is_some(),
            self.xPCGetScope.is_some(),
            self.xPCSetScope.is_some(),
            self.xPCLoadApp.is_some(),
            self.xPCGetParamDims.is_some(),
            self.xPCGetParamDimsSize.is_some(),
            self.xPCGetSignalWidth.is_some(),
            self.xPCGetSignalIdx.is_some(),
            self.xPCGetSigLabelWidth.is_some(),
            self.xPCGetSigIdxfromLabel.is_some(),
            self.xPCGetSignalLabel.is_some(),
            self.xPCGetParamIdx.is_some(),
            self.xPCGetParamName.is_some(),
            self.xPCGetParamType.is_some(),
            self.xPCGetSignalName.is_some(),
            self.xPCTgScGetGrid.is_some(),
            self.xPCTgScGetMode.is_some(),
            self.xPCTgScGetViewMode.is_some(),
            self.xPCTgScGetYLimits.is_some(),
            self.xPCTgScSetGrid.is_some(),
            self.xPCTgScSetMode.is_some(),
            self.xPCTgScSetViewMode.is_some(),
            self.xPCTgScSetYLimits.is_some(),
            self.xPCTgScSetSignalFormat.is_some(),
            self.xPCTgScGetSignalFormat.is_some(),
            self.xPCSetLoadTimeOut.is_some(),
            self.xPCErrorMsg.is_some(),
            self.xPCScGetType.is_some(),
            self.xPCGetLoadTimeOut.is_some(),
            self.xPCOpenTcpIpPort.is_some(),
            self.xPCOpenConnection.is_some(),
            self.xPCCloseConnection.is_some(),
            self.xPCRegisterTarget.is_some(),
            self.xPCDeRegisterTarget.is_some(),
            self.xPCGetAPIVersion.is_some(),
            self.xPCGetTargetVersion.is_some(),
            self.xPCTargetPing.is_some(),
            self.xPCFSReadFile.is_some(),
            self.xPCFSRead.is_some(),
            self.xPCFSWriteFile.is_some(),
            self.xPCFSBufferInfo.is_some(),
            self.xPCFSGetFileSize.is_some(),
            self.xPCFSOpenFile.is_some(),
            self.xPCFSCloseFile.is_some(),
            self.xPCFSGetPWD.is_some(),
            self.xPCFTPGet.is_some(),
            self.xPCFTPPut.is_some(),
            self.xPCFSRemoveFile.is_some(),
            self.xPCFSCD.is_some(),
            self.xPCFSMKDIR.is_some(),
            self.xPCFSRMDIR.is_some(),
            self.xPCFSDir.is_some(),
            self.xPCFSDirSize.is_some(),
            self.xPCFSGetError.is_some(),
            self.xPCSaveParamSet.is_some(),
            self.xPCLoadParamSet.is_some(),
            self.xPCFSScSetFilename.is_some(),
            self.xPCFSScGetFilename.is_some(),
            self.xPCFSScSetWriteMode.is_some(),
            self.xPCFSScGetWriteMode.is_some(),
            self.xPCFSScSetWriteSize.is_some(),
            self.xPCFSScGetWriteSize.is_some(),
            self.xPCReadXML.is_some(),
            self.xPCFSDiskInfo.is_some(),
            self.xPCFSFileTable.is_some(),
            self.xPCFSDirItems.is_some(),
            self.xPCFSDirStructSize.is_some(),
            self.xPCGetNumScopes.is_some(),
            self.xPCGetNumHiddenScopes.is_some(),
            self.xPCGetScopeList.is_some(),
            self.xPCGetHiddenList.is_some(),
            self.xPCScGetSignalList.is_some(),
            self.xPCGetSimMode.is_some(),
            self.xPCGetPCIInfo.is_some(),
            self.xPCGetSessionTime.is_some(),
            self.xPCGetLogStatus.is_some(),
            self.xPCFSFileInfo.is_some(),
            self.xPCSetDefaultStopTime.is_some(),
            self.xPCGetXMLSize.is_some(),
            self.xPCIsTargetScope.is_some(),
            self.xPCSetTargetScopeUpdate.is_some(),
            self.xPCFSReNameFile.is_some(),
            self.xPCFSScSetDynamicMode.is_some(),
            self.xPCFSScGetDynamicMode.is_some(),
            self.xPCFSScSetMaxWriteFileSize.is_some(),
            self.xPCFSScGetMaxWriteFileSize.is_some(),
            self.xPCInitAPI.is_some(),
            self.xPCFreeAPI.is_some(),
            self.xPCResolveAPI.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

impl XpcRaw {
    /// Calls `xPCReOpenPort`.
    pub fn reOpenPort(&self) -> Result<c_int> {
        let native = require(self.fns.xPCReOpenPort, "xPCReOpenPort")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCOpenSerialPort`.
    pub fn openSerialPort(&self, comport: c_int, baudRate: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCOpenSerialPort, "xPCOpenSerialPort")?;
        let retval = unsafe { native(comport, baudRate) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCClosePort`.
    pub fn closePort(&self) -> Result<()> {
        let native = require(self.fns.xPCClosePort, "xPCClosePort")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetLastError`.
    pub fn getLastError(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetLastError, "xPCGetLastError")?;
        let retval = unsafe { native() };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetLastError`.
    pub fn setLastError(&self, error: c_int) -> Result<()> {
        let native = require(self.fns.xPCSetLastError, "xPCSetLastError")?;
        unsafe { native(error) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetExecTime`.
    pub fn getExecTime(&self) -> Result<c_double> {
        let native = require(self.fns.xPCGetExecTime, "xPCGetExecTime")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetStopTime`.
    pub fn setStopTime(&self, tfinal: c_double) -> Result<()> {
        let native = require(self.fns.xPCSetStopTime, "xPCSetStopTime")?;
        unsafe { native(self.port, tfinal) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetStopTime`.
    pub fn getStopTime(&self) -> Result<c_double> {
        let native = require(self.fns.xPCGetStopTime, "xPCGetStopTime")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetSampleTime`.
    pub fn setSampleTime(&self, ts: c_double) -> Result<()> {
        let native = require(self.fns.xPCSetSampleTime, "xPCSetSampleTime")?;
        unsafe { native(self.port, ts) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetSampleTime`.
    pub fn getSampleTime(&self) -> Result<c_double> {
        let native = require(self.fns.xPCGetSampleTime, "xPCGetSampleTime")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetEcho`.
    pub fn setEcho(&self, mode: c_int) -> Result<()> {
        let native = require(self.fns.xPCSetEcho, "xPCSetEcho")?;
        unsafe { native(self.port, mode) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetEcho`.
    pub fn getEcho(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetEcho, "xPCGetEcho")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetHiddenScopeEcho`.
    pub fn setHiddenScopeEcho(&self, mode: c_int) -> Result<()> {
        let native = require(self.fns.xPCSetHiddenScopeEcho, "xPCSetHiddenScopeEcho")?;
        unsafe { native(self.port, mode) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetHiddenScopeEcho`.
    pub fn getHiddenScopeEcho(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetHiddenScopeEcho, "xPCGetHiddenScopeEcho")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCAverageTET`.
    pub fn averageTET(&self) -> Result<c_double> {
        let native = require(self.fns.xPCAverageTET, "xPCAverageTET")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetNumParams`.
    pub fn getNumParams(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetNumParams, "xPCGetNumParams")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetNumSignals`.
    pub fn getNumSignals(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetNumSignals, "xPCGetNumSignals")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetAppName`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getAppName(&self, modelname: *mut c_char) -> Result<*mut c_char> {
        let native = require(self.fns.xPCGetAppName, "xPCGetAppName")?;
        let retval = unsafe { native(self.port, modelname) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCUnloadApp`.
    pub fn unloadApp(&self) -> Result<()> {
        let native = require(self.fns.xPCUnloadApp, "xPCUnloadApp")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCStartApp`.
    pub fn startApp(&self) -> Result<()> {
        let native = require(self.fns.xPCStartApp, "xPCStartApp")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCStopApp`.
    pub fn stopApp(&self) -> Result<()> {
        let native = require(self.fns.xPCStopApp, "xPCStopApp")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCIsAppRunning`.
    pub fn isAppRunning(&self) -> Result<c_int> {
        let native = require(self.fns.xPCIsAppRunning, "xPCIsAppRunning")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCIsOverloaded`.
    pub fn isOverloaded(&self) -> Result<c_int> {
        let native = require(self.fns.xPCIsOverloaded, "xPCIsOverloaded")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetNumOutputs`.
    pub fn getNumOutputs(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetNumOutputs, "xPCGetNumOutputs")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetNumStates`.
    pub fn getNumStates(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetNumStates, "xPCGetNumStates")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetParam`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getParam(&self, parIdx: c_int, paramValue: *mut c_double) -> Result<()> {
        let native = require(self.fns.xPCGetParam, "xPCGetParam")?;
        unsafe { native(self.port, parIdx, paramValue) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCSetLogMode`.
    pub fn setLogMode(&self, lgdata: LgMode) -> Result<()> {
        let native = require(self.fns.xPCSetLogMode, "xPCSetLogMode")?;
        unsafe { native(self.port, lgdata) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCSetParam`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn setParam(&self, parIdx: c_int, paramValue: *mut c_double) -> Result<()> {
        let native = require(self.fns.xPCSetParam, "xPCSetParam")?;
        unsafe { native(self.port, parIdx, paramValue) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetLogMode`.
    pub fn getLogMode(&self) -> Result<LgMode> {
        let native = require(self.fns.xPCGetLogMode, "xPCGetLogMode")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCNumLogSamples`.
    pub fn numLogSamples(&self) -> Result<c_int> {
        let native = require(self.fns.xPCNumLogSamples, "xPCNumLogSamples")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCMaxLogSamples`.
    pub fn maxLogSamples(&self) -> Result<c_int> {
        let native = require(self.fns.xPCMaxLogSamples, "xPCMaxLogSamples")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCNumLogWraps`.
    pub fn numLogWraps(&self) -> Result<c_int> {
        let native = require(self.fns.xPCNumLogWraps, "xPCNumLogWraps")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCReboot`.
    pub fn reboot(&self) -> Result<()> {
        let native = require(self.fns.xPCReboot, "xPCReboot")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetOutputLog`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getOutputLog(
        &self,
        start: c_int,
        numsamples: c_int,
        decimation: c_int,
        output_id: c_int,
        data: *mut c_double,
    ) -> Result<()> {
        let native = require(self.fns.xPCGetOutputLog, "xPCGetOutputLog")?;
        unsafe { native(self.port, start, numsamples, decimation, output_id, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetStateLog`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getStateLog(
        &self,
        start: c_int,
        numsamples: c_int,
        decimation: c_int,
        state_id: c_int,
        data: *mut c_double,
    ) -> Result<()> {
        let native = require(self.fns.xPCGetStateLog, "xPCGetStateLog")?;
        unsafe { native(self.port, start, numsamples, decimation, state_id, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetTimeLog`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getTimeLog(
        &self,
        start: c_int,
        numsamples: c_int,
        decimation: c_int,
        data: *mut c_double,
    ) -> Result<()> {
        let native = require(self.fns.xPCGetTimeLog, "xPCGetTimeLog")?;
        unsafe { native(self.port, start, numsamples, decimation, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetTETLog`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getTETLog(
        &self,
        start: c_int,
        numsamples: c_int,
        decimation: c_int,
        data: *mut c_double,
    ) -> Result<()> {
        let native = require(self.fns.xPCGetTETLog, "xPCGetTETLog")?;
        unsafe { native(self.port, start, numsamples, decimation, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetData`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn scGetData(
        &self,
        scNum: c_int,
        signal_id: c_int,
        start: c_int,
        numsamples: c_int,
        decimation: c_int,
        data: *mut c_double,
    ) -> Result<()> {
        let native = require(self.fns.xPCScGetData, "xPCScGetData")?;
        unsafe { native(self.port, scNum, signal_id, start, numsamples, decimation, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCMinimumTET`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn minimumTET(&self, data: *mut c_double) -> Result<()> {
        let native = require(self.fns.xPCMinimumTET, "xPCMinimumTET")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCMaximumTET`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn maximumTET(&self, data: *mut c_double) -> Result<()> {
        let native = require(self.fns.xPCMaximumTET, "xPCMaximumTET")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetSignals`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getSignals(
        &self,
        numSignals: c_int,
        signals: *mut c_int,
        values: *mut c_double,
    ) -> Result<c_int> {
        let native = require(self.fns.xPCGetSignals, "xPCGetSignals")?;
        let retval = unsafe { native(self.port, numSignals, signals, values) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetSignal`.
    pub fn getSignal(&self, sigNum: c_int) -> Result<c_double> {
        let native = require(self.fns.xPCGetSignal, "xPCGetSignal")?;
        let retval = unsafe { native(self.port, sigNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCAddScope`.
    pub fn addScope(&self, r#type: c_int, scNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCAddScope, "xPCAddScope")?;
        unsafe { native(self.port, r#type, scNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCRemScope`.
    pub fn remScope(&self, scNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCRemScope, "xPCRemScope")?;
        unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScAddSignal`.
    pub fn scAddSignal(&self, scNum: c_int, sigNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCScAddSignal, "xPCScAddSignal")?;
        unsafe { native(self.port, scNum, sigNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScRemSignal`.
    pub fn scRemSignal(&self, scNum: c_int, sigNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCScRemSignal, "xPCScRemSignal")?;
        unsafe { native(self.port, scNum, sigNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScSetAutoRestart`.
    pub fn scSetAutoRestart(&self, scNum: c_int, autorestart: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetAutoRestart, "xPCScSetAutoRestart")?;
        unsafe { native(self.port, scNum, autorestart) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetAutoRestart`.
    pub fn scGetAutoRestart(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetAutoRestart, "xPCScGetAutoRestart")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetScopes`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getScopes(&self, data: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCGetScopes, "xPCGetScopes")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetHiddenScopes`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getHiddenScopes(&self, data: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCGetHiddenScopes, "xPCGetHiddenScopes")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetSignals`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn scGetSignals(&self, scNum: c_int, data: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCScGetSignals, "xPCScGetSignals")?;
        unsafe { native(self.port, scNum, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScSetDecimation`.
    pub fn scSetDecimation(&self, scNum: c_int, decimation: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetDecimation, "xPCScSetDecimation")?;
        unsafe { native(self.port, scNum, decimation) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetNumSignals`.
    pub fn scGetNumSignals(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetNumSignals, "xPCScGetNumSignals")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScGetDecimation`.
    pub fn scGetDecimation(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetDecimation, "xPCScGetDecimation")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetNumSamples`.
    pub fn scSetNumSamples(&self, scNum: c_int, samples: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetNumSamples, "xPCScSetNumSamples")?;
        unsafe { native(self.port, scNum, samples) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetNumSamples`.
    pub fn scGetNumSamples(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetNumSamples, "xPCScGetNumSamples")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScGetStartTime`.
    pub fn scGetStartTime(&self, scNum: c_int) -> Result<c_double> {
        let native = require(self.fns.xPCScGetStartTime, "xPCScGetStartTime")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScGetState`.
    pub fn scGetState(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetState, "xPCScGetState")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetTriggerLevel`.
    pub fn scSetTriggerLevel(&self, scNum: c_int, level: c_double) -> Result<()> {
        let native = require(self.fns.xPCScSetTriggerLevel, "xPCScSetTriggerLevel")?;
        unsafe { native(self.port, scNum, level) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetTriggerLevel`.
    pub fn scGetTriggerLevel(&self, scNum: c_int) -> Result<c_double> {
        let native = require(self.fns.xPCScGetTriggerLevel, "xPCScGetTriggerLevel")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetTriggerMode`.
    pub fn scSetTriggerMode(&self, scNum: c_int, mode: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetTriggerMode, "xPCScSetTriggerMode")?;
        unsafe { native(self.port, scNum, mode) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetTriggerMode`.
    pub fn scGetTriggerMode(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetTriggerMode, "xPCScGetTriggerMode")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetTriggerScope`.
    pub fn scSetTriggerScope(&self, scNum: c_int, trigMode: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetTriggerScope, "xPCScSetTriggerScope")?;
        unsafe { native(self.port, scNum, trigMode) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetTriggerScope`.
    pub fn scGetTriggerScope(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetTriggerScope, "xPCScGetTriggerScope")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetTriggerScopeSample`.
    pub fn scSetTriggerScopeSample(&self, scNum: c_int, trigScSamp: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetTriggerScopeSample, "xPCScSetTriggerScopeSample")?;
        unsafe { native(self.port, scNum, trigScSamp) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetTriggerScopeSample`.
    pub fn scGetTriggerScopeSample(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetTriggerScopeSample, "xPCScGetTriggerScopeSample")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetTriggerSignal`.
    pub fn scSetTriggerSignal(&self, scNum: c_int, trigSig: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetTriggerSignal, "xPCScSetTriggerSignal")?;
        unsafe { native(self.port, scNum, trigSig) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetTriggerSignal`.
    pub fn scGetTriggerSignal(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetTriggerSignal, "xPCScGetTriggerSignal")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetTriggerSlope`.
    pub fn scSetTriggerSlope(&self, scNum: c_int, trigSlope: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetTriggerSlope, "xPCScSetTriggerSlope")?;
        unsafe { native(self.port, scNum, trigSlope) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetTriggerSlope`.
    pub fn scGetTriggerSlope(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetTriggerSlope, "xPCScGetTriggerSlope")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSoftwareTrigger`.
    pub fn scSoftwareTrigger(&self, scNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSoftwareTrigger, "xPCScSoftwareTrigger")?;
        unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScStart`.
    pub fn scStart(&self, scNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCScStart, "xPCScStart")?;
        unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScStop`.
    pub fn scStop(&self, scNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCScStop, "xPCScStop")?;
        unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCIsScFinished`.
    pub fn isScFinished(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCIsScFinished, "xPCIsScFinished")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScGetNumPrePostSamples`.
    pub fn scGetNumPrePostSamples(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetNumPrePostSamples, "xPCScGetNumPrePostSamples")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScSetNumPrePostSamples`.
    pub fn scSetNumPrePostSamples(&self, scNum: c_int, prepost: c_int) -> Result<()> {
        let native = require(self.fns.xPCScSetNumPrePostSamples, "xPCScSetNumPrePostSamples")?;
        unsafe { native(self.port, scNum, prepost) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetScope`.
    pub fn getScope(&self, scNum: c_int) -> Result<ScopeData> {
        let native = require(self.fns.xPCGetScope, "xPCGetScope")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetScope`.
    pub fn setScope(&self, state: ScopeData) -> Result<()> {
        let native = require(self.fns.xPCSetScope, "xPCSetScope")?;
        unsafe { native(self.port, state) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCLoadApp`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn loadApp(&self, pathstr: *mut c_char, filename: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCLoadApp, "xPCLoadApp")?;
        unsafe { native(self.port, pathstr, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetParamDims`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getParamDims(&self, parIdx: c_int, dims: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCGetParamDims, "xPCGetParamDims")?;
        unsafe { native(self.port, parIdx, dims) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetParamDimsSize`.
    pub fn getParamDimsSize(&self, parIdx: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCGetParamDimsSize, "xPCGetParamDimsSize")?;
        let retval = unsafe { native(self.port, parIdx) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetSignalWidth`.
    pub fn getSignalWidth(&self, sigIdx: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCGetSignalWidth, "xPCGetSignalWidth")?;
        let retval = unsafe { native(self.port, sigIdx) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetSignalIdx`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getSignalIdx(&self, sigName: *mut c_char) -> Result<c_int> {
        let native = require(self.fns.xPCGetSignalIdx, "xPCGetSignalIdx")?;
        let retval = unsafe { native(self.port, sigName) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetSigLabelWidth`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getSigLabelWidth(&self, sigName: *mut c_char) -> Result<c_int> {
        let native = require(self.fns.xPCGetSigLabelWidth, "xPCGetSigLabelWidth")?;
        let retval = unsafe { native(self.port, sigName) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetSigIdxfromLabel`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getSigIdxfromLabel(
        &self,
        sigName: *mut c_char,
        sigIds: *mut c_int,
    ) -> Result<c_int> {
        let native = require(self.fns.xPCGetSigIdxfromLabel, "xPCGetSigIdxfromLabel")?;
        let retval = unsafe { native(self.port, sigName, sigIds) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetSignalLabel`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getSignalLabel(
        &self,
        sigIdx: c_int,
        sigLabel: *mut c_char,
    ) -> Result<*mut c_char> {
        let native = require(self.fns.xPCGetSignalLabel, "xPCGetSignalLabel")?;
        let retval = unsafe { native(self.port, sigIdx, sigLabel) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetParamIdx`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getParamIdx(&self, block: *mut c_char, parameter: *mut c_char) -> Result<c_int> {
        let native = require(self.fns.xPCGetParamIdx, "xPCGetParamIdx")?;
        let retval = unsafe { native(self.port, block, parameter) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetParamName`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getParamName(
        &self,
        parIdx: c_int,
        block: *mut c_char,
        param: *mut c_char,
    ) -> Result<()> {
        let native = require(self.fns.xPCGetParamName, "xPCGetParamName")?;
        unsafe { native(self.port, parIdx, block, param) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetParamType`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getParamType(&self, parIdx: c_int, paramType: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCGetParamType, "xPCGetParamType")?;
        unsafe { native(self.port, parIdx, paramType) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetSignalName`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getSignalName(&self, sigIdx: c_int, sigName: *mut c_char) -> Result<*mut c_char> {
        let native = require(self.fns.xPCGetSignalName, "xPCGetSignalName")?;
        let retval = unsafe { native(self.port, sigIdx, sigName) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCTgScGetGrid`.
    pub fn tgScGetGrid(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCTgScGetGrid, "xPCTgScGetGrid")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCTgScGetMode`.
    pub fn tgScGetMode(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCTgScGetMode, "xPCTgScGetMode")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCTgScGetViewMode`.
    pub fn tgScGetViewMode(&self) -> Result<c_int> {
        let native = require(self.fns.xPCTgScGetViewMode, "xPCTgScGetViewMode")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCTgScGetYLimits`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn tgScGetYLimits(&self, scNum: c_int, limits: *mut c_double) -> Result<()> {
        let native = require(self.fns.xPCTgScGetYLimits, "xPCTgScGetYLimits")?;
        unsafe { native(self.port, scNum, limits) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCTgScSetGrid`.
    pub fn tgScSetGrid(&self, scNum: c_int, flag: c_int) -> Result<()> {
        let native = require(self.fns.xPCTgScSetGrid, "xPCTgScSetGrid")?;
        unsafe { native(self.port, scNum, flag) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCTgScSetMode`.
    pub fn tgScSetMode(&self, scNum: c_int, flag: c_int) -> Result<()> {
        let native = require(self.fns.xPCTgScSetMode, "xPCTgScSetMode")?;
        unsafe { native(self.port, scNum, flag) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCTgScSetViewMode`.
    pub fn tgScSetViewMode(&self, scNum: c_int) -> Result<()> {
        let native = require(self.fns.xPCTgScSetViewMode, "xPCTgScSetViewMode")?;
        unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCTgScSetYLimits`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn tgScSetYLimits(&self, scNum: c_int, limits: *mut c_double) -> Result<()> {
        let native = require(self.fns.xPCTgScSetYLimits, "xPCTgScSetYLimits")?;
        unsafe { native(self.port, scNum, limits) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCTgScSetSignalFormat`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn tgScSetSignalFormat(
        &self,
        scNum: c_int,
        signalNo: c_int,
        signalFormat: *mut c_char,
    ) -> Result<()> {
        let native = require(self.fns.xPCTgScSetSignalFormat, "xPCTgScSetSignalFormat")?;
        unsafe { native(self.port, scNum, signalNo, signalFormat) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCTgScGetSignalFormat`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn tgScGetSignalFormat(
        &self,
        scNum: c_int,
        signalNo: c_int,
        signalFormat: *mut c_char,
    ) -> Result<*mut c_char> {
        let native = require(self.fns.xPCTgScGetSignalFormat, "xPCTgScGetSignalFormat")?;
        let retval = unsafe { native(self.port, scNum, signalNo, signalFormat) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetLoadTimeOut`.
    pub fn setLoadTimeOut(&self, timeOut: c_int) -> Result<()> {
        let native = require(self.fns.xPCSetLoadTimeOut, "xPCSetLoadTimeOut")?;
        unsafe { native(self.port, timeOut) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCErrorMsg`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn errorMsg(&self, errorno: c_int, errmsg: *mut c_char) -> Result<*mut c_char> {
        let native = require(self.fns.xPCErrorMsg, "xPCErrorMsg")?;
        let retval = unsafe { native(errorno, errmsg) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCScGetType`.
    pub fn scGetType(&self, scNum: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCScGetType, "xPCScGetType")?;
        let retval = unsafe { native(self.port, scNum) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetLoadTimeOut`.
    pub fn getLoadTimeOut(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetLoadTimeOut, "xPCGetLoadTimeOut")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCOpenTcpIpPort`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn openTcpIpPort(&self, address: *mut c_char, port: *mut c_char) -> Result<c_int> {
        let native = require(self.fns.xPCOpenTcpIpPort, "xPCOpenTcpIpPort")?;
        let retval = unsafe { native(address, port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCOpenConnection`.
    pub fn openConnection(&self) -> Result<()> {
        let native = require(self.fns.xPCOpenConnection, "xPCOpenConnection")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCCloseConnection`.
    pub fn closeConnection(&self) -> Result<()> {
        let native = require(self.fns.xPCCloseConnection, "xPCCloseConnection")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCRegisterTarget`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn registerTarget(
        &self,
        commType: c_int,
        ipAddress: *mut c_char,
        ipPort: *mut c_char,
        comPort: c_int,
        baudRate: c_int,
    ) -> Result<c_int> {
        let native = require(self.fns.xPCRegisterTarget, "xPCRegisterTarget")?;
        let retval = unsafe { native(commType, ipAddress, ipPort, comPort, baudRate) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCDeRegisterTarget`.
    pub fn deRegisterTarget(&self) -> Result<()> {
        let native = require(self.fns.xPCDeRegisterTarget, "xPCDeRegisterTarget")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetAPIVersion`.
    pub fn getAPIVersion(&self) -> Result<*mut c_char> {
        let native = require(self.fns.xPCGetAPIVersion, "xPCGetAPIVersion")?;
        let retval = unsafe { native() };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetTargetVersion`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getTargetVersion(&self, ver: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCGetTargetVersion, "xPCGetTargetVersion")?;
        unsafe { native(self.port, ver) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCTargetPing`.
    pub fn targetPing(&self) -> Result<c_int> {
        let native = require(self.fns.xPCTargetPing, "xPCTargetPing")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSReadFile`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSReadFile(
        &self,
        fileHandle: c_int,
        start: c_int,
        numsamples: c_int,
        data: *mut c_uchar,
    ) -> Result<()> {
        let native = require(self.fns.xPCFSReadFile, "xPCFSReadFile")?;
        unsafe { native(self.port, fileHandle, start, numsamples, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSRead`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSRead(
        &self,
        fileHandle: c_int,
        start: c_int,
        numsamples: c_int,
        data: *mut c_uchar,
    ) -> Result<c_int> {
        let native = require(self.fns.xPCFSRead, "xPCFSRead")?;
        let retval = unsafe { native(self.port, fileHandle, start, numsamples, data) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSWriteFile`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSWriteFile(
        &self,
        fileHandle: c_int,
        numbytes: c_int,
        data: *mut c_uchar,
    ) -> Result<()> {
        let native = require(self.fns.xPCFSWriteFile, "xPCFSWriteFile")?;
        unsafe { native(self.port, fileHandle, numbytes, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSBufferInfo`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSBufferInfo(&self, data: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSBufferInfo, "xPCFSBufferInfo")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSGetFileSize`.
    pub fn fSGetFileSize(&self, fileHandle: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCFSGetFileSize, "xPCFSGetFileSize")?;
        let retval = unsafe { native(self.port, fileHandle) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSOpenFile`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSOpenFile(&self, filename: *mut c_char, attrib: *mut c_char) -> Result<c_int> {
        let native = require(self.fns.xPCFSOpenFile, "xPCFSOpenFile")?;
        let retval = unsafe { native(self.port, filename, attrib) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSCloseFile`.
    pub fn fSCloseFile(&self, fileHandle: c_int) -> Result<()> {
        let native = require(self.fns.xPCFSCloseFile, "xPCFSCloseFile")?;
        unsafe { native(self.port, fileHandle) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSGetPWD`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSGetPWD(&self, data: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSGetPWD, "xPCFSGetPWD")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFTPGet`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fTPGet(
        &self,
        fileHandle: c_int,
        numbytes: c_int,
        filename: *mut c_char,
    ) -> Result<()> {
        let native = require(self.fns.xPCFTPGet, "xPCFTPGet")?;
        unsafe { native(self.port, fileHandle, numbytes, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFTPPut`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fTPPut(&self, fileHandle: c_int, filename: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFTPPut, "xPCFTPPut")?;
        unsafe { native(self.port, fileHandle, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSRemoveFile`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSRemoveFile(&self, filename: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSRemoveFile, "xPCFSRemoveFile")?;
        unsafe { native(self.port, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSCD`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSCD(&self, filename: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSCD, "xPCFSCD")?;
        unsafe { native(self.port, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSMKDIR`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSMKDIR(&self, dirname: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSMKDIR, "xPCFSMKDIR")?;
        unsafe { native(self.port, dirname) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSRMDIR`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSRMDIR(&self, dirname: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSRMDIR, "xPCFSRMDIR")?;
        unsafe { native(self.port, dirname) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSDir`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSDir(
        &self,
        path: *mut c_char,
        listing: *mut c_char,
        numbytes: c_int,
    ) -> Result<()> {
        let native = require(self.fns.xPCFSDir, "xPCFSDir")?;
        unsafe { native(self.port, path, listing, numbytes) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSDirSize`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSDirSize(&self, path: *mut c_char) -> Result<c_int> {
        let native = require(self.fns.xPCFSDirSize, "xPCFSDirSize")?;
        let retval = unsafe { native(self.port, path) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSGetError`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSGetError(&self, errCode: c_uint, message: *mut c_uchar) -> Result<()> {
        let native = require(self.fns.xPCFSGetError, "xPCFSGetError")?;
        unsafe { native(self.port, errCode, message) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCSaveParamSet`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn saveParamSet(&self, filename: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCSaveParamSet, "xPCSaveParamSet")?;
        unsafe { native(self.port, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCLoadParamSet`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn loadParamSet(&self, filename: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCLoadParamSet, "xPCLoadParamSet")?;
        unsafe { native(self.port, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSScSetFilename`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSScSetFilename(&self, scopeId: c_int, filename: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSScSetFilename, "xPCFSScSetFilename")?;
        unsafe { native(self.port, scopeId, filename) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSScGetFilename`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSScGetFilename(
        &self,
        scopeId: c_int,
        filename: *mut c_char,
    ) -> Result<*mut c_char> {
        let native = require(self.fns.xPCFSScGetFilename, "xPCFSScGetFilename")?;
        let retval = unsafe { native(self.port, scopeId, filename) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSScSetWriteMode`.
    pub fn fSScSetWriteMode(&self, scopeId: c_int, writeMode: c_int) -> Result<()> {
        let native = require(self.fns.xPCFSScSetWriteMode, "xPCFSScSetWriteMode")?;
        unsafe { native(self.port, scopeId, writeMode) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSScGetWriteMode`.
    pub fn fSScGetWriteMode(&self, scopeId: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCFSScGetWriteMode, "xPCFSScGetWriteMode")?;
        let retval = unsafe { native(self.port, scopeId) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSScSetWriteSize`.
    pub fn fSScSetWriteSize(&self, scopeId: c_int, writeSize: c_uint) -> Result<()> {
        let native = require(self.fns.xPCFSScSetWriteSize, "xPCFSScSetWriteSize")?;
        unsafe { native(self.port, scopeId, writeSize) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSScGetWriteSize`.
    pub fn fSScGetWriteSize(&self, scopeId: c_int) -> Result<c_uint> {
        let native = require(self.fns.xPCFSScGetWriteSize, "xPCFSScGetWriteSize")?;
        let retval = unsafe { native(self.port, scopeId) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCReadXML`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn readXML(&self, numbytes: c_int, data: *mut c_uchar) -> Result<()> {
        let native = require(self.fns.xPCReadXML, "xPCReadXML")?;
        unsafe { native(self.port, numbytes, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSDiskInfo`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSDiskInfo(&self, driveLetter: *mut c_char) -> Result<DiskInfo> {
        let native = require(self.fns.xPCFSDiskInfo, "xPCFSDiskInfo")?;
        let retval = unsafe { native(self.port, driveLetter) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSFileTable`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSFileTable(&self, tableBuffer: *mut c_char) -> Result<*mut c_char> {
        let native = require(self.fns.xPCFSFileTable, "xPCFSFileTable")?;
        let retval = unsafe { native(self.port, tableBuffer) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSDirItems`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSDirItems(
        &self,
        path: *mut c_char,
        dirs: *mut DirStruct,
        numDirItems: c_int,
    ) -> Result<()> {
        let native = require(self.fns.xPCFSDirItems, "xPCFSDirItems")?;
        unsafe { native(self.port, path, dirs, numDirItems) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSDirStructSize`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSDirStructSize(&self, path: *mut c_char) -> Result<c_int> {
        let native = require(self.fns.xPCFSDirStructSize, "xPCFSDirStructSize")?;
        let retval = unsafe { native(self.port, path) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetNumScopes`.
    pub fn getNumScopes(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetNumScopes, "xPCGetNumScopes")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetNumHiddenScopes`.
    pub fn getNumHiddenScopes(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetNumHiddenScopes, "xPCGetNumHiddenScopes")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetScopeList`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getScopeList(&self, data: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCGetScopeList, "xPCGetScopeList")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetHiddenList`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getHiddenList(&self, data: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCGetHiddenList, "xPCGetHiddenList")?;
        unsafe { native(self.port, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCScGetSignalList`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn scGetSignalList(&self, scNum: c_int, data: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCScGetSignalList, "xPCScGetSignalList")?;
        unsafe { native(self.port, scNum, data) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetSimMode`.
    pub fn getSimMode(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetSimMode, "xPCGetSimMode")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetPCIInfo`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getPCIInfo(&self, buf: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCGetPCIInfo, "xPCGetPCIInfo")?;
        unsafe { native(self.port, buf) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetSessionTime`.
    pub fn getSessionTime(&self) -> Result<c_double> {
        let native = require(self.fns.xPCGetSessionTime, "xPCGetSessionTime")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCGetLogStatus`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn getLogStatus(&self, logArray: *mut c_int) -> Result<()> {
        let native = require(self.fns.xPCGetLogStatus, "xPCGetLogStatus")?;
        unsafe { native(self.port, logArray) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSFileInfo`.
    pub fn fSFileInfo(&self, fileHandle: c_int) -> Result<FileHandleInfo> {
        let native = require(self.fns.xPCFSFileInfo, "xPCFSFileInfo")?;
        let retval = unsafe { native(self.port, fileHandle) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetDefaultStopTime`.
    pub fn setDefaultStopTime(&self) -> Result<()> {
        let native = require(self.fns.xPCSetDefaultStopTime, "xPCSetDefaultStopTime")?;
        unsafe { native(self.port) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCGetXMLSize`.
    pub fn getXMLSize(&self) -> Result<c_int> {
        let native = require(self.fns.xPCGetXMLSize, "xPCGetXMLSize")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCIsTargetScope`.
    pub fn isTargetScope(&self) -> Result<c_int> {
        let native = require(self.fns.xPCIsTargetScope, "xPCIsTargetScope")?;
        let retval = unsafe { native(self.port) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCSetTargetScopeUpdate`.
    pub fn setTargetScopeUpdate(&self, value: c_int) -> Result<()> {
        let native = require(self.fns.xPCSetTargetScopeUpdate, "xPCSetTargetScopeUpdate")?;
        unsafe { native(self.port, value) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSReNameFile`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn fSReNameFile(&self, fsName: *mut c_char, newName: *mut c_char) -> Result<()> {
        let native = require(self.fns.xPCFSReNameFile, "xPCFSReNameFile")?;
        unsafe { native(self.port, fsName, newName) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSScSetDynamicMode`.
    pub fn fSScSetDynamicMode(&self, scopeId: c_int, onoff: c_int) -> Result<()> {
        let native = require(self.fns.xPCFSScSetDynamicMode, "xPCFSScSetDynamicMode")?;
        unsafe { native(self.port, scopeId, onoff) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSScGetDynamicMode`.
    pub fn fSScGetDynamicMode(&self, scopeId: c_int) -> Result<c_int> {
        let native = require(self.fns.xPCFSScGetDynamicMode, "xPCFSScGetDynamicMode")?;
        let retval = unsafe { native(self.port, scopeId) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFSScSetMaxWriteFileSize`.
    pub fn fSScSetMaxWriteFileSize(&self, scopeId: c_int, maxWriteFileSize: c_uint) -> Result<()> {
        let native = require(self.fns.xPCFSScSetMaxWriteFileSize, "xPCFSScSetMaxWriteFileSize")?;
        unsafe { native(self.port, scopeId, maxWriteFileSize) };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCFSScGetMaxWriteFileSize`.
    pub fn fSScGetMaxWriteFileSize(&self, scopeId: c_int) -> Result<c_uint> {
        let native = require(self.fns.xPCFSScGetMaxWriteFileSize, "xPCFSScGetMaxWriteFileSize")?;
        let retval = unsafe { native(self.port, scopeId) };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCInitAPI`.
    pub fn initAPI(&self) -> Result<c_int> {
        let native = require(self.fns.xPCInitAPI, "xPCInitAPI")?;
        let retval = unsafe { native() };
        self.check_error()?;
        Ok(retval)
    }

    /// Calls `xPCFreeAPI`.
    pub fn freeAPI(&self) -> Result<()> {
        let native = require(self.fns.xPCFreeAPI, "xPCFreeAPI")?;
        unsafe { native() };
        self.check_error()?;
        Ok(())
    }

    /// Calls `xPCResolveAPI`.
    ///
    /// # Safety
    ///
    /// Pointer arguments must be valid for every read and write the native call makes.
    pub unsafe fn resolveAPI(&self, module: *mut c_void) -> Result<c_int> {
        let native = require(self.fns.xPCResolveAPI, "xPCResolveAPI")?;
        let retval = unsafe { native(module) };
        self.check_error()?;
        Ok(retval)
    }
}
