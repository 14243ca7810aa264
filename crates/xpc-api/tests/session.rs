mod common;

use std::fs;

use common::{api, calls_to, connected, install_model, with, ERR_BAD_INDEX, ERR_NO_CONNECTION};
use xpc_api::{SessionState, XpcError};

#[test]
fn open_and_close_walk_the_lifecycle() {
    let mut api = api();
    assert_eq!(api.state(), SessionState::Closed);
    assert_eq!(api.raw().port(), -1);

    api.open_tcp_ip("192.168.0.10", 22222).unwrap();
    assert_eq!(api.state(), SessionState::Open);
    assert_eq!(api.raw().port(), 7);

    api.close().unwrap();
    assert_eq!(api.state(), SessionState::Closed);
    assert_eq!(api.raw().port(), -1);
    assert_eq!(calls_to("xPCClosePort"), 1);
}

#[test]
fn failed_close_still_resets_session() {
    let mut api = connected();
    install_model();
    api.model().unwrap();
    assert_eq!(calls_to("xPCGetNumSignals"), 1);

    with(|t| t.fail_close = true);
    let err = api.close().unwrap_err();
    assert!(matches!(
        err,
        XpcError::Native { code: ERR_NO_CONNECTION, .. }
    ));
    assert_eq!(api.raw().port(), -1);
    assert_eq!(api.state(), SessionState::Closed);
    assert_eq!(with(|t| t.last_error), 0);

    api.open_tcp_ip("192.168.0.10", 22222).unwrap();
    api.model().unwrap();
    assert_eq!(calls_to("xPCGetNumSignals"), 2);
}

#[test]
fn closing_closed_session_skips_native_call() {
    let mut api = api();
    api.close().unwrap();
    assert_eq!(calls_to("xPCClosePort"), 0);

    api.open_serial(1, 115_200).unwrap();
    api.close().unwrap();
    api.close().unwrap();
    assert_eq!(calls_to("xPCClosePort"), 1);
}

#[test]
fn serial_session_uses_returned_port() {
    let mut api = api();
    api.open_serial(1, 115_200).unwrap();
    assert_eq!(api.raw().port(), 3);
    assert!(api.ping().unwrap());
}

#[test]
fn failed_open_reports_native_message_and_stays_closed() {
    let mut api = api();
    let err = api.open_tcp_ip("unreachable", 22222).unwrap_err();
    match err {
        XpcError::Native { code, message } => {
            assert_eq!(code, ERR_NO_CONNECTION);
            assert_eq!(message, "Could not connect to target");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(api.state(), SessionState::Closed);
}

#[test]
fn error_is_consumed_after_being_raised() {
    let api = connected();
    assert!(matches!(
        api.signal_name(99),
        Err(XpcError::Native { code: ERR_BAD_INDEX, .. })
    ));
    assert_eq!(with(|t| t.last_error), 0);
    assert_eq!(api.num_signals().unwrap(), 0);
}

#[test]
fn load_app_passes_directory_and_stem() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("pendulum.dlm");
    fs::write(&bundle, b"bundle").unwrap();

    let mut api = connected();
    api.load_app(&bundle).unwrap();
    assert_eq!(api.state(), SessionState::Loaded);

    let (loaded_dir, loaded_name) = with(|t| t.loaded.clone()).unwrap();
    assert_eq!(loaded_dir, dir.path().to_str().unwrap());
    assert_eq!(loaded_name, "pendulum");

    api.unload_app().unwrap();
    assert_eq!(api.state(), SessionState::Open);
    assert!(with(|t| t.loaded.is_none()));
}

#[test]
fn load_app_accepts_uppercase_extension() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("PLANT.DLM");
    fs::write(&bundle, b"bundle").unwrap();

    let mut api = connected();
    api.load_app(&bundle).unwrap();
    assert_eq!(with(|t| t.loaded.clone()).unwrap().1, "PLANT");
}

#[test]
fn load_app_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = connected();
    let err = api.load_app(dir.path().join("absent.dlm")).unwrap_err();
    assert!(matches!(err, XpcError::InvalidApplication { .. }));
    assert!(err.to_string().contains("does not exist"));
    assert_eq!(calls_to("xPCLoadApp"), 0);
    assert_eq!(api.state(), SessionState::Open);
}

#[test]
fn load_app_rejects_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("pendulum.mdl");
    fs::write(&bundle, b"model").unwrap();

    let mut api = connected();
    let err = api.load_app(&bundle).unwrap_err();
    assert!(err.to_string().contains(".dlm"));
    assert_eq!(calls_to("xPCLoadApp"), 0);
}

#[test]
fn api_version_reads_static_string() {
    let api = api();
    assert_eq!(api.api_version().unwrap(), "4.3");
}

#[test]
fn missing_native_function_is_unavailable() {
    let api = connected();
    assert!(matches!(
        api.start_app(),
        Err(XpcError::Unavailable { function: "xPCStartApp" })
    ));
}

#[test]
fn load_timeout_round_trips_through_target() {
    let api = connected();
    api.set_load_timeout(30).unwrap();
    assert_eq!(api.load_timeout().unwrap(), 30);
}

#[test]
fn batch_signal_read_skips_native_call_when_empty() {
    let api = connected();
    install_model();
    assert!(api.signals(&[]).unwrap().is_empty());
    assert_eq!(calls_to("xPCGetSignals"), 0);

    assert_eq!(api.signals(&[2, 0]).unwrap(), vec![0.5, 1500.0]);
    assert_eq!(calls_to("xPCGetSignals"), 1);
}

#[test]
fn scalar_param_get_and_set() {
    let api = connected();
    install_model();
    assert_eq!(api.param_dims(0).unwrap(), (1, 1));
    assert_eq!(api.param(0).unwrap(), 2.0);
    api.set_param(0, 3.5).unwrap();
    assert_eq!(with(|t| t.params[0].value), 3.5);
}

#[test]
fn non_scalar_param_is_refused_before_any_transfer() {
    let api = connected();
    install_model();
    let err = api.param(1).unwrap_err();
    assert!(matches!(err, XpcError::NotImplemented { .. }));
    assert!(err.to_string().contains("1x4"));
    assert!(matches!(
        api.set_param(1, 1.0),
        Err(XpcError::NotImplemented { .. })
    ));
    assert_eq!(calls_to("xPCGetParam"), 0);
    assert_eq!(calls_to("xPCSetParam"), 0);
    assert_eq!(calls_to("xPCGetParamDims"), 2);
}

#[test]
fn param_name_splits_block_and_name() {
    let api = connected();
    install_model();
    assert_eq!(
        api.param_name(0).unwrap(),
        ("Controller/Gain".to_string(), "Gain".to_string())
    );
}
