mod common;

use std::fs;

use common::{calls_to, connected, install_model, with, FakeSignal};

#[test]
fn model_files_signals_and_params_under_blocks() {
    let api = connected();
    install_model();
    let model = api.model().unwrap();

    let speed = model.lookup("Plant.Motor.Speed").as_signal().unwrap();
    assert_eq!(speed.index(), 0);
    assert_eq!(speed.path(), "Plant/Motor/Speed");
    assert_eq!(speed.read(&api).unwrap(), 1500.0);

    let gain = model.lookup("Controller.Gain.Gain").as_param().unwrap();
    assert_eq!(gain.get(&api).unwrap(), 2.0);
    gain.set(&api, 4.0).unwrap();
    assert_eq!(with(|t| t.params[0].value), 4.0);

    assert!(model.lookup("Clock").as_signal().is_some());
    assert!(model.lookup("Plant.Motor").as_block().is_some());
    assert!(!model.lookup("Plant.Nothing").is_found());
}

#[test]
fn signal_label_replaces_leaf_name() {
    let api = connected();
    install_model();
    let model = api.model().unwrap();
    let labelled = model.lookup("Plant.Motor.rpm_out").as_signal().unwrap();
    assert_eq!(labelled.index(), 1);
    assert_eq!(labelled.path(), "Plant/Motor/Out1");
    assert!(!model.lookup("Plant.Motor.Out1").is_found());
}

#[test]
fn model_is_built_once_per_session_state() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("plant.dlm");
    fs::write(&bundle, b"bundle").unwrap();

    let mut api = connected();
    install_model();
    api.model().unwrap();
    api.model().unwrap();
    assert_eq!(calls_to("xPCGetNumSignals"), 1);

    api.load_app(&bundle).unwrap();
    api.model().unwrap();
    assert_eq!(calls_to("xPCGetNumSignals"), 2);

    api.close().unwrap();
    api.open_tcp_ip("192.168.0.10", 22222).unwrap();
    api.model().unwrap();
    assert_eq!(calls_to("xPCGetNumSignals"), 3);
}

#[test]
fn sanitized_name_clash_keeps_later_entry() {
    let api = connected();
    with(|t| {
        t.signals = vec![
            FakeSignal {
                name: "Plant/out-1".into(),
                label: String::new(),
                value: 1.0,
            },
            FakeSignal {
                name: "Plant/out 1".into(),
                label: String::new(),
                value: 2.0,
            },
        ];
    });
    let model = api.model().unwrap();

    let kept = model.lookup("Plant.out_1").as_signal().unwrap();
    assert_eq!(kept.index(), 1);

    let collisions = model.collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].key, "out_1");
    assert_eq!(collisions[0].replaced, "Plant/out-1");
    assert_eq!(collisions[0].kept, "Plant/out 1");
}

#[test]
fn tree_outline_lists_blocks() {
    let api = connected();
    install_model();
    let tree = api.model().unwrap().tree();
    assert!(tree.starts_with("model root\n"));
    assert!(tree.contains("\n  Controller\n"));
    assert!(tree.contains("\n    Plant/Motor"));
}
