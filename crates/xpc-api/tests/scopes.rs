mod common;

use common::{connected, install_model, with};
use xpc_api::{XpcError, SCST, SCTYPE};

#[test]
fn discovery_stops_at_sentinel() {
    let api = connected();
    with(|t| {
        t.scopes = vec![1, 3];
        t.stale_scopes = vec![9, 12];
    });
    let ids: Vec<i32> = api.scopes().unwrap().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn new_scope_id_follows_largest() {
    let api = connected();
    assert_eq!(api.add_scope(SCTYPE::HOST, None).unwrap().id(), 1);

    with(|t| t.scopes = vec![3, 1]);
    let scope = api.add_scope(SCTYPE::TARGET, None).unwrap();
    assert_eq!(scope.id(), 4);
    assert_eq!(with(|t| t.added_scopes.last().copied()), Some((2, 4)));
}

#[test]
fn explicit_scope_id_is_used_as_given() {
    let api = connected();
    with(|t| t.scopes = vec![1]);
    assert_eq!(api.add_scope(SCTYPE::FILE, Some(10)).unwrap().id(), 10);

    api.remove_scope(api.scope(1)).unwrap();
    let ids: Vec<i32> = api.scopes().unwrap().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![10]);
}

#[test]
fn scope_signals_resolve_to_named_handles() {
    let api = connected();
    install_model();
    let scope = api.add_scope(SCTYPE::HOST, None).unwrap();
    scope.add_signal(&api, 2).unwrap();
    scope.add_signal(&api, 0).unwrap();

    let signals = scope.signals(&api).unwrap();
    let paths: Vec<&str> = signals.iter().map(|s| s.path()).collect();
    assert_eq!(paths, vec!["Clock", "Plant/Motor/Speed"]);
    assert_eq!(signals[0].read(&api).unwrap(), 0.5);
}

#[test]
fn trigger_signal_sentinel_means_none() {
    let api = connected();
    install_model();
    assert_eq!(api.scope(1).trigger_signal(&api).unwrap(), None);

    let trigger = api.scope(2).trigger_signal(&api).unwrap().unwrap();
    assert_eq!(trigger.path(), "Plant/Motor/Speed");
}

#[test]
fn state_decodes_into_enum() {
    let api = connected();
    assert_eq!(api.scope(1).state(&api).unwrap(), SCST::ACQUIRING);
}

#[test]
fn unknown_enum_value_is_reported() {
    let api = connected();
    assert!(matches!(
        api.scope(1).scope_type(&api),
        Err(XpcError::UnknownValue { group: "SCTYPE", value: 42 })
    ));
}
