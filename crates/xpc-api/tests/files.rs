mod common;

use std::io::Read;
use std::os::raw::c_char;

use common::{connected, with, ERR_NO_FILE};
use xpc_api::{DirStruct, XpcError};

fn install_file(name: &str, len: usize) -> Vec<u8> {
    let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    with(|t| t.files.insert(name.to_string(), data.clone()));
    data
}

#[test]
fn chunked_reads_cover_file_then_run_dry() {
    let api = connected();
    let data = install_file("data.dat", 1000);
    let mut file = api.open_file("data.dat", "r").unwrap();
    assert_eq!(file.size(), 1000);

    let mut collected = Vec::new();
    for _ in 0..3 {
        collected.extend(file.read_bytes(Some(400)).unwrap());
    }
    assert_eq!(collected, data);
    assert_eq!(file.remaining(), 0);
    assert!(file.read_bytes(Some(400)).unwrap().is_empty());
    assert!(file.read_bytes(None).unwrap().is_empty());

    let reads = with(|t| t.reads.clone());
    assert_eq!(reads, vec![(0, 400), (400, 400), (800, 200)]);
}

#[test]
fn read_without_length_returns_remainder() {
    let api = connected();
    let data = install_file("log.txt", 64);
    let mut file = api.open_file("log.txt", "r").unwrap();
    file.read_bytes(Some(10)).unwrap();
    assert_eq!(file.read_bytes(None).unwrap(), data[10..]);
    assert_eq!(file.position(), 64);
}

#[test]
fn empty_file_reads_without_native_call() {
    let api = connected();
    install_file("empty", 0);
    let mut file = api.open_file("empty", "r").unwrap();
    assert!(file.read_bytes(None).unwrap().is_empty());
    assert!(with(|t| t.reads.is_empty()));
}

#[test]
fn write_mode_is_unsupported() {
    let api = connected();
    install_file("data.dat", 4);
    assert!(matches!(
        api.open_file("data.dat", "w"),
        Err(XpcError::UnsupportedMode { mode }) if mode == "w"
    ));
}

#[test]
fn missing_file_is_native_error() {
    let api = connected();
    assert!(matches!(
        api.open_file("nope.dat", "r"),
        Err(XpcError::Native { code: ERR_NO_FILE, .. })
    ));
}

#[test]
fn close_is_idempotent_and_blocks_reads() {
    let api = connected();
    install_file("data.dat", 16);
    let mut file = api.open_file("data.dat", "r").unwrap();
    file.close().unwrap();
    file.close().unwrap();
    assert!(file.is_closed());
    assert!(matches!(file.read_bytes(Some(4)), Err(XpcError::FileClosed)));
    drop(file);
    assert_eq!(with(|t| t.closed_files.len()), 1);
}

#[test]
fn dropping_open_file_closes_handle() {
    let api = connected();
    install_file("data.dat", 16);
    {
        let _file = api.open_file("data.dat", "r").unwrap();
        assert_eq!(with(|t| t.open_files.len()), 1);
    }
    assert!(with(|t| t.open_files.is_empty()));
}

#[test]
fn io_read_adapter_streams_whole_file() {
    let api = connected();
    let data = install_file("big.bin", 5000);
    let mut file = api.open_file("big.bin", "r").unwrap();
    let mut out = Vec::new();
    file.read_to_end(&mut out).unwrap();
    assert_eq!(out, data);
}

fn padded<const N: usize>(text: &str) -> [c_char; N] {
    let mut out = [b' ' as c_char; N];
    for (slot, b) in out.iter_mut().zip(text.bytes()) {
        *slot = b as c_char;
    }
    out
}

#[test]
fn directory_listing_decodes_entries() {
    let api = connected();
    with(|t| {
        t.dir = vec![
            DirStruct {
                name: padded("DATA"),
                ext: padded("DAT"),
                day: 1,
                month: 2,
                year: 2020,
                size: 4096,
                ..Default::default()
            },
            DirStruct {
                name: padded("LOGS"),
                ext: padded(""),
                is_dir: 1,
                ..Default::default()
            },
        ]
    });
    let entries = api.list_dir("C:\\").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "DATA.DAT");
    assert_eq!(entries[0].size, 4096);
    assert!(entries[0].modified.is_some());
    assert_eq!(entries[1].name, "LOGS");
    assert!(entries[1].is_dir);
    assert!(entries[1].modified.is_none());
}

#[test]
fn empty_directory_skips_item_transfer() {
    let api = connected();
    assert!(api.list_dir("C:\\").unwrap().is_empty());
}
