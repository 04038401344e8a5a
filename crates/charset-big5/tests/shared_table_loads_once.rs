//! The shared table is read from disk once and reused for the life of
//! the process. Each table scenario lives in its own file so it gets a
//! fresh process and a fresh cache.

use std::fs;

use charset_big5::{BIG5_DATA, Big5Decoder, TABLE_LEN};
use charset_core::{Registry, Translator, data, translate_all};

#[test]
fn table_is_read_once_and_shared() {
    let dir = tempfile::tempdir().unwrap();
    let mut raw = vec![0xFFu8; TABLE_LEN];
    raw[471] = b'A';
    fs::write(dir.path().join(BIG5_DATA), &raw).unwrap();
    assert!(data::set_data_dir(dir.path()));

    let mut first = Big5Decoder::new().unwrap();
    let (_, out) = first.translate(&[0xA4, 0x40], true).unwrap();
    assert_eq!(out, b"A");

    // With the file gone, a fresh decoder still gets the cached table.
    fs::remove_file(dir.path().join(BIG5_DATA)).unwrap();
    let mut second = Big5Decoder::new().unwrap();
    let (_, out) = second.translate(&[0xA4, 0x40], true).unwrap();
    assert_eq!(out, b"A");

    // The registry route shares the same table.
    let mut registry = Registry::new();
    charset_big5::register(&mut registry);
    let mut third = registry.translator("Big-5").unwrap();
    assert_eq!(translate_all(third.as_mut(), &[0xA4, 0x40]).unwrap(), b"A");
}
