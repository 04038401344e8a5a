//! Data-directory override, in a process that sets it before first use.

use std::path::Path;

use charset_core::data;

#[test]
fn first_override_wins_and_sticks() {
    assert!(data::set_data_dir("/opt/charset-data"));
    assert_eq!(data::data_dir(), Path::new("/opt/charset-data"));
    assert_eq!(
        data::locate("big5.dat"),
        Path::new("/opt/charset-data").join("big5.dat")
    );

    assert!(!data::set_data_dir("/somewhere/else"));
    assert_eq!(data::data_dir(), Path::new("/opt/charset-data"));
}
