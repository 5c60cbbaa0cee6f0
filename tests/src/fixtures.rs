//! Shared schema and records.

use tabula::{attachment, boolean, number, table, text, Table};
use tabula_core::driver::RawRecord;

pub fn users() -> Table {
    table(
        "Users",
        [
            ("name", text("Full Name")),
            ("age", number("Years Old")),
            ("active", boolean("Is Active")),
            ("avatar", attachment("Profile Picture")),
        ],
    )
}

pub fn alice() -> RawRecord {
    RawRecord::new("rec1")
        .with("Full Name", "Alice")
        .with("Years Old", 30)
        .with("Is Active", true)
}

pub fn bob() -> RawRecord {
    RawRecord::new("rec2").with("Full Name", "Bob")
}
