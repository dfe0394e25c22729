use std::io::Write;

use macvendor_common::vendors::VendorLookup;

pub const NOT_FOUND_LINE: &str = "Vendor information not found.";

/// The single stdout line for a lookup. Misses and failures read the same.
pub fn vendor_line(result: &VendorLookup) -> String {
    match result.vendor() {
        Some(vendor) => format!("Vendor: {vendor}"),
        None => NOT_FOUND_LINE.to_string(),
    }
}

pub fn print_result<W: Write>(out: &mut W, result: &VendorLookup) -> std::io::Result<()> {
    writeln!(out, "{}", vendor_line(result))
}
