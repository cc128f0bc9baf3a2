//! The `tinyc` binary.

fn main() {
    if let Err(e) = tinyc_drv::main() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
