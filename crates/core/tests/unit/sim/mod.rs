use std::io::Write as _;

use e20_core::{Cpu, load_program};
use tempfile::NamedTempFile;

#[test]
fn loaded_program_runs_to_halt_through_public_api() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ram[0] = 16'b0010000000000001;").unwrap();
    writeln!(file, "ram[1] = 16'b0100000000000001;").unwrap();
    let memory = load_program(file.path()).unwrap();

    let mut cpu = Cpu::new(memory, None);
    cpu.run(|_| {});
    assert_eq!(cpu.pc().val(), 1);
}

#[test]
fn out_of_range_address_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ram[0] = 16'b0000000000000000;").unwrap();
    writeln!(file, "ram[2] = 16'b0000000000000000;").unwrap();
    let err = load_program(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Memory addresses encountered out of sequence: 2");
}
