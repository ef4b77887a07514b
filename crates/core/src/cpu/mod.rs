//! The E20 fetch-decode-execute interpreter.

/// The fixed-size memory image.
pub mod memory;

pub use memory::Memory;

use crate::cache::hierarchy::{AccessEvent, CacheHierarchy};
use crate::common::addr::Addr;
use crate::common::reg::RegisterFile;
use crate::isa::decode::{Instruction, decode, j_target};

/// Outcome of a single fetch-decode-execute cycle.
pub enum StepOutcome {
    /// The fetched instruction was an unconditional jump to itself. No
    /// state changed and no trace line was emitted.
    Halted,
    /// The cycle ran to completion; carries whatever cache trace events
    /// (zero, one, or two) it produced.
    Continued(Vec<AccessEvent>),
}

/// The full simulated machine: program counter, registers, memory, and an
/// optional cache hierarchy.
pub struct Cpu {
    pc: Addr,
    regs: RegisterFile,
    memory: Memory,
    cache: Option<CacheHierarchy>,
}

impl Cpu {
    /// Creates a machine at its initial state: `PC = 0`, all registers
    /// zero, with the given loaded memory image and optional caches.
    #[must_use]
    pub fn new(memory: Memory, cache: Option<CacheHierarchy>) -> Self {
        Self {
            pc: Addr::new(0),
            regs: RegisterFile::new(),
            memory,
            cache,
        }
    }

    /// Current program counter, exposed for trace/debug purposes.
    #[must_use]
    pub fn pc(&self) -> Addr {
        self.pc
    }

    /// Reads a single register, for debugging and tests.
    #[must_use]
    pub fn register(&self, idx: usize) -> u16 {
        self.regs.read(idx)
    }

    /// Executes one cycle: fetch, halt check, decode, execute, advance PC.
    pub fn step(&mut self) -> StepOutcome {
        let word = self.memory.read(self.pc);

        if let Some(target) = j_target(word) {
            if target == self.pc.val() {
                return StepOutcome::Halted;
            }
        }

        let instr = decode(word);
        let fetch_pc = self.pc;
        let mut events = Vec::new();

        let next_pc = match instr {
            Instruction::Add { ra, rb, rdst } => {
                self.regs
                    .write(rdst, self.regs.read(ra).wrapping_add(self.regs.read(rb)));
                self.pc.next()
            }
            Instruction::Sub { ra, rb, rdst } => {
                self.regs
                    .write(rdst, self.regs.read(ra).wrapping_sub(self.regs.read(rb)));
                self.pc.next()
            }
            Instruction::And { ra, rb, rdst } => {
                self.regs.write(rdst, self.regs.read(ra) & self.regs.read(rb));
                self.pc.next()
            }
            Instruction::Or { ra, rb, rdst } => {
                self.regs.write(rdst, self.regs.read(ra) | self.regs.read(rb));
                self.pc.next()
            }
            Instruction::Slt { ra, rb, rdst } => {
                self.regs
                    .write(rdst, u16::from(self.regs.read(ra) < self.regs.read(rb)));
                self.pc.next()
            }
            Instruction::Jr { rsrc } => Addr::new(u32::from(self.regs.read(rsrc))),
            Instruction::Addi { rsrc, rdst, imm7 } => {
                let val = (i32::from(self.regs.read(rsrc)) + i32::from(imm7)) as u16;
                self.regs.write(rdst, val);
                self.pc.next()
            }
            Instruction::J { target } => Addr::new(u32::from(target)),
            Instruction::Jal { target } => {
                self.regs.write(7, self.pc.val() + 1);
                Addr::new(u32::from(target))
            }
            Instruction::Lw { raddr, rdst, imm7 } => {
                let eff = Addr::new(u32::from(self.regs.read(raddr))).offset(i32::from(imm7));
                let value = self.memory.read(eff);
                self.regs.write(rdst, value);
                if let Some(cache) = &mut self.cache {
                    events = cache.on_load(fetch_pc, eff);
                }
                self.pc.next()
            }
            Instruction::Sw { raddr, rsrc, imm7 } => {
                let eff = Addr::new(u32::from(self.regs.read(raddr))).offset(i32::from(imm7));
                self.memory.write(eff, self.regs.read(rsrc));
                if let Some(cache) = &mut self.cache {
                    events = cache.on_store(fetch_pc, eff);
                }
                self.pc.next()
            }
            Instruction::Jeq { ra, rb, imm7 } => {
                if self.regs.read(ra) == self.regs.read(rb) {
                    self.pc.offset(1 + i32::from(imm7))
                } else {
                    self.pc.next()
                }
            }
            Instruction::Slti { rsrc, rdst, imm7 } => {
                self.regs
                    .write(rdst, u16::from(self.regs.read(rsrc) < imm7 as u16));
                self.pc.next()
            }
            Instruction::Nop => self.pc.next(),
        };

        self.pc = next_pc;
        StepOutcome::Continued(events)
    }

    /// Runs to halt, invoking `on_event` for each trace line as it is
    /// produced (in execution order, L1-before-L2 within a cycle).
    pub fn run<F: FnMut(&AccessEvent)>(&mut self, mut on_event: F) {
        loop {
            match self.step() {
                StepOutcome::Halted => {
                    tracing::info!(pc = self.pc.val(), "halted");
                    return;
                }
                StepOutcome::Continued(events) => {
                    for event in &events {
                        on_event(event);
                    }
                }
            }
        }
    }
}
