/*!
error.rs - Error taxonomy for the 65C02 core.

Every fallible public operation returns `Result<T, CpuError<B::Error>>`. The
bus's own associated error type is threaded through generically (`Bus(#[from] E)`)
so a host's IO failure keeps its original type and message all the way out of
`step`/`run` instead of being collapsed to a status integer.
*/

/// A value the host passed for `personality` that does not correspond to a
/// known 65C02 variant. Produced by `Personality::try_from(u8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid personality value: {0}")]
pub struct InvalidPersonality(pub u8);

/// A value the host passed for `emulation_mode` that is not Strict or NopMap.
/// Produced by `EmulationMode::try_from(u8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid emulation mode value: {0}")]
pub struct InvalidEmulationMode(pub u8);

/// Errors surfaced by the core. Generic over the host bus's own error type
/// so bus failures propagate verbatim rather than being stringified.
#[derive(Debug, thiserror::Error)]
pub enum CpuError<E> {
    /// An opcode with no valid executor was fetched while the CPU is in
    /// `Strict` emulation mode (or is personality-excluded on the current
    /// personality in any mode).
    #[error("invalid opcode 0x{opcode:02X} at PC={pc:#06X}")]
    InvalidOpcode { opcode: u8, pc: u16 },

    /// Raised by `Personality::try_from(u8)`, never by `Cpu::new` (which
    /// takes a typed `Personality` and cannot be constructed with a bad one).
    #[error(transparent)]
    InvalidPersonality(#[from] InvalidPersonality),

    /// Raised by `EmulationMode::try_from(u8)`, never by `Cpu::new`.
    #[error(transparent)]
    InvalidEmulationMode(#[from] InvalidEmulationMode),

    /// Reserved for API stability; no constructor in this crate returns it
    /// (see DESIGN.md for why: `Cpu::new` performs no separate heap
    /// allocation of its own, and Rust's global allocator aborts rather
    /// than returning a recoverable error on allocation failure).
    #[error("out of memory")]
    OutOfMemory,

    /// The CPU is crashed; only `reset` can clear this.
    #[error("processor is crashed; reset required")]
    InvalidProcessorState,

    /// The CPU is stopped (via STP); only `reset` can clear this.
    #[error("processor is stopped; reset required")]
    ProcessorStopped,

    /// A bus read or write failed; carries the host's own error type
    /// unchanged.
    #[error("bus error: {0}")]
    Bus(#[from] E),
}
