#![doc = r#"
A cycle-budgeted 65C02 CPU core, generic over a host-supplied bus.

Modules:
- bus: the `Bus` trait a host implements to provide memory/IO access
- cpu: the `Cpu` facade and its internal addressing/dispatch/state machinery
- error: `CpuError`, the error type threaded through every fallible operation
- personality: `Personality` (MOS/Rockwell/WDC) and `EmulationMode` (Strict/NopMap)

In tests, a flat-memory `Bus` implementation is available under
`crate::test_support`.
"#]

pub mod bus;
pub mod cpu;
pub mod error;
pub mod personality;

pub use bus::Bus;
pub use cpu::Cpu;
pub use error::CpuError;
pub use personality::{EmulationMode, Personality};

#[cfg(test)]
pub(crate) mod test_support;
