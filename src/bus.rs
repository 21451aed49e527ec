/*!
bus.rs - Host-supplied memory/IO interface.

The core never owns addressable memory; it accesses the host's address
space exclusively through this trait. Neither method is assumed to be
reentrant with respect to the emulator: a `Bus` implementation must not
call back into the `Cpu` that is driving it.

This plays the role of the original source's `read_fn`/`write_fn` pair
plus opaque `context` pointer: the host's own type implementing `Bus` *is*
the context, and its associated `Error` type is threaded through `CpuError`
so a bus failure keeps its original shape all the way out of `step`/`run`.
*/

/// A single byte-addressable memory/IO space, 16 bits wide, supplied by the
/// host embedding this core.
pub trait Bus {
    /// The error a read or write can fail with. Propagated verbatim through
    /// `CpuError::Bus`.
    type Error;

    /// Read one byte at `addr`.
    fn read(&mut self, addr: u16) -> Result<u8, Self::Error>;

    /// Write `value` at `addr`.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), Self::Error>;

    /// Read a little-endian 16-bit word at `addr`/`addr+1` (wrapping at the
    /// 64KiB boundary, not within a page — used for vector reads and
    /// absolute-indirect addressing, neither of which carries the NMOS
    /// zero-page-style wraparound bug).
    fn read_u16(&mut self, addr: u16) -> Result<u16, Self::Error> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }
}
