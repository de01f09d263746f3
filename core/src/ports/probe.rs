//! Port probe port (interface).

/// Port for checking whether a local TCP port has a listener.
///
/// Implementations must open at most one short-lived connection per call
/// and release it before returning.
pub trait PortProbe: Send + Sync {
    /// Returns true if something on the local loopback interface accepted
    /// a connection on `port`.
    fn is_listening(&self, port: u16) -> bool;
}

impl<P: PortProbe + ?Sized> PortProbe for &P {
    fn is_listening(&self, port: u16) -> bool {
        (**self).is_listening(port)
    }
}
