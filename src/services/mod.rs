//! Host platform services (document save, print, clipboard)

mod host;
mod traits;

pub use host::HostServices;
pub use traits::{PlatformError, PlatformServices};

#[cfg(test)]
pub use traits::MockPlatformServices;
